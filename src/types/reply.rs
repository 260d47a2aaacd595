use std::fmt;
use std::fmt::Display;

use crate::types::direction::Direction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub current_floor: i32,
    pub direction: Direction,
    pub onboard: usize,
    pub stops: Vec<i32>,
}

impl Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "floor={} direction={} onboard={}",
            self.current_floor, self.direction, self.onboard
        )?;
        if !self.stops.is_empty() {
            let stops: Vec<String> = self.stops.iter().map(|s| s.to_string()).collect();
            write!(f, " stops={}", stops.join(","))?;
        }
        Ok(())
    }
}
