use chrono::Utc;

use crate::config::Config;
use crate::elevator::Elevator;
use crate::error::DispatchError;
use crate::types::floor::Floor;
use crate::types::passenger::Passenger;

/// Floors `0..n` served by one elevator.
///
/// The elevator itself accepts any floor. `request_floor` and `board` are
/// the checked entry points that hold requests to the building's height.
#[derive(Debug)]
pub struct Building {
    floors: Vec<Floor>,
    elevator: Elevator,
}

impl Building {
    pub fn new(floor_count: usize) -> Self {
        Self::with_elevator(
            floor_count,
            Elevator::new("Model1", "Inspector", Utc::now()),
        )
    }

    pub fn with_elevator(floor_count: usize, elevator: Elevator) -> Self {
        let floors = (0..floor_count)
            .map(|n| Floor::new(n as i32))
            .collect();
        Self { floors, elevator }
    }

    pub fn from_config(config: &Config) -> Self {
        let elevator = Elevator::new(
            config.elevator.model.clone(),
            config.elevator.inspected_by.clone(),
            config.elevator.inspection_date.unwrap_or_else(Utc::now),
        );
        Self::with_elevator(config.building.floors, elevator)
    }

    pub fn floor(&self, floor_number: i32) -> Option<&Floor> {
        usize::try_from(floor_number)
            .ok()
            .and_then(|i| self.floors.get(i))
    }

    pub fn floors(&self) -> &[Floor] {
        &self.floors
    }

    pub fn elevator(&self) -> &Elevator {
        &self.elevator
    }

    pub fn elevator_mut(&mut self) -> &mut Elevator {
        &mut self.elevator
    }

    pub fn check_floor(&self, floor: i32) -> Result<(), DispatchError> {
        match self.floor(floor) {
            Some(_) => Ok(()),
            None => Err(DispatchError::InvalidFloor {
                floor,
                floors: self.floors.len(),
            }),
        }
    }

    pub fn request_floor(&mut self, floor: i32) -> Result<(), DispatchError> {
        self.check_floor(floor)?;
        self.elevator.add_target_floor(floor);
        Ok(())
    }

    pub fn board(&mut self, passenger: Passenger) -> Result<(), DispatchError> {
        self.check_floor(passenger.origin_floor())?;
        self.check_floor(passenger.desired_floor())?;
        self.elevator.add_passenger(passenger);
        Ok(())
    }
}
