#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Floor {
    floor_number: i32,
}

impl Floor {
    pub fn new(floor_number: i32) -> Self {
        Self { floor_number }
    }

    pub fn floor_number(&self) -> i32 {
        self.floor_number
    }
}
