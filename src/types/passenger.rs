/// A rider, identified only by where they boarded, where they are going and
/// when they asked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passenger {
    desired_floor: i32,
    origin_floor: i32,
    request_time: i64,
}

impl Passenger {
    pub fn new(desired_floor: i32, origin_floor: i32, request_time: i64) -> Self {
        Self {
            desired_floor,
            origin_floor,
            request_time,
        }
    }

    pub fn desired_floor(&self) -> i32 {
        self.desired_floor
    }

    pub fn origin_floor(&self) -> i32 {
        self.origin_floor
    }

    pub fn request_time(&self) -> i64 {
        self.request_time
    }
}
