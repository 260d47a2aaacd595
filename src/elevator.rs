use chrono::{DateTime, Utc};
use log::{debug, trace};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::types::direction::Direction;
use crate::types::passenger::Passenger;

/// A single car and its two pending-floor queues.
///
/// Floors above the car at insertion time go to `up_queue` (served
/// lowest-first), floors below go to `down_queue` (served highest-first).
/// `direction` is derived from queue occupancy after every mutation.
#[derive(Debug)]
pub struct Elevator {
    model: String,
    inspected_by: String,
    inspection_date: DateTime<Utc>,
    current_floor: i32,
    direction: Direction,
    up_queue: BinaryHeap<Reverse<i32>>,
    down_queue: BinaryHeap<i32>,
    passengers: Vec<Passenger>,
}

impl Elevator {
    pub fn new(
        model: impl Into<String>,
        inspected_by: impl Into<String>,
        inspection_date: DateTime<Utc>,
    ) -> Self {
        Self {
            model: model.into(),
            inspected_by: inspected_by.into(),
            inspection_date,
            current_floor: 0,
            direction: Direction::None,
            up_queue: BinaryHeap::new(),
            down_queue: BinaryHeap::new(),
            passengers: Vec::new(),
        }
    }

    pub fn current_floor(&self) -> i32 {
        self.current_floor
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn inspected_by(&self) -> &str {
        &self.inspected_by
    }

    pub fn inspection_date(&self) -> DateTime<Utc> {
        self.inspection_date
    }

    pub fn passengers(&self) -> &[Passenger] {
        &self.passengers
    }

    /// Pending upward stops in visit order.
    pub fn pending_up(&self) -> Vec<i32> {
        let mut floors: Vec<i32> = self.up_queue.iter().map(|&Reverse(f)| f).collect();
        floors.sort_unstable();
        floors
    }

    /// Pending downward stops in visit order.
    pub fn pending_down(&self) -> Vec<i32> {
        let mut floors: Vec<i32> = self.down_queue.iter().copied().collect();
        floors.sort_unstable_by(|a, b| b.cmp(a));
        floors
    }

    pub fn is_idle(&self) -> bool {
        self.up_queue.is_empty() && self.down_queue.is_empty()
    }

    /// Queue `floor` relative to where the car is now. A request for the
    /// current floor is an instant arrival: riders bound here get off.
    pub fn add_target_floor(&mut self, floor: i32) {
        if floor > self.current_floor {
            trace!("queue {floor} up from {}", self.current_floor);
            self.up_queue.push(Reverse(floor));
        } else if floor < self.current_floor {
            trace!("queue {floor} down from {}", self.current_floor);
            self.down_queue.push(floor);
        } else {
            self.drop_off();
        }
        self.update_direction();
    }

    /// Boards before registering the destination, so a rider asking for the
    /// current floor leaves again within the same call.
    pub fn add_passenger(&mut self, passenger: Passenger) {
        let desired = passenger.desired_floor();
        self.passengers.push(passenger);
        self.add_target_floor(desired);
    }

    /// Serve both queues until empty and return the floors stopped at.
    pub fn drain(&mut self) -> Vec<i32> {
        let mut stops = Vec::new();
        while !self.is_idle() {
            let next = match self.direction {
                Direction::Up => self.up_queue.pop().map(|Reverse(f)| f),
                Direction::Down => self.down_queue.pop(),
                Direction::None => None,
            };
            match next {
                Some(floor) => {
                    self.current_floor = floor;
                    stops.push(floor);
                    self.drop_off();
                }
                None => {
                    // direction out of step with the queues; resync or stop
                    self.update_direction();
                    if self.direction == Direction::None {
                        break;
                    }
                    continue;
                }
            }
            self.update_direction();
        }
        stops
    }

    fn update_direction(&mut self) {
        self.direction = if !self.up_queue.is_empty() {
            Direction::Up
        } else if !self.down_queue.is_empty() {
            Direction::Down
        } else {
            Direction::None
        };
    }

    fn drop_off(&mut self) {
        let floor = self.current_floor;
        let before = self.passengers.len();
        self.passengers.retain(|p| p.desired_floor() != floor);
        let left = before - self.passengers.len();
        if left > 0 {
            debug!("{left} passenger(s) left at floor {floor}");
        }
    }
}
