pub mod direction;
pub mod floor;
pub mod passenger;
pub mod reply;
pub mod request;
