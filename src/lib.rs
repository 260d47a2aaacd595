pub mod building;
pub mod config;
pub mod elevator;
pub mod error;
pub mod services;
pub mod types;

pub use building::Building;
pub use elevator::Elevator;
pub use error::DispatchError;
pub use types::direction::Direction;
pub use types::floor::Floor;
pub use types::passenger::Passenger;
pub use types::reply::Reply;
pub use types::request::Request;
