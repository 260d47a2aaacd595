use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("floor {floor} is outside the building (floors 0..{floors})")]
    InvalidFloor { floor: i32, floors: usize },
}
