pub mod bounds;
pub mod command;
pub mod dispatcher;
