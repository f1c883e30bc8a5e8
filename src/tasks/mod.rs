//! Background task layer: dispatch and response messages.

pub mod messages;
pub mod runner;

pub use messages::TaskResponse;
pub use runner::TaskRunner;
