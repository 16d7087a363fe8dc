//! Application layer: ports and the orchestration use cases.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
