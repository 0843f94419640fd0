//! Core types describing simulated bodies and their storage.

pub mod body;
pub mod registry;

pub use body::{Body, BodyError};
pub use registry::BodyRegistry;
