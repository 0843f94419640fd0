//! Utility helpers shared across the simulation modules.

pub mod logging;

pub use logging::ScopedTimer;
