//! Simulation configuration and default tuning constants.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Default integration timestep (in seconds).
pub const DEFAULT_TIME_STEP: f32 = 0.016;

/// Default dampening coefficient applied to collision responses.
pub const DEFAULT_DAMPENING: f32 = 0.95;

/// Default margin at which boundary reflection triggers.
pub const DEFAULT_MIN_DISTANCE: f32 = 5.0;

/// Default boundary rectangle extent along X.
pub const DEFAULT_BOUNDARY_WIDTH: f32 = 4000.0;

/// Default boundary rectangle extent along Y.
pub const DEFAULT_BOUNDARY_HEIGHT: f32 = 3000.0;

/// Default constant acceleration assigned to spawned bodies (Y-down).
pub const DEFAULT_ACCELERATION: [f32; 2] = [0.0, 9.0];

/// Tuning parameters for one simulation instance.
///
/// Every instance carries its own copy, so multiple worlds with different
/// tuning can coexist in one process.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Fixed timestep advanced per tick (seconds). Must be positive.
    pub timestep: f32,
    /// Fraction of relative velocity retained after a collision, in (0, 1].
    pub dampening: f32,
    /// Boundary rectangle extent along X. Must be positive.
    pub boundary_width: f32,
    /// Boundary rectangle extent along Y. Must be positive.
    pub boundary_height: f32,
    /// Margin that triggers reflection slightly before true edge contact.
    /// Must be non-negative and below half the smaller boundary extent.
    pub min_distance: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            timestep: DEFAULT_TIME_STEP,
            dampening: DEFAULT_DAMPENING,
            boundary_width: DEFAULT_BOUNDARY_WIDTH,
            boundary_height: DEFAULT_BOUNDARY_HEIGHT,
            min_distance: DEFAULT_MIN_DISTANCE,
        }
    }
}

impl SimConfig {
    /// Checks that every field lies in its documented domain.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.timestep > 0.0) {
            return Err(ConfigError::NonPositiveTimestep(self.timestep));
        }
        if !(self.dampening > 0.0 && self.dampening <= 1.0) {
            return Err(ConfigError::DampeningOutOfRange(self.dampening));
        }
        if !(self.boundary_width > 0.0 && self.boundary_height > 0.0) {
            return Err(ConfigError::NonPositiveExtent {
                width: self.boundary_width,
                height: self.boundary_height,
            });
        }
        let limit = self.boundary_width.min(self.boundary_height) / 2.0;
        if !(self.min_distance >= 0.0 && self.min_distance < limit) {
            return Err(ConfigError::MarginOutOfRange {
                min_distance: self.min_distance,
                limit,
            });
        }
        Ok(())
    }
}

/// Out-of-domain configuration values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    NonPositiveTimestep(f32),
    DampeningOutOfRange(f32),
    NonPositiveExtent { width: f32, height: f32 },
    MarginOutOfRange { min_distance: f32, limit: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::NonPositiveTimestep(dt) => write!(f, "timestep must be positive, got {dt}"),
            Self::DampeningOutOfRange(d) => {
                write!(f, "dampening must lie in (0, 1], got {d}")
            }
            Self::NonPositiveExtent { width, height } => {
                write!(f, "boundary extents must be positive, got {width} x {height}")
            }
            Self::MarginOutOfRange { min_distance, limit } => write!(
                f,
                "min_distance must lie in [0, {limit}), got {min_distance}"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
