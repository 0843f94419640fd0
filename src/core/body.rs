use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Circular point-mass particle, the sole simulated entity.
///
/// Bodies are plain value records: the registry index is their only
/// identity, and nothing outside velocity and position is mutated by the
/// simulation passes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Externally supplied; constant during a run unless replaced.
    pub acceleration: Vec2,
    pub mass: f32,
    pub radius: f32,
}

impl Default for Body {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            mass: 1.0,
            radius: 1.0,
        }
    }
}

impl Body {
    pub fn new(position: Vec2, velocity: Vec2, mass: f32, radius: f32) -> Self {
        Self {
            position,
            velocity,
            acceleration: Vec2::ZERO,
            mass,
            radius,
        }
    }

    pub fn with_acceleration(mut self, acceleration: Vec2) -> Self {
        self.acceleration = acceleration;
        self
    }

    /// Checks the invariants expected of externally supplied bodies.
    ///
    /// The simulation passes assume these hold and do not re-check them per
    /// tick; callers feeding the world from untrusted input should validate
    /// up front.
    pub fn validate(&self) -> Result<(), BodyError> {
        if !(self.mass > 0.0) {
            return Err(BodyError::NonPositiveMass(self.mass));
        }
        if !(self.radius > 0.0) {
            return Err(BodyError::NonPositiveRadius(self.radius));
        }
        Ok(())
    }

    /// Squared center distance to another body.
    pub fn distance_squared(&self, other: &Body) -> f32 {
        self.position.distance_squared(other.position)
    }

    /// True when the circular envelopes touch or overlap.
    pub fn overlaps(&self, other: &Body) -> bool {
        let reach = self.radius + other.radius;
        self.distance_squared(other) <= reach * reach
    }
}

/// Precondition violations on externally supplied bodies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BodyError {
    NonPositiveMass(f32),
    NonPositiveRadius(f32),
}

impl fmt::Display for BodyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::NonPositiveMass(mass) => write!(f, "body mass must be positive, got {mass}"),
            Self::NonPositiveRadius(radius) => {
                write!(f, "body radius must be positive, got {radius}")
            }
        }
    }
}

impl std::error::Error for BodyError {}
