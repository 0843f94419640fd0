//! Rejection-sampling body generation for seeding or resetting a world.
//!
//! The spawner is a collaborator of the core, not part of it: stepping a
//! world never consults randomness, and the world only ever receives the
//! finished `Vec<Body>`.

use std::fmt;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::config::{SimConfig, DEFAULT_ACCELERATION};
use crate::core::body::Body;

/// Attempts allowed per requested body before generation gives up.
pub const DEFAULT_RETRY_BUDGET: u32 = 10_000;

/// Sampling ranges for spawned bodies.
#[derive(Debug, Clone, Copy)]
pub struct SpawnRanges {
    pub mass: (f32, f32),
    pub radius: (f32, f32),
    /// Velocity is sampled per axis in [-speed, speed].
    pub speed: f32,
    /// Positions are sampled at least this far from every edge.
    pub edge_inset: f32,
}

impl Default for SpawnRanges {
    fn default() -> Self {
        Self {
            mass: (10.0, 100.0),
            radius: (10.0, 50.0),
            speed: 100.0,
            edge_inset: 100.0,
        }
    }
}

/// Deterministic generator of non-overlapping bodies.
///
/// Candidates are drawn uniformly and rejected while they overlap an
/// already placed body. The attempt budget keeps a too-dense request from
/// looping forever; the same seed always reproduces the same body set.
pub struct Spawner {
    rng: Pcg32,
    ranges: SpawnRanges,
    retry_budget: u32,
}

impl Spawner {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            ranges: SpawnRanges::default(),
            retry_budget: DEFAULT_RETRY_BUDGET,
        }
    }

    pub fn with_ranges(mut self, ranges: SpawnRanges) -> Self {
        self.ranges = ranges;
        self
    }

    pub fn with_retry_budget(mut self, budget: u32) -> Self {
        self.retry_budget = budget;
        self
    }

    /// Generates `count` mutually non-overlapping bodies inside the
    /// configured boundary, each carrying the default constant
    /// acceleration.
    pub fn generate(&mut self, config: &SimConfig, count: usize) -> Result<Vec<Body>, SpawnError> {
        let inset = self.ranges.edge_inset;
        let max_x = config.boundary_width - inset;
        let max_y = config.boundary_height - inset;
        if max_x <= inset || max_y <= inset {
            return Err(SpawnError::BoundaryTooSmall {
                width: config.boundary_width,
                height: config.boundary_height,
                edge_inset: inset,
            });
        }

        let mut bodies: Vec<Body> = Vec::with_capacity(count);
        let mut attempts_left = self
            .retry_budget
            .saturating_mul(count.max(1) as u32);

        while bodies.len() < count {
            if attempts_left == 0 {
                return Err(SpawnError::RetryBudgetExhausted {
                    placed: bodies.len(),
                    requested: count,
                });
            }
            attempts_left -= 1;

            let position = Vec2::new(
                self.rng.random_range(inset..max_x),
                self.rng.random_range(inset..max_y),
            );
            let velocity = Vec2::new(
                self.rng.random_range(-self.ranges.speed..self.ranges.speed),
                self.rng.random_range(-self.ranges.speed..self.ranges.speed),
            );
            let mass = self.rng.random_range(self.ranges.mass.0..self.ranges.mass.1);
            let radius = self
                .rng
                .random_range(self.ranges.radius.0..self.ranges.radius.1);

            let candidate = Body::new(position, velocity, mass, radius)
                .with_acceleration(Vec2::from_slice(&DEFAULT_ACCELERATION));

            if bodies.iter().any(|placed| placed.overlaps(&candidate)) {
                continue;
            }
            bodies.push(candidate);
        }

        Ok(bodies)
    }
}

/// Errors produced while generating bodies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpawnError {
    /// The boundary cannot fit the configured edge inset.
    BoundaryTooSmall {
        width: f32,
        height: f32,
        edge_inset: f32,
    },
    /// The attempt budget ran out before every body was placed.
    RetryBudgetExhausted { placed: usize, requested: usize },
}

impl fmt::Display for SpawnError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::BoundaryTooSmall {
                width,
                height,
                edge_inset,
            } => write!(
                f,
                "boundary {width} x {height} leaves no room inside an edge inset of {edge_inset}"
            ),
            Self::RetryBudgetExhausted { placed, requested } => write!(
                f,
                "retry budget exhausted after placing {placed} of {requested} bodies"
            ),
        }
    }
}

impl std::error::Error for SpawnError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawned_bodies_are_valid_in_bounds_and_disjoint() {
        let config = SimConfig::default();
        let bodies = Spawner::new(42)
            .generate(&config, 32)
            .expect("default arena fits 32 bodies");

        assert_eq!(bodies.len(), 32);
        for body in &bodies {
            body.validate().expect("spawned body satisfies invariants");
            assert!(body.position.x >= 100.0 && body.position.x <= config.boundary_width - 100.0);
            assert!(body.position.y >= 100.0 && body.position.y <= config.boundary_height - 100.0);
        }
        for i in 0..bodies.len() {
            for j in (i + 1)..bodies.len() {
                assert!(
                    !bodies[i].overlaps(&bodies[j]),
                    "bodies {i} and {j} overlap at spawn"
                );
            }
        }
    }

    #[test]
    fn same_seed_reproduces_the_same_set() {
        let config = SimConfig::default();
        let first = Spawner::new(7).generate(&config, 16).unwrap();
        let second = Spawner::new(7).generate(&config, 16).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn impossible_packing_exhausts_the_budget() {
        let mut config = SimConfig::default();
        config.boundary_width = 300.0;
        config.boundary_height = 300.0;

        let result = Spawner::new(1)
            .with_retry_budget(50)
            .generate(&config, 50);

        assert!(matches!(
            result,
            Err(SpawnError::RetryBudgetExhausted { .. })
        ));
    }

    #[test]
    fn undersized_boundary_is_rejected_up_front() {
        let mut config = SimConfig::default();
        config.boundary_width = 150.0;
        config.boundary_height = 150.0;

        let result = Spawner::new(1).generate(&config, 1);
        assert!(matches!(result, Err(SpawnError::BoundaryTooSmall { .. })));
    }
}
