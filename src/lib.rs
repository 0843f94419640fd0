//! Particle Arena – a deterministic 2-D particle physics core.
//!
//! Circular bodies advance under fixed-timestep kinematics, exchange
//! momentum through damped pairwise collisions, and reflect off a
//! rectangular boundary. Rendering, input handling, and body generation
//! stay outside the core: callers hand the world a body set, step it once
//! per frame, and pull a read-only snapshot afterwards.

pub mod collision;
pub mod config;
pub mod core;
pub mod dynamics;
pub mod spawn;
pub mod utils;
pub mod world;

pub use glam::Vec2;

pub use crate::collision::{BoundaryReflector, CollisionResolver};
pub use crate::config::{ConfigError, SimConfig};
pub use crate::core::{Body, BodyError, BodyRegistry};
pub use crate::dynamics::Integrator;
pub use crate::spawn::{SpawnError, SpawnRanges, Spawner};
pub use crate::world::SimWorld;

/// High-level convenience wrapper that owns a [`SimWorld`].
pub struct Simulation {
    world: SimWorld,
}

impl Simulation {
    /// Creates an empty simulation after validating the configuration.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            world: SimWorld::new(config),
        })
    }

    /// Populates the world from an externally generated body set.
    pub fn populate(&mut self, bodies: Vec<Body>) {
        self.world.populate(bodies);
    }

    /// Advances the simulation by one fixed timestep.
    pub fn step(&mut self) {
        self.world.step();
    }

    /// Replaces the body set and restarts the tick count.
    pub fn reset(&mut self, bodies: Vec<Body>) {
        self.world.reset(bodies);
    }

    /// Read-only view of the current bodies.
    pub fn bodies(&self) -> &[Body] {
        self.world.bodies()
    }

    /// Completed ticks since creation or the last reset.
    pub fn ticks(&self) -> u64 {
        self.world.ticks()
    }

    /// Direct access to the underlying world.
    pub fn world(&self) -> &SimWorld {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut SimWorld {
        &mut self.world
    }
}
