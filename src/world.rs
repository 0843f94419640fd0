use log::debug;

use crate::collision::{BoundaryReflector, CollisionResolver};
use crate::config::SimConfig;
use crate::core::body::Body;
use crate::core::registry::BodyRegistry;
use crate::dynamics::integrator::Integrator;
use crate::utils::logging::ScopedTimer;

/// Central simulation container orchestrating the per-tick passes.
///
/// The world owns the registry exclusively and mutates it in place; callers
/// feed it a body set, step it once per frame, and read positions back
/// between ticks. Each tick advances exactly one fixed timestep regardless
/// of wall-clock time, so the physics is reproducible independent of
/// rendering cost.
pub struct SimWorld {
    pub bodies: BodyRegistry,
    pub integrator: Integrator,
    pub resolver: CollisionResolver,
    pub boundary: BoundaryReflector,
    config: SimConfig,
    ticks: u64,
}

impl SimWorld {
    /// Builds an empty world from the given configuration.
    ///
    /// The configuration is taken as-is; use [`SimConfig::validate`] (or the
    /// [`crate::Simulation`] wrapper, which does) when the values come from
    /// untrusted input.
    pub fn new(config: SimConfig) -> Self {
        Self {
            bodies: BodyRegistry::new(),
            integrator: Integrator::new(config.timestep),
            resolver: CollisionResolver::new(config.dampening),
            boundary: BoundaryReflector::new(
                config.boundary_width,
                config.boundary_height,
                config.min_distance,
            ),
            config,
            ticks: 0,
        }
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Populates the registry from an externally generated body set.
    pub fn populate(&mut self, bodies: Vec<Body>) {
        self.bodies.replace(bodies);
    }

    /// Discards the current bodies, adopts a freshly generated set, and
    /// restarts the tick count.
    pub fn reset(&mut self, bodies: Vec<Body>) {
        debug!(
            "reset: {} bodies replaced by {}",
            self.bodies.len(),
            bodies.len()
        );
        self.bodies.replace(bodies);
        self.ticks = 0;
    }

    /// Read-only snapshot for a renderer to consume between ticks.
    pub fn bodies(&self) -> &[Body] {
        self.bodies.as_slice()
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Completed ticks since creation or the last reset.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Advances the simulation by exactly one fixed timestep: integration,
    /// then pairwise collision resolution, then boundary reflection. Later
    /// passes read the state the earlier passes just wrote, so the order is
    /// fixed.
    pub fn step(&mut self) {
        {
            let _timer = ScopedTimer::new("integrator");
            self.integrator.step(&mut self.bodies);
        }
        {
            let _timer = ScopedTimer::new("collision::resolve");
            self.resolver.step(&mut self.bodies);
        }
        {
            let _timer = ScopedTimer::new("boundary::reflect");
            self.boundary.step(&mut self.bodies);
        }
        self.ticks += 1;
    }
}
