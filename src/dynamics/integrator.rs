use crate::core::body::Body;
use crate::core::registry::BodyRegistry;

/// Integrator responsible for stepping bodies forward in time.
///
/// Semi-implicit Euler: velocity is advanced first, then position from the
/// just-updated velocity. Each body is independent at this stage.
#[derive(Debug, Clone, Copy)]
pub struct Integrator {
    pub dt: f32,
}

impl Integrator {
    pub fn new(dt: f32) -> Self {
        Self { dt }
    }

    pub fn integrate(&self, body: &mut Body) {
        body.velocity += body.acceleration * self.dt;
        body.position += body.velocity * self.dt;
    }

    /// Advances every body in the registry by one timestep.
    pub fn step(&self, bodies: &mut BodyRegistry) {
        for body in bodies.iter_mut() {
            self.integrate(body);
        }
    }
}
