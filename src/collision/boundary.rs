use crate::core::body::Body;
use crate::core::registry::BodyRegistry;

/// Reflects body velocities at the edges of the rectangular arena
/// [0, width] x [0, height].
///
/// Containment is by velocity reversal only: positions are never clamped,
/// so a fast body can still sit outside the rectangle for a few ticks while
/// its reversed velocity brings it back.
#[derive(Debug, Clone, Copy)]
pub struct BoundaryReflector {
    pub width: f32,
    pub height: f32,
    /// Margin that triggers reflection slightly before true edge contact.
    pub min_distance: f32,
}

impl BoundaryReflector {
    pub fn new(width: f32, height: f32, min_distance: f32) -> Self {
        Self {
            width,
            height,
            min_distance,
        }
    }

    /// Flips the velocity component on any axis where the body's envelope
    /// reaches within `min_distance` of an edge. Low and high edges are
    /// checked independently in the same pass, so a body spanning the whole
    /// extent on one axis reflects twice there.
    pub fn reflect(&self, body: &mut Body) {
        if body.position.x - body.radius <= self.min_distance {
            body.velocity.x = -body.velocity.x;
        }
        if body.position.x + body.radius >= self.width - self.min_distance {
            body.velocity.x = -body.velocity.x;
        }
        if body.position.y - body.radius <= self.min_distance {
            body.velocity.y = -body.velocity.y;
        }
        if body.position.y + body.radius >= self.height - self.min_distance {
            body.velocity.y = -body.velocity.y;
        }
    }

    pub fn step(&self, bodies: &mut BodyRegistry) {
        for body in bodies.iter_mut() {
            self.reflect(body);
        }
    }
}
