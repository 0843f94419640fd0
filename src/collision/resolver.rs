use crate::core::body::Body;
use crate::core::registry::BodyRegistry;

/// Resolves overlapping body pairs with a damped center-of-mass response.
///
/// Detection is a full O(n²) scan with no broad-phase pruning. The response
/// operates on raw axis velocities rather than a collision-normal
/// decomposition; this keeps momentum exactly while dissipating relative
/// velocity by the dampening factor.
#[derive(Debug, Clone, Copy)]
pub struct CollisionResolver {
    pub dampening: f32,
}

impl CollisionResolver {
    pub fn new(dampening: f32) -> Self {
        Self { dampening }
    }

    /// Scans every unordered pair once, in index order, resolving overlaps
    /// as they are found. Later pairs observe velocities already updated by
    /// earlier pairs; this sequential ordering is part of the model.
    pub fn step(&self, bodies: &mut BodyRegistry) {
        let count = bodies.len();
        for i in 0..count {
            for j in (i + 1)..count {
                let Some((a, b)) = bodies.pair_mut(i, j) else {
                    continue;
                };
                if a.overlaps(b) {
                    self.resolve(a, b);
                }
            }
        }
    }

    /// Damped reflection of both velocities about the pair's center-of-mass
    /// velocity, applied independently per axis. Positions are left alone,
    /// so overlapping bodies may interpenetrate until their updated
    /// velocities carry them apart.
    pub fn resolve(&self, a: &mut Body, b: &mut Body) {
        debug_assert!(
            a.mass > 0.0 && b.mass > 0.0,
            "non-positive mass reached the collision resolver"
        );
        debug_assert!(
            a.radius > 0.0 && b.radius > 0.0,
            "non-positive radius reached the collision resolver"
        );

        let total_mass = a.mass + b.mass;
        let v_com = (a.velocity * a.mass + b.velocity * b.mass) / total_mass;
        let relative = a.velocity - b.velocity;

        a.velocity = v_com - relative * (self.dampening * b.mass / total_mass);
        b.velocity = v_com + relative * (self.dampening * a.mass / total_mass);
    }
}
