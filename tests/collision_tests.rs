use approx::assert_relative_eq;
use particle_arena::*;

fn body(x: f32, y: f32, vx: f32, vy: f32, mass: f32, radius: f32) -> Body {
    Body::new(Vec2::new(x, y), Vec2::new(vx, vy), mass, radius)
}

#[test]
fn equal_mass_head_on_pair_swaps_velocities_scaled_by_dampening() {
    // Two 10-unit-radius bodies 18 apart, closing head on. One full tick
    // integrates (zero acceleration, so velocities persist), detects the
    // overlap, and swaps the x velocities scaled by the 0.95 dampening.
    let mut world = SimWorld::new(SimConfig::default());
    world.populate(vec![
        body(100.0, 100.0, 10.0, 0.0, 10.0, 10.0),
        body(118.0, 100.0, -10.0, 0.0, 10.0, 10.0),
    ]);

    world.step();

    let bodies = world.bodies();
    assert_relative_eq!(bodies[0].velocity.x, -9.5, epsilon = 1e-4);
    assert_relative_eq!(bodies[1].velocity.x, 9.5, epsilon = 1e-4);
    assert_relative_eq!(bodies[0].velocity.y, 0.0, epsilon = 1e-4);
    assert_relative_eq!(bodies[1].velocity.y, 0.0, epsilon = 1e-4);
}

#[test]
fn separated_pair_is_untouched_by_the_resolver() {
    let a = body(100.0, 100.0, 10.0, 0.0, 10.0, 10.0);
    let b = body(130.0, 100.0, -10.0, 0.0, 10.0, 10.0);
    let mut registry = BodyRegistry::from_bodies(vec![a, b]);

    CollisionResolver::new(0.95).step(&mut registry);

    assert_eq!(registry.as_slice(), [a, b]);
}

#[test]
fn overlapping_chain_resolves_pairs_sequentially_in_index_order() {
    // Three bodies in a row where (0,1) and (1,2) overlap but (0,2) do not.
    // Pair (1,2) must see body 1's velocity as already updated by pair
    // (0,1); the exact end state below only falls out of that ordering.
    let mut registry = BodyRegistry::from_bodies(vec![
        body(100.0, 100.0, 10.0, 0.0, 10.0, 10.0),
        body(115.0, 100.0, 0.0, 0.0, 10.0, 10.0),
        body(130.0, 100.0, -10.0, 0.0, 10.0, 10.0),
    ]);

    CollisionResolver::new(1.0).step(&mut registry);

    let bodies = registry.as_slice();
    assert_eq!(bodies[0].velocity.x, 0.0);
    assert_eq!(bodies[1].velocity.x, -10.0);
    assert_eq!(bodies[2].velocity.x, 10.0);
}

#[test]
fn cluster_momentum_is_conserved_under_dampening() {
    let mut registry = BodyRegistry::from_bodies(vec![
        body(100.0, 100.0, 25.0, -5.0, 12.0, 10.0),
        body(112.0, 104.0, -8.0, 3.0, 30.0, 10.0),
        body(106.0, 92.0, 1.0, 14.0, 7.0, 10.0),
    ]);
    let momentum = |bodies: &[Body]| {
        bodies
            .iter()
            .fold(Vec2::ZERO, |sum, b| sum + b.velocity * b.mass)
    };
    let before = momentum(registry.as_slice());

    CollisionResolver::new(0.95).step(&mut registry);

    let after = momentum(registry.as_slice());
    assert_relative_eq!(before.x, after.x, epsilon = 1e-2);
    assert_relative_eq!(before.y, after.y, epsilon = 1e-2);
}

#[test]
fn collisions_leave_positions_alone() {
    let a = body(100.0, 100.0, 10.0, 0.0, 10.0, 10.0);
    let b = body(112.0, 100.0, -10.0, 0.0, 10.0, 10.0);
    let mut registry = BodyRegistry::from_bodies(vec![a, b]);

    CollisionResolver::new(0.95).step(&mut registry);

    assert_eq!(registry.get(0).unwrap().position, a.position);
    assert_eq!(registry.get(1).unwrap().position, b.position);
}

#[test]
fn body_reaching_the_right_edge_reflects_within_one_tick() {
    let mut world = SimWorld::new(SimConfig::default());
    world.populate(vec![body(3985.0, 1500.0, 100.0, 0.0, 10.0, 10.0)]);

    world.step();

    let reflected = &world.bodies()[0];
    assert_eq!(reflected.velocity.x, -100.0);
    assert_eq!(reflected.velocity.y, 0.0);
}

#[test]
fn boundary_pass_runs_after_the_collision_pass() {
    // A pair colliding right at the left wall: the resolver sends body 0
    // leftward, then the boundary pass flips it back rightward in the same
    // tick. If the passes ran in the other order the tick would end with a
    // leftward velocity.
    let mut world = SimWorld::new(SimConfig::default());
    world.populate(vec![
        body(14.0, 1500.0, 5.0, 0.0, 10.0, 10.0),
        body(32.0, 1500.0, -20.0, 0.0, 10.0, 10.0),
    ]);

    world.step();

    assert!(
        world.bodies()[0].velocity.x > 0.0,
        "wall body should leave the tick moving right, got {}",
        world.bodies()[0].velocity.x
    );
}
