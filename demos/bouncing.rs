use particle_arena::*;

fn main() {
    let config = SimConfig::default();
    let mut sim = Simulation::new(config).expect("default config is valid");

    let bodies = Spawner::new(42)
        .generate(&config, 32)
        .expect("arena fits 32 bodies");
    sim.populate(bodies);

    // Ten simulated seconds at the default timestep.
    for _ in 0..625 {
        sim.step();
    }

    println!("after {} ticks:", sim.ticks());
    for (index, body) in sim.bodies().iter().enumerate() {
        println!(
            "  body {index:2}: pos ({:7.1}, {:7.1})  vel ({:6.1}, {:6.1})",
            body.position.x, body.position.y, body.velocity.x, body.velocity.y
        );
    }
}
