//! Simulation dynamics: fixed-timestep integration of body motion.

pub mod integrator;

pub use integrator::Integrator;
