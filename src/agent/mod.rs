//! Simulation actors: the philosophers and the bartender.

pub mod types;
pub mod philosopher;
pub mod bartender;

pub use types::{actor_rng, philosopher_stream, Burst, PhilosopherReport, BARTENDER_STREAM};
pub use philosopher::Philosopher;
pub use bartender::Bartender;
