//! Agent type definitions and related data structures.
//!
//! This module contains the per-actor results reported back to the driver
//! and the random number streams the actors draw from.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// Random stream reserved for the bartender
pub const BARTENDER_STREAM: u64 = 1;

/// Random stream for philosopher `id`
pub fn philosopher_stream(id: usize) -> u64 {
    2 + id as u64
}

/// Build an actor's random number generator.
///
/// With a seed, each stream is derived deterministically from it;
/// without one, the generator is seeded from system entropy.
pub fn actor_rng(seed: Option<u64>, stream: u64) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(stream.wrapping_mul(0x9E37_79B9_7F4A_7C15))),
        None => StdRng::from_entropy(),
    }
}

/// One consumption burst: how much was wanted and how it was served
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Burst {
    /// Drinks the philosopher was thirsty for
    pub need: u32,
    /// Drinks actually taken; equals `need` unless the philosopher is isolated
    pub taken: u32,
    /// Number of bottles that contributed (a bottle may contribute twice)
    pub draws: u32,
}

/// What a philosopher did over its whole lifetime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhilosopherReport {
    pub id: usize,
    pub name: String,
    pub cycles_completed: u32,
    pub bursts: Vec<Burst>,
}

impl PhilosopherReport {
    pub fn new(id: usize, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            cycles_completed: 0,
            bursts: Vec::new(),
        }
    }

    /// Total drinks taken across every burst
    pub fn total_drinks(&self) -> u64 {
        self.bursts.iter().map(|b| u64::from(b.taken)).sum()
    }

    /// Returns true if every burst was fully served
    pub fn is_satisfied(&self) -> bool {
        self.bursts.iter().all(|b| b.taken == b.need)
    }
}
