use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::bottle::DEFAULT_CAPACITY;

/// Default number of work cycles per philosopher
pub const DEFAULT_CYCLES: u32 = 10;
/// Default chance that an edge exists between two philosophers (N > 2)
pub const DEFAULT_EDGE_PROBABILITY: f64 = 0.5;

/// Inclusive range of whole numbers (drinks or time units)
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct UnitRange {
    pub min: u32,
    pub max: u32,
}

impl UnitRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Draw a value uniformly from `min..=max`
    pub fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        rng.gen_range(self.min..=self.max)
    }
}

/// Top-level simulation configuration that mirrors the YAML file
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of philosophers; prompted for when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agents: Option<usize>,
    /// Work cycles each philosopher performs before leaving
    pub cycles: u32,
    /// Drinks in a full bottle
    pub bottle_capacity: u32,
    /// How many drinks a thirsty philosopher wants
    pub thirst: UnitRange,
    /// Tranquil period between bursts, in time units
    pub idle_units: UnitRange,
    /// Time the bartender spends refilling one bottle, in time units
    pub refill_units: UnitRange,
    /// Bartender pause between full scans, in time units
    pub scan_interval_units: u32,
    /// Wall-clock length of one time unit (e.g. "1s", "10ms")
    #[serde(with = "humantime_serde")]
    pub time_unit: Duration,
    /// Chance that any given pair shares a bottle
    pub edge_probability: f64,
    /// Seed for reproducible topologies and actor randomness
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            agents: None,
            cycles: DEFAULT_CYCLES,
            bottle_capacity: DEFAULT_CAPACITY,
            thirst: UnitRange::new(1, 10),
            idle_units: UnitRange::new(1, 5),
            refill_units: UnitRange::new(1, 3),
            scan_interval_units: 1,
            time_unit: Duration::from_secs(1),
            edge_probability: DEFAULT_EDGE_PROBABILITY,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.bottle_capacity == 0 {
            return Err(ValidationError::InvalidBottle(
                "bottle_capacity must be at least 1".to_string(),
            ));
        }

        if self.thirst.min == 0 {
            return Err(ValidationError::InvalidRange {
                field: "thirst",
                reason: "a thirsty philosopher wants at least 1 drink".to_string(),
            });
        }

        for (field, range) in [
            ("thirst", &self.thirst),
            ("idle_units", &self.idle_units),
            ("refill_units", &self.refill_units),
        ] {
            if range.min > range.max {
                return Err(ValidationError::InvalidRange {
                    field,
                    reason: format!("min {} is greater than max {}", range.min, range.max),
                });
            }
        }

        if !(0.0..=1.0).contains(&self.edge_probability) {
            return Err(ValidationError::InvalidTopology(format!(
                "edge_probability {} is outside [0, 1]",
                self.edge_probability
            )));
        }

        if self.time_unit.is_zero() {
            return Err(ValidationError::InvalidTiming(
                "time_unit must be greater than zero".to_string(),
            ));
        }

        let longest = self
            .idle_units
            .max
            .max(self.refill_units.max)
            .max(self.scan_interval_units);
        if self.time_unit.checked_mul(longest).is_none() {
            return Err(ValidationError::InvalidTiming(format!(
                "time_unit {:?} times {} units does not fit in a duration",
                self.time_unit, longest
            )));
        }

        Ok(())
    }

    /// Wall-clock duration of `units` time units
    ///
    /// Saturates at `Duration::MAX`; `validate` rejects configurations
    /// where that could happen.
    pub fn units(&self, units: u32) -> Duration {
        self.time_unit.checked_mul(units).unwrap_or(Duration::MAX)
    }
}

/// Configuration validation errors
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ValidationError {
    #[error("Invalid bottle configuration: {0}")]
    InvalidBottle(String),
    #[error("Invalid range for {field}: {reason}")]
    InvalidRange { field: &'static str, reason: String },
    #[error("Invalid topology configuration: {0}")]
    InvalidTopology(String),
    #[error("Invalid timing configuration: {0}")]
    InvalidTiming(String),
}
