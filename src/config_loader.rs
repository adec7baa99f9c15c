use crate::config::SimulationConfig;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use log::{info, warn};
use std::fs::File;
use std::path::Path;
use std::time::Duration;

/// Load and parse configuration from a YAML file
pub fn load_config(config_path: &Path) -> Result<SimulationConfig> {
    info!("Loading configuration from: {:?}", config_path);

    let file = File::open(config_path)
        .wrap_err_with(|| format!("Failed to open configuration '{}'", config_path.display()))?;

    let config: SimulationConfig = serde_yaml::from_reader(file)
        .wrap_err_with(|| format!("Failed to parse configuration '{}'", config_path.display()))?;

    config.validate()?;

    Ok(config)
}

/// CLI arguments that override YAML settings
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub agents: Option<usize>,
    pub cycles: Option<u32>,
    pub seed: Option<u64>,
    pub time_unit: Option<Duration>,
}

/// Apply CLI overrides to a simulation configuration
pub fn apply_overrides(config: &mut SimulationConfig, overrides: &CliOverrides) -> Result<()> {
    if let Some(agents) = overrides.agents {
        info!("Agent count overridden from command line: {}", agents);
        config.agents = Some(agents);
    }

    if let Some(cycles) = overrides.cycles {
        config.cycles = cycles;
    }

    if let Some(seed) = overrides.seed {
        config.seed = Some(seed);
    }

    if let Some(time_unit) = overrides.time_unit {
        config.time_unit = time_unit;
    }

    if config.agents.is_some_and(|n| n < 2) {
        warn!("Fewer than two philosophers: nobody can share a bottle");
    }

    // Re-validate after applying overrides
    config.validate()?;

    Ok(())
}
