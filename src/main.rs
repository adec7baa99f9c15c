use clap::Parser;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use env_logger::Env;
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use symposium::config::SimulationConfig;
use symposium::config_loader::{self, CliOverrides};
use symposium::simulation::Simulation;
use symposium::topology::{render_adjacency_summary, render_matrix, Topology};
use symposium::trace::TraceLog;
use symposium::utils::{parse_duration, prompt_agent_count};

/// Drinking philosophers simulation over a random shared-bottle topology
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to an optional YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of philosophers (prompted for when omitted)
    #[arg(short, long)]
    agents: Option<usize>,

    /// Work cycles per philosopher
    #[arg(long)]
    cycles: Option<u32>,

    /// Seed for a reproducible topology
    #[arg(long)]
    seed: Option<u64>,

    /// Length of one time unit (e.g. "1s", "100ms")
    #[arg(long, value_parser = parse_duration)]
    time_unit: Option<Duration>,

    /// Write a JSON run report to this path
    #[arg(long)]
    report: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    let args = Args::parse();

    // Diagnostics go to stderr; the trace owns stdout
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let mut config = match &args.config {
        Some(path) => config_loader::load_config(path)?,
        None => SimulationConfig::default(),
    };

    let overrides = CliOverrides {
        agents: args.agents,
        cycles: args.cycles,
        seed: args.seed,
        time_unit: args.time_unit,
    };
    config_loader::apply_overrides(&mut config, &overrides)?;

    let agents = match config.agents {
        Some(agents) => agents,
        None => {
            let stdin = io::stdin();
            let agents = prompt_agent_count(stdin.lock(), io::stdout())?;
            if agents < 2 {
                warn!("Fewer than two philosophers: nobody can share a bottle");
            }
            config.agents = Some(agents);
            agents
        }
    };

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let topology = Topology::generate(agents, config.edge_probability, config.bottle_capacity, &mut rng);

    println!("Generated random undirected graph with named vertices:");
    print!("{}", render_matrix(&topology));
    print!("{}", render_adjacency_summary(&topology));

    let simulation = Simulation::new(config, topology, TraceLog::stdout());
    let report = simulation.run()?;

    if let Some(path) = &args.report {
        let json = serde_json::to_string_pretty(&report).wrap_err("Failed to serialize run report")?;
        std::fs::write(path, json)
            .wrap_err_with(|| format!("Failed to write run report '{}'", path.display()))?;
        info!("Run report written to: {:?}", path);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let args = Args::parse_from(["symposium", "--agents", "4", "--time-unit", "50ms"]);

        assert_eq!(args.agents, Some(4));
        assert_eq!(args.time_unit, Some(Duration::from_millis(50)));
        assert!(args.config.is_none());
        assert!(args.report.is_none());
    }

    #[test]
    fn test_cli_defaults_to_prompt() {
        let args = Args::parse_from(["symposium"]);
        assert!(args.agents.is_none());
        assert!(args.seed.is_none());
    }

    #[test]
    fn test_cli_rejects_bad_time_unit() {
        assert!(Args::try_parse_from(["symposium", "--time-unit", "soon"]).is_err());
        // Overflowing values are a parse error, not a panic
        assert!(Args::try_parse_from(["symposium", "--time-unit", "307445734561825861m"]).is_err());
    }
}
