//! # Symposium - Drinking philosophers over a random topology
//!
//! This library simulates a variable-topology resource-sharing problem:
//! philosophers sit on the vertices of a random undirected graph and every
//! edge holds a bottle shared by the two philosophers it connects. Thirsty
//! philosophers drink from the bottles around them while a bartender
//! refills the empty ones, and everything is narrated through a single
//! timestamped trace.
//!
//! ## Architecture
//!
//! - `bottle`: The shared, lock-protected drink counter
//! - `topology`: Random graph generation, name assignment and rendering
//! - `trace`: Ordered, timestamped event output
//! - `agent`: The philosopher and bartender actors
//! - `simulation`: Thread orchestration and the run report
//! - `config` / `config_loader`: Configuration types, YAML loading, overrides
//! - `utils`: Duration parsing and the interactive prompt
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use symposium::config::SimulationConfig;
//! use symposium::simulation::Simulation;
//! use symposium::topology::Topology;
//! use symposium::trace::TraceLog;
//!
//! let config = SimulationConfig::default();
//! let mut rng = rand::thread_rng();
//! let topology = Topology::generate(5, config.edge_probability, config.bottle_capacity, &mut rng);
//!
//! let report = Simulation::new(config, topology, TraceLog::stdout()).run()?;
//! println!("{} drinks served", report.total_drinks());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Concurrency
//!
//! Each bottle is only read or changed under its own mutex, and no
//! operation spans two bottles. The topology is immutable once built and is
//! shared without locking. Philosophers poll their bottles rather than
//! waiting on them, and the bartender thread is never joined.

pub mod bottle;
pub mod config;
pub mod config_loader;
pub mod topology;
pub mod trace;
pub mod agent;
pub mod simulation;
pub mod utils;
