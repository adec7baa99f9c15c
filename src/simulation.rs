//! Simulation driver.
//!
//! Starts the bartender and one thread per philosopher, waits for every
//! philosopher to finish, and leaves the bartender running: its handle is
//! dropped, which detaches the thread until the process exits.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::io;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Instant;

use crate::agent::{actor_rng, philosopher_stream, Bartender, Philosopher, PhilosopherReport, BARTENDER_STREAM};
use crate::config::SimulationConfig;
use crate::topology::Topology;
use crate::trace::TraceLog;

/// Fatal errors while starting or waiting on actors
#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    #[error("Error creating thread for {actor}: {source}")]
    SpawnFailed {
        actor: String,
        #[source]
        source: io::Error,
    },

    #[error("Error joining thread for philosopher {actor}")]
    JoinFailed { actor: String },
}

/// Summary of a finished run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationReport {
    pub philosophers: Vec<PhilosopherReport>,
    pub bottles: usize,
    /// Refills completed by the time the last philosopher finished
    pub refills: u64,
    pub elapsed_ms: u128,
}

impl SimulationReport {
    pub fn total_drinks(&self) -> u64 {
        self.philosophers.iter().map(PhilosopherReport::total_drinks).sum()
    }
}

pub struct Simulation {
    config: Arc<SimulationConfig>,
    topology: Arc<Topology>,
    trace: Arc<TraceLog>,
}

impl Simulation {
    pub fn new(config: SimulationConfig, topology: Topology, trace: TraceLog) -> Self {
        Self {
            config: Arc::new(config),
            topology: Arc::new(topology),
            trace: Arc::new(trace),
        }
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Run every philosopher to completion.
    pub fn run(&self) -> Result<SimulationReport, SimulationError> {
        let started = Instant::now();

        let bartender = Bartender::new(
            Arc::clone(&self.topology),
            Arc::clone(&self.trace),
            Arc::clone(&self.config),
            actor_rng(self.config.seed, BARTENDER_STREAM),
        );
        let bartender = bartender.spawn().map_err(|source| SimulationError::SpawnFailed {
            actor: "bartender".to_string(),
            source,
        })?;
        debug!("Bartender started on thread {:?}", bartender.thread().name());

        let mut handles: Vec<(String, JoinHandle<PhilosopherReport>)> =
            Vec::with_capacity(self.topology.size());
        for id in 0..self.topology.size() {
            let philosopher = Philosopher::new(
                id,
                Arc::clone(&self.topology),
                Arc::clone(&self.trace),
                Arc::clone(&self.config),
                actor_rng(self.config.seed, philosopher_stream(id)),
            );
            let name = philosopher.name().to_string();
            let handle = thread::Builder::new()
                .name(format!("philosopher-{}", id))
                .spawn(move || philosopher.run())
                .map_err(|source| SimulationError::SpawnFailed {
                    actor: format!("philosopher {}", name),
                    source,
                })?;
            handles.push((name, handle));
        }
        info!("Started {} philosopher(s) and the bartender", handles.len());

        let mut philosophers = Vec::with_capacity(handles.len());
        for (name, handle) in handles {
            philosophers.push(join_philosopher(name, handle)?);
        }

        // Never joined; abandoned mid-scan or mid-refill at process exit
        drop(bartender);

        let report = SimulationReport {
            philosophers,
            bottles: self.topology.edge_count(),
            refills: self.topology.edges().map(|e| e.bottle.refills_completed()).sum(),
            elapsed_ms: started.elapsed().as_millis(),
        };
        info!(
            "All philosophers are done: {} drinks, {} refills in {} ms",
            report.total_drinks(),
            report.refills,
            report.elapsed_ms
        );

        Ok(report)
    }
}

/// Wait for one philosopher; a thread that panicked is a join failure.
fn join_philosopher(
    name: String,
    handle: JoinHandle<PhilosopherReport>,
) -> Result<PhilosopherReport, SimulationError> {
    handle
        .join()
        .map_err(|_| SimulationError::JoinFailed { actor: name })
}
