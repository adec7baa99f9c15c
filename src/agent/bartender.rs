//! Bartender agent.
//!
//! The bartender scans every bottle in the topology forever, refilling the
//! empty ones. A refill is claimed under the bottle's lock, performed with
//! the lock released (so philosophers see the bottle as empty and move on),
//! then completed under the lock again. Nobody ever stops the bartender: the
//! driver detaches its thread and process exit ends it.

use log::debug;
use rand::rngs::StdRng;
use std::io;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crate::config::SimulationConfig;
use crate::topology::Topology;
use crate::trace::{TraceEvent, TraceLog};

pub struct Bartender {
    topology: Arc<Topology>,
    trace: Arc<TraceLog>,
    config: Arc<SimulationConfig>,
    rng: StdRng,
}

impl Bartender {
    pub fn new(
        topology: Arc<Topology>,
        trace: Arc<TraceLog>,
        config: Arc<SimulationConfig>,
        rng: StdRng,
    ) -> Self {
        Self {
            topology,
            trace,
            config,
            rng,
        }
    }

    /// Check every bottle once, refilling each empty one that nobody else
    /// is refilling. Returns the number of refills performed.
    pub fn scan_once(&mut self) -> usize {
        let mut refills = 0;

        for edge in self.topology.edges() {
            if !edge.bottle.refill_if_needed() {
                continue;
            }

            let delay = self.config.units(self.config.refill_units.sample(&mut self.rng));
            debug!(
                "Refilling bottle between {} and {} ({:?})",
                self.topology.name(edge.a),
                self.topology.name(edge.b),
                delay
            );
            thread::sleep(delay);

            // Stamp before the drinks become visible to philosophers
            let at = self.trace.elapsed();
            edge.bottle.complete_refill();
            let refilled = TraceEvent::Refilled {
                first: self.topology.name(edge.a),
                second: self.topology.name(edge.b),
            };
            self.trace.emit(at, &refilled.to_string());
            refills += 1;
        }

        refills
    }

    /// Scan forever, pausing between full scans.
    pub fn run(mut self) {
        let interval = self.config.units(self.config.scan_interval_units);
        loop {
            let refills = self.scan_once();
            if refills > 0 {
                debug!("Bartender scan refilled {} bottle(s)", refills);
            }
            thread::sleep(interval);
        }
    }

    /// Start the bartender on its own named thread.
    pub fn spawn(self) -> io::Result<JoinHandle<()>> {
        thread::Builder::new()
            .name("bartender".to_string())
            .spawn(move || self.run())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::types::actor_rng;
    use crate::config::UnitRange;
    use std::time::Duration;

    fn setup() -> (Arc<Topology>, Bartender, crate::trace::TraceBuffer) {
        let names = vec!["Plato".to_string(), "Zeno".to_string(), "Dio".to_string()];
        let topology = Arc::new(Topology::from_edges(names, &[(0, 1), (1, 2)], 5).unwrap());
        let (trace, buffer) = TraceLog::in_memory();
        let config = Arc::new(SimulationConfig {
            time_unit: Duration::from_millis(1),
            refill_units: UnitRange::new(0, 2),
            ..Default::default()
        });
        let bartender = Bartender::new(
            Arc::clone(&topology),
            Arc::new(trace),
            config,
            actor_rng(Some(0), 1),
        );
        (topology, bartender, buffer)
    }

    #[test]
    fn test_scan_leaves_full_bottles_alone() {
        let (topology, mut bartender, buffer) = setup();
        assert_eq!(bartender.scan_once(), 0);
        assert!(buffer.messages().is_empty());
        assert_eq!(topology.bottle(0, 1).unwrap().refills_completed(), 0);
    }

    #[test]
    fn test_scan_refills_empty_bottle() {
        let (topology, mut bartender, buffer) = setup();
        let bottle = topology.bottle(1, 2).unwrap();
        assert_eq!(bottle.try_take(5), 5);

        assert_eq!(bartender.scan_once(), 1);
        assert_eq!(bottle.remaining(), 5);
        assert!(!bottle.is_refilling());
        assert_eq!(bottle.refills_completed(), 1);
        assert_eq!(
            buffer.messages(),
            vec!["Bottle shared between Zeno and Dio has been refilled."]
        );
    }

    #[test]
    fn test_scan_skips_partially_drunk_bottle() {
        let (topology, mut bartender, _buffer) = setup();
        let bottle = topology.bottle(0, 1).unwrap();
        assert_eq!(bottle.try_take(4), 4);

        assert_eq!(bartender.scan_once(), 0);
        assert_eq!(bottle.remaining(), 1);
    }

    #[test]
    fn test_scan_skips_bottle_already_claimed() {
        let (topology, mut bartender, _buffer) = setup();
        let bottle = topology.bottle(0, 1).unwrap();
        assert_eq!(bottle.try_take(5), 5);
        assert!(bottle.refill_if_needed());

        assert_eq!(bartender.scan_once(), 0);
        assert_eq!(bottle.remaining(), 0);
        assert!(bottle.is_refilling());
    }

    #[test]
    fn test_refill_is_stamped_before_the_drinks_it_supplies() {
        use crate::agent::Philosopher;

        let names = vec!["Plato".to_string(), "Zeno".to_string()];
        let topology = Arc::new(Topology::from_edges(names, &[(0, 1)], 1).unwrap());
        let (trace, buffer) = TraceLog::in_memory();
        let trace = Arc::new(trace);
        let config = Arc::new(SimulationConfig {
            time_unit: Duration::from_millis(1),
            refill_units: UnitRange::new(0, 0),
            scan_interval_units: 0,
            ..Default::default()
        });

        let bartender = Bartender::new(
            Arc::clone(&topology),
            Arc::clone(&trace),
            Arc::clone(&config),
            actor_rng(Some(0), 1),
        );
        drop(bartender.spawn().unwrap());

        let philosopher = Philosopher::new(0, topology, trace, config, actor_rng(Some(0), 2));
        for _ in 0..200 {
            assert_eq!(philosopher.drink(1).taken, 1);
        }

        let mut lines: Vec<(u128, String)> = buffer
            .contents()
            .lines()
            .map(|line| {
                let rest = line.strip_prefix('[').unwrap();
                let (nanos, message) = rest.split_once(" nanoseconds]: ").unwrap();
                (nanos.parse().unwrap(), message.to_string())
            })
            .collect();
        lines.sort();

        // Capacity 1: the n-th drink needs n - 1 refills stamped before it
        let mut drinks = 0u64;
        let mut refills = 0u64;
        for (_, message) in &lines {
            if message.contains("has been refilled") {
                refills += 1;
            } else if message.contains(" took ") {
                drinks += 1;
                assert!(drinks <= refills + 1, "drink {} stamped before its refill", drinks);
            }
        }
        assert_eq!(drinks, 200);
    }

    #[test]
    fn test_spawned_bartender_refills_in_background() {
        let (topology, bartender, _buffer) = setup();
        let bottle = Arc::clone(topology.bottle(0, 1).unwrap());
        assert_eq!(bottle.try_take(5), 5);

        // Detached on purpose: the bartender never stops
        drop(bartender.spawn().unwrap());

        assert!(bottle.wait_refilled(Duration::from_secs(5)) || bottle.remaining() == 5);
        assert_eq!(bottle.remaining(), 5);
    }
}
