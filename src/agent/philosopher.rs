//! Philosopher agent.
//!
//! A philosopher is bound to one vertex of the topology and alternates
//! between a tranquil idle period and a thirsty burst, drawing drinks from
//! the bottles it shares with its neighbors. When every adjacent bottle is
//! empty it keeps re-scanning its row until the bartender refills one; it
//! never blocks on a bottle.

use log::{debug, warn};
use rand::rngs::StdRng;
use std::sync::Arc;
use std::thread;

use crate::agent::types::{Burst, PhilosopherReport};
use crate::config::SimulationConfig;
use crate::topology::Topology;
use crate::trace::{TraceEvent, TraceLog};

pub struct Philosopher {
    id: usize,
    topology: Arc<Topology>,
    trace: Arc<TraceLog>,
    config: Arc<SimulationConfig>,
    rng: StdRng,
}

impl Philosopher {
    pub fn new(
        id: usize,
        topology: Arc<Topology>,
        trace: Arc<TraceLog>,
        config: Arc<SimulationConfig>,
        rng: StdRng,
    ) -> Self {
        Self {
            id,
            topology,
            trace,
            config,
            rng,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn name(&self) -> &str {
        self.topology.name(self.id)
    }

    /// Run every configured cycle, then announce final tranquility.
    pub fn run(mut self) -> PhilosopherReport {
        let mut report = PhilosopherReport::new(self.id, self.name());

        for cycle in 0..self.config.cycles {
            self.trace.record(&TraceEvent::Tranquil { name: self.name() });

            let idle = self.config.units(self.config.idle_units.sample(&mut self.rng));
            thread::sleep(idle);

            let need = self.config.thirst.sample(&mut self.rng);
            self.trace.record(&TraceEvent::Thirsty {
                name: self.name(),
                drinks: need,
            });

            let burst = self.drink(need);
            debug!(
                "{} finished cycle {} ({} of {} drinks from {} draws)",
                self.name(),
                cycle + 1,
                burst.taken,
                burst.need,
                burst.draws
            );
            report.bursts.push(burst);
            report.cycles_completed += 1;
        }

        self.trace.record(&TraceEvent::Tranquil { name: self.name() });
        report
    }

    /// Drink exactly `need` drinks from adjacent bottles.
    ///
    /// Bottles are tried in ascending neighbor order, wrapping around for
    /// as many passes as it takes. A philosopher with no neighbors can never
    /// be served, so the burst is abandoned with nothing taken.
    pub fn drink(&self, need: u32) -> Burst {
        let mut burst = Burst {
            need,
            taken: 0,
            draws: 0,
        };

        if self.topology.degree(self.id) == 0 {
            warn!("{} has no one to share a bottle with and stays thirsty", self.name());
            return burst;
        }

        while burst.taken < need {
            let before = burst.taken;

            for (neighbor, bottle) in self.topology.neighbors(self.id) {
                let granted = bottle.try_take(need - burst.taken);
                if granted == 0 {
                    continue;
                }

                burst.taken += granted;
                burst.draws += 1;
                self.trace.record(&TraceEvent::Drank {
                    name: self.name(),
                    drinks: granted,
                    shared_with: self.topology.name(neighbor),
                });

                if burst.taken == need {
                    break;
                }
            }

            // Every bottle was dry on this pass; spin until a refill lands
            if burst.taken == before {
                thread::yield_now();
            }
        }

        burst
    }
}
