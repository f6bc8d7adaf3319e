//! The concurrent sweep engine.
//!
//! Fans the enumerated targets out to probe tasks, streams every outcome
//! through the [`Report`] sink as it lands, waits for all tasks at a barrier,
//! and only then tallies. High-level code depends on the [`Probe`],
//! [`Resolve`] and [`Report`] abstractions, never on the concrete adapters.

use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::warn;

use sweepr_common::config::Config;
use sweepr_common::network::outcome::{ProbeOutcome, SweepSummary};
use sweepr_common::network::range::SweepRange;
use sweepr_common::network::target::Endpoint;

use crate::probe::Probe;
use crate::report::Report;
use crate::resolve::Resolve;

pub struct SweepCoordinator {
    probe: Arc<dyn Probe>,
    resolve: Arc<dyn Resolve>,
    report: Arc<dyn Report>,
    timeout: Duration,
    no_dns: bool,
    max_in_flight: usize,
}

impl SweepCoordinator {
    pub fn new(
        probe: Arc<dyn Probe>,
        resolve: Arc<dyn Resolve>,
        report: Arc<dyn Report>,
        cfg: &Config,
    ) -> Self {
        Self {
            probe,
            resolve,
            report,
            timeout: cfg.timeout,
            no_dns: cfg.no_dns,
            max_in_flight: cfg.max_in_flight.max(1),
        }
    }

    /// Executes one full sweep over `range`.
    ///
    /// Every target gets its own task, admitted through a semaphore so a /24
    /// never turns into 254 simultaneous sockets. There is no ordering
    /// guarantee among outcomes and no early abort: a probe that timed out is
    /// a normal "down", and the summary exists only after the last task has
    /// finished. Name-range sweeps return counts; address sweeps return
    /// `None`.
    pub async fn run(&self, range: &SweepRange) -> anyhow::Result<Option<SweepSummary>> {
        let targets = range.targets();
        let tally = range.keeps_tally().then(|| Arc::new(Tally::new()));
        let gate = Arc::new(Semaphore::new(self.max_in_flight));

        let mut tasks: JoinSet<()> = JoinSet::new();
        for target in targets {
            let gate = gate.clone();
            let probe = self.probe.clone();
            let resolve = self.resolve.clone();
            let report = self.report.clone();
            let tally = tally.clone();
            let timeout = self.timeout;
            let no_dns = self.no_dns;

            tasks.spawn(async move {
                let Ok(_permit) = gate.acquire_owned().await else {
                    return;
                };

                let reachable = probe.probe(&target.endpoint, timeout).await;
                let annotation = if reachable && !no_dns {
                    annotate(resolve.as_ref(), &target.endpoint).await
                } else {
                    None
                };

                let outcome = ProbeOutcome {
                    reachable,
                    annotation,
                    target,
                };
                report.outcome(&outcome);

                if let Some(tally) = &tally {
                    tally.record(&outcome.target.suffix, reachable);
                }
            });
        }

        // The barrier: nothing below runs while any probe is in flight.
        while let Some(joined) = tasks.join_next().await {
            if let Err(e) = joined {
                warn!("probe task aborted: {e}");
            }
        }

        Ok(tally.map(|tally| tally.summarize()))
    }
}

/// Mode-appropriate lookup: reverse for address targets, forward for name
/// targets. Only ever called for a reachable target.
async fn annotate(resolve: &dyn Resolve, endpoint: &Endpoint) -> Option<String> {
    match endpoint {
        Endpoint::Addr(ip) => resolve.name_for_addr(IpAddr::V4(*ip)).await,
        Endpoint::Name(hostname) => resolve.addr_for_name(hostname).await,
    }
}

/// Shared up/down ledger for name-range sweeps.
///
/// One write-once slot per target, keyed by the padded suffix; read only
/// after the barrier and dropped right after summarizing.
struct Tally {
    slots: Mutex<HashMap<String, bool>>,
}

impl Tally {
    fn new() -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
        }
    }

    fn record(&self, suffix: &str, up: bool) {
        let mut slots = self.slots.lock().unwrap();
        slots.entry(suffix.to_string()).or_insert(up);
    }

    fn summarize(&self) -> SweepSummary {
        let slots = self.slots.lock().unwrap();
        let total_up = slots.values().filter(|up| **up).count();
        SweepSummary {
            total_up,
            total_down: slots.len() - total_up,
        }
    }
}
