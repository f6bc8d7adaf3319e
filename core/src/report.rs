//! Outbound presentation port of the sweep engine.

use sweepr_common::network::outcome::ProbeOutcome;

/// Sink for per-target results, called by each probe task the moment its
/// outcome exists. Implementations must emit whole lines atomically; beyond
/// that, interleaving across tasks is expected and fine.
pub trait Report: Send + Sync {
    fn outcome(&self, outcome: &ProbeOutcome);
}
