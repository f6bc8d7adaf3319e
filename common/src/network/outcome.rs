//! Result types produced by a sweep, shared between the engine and the cli.

use crate::network::target::Target;

/// The verdict for one target. Produced exactly once per enumerated target.
///
/// `annotation` is only ever present on a reachable target whose lookup
/// succeeded: the resolved hostname for an address target, the resolved
/// address for a name target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProbeOutcome {
    pub target: Target,
    pub reachable: bool,
    pub annotation: Option<String>,
}

/// Aggregate counts, emitted after the barrier in name-range mode only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SweepSummary {
    pub total_up: usize,
    pub total_down: usize,
}
