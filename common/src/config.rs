use std::time::Duration;

pub struct Config {
    /// How long a single probe may wait for an echo reply.
    pub timeout: Duration,
    /// Disables DNS annotation of reachable targets.
    ///
    /// Does not stop name-range targets from being resolved for probing.
    pub no_dns: bool,
    /// Upper bound on probes in flight at once.
    pub max_in_flight: usize,
    /// Suppresses the banner and decorative output.
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(2),
            no_dns: false,
            max_in_flight: 128,
            quiet: false,
        }
    }
}
