//! # Sweep Target Model
//!
//! One candidate to probe: either a dotted-quad address or a numbered
//! hostname. Shared between the engine and the cli.

use std::fmt;
use std::net::Ipv4Addr;

/// What the prober should actually hit.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Addr(Ipv4Addr),
    Name(String),
}

/// A single enumerated sweep candidate. Immutable once produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Target {
    pub endpoint: Endpoint,
    /// Canonical display form, zero-padded in name mode.
    pub display: String,
    /// The numeric suffix as displayed. Keys the up/down tally.
    pub suffix: String,
}

impl Target {
    pub fn addr(addr: Ipv4Addr) -> Self {
        let display = addr.to_string();
        let suffix = addr.octets()[3].to_string();
        Self {
            endpoint: Endpoint::Addr(addr),
            display,
            suffix,
        }
    }

    pub fn name(hostname: String, suffix: String) -> Self {
        Self {
            display: hostname.clone(),
            endpoint: Endpoint::Name(hostname),
            suffix,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display)
    }
}
