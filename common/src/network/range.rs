//! # Sweep Range Model
//!
//! Defines the two kinds of contiguous ranges a sweep can cover and turns
//! them into the ordered target list the coordinator fans out.
//!
//! * **Addresses**: a /24-style prefix (first three octets), suffixes 1..254.
//! * **Names**: a hostname prefix plus a zero-padded decimal suffix range.

use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use crate::error::SweepError;
use crate::network::target::Target;

/// The first three octets of an IPv4 address, as given on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AddrPrefix {
    octets: [u8; 3],
}

impl AddrPrefix {
    pub fn new(octets: [u8; 3]) -> Self {
        Self { octets }
    }

    pub fn with_suffix(&self, suffix: u8) -> Ipv4Addr {
        let [a, b, c] = self.octets;
        Ipv4Addr::new(a, b, c, suffix)
    }
}

impl FromStr for AddrPrefix {
    type Err = SweepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SweepError::InvalidPrefix(s.to_string());

        let mut octets = [0u8; 3];
        let mut parts = s.split('.');
        for slot in octets.iter_mut() {
            let part = parts.next().ok_or_else(invalid)?;
            *slot = part.parse::<u8>().map_err(|_| invalid())?;
        }
        if parts.next().is_some() {
            return Err(invalid());
        }

        Ok(Self { octets })
    }
}

impl fmt::Display for AddrPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.octets;
        write!(f, "{a}.{b}.{c}")
    }
}

/// One bound of a name-range, keeping the token exactly as typed.
///
/// The literal matters: the zero-pad width of every generated hostname is the
/// character length of the *start* token ("01" pads to 2, "1" pads to 1).
/// Compatibility behavior, kept even though it looks accidental.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RangeBound {
    literal: String,
    value: u32,
}

impl RangeBound {
    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn pad_width(&self) -> usize {
        self.literal.chars().count()
    }
}

impl FromStr for RangeBound {
    type Err = SweepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .parse::<u32>()
            .map_err(|_| SweepError::InvalidBound(s.to_string()))?;
        Ok(Self {
            literal: s.to_string(),
            value,
        })
    }
}

impl fmt::Display for RangeBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.literal)
    }
}

/// Everything the enumerator needs to produce the target sequence.
#[derive(Clone, Debug)]
pub enum SweepRange {
    Addresses {
        prefix: AddrPrefix,
    },
    Names {
        prefix: String,
        start: RangeBound,
        end: RangeBound,
    },
}

impl SweepRange {
    /// Enumerates the targets in ascending order, each exactly once.
    ///
    /// A name-range with start > end yields nothing; the sweep then completes
    /// with an empty tally rather than failing.
    pub fn targets(&self) -> Vec<Target> {
        match self {
            Self::Addresses { prefix } => (1..=254u8)
                .map(|suffix| Target::addr(prefix.with_suffix(suffix)))
                .collect(),
            Self::Names { prefix, start, end } => {
                let width = start.pad_width();
                (start.value()..=end.value())
                    .map(|n| {
                        let suffix = format!("{n:0width$}");
                        Target::name(format!("{prefix}{suffix}"), suffix)
                    })
                    .collect()
            }
        }
    }

    /// Name-range sweeps keep a per-target up/down tally; address sweeps
    /// stream lines only. The asymmetry is part of the contract.
    pub fn keeps_tally(&self) -> bool {
        matches!(self, Self::Names { .. })
    }

    /// Human-readable description of the swept range, for the header line.
    pub fn describe(&self) -> String {
        match self {
            Self::Addresses { prefix } => {
                format!("{} - {}", prefix.with_suffix(1), prefix.with_suffix(254))
            }
            Self::Names { prefix, start, end } => {
                let width = start.pad_width();
                let (s, e) = (start.value(), end.value());
                format!("{prefix}{s:0width$} - {prefix}{e:0width$}")
            }
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
