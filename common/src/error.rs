use thiserror::Error;

/// Failures that stop a sweep before any probe is dispatched.
///
/// An unreachable target or a failed lookup is *not* an error: both are
/// ordinary outcomes and never surface through this type.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SweepError {
    #[error("invalid address prefix '{0}': expected three dotted octets, e.g. 192.168.1")]
    InvalidPrefix(String),

    #[error("invalid range bound '{0}': expected a decimal integer")]
    InvalidBound(String),

    #[error("no viable LAN interface found for prefix auto-detection")]
    NoLanInterface,
}
