//! Best-effort display-name resolution for reachable targets.
//!
//! Lookups only decorate the report line; a miss is a normal outcome and is
//! rendered as a bare status line. Every call is bounded so a slow resolver
//! can never hold the barrier open.

use std::net::IpAddr;
use std::time::Duration;

use async_trait::async_trait;

/// Pluggable lookup capability: hostname for an address, address for a
/// hostname. Both operations are infallible by contract; absence is the
/// failure mode.
#[async_trait]
pub trait Resolve: Send + Sync {
    async fn name_for_addr(&self, addr: IpAddr) -> Option<String>;
    async fn addr_for_name(&self, hostname: &str) -> Option<String>;
}

/// System-resolver backed implementation (blocking libc calls moved off the
/// runtime, each capped at `timeout`).
pub struct DnsResolver {
    timeout: Duration,
}

impl DnsResolver {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for DnsResolver {
    fn default() -> Self {
        Self::new(Duration::from_secs(2))
    }
}

#[async_trait]
impl Resolve for DnsResolver {
    async fn name_for_addr(&self, addr: IpAddr) -> Option<String> {
        let lookup = tokio::task::spawn_blocking(move || dns_lookup::lookup_addr(&addr).ok());

        let name = match tokio::time::timeout(self.timeout, lookup).await {
            Ok(Ok(Some(name))) => name,
            _ => return None,
        };

        // getnameinfo echoes the address back when there is no PTR record.
        if name == addr.to_string() {
            return None;
        }
        Some(name.trim_end_matches('.').to_string())
    }

    async fn addr_for_name(&self, hostname: &str) -> Option<String> {
        let hostname = hostname.to_string();
        let lookup = tokio::task::spawn_blocking(move || {
            dns_lookup::lookup_host(&hostname)
                .ok()?
                .into_iter()
                .next()
                .map(|ip| ip.to_string())
        });

        match tokio::time::timeout(self.timeout, lookup).await {
            Ok(Ok(addr)) => addr,
            _ => None,
        }
    }
}
