//! The reachability probe **abstraction** and its ICMP implementation.
//!
//! The coordinator depends only on [`Probe`]; the concrete prober lives
//! behind it so the engine can be exercised with deterministic fakes that
//! never touch the network.

use std::future::Future;
use std::net::{IpAddr, SocketAddr, ToSocketAddrs};
use std::time::Duration;

use async_trait::async_trait;
use surge_ping::{Client, Config, PingIdentifier, PingSequence};
use tracing::debug;

use sweepr_common::network::target::Endpoint;

const ECHO_PAYLOAD: [u8; 56] = [0; 56];

/// Issues one reachability probe against one endpoint with a bounded wait.
///
/// Returns true iff a response arrived within `timeout`. Every failure mode
/// (unresolvable name, no route, timeout) is an ordinary `false`; nothing
/// propagates to the caller.
#[async_trait]
pub trait Probe: Send + Sync {
    async fn probe(&self, endpoint: &Endpoint, timeout: Duration) -> bool;
}

/// ICMP echo prober. One shared client; each probe is an independent echo
/// request with its own identifier.
pub struct IcmpProber {
    client: Client,
}

impl IcmpProber {
    /// Opens the ICMP socket. This is the one probe failure that *does*
    /// surface: without the socket no sweep can run at all.
    pub fn new() -> anyhow::Result<Self> {
        let client = Client::new(&Config::default())?;
        Ok(Self { client })
    }

    async fn ping(&self, addr: IpAddr, timeout: Duration) -> bool {
        let ident = PingIdentifier(rand::random::<u16>());
        let mut pinger = self.client.pinger(addr, ident).await;
        pinger.timeout(timeout);

        match pinger.ping(PingSequence(0), &ECHO_PAYLOAD).await {
            Ok((_packet, rtt)) => {
                debug!("{addr} answered in {rtt:?}");
                true
            }
            Err(_) => false,
        }
    }
}

#[async_trait]
impl Probe for IcmpProber {
    /// Resolution and the echo share one budget: a name target that burns
    /// most of the timeout on a slow resolver gets only the remainder for
    /// its ping, and the whole probe still answers within the configured
    /// wait plus small slack.
    async fn probe(&self, endpoint: &Endpoint, timeout: Duration) -> bool {
        let attempt = async {
            let addr: IpAddr = match endpoint {
                Endpoint::Addr(ip) => IpAddr::V4(*ip),
                Endpoint::Name(hostname) => match resolve_for_probe(hostname.clone()).await {
                    Some(addr) => addr,
                    None => return false,
                },
            };

            self.ping(addr, timeout).await
        };

        within_budget(timeout, attempt).await
    }
}

/// Cuts `attempt` off at `budget`; running out of time is an ordinary "down".
async fn within_budget(budget: Duration, attempt: impl Future<Output = bool>) -> bool {
    tokio::time::timeout(budget, attempt).await.unwrap_or(false)
}

/// Forward-resolves a name target so it can be pinged, preferring IPv4.
/// Unbounded on its own; the caller's probe budget caps it.
async fn resolve_for_probe(hostname: String) -> Option<IpAddr> {
    let lookup = tokio::task::spawn_blocking(move || {
        let addrs: Vec<SocketAddr> = (hostname.as_str(), 0).to_socket_addrs().ok()?.collect();
        addrs
            .iter()
            .find(|sa| sa.is_ipv4())
            .or_else(|| addrs.first())
            .map(|sa| sa.ip())
    });

    lookup.await.ok().flatten()
}
