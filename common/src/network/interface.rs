//! Local-network prefix auto-detection.
//!
//! Walks the host's interfaces and derives the /24 prefix of the primary LAN
//! address. This runs before any probing; if nothing viable is found the
//! sweep never starts.

use pnet::datalink::{self, NetworkInterface};
use pnet::ipnetwork::IpNetwork;

use crate::error::SweepError;
use crate::network::range::AddrPrefix;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum ViabilityError {
    /// The interface is operationally down.
    IsDown,
    /// Loopback cannot be a LAN candidate.
    IsLoopback,
    /// The interface does not support broadcast.
    NotBroadcast,
    /// A point-to-point link (e.g., a VPN).
    IsPointToPoint,
    /// No private IPv4 address to derive a prefix from.
    NoPrivateIpv4,
}

/// Finds the primary LAN interface and returns the first three octets of its
/// IPv4 address.
pub fn detect_lan_prefix() -> Result<AddrPrefix, SweepError> {
    detect_from(datalink::interfaces())
}

/// Detection over an explicit interface list, so the selection logic can be
/// exercised without touching the host's real interfaces.
fn detect_from(interfaces: Vec<NetworkInterface>) -> Result<AddrPrefix, SweepError> {
    let candidates: Vec<NetworkInterface> = interfaces
        .into_iter()
        .filter(|interface| is_viable_lan_interface(interface).is_ok())
        .collect();

    let interface = select_best_lan_interface(candidates).ok_or(SweepError::NoLanInterface)?;
    prefix_of(&interface).ok_or(SweepError::NoLanInterface)
}

fn is_viable_lan_interface(interface: &NetworkInterface) -> Result<(), ViabilityError> {
    if !interface.is_up() {
        return Err(ViabilityError::IsDown);
    }
    if interface.is_loopback() {
        return Err(ViabilityError::IsLoopback);
    }
    if !interface.is_broadcast() {
        return Err(ViabilityError::NotBroadcast);
    }
    if interface.is_point_to_point() {
        return Err(ViabilityError::IsPointToPoint);
    }
    if private_ipv4(interface).is_none() {
        return Err(ViabilityError::NoPrivateIpv4);
    }
    Ok(())
}

/// Wired interfaces ("e..." on Linux, en0 on macOS) win over wireless ones;
/// otherwise first match wins.
fn select_best_lan_interface(interfaces: Vec<NetworkInterface>) -> Option<NetworkInterface> {
    interfaces
        .iter()
        .find(|interface| interface.name.starts_with('e'))
        .cloned()
        .or_else(|| interfaces.into_iter().next())
}

fn private_ipv4(interface: &NetworkInterface) -> Option<std::net::Ipv4Addr> {
    interface.ips.iter().find_map(|net| match net {
        IpNetwork::V4(v4) if v4.ip().is_private() => Some(v4.ip()),
        _ => None,
    })
}

fn prefix_of(interface: &NetworkInterface) -> Option<AddrPrefix> {
    let ip = private_ipv4(interface)?;
    let [a, b, c, _] = ip.octets();
    Some(AddrPrefix::new([a, b, c]))
}
