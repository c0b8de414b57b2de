//! # Shared Address Space Classifier
//!
//! Decides whether an address belongs to the block ISPs hand out behind
//! carrier-grade NAT: `100.64.0.0/10`, i.e. `100.64.0.0` through `100.127.255.255`.
//!
//! Input comes from an untrusted echo service, so anything that does not
//! parse as an IPv4 address is simply "not CGNAT" rather than an error.

use std::net::{IpAddr, Ipv4Addr};

use crate::network::range::Ipv4Range;

const CGNAT_START: u32 = 0x6440_0000; // 100.64.0.0
const CGNAT_END: u32 = 0x647F_FFFF; // 100.127.255.255

pub const CGNAT_BLOCK: Ipv4Range = Ipv4Range::new(
    Ipv4Addr::from_bits(CGNAT_START),
    Ipv4Addr::from_bits(CGNAT_END),
);

/// Packs the four octets into a `u32`, first octet most significant.
pub fn ip_to_uint32(ip: Ipv4Addr) -> u32 {
    let [a, b, c, d] = ip.octets();
    (a as u32) << 24 | (b as u32) << 16 | (c as u32) << 8 | d as u32
}

/// Parses `s` as an address that can be classified.
///
/// IPv4-mapped IPv6 addresses (`::ffff:a.b.c.d`) yield their embedded IPv4
/// address. Every other IPv6 address yields `None`.
pub fn parse_ipv4(s: &str) -> Option<Ipv4Addr> {
    match s.parse::<IpAddr>().ok()? {
        IpAddr::V4(ipv4) => Some(ipv4),
        IpAddr::V6(ipv6) => ipv6.to_ipv4_mapped(),
    }
}

pub fn is_cgnat_addr(ip: Ipv4Addr) -> bool {
    CGNAT_BLOCK.contains(ip)
}

/// Returns `true` iff `ip` is an IPv4 address inside `100.64.0.0/10`.
///
/// ```
/// use cgnat_common::network::cgnat::is_cgnat;
///
/// assert!(is_cgnat("100.64.0.0"));
/// assert!(!is_cgnat("100.128.0.0"));
/// assert!(!is_cgnat("not-an-ip"));
/// ```
pub fn is_cgnat(ip: &str) -> bool {
    parse_ipv4(ip).is_some_and(is_cgnat_addr)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
