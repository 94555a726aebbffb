//! IPv4 network prefix parsing.
//!
//! A [`NetworkPrefix`] is the parsed form of CIDR input like
//! `192.168.1.0/24`: a network address plus a prefix length, with the
//! derived host-bit arithmetic used to size the sweep.

use crate::error::AnalyzeError;
use crate::types::range::HostRange;
use ipnetwork::Ipv4Network;
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// A parsed IPv4 network prefix (address + prefix length).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkPrefix {
    network: Ipv4Network,
}

impl NetworkPrefix {
    /// Address width for IPv4.
    pub const TOTAL_BITS: u8 = 32;

    /// Parse a CIDR string of the form `A.B.C.D/N`.
    ///
    /// The prefix length is mandatory; a bare address is rejected rather
    /// than being treated as a /32.
    pub fn parse(s: &str) -> Result<Self, AnalyzeError> {
        let s = s.trim();

        if !s.contains('/') {
            return Err(AnalyzeError::InvalidAddressFormat(s.to_string()));
        }

        let network: Ipv4Network = s
            .parse()
            .map_err(|_| AnalyzeError::InvalidAddressFormat(s.to_string()))?;

        Ok(Self { network })
    }

    /// Number of network (prefix) bits.
    pub fn prefix_bits(&self) -> u8 {
        self.network.prefix()
    }

    /// Number of host bits (`32 - prefix`).
    pub fn host_bits(&self) -> u8 {
        Self::TOTAL_BITS - self.network.prefix()
    }

    /// The network address (all host bits zero).
    pub fn network_address(&self) -> Ipv4Addr {
        self.network.network()
    }

    /// The broadcast address (all host bits one).
    pub fn broadcast_address(&self) -> Ipv4Addr {
        self.network.broadcast()
    }

    /// Number of usable host addresses: `2^hostBits - 2`.
    ///
    /// /31 and /32 prefixes have no usable hosts; the count saturates to
    /// zero instead of underflowing.
    pub fn usable_hosts(&self) -> u64 {
        match self.host_bits() {
            0 | 1 => 0,
            bits => (1u64 << bits) - 2,
        }
    }

    /// Iterate the usable host addresses in ascending order.
    pub fn hosts(&self) -> HostRange {
        HostRange::new(self.network_address(), self.usable_hosts())
    }

    /// Whether `addr` is a usable host of this prefix, i.e. strictly
    /// between the network and broadcast addresses.
    pub fn contains_host(&self, addr: Ipv4Addr) -> bool {
        addr > self.network_address() && addr < self.broadcast_address()
    }
}

impl FromStr for NetworkPrefix {
    type Err = AnalyzeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for NetworkPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.network_address(), self.prefix_bits())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let prefix = NetworkPrefix::parse("192.168.1.0/24").unwrap();
        assert_eq!(prefix.prefix_bits(), 24);
        assert_eq!(prefix.host_bits(), 8);
        assert_eq!(prefix.network_address(), Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(prefix.broadcast_address(), Ipv4Addr::new(192, 168, 1, 255));
    }

    #[test]
    fn test_parse_masks_host_bits() {
        // The original analyzer accepted a host address inside the block.
        let prefix = NetworkPrefix::parse("10.0.0.17/24").unwrap();
        assert_eq!(prefix.network_address(), Ipv4Addr::new(10, 0, 0, 0));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            NetworkPrefix::parse("not-an-address"),
            Err(AnalyzeError::InvalidAddressFormat(_))
        ));
    }

    #[test]
    fn test_parse_rejects_missing_prefix() {
        assert!(NetworkPrefix::parse("10.0.0.1").is_err());
    }

    #[test]
    fn test_parse_rejects_bad_prefix_length() {
        assert!(NetworkPrefix::parse("10.0.0.0/33").is_err());
        assert!(NetworkPrefix::parse("10.0.0.0/x").is_err());
    }

    #[test]
    fn test_parse_rejects_ipv6() {
        assert!(NetworkPrefix::parse("2001:db8::/32").is_err());
    }

    #[test]
    fn test_usable_hosts() {
        assert_eq!(NetworkPrefix::parse("10.0.0.0/24").unwrap().usable_hosts(), 254);
        assert_eq!(NetworkPrefix::parse("10.0.0.0/30").unwrap().usable_hosts(), 2);
        assert_eq!(NetworkPrefix::parse("10.0.0.0/28").unwrap().usable_hosts(), 14);
        assert_eq!(NetworkPrefix::parse("10.0.0.0/20").unwrap().usable_hosts(), 4094);
        assert_eq!(NetworkPrefix::parse("0.0.0.0/0").unwrap().usable_hosts(), (1u64 << 32) - 2);
    }

    #[test]
    fn test_degenerate_prefixes_have_no_hosts() {
        assert_eq!(NetworkPrefix::parse("10.0.0.0/31").unwrap().usable_hosts(), 0);
        assert_eq!(NetworkPrefix::parse("10.0.0.0/32").unwrap().usable_hosts(), 0);
    }

    #[test]
    fn test_contains_host_is_strict() {
        let prefix = NetworkPrefix::parse("10.0.0.0/30").unwrap();
        assert!(!prefix.contains_host(Ipv4Addr::new(10, 0, 0, 0)));
        assert!(prefix.contains_host(Ipv4Addr::new(10, 0, 0, 1)));
        assert!(prefix.contains_host(Ipv4Addr::new(10, 0, 0, 2)));
        assert!(!prefix.contains_host(Ipv4Addr::new(10, 0, 0, 3)));
    }

    #[test]
    fn test_display() {
        let prefix = NetworkPrefix::parse("172.16.4.0/22").unwrap();
        assert_eq!(prefix.to_string(), "172.16.4.0/22");
    }
}
