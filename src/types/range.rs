//! Usable-host enumeration for a network prefix.
//!
//! Enumeration works on the big-endian integer value of the address:
//! start at the network address and add one per step. This keeps the
//! sequence ascending for every prefix length, including ones that do
//! not fall on an octet boundary (/20, /28).

use std::net::Ipv4Addr;

/// Iterator over the usable host addresses of a network prefix.
///
/// Yields every address strictly between the network and broadcast
/// addresses, in ascending (byte-lexicographic) order. Empty for /31
/// and /32 prefixes.
#[derive(Debug, Clone)]
pub struct HostRange {
    next: u32,
    remaining: u64,
}

impl HostRange {
    /// Build a range starting one past `network`, yielding `count` hosts.
    pub(crate) fn new(network: Ipv4Addr, count: u64) -> Self {
        Self {
            next: u32::from(network).wrapping_add(1),
            remaining: count,
        }
    }

    /// Number of hosts left to yield.
    pub fn len(&self) -> u64 {
        self.remaining
    }

    /// Whether the range has been exhausted (or was empty to begin with).
    pub fn is_empty(&self) -> bool {
        self.remaining == 0
    }
}

impl Iterator for HostRange {
    type Item = Ipv4Addr;

    fn next(&mut self) -> Option<Ipv4Addr> {
        if self.remaining == 0 {
            return None;
        }

        let addr = Ipv4Addr::from(self.next);
        self.next = self.next.wrapping_add(1);
        self.remaining -= 1;
        Some(addr)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (len, Some(len))
    }
}
