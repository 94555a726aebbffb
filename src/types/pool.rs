//! The final address-to-reachability mapping of an analysis run.

use serde::Serialize;
use std::collections::BTreeMap;
use std::net::Ipv4Addr;

/// Mapping from host address to reachability.
///
/// Keyed by the canonical address value, so two probes can never collide
/// on anything but an identical address, and iteration is ascending
/// byte-lexicographic order with no extra sort pass. Hosts whose probe
/// errored are absent, not marked unreachable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AddressPool {
    entries: BTreeMap<Ipv4Addr, bool>,
}

impl AddressPool {
    /// Create an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the probe outcome for one address.
    pub fn insert(&mut self, addr: Ipv4Addr, reachable: bool) {
        self.entries.insert(addr, reachable);
    }

    /// Look up the outcome for an address, if it was probed successfully.
    pub fn get(&self, addr: Ipv4Addr) -> Option<bool> {
        self.entries.get(&addr).copied()
    }

    /// Number of addresses with a recorded outcome.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether any outcome has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Addresses that answered at least one echo.
    pub fn reachable_count(&self) -> usize {
        self.entries.values().filter(|&&r| r).count()
    }

    /// Addresses that were probed but never answered.
    pub fn unreachable_count(&self) -> usize {
        self.entries.values().filter(|&&r| !r).count()
    }

    /// Iterate entries in ascending address order.
    pub fn iter(&self) -> impl Iterator<Item = (Ipv4Addr, bool)> + '_ {
        self.entries.iter().map(|(&addr, &reachable)| (addr, reachable))
    }
}

impl FromIterator<(Ipv4Addr, bool)> for AddressPool {
    fn from_iter<I: IntoIterator<Item = (Ipv4Addr, bool)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for AddressPool {
    type Item = (Ipv4Addr, bool);
    type IntoIter = std::collections::btree_map::IntoIter<Ipv4Addr, bool>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut pool = AddressPool::new();
        pool.insert(Ipv4Addr::new(10, 0, 0, 1), true);
        pool.insert(Ipv4Addr::new(10, 0, 0, 2), false);

        assert_eq!(pool.len(), 2);
        assert_eq!(pool.get(Ipv4Addr::new(10, 0, 0, 1)), Some(true));
        assert_eq!(pool.get(Ipv4Addr::new(10, 0, 0, 2)), Some(false));
        assert_eq!(pool.get(Ipv4Addr::new(10, 0, 0, 3)), None);
    }

    #[test]
    fn test_counts() {
        let pool: AddressPool = [
            (Ipv4Addr::new(10, 0, 0, 1), true),
            (Ipv4Addr::new(10, 0, 0, 2), false),
            (Ipv4Addr::new(10, 0, 0, 3), true),
        ]
        .into_iter()
        .collect();

        assert_eq!(pool.reachable_count(), 2);
        assert_eq!(pool.unreachable_count(), 1);
    }

    #[test]
    fn test_iteration_is_sorted() {
        // Inserted out of order, including across octet boundaries.
        let pool: AddressPool = [
            (Ipv4Addr::new(10, 0, 1, 0), true),
            (Ipv4Addr::new(10, 0, 0, 254), false),
            (Ipv4Addr::new(10, 0, 0, 9), true),
        ]
        .into_iter()
        .collect();

        let addrs: Vec<Ipv4Addr> = pool.iter().map(|(addr, _)| addr).collect();
        assert_eq!(
            addrs,
            vec![
                Ipv4Addr::new(10, 0, 0, 9),
                Ipv4Addr::new(10, 0, 0, 254),
                Ipv4Addr::new(10, 0, 1, 0),
            ]
        );
    }

    #[test]
    fn test_json_serialization() {
        let pool: AddressPool = [(Ipv4Addr::new(10, 0, 0, 1), true)].into_iter().collect();
        let json = serde_json::to_string(&pool).unwrap();
        assert_eq!(json, r#"{"10.0.0.1":true}"#);
    }
}
