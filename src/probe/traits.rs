//! Prober trait abstraction.
//!
//! Defines a common interface over the reachability-check mechanism,
//! enabling polymorphism and easier testing of the sweep coordinator.

use crate::error::ProbeResult;
use async_trait::async_trait;
use std::net::Ipv4Addr;
use std::time::Duration;

/// Trait for single-host reachability probes.
///
/// A probe has three outcomes, and the distinction matters to the
/// coordinator:
///
/// - `Ok(true)` - at least one echo reply was received
/// - `Ok(false)` - the check completed with zero replies
/// - `Err(_)` - the check could not be performed at all
///
/// # Example
///
/// ```ignore
/// use ipsweep::probe::Prober;
///
/// async fn check<P: Prober>(prober: &P, addr: std::net::Ipv4Addr) -> bool {
///     prober.probe(addr).await.unwrap_or(false)
/// }
/// ```
#[async_trait]
pub trait Prober: Send + Sync {
    /// Probe a single host address.
    async fn probe(&self, addr: Ipv4Addr) -> ProbeResult<bool>;

    /// Check if this prober requires elevated privileges.
    fn requires_privileges(&self) -> bool;

    /// Overall time budget for one host's check.
    fn timeout(&self) -> Duration;

    /// Echo attempts within the budget.
    fn attempts(&self) -> u8;
}

/// A boxed prober for dynamic dispatch.
pub type BoxedProber = Box<dyn Prober>;
