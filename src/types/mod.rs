//! Core type definitions for subnet analysis.
//!
//! These types prevent common logic errors by making invalid states
//! unrepresentable: a [`NetworkPrefix`] always carries a valid prefix
//! length, and an [`AddressPool`] is always keyed by address value.

mod pool;
mod prefix;
mod range;

pub use pool::AddressPool;
pub use prefix::NetworkPrefix;
pub use range::HostRange;
