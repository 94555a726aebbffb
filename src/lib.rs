//! # ipsweep - A Concurrent IPv4 Subnet Reachability Analyzer
//!
//! ipsweep discovers which hosts in an IPv4 network are currently
//! reachable by probing every usable host address concurrently and
//! reporting a per-address used/free status.
//!
//! ## Features
//!
//! - **CIDR Expansion**: Parses `A.B.C.D/N` input and enumerates every
//!   usable host (network and broadcast excluded)
//! - **Concurrent Probing**: One async probe task per host, with an
//!   optional concurrency cap for large subnets
//! - **ICMP Echo**: Up to 2 echo attempts per host under a 5-second budget
//! - **Multiple Output Formats**: Plain text, JSON, and CSV
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use ipsweep::probe::analyze;
//!
//! #[tokio::main]
//! async fn main() {
//!     let pool = analyze("192.168.1.0/24").await.unwrap();
//!
//!     for (addr, reachable) in pool.iter() {
//!         println!("{} is {}", addr, if reachable { "used" } else { "free" });
//!     }
//! }
//! ```
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`types`] - Network prefix, host range, and address pool types
//! - [`probe`] - The `Prober` trait, ICMP implementation, and sweep coordinator
//! - [`config`] - Application settings
//! - [`error`] - Error types
//! - [`output`] - Output formatting utilities
//!
//! Probe failures are deliberately silent: a host whose check errors is
//! absent from the final pool rather than reported as unreachable, and
//! only an unparseable CIDR string fails a whole analysis.

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod probe;
pub mod types;

// Re-export commonly used types
pub use error::{AnalyzeError, CliError, ProbeError};
pub use probe::{analyze, IcmpProber, Prober, SweepConfig, SweepResults};
pub use types::{AddressPool, HostRange, NetworkPrefix};
