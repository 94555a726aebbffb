//! Probe coordination - expands a prefix and sweeps it concurrently.
//!
//! This module provides the analysis entry points, fanning probe tasks
//! out across the usable hosts of a subnet with the tokio runtime and
//! joining them all before any result is returned.

pub mod icmp;
pub mod traits;

use crate::error::AnalyzeError;
use crate::types::{AddressPool, NetworkPrefix};
use futures::stream::{self, StreamExt};
use serde::Serialize;
use std::net::Ipv4Addr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;
use tracing::debug;

pub use icmp::{IcmpProber, DEFAULT_PROBE_ATTEMPTS, DEFAULT_PROBE_TIMEOUT};
pub use traits::{BoxedProber, Prober};

/// Configuration for a sweep.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    /// CIDR string naming the subnet to analyze.
    pub cidr: String,
    /// Maximum in-flight probes; 0 means one per host (unbounded).
    pub concurrency: usize,
    /// Overall probe time budget per host.
    pub timeout: Duration,
    /// Echo attempts per host.
    pub attempts: u8,
}

impl SweepConfig {
    /// Create a sweep configuration with the default probe parameters.
    pub fn new(cidr: impl Into<String>) -> Self {
        Self {
            cidr: cidr.into(),
            concurrency: 0,
            timeout: DEFAULT_PROBE_TIMEOUT,
            attempts: DEFAULT_PROBE_ATTEMPTS,
        }
    }

    /// Cap the number of in-flight probes.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    /// Set the per-host time budget.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the echo attempt count.
    pub fn with_attempts(mut self, attempts: u8) -> Self {
        self.attempts = attempts;
        self
    }
}

/// Complete results of one sweep.
#[derive(Debug, Clone, Serialize)]
pub struct SweepResults {
    pub cidr: String,
    pub usable_hosts: u64,
    pub probed: usize,
    pub reachable: usize,
    pub unreachable: usize,
    pub dropped: u64,
    pub duration_ms: u64,
    pub pool: AddressPool,
}

/// Analyze a subnet with the default ICMP prober.
///
/// This is the core entry point: parse the CIDR string, expand the
/// usable hosts, probe them all concurrently, and return the merged
/// pool. The only error is an unparseable input; a host whose probe
/// fails is silently absent from the pool, and if the ICMP socket
/// cannot be opened at all the pool is simply empty.
pub async fn analyze(cidr: &str) -> Result<AddressPool, AnalyzeError> {
    let prefix = NetworkPrefix::parse(cidr)?;
    let hosts: Vec<Ipv4Addr> = prefix.hosts().collect();

    if hosts.is_empty() {
        return Ok(AddressPool::new());
    }

    let prober = match IcmpProber::with_defaults() {
        Ok(prober) => Arc::new(prober),
        Err(e) => {
            debug!(error = %e, "ICMP prober unavailable, dropping all hosts");
            return Ok(AddressPool::new());
        }
    };

    Ok(run_sweep(prober, hosts, 0).await)
}

/// Execute a full sweep with a caller-supplied prober, gathering timing
/// and summary statistics for the renderer.
pub async fn run_analysis<P>(
    prober: Arc<P>,
    config: &SweepConfig,
) -> Result<SweepResults, AnalyzeError>
where
    P: Prober + ?Sized + 'static,
{
    let start_time = Instant::now();

    let prefix = NetworkPrefix::parse(&config.cidr)?;
    let usable_hosts = prefix.usable_hosts();
    let hosts: Vec<Ipv4Addr> = prefix.hosts().collect();

    debug!(
        prefix = %prefix,
        hosts = usable_hosts,
        concurrency = config.concurrency,
        "starting sweep"
    );

    let pool = run_sweep(prober, hosts, config.concurrency).await;
    let duration = start_time.elapsed();

    let probed = pool.len();
    let reachable = pool.reachable_count();
    let unreachable = pool.unreachable_count();
    let dropped = usable_hosts - probed as u64;

    debug!(probed, reachable, dropped, "sweep finished");

    Ok(SweepResults {
        cidr: prefix.to_string(),
        usable_hosts,
        probed,
        reachable,
        unreachable,
        dropped,
        duration_ms: duration.as_millis() as u64,
        pool,
    })
}

/// Probe every host concurrently and merge the outcomes into a pool.
///
/// Every host gets its own probe future, launched eagerly; `concurrency`
/// bounds how many are in flight at once (0 = no bound). The stream
/// collect is the join barrier: it completes only after every dispatched
/// probe has finished, including the ones that errored and contribute
/// nothing.
pub async fn run_sweep<P>(
    prober: Arc<P>,
    hosts: Vec<Ipv4Addr>,
    concurrency: usize,
) -> AddressPool
where
    P: Prober + ?Sized + 'static,
{
    let fan_out = hosts.len().max(1);
    let permits = if concurrency == 0 { fan_out } else { concurrency };
    let semaphore = Arc::new(Semaphore::new(permits));

    let outcomes: Vec<Option<(Ipv4Addr, bool)>> = stream::iter(hosts)
        .map(|addr| {
            let prober = Arc::clone(&prober);
            let sem = Arc::clone(&semaphore);

            async move {
                // Never closed, so acquire cannot fail.
                let _permit = sem.acquire().await.unwrap();

                match prober.probe(addr).await {
                    Ok(reachable) => Some((addr, reachable)),
                    Err(e) => {
                        debug!(%addr, error = %e, "probe failed, dropping host");
                        None
                    }
                }
            }
        })
        .buffer_unordered(fan_out)
        .collect()
        .await;

    outcomes.into_iter().flatten().collect()
}
