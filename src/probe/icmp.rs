//! ICMP echo prober implementation.
//!
//! Performs reachability checks by sending ICMP echo requests through a
//! shared `surge-ping` client. Opening the ICMP socket usually requires
//! root privileges (or a permissive `net.ipv4.ping_group_range`).

use crate::error::{ProbeError, ProbeResult};
use crate::probe::traits::Prober;
use async_trait::async_trait;
use std::io;
use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;
use surge_ping::{Client, Config, PingIdentifier, PingSequence, SurgeError};
use tokio::time::timeout;

/// Default overall time budget for one host's check.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Default number of echo attempts per host.
pub const DEFAULT_PROBE_ATTEMPTS: u8 = 2;

/// Echo payload size in bytes (standard 64-byte ICMP packet).
const PAYLOAD_SIZE: usize = 56;

/// ICMP echo prober.
///
/// One socket is shared across all in-flight probes; each probe gets a
/// random ICMP identifier so replies are demultiplexed per host.
///
/// # Outcome mapping
///
/// - any echo reply within the budget: reachable
/// - every attempt times out, or the budget expires: unreachable
/// - socket or transport failure: probe error (host dropped by the caller)
pub struct IcmpProber {
    client: Client,
    timeout: Duration,
    attempts: u8,
}

impl IcmpProber {
    /// Create a new ICMP prober.
    ///
    /// Fails if the ICMP socket cannot be opened, which on most systems
    /// means the process lacks raw-socket privileges.
    ///
    /// # Arguments
    /// * `timeout` - overall time budget per host
    /// * `attempts` - echo attempts per host (clamped to at least 1)
    pub fn new(timeout: Duration, attempts: u8) -> ProbeResult<Self> {
        let client = Client::new(&Config::default()).map_err(classify_io_error)?;

        Ok(Self {
            client,
            timeout,
            attempts: attempts.max(1),
        })
    }

    /// Create a prober with the original defaults: 2 attempts, 5 seconds.
    pub fn with_defaults() -> ProbeResult<Self> {
        Self::new(DEFAULT_PROBE_TIMEOUT, DEFAULT_PROBE_ATTEMPTS)
    }

    /// Run the echo attempts for one host, without the overall budget.
    async fn attempt_echo(&self, addr: Ipv4Addr) -> ProbeResult<bool> {
        let payload = [0u8; PAYLOAD_SIZE];
        let ident = PingIdentifier(rand::random());
        let mut pinger = self.client.pinger(IpAddr::V4(addr), ident).await;
        pinger.timeout(self.attempt_timeout());

        for seq in 0..self.attempts {
            match pinger.ping(PingSequence(u16::from(seq)), &payload).await {
                Ok(_) => return Ok(true),
                Err(SurgeError::Timeout { .. }) => continue,
                Err(SurgeError::IOError(e)) => return Err(classify_io_error(e)),
                Err(e) => return Err(ProbeError::Transport(e.to_string())),
            }
        }

        Ok(false)
    }

    /// Per-attempt slice of the overall budget.
    fn attempt_timeout(&self) -> Duration {
        self.timeout / u32::from(self.attempts.max(1))
    }
}

#[async_trait]
impl Prober for IcmpProber {
    fn requires_privileges(&self) -> bool {
        true
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }

    fn attempts(&self) -> u8 {
        self.attempts
    }

    async fn probe(&self, addr: Ipv4Addr) -> ProbeResult<bool> {
        match timeout(self.timeout, self.attempt_echo(addr)).await {
            Ok(outcome) => outcome,
            // Budget expired with no reply and no hard failure.
            Err(_) => Ok(false),
        }
    }
}

/// Map socket errors to the probe error taxonomy.
fn classify_io_error(e: io::Error) -> ProbeError {
    if e.kind() == io::ErrorKind::PermissionDenied {
        ProbeError::PermissionDenied(e.to_string())
    } else {
        ProbeError::Io(e)
    }
}
