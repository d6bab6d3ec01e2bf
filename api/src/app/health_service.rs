//! Health service
//!
//! Tracks whether the startup connectivity probe succeeded and runs probes on demand.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::domain::ports::{DatabaseProbe, ProbeResult};
use crate::error::DomainError;

/// Connectivity flag set once at startup
#[derive(Debug, Default)]
pub struct DatabaseStatus {
    connected: AtomicBool,
}

impl DatabaseStatus {
    pub fn new(connected: bool) -> Self {
        Self {
            connected: AtomicBool::new(connected),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::Acquire)
    }

    pub fn set_connected(&self, connected: bool) {
        self.connected.store(connected, Ordering::Release);
    }
}

pub struct HealthService<DP>
where
    DP: DatabaseProbe + ?Sized,
{
    probe: Arc<DP>,
    status: Arc<DatabaseStatus>,
}

impl<DP> HealthService<DP>
where
    DP: DatabaseProbe + ?Sized,
{
    pub fn new(probe: Arc<DP>, status: Arc<DatabaseStatus>) -> Self {
        Self { probe, status }
    }

    pub fn is_connected(&self) -> bool {
        self.status.is_connected()
    }

    /// Probe the database and record the outcome in the connectivity flag
    pub async fn initialize(&self) -> Result<ProbeResult, DomainError> {
        let result = self.probe.probe().await;
        self.status.set_connected(result.is_ok());
        result
    }

    /// Probe without touching the connectivity flag
    pub async fn check(&self) -> Result<ProbeResult, DomainError> {
        self.probe.probe().await
    }
}
