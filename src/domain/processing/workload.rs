//! Workload abstraction - the inner step a processing cycle performs

use async_trait::async_trait;
use tokio::time::{sleep, Duration};

use crate::shared::errors::ProcessingError;

/// Trait for pluggable workloads
/// This provides a unified interface for the simulated stage and real implementations
#[async_trait]
pub trait Workload: Send + Sync {
    /// Human-readable workload name
    fn name(&self) -> &str;

    /// Perform one unit of work
    async fn perform(&self) -> Result<(), ProcessingError>;
}

/// Simulated workload that suspends for a fixed duration
#[derive(Debug, Clone)]
pub struct SimulatedWorkload {
    duration: Duration,
}

impl SimulatedWorkload {
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }
}

impl Default for SimulatedWorkload {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(100),
        }
    }
}

#[async_trait]
impl Workload for SimulatedWorkload {
    fn name(&self) -> &str {
        "simulated"
    }

    async fn perform(&self) -> Result<(), ProcessingError> {
        sleep(self.duration).await;
        Ok(())
    }
}
