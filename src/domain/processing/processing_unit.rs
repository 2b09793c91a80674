//! Processing unit - wraps a workload with timing, logging and error translation

use std::time::Instant;

use chrono::Utc;
use tracing::info;

use super::workload::{SimulatedWorkload, Workload};
use super::{ProcessPayload, ProcessResult, STATUS_COMPLETED};
use crate::shared::errors::AppError;
use crate::shared::types::ProcessorConfig;

/// Main processing unit that drives one workload through repeated cycles
pub struct ProcessingUnit {
    config: ProcessorConfig,
    processed: u64,
    workload: Box<dyn Workload>,
}

impl ProcessingUnit {
    pub fn new(config: ProcessorConfig) -> Self {
        Self {
            config,
            processed: 0,
            workload: Box::new(SimulatedWorkload::default()),
        }
    }

    /// Create a unit with a custom workload in place of the simulated one
    pub fn with_workload(config: ProcessorConfig, workload: Box<dyn Workload>) -> Self {
        Self {
            config,
            processed: 0,
            workload,
        }
    }

    /// Run one processing cycle
    ///
    /// Always resolves to a `ProcessResult`; workload failures are
    /// translated into a failure envelope instead of propagating.
    pub async fn execute(&mut self) -> ProcessResult {
        let started = Instant::now();

        if self.config.verbose {
            info!("Initializing processing cycle");
        }

        match self.process().await {
            Ok(payload) => {
                if self.config.verbose {
                    info!(
                        "Processing cycle finished in {}ms",
                        started.elapsed().as_millis()
                    );
                }
                ProcessResult::success(payload)
            }
            Err(err) => ProcessResult::failure(&err),
        }
    }

    async fn process(&mut self) -> Result<ProcessPayload, AppError> {
        self.workload.perform().await?;
        self.processed += 1;

        Ok(ProcessPayload {
            processed: self.processed,
            status: STATUS_COMPLETED.to_string(),
            timestamp: Utc::now().to_rfc3339(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::processing::{SUCCESS_MESSAGE, UNKNOWN_ERROR};
    use crate::shared::errors::ProcessingError;
    use async_trait::async_trait;

    struct FailingWorkload;

    #[async_trait]
    impl Workload for FailingWorkload {
        fn name(&self) -> &str {
            "failing"
        }

        async fn perform(&self) -> Result<(), ProcessingError> {
            Err(ProcessingError::WorkloadFailed("simulated outage".to_string()))
        }
    }

    #[tokio::test]
    async fn test_single_execute_succeeds() {
        let before = Utc::now();
        let mut unit = ProcessingUnit::new(ProcessorConfig::default());

        let result = unit.execute().await;

        assert!(result.success);
        assert_eq!(result.message, SUCCESS_MESSAGE);
        assert!(result.timestamp >= before);

        let payload = result.data.expect("successful result carries a payload");
        assert_eq!(payload.processed, 1);
        assert_eq!(payload.status, STATUS_COMPLETED);
    }

    #[tokio::test]
    async fn test_sequential_executes_advance_counter() {
        let config = ProcessorConfig {
            verbose: true,
            ..ProcessorConfig::default()
        };
        let mut unit = ProcessingUnit::new(config);

        for expected in 1..=3u64 {
            let result = unit.execute().await;
            assert_eq!(result.data.unwrap().processed, expected);
        }
    }

    #[tokio::test]
    async fn test_payload_timestamp_is_rfc3339() {
        let mut unit = ProcessingUnit::new(ProcessorConfig::default());
        let payload = unit.execute().await.data.unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(&payload.timestamp).is_ok());
    }

    #[tokio::test]
    async fn test_workload_failure_is_translated_not_propagated() {
        let mut unit =
            ProcessingUnit::with_workload(ProcessorConfig::default(), Box::new(FailingWorkload));

        let result = unit.execute().await;

        assert!(!result.success);
        assert!(result.data.is_none());
        assert!(result.message.contains("simulated outage"));
    }

    #[tokio::test]
    async fn test_failed_cycle_does_not_advance_counter() {
        let mut unit =
            ProcessingUnit::with_workload(ProcessorConfig::default(), Box::new(FailingWorkload));
        unit.execute().await;

        unit.workload = Box::new(SimulatedWorkload::default());
        let result = unit.execute().await;
        assert_eq!(result.data.unwrap().processed, 1);
    }

    #[test]
    fn test_failure_without_description_falls_back() {
        let result = ProcessResult::failure(&AppError::Unknown);
        assert_eq!(result.message, UNKNOWN_ERROR);
        assert!(!result.success);
    }
}
