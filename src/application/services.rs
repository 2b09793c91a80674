//! Application services and use cases

use crate::domain::processing::{ProcessResult, ProcessingUnit};
use crate::shared::errors::AppError;
use crate::shared::types::ProcessorConfig;
use crate::shared::utils;

/// Application service for processing operations
pub struct ProcessingService {
    config: ProcessorConfig,
}

impl ProcessingService {
    /// Create new processing service
    pub fn new(config: &ProcessorConfig) -> Result<Self, AppError> {
        Ok(Self {
            config: config.clone(),
        })
    }

    /// Run the requested number of sequential processing cycles
    pub async fn run_batch(&self, runs: u32) -> Result<Vec<ProcessResult>, AppError> {
        let batch_id = utils::generate_id();
        println!("🚀 Starting processing batch {}", batch_id);
        println!("🔁 Cycles requested: {}", runs);

        let mut unit = ProcessingUnit::new(self.config.clone());
        let mut results = Vec::with_capacity(runs as usize);

        for round in 1..=runs {
            let result = unit.execute().await;
            if result.success {
                println!("✅ Cycle {} completed", round);
            } else {
                println!("❌ Cycle {} failed: {}", round, result.message);
            }
            results.push(result);
        }

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_processing_service_creation() {
        let config = ProcessorConfig::default();
        let service = ProcessingService::new(&config);
        assert!(service.is_ok());
    }

    #[tokio::test]
    async fn test_run_batch_returns_results_in_order() {
        let service = ProcessingService::new(&ProcessorConfig::default()).unwrap();
        let results = service.run_batch(2).await.unwrap();

        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.success));
        assert_eq!(results[0].data.as_ref().unwrap().processed, 1);
        assert_eq!(results[1].data.as_ref().unwrap().processed, 2);
    }

    #[tokio::test]
    async fn test_run_batch_zero_runs() {
        let service = ProcessingService::new(&ProcessorConfig::default()).unwrap();
        let results = service.run_batch(0).await.unwrap();
        assert!(results.is_empty());
    }
}
