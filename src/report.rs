// src/report.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use procunit::domain::processing::ProcessResult;
use procunit::shared::utils;

#[derive(Debug, Serialize, Deserialize)]
pub struct ProcessingReport {
    pub results: Vec<ProcessResult>,
    pub summary: RunSummary,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elapsed_ms: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RunSummary {
    pub total_runs: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub last_processed: Option<u64>,
}

impl ProcessingReport {
    pub fn new(results: Vec<ProcessResult>) -> Self {
        let summary = RunSummary::from_results(&results);
        Self {
            results,
            summary,
            timestamp: Utc::now(),
            elapsed_ms: None,
        }
    }

    pub fn with_elapsed_ms(mut self, elapsed_ms: u64) -> Self {
        self.elapsed_ms = Some(elapsed_ms);
        self
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn print_summary(&self) {
        println!("\n📊 Processing report");
        println!("  Cycles: {}", self.summary.total_runs);
        println!("  Succeeded: {}", self.summary.succeeded);
        println!("  Failed: {}", self.summary.failed);
        println!(
            "  Success rate: {:.1}%",
            utils::success_rate(self.summary.succeeded, self.summary.total_runs)
        );
        if let Some(processed) = self.summary.last_processed {
            println!("  Total processed: {}", processed);
        }
        if let Some(elapsed_ms) = self.elapsed_ms {
            println!("  Elapsed: {}", utils::format_elapsed_ms(elapsed_ms));
        }
    }
}

impl RunSummary {
    fn from_results(results: &[ProcessResult]) -> Self {
        let succeeded = results.iter().filter(|r| r.success).count();
        let last_processed = results
            .iter()
            .rev()
            .find_map(|r| r.data.as_ref().map(|d| d.processed));

        Self {
            total_runs: results.len(),
            succeeded,
            failed: results.len() - succeeded,
            last_processed,
        }
    }
}
