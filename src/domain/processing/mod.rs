//! Processing domain - result envelopes and the unit that produces them

pub mod processing_unit;
pub mod workload;

pub use processing_unit::ProcessingUnit;
pub use workload::{SimulatedWorkload, Workload};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::errors::AppError;

/// Status literal carried by every successful payload
pub const STATUS_COMPLETED: &str = "completed";

/// Message literal for successful cycles
pub const SUCCESS_MESSAGE: &str = "Processing completed successfully";

/// Fallback message for failures that carry no descriptive text
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Payload produced by a successful processing cycle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessPayload {
    pub processed: u64,
    pub status: String,
    pub timestamp: String,
}

/// Processing cycle result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<ProcessPayload>,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl ProcessResult {
    pub fn success(payload: ProcessPayload) -> Self {
        Self {
            success: true,
            data: Some(payload),
            message: SUCCESS_MESSAGE.to_string(),
            timestamp: Utc::now(),
        }
    }

    pub fn failure(err: &AppError) -> Self {
        let description = err.to_string();
        Self {
            success: false,
            data: None,
            message: if description.is_empty() {
                UNKNOWN_ERROR.to_string()
            } else {
                description
            },
            timestamp: Utc::now(),
        }
    }
}
