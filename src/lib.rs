//! Procunit - Async Processing Pipeline Scaffold
//! Built with Domain-Driven Design principles

pub mod domain;
pub mod application;
pub mod shared;

// Re-export main types for convenience
pub use application::ProcessingService;
pub use domain::processing::{ProcessPayload, ProcessResult, ProcessingUnit};
pub use shared::types::ProcessorConfig;
