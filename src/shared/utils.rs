//! Utility functions and helpers

/// Calculate success rate as a percentage
pub fn success_rate(succeeded: usize, total: usize) -> f64 {
    if total > 0 {
        (succeeded as f64 / total as f64) * 100.0
    } else {
        0.0
    }
}

/// Format a millisecond duration for display
pub fn format_elapsed_ms(elapsed_ms: u64) -> String {
    if elapsed_ms >= 1000 {
        format!("{:.2}s", elapsed_ms as f64 / 1000.0)
    } else {
        format!("{}ms", elapsed_ms)
    }
}

/// Generate unique ID
pub fn generate_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
