//! Success-flag adapter for callers that only branch on "did it work"

use std::fmt::Display;

/// Collapse a result into a boolean, logging the failure
pub trait Outcome {
    fn succeeded(self, operation: &str) -> bool;
}

impl<T, E: Display> Outcome for Result<T, E> {
    fn succeeded(self, operation: &str) -> bool {
        match self {
            Ok(_) => true,
            Err(err) => {
                tracing::warn!(operation, error = %err, "Operation failed, reporting false");
                false
            }
        }
    }
}
