//! Error type for bounding box parsing.

use thiserror::Error;

/// Error raised when a bounding-box string does not contain exactly four
/// numeric values.
///
/// This is the only failure mode of the crate. Callers that treat spatial
/// filtering as best-effort catch it and proceed without a spatial clause.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("wrong bounding box format: {reason} in {input:?}")]
pub struct WrongBoundingBoxFormat {
    /// The raw input that failed to parse.
    pub input: String,
    /// What was wrong with it.
    pub reason: String,
}

impl WrongBoundingBoxFormat {
    /// Creates an error for the given input.
    pub fn new(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            reason: reason.into(),
        }
    }
}
