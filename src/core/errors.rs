/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Analyzer errors with serialization support
///
/// The core boundary has a single failure kind: malformed input. Analysis is
/// pure computation over a validated snapshot, so there is nothing transient
/// to retry and no partial result to surface.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum AnalysisError {
    #[error("Malformed input: {0}")]
    #[diagnostic(
        code(analysis::malformed_input),
        help(
            "Every matrix needs one row per process and one column per resource, \
             every entry must be a non-negative integer, and no allocation may \
             exceed the declared maximum need."
        )
    )]
    MalformedInput(String),
}
