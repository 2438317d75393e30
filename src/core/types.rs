/*!
 * Core Types
 * Common types used across the analyzer
 */

/// Process label type
///
/// An opaque identifier; its position in the snapshot's process list is the
/// row index into every per-process matrix.
pub type ProcessId = String;

/// Resource label type, column-indexed the same way
pub type ResourceId = String;

/// Graph node label (a process or resource label, kind-tagged in the graph)
pub type NodeId = String;

/// Resource unit count
pub type Units = u64;

/// Common result type for analyzer operations
pub type AnalysisResult<T> = Result<T, super::errors::AnalysisError>;
