/*!
 * Deadlock Analyzer Library
 * Pure analysis engine over resource-allocation snapshots:
 * - Banker's Algorithm safety evaluation
 * - Resource-allocation-graph deadlock detection with cycle identification
 */

pub mod analysis;
pub mod core;
pub mod input;
pub mod model;
pub mod trace;

// Re-exports
pub use analysis::graph::{
    analyze_deadlock, DeadlockVerdict, EdgeKind, GraphEdge, GraphNode, GraphView, NodeKind,
};
pub use analysis::safety::{evaluate_safety, SafetyVerdict};
pub use crate::core::errors::AnalysisError;
pub use crate::core::types::{AnalysisResult, NodeId, ProcessId, ResourceId, Units};
pub use model::{DetectionSnapshot, Matrix, SafetySnapshot};
pub use trace::init_tracing;
