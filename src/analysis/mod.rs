/*!
 * Analysis Module
 * The two analysis entry points: safety evaluation and deadlock detection
 *
 * Both are pure functions from an immutable snapshot to a verdict. They share
 * no state and may be called concurrently with different inputs.
 */

pub mod graph;
pub mod safety;

// Re-export public API
pub use graph::{analyze_deadlock, DeadlockVerdict, EdgeKind, GraphEdge, GraphNode, GraphView, NodeKind};
pub use safety::{evaluate_safety, SafetyVerdict};
