/*!
 * Banker's Algorithm Safety Evaluation
 * Decide whether every process can run to completion from the current state
 *
 * The evaluator repeatedly scans unfinished processes in index order. A
 * process whose remaining need fits inside the working pool finishes
 * immediately, releasing its allocation into the pool before the next
 * candidate in the same pass is checked, and the pass restarts from index 0
 * after any progress. The returned sequence is one valid safe order among
 * possibly several; this scan policy makes it deterministic for a given
 * input.
 */

use crate::core::types::{AnalysisResult, ProcessId};
use crate::model::SafetySnapshot;
use serde::{Deserialize, Serialize};

/// Outcome of a safety evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyVerdict {
    /// Whether a safe completion order exists
    pub safe: bool,
    /// A safe completion order, empty when unsafe
    pub order: Vec<ProcessId>,
}

/// Run the Banker's safety check over a snapshot
///
/// O(processes² × resources) worst case: one process may finish per full pass.
pub fn evaluate_safety(snapshot: &SafetySnapshot) -> AnalysisResult<SafetyVerdict> {
    snapshot.validate()?;
    let need = snapshot.need()?;

    let n_processes = snapshot.processes.len();
    let n_resources = snapshot.resources.len();

    let mut work = snapshot.available.clone();
    let mut finished = vec![false; n_processes];
    let mut order = Vec::with_capacity(n_processes);

    loop {
        let mut progressed = false;
        for i in 0..n_processes {
            if finished[i] {
                continue;
            }
            if (0..n_resources).all(|j| need[i][j] <= work[j]) {
                for j in 0..n_resources {
                    work[j] += snapshot.allocation[i][j];
                }
                finished[i] = true;
                order.push(snapshot.processes[i].clone());
                progressed = true;
            }
        }
        if !progressed {
            break;
        }
    }

    if finished.iter().all(|&f| f) {
        Ok(SafetyVerdict { safe: true, order })
    } else {
        Ok(SafetyVerdict {
            safe: false,
            order: Vec::new(),
        })
    }
}
