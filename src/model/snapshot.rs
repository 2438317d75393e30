/*!
 * Allocation Snapshots
 * Immutable views of system state at one instant
 *
 * Both snapshot kinds share the process/resource entity sets but carry the
 * matrices their analysis needs. Callers modeling live request traffic must
 * assemble a consistent snapshot themselves; the analyses hold no locks and
 * retain no state between calls.
 */

use super::matrix::{ensure_shape, ensure_width, Matrix};
use crate::core::errors::AnalysisError;
use crate::core::types::{AnalysisResult, ProcessId, ResourceId, Units};
use serde::{Deserialize, Serialize};

/// Input to the Banker's safety evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetySnapshot {
    pub processes: Vec<ProcessId>,
    pub resources: Vec<ResourceId>,
    /// Currently free units of each resource type
    pub available: Vec<Units>,
    /// Row i = maximum units process i may ever hold simultaneously
    pub max_need: Matrix,
    /// Row i = units currently held by process i
    pub allocation: Matrix,
}

impl SafetySnapshot {
    /// Check dimensions before analysis runs
    pub fn validate(&self) -> AnalysisResult<()> {
        let (rows, cols) = (self.processes.len(), self.resources.len());
        ensure_width("available", &self.available, cols)?;
        ensure_shape("max_need", &self.max_need, rows, cols)?;
        ensure_shape("allocation", &self.allocation, rows, cols)?;
        Ok(())
    }

    /// Derive `Need[i][j] = MaxNeed[i][j] - Allocation[i][j]`
    ///
    /// An allocation exceeding the declared maximum need is a data-integrity
    /// error, not an unsafe verdict.
    pub fn need(&self) -> AnalysisResult<Matrix> {
        self.max_need
            .iter()
            .zip(&self.allocation)
            .enumerate()
            .map(|(i, (max_row, alloc_row))| {
                max_row
                    .iter()
                    .zip(alloc_row)
                    .enumerate()
                    .map(|(j, (max, alloc))| {
                        max.checked_sub(*alloc).ok_or_else(|| {
                            AnalysisError::MalformedInput(format!(
                                "allocation[{i}][{j}] = {alloc} exceeds declared max need {max} \
                                 for process {}",
                                self.processes[i]
                            ))
                        })
                    })
                    .collect()
            })
            .collect()
    }
}

/// Input to resource-allocation-graph deadlock detection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionSnapshot {
    pub processes: Vec<ProcessId>,
    pub resources: Vec<ResourceId>,
    /// Row i = units currently held by process i
    pub allocation: Matrix,
    /// Row i = units process i is asking for but has not received
    pub request: Matrix,
}

impl DetectionSnapshot {
    /// Check dimensions before analysis runs
    pub fn validate(&self) -> AnalysisResult<()> {
        let (rows, cols) = (self.processes.len(), self.resources.len());
        ensure_shape("allocation", &self.allocation, rows, cols)?;
        ensure_shape("request", &self.request, rows, cols)?;
        Ok(())
    }
}
