/*!
 * Resource-Allocation-Graph Deadlock Detection
 * Build the directed allocation/request graph and search it for a cycle
 *
 * Nodes are inserted processes-first in input order, then resources in input
 * order; per matrix cell the assignment edge (resource to process) is added
 * before the request edge (process to resource). The first cycle closed by a
 * depth-first search in that fixed order is the one reported. Multiple
 * simultaneous cycles are not enumerated, and cycle-implies-deadlock is exact
 * only when every resource type has a single instance; the analyzer does not
 * verify instance counts.
 */

use crate::core::types::{AnalysisResult, NodeId};
use crate::model::DetectionSnapshot;
use serde::{Deserialize, Serialize};

/// Graph node kind tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Process,
    Resource,
}

/// Graph edge kind tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    /// Resource to process: units are held
    Assignment,
    /// Process to resource: units are awaited
    Request,
}

/// A kind-tagged graph node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    pub label: NodeId,
    pub kind: NodeKind,
}

/// A directed, kind-tagged graph edge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub from: NodeId,
    pub to: NodeId,
    pub kind: EdgeKind,
}

/// The constructed graph, exposed for external renderers
///
/// The graph is unweighted; a cell with multiple units still yields a single
/// edge. It is rebuilt fresh on every call and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphView {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

/// Outcome of a deadlock detection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadlockVerdict {
    /// Whether the graph contains a cycle
    pub deadlocked: bool,
    /// The first cycle found, as the ordered edge sequence that closed it
    pub cycle: Vec<(NodeId, NodeId)>,
    pub graph: GraphView,
}

/// Build the resource-allocation graph from a snapshot and search for a cycle
pub fn analyze_deadlock(snapshot: &DetectionSnapshot) -> AnalysisResult<DeadlockVerdict> {
    snapshot.validate()?;

    let n_processes = snapshot.processes.len();
    let n_resources = snapshot.resources.len();
    let n_nodes = n_processes + n_resources;

    // Node index space: processes occupy 0..n_processes, resources follow
    let resource_node = |j: usize| n_processes + j;
    let label = |idx: usize| -> NodeId {
        if idx < n_processes {
            snapshot.processes[idx].clone()
        } else {
            snapshot.resources[idx - n_processes].clone()
        }
    };

    let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); n_nodes];
    let mut edges = Vec::new();
    for i in 0..n_processes {
        for j in 0..n_resources {
            if snapshot.allocation[i][j] > 0 {
                adjacency[resource_node(j)].push(i);
                edges.push(GraphEdge {
                    from: snapshot.resources[j].clone(),
                    to: snapshot.processes[i].clone(),
                    kind: EdgeKind::Assignment,
                });
            }
            if snapshot.request[i][j] > 0 {
                adjacency[i].push(resource_node(j));
                edges.push(GraphEdge {
                    from: snapshot.processes[i].clone(),
                    to: snapshot.resources[j].clone(),
                    kind: EdgeKind::Request,
                });
            }
        }
    }

    let nodes = snapshot
        .processes
        .iter()
        .map(|p| GraphNode {
            label: p.clone(),
            kind: NodeKind::Process,
        })
        .chain(snapshot.resources.iter().map(|r| GraphNode {
            label: r.clone(),
            kind: NodeKind::Resource,
        }))
        .collect();

    let cycle = find_cycle(&adjacency)
        .unwrap_or_default()
        .into_iter()
        .map(|(from, to)| (label(from), label(to)))
        .collect::<Vec<_>>();

    Ok(DeadlockVerdict {
        deadlocked: !cycle.is_empty(),
        cycle,
        graph: GraphView { nodes, edges },
    })
}

#[derive(Clone, Copy, PartialEq)]
enum VisitState {
    Unvisited,
    OnPath,
    Done,
}

/// Iterative DFS back-edge search returning the first cycle's edge sequence
///
/// Start nodes and neighbors are taken in insertion order, so the result is
/// deterministic for a given adjacency list.
fn find_cycle(adjacency: &[Vec<usize>]) -> Option<Vec<(usize, usize)>> {
    let n_nodes = adjacency.len();
    let mut state = vec![VisitState::Unvisited; n_nodes];
    // Stack depth of each on-path node, for cycle reconstruction
    let mut path_depth: Vec<Option<usize>> = vec![None; n_nodes];

    for start in 0..n_nodes {
        if state[start] != VisitState::Unvisited {
            continue;
        }
        // Each frame is (node, next neighbor offset to try)
        let mut stack: Vec<(usize, usize)> = vec![(start, 0)];
        state[start] = VisitState::OnPath;
        path_depth[start] = Some(0);

        while let Some(frame) = stack.last_mut() {
            let node = frame.0;
            if frame.1 < adjacency[node].len() {
                let target = adjacency[node][frame.1];
                frame.1 += 1;
                match state[target] {
                    VisitState::Unvisited => {
                        state[target] = VisitState::OnPath;
                        path_depth[target] = Some(stack.len());
                        stack.push((target, 0));
                    }
                    VisitState::OnPath => {
                        // Back edge: the cycle runs from `target` down the
                        // current path to `node`, then closes over this edge
                        if let Some(pos) = path_depth[target] {
                            let mut cycle: Vec<(usize, usize)> = stack[pos..]
                                .windows(2)
                                .map(|pair| (pair[0].0, pair[1].0))
                                .collect();
                            cycle.push((node, target));
                            return Some(cycle);
                        }
                    }
                    VisitState::Done => {}
                }
            } else {
                state[node] = VisitState::Done;
                path_depth[node] = None;
                stack.pop();
            }
        }
    }
    None
}
