/*!
 * Safety Evaluation Tests
 * Banker's Algorithm verdicts, determinism, and input validation
 */

use deadlock_analyzer::{evaluate_safety, SafetySnapshot};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn labels(prefix: &str, n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("{prefix}{i}")).collect()
}

/// The classic five-process, three-resource textbook snapshot
fn textbook_snapshot() -> SafetySnapshot {
    SafetySnapshot {
        processes: labels("P", 5),
        resources: labels("R", 3),
        available: vec![3, 3, 2],
        max_need: vec![
            vec![7, 5, 3],
            vec![3, 2, 2],
            vec![9, 0, 2],
            vec![2, 2, 2],
            vec![4, 3, 3],
        ],
        allocation: vec![
            vec![0, 1, 0],
            vec![2, 0, 0],
            vec![3, 0, 2],
            vec![2, 1, 1],
            vec![0, 0, 2],
        ],
    }
}

#[test]
fn test_textbook_snapshot_is_safe() {
    let verdict = evaluate_safety(&textbook_snapshot()).unwrap();
    assert!(verdict.safe);
    // Index-order scan with immediate release fixes the produced order
    assert_eq!(verdict.order, vec!["P2", "P4", "P5", "P1", "P3"]);
}

#[test]
fn test_unsafe_when_no_process_can_proceed() {
    let snapshot = SafetySnapshot {
        processes: labels("P", 2),
        resources: labels("R", 2),
        available: vec![0, 0],
        max_need: vec![vec![1, 1], vec![1, 1]],
        allocation: vec![vec![1, 0], vec![0, 1]],
    };
    let verdict = evaluate_safety(&snapshot).unwrap();
    assert!(!verdict.safe);
    assert!(verdict.order.is_empty());
}

#[test]
fn test_replaying_returned_order_is_sound() {
    let snapshot = textbook_snapshot();
    let verdict = evaluate_safety(&snapshot).unwrap();
    assert!(verdict.safe);

    let need = snapshot.need().unwrap();
    let mut work = snapshot.available.clone();
    for label in &verdict.order {
        let i = snapshot.processes.iter().position(|p| p == label).unwrap();
        for j in 0..snapshot.resources.len() {
            assert!(need[i][j] <= work[j], "{label} scheduled before its need fit");
            work[j] += snapshot.allocation[i][j];
        }
    }
}

#[test]
fn test_allocation_over_max_need_is_malformed() {
    let mut snapshot = textbook_snapshot();
    snapshot.allocation[2][0] = 10; // max_need[2][0] is 9
    let err = evaluate_safety(&snapshot).unwrap_err();
    assert!(err.to_string().contains("exceeds declared max need"));
}

#[test]
fn test_wrong_row_count_is_malformed() {
    let mut snapshot = textbook_snapshot();
    snapshot.allocation.pop();
    assert!(evaluate_safety(&snapshot).is_err());
}

#[test]
fn test_ragged_row_is_malformed() {
    let mut snapshot = textbook_snapshot();
    snapshot.max_need[1] = vec![3, 2];
    assert!(evaluate_safety(&snapshot).is_err());
}

#[test]
fn test_wrong_available_length_is_malformed() {
    let mut snapshot = textbook_snapshot();
    snapshot.available = vec![3, 3];
    assert!(evaluate_safety(&snapshot).is_err());
}

#[test]
fn test_repeated_calls_are_identical() {
    let snapshot = textbook_snapshot();
    let first = evaluate_safety(&snapshot).unwrap();
    let second = evaluate_safety(&snapshot).unwrap();
    assert_eq!(first, second);
}

fn arbitrary_snapshot() -> impl Strategy<Value = SafetySnapshot> {
    (1usize..5, 1usize..4).prop_flat_map(|(p, r)| {
        (
            prop::collection::vec(prop::collection::vec(0u64..4, r), p),
            prop::collection::vec(prop::collection::vec(0u64..4, r), p),
            prop::collection::vec(0u64..6, r),
        )
            .prop_map(move |(allocation, headroom, available)| {
                // Max need = allocation + headroom keeps Need non-negative
                let max_need = allocation
                    .iter()
                    .zip(&headroom)
                    .map(|(a_row, h_row)| {
                        a_row.iter().zip(h_row).map(|(a, h)| a + h).collect()
                    })
                    .collect();
                SafetySnapshot {
                    processes: labels("P", p),
                    resources: labels("R", r),
                    available,
                    max_need,
                    allocation,
                }
            })
    })
}

proptest! {
    #[test]
    fn prop_evaluation_is_deterministic(snapshot in arbitrary_snapshot()) {
        let first = evaluate_safety(&snapshot).unwrap();
        let second = evaluate_safety(&snapshot).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_safe_orders_replay_soundly(snapshot in arbitrary_snapshot()) {
        let verdict = evaluate_safety(&snapshot).unwrap();
        if verdict.safe {
            prop_assert_eq!(verdict.order.len(), snapshot.processes.len());
            let need = snapshot.need().unwrap();
            let mut work = snapshot.available.clone();
            for label in &verdict.order {
                let i = snapshot.processes.iter().position(|p| p == label).unwrap();
                for j in 0..snapshot.resources.len() {
                    prop_assert!(need[i][j] <= work[j]);
                    work[j] += snapshot.allocation[i][j];
                }
            }
        } else {
            prop_assert!(verdict.order.is_empty());
        }
    }
}
