//! Integration tests for linked skew diagrams: exhaustive round trips over
//! small shapes and k-boundary recognition.

use catalan::enumerate::partitions_of;
use catalan::skew::is_k_boundary;
use catalan::{row_col_to_skew_partition, Partition, SkewPartition};

/// Every skew partition with outer shape of size at most `max` cells
fn small_skews(max: i64) -> Vec<SkewPartition> {
    let mut out = Vec::new();
    for n in 0..=max {
        for outer in partitions_of(n) {
            for m in 0..=n {
                for inner in partitions_of(m) {
                    if outer.contains(&inner) {
                        out.push(SkewPartition::new(outer.clone(), inner).unwrap());
                    }
                }
            }
        }
    }
    out
}

#[test]
fn test_round_trip_over_all_small_linked_skews() {
    let mut linked = 0;
    for sp in small_skews(6) {
        if !sp.is_linked() {
            continue;
        }
        // hollow rows or columns carry no cells, so no reconstruction from
        // row/column lengths alone can remember them
        if sp.row_lengths().contains(&0) || sp.column_lengths().contains(&0) {
            continue;
        }
        linked += 1;
        let rebuilt = row_col_to_skew_partition(&sp.row_lengths(), &sp.column_lengths())
            .unwrap_or_else(|e| panic!("round trip failed for {}: {}", sp, e));
        assert_eq!(rebuilt, sp, "round trip changed {}", sp);
    }
    assert!(linked > 20, "exhaustive sweep looks too small: {}", linked);
}

#[test]
fn test_every_k_boundary_is_recognized() {
    for n in 0..=6 {
        for p in partitions_of(n) {
            for k in 0..=5 {
                assert!(
                    is_k_boundary(&p.k_boundary(k), k),
                    "k-boundary of {} at k = {} not recognized",
                    p,
                    k
                );
            }
        }
    }
}

#[test]
fn test_linked_diagram_shapes_exist_only_sometimes() {
    // the staircase row/column pair works
    let sp = row_col_to_skew_partition(&[2, 1], &[2, 1]).unwrap();
    assert_eq!(sp, SkewPartition::from_lists(vec![2, 1], vec![]).unwrap());
    // a single column taller than the longest row does not
    assert!(row_col_to_skew_partition(&[1], &[2]).is_err());
}

#[test]
fn test_partition_k_boundaries_match_skew_construction() {
    // building the 2-boundary by hand for [4, 2, 1]:
    // hooks are [6, 4, 2, 1], [3, 1], [1]; cells with hook > 2 form [2, 1]
    let p = Partition::new(vec![4, 2, 1]).unwrap();
    let kb = p.k_boundary(2);
    assert_eq!(kb.inner(), &Partition::new(vec![2, 1]).unwrap());
    assert_eq!(kb.row_lengths(), vec![2, 1, 1]);
}
