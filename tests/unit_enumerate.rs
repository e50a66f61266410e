//! Unit tests for the enumeration layer: partition counts, k-rectangles,
//! k-irreducible shapes, and linked self-pair surveys.

use catalan::enumerate::{
    get_k_irreducible_partition_lists, get_k_irreducible_partitions, get_k_rectangles,
    n_to_k_shapes, n_to_num_k_shapes, n_to_num_symmetric_k_shape_boundaries,
    n_to_number_of_linked_partition_self_pairs, partitions_of,
};
use catalan::Partition;

#[test]
fn test_partition_counts() {
    let expected = [1, 1, 2, 3, 5, 7, 11, 15, 22];
    for (n, &count) in expected.iter().enumerate() {
        assert_eq!(partitions_of(n as i64).len(), count, "p({})", n);
    }
    assert!(partitions_of(-1).is_empty());
}

#[test]
fn test_partitions_are_valid_and_distinct() {
    let all = partitions_of(7);
    for p in &all {
        assert_eq!(p.size(), 7);
    }
    let mut sorted = all.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(sorted.len(), all.len());
}

#[test]
fn test_k_rectangles() {
    let expected: Vec<Partition> = [vec![3], vec![2, 2], vec![1, 1, 1]]
        .into_iter()
        .map(|p| Partition::new(p).unwrap())
        .collect();
    assert_eq!(get_k_rectangles(3), expected);
    // each k-rectangle's largest hook is exactly k
    for k in 1..=5 {
        for rect in get_k_rectangles(k) {
            assert_eq!(rect.hook_length(0, 0).unwrap(), k);
        }
    }
    assert!(get_k_rectangles(0).is_empty());
}

#[test]
fn test_k_irreducible_counts_are_factorial() {
    let factorials = [1usize, 1, 2, 6, 24, 120];
    for (k, &expected) in factorials.iter().enumerate() {
        assert_eq!(
            get_k_irreducible_partition_lists(k as i64).len(),
            expected,
            "k = {}",
            k
        );
    }
}

#[test]
fn test_k_irreducible_partitions_really_are() {
    for k in 1..=4 {
        for p in get_k_irreducible_partitions(k) {
            assert!(p.is_k_bounded(k));
            assert!(p.is_k_irreducible(k).unwrap(), "{} at k = {}", p, k);
        }
    }
}

#[test]
fn test_linked_self_pair_counts() {
    // sizes 0..4: the empty partition, [1], [1,1], then {[2,1], [1,1,1]},
    // then {[2,2], [2,1,1], [1,1,1,1]}
    assert_eq!(n_to_number_of_linked_partition_self_pairs(0), 1);
    assert_eq!(n_to_number_of_linked_partition_self_pairs(1), 1);
    assert_eq!(n_to_number_of_linked_partition_self_pairs(2), 1);
    assert_eq!(n_to_number_of_linked_partition_self_pairs(3), 2);
    assert_eq!(n_to_number_of_linked_partition_self_pairs(4), 3);
}

#[test]
fn test_k_shape_counts() {
    // with k past every hook length, every partition is a k-shape
    for n in 0..=5 {
        assert_eq!(n_to_num_k_shapes(n, 12), partitions_of(n).len());
    }
    // 1-shapes of size 4: only [2, 1, 1] survives
    let one_shapes = n_to_k_shapes(4, 1);
    assert_eq!(one_shapes, vec![Partition::new(vec![2, 1, 1]).unwrap()]);
}

#[test]
fn test_symmetric_k_shape_boundaries() {
    // with k huge the k-boundary is the shape itself, so the symmetric
    // boundaries are exactly the self-conjugate partitions
    for n in 0..=6 {
        let symmetric = partitions_of(n)
            .into_iter()
            .filter(|p| p.is_symmetric())
            .count();
        assert_eq!(n_to_num_symmetric_k_shape_boundaries(n, 12), symmetric);
    }
}
