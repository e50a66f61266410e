//! Combinatorial surveys over partitions.
//!
//! Exhaustive enumerations and counting functions: partitions of a given
//! size, k-rectangles, k-irreducible partitions, partitions admitting a
//! linked self-paired skew diagram, and k-shapes with their boundaries.
//! Everything here is inherently exponential or factorial in its argument;
//! these are batch tools for small inputs.

use crate::partition::{k_rectangle_dimension_list, Partition};
use crate::skew::{row_col_to_skew_partition, SkewPartition};

/// All partitions of `n`, largest-first within each partition, enumerated
/// with the largest leading part first. Negative `n` has none.
pub fn partitions_of(n: i64) -> Vec<Partition> {
    fn extend(remaining: i64, cap: i64, prefix: &mut Vec<i64>, out: &mut Vec<Partition>) {
        if remaining == 0 {
            out.push(Partition::from_sorted(prefix.clone()));
            return;
        }
        for part in (1..=cap.min(remaining)).rev() {
            prefix.push(part);
            extend(remaining - part, part, prefix, out);
            prefix.pop();
        }
    }
    let mut out = Vec::new();
    if n >= 0 {
        extend(n, n, &mut Vec::new(), &mut out);
    }
    out
}

/// Every k-rectangle: for (h, w) = (k-i+1, i), the partition with w rows of
/// length h. Each has largest hook length exactly k.
pub fn get_k_rectangles(k: i64) -> Vec<Partition> {
    k_rectangle_dimension_list(k)
        .into_iter()
        .map(|(h, w)| Partition::from_sorted(vec![h; w as usize]))
        .collect()
}

/// All k-irreducible partitions, as raw part lists. For each i in [1, k) the
/// shape may take between 0 and i rows of length k-i, so there are k!
/// of them in total.
pub fn get_k_irreducible_partition_lists(k: i64) -> Vec<Vec<i64>> {
    let mut shapes: Vec<Vec<i64>> = vec![Vec::new()];
    for i in 1..k {
        let mut extended = Vec::new();
        for shape in &shapes {
            for num_rows in 0..=i {
                let mut new_shape = shape.clone();
                new_shape.extend(std::iter::repeat(k - i).take(num_rows as usize));
                extended.push(new_shape);
            }
        }
        shapes = extended;
    }
    shapes
}

/// All k-irreducible partitions as values
pub fn get_k_irreducible_partitions(k: i64) -> Vec<Partition> {
    get_k_irreducible_partition_lists(k)
        .into_iter()
        .map(Partition::from_sorted)
        .collect()
}

/// Count partitions λ of `n` for which (λ, λ) admits a linked skew diagram.
/// Candidates with no such diagram are simply not counted.
pub fn n_to_number_of_linked_partition_self_pairs(n: i64) -> usize {
    partitions_of(n)
        .iter()
        .filter(|p| row_col_to_skew_partition(p.parts(), p.parts()).is_ok())
        .count()
}

/// All partitions of `n` that are k-shapes
pub fn n_to_k_shapes(n: i64, k: i64) -> Vec<Partition> {
    partitions_of(n)
        .into_iter()
        .filter(|p| p.is_k_shape(k))
        .collect()
}

/// Count the k-shapes of size `n`
pub fn n_to_num_k_shapes(n: i64, k: i64) -> usize {
    n_to_k_shapes(n, k).len()
}

/// The k-boundaries of all k-shapes of size `n`
pub fn n_to_k_shape_boundaries(n: i64, k: i64) -> Vec<SkewPartition> {
    n_to_k_shapes(n, k)
        .into_iter()
        .map(|p| p.k_boundary(k))
        .collect()
}

/// The self-conjugate k-shape boundaries of size `n`
pub fn n_to_symmetric_k_shape_boundaries(n: i64, k: i64) -> Vec<SkewPartition> {
    n_to_k_shape_boundaries(n, k)
        .into_iter()
        .filter(|sp| sp.is_symmetric())
        .collect()
}

/// Count the self-conjugate k-shape boundaries of size `n`
pub fn n_to_num_symmetric_k_shape_boundaries(n: i64, k: i64) -> usize {
    n_to_symmetric_k_shape_boundaries(n, k).len()
}
