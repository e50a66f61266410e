//! Schur straightening.
//!
//! An arbitrary integer sequence γ indexes a "virtual" basis element that is
//! either zero or ± a genuine partition-indexed element:
//!
//! > s_γ = sgn(γ + ρ) · s_{sort(γ + ρ) − ρ}  if γ + ρ has distinct
//! > nonnegative entries, and 0 otherwise,
//!
//! where ρ = (ℓ−1, ℓ−2, …, 0) and sort is descending. The sign is that of the
//! shortest sorting permutation, computed by counting non-inversions.

use crate::algebra::{raise_composition, LinComb, RaisingOp};
use crate::partition::Partition;
use crate::ring::{Poly, Ring};

/// Straighten the sequence `gamma` into a signed partition-indexed term, or
/// the zero element when `gamma + rho` has a negative or repeated entry.
pub fn straighten<C: Ring>(gamma: &[i64]) -> LinComb<Partition, C> {
    let len = gamma.len();
    let rho: Vec<i64> = (0..len as i64).rev().collect();
    let combined: Vec<i64> = gamma.iter().zip(&rho).map(|(g, r)| g + r).collect();
    if combined.iter().any(|&c| c < 0) {
        return LinComb::zero();
    }
    let mut sorted = combined.clone();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    if sorted.windows(2).any(|w| w[0] == w[1]) {
        return LinComb::zero();
    }
    let mut non_inversions = 0usize;
    for i in 0..combined.len() {
        for j in (i + 1)..combined.len() {
            if combined[i] < combined[j] {
                non_inversions += 1;
            }
        }
    }
    let index: Vec<i64> = sorted.iter().zip(&rho).map(|(s, r)| s - r).collect();
    // sorted is strictly decreasing and nonnegative, so index minus rho is a
    // weakly decreasing nonnegative sequence
    let partition = Partition::from_sorted(strip_trailing_zeros(index));
    let sign = if non_inversions % 2 == 0 {
        C::one()
    } else {
        C::one().neg()
    };
    LinComb::monomial(partition, sign)
}

fn strip_trailing_zeros(mut values: Vec<i64>) -> Vec<i64> {
    while values.last() == Some(&0) {
        values.pop();
    }
    values
}

/// Apply a raising-operator element to a partition-like operand and
/// straighten every raised sequence, summing the signed results. This is the
/// normalized counterpart of [`crate::algebra::apply_to_composition`].
pub fn apply_straightened(op: &RaisingOp, gamma: &[i64]) -> LinComb<Partition, Poly> {
    let mut out = LinComb::zero();
    for (index, coeff) in op.iter() {
        let raised = raise_composition(index, gamma);
        let straightened: LinComb<Partition, Poly> = straighten(&raised);
        out = out.add(&straightened.scale(coeff));
    }
    out
}

// ============================================================================
// Tests
// ============================================================================
