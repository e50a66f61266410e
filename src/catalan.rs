//! Catalan functions from indexed root ideals.
//!
//! Given a root ideal Ψ inside the order-n staircase and a length-n index
//! composition γ, the Catalan function is
//!
//! > H(Ψ; γ) = ∏_{(i,j) ∉ Ψ} (1 − t·R_ij) · H_γ(1)
//!
//! where R_ij is the raising operator moving a box from row j to row i and
//! H_γ is the Hall-Littlewood vertex chain. The product runs over the
//! staircase complement of the ideal; index addition commutes, so the factor
//! order cannot change the result, and the sorted coordinate order is used
//! for reproducible intermediates.

use crate::algebra::{self, BasisElement, Composition, RaisingOp};
use crate::error::Result;
use crate::ring::Poly;
use crate::root_ideal::RootIdeal;
use crate::vertex::{compositional_hall_littlewood, QpBasis};

/// The index sequence of the raising operator R_ij: +1 at i, −1 at j
fn unit_generator_index(i: usize, j: usize) -> Composition {
    let mut index = vec![0i64; i.max(j) + 1];
    index[i] = 1;
    index[j] = -1;
    index
}

/// The raising-operator product over the staircase complement of the ideal
fn complement_operator(root_ideal: &RootIdeal, n: usize) -> Result<RaisingOp> {
    let complement = root_ideal.complement(n)?;
    let t = Poly::t();
    let mut op = algebra::one();
    for &(i, j) in &complement {
        let factor = algebra::one().sub(&RaisingOp::monomial(
            unit_generator_index(i, j),
            t.clone(),
        ));
        op = algebra::mul(&op, &factor);
    }
    Ok(op)
}

/// Compute the Catalan function of a root ideal and its index composition.
///
/// The result is a formal linear combination in the compositional
/// Hall-Littlewood Q′ basis with coefficients in ℚ[t]. Every coordinate of
/// the ideal must lie in the staircase of order `index.len()`.
pub fn catalan_function(root_ideal: &RootIdeal, index: &[i64]) -> Result<BasisElement> {
    let n = index.len();
    let op = complement_operator(root_ideal, n)?;
    let basis = QpBasis;
    let h = compositional_hall_littlewood(index, &basis);
    algebra::apply_to_element(&op, &h)
}

// ============================================================================
// Tests
// ============================================================================
