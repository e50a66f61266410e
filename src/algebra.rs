//! Free modules and the raising-operator algebra.
//!
//! [`LinComb`] is a finite mapping from basis keys to nonzero coefficients in
//! a [`Ring`]. Raising operators are linear combinations keyed by integer
//! sequences, with the convention that `R((1, 0, -1))` raises the first part
//! of its operand by 1 and lowers the third by 1; the empty sequence is the
//! identity. Multiplication adds indices elementwise after zero-padding, so
//! it is commutative and associative at the index level.
//!
//! Formal basis elements of the target symmetric-function basis use the same
//! representation keyed by their support compositions. The two roles are kept
//! apart by explicitly named entry points rather than runtime dispatch:
//! [`apply_to_composition`] raises a plain sequence, [`apply_to_element`]
//! raises a formal basis element.

use crate::error::{CatalanError, Result};
use crate::ring::{Poly, Ring};
use indexmap::map::Entry;
use indexmap::IndexMap;
use std::hash::Hash;

/// A finite integer sequence: raising-operator index or exponent vector
pub type Composition = Vec<i64>;

/// A formal linear combination of basis keys with ring coefficients.
///
/// Zero coefficients are never stored, so structural equality coincides with
/// equality of linear combinations. Terms iterate in insertion order, which
/// keeps displayed intermediates reproducible; equality ignores the order.
#[derive(Clone, Debug)]
pub struct LinComb<K, C> {
    terms: IndexMap<K, C>,
}

impl<K: Hash + Eq, C: PartialEq> PartialEq for LinComb<K, C> {
    fn eq(&self, other: &Self) -> bool {
        self.terms == other.terms
    }
}

impl<K: Hash + Eq, C: Eq> Eq for LinComb<K, C> {}

impl<K: Hash + Eq + Clone, C: Ring> LinComb<K, C> {
    /// The zero element
    pub fn zero() -> Self {
        Self {
            terms: IndexMap::new(),
        }
    }

    /// A single term with the given coefficient
    pub fn monomial(key: K, coeff: C) -> Self {
        let mut out = Self::zero();
        out.add_term(key, coeff);
        out
    }

    /// A single term with coefficient one
    pub fn unit(key: K) -> Self {
        Self::monomial(key, C::one())
    }

    /// Check if this is the zero element
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Number of nonzero terms
    pub fn num_terms(&self) -> usize {
        self.terms.len()
    }

    /// Add `coeff` onto the coefficient at `key`, dropping the term if the
    /// sum cancels to zero.
    pub fn add_term(&mut self, key: K, coeff: C) {
        if coeff.is_zero() {
            return;
        }
        match self.terms.entry(key) {
            Entry::Occupied(mut occupied) => {
                let sum = occupied.get().add(&coeff);
                if sum.is_zero() {
                    occupied.shift_remove();
                } else {
                    *occupied.get_mut() = sum;
                }
            }
            Entry::Vacant(vacant) => {
                vacant.insert(coeff);
            }
        }
    }

    /// Sum of two linear combinations
    pub fn add(&self, other: &Self) -> Self {
        let mut out = self.clone();
        for (key, coeff) in other.iter() {
            out.add_term(key.clone(), coeff.clone());
        }
        out
    }

    /// Difference of two linear combinations
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Negation of every coefficient
    pub fn neg(&self) -> Self {
        Self {
            terms: self
                .terms
                .iter()
                .map(|(key, coeff)| (key.clone(), coeff.neg()))
                .collect(),
        }
    }

    /// Scale every coefficient by `c`
    pub fn scale(&self, c: &C) -> Self {
        let mut out = Self::zero();
        for (key, coeff) in self.iter() {
            out.add_term(key.clone(), coeff.mul(c));
        }
        out
    }

    /// Coefficient at `key` (zero when absent)
    pub fn coefficient(&self, key: &K) -> C {
        self.terms.get(key).cloned().unwrap_or_else(C::zero)
    }

    /// Iterate over (key, coefficient) pairs
    pub fn iter(&self) -> impl Iterator<Item = (&K, &C)> {
        self.terms.iter()
    }

    /// The support: every key with a nonzero coefficient
    pub fn indices(&self) -> Vec<&K> {
        self.terms.keys().collect()
    }

    /// The unique key of a single-term element. Elements with any other
    /// number of terms have no well-defined index; use
    /// [`indices`](Self::indices) for those.
    pub fn index(&self) -> Result<&K> {
        if self.terms.len() != 1 {
            return Err(CatalanError::NotABasisElement(format!(
                "index() needs exactly one term, this element has {}",
                self.terms.len()
            )));
        }
        Ok(self.terms.keys().next().expect("one term is present"))
    }
}

// ============================================================================
// Raising operators
// ============================================================================

/// An element of the raising-operator algebra over ℚ[t]
pub type RaisingOp = LinComb<Composition, Poly>;

/// A formal element of the target symmetric-function basis, keyed by the
/// support compositions of its terms
pub type BasisElement = LinComb<Composition, Poly>;

/// The basis generator `R(index)`
pub fn generator(index: Composition) -> RaisingOp {
    RaisingOp::unit(index)
}

/// The multiplicative identity `R(())`
pub fn one() -> RaisingOp {
    generator(Composition::new())
}

/// Elementwise sum of two sequences, zero-padding the shorter
pub fn index_sum(a: &[i64], b: &[i64]) -> Composition {
    (0..a.len().max(b.len()))
        .map(|i| a.get(i).copied().unwrap_or(0) + b.get(i).copied().unwrap_or(0))
        .collect()
}

/// Product of two raising-operator elements: bilinear over terms, adding
/// indices elementwise. Commutative and associative.
pub fn mul(a: &RaisingOp, b: &RaisingOp) -> RaisingOp {
    let mut out = RaisingOp::zero();
    for (index_a, coeff_a) in a.iter() {
        for (index_b, coeff_b) in b.iter() {
            out.add_term(index_sum(index_a, index_b), coeff_a.mul(coeff_b));
        }
    }
    out
}

/// Raise a plain sequence operand by an index: zero-pad both to a common
/// length and add elementwise. Negative index entries lower parts.
pub fn raise_composition(index: &[i64], operand: &[i64]) -> Composition {
    index_sum(index, operand)
}

/// Apply a raising-operator element to a plain sequence operand, yielding one
/// (raised sequence, coefficient) pair per operator term.
pub fn apply_to_composition(op: &RaisingOp, operand: &[i64]) -> Vec<(Composition, Poly)> {
    apply_to_composition_power(op, operand, 1)
}

/// Like [`apply_to_composition`], but each term's raise is applied `power`
/// times in sequence.
pub fn apply_to_composition_power(
    op: &RaisingOp,
    operand: &[i64],
    power: u32,
) -> Vec<(Composition, Poly)> {
    op.iter()
        .map(|(index, coeff)| {
            let mut raised = operand.to_vec();
            for _ in 0..power {
                raised = raise_composition(index, &raised);
            }
            (raised, coeff.clone())
        })
        .collect()
}

/// Apply a raising-operator element to a formal basis element.
///
/// The operand must be a unit monomial: exactly one term, coefficient one.
/// Each operator term raises the operand's index and contributes the raised
/// key scaled by the term's coefficient. The raised composition is re-embedded
/// as a support key without validation or straightening, even when it fails
/// the weakly-decreasing partition invariant; normalizing here would change
/// the computed coefficients, so the caller decides (see
/// [`crate::straighten::apply_straightened`]).
pub fn apply_to_element(op: &RaisingOp, element: &BasisElement) -> Result<BasisElement> {
    let gamma = element.index().map_err(|_| {
        CatalanError::NotABasisElement(format!(
            "raising operators act on basis elements; this element has {} terms",
            element.num_terms()
        ))
    })?;
    if !element.coefficient(gamma).is_one() {
        return Err(CatalanError::NotABasisElement(
            "raising operators act on basis elements with coefficient one".to_string(),
        ));
    }
    let mut out = BasisElement::zero();
    for (index, coeff) in op.iter() {
        out.add_term(raise_composition(index, gamma), coeff.clone());
    }
    Ok(out)
}

/// Render an operator or element Sage-style, e.g. `R() - R(1, -1)`.
pub fn display_with(element: &LinComb<Composition, Poly>, prefix: &str) -> String {
    if element.is_zero() {
        return "0".to_string();
    }
    let mut out = String::new();
    for (i, (index, coeff)) in element.iter().enumerate() {
        if i > 0 {
            out.push_str(" + ");
        }
        if !coeff.is_one() {
            out.push_str(&format!("({})*", coeff));
        }
        let body = index
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!("{}({})", prefix, body));
    }
    out
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_term_cancellation() {
        let mut element: LinComb<Composition, i64> = LinComb::zero();
        element.add_term(vec![1, -1], 2);
        element.add_term(vec![1, -1], -2);
        assert!(element.is_zero());
        element.add_term(vec![0, 1], 0);
        assert!(element.is_zero());
    }

    #[test]
    fn test_index_accessors() {
        let r = generator(vec![1, -1]);
        assert_eq!(r.index().unwrap(), &vec![1, -1]);
        let sum = r.add(&generator(vec![0, 1, -1]));
        assert_eq!(sum.num_terms(), 2);
        assert!(matches!(
            sum.index(),
            Err(CatalanError::NotABasisElement(_))
        ));
        assert_eq!(sum.indices().len(), 2);
    }

    #[test]
    fn test_index_sum_padding() {
        assert_eq!(index_sum(&[1, -1], &[0, 1, -1]), vec![1, 0, -1]);
        assert_eq!(index_sum(&[], &[2, 3]), vec![2, 3]);
        assert_eq!(index_sum(&[], &[]), Vec::<i64>::new());
    }

    #[test]
    fn test_mul_expands_binomials() {
        // (1 - R(1,-1)) * (1 - R(0,1,-1))
        //   = R() - R(0,1,-1) - R(1,-1) + R(1,0,-1)
        let a = one().sub(&generator(vec![1, -1]));
        let b = one().sub(&generator(vec![0, 1, -1]));
        let product = mul(&a, &b);
        let mut expected = one();
        expected.add_term(vec![0, 1, -1], Poly::one().neg());
        expected.add_term(vec![1, -1], Poly::one().neg());
        expected.add_term(vec![1, 0, -1], Poly::one());
        assert_eq!(product, expected);
    }

    #[test]
    fn test_mul_identity_and_commutativity() {
        let a = generator(vec![2, 0, -1]).scale(&Poly::t());
        assert_eq!(mul(&a, &one()), a);
        assert_eq!(mul(&one(), &a), a);
        let b = one().sub(&generator(vec![1, -1]).scale(&Poly::t()));
        assert_eq!(mul(&a, &b), mul(&b, &a));
    }

    #[test]
    fn test_apply_to_composition() {
        // R(1,-1) acting on [5, 4] raises to [6, 3]
        let r = generator(vec![1, -1]);
        assert_eq!(
            apply_to_composition(&r, &[5, 4]),
            vec![(vec![6, 3], Poly::one())]
        );
        // the raise pads: acting on [5] yields [6, -1]
        assert_eq!(
            apply_to_composition(&r, &[5]),
            vec![(vec![6, -1], Poly::one())]
        );
        // power applies the raise repeatedly
        assert_eq!(
            apply_to_composition_power(&r, &[5, 4], 2),
            vec![(vec![7, 2], Poly::one())]
        );
    }

    #[test]
    fn test_apply_to_element() {
        let element = BasisElement::unit(vec![5, 4]);
        let op = one().sub(&generator(vec![1, -1]).scale(&Poly::t()));
        let image = apply_to_element(&op, &element).unwrap();
        assert_eq!(image.coefficient(&vec![5, 4]), Poly::one());
        assert_eq!(image.coefficient(&vec![6, 3]), Poly::t().neg());
        assert_eq!(image.num_terms(), 2);
    }

    #[test]
    fn test_apply_to_element_rejects_non_monomials() {
        let two_terms = BasisElement::unit(vec![2]).add(&BasisElement::unit(vec![1, 1]));
        assert!(apply_to_element(&one(), &two_terms).is_err());
        let scaled = BasisElement::monomial(vec![2], Poly::t());
        assert!(apply_to_element(&one(), &scaled).is_err());
    }

    #[test]
    fn test_display() {
        let op = one().sub(&generator(vec![1, -1]));
        assert_eq!(display_with(&op, "R"), "R() + (-1)*R(1, -1)");
        assert_eq!(display_with(&RaisingOp::zero(), "R"), "0");
    }
}
