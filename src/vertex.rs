//! Hall-Littlewood vertex operators.
//!
//! A vertex operator H_γ is a chain of single-part creation operators applied
//! rightmost part first: H_(g1, …, gm) = create(g1) ∘ … ∘ create(gm). The
//! creation primitive itself belongs to the target symmetric-function basis,
//! abstracted here as [`CreationBasis`]; the bundled [`QpBasis`] is the formal
//! compositional Hall-Littlewood Q′ basis, whose creation operator records
//! the created part at the front of each support index.

use crate::algebra::{BasisElement, Composition};
use crate::partition::Partition;

/// The seam to a symmetric-function basis: a multiplicative identity and a
/// single-part creation operator. Monomial decomposition comes for free from
/// the [`BasisElement`] representation.
pub trait CreationBasis {
    /// The basis's multiplicative identity
    fn one(&self) -> BasisElement;

    /// Apply the single-part creation operator for `part`
    fn create(&self, part: i64, element: &BasisElement) -> BasisElement;
}

/// The formal compositional Hall-Littlewood Q′ basis.
///
/// Creation prepends the created part to each support index, so the chain
/// H_γ applied to one() lands exactly on the monomial at γ.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QpBasis;

impl CreationBasis for QpBasis {
    fn one(&self) -> BasisElement {
        BasisElement::unit(Composition::new())
    }

    fn create(&self, part: i64, element: &BasisElement) -> BasisElement {
        let mut out = BasisElement::zero();
        for (gamma, coeff) in element.iter() {
            let mut index = Vec::with_capacity(gamma.len() + 1);
            index.push(part);
            index.extend_from_slice(gamma);
            out.add_term(index, coeff.clone());
        }
        out
    }
}

/// A chained vertex operator H_γ for a composition γ
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VertexOperator {
    composition: Composition,
}

impl VertexOperator {
    /// The operator H_γ
    pub fn new(composition: Composition) -> Self {
        Self { composition }
    }

    /// The indexing composition
    pub fn composition(&self) -> &[i64] {
        &self.composition
    }

    /// Apply the chain to `element`: rightmost part first, each result
    /// feeding the next creation.
    pub fn apply<B: CreationBasis>(&self, basis: &B, element: &BasisElement) -> BasisElement {
        let mut current = element.clone();
        for &part in self.composition.iter().rev() {
            current = basis.create(part, &current);
        }
        current
    }
}

impl From<i64> for VertexOperator {
    /// A single integer k is the one-element composition (k)
    fn from(part: i64) -> Self {
        Self::new(vec![part])
    }
}

impl From<Vec<i64>> for VertexOperator {
    fn from(composition: Vec<i64>) -> Self {
        Self::new(composition)
    }
}

impl From<&Partition> for VertexOperator {
    fn from(partition: &Partition) -> Self {
        Self::new(partition.parts().to_vec())
    }
}

/// The compositional Hall-Littlewood polynomial H_γ(1): the vertex chain for
/// γ applied to the basis's identity. For a partition γ this is the ordinary
/// Hall-Littlewood element at γ.
pub fn compositional_hall_littlewood<B: CreationBasis>(gamma: &[i64], basis: &B) -> BasisElement {
    VertexOperator::new(gamma.to_vec()).apply(basis, &basis.one())
}

// ============================================================================
// Tests
// ============================================================================
