//! Root ideals inside the strictly-upper-triangular staircase.
//!
//! The staircase of order n is the coordinate set {(i, j) : 0 ≤ i < j < n}.
//! A root ideal is a downward/leftward-closed subset; closure is the caller's
//! responsibility and is not re-checked by the operations here, which only
//! need the coordinates themselves.

use crate::error::{CatalanError, Result};
use std::collections::BTreeSet;

/// A single staircase coordinate
pub type Root = (usize, usize);

/// An ordered set of staircase coordinates. `BTreeSet` keeps enumeration
/// deterministic, which downstream operator products rely on for reproducible
/// intermediate forms.
pub type Roots = BTreeSet<Root>;

/// Every coordinate (i, j) with i < j < n
pub fn staircase(n: usize) -> Roots {
    (0..n)
        .flat_map(|i| ((i + 1)..n).map(move |j| (i, j)))
        .collect()
}

/// A root ideal: coordinates validated to satisfy i < j.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct RootIdeal {
    roots: Roots,
}

impl RootIdeal {
    /// Build a root ideal from coordinates, checking i < j for each.
    pub fn new(roots: impl IntoIterator<Item = Root>) -> Result<Self> {
        let roots: Roots = roots.into_iter().collect();
        if let Some(&(i, j)) = roots.iter().find(|&&(i, j)| i >= j) {
            return Err(CatalanError::Domain(format!(
                "root ({}, {}) is not strictly above the diagonal",
                i, j
            )));
        }
        Ok(Self { roots })
    }

    /// The empty root ideal
    pub fn empty() -> Self {
        Self::default()
    }

    /// The coordinates, in lexicographic order
    pub fn roots(&self) -> &Roots {
        &self.roots
    }

    /// Number of coordinates
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    /// Check if the ideal has no coordinates
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Membership test
    pub fn contains(&self, root: Root) -> bool {
        self.roots.contains(&root)
    }

    /// The staircase coordinates of order n **not** in this ideal. Every
    /// coordinate of the ideal must itself lie inside that staircase.
    pub fn complement(&self, n: usize) -> Result<Roots> {
        if let Some(&(i, j)) = self.roots.iter().find(|&&(_, j)| j >= n) {
            return Err(CatalanError::Domain(format!(
                "root ({}, {}) lies outside the staircase of order {}",
                i, j, n
            )));
        }
        Ok(staircase(n).difference(&self.roots).copied().collect())
    }
}

/// Map a selected-row set (see [`crate::bump::selected_rows`]) to a root
/// ideal of the order-n staircase.
///
/// The correspondence between the two is not yet settled, and guessing it
/// would silently change every Catalan function computed downstream, so this
/// fails until it is.
// TODO: pin down the selected-rows ↔ root-ideal correspondence, then implement
pub fn selected_rows_to_root_ideal(n: usize, selected_rows: &[usize]) -> Result<RootIdeal> {
    let _ = (n, selected_rows);
    Err(CatalanError::Domain(
        "the correspondence between selected rows and root ideals is not yet settled".to_string(),
    ))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staircase() {
        assert!(staircase(0).is_empty());
        assert!(staircase(1).is_empty());
        assert_eq!(
            staircase(3),
            [(0, 1), (0, 2), (1, 2)].into_iter().collect::<Roots>()
        );
        assert_eq!(staircase(5).len(), 10);
    }

    #[test]
    fn test_validation() {
        assert!(RootIdeal::new([(0, 1), (0, 2)]).is_ok());
        assert!(RootIdeal::new([(1, 1)]).is_err());
        assert!(RootIdeal::new([(2, 1)]).is_err());
    }

    #[test]
    fn test_complement() {
        let ri = RootIdeal::new([(0, 1), (0, 2)]).unwrap();
        let complement = ri.complement(3).unwrap();
        assert_eq!(complement, [(1, 2)].into_iter().collect::<Roots>());

        // complement of the empty ideal is the full staircase
        assert_eq!(RootIdeal::empty().complement(4).unwrap(), staircase(4));
        // complement of the full staircase is empty
        let full = RootIdeal::new(staircase(4)).unwrap();
        assert!(full.complement(4).unwrap().is_empty());
        // coordinates must fit inside the staircase
        assert!(ri.complement(2).is_err());
    }

    #[test]
    fn test_selected_rows_conversion_unresolved() {
        assert!(selected_rows_to_root_ideal(4, &[0, 1]).is_err());
    }
}
