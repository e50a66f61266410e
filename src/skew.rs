//! Skew partitions and linked skew diagrams.
//!
//! A skew partition is an outer partition minus an inner partition contained
//! within it; the value keeps both, so equal cell sets under different outers
//! stay distinct. [`row_col_to_skew_partition`] rebuilds the unique "linked"
//! skew diagram with prescribed row and column shapes, when one exists.

use crate::error::{CatalanError, Result};
use crate::partition::Partition;
use std::fmt;

/// An outer/inner pair of partitions with cellwise containment.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct SkewPartition {
    outer: Partition,
    inner: Partition,
}

impl SkewPartition {
    /// Build a skew partition, validating containment of `inner` in `outer`.
    pub fn new(outer: Partition, inner: Partition) -> Result<Self> {
        if !outer.contains(&inner) {
            return Err(CatalanError::InvalidShape(format!(
                "inner partition {} is not contained in outer partition {}",
                inner, outer
            )));
        }
        Ok(Self { outer, inner })
    }

    /// Convenience constructor from raw part lists (trailing zeros allowed)
    pub fn from_lists(outer: Vec<i64>, inner: Vec<i64>) -> Result<Self> {
        Self::new(
            Partition::from_composition(outer)?,
            Partition::from_composition(inner)?,
        )
    }

    /// Internal constructor for pairs already known to be contained.
    pub(crate) fn new_unchecked(outer: Partition, inner: Partition) -> Self {
        debug_assert!(outer.contains(&inner));
        Self { outer, inner }
    }

    /// The empty skew partition
    pub fn empty() -> Self {
        Self::default()
    }

    /// The outer partition
    pub fn outer(&self) -> &Partition {
        &self.outer
    }

    /// The inner partition
    pub fn inner(&self) -> &Partition {
        &self.inner
    }

    /// Number of rows of the outer shape
    pub fn num_rows(&self) -> usize {
        self.outer.len()
    }

    /// Column interval `[inner, outer)` occupied by `row` in the skew shape
    pub fn row_bounds(&self, row: usize) -> (i64, i64) {
        (self.inner.part(row), self.outer.part(row))
    }

    /// Length of each row of the skew shape
    pub fn row_lengths(&self) -> Vec<i64> {
        (0..self.num_rows())
            .map(|r| self.outer.part(r) - self.inner.part(r))
            .collect()
    }

    /// Length of each column of the skew shape
    pub fn column_lengths(&self) -> Vec<i64> {
        (0..self.outer.part(0))
            .map(|c| self.outer.column_length(c) - self.inner.column_length(c))
            .collect()
    }

    /// All cells of the skew shape as (row, column), row-major
    pub fn cells(&self) -> Vec<(usize, i64)> {
        (0..self.num_rows())
            .flat_map(|r| {
                let (lo, hi) = self.row_bounds(r);
                (lo..hi).map(move |c| (r, c))
            })
            .collect()
    }

    /// Number of cells
    pub fn size(&self) -> i64 {
        self.outer.size() - self.inner.size()
    }

    /// Check whether the shape has no cells (the outer partition may still be
    /// nonempty).
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// The transposed skew shape
    pub fn conjugate(&self) -> SkewPartition {
        SkewPartition::new_unchecked(self.outer.conjugate(), self.inner.conjugate())
    }

    /// A skew shape is linked when both its row shape and its column shape
    /// are weakly decreasing, i.e. partitions in their own right.
    pub fn is_linked(&self) -> bool {
        weakly_decreasing(&self.row_lengths()) && weakly_decreasing(&self.column_lengths())
    }

    /// Check self-conjugacy of the skew shape
    pub fn is_symmetric(&self) -> bool {
        self == &self.conjugate()
    }
}

fn weakly_decreasing(values: &[i64]) -> bool {
    values.windows(2).all(|w| w[0] >= w[1])
}

impl fmt::Display for SkewPartition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.outer, self.inner)
    }
}

// ============================================================================
// Linked skew diagrams
// ============================================================================

/// Rebuild the unique linked skew diagram with the given row and column
/// shapes.
///
/// Columns are processed from rightmost to leftmost. Each column states how
/// many cells it still needs; while the deficit is positive, the next unused
/// row slides in with its right edge at the current column, extending every
/// column it newly covers. A negative deficit, running out of rows, or a row
/// longer than the columns remaining to its left all mean no such diagram
/// exists.
pub fn row_col_to_skew_partition(rows: &[i64], cols: &[i64]) -> Result<SkewPartition> {
    let mut outer: Vec<i64> = Vec::new();
    let mut inner: Vec<i64> = Vec::new();
    let mut current_cols = vec![0i64; cols.len()];
    let mut row_index = 0usize;
    for (coindex, &col_length) in cols.iter().rev().enumerate() {
        let col = cols.len() - 1 - coindex;
        let col_num = (col + 1) as i64;
        let mut deficit = col_length - current_cols[col];
        if deficit < 0 {
            return Err(CatalanError::InvalidShape(format!(
                "no linked skew diagram for rows {:?} and columns {:?}: column {} overfilled",
                rows, cols, col_num
            )));
        }
        while deficit > 0 {
            if row_index >= rows.len() {
                return Err(CatalanError::InvalidShape(format!(
                    "no linked skew diagram for rows {:?} and columns {:?}: rows exhausted",
                    rows, cols
                )));
            }
            let row_length = rows[row_index];
            if row_length > col_num {
                return Err(CatalanError::InvalidShape(format!(
                    "no linked skew diagram for rows {:?} and columns {:?}: \
                     row {} is too long to end at column {}",
                    rows, cols, row_index, col_num
                )));
            }
            outer.push(col_num);
            inner.push(col_num - row_length);
            for c in (col_num - row_length)..col_num {
                current_cols[c as usize] += 1;
            }
            row_index += 1;
            deficit -= 1;
        }
    }
    SkewPartition::new(
        Partition::from_composition(outer)?,
        Partition::from_composition(inner)?,
    )
}

// ============================================================================
// k-boundary recognition
// ============================================================================

/// Check whether a skew shape is the k-boundary of some partition. Only the
/// outer partition can be that partition, so recompute its k-boundary and
/// compare.
pub fn is_k_boundary(sp: &SkewPartition, k: i64) -> bool {
    sp == &sp.outer().k_boundary(k)
}

/// The partition whose k-boundary this skew shape is. With `strict` the shape
/// is first verified to actually be a k-boundary.
pub fn k_boundary_to_partition(sp: &SkewPartition, k: i64, strict: bool) -> Result<Partition> {
    if strict && !is_k_boundary(sp, k) {
        return Err(CatalanError::Domain(format!(
            "{} is not the {}-boundary of any partition",
            sp, k
        )));
    }
    Ok(sp.outer().clone())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn skew(outer: &[i64], inner: &[i64]) -> SkewPartition {
        SkewPartition::from_lists(outer.to_vec(), inner.to_vec()).unwrap()
    }

    #[test]
    fn test_containment_validated() {
        assert!(SkewPartition::from_lists(vec![3, 2], vec![2, 1]).is_ok());
        assert!(SkewPartition::from_lists(vec![3, 2], vec![1, 3]).is_err());
        assert!(SkewPartition::from_lists(vec![2], vec![1, 1]).is_err());
    }

    #[test]
    fn test_row_and_column_lengths() {
        let sp = skew(&[5, 5, 4, 2, 2], &[4, 3, 2]);
        assert_eq!(sp.row_lengths(), vec![1, 2, 2, 2, 2]);
        assert_eq!(sp.column_lengths(), vec![2, 2, 1, 2, 2]);
        assert_eq!(sp.size(), 9);
    }

    #[test]
    fn test_cells_and_emptiness() {
        let sp = skew(&[2, 1], &[1]);
        assert_eq!(sp.cells(), vec![(0, 1), (1, 0)]);
        assert!(!sp.is_empty());
        // no cells, but the outer shape is remembered
        let hollow = skew(&[2], &[2]);
        assert!(hollow.is_empty());
        assert_ne!(hollow, SkewPartition::empty());
    }

    #[test]
    fn test_is_linked() {
        assert!(skew(&[2, 1], &[1]).is_linked());
        assert!(SkewPartition::empty().is_linked());
        // rows [1, 2]: row shape increases, not linked
        assert!(!skew(&[2, 2], &[1]).is_linked());
    }

    #[test]
    fn test_conjugate_and_symmetry() {
        let sp = skew(&[2, 1], &[1]);
        assert_eq!(sp.conjugate(), sp);
        assert!(sp.is_symmetric());
        assert!(!skew(&[2], &[]).is_symmetric());
    }

    #[test]
    fn test_row_col_round_trip() {
        for sp in [
            skew(&[6, 5, 3, 2, 2, 1], &[2, 2]),
            skew(&[3, 2, 1], &[1]),
            skew(&[2, 1], &[1]),
            SkewPartition::empty(),
        ] {
            let rebuilt =
                row_col_to_skew_partition(&sp.row_lengths(), &sp.column_lengths()).unwrap();
            assert_eq!(rebuilt, sp);
        }
    }

    #[test]
    fn test_row_col_failures() {
        // a single column of height 2 cannot be covered by one row of length 2
        assert!(row_col_to_skew_partition(&[2], &[2]).is_err());
        // not enough rows
        assert!(row_col_to_skew_partition(&[1], &[1, 1]).is_err());
    }

    #[test]
    fn test_is_k_boundary() {
        let p = Partition::new(vec![3, 2, 1]).unwrap();
        let kb = p.k_boundary(2);
        assert!(is_k_boundary(&kb, 2));
        assert!(!is_k_boundary(&kb, 3));
        assert_eq!(k_boundary_to_partition(&kb, 2, true).unwrap(), p);
        assert!(k_boundary_to_partition(&kb, 3, true).is_err());
        // k = 0: only a shape with no cells qualifies
        assert!(is_k_boundary(&skew(&[2], &[2]), 0));
        assert!(!is_k_boundary(&skew(&[2], &[1]), 0));
    }
}
