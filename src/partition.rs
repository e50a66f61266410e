//! Integer partitions and their k-geometry.
//!
//! A partition is a weakly decreasing sequence of positive integers, drawn in
//! French notation: row 0 is the bottom row and holds the largest part. On top
//! of the value type this module provides the boundary walk, k-interiors and
//! k-boundaries, k-rims, rectangle and irreducibility predicates, and a linear
//! self-conjugacy test.

use crate::error::{CatalanError, Result};
use crate::skew::SkewPartition;
use std::fmt;

/// A lattice point on a partition outline, as (x, y) with the origin at the
/// bottom-left corner of the diagram.
pub type BoundaryPoint = (i64, i64);

/// A finite weakly decreasing sequence of positive integers.
///
/// Immutable after construction; equality and hashing are structural.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Partition {
    parts: Vec<i64>,
}

impl Partition {
    /// Build a partition, validating that parts are positive and weakly
    /// decreasing.
    pub fn new(parts: Vec<i64>) -> Result<Self> {
        let decreasing = parts.windows(2).all(|w| w[0] >= w[1]);
        let positive = parts.iter().all(|&p| p > 0);
        if !decreasing || !positive {
            return Err(CatalanError::InvalidShape(format!(
                "partition parts must be positive and weakly decreasing, got {:?}",
                parts
            )));
        }
        Ok(Self { parts })
    }

    /// Build a partition from a sequence that may carry trailing zeros, as
    /// produced by padded arithmetic. Leading/interior zeros still fail.
    pub fn from_composition(mut parts: Vec<i64>) -> Result<Self> {
        while parts.last() == Some(&0) {
            parts.pop();
        }
        Self::new(parts)
    }

    /// Internal constructor for sequences already known to be valid.
    pub(crate) fn from_sorted(parts: Vec<i64>) -> Self {
        debug_assert!(parts.windows(2).all(|w| w[0] >= w[1]));
        debug_assert!(parts.iter().all(|&p| p > 0));
        Self { parts }
    }

    /// The empty partition
    pub fn empty() -> Self {
        Self::default()
    }

    /// The parts, largest first
    pub fn parts(&self) -> &[i64] {
        &self.parts
    }

    /// Number of parts
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Check if this is the empty partition
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// The i-th part, reading 0 beyond the end
    pub fn part(&self, i: usize) -> i64 {
        self.parts.get(i).copied().unwrap_or(0)
    }

    /// Sum of all parts
    pub fn size(&self) -> i64 {
        self.parts.iter().sum()
    }

    /// Cellwise containment: `self` covers every cell of `other`
    pub fn contains(&self, other: &Partition) -> bool {
        other
            .parts
            .iter()
            .enumerate()
            .all(|(i, &p)| self.part(i) >= p)
    }

    /// Number of cells in column `c`
    pub fn column_length(&self, c: i64) -> i64 {
        self.parts.iter().filter(|&&p| p > c).count() as i64
    }

    /// The conjugate (transposed) partition
    pub fn conjugate(&self) -> Partition {
        let cols = self.part(0);
        Partition::from_sorted((0..cols).map(|c| self.column_length(c)).collect())
    }

    /// Hook length of the cell at (row, col): its arm, its leg, and itself
    pub fn hook_length(&self, row: usize, col: i64) -> Result<i64> {
        if row >= self.parts.len() || col < 0 || col >= self.parts[row] {
            return Err(CatalanError::Domain(format!(
                "cell ({}, {}) is not in the diagram of {}",
                row, col, self
            )));
        }
        Ok((self.parts[row] - col) + (self.column_length(col) - row as i64) - 1)
    }

    /// All hook lengths, row by row
    pub fn hook_lengths(&self) -> Vec<Vec<i64>> {
        self.parts
            .iter()
            .enumerate()
            .map(|(row, &len)| {
                (0..len)
                    .map(|col| (len - col) + (self.column_length(col) - row as i64) - 1)
                    .collect()
            })
            .collect()
    }

    // ========================================================================
    // Boundary geometry
    // ========================================================================

    /// The staircase outline of the diagram, traced from bottom-right
    /// `(λ[0], 0)` to top-left `(0, len(λ))`, with no point repeated.
    ///
    /// Each part contributes its outer corner, preceded by the horizontal run
    /// back to the previous corner; a final run walks to the top-left corner.
    pub fn boundary(&self) -> Vec<BoundaryPoint> {
        fn horizontal_run(start: BoundaryPoint, bdy: &[BoundaryPoint]) -> Vec<BoundaryPoint> {
            match bdy.last() {
                None => vec![start],
                Some(&(stop_x, _)) => (start.0..stop_x).rev().map(|x| (x, start.1)).collect(),
            }
        }
        let mut bdy: Vec<BoundaryPoint> = Vec::new();
        for (i, &part) in self.parts.iter().enumerate() {
            let run = horizontal_run((part, i as i64), &bdy);
            bdy.extend(run);
            bdy.push((part, i as i64 + 1));
        }
        let top_run = horizontal_run((0, self.parts.len() as i64), &bdy);
        bdy.extend(top_run);
        bdy
    }

    /// The sub-partition of cells whose hook length exceeds `k`
    pub fn k_interior(&self, k: i64) -> Partition {
        let rows: Vec<i64> = self
            .parts
            .iter()
            .enumerate()
            .map(|(row, &len)| {
                (0..len)
                    .filter(|&col| (len - col) + (self.column_length(col) - row as i64) - 1 > k)
                    .count() as i64
            })
            .take_while(|&count| count > 0)
            .collect();
        Partition::from_sorted(rows)
    }

    /// The skew shape left after removing every cell of hook length > k
    pub fn k_boundary(&self, k: i64) -> SkewPartition {
        SkewPartition::new_unchecked(self.clone(), self.k_interior(k))
    }

    /// The k-rim: the k-interior's outline extended by a bottom horizontal run
    /// out to this partition's rightmost column and a top vertical run up to
    /// its row count.
    pub fn k_rim(&self, k: i64) -> Vec<BoundaryPoint> {
        let interior_bdy = self.k_interior(k).boundary();
        let (interior_right_x, _) = interior_bdy[0];
        let (_, interior_top_y) = interior_bdy[interior_bdy.len() - 1];
        let mut rim: Vec<BoundaryPoint> = ((interior_right_x + 1)..=self.part(0))
            .rev()
            .map(|x| (x, 0))
            .collect();
        rim.extend(interior_bdy);
        rim.extend(((interior_top_y + 1)..=self.parts.len() as i64).map(|y| (0, y)));
        rim
    }

    /// Row lengths of the k-boundary
    pub fn k_row_lengths(&self, k: i64) -> Vec<i64> {
        self.k_boundary(k).row_lengths()
    }

    /// Column lengths of the k-boundary
    pub fn k_column_lengths(&self, k: i64) -> Vec<i64> {
        self.k_boundary(k).column_lengths()
    }

    // ========================================================================
    // Rectangles and k-irreducibility
    // ========================================================================

    fn rows_of_length(&self, w: i64) -> i64 {
        self.parts.iter().filter(|&&p| p == w).count() as i64
    }

    /// Check for an h × w rectangle: at least `h` parts exactly equal to `w`.
    /// Both dimensions must be at least 1.
    pub fn has_rectangle(&self, h: i64, w: i64) -> Result<bool> {
        if h < 1 || w < 1 {
            return Err(CatalanError::Domain(format!(
                "rectangle dimensions must be at least 1, got {} x {}",
                h, w
            )));
        }
        Ok(self.rows_of_length(w) >= h)
    }

    /// Check for a k-rectangle: (k-i+1) rows of length i for some i in [1, k]
    pub fn has_k_rectangle(&self, k: i64) -> bool {
        k_rectangle_dimension_list(k)
            .into_iter()
            .any(|(h, w)| self.rows_of_length(w) >= h)
    }

    /// Check that every part is at most k
    pub fn is_k_bounded(&self, k: i64) -> bool {
        self.part(0) <= k
    }

    /// A k-bounded partition is k-reducible if it has a k-rectangle.
    /// Asking this of a partition that is not k-bounded is an error.
    pub fn is_k_reducible(&self, k: i64) -> Result<bool> {
        if !self.is_k_bounded(k) {
            return Err(CatalanError::Domain(format!(
                "{} is not {}-bounded; reducibility is only defined for k-bounded partitions",
                self, k
            )));
        }
        Ok(self.has_k_rectangle(k))
    }

    /// Negation of [`is_k_reducible`](Self::is_k_reducible), same precondition
    pub fn is_k_irreducible(&self, k: i64) -> Result<bool> {
        Ok(!self.is_k_reducible(k)?)
    }

    /// A partition is a k-shape when its k-boundary has weakly decreasing row
    /// and column shapes.
    pub fn is_k_shape(&self, k: i64) -> bool {
        self.k_boundary(k).is_linked()
    }

    // ========================================================================
    // Self-conjugacy
    // ========================================================================

    /// Check λ = λ′ without materializing the conjugate.
    ///
    /// Scans the distinct-part runs from the end: every column index between
    /// consecutive parts must have column length equal to the number of rows
    /// above the run. Runs in time linear in len(λ) + λ[0].
    pub fn is_symmetric(&self) -> bool {
        let l = self.parts.len();
        for j in 0..l {
            let lo = if j == 0 { 0 } else { self.parts[l - j] };
            let hi = self.parts[l - j - 1];
            let expected = (l - j) as i64;
            for c in lo..hi {
                if self.part(c as usize) != expected {
                    return false;
                }
            }
        }
        true
    }

    // ========================================================================
    // Lexicographic successor
    // ========================================================================

    /// The next partition after `self` in lexicographic order that contains
    /// `min` and is contained in `max` (when given). With no `max` the
    /// successor just appends a 1. Returns `None` when `self` is the last
    /// such partition.
    pub fn next_within(
        &self,
        min: &Partition,
        max: Option<&Partition>,
        mode: SuccessorMode,
    ) -> Result<Option<Partition>> {
        if let Some(max) = max {
            if !max.contains(self) {
                return Err(CatalanError::Domain(format!(
                    "{} is not contained in the upper bound {}",
                    self, max
                )));
            }
        }
        if !self.contains(min) {
            return Err(CatalanError::Domain(format!(
                "{} does not contain the lower bound {}",
                self, min
            )));
        }
        let Some(max) = max else {
            let mut parts = self.parts.clone();
            parts.push(1);
            return Ok(Some(Partition::from_sorted(parts)));
        };
        if max.is_empty() {
            return Ok(None);
        }
        let n = max.len();
        let p: Vec<i64> = (0..n).map(|i| self.part(i)).collect();
        let mut next_p = p.clone();
        for r in (1..n).rev() {
            let room = match mode {
                SuccessorMode::Any => p[r] < p[r - 1],
                SuccessorMode::StrictlyDecreasing => p[r] < p[r - 1] - 1,
            };
            if p[r] < max.part(r) && room {
                next_p[r] += 1;
                return Ok(Some(Partition::from_composition(next_p)?));
            }
            next_p[r] = min.part(r);
        }
        if p[0] < max.part(0) {
            next_p[0] += 1;
            return Ok(Some(Partition::from_composition(next_p)?));
        }
        Ok(None)
    }
}

/// Which partitions [`Partition::next_within`] may step to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SuccessorMode {
    /// Any partition
    #[default]
    Any,
    /// Only partitions with strictly decreasing parts
    StrictlyDecreasing,
}

/// Dimensions (height, width) of every k-rectangle: (k-i+1) × i for i in [1, k]
pub fn k_rectangle_dimension_list(k: i64) -> Vec<(i64, i64)> {
    (1..=k).map(|i| (k - i + 1, i)).collect()
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, p) in self.parts.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", p)?;
        }
        write!(f, "]")
    }
}

// ============================================================================
// Tests
// ============================================================================
