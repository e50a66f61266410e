//! Bump paths over catty-connected skew partitions.
//!
//! A bump path starts at a row, walks to the leftmost cell of that row, finds
//! the topmost occupant of that column, and tries to settle in the row above
//! it, bumping upward past rows that are already blocked. The path ends when
//! it breaks free past the top of the shape. Running a path from every
//! still-unblocked row, bottom to top, singles out the *selected rows*: the
//! rows that get to start a path of their own.
//!
//! The walk is only well defined for catty-connected shapes (every row
//! diagonally linked to the next); a row with no cells fails with a domain
//! error.

use crate::error::{CatalanError, Result};
use crate::skew::SkewPartition;
use roaring::RoaringBitmap;

/// Rightmost column occupied by `row`, if the row has any cells
pub fn right(sp: &SkewPartition, row: usize) -> Option<i64> {
    let (lo, hi) = sp.row_bounds(row);
    (hi > lo).then(|| hi - 1)
}

/// Leftmost column occupied by `row`, if the row has any cells
pub fn left(sp: &SkewPartition, row: usize) -> Option<i64> {
    let (lo, hi) = sp.row_bounds(row);
    (hi > lo).then_some(lo)
}

/// Topmost (largest-index) row occupying column `col`, if any
pub fn top(sp: &SkewPartition, col: i64) -> Option<usize> {
    (0..sp.num_rows()).rev().find(|&row| {
        let (lo, hi) = sp.row_bounds(row);
        lo <= col && col < hi
    })
}

/// Bottommost (smallest-index) row occupying column `col`, if any
pub fn bottom(sp: &SkewPartition, col: i64) -> Option<usize> {
    (0..sp.num_rows()).find(|&row| {
        let (lo, hi) = sp.row_bounds(row);
        lo <= col && col < hi
    })
}

/// One step of a bump path: from `start_row`, the candidate landing row is
/// the one above the topmost occupant of the row's leftmost column, bumped
/// upward past `blocked` rows. `None` means the path broke free past the top
/// of the shape.
pub fn bump_path_piece(
    sp: &SkewPartition,
    start_row: usize,
    blocked: &RoaringBitmap,
) -> Result<Option<usize>> {
    let col = left(sp, start_row).ok_or_else(|| {
        CatalanError::Domain(format!(
            "bump path needs a catty-connected shape: row {} of {} has no cells",
            start_row, sp
        ))
    })?;
    let under = top(sp, col).ok_or_else(|| {
        CatalanError::Domain(format!(
            "bump path needs a catty-connected shape: column {} of {} has no cells",
            col, sp
        ))
    })?;
    let mut candidate = under + 1;
    while blocked.contains(candidate as u32) {
        candidate += 1;
    }
    let max_row = sp.num_rows() - 1;
    Ok((candidate <= max_row).then_some(candidate))
}

/// Walk a full bump path from `start_row`, returning every row it visits
/// (always including `start_row`). Bumping consults `blocked` only; the
/// walk's own rows never collide because landing rows strictly increase.
pub fn bump_path(
    sp: &SkewPartition,
    start_row: usize,
    blocked: &RoaringBitmap,
) -> Result<RoaringBitmap> {
    let mut visited = RoaringBitmap::new();
    visited.insert(start_row as u32);
    let mut row = start_row;
    while let Some(next) = bump_path_piece(sp, row, blocked)? {
        visited.insert(next as u32);
        row = next;
    }
    Ok(visited)
}

/// The canonical row selection of a catty-connected skew partition.
///
/// Rows are scanned bottom to top against a growing blocked set; each row not
/// yet blocked is selected, and its bump path blocks everything it visits.
/// Quadratic in the number of rows in the worst case.
pub fn selected_rows(sp: &SkewPartition) -> Result<Vec<usize>> {
    let mut blocked = RoaringBitmap::new();
    let mut selected = Vec::new();
    for row in 0..sp.num_rows() {
        if blocked.contains(row as u32) {
            continue;
        }
        selected.push(row);
        let path = bump_path(sp, row, &blocked)?;
        blocked |= path;
    }
    Ok(selected)
}
