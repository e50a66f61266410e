//! Crate-wide error type.
//!
//! Every failure here is a deterministic consequence of input shape; there is
//! nothing transient to retry. Errors are raised at the point of detection and
//! propagated. Only enumeration code that probes many candidate inputs absorbs
//! `InvalidShape` per candidate.

/// Result type for catalan operations
pub type Result<T> = std::result::Result<T, CatalanError>;

/// Errors that can occur while building shapes or applying operators
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalanError {
    /// Malformed partition data, an inner shape not contained in its outer
    /// shape, or a (row-shape, column-shape) pair with no linked skew diagram.
    #[error("invalid shape: {0}")]
    InvalidShape(String),

    /// A precondition was violated: reducibility asked of a partition that is
    /// not k-bounded, a bump path started on a shape that is not
    /// catty-connected, root coordinates outside the staircase, and the like.
    #[error("domain error: {0}")]
    Domain(String),

    /// A singular-term accessor was used on an element with several terms, or
    /// a basis action was applied to something other than a unit monomial.
    #[error("not a basis element: {0}")]
    NotABasisElement(String),
}
