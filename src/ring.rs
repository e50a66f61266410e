//! Coefficient rings for linear combinations.
//!
//! A ring (R, +, ×, 0, 1) provides:
//! - Additive abelian group (R, +, 0)
//! - Multiplicative monoid (R, ×, 1)
//! - Multiplication distributes over addition
//!
//! Raising operators and Catalan functions take their coefficients in [`Poly`],
//! univariate polynomials in the indeterminate `t` over the rationals. The
//! [`Ring`] trait keeps the linear-combination machinery generic, so the same
//! free module works over ℤ in tests and over ℚ[t] in the engine.

use num_rational::Ratio;
use std::fmt;

/// Exact rational number
pub type Rational = Ratio<i64>;

/// A commutative ring with identity.
pub trait Ring: Clone + fmt::Debug + PartialEq + Eq {
    /// Additive identity: x + 0 = x
    fn zero() -> Self;

    /// Multiplicative identity: x × 1 = x
    fn one() -> Self;

    /// Ring addition
    fn add(&self, other: &Self) -> Self;

    /// Ring multiplication
    fn mul(&self, other: &Self) -> Self;

    /// Additive inverse
    fn neg(&self) -> Self;

    /// Subtraction, via the additive inverse
    fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Check if this is the additive identity
    fn is_zero(&self) -> bool {
        self == &Self::zero()
    }

    /// Check if this is the multiplicative identity
    fn is_one(&self) -> bool {
        self == &Self::one()
    }
}

impl Ring for i64 {
    #[inline]
    fn zero() -> Self {
        0
    }

    #[inline]
    fn one() -> Self {
        1
    }

    #[inline]
    fn add(&self, other: &Self) -> Self {
        self + other
    }

    #[inline]
    fn mul(&self, other: &Self) -> Self {
        self * other
    }

    #[inline]
    fn neg(&self) -> Self {
        -self
    }
}

impl Ring for Rational {
    #[inline]
    fn zero() -> Self {
        Rational::from_integer(0)
    }

    #[inline]
    fn one() -> Self {
        Rational::from_integer(1)
    }

    #[inline]
    fn add(&self, other: &Self) -> Self {
        self + other
    }

    #[inline]
    fn mul(&self, other: &Self) -> Self {
        self * other
    }

    #[inline]
    fn neg(&self) -> Self {
        -self
    }
}

// ============================================================================
// Polynomials in t
// ============================================================================

/// A univariate polynomial in `t` with rational coefficients.
///
/// Coefficients are stored by ascending power with no trailing zeros, so
/// structural equality coincides with polynomial equality.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Poly {
    coeffs: Vec<Rational>,
}

impl Poly {
    /// Build a polynomial from ascending-power coefficients.
    pub fn new(mut coeffs: Vec<Rational>) -> Self {
        while coeffs.last().is_some_and(|c| Ring::is_zero(c)) {
            coeffs.pop();
        }
        Self { coeffs }
    }

    /// The constant polynomial `c`
    pub fn constant(c: Rational) -> Self {
        Self::new(vec![c])
    }

    /// The constant polynomial `n`
    pub fn from_int(n: i64) -> Self {
        Self::constant(Rational::from_integer(n))
    }

    /// The indeterminate `t`
    pub fn t() -> Self {
        Self::new(vec![Rational::from_integer(0), Rational::from_integer(1)])
    }

    /// Degree, or `None` for the zero polynomial
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.len().checked_sub(1)
    }

    /// Coefficient of `t^k` (zero beyond the degree)
    pub fn coeff(&self, k: usize) -> Rational {
        self.coeffs
            .get(k)
            .copied()
            .unwrap_or_else(|| Rational::from_integer(0))
    }

    /// Ascending-power coefficient slice, highest power last
    pub fn coeffs(&self) -> &[Rational] {
        &self.coeffs
    }
}

impl Ring for Poly {
    fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    fn one() -> Self {
        Self::from_int(1)
    }

    fn add(&self, other: &Self) -> Self {
        let len = self.coeffs.len().max(other.coeffs.len());
        Self::new((0..len).map(|k| self.coeff(k) + other.coeff(k)).collect())
    }

    fn mul(&self, other: &Self) -> Self {
        if self.coeffs.is_empty() || other.coeffs.is_empty() {
            return Self::zero();
        }
        let mut out = vec![Rational::from_integer(0); self.coeffs.len() + other.coeffs.len() - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            for (j, b) in other.coeffs.iter().enumerate() {
                out[i + j] += a * b;
            }
        }
        Self::new(out)
    }

    fn neg(&self) -> Self {
        Self {
            coeffs: self.coeffs.iter().map(|c| -c).collect(),
        }
    }
}

impl fmt::Display for Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.coeffs.is_empty() {
            return write!(f, "0");
        }
        let mut first = true;
        for (k, c) in self.coeffs.iter().enumerate().rev() {
            if Ring::is_zero(c) {
                continue;
            }
            let negative = *c < Rational::from_integer(0);
            let magnitude = if negative { -c } else { *c };
            if first {
                if negative {
                    write!(f, "-")?;
                }
                first = false;
            } else {
                f.write_str(if negative { " - " } else { " + " })?;
            }
            let show_coeff = k == 0 || !Ring::is_one(&magnitude);
            if show_coeff {
                write!(f, "{}", magnitude)?;
            }
            if k > 0 {
                if show_coeff {
                    write!(f, "*")?;
                }
                write!(f, "t")?;
                if k > 1 {
                    write!(f, "^{}", k)?;
                }
            }
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
