use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

use crate::rational::errors::RationalError;

/// An exact fraction kept in lowest terms.
///
/// The denominator is always strictly positive and the sign lives on the
/// numerator; zero is stored as `0/1`. Values are immutable: every operation
/// returns a new `Rational`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rational(BigRational);

#[allow(clippy::should_implement_trait)]
impl Rational {
    /// Create a reduced rational from a numerator and denominator.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivisionByZero`] when `denom` is zero.
    pub fn new(numer: impl Into<BigInt>, denom: impl Into<BigInt>) -> Result<Self, RationalError> {
        let denom = denom.into();
        if denom.is_zero() {
            return Err(RationalError::DivisionByZero);
        }
        Ok(Self(BigRational::new(numer.into(), denom)))
    }

    /// Create a rational with denominator 1.
    pub fn from_integer(value: impl Into<BigInt>) -> Self {
        Self(BigRational::from_integer(value.into()))
    }

    pub fn zero() -> Self {
        Self(BigRational::zero())
    }

    pub fn one() -> Self {
        Self(BigRational::one())
    }

    pub fn numer(&self) -> &BigInt {
        self.0.numer()
    }

    pub fn denom(&self) -> &BigInt {
        self.0.denom()
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_one(&self) -> bool {
        self.0.is_one()
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    pub fn is_integer(&self) -> bool {
        self.0.is_integer()
    }

    /// The integer value, if the denominator is 1.
    pub fn to_integer(&self) -> Option<BigInt> {
        self.is_integer().then(|| self.0.to_integer())
    }

    pub fn add(&self, other: &Rational) -> Rational {
        Self(&self.0 + &other.0)
    }

    pub fn sub(&self, other: &Rational) -> Rational {
        Self(&self.0 - &other.0)
    }

    pub fn mul(&self, other: &Rational) -> Rational {
        Self(&self.0 * &other.0)
    }

    /// Divide, yielding `None` when `other` is zero.
    pub fn checked_div(&self, other: &Rational) -> Option<Rational> {
        if other.is_zero() {
            return None;
        }
        Some(Self(&self.0 / &other.0))
    }

    pub fn neg(&self) -> Rational {
        Self(-&self.0)
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl From<u32> for Rational {
    fn from(value: u32) -> Self {
        Self::from_integer(value)
    }
}

impl From<BigInt> for Rational {
    fn from(value: BigInt) -> Self {
        Self::from_integer(value)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({})", self.0)
    }
}

impl Add for &Rational {
    type Output = Rational;

    fn add(self, rhs: Self) -> Rational {
        Rational::add(self, rhs)
    }
}

impl Sub for &Rational {
    type Output = Rational;

    fn sub(self, rhs: Self) -> Rational {
        Rational::sub(self, rhs)
    }
}

impl Mul for &Rational {
    type Output = Rational;

    fn mul(self, rhs: Self) -> Rational {
        Rational::mul(self, rhs)
    }
}

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Self(-self.0)
    }
}

/// Render as `n` for integers, `n/d` otherwise.
pub fn rational_to_string(r: &Rational) -> String {
    r.to_string()
}

/// Exact equality of the reduced numerator/denominator pairs.
pub fn rational_equals(a: &Rational, b: &Rational) -> bool {
    a == b
}

/// Strict ordering without floating point.
pub fn rational_compare(a: &Rational, b: &Rational) -> Ordering {
    a.cmp(b)
}
