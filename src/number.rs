use std::fmt;

/// A JSON number.
///
/// A number is held as exactly one of a non-negative integer, a negative
/// integer or a finite float. Integers never compare equal to floats, so
/// `1` and `1.0` are different numbers even though both convert to
/// `1.0_f64`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Number {
    n: N,
}

#[derive(Clone, Copy, Debug)]
enum N {
    PosInt(u64),
    /// Always less than zero.
    NegInt(i64),
    /// Always finite.
    Float(f64),
}

impl PartialEq for N {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (N::PosInt(a), N::PosInt(b)) => a == b,
            (N::NegInt(a), N::NegInt(b)) => a == b,
            (N::Float(a), N::Float(b)) => a == b,
            _ => false,
        }
    }
}

impl Number {
    /// Creates a number from a float. Returns `None` for NaN and infinities,
    /// which JSON cannot represent.
    #[inline]
    pub fn from_f64(value: f64) -> Option<Number> {
        if value.is_finite() {
            Some(Number { n: N::Float(value) })
        } else {
            None
        }
    }

    #[inline]
    pub fn is_i64(&self) -> bool {
        match self.n {
            N::PosInt(v) => v <= i64::MAX as u64,
            N::NegInt(_) => true,
            N::Float(_) => false,
        }
    }

    #[inline]
    pub fn is_u64(&self) -> bool {
        matches!(self.n, N::PosInt(_))
    }

    #[inline]
    pub fn is_f64(&self) -> bool {
        matches!(self.n, N::Float(_))
    }

    /// Returns the number as an `i64` if it is an integer in range.
    #[inline]
    pub fn as_i64(&self) -> Option<i64> {
        match self.n {
            N::PosInt(v) => i64::try_from(v).ok(),
            N::NegInt(v) => Some(v),
            N::Float(_) => None,
        }
    }

    /// Returns the number as a `u64` if it is a non-negative integer.
    #[inline]
    pub fn as_u64(&self) -> Option<u64> {
        match self.n {
            N::PosInt(v) => Some(v),
            N::NegInt(_) | N::Float(_) => None,
        }
    }

    /// Returns the number as an `f64`. Large integers lose precision.
    #[inline]
    pub fn as_f64(&self) -> Option<f64> {
        match self.n {
            N::PosInt(v) => Some(v as f64),
            N::NegInt(v) => Some(v as f64),
            N::Float(v) => Some(v),
        }
    }

    /// Like [`as_i64`](Number::as_i64), but also accepts floats that have no
    /// fractional part and fit an `i64`.
    pub(crate) fn as_integral_i64(&self) -> Option<i64> {
        match self.n {
            N::Float(v) if v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64 => {
                Some(v as i64)
            }
            _ => self.as_i64(),
        }
    }

    /// Like [`as_u64`](Number::as_u64), but also accepts floats that have no
    /// fractional part and fit a `u64`.
    pub(crate) fn as_integral_u64(&self) -> Option<u64> {
        match self.n {
            N::Float(v) if v.fract() == 0.0 && v >= 0.0 && v < u64::MAX as f64 => Some(v as u64),
            _ => self.as_u64(),
        }
    }

    pub(crate) fn visit<'de, V>(&self, visitor: V) -> crate::Result<V::Value>
    where
        V: serde::de::Visitor<'de>,
    {
        match self.n {
            N::PosInt(v) => visitor.visit_u64(v),
            N::NegInt(v) => visitor.visit_i64(v),
            N::Float(v) => visitor.visit_f64(v),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.n {
            N::PosInt(v) => fmt::Display::fmt(&v, f),
            N::NegInt(v) => fmt::Display::fmt(&v, f),
            N::Float(v) => fmt::Debug::fmt(&v, f),
        }
    }
}

macro_rules! from_unsigned {
    ($($t:ty)*) => {
        $(
            impl From<$t> for Number {
                #[inline]
                fn from(value: $t) -> Self {
                    Number { n: N::PosInt(value as u64) }
                }
            }
        )*
    };
}

macro_rules! from_signed {
    ($($t:ty)*) => {
        $(
            impl From<$t> for Number {
                #[inline]
                fn from(value: $t) -> Self {
                    let n = if value < 0 {
                        N::NegInt(value as i64)
                    } else {
                        N::PosInt(value as u64)
                    };
                    Number { n }
                }
            }
        )*
    };
}

from_unsigned!(u8 u16 u32 u64 usize);
from_signed!(i8 i16 i32 i64 isize);
