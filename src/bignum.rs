//! Arbitrary precision signed integers stored as a variable length two's complement bit vector.
//!
//! Every bit lives in its own cell, least significant first. A positive number is stored
//! directly, a negative one as the two's complement over the current bit length with an
//! implicit infinite run of ones above it. All arithmetic updates the receiver in place and
//! hands back `&mut Self` so calls can be chained: `a.plus(&b).times(&c)`.

use std::fmt;

mod arith;
mod div;
mod pow;
mod radix;
mod random;

pub use div::{divide_and_mod, DivisionResult};
pub use radix::ParseBignumError;

#[derive(Clone)]
pub struct Bignum {
    bits: Vec<bool>,
    positive: bool,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ArithmeticError {
    DivisionByZero,
    NegativeExponent,
    NegativeOperand,
    InvalidRadix(u32),
    EmptyRange,
    NoInverse,
}

impl fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "attempt to divide by zero"),
            Self::NegativeExponent => write!(f, "can only raise to a non-negative power"),
            Self::NegativeOperand => write!(f, "operation is only defined for non-negative operands"),
            Self::InvalidRadix(radix) => write!(f, "radix {radix} is not supported"),
            Self::EmptyRange => write!(f, "no value satisfies the requested bounds"),
            Self::NoInverse => write!(f, "no modular inverse exists"),
        }
    }
}

impl std::error::Error for ArithmeticError {}

/// Public utility functions
impl Bignum {
    pub const ZERO: Self = Self {
        bits: Vec::new(),
        positive: true,
    };

    pub fn one() -> Self {
        Self {
            bits: vec![true],
            positive: true,
        }
    }

    /// 2 ^ power
    pub fn power2(power: usize) -> Self {
        let mut out = Self::one();
        out.shift_left(power);
        out
    }

    /// The number of bits currently stored, for a normalized number this is the minimal
    /// two's complement width excluding the sign bit
    pub fn bit_length(&self) -> usize {
        self.bits.len()
    }

    pub fn is_non_negative(&self) -> bool {
        self.positive
    }

    pub fn is_negative(&self) -> bool {
        !self.positive
    }

    pub fn is_zero(&self) -> bool {
        self.positive && self.bits.iter().all(|bit| !bit)
    }

    pub fn is_one(&self) -> bool {
        self.positive
            && self.bits.first() == Some(&true)
            && self.bits.iter().skip(1).all(|bit| !bit)
    }

    pub fn is_even(&self) -> bool {
        !self.test_bit(0)
    }

    pub fn is_odd(&self) -> bool {
        !self.is_even()
    }

    /// Test if bit N is set, bits past the stored length read as the sign fill
    pub fn test_bit(&self, bit: usize) -> bool {
        self.bits.get(bit).copied().unwrap_or(self.fill_bit())
    }

    /// Exchange the contents of two numbers without copying any bits
    pub fn swap(&mut self, other: &mut Self) -> &mut Self {
        std::mem::swap(self, other);
        self
    }

    pub fn abs(&mut self) -> &mut Self {
        if !self.positive {
            self.negate();
        }
        self
    }

    /// A copy of the absolute value
    pub fn unsigned_abs(&self) -> Self {
        let mut out = self.clone();
        out.abs();
        out
    }

    /// Narrowing conversion, keeps the low 64 bits of the two's complement representation.
    ///
    /// This is lossy for anything outside of `i64::MIN..=i64::MAX`, exactly like an `as` cast.
    pub fn to_i64_wrapping(&self) -> i64 {
        self.to_u64_wrapping() as i64
    }

    /// Narrowing conversion, keeps the low 64 bits of the two's complement representation.
    ///
    /// This is lossy for anything outside of `0..=u64::MAX`, exactly like an `as` cast.
    pub fn to_u64_wrapping(&self) -> u64 {
        let fill = if self.positive { u64::MIN } else { u64::MAX };
        self.bits
            .iter()
            .rev()
            .fold(fill, |value, &bit| (value << 1) | u64::from(bit))
    }

    /// The stored bits, most significant first
    pub fn raw_bits(&self) -> String {
        self.bits
            .iter()
            .rev()
            .map(|&bit| if bit { '1' } else { '0' })
            .collect()
    }
}

// private helper functions
impl Bignum {
    /// 0 for positive numbers, 1 for negative ones
    fn fill_bit(&self) -> bool {
        !self.positive
    }

    /// Resize the bit vector, new high bits take the sign fill so the value is unchanged.
    /// Shrinking drops high bits, callers must only shrink when those bits are redundant.
    fn set_bit_length(&mut self, new_length: usize) {
        let fill = self.fill_bit();
        self.bits.resize(new_length, fill);
    }

    /// Strip redundant high bits, zero ends up as the empty positive vector
    fn normalize(&mut self) {
        let fill = self.fill_bit();
        while self.bits.last() == Some(&fill) {
            self.bits.pop();
        }
    }

    fn from_twos_complement(raw: u128, width: u32, positive: bool) -> Self {
        let mut out = Self {
            bits: (0..width).map(|i| (raw >> i) & 1 == 1).collect(),
            positive,
        };
        out.normalize();
        out
    }
}

impl Default for Bignum {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Debug for Bignum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bignum")
            .field("value", &format_args!("{self}"))
            .field("positive", &self.positive)
            .field("bits", &self.raw_bits())
            .finish()
    }
}

macro_rules! impl_from_for_bignum {
    (signed: $($iX:ty),+) => {
        $(
            impl From<$iX> for Bignum {
                fn from(value: $iX) -> Self {
                    Self::from_twos_complement(value as u128, <$iX>::BITS, !value.is_negative())
                }
            }
        )+
    };
    (unsigned: $($uX:ty),+) => {
        $(
            impl From<$uX> for Bignum {
                fn from(value: $uX) -> Self {
                    Self::from_twos_complement(value as u128, <$uX>::BITS, true)
                }
            }
        )+
    };
}

impl_from_for_bignum!(signed: i8, i16, i32, i64, isize);
impl_from_for_bignum!(unsigned: u8, u16, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_primitive_bignums() {
        let zero = Bignum::from(0);
        assert!(zero.is_zero());
        assert_eq!(zero.bit_length(), 0);
        assert!(zero.is_non_negative());

        let n = Bignum::from(10u8);
        assert_eq!(n.raw_bits(), "1010");
        assert!(n.is_non_negative());

        let n = Bignum::from(-4i32);
        assert_eq!(n.raw_bits(), "00");
        assert!(n.is_negative());

        let n = Bignum::from(-1i64);
        assert_eq!(n.bit_length(), 0);
        assert!(n.is_negative());

        assert_eq!(Bignum::from(i32::MIN).to_i64_wrapping(), i32::MIN as i64);
        assert_eq!(Bignum::from(u64::MAX).bit_length(), 64);
        assert_eq!(Bignum::from(u64::MAX).to_u64_wrapping(), u64::MAX);
    }

    #[test]
    fn test_set_bit_length_bignums() {
        let mut n = Bignum::from(-3);
        n.set_bit_length(8);
        assert_eq!(n.raw_bits(), "11111101");
        assert_eq!(n.to_i64_wrapping(), -3);
        n.normalize();
        assert_eq!(n.raw_bits(), "01");

        let mut n = Bignum::from(5);
        n.set_bit_length(6);
        assert_eq!(n.raw_bits(), "000101");
        n.normalize();
        assert_eq!(n.raw_bits(), "101");
    }

    #[test]
    fn test_narrowing_bignums() {
        for value in [0, 1, -1, 2, -2, 1023, -1024, i64::MAX, i64::MIN] {
            assert_eq!(Bignum::from(value).to_i64_wrapping(), value);
        }

        // 2^64 + 5 wraps to 5
        let mut n = Bignum::power2(64);
        n.plus(&Bignum::from(5));
        assert_eq!(n.to_u64_wrapping(), 5);
    }

    #[test]
    fn test_parity_bignums() {
        assert!(Bignum::ZERO.is_even());
        assert!(Bignum::from(-1).is_odd());
        assert!(Bignum::from(-2).is_even());
        assert!(Bignum::from(7).is_odd());
        assert!(Bignum::one().is_one());
        assert!(!Bignum::from(3).is_one());
    }

    #[test]
    fn test_swap_and_take_bignums() {
        let mut a = Bignum::from(16);
        let mut b = Bignum::from(-32);
        a.swap(&mut b);
        assert_eq!(a, Bignum::from(-32));
        assert_eq!(b, Bignum::from(16));

        let moved = std::mem::take(&mut a);
        assert_eq!(moved, Bignum::from(-32));
        assert!(a.is_zero());
        assert!(a.is_non_negative());
    }

    #[test]
    fn test_power2_bignums() {
        assert_eq!(Bignum::power2(0), Bignum::one());
        assert_eq!(Bignum::power2(4), Bignum::from(16));
        assert_eq!(Bignum::power2(100).bit_length(), 101);
    }
}
