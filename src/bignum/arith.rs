use std::cmp::Ordering;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Shl, ShlAssign, Shr,
    ShrAssign, Sub, SubAssign,
};

use crate::bignum::Bignum;

/// One column of a ripple carry adder, returns (sum, carry)
#[inline]
const fn carrying_add(x: bool, y: bool, carry: bool) -> (bool, bool) {
    (x ^ y ^ carry, (x & y) | (carry & (x ^ y)))
}

impl Bignum {
    /// Switch the sign of this number using the two's complement
    pub fn negate(&mut self) -> &mut Self {
        // zero has no distinct negative form
        if self.is_zero() {
            return self;
        }

        self.positive = !self.positive;

        let mut carry = true;
        for bit in self.bits.iter_mut() {
            let (sum, overflow) = carrying_add(!*bit, false, carry);
            *bit = sum;
            carry = overflow;
        }

        // -2^n is stored as n zero bits, its positive counterpart needs bit n set
        if carry && self.positive {
            self.bits.push(true);
        }

        self.normalize();
        self
    }

    /// Add rhs to this number
    pub fn plus(&mut self, rhs: &Self) -> &mut Self {
        // the sum of two n-bit numbers fits in n + 1 bits
        self.set_bit_length(self.bits.len().max(rhs.bits.len()) + 1);

        let mut carry = false;
        for (i, bit) in self.bits.iter_mut().enumerate() {
            let r = rhs.bits.get(i).copied().unwrap_or(!rhs.positive);
            let (sum, overflow) = carrying_add(*bit, r, carry);
            *bit = sum;
            carry = overflow;
        }

        // with matching signs the carry only comes from the sign fill and can be dropped,
        // with differing signs it is set exactly when the result is non-negative
        if self.positive != rhs.positive {
            self.positive = carry;
        }

        self.normalize();
        self
    }

    /// Subtract rhs from this number
    pub fn minus(&mut self, rhs: &Self) -> &mut Self {
        let negated = -rhs;
        self.plus(&negated)
    }

    /// Multiply this number by factor using shift and add
    pub fn times(&mut self, factor: &Self) -> &mut Self {
        // the loop below needs a non-negative multiplier, move the sign onto self
        let negated;
        let factor = if factor.is_negative() {
            self.negate();
            negated = -factor;
            &negated
        } else {
            factor
        };

        let original = std::mem::take(self);
        for i in (0..factor.bits.len()).rev() {
            self.shift_left(1);
            if factor.bits[i] {
                self.plus(&original);
            }
        }

        self.normalize();
        self
    }

    pub fn shift_left(&mut self, shift: usize) -> &mut Self {
        self.normalize();
        let len = self.bits.len();
        self.bits.resize(len + shift, false);
        self.bits.rotate_right(shift);
        self.normalize();
        self
    }

    /// Arithmetic shift, the sign is preserved
    pub fn shift_right(&mut self, shift: usize) -> &mut Self {
        if shift >= self.bits.len() {
            // collapses to the sign fill: 0 or -1
            self.bits.clear();
        } else {
            self.bits.drain(..shift);
        }

        self.normalize();
        self
    }

    /// Compare two numbers, neither needs to be normalized
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self.positive, other.positive) {
            (true, false) => return Ordering::Greater,
            (false, true) => return Ordering::Less,
            _ => {}
        }

        // with equal signs both are sign extended with the same fill, so the two's complement
        // patterns order the same way as the values they represent
        let top = self.bits.len().max(other.bits.len());
        (0..top)
            .rev()
            .map(|i| self.test_bit(i).cmp(&other.test_bit(i)))
            .find(|ordering| *ordering != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialEq for Bignum {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl Eq for Bignum {}

impl PartialOrd for Bignum {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Bignum {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl Neg for Bignum {
    type Output = Self;
    fn neg(mut self) -> Self::Output {
        self.negate();
        self
    }
}

impl Neg for &Bignum {
    type Output = Bignum;
    fn neg(self) -> Self::Output {
        let mut out = self.clone();
        out.negate();
        out
    }
}

macro_rules! bignum_arith_impls {
    ($trait:ident, $op:ident, $trait_assign:ident, $op_assign:ident, $method:ident, infallible) => {
        impl $trait<Bignum> for Bignum {
            type Output = Self;

            fn $op(mut self, rhs: Bignum) -> Self::Output {
                self.$method(&rhs);
                self
            }
        }

        impl $trait<&Bignum> for Bignum {
            type Output = Self;

            fn $op(mut self, rhs: &Bignum) -> Self::Output {
                self.$method(rhs);
                self
            }
        }

        impl $trait<Bignum> for &Bignum {
            type Output = Bignum;

            fn $op(self, rhs: Bignum) -> Self::Output {
                let mut out = self.clone();
                out.$method(&rhs);
                out
            }
        }

        impl $trait<&Bignum> for &Bignum {
            type Output = Bignum;

            fn $op(self, rhs: &Bignum) -> Self::Output {
                let mut out = self.clone();
                out.$method(rhs);
                out
            }
        }

        impl $trait_assign<Bignum> for Bignum {
            fn $op_assign(&mut self, rhs: Bignum) {
                self.$method(&rhs);
            }
        }

        impl $trait_assign<&Bignum> for Bignum {
            fn $op_assign(&mut self, rhs: &Bignum) {
                self.$method(rhs);
            }
        }
    };

    // the fallible operations panic like the primitive integer operators do
    ($trait:ident, $op:ident, $trait_assign:ident, $op_assign:ident, $method:ident, fallible) => {
        impl $trait<Bignum> for Bignum {
            type Output = Self;

            fn $op(mut self, rhs: Bignum) -> Self::Output {
                self.$op_assign(&rhs);
                self
            }
        }

        impl $trait<&Bignum> for Bignum {
            type Output = Self;

            fn $op(mut self, rhs: &Bignum) -> Self::Output {
                self.$op_assign(rhs);
                self
            }
        }

        impl $trait<Bignum> for &Bignum {
            type Output = Bignum;

            fn $op(self, rhs: Bignum) -> Self::Output {
                let mut out = self.clone();
                out.$op_assign(&rhs);
                out
            }
        }

        impl $trait<&Bignum> for &Bignum {
            type Output = Bignum;

            fn $op(self, rhs: &Bignum) -> Self::Output {
                let mut out = self.clone();
                out.$op_assign(rhs);
                out
            }
        }

        impl $trait_assign<Bignum> for Bignum {
            fn $op_assign(&mut self, rhs: Bignum) {
                self.$op_assign(&rhs);
            }
        }

        impl $trait_assign<&Bignum> for Bignum {
            fn $op_assign(&mut self, rhs: &Bignum) {
                if let Err(e) = self.$method(rhs) {
                    panic!("{e}");
                }
            }
        }
    };

    ($trait:ident, $op:ident, $trait_assign:ident, $op_assign:ident, $method:ident, shift) => {
        impl $trait<usize> for Bignum {
            type Output = Self;

            fn $op(mut self, rhs: usize) -> Self::Output {
                self.$method(rhs);
                self
            }
        }

        impl $trait<usize> for &Bignum {
            type Output = Bignum;

            fn $op(self, rhs: usize) -> Self::Output {
                let mut out = self.clone();
                out.$method(rhs);
                out
            }
        }

        impl $trait_assign<usize> for Bignum {
            fn $op_assign(&mut self, rhs: usize) {
                self.$method(rhs);
            }
        }
    };
}

bignum_arith_impls!(Add, add, AddAssign, add_assign, plus, infallible);
bignum_arith_impls!(Sub, sub, SubAssign, sub_assign, minus, infallible);
bignum_arith_impls!(Mul, mul, MulAssign, mul_assign, times, infallible);
bignum_arith_impls!(Div, div, DivAssign, div_assign, quotient, fallible);
bignum_arith_impls!(Rem, rem, RemAssign, rem_assign, remainder, fallible);
bignum_arith_impls!(Shl, shl, ShlAssign, shl_assign, shift_left, shift);
bignum_arith_impls!(Shr, shr, ShrAssign, shr_assign, shift_right, shift);
