//! Greatest common divisors and modular inverses over Bignums

use std::mem;

use crate::bignum::{ArithmeticError, Bignum, DivisionResult};

/// Bezout coefficients for a pair of numbers: `x * a + y * b == gcd`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EuclidResult {
    pub x: Bignum,
    pub y: Bignum,
    pub gcd: Bignum,
}

/// Euclid's algorithm on the absolute values of a and b, gcd(0, 0) is 0
pub fn gcd(a: &Bignum, b: &Bignum) -> Bignum {
    let mut a = a.unsigned_abs();
    let mut b = b.unsigned_abs();

    while !b.is_zero() {
        a %= &b;
        mem::swap(&mut a, &mut b);
    }

    a
}

/// Trial division from min(|a|, |b|) down to 1, the first common divisor wins.
///
/// Takes time linear in the value of the smaller operand, so it is only usable for a few dozen
/// bits. gcd_naive(n, 0) is n.
pub fn gcd_naive(a: &Bignum, b: &Bignum) -> Bignum {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    if a < b {
        mem::swap(&mut a, &mut b);
    }

    if b.is_zero() {
        return a;
    }

    let one = Bignum::one();
    let mut d = b.clone();
    while !d.is_one() {
        if (&a % &d).is_zero() && (&b % &d).is_zero() {
            break;
        }
        d.minus(&one);
    }

    d
}

/// Extended Euclid's algorithm for non-negative a and b
pub fn extended_euclid(a: &Bignum, b: &Bignum) -> Result<EuclidResult, ArithmeticError> {
    if a.is_negative() || b.is_negative() {
        return Err(ArithmeticError::NegativeOperand);
    }

    let (mut old_r, mut r) = (a.clone(), b.clone());
    let (mut old_x, mut x) = (Bignum::one(), Bignum::ZERO);
    let (mut old_y, mut y) = (Bignum::ZERO, Bignum::one());

    while !r.is_zero() {
        let DivisionResult {
            quotient,
            remainder,
        } = old_r.div_rem(&r)?;

        old_r = mem::replace(&mut r, remainder);

        let next_x = &old_x - &quotient * &x;
        old_x = mem::replace(&mut x, next_x);

        let next_y = &old_y - &quotient * &y;
        old_y = mem::replace(&mut y, next_y);
    }

    Ok(EuclidResult {
        x: old_x,
        y: old_y,
        gcd: old_r,
    })
}

/// The multiplicative inverse of x modulo m, reduced into [0, m)
pub fn modular_inverse(x: &Bignum, m: &Bignum) -> Result<Bignum, ArithmeticError> {
    let EuclidResult { x: mut inverse, gcd, .. } = extended_euclid(x, m)?;
    if !gcd.is_one() {
        return Err(ArithmeticError::NoInverse);
    }

    inverse.remainder(m)?;
    Ok(inverse)
}
