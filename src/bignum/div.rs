use crate::bignum::{ArithmeticError, Bignum};

/// The quotient and remainder of a division, computed together
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DivisionResult {
    pub quotient: Bignum,
    pub remainder: Bignum,
}

/// Long division of a non-negative dividend by a positive divisor.
///
/// Walks the dividend from its most significant bit down: both halves of the result are doubled,
/// the current bit is carried into the remainder and the divisor is taken out once whenever the
/// remainder reaches it. This is the textbook "halve, recurse, double" algorithm with the
/// recursion unrolled, so the stack depth no longer grows with the size of the dividend.
pub fn divide_and_mod(a: &Bignum, b: &Bignum) -> Result<DivisionResult, ArithmeticError> {
    if b.is_zero() {
        return Err(ArithmeticError::DivisionByZero);
    }

    if a.is_negative() || b.is_negative() {
        return Err(ArithmeticError::NegativeOperand);
    }

    let one = Bignum::one();
    let mut res = DivisionResult::default();
    for i in (0..a.bit_length()).rev() {
        res.quotient.shift_left(1);
        res.remainder.shift_left(1);

        if a.test_bit(i) {
            res.remainder.plus(&one);
        }

        if res.remainder >= *b {
            res.remainder.minus(b);
            res.quotient.plus(&one);
        }
    }

    Ok(res)
}

impl Bignum {
    /// Division rounding towards negative infinity, the remainder takes the sign of the divisor
    pub fn div_rem(&self, divisor: &Self) -> Result<DivisionResult, ArithmeticError> {
        let divisor_abs = divisor.unsigned_abs();
        let DivisionResult {
            mut quotient,
            mut remainder,
        } = divide_and_mod(&self.unsigned_abs(), &divisor_abs)?;

        match (self.is_negative(), divisor.is_negative()) {
            (false, false) => {}
            (true, true) => {
                remainder.negate();
            }
            (dividend_negative, _) => {
                quotient.negate();
                if !remainder.is_zero() {
                    // step the quotient down so the remainder flips over to the divisor's sign
                    quotient.minus(&Bignum::one());
                    if dividend_negative {
                        let mut flipped = divisor_abs;
                        flipped.minus(&remainder);
                        remainder = flipped;
                    } else {
                        remainder.plus(divisor);
                    }
                }
            }
        }

        Ok(DivisionResult {
            quotient,
            remainder,
        })
    }

    /// Integer division, this becomes this / rhs
    pub fn quotient(&mut self, rhs: &Self) -> Result<&mut Self, ArithmeticError> {
        let mut res = self.div_rem(rhs)?;
        Ok(self.swap(&mut res.quotient))
    }

    /// Modulo, this becomes this % rhs
    pub fn remainder(&mut self, rhs: &Self) -> Result<&mut Self, ArithmeticError> {
        let mut res = self.div_rem(rhs)?;
        Ok(self.swap(&mut res.remainder))
    }
}
