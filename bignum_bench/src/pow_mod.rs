use rusty_bignum::bignum::{ArithmeticError, Bignum};

/// x^y mod m by halving the exponent: square x, recurse on y / 2, then fix up odd exponents.
///
/// The recursion depth is the bit length of y. Agrees with `Bignum::pow_mod`, including
/// returning `1 mod m` for a zero exponent.
pub fn pow_mod_recursive(x: &Bignum, y: &Bignum, m: &Bignum) -> Result<Bignum, ArithmeticError> {
    if y.is_negative() {
        return Err(ArithmeticError::NegativeExponent);
    }

    if y.is_zero() {
        let mut one = Bignum::one();
        one.remainder(m)?;
        return Ok(one);
    }

    let mut reduced = x.clone();
    reduced.remainder(m)?;
    if y.is_one() {
        return Ok(reduced);
    }

    let mut square = reduced.clone();
    square.times(&reduced).remainder(m)?;
    let mut z = pow_mod_recursive(&square, &(y >> 1), m)?;
    if y.is_odd() {
        z.times(&reduced).remainder(m)?;
    }

    Ok(z)
}
