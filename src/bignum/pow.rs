use crate::bignum::{ArithmeticError, Bignum};

impl Bignum {
    /// Raise this number to the power exponent, square and multiply from the top bit down
    pub fn pow(&mut self, exponent: &Self) -> Result<&mut Self, ArithmeticError> {
        if exponent.is_negative() {
            return Err(ArithmeticError::NegativeExponent);
        }

        let mut result = Bignum::one();
        for i in (0..exponent.bit_length()).rev() {
            let square = result.clone();
            result.times(&square);

            if exponent.test_bit(i) {
                result.times(self);
            }
        }

        Ok(self.swap(&mut result))
    }

    /// Raise this number to the power exponent remainder modulus.
    ///
    /// The running result is reduced after every multiplication so it never grows much past the
    /// size of the modulus, whatever the size of the exponent.
    pub fn pow_mod(&mut self, exponent: &Self, modulus: &Self) -> Result<&mut Self, ArithmeticError> {
        if exponent.is_negative() {
            return Err(ArithmeticError::NegativeExponent);
        }

        let mut result = Bignum::one();
        result.remainder(modulus)?;

        for i in (0..exponent.bit_length()).rev() {
            let square = result.clone();
            result.times(&square).remainder(modulus)?;

            if exponent.test_bit(i) {
                result.times(self).remainder(modulus)?;
            }
        }

        Ok(self.swap(&mut result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(value: i64) -> Bignum {
        Bignum::from(value)
    }

    #[test]
    fn test_pow_bignums() {
        let mut a = n(2);
        a.pow(&n(10)).unwrap();
        assert_eq!(a, n(1024));

        let mut a = n(-3);
        a.pow(&n(3)).unwrap();
        assert_eq!(a, n(-27));

        let mut a = n(12345);
        a.pow(&Bignum::ZERO).unwrap();
        assert!(a.is_one());

        let mut a = Bignum::ZERO;
        a.pow(&Bignum::ZERO).unwrap();
        assert!(a.is_one());

        let mut a = n(2);
        a.pow(&n(125)).unwrap();
        assert_eq!(a, Bignum::power2(125));
    }

    #[test]
    fn test_pow_chain_bignums() {
        // (2^3)^5
        let mut a = n(2);
        a.pow(&n(3)).unwrap().pow(&n(5)).unwrap();
        assert_eq!(a, Bignum::power2(15));

        // 2^(3^5)
        let mut a = n(2);
        let mut b = n(3);
        a.pow(b.pow(&n(5)).unwrap()).unwrap();
        assert_eq!(b, n(243));
        assert_eq!(a, Bignum::power2(243));
    }

    #[test]
    fn test_pow_negative_exponent_bignums() {
        let mut a = n(2);
        assert!(matches!(
            a.pow(&n(-1)),
            Err(ArithmeticError::NegativeExponent)
        ));
        assert!(matches!(
            a.pow_mod(&n(-1), &n(7)),
            Err(ArithmeticError::NegativeExponent)
        ));
        assert_eq!(a, n(2));
    }

    #[test]
    fn test_pow_mod_bignums() {
        let mut a = n(2);
        a.pow_mod(&n(125), &n(127)).unwrap();
        assert_eq!(a, n(64));

        let mut a = n(2);
        a.pow_mod(&n(10), &n(9)).unwrap();
        assert_eq!(a, n(7));

        let mut a = n(6);
        a.pow_mod(&n(10), &n(60466177)).unwrap();
        assert_eq!(a, n(60466176));

        let mut a = n(5);
        a.pow_mod(&Bignum::ZERO, &Bignum::one()).unwrap();
        assert!(a.is_zero());

        let mut a = n(5);
        assert!(matches!(
            a.pow_mod(&n(3), &Bignum::ZERO),
            Err(ArithmeticError::DivisionByZero)
        ));
    }
}
