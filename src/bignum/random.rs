use crate::bignum::{ArithmeticError, Bignum};
use crate::rand::Rng32;

impl Bignum {
    /// Generate a uniformly random Bignum from 0 (or 1 if `allow_zero` is false) to max inclusive
    pub fn random(max: &Self, allow_zero: bool, mut rng: impl Rng32) -> Result<Self, ArithmeticError> {
        if max.is_negative() || (!allow_zero && max.is_zero()) {
            return Err(ArithmeticError::EmptyRange);
        }

        loop {
            let candidate = Self::random_fill(max.bit_length(), None, &mut rng);
            if candidate <= *max && (allow_zero || !candidate.is_zero()) {
                break Ok(candidate);
            }
        }
    }

    /// Generate a uniformly random Bignum from min to max inclusive
    pub fn random_range(min: &Self, max: &Self, rng: impl Rng32) -> Result<Self, ArithmeticError> {
        if min > max {
            return Err(ArithmeticError::EmptyRange);
        }

        let mut out = Self::random(&(max - min), true, rng)?;
        out.plus(min);
        Ok(out)
    }

    /// Generate a random number with at most `bits` bits.
    ///
    /// With `allow_msb_zero` false the top bit is always set, so the result has exactly `bits` bits.
    pub fn random_bits(
        bits: usize,
        allow_zero: bool,
        allow_msb_zero: bool,
        mut rng: impl Rng32,
    ) -> Result<Self, ArithmeticError> {
        if bits == 0 {
            return match allow_zero {
                true => Ok(Self::ZERO),
                false => Err(ArithmeticError::EmptyRange),
            };
        }

        let top = (!allow_msb_zero).then_some(true);
        loop {
            let candidate = Self::random_fill(bits, top, &mut rng);
            if allow_zero || !candidate.is_zero() {
                break Ok(candidate);
            }
        }
    }

    /// Fill `bits` bits with coin flips, optionally pinning the most significant one
    fn random_fill(bits: usize, top: Option<bool>, rng: &mut impl Rng32) -> Self {
        let mut out = Self {
            bits: (0..bits).map(|_| rng.gen_bool()).collect(),
            positive: true,
        };

        if let (Some(top), Some(last)) = (top, out.bits.last_mut()) {
            *last = top;
        }

        out.normalize();
        out
    }
}
