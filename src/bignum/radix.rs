use std::fmt;
use std::str::FromStr;

use crate::bignum::{divide_and_mod, ArithmeticError, Bignum, DivisionResult};

const DIGITS: &[u8; 16] = b"0123456789abcdef";

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ParseBignumError {
    Empty,
    InvalidDigit { digit: char, radix: u32 },
    InvalidRadix(u32),
}

impl fmt::Display for ParseBignumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "cannot parse a number from an empty string"),
            Self::InvalidDigit { digit, radix } => {
                write!(f, "invalid digit {digit:?} for radix {radix}")
            }
            Self::InvalidRadix(radix) => write!(f, "radix {radix} is not in 2..=16"),
        }
    }
}

impl std::error::Error for ParseBignumError {}

impl Bignum {
    /// The digits of the absolute value in the given radix, most significant first
    pub fn to_radix(&self, radix: u32) -> Result<Vec<u32>, ArithmeticError> {
        if radix < 2 {
            return Err(ArithmeticError::InvalidRadix(radix));
        }

        let mut value = self.unsigned_abs();
        if value.is_zero() {
            return Ok(vec![0]);
        }

        let radix = Bignum::from(radix);
        let mut digits = Vec::new();
        while !value.is_zero() {
            let DivisionResult {
                quotient,
                remainder,
            } = divide_and_mod(&value, &radix)?;
            digits.push(remainder.to_u64_wrapping() as u32);
            value = quotient;
        }

        digits.reverse();
        Ok(digits)
    }

    /// Format using the digits 0-9a-f with a leading '-' for negative numbers
    pub fn to_string_radix(&self, radix: u32) -> Result<String, ArithmeticError> {
        let digits = self.digit_string(radix)?;
        if self.is_negative() {
            Ok(format!("-{digits}"))
        } else {
            Ok(digits)
        }
    }

    /// Parse an optionally '-' prefixed string of digits in the given radix
    pub fn from_str_radix(s: &str, radix: u32) -> Result<Self, ParseBignumError> {
        if !(2..=16).contains(&radix) {
            return Err(ParseBignumError::InvalidRadix(radix));
        }

        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        if digits.is_empty() {
            return Err(ParseBignumError::Empty);
        }

        let big_radix = Bignum::from(radix);
        let mut value = Bignum::ZERO;
        for c in digits.chars() {
            let digit = c
                .to_digit(radix)
                .ok_or(ParseBignumError::InvalidDigit { digit: c, radix })?;
            value.times(&big_radix).plus(&Bignum::from(digit));
        }

        if negative {
            value.negate();
        }

        Ok(value)
    }

    fn digit_string(&self, radix: u32) -> Result<String, ArithmeticError> {
        if radix > 16 {
            return Err(ArithmeticError::InvalidRadix(radix));
        }

        Ok(self
            .to_radix(radix)?
            .into_iter()
            .map(|d| DIGITS[d as usize] as char)
            .collect())
    }

    fn fmt_radix(&self, f: &mut fmt::Formatter<'_>, radix: u32, prefix: &str) -> fmt::Result {
        let digits = self.digit_string(radix).map_err(|_| fmt::Error)?;
        f.pad_integral(self.is_non_negative(), prefix, &digits)
    }
}

impl FromStr for Bignum {
    type Err = ParseBignumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_radix(s, 10)
    }
}

impl fmt::Display for Bignum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_radix(f, 10, "")
    }
}

impl fmt::Binary for Bignum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_radix(f, 2, "0b")
    }
}

impl fmt::Octal for Bignum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_radix(f, 8, "0o")
    }
}

impl fmt::LowerHex for Bignum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_radix(f, 16, "0x")
    }
}
