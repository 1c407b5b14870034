use rusty_bignum::bignum::{ArithmeticError, Bignum};
use rusty_bignum::rand::Rng32;

/// Random numbers of steadily increasing bit length, every one with its top bit set
#[derive(Debug, Clone)]
pub struct TestData {
    numbers: Vec<Bignum>,
    min_bits: usize,
    step_bits: usize,
}

impl TestData {
    pub fn generate(
        count: usize,
        min_bits: usize,
        step_bits: usize,
        mut rng: impl Rng32,
    ) -> Result<Self, ArithmeticError> {
        let numbers = (0..count)
            .map(|i| Bignum::random_bits(min_bits + i * step_bits, false, false, &mut rng))
            .collect::<Result<_, _>>()?;

        Ok(Self {
            numbers,
            min_bits,
            step_bits,
        })
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn get(&self, i: usize) -> &Bignum {
        &self.numbers[i]
    }

    /// The bit length of the number at index i
    pub fn bits(&self, i: usize) -> usize {
        self.min_bits + i * self.step_bits
    }
}
