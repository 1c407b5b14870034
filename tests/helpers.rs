#![allow(unused)]

use rusty_bignum::bignum::Bignum;
use rusty_bignum::rand::{Rng32, XorShift32};

/// A signed random number of at most `bits` bits
pub fn random_signed(bits: usize, rng: &mut XorShift32) -> Bignum {
    let mut n = Bignum::random_bits(bits, true, true, &mut *rng).unwrap();
    if rng.gen_bool() {
        n.negate();
    }
    n
}

/// Sample `count` signed numbers with bit lengths cycling through 1..=max_bits
pub fn samples(count: usize, max_bits: usize, seed: u32) -> Vec<Bignum> {
    let mut rng = XorShift32::from_seed(seed);
    (0..count)
        .map(|i| random_signed(i % max_bits + 1, &mut rng))
        .collect()
}
