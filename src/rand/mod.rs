//! Sources of randomness for generating Bignums
pub mod xorshift32;
pub use xorshift32::XorShift32;

pub trait Rng32 {
    /// Generate a 32 bit random value
    fn gen(&mut self) -> u32;

    /// Generate a random boolean value
    fn gen_bool(&mut self) -> bool {
        (self.gen() as i32) < 0
    }
}

impl<T: Rng32 + ?Sized> Rng32 for &mut T {
    fn gen(&mut self) -> u32 {
        (*self).gen()
    }
}
