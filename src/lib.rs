pub mod bignum;
pub mod numtheory;
pub mod rand;
