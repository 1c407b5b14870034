use std::io::Write;

use anyhow::Result;
use rusty_bignum::bignum::{ArithmeticError, Bignum};
use rusty_bignum::rand::Rng32;

fn show(out: &mut impl Write, name: &str, n: &Bignum) -> Result<()> {
    writeln!(out, "{name:<8} = {n} (decimal) = {n:b} (binary)")?;
    Ok(())
}

fn samples(
    out: &mut impl Write,
    name: &str,
    mut sample: impl FnMut() -> Result<Bignum, ArithmeticError>,
) -> Result<()> {
    write!(out, "random {name:<16}: ")?;
    for _ in 0..64 {
        write!(out, "{}", sample()?)?;
    }
    writeln!(out)?;
    Ok(())
}

/// Walk through the arithmetic API, printing every intermediate result
pub fn run(out: &mut impl Write, mut rng: impl Rng32) -> Result<()> {
    // construction from native integers and strings
    let mut small = Bignum::from(1023);
    let mut big: Bignum = "47823478352374829374".parse()?;
    show(out, "small", &small)?;
    show(out, "big", &big)?;
    writeln!(out, "small * big = {}", &small * &big)?;

    small = Bignum::from_str_radix("101010", 2)?;
    show(out, "small", &small)?;
    small = Bignum::from(7);
    big = &small + Bignum::from(6);
    show(out, "small", &small)?;
    show(out, "big", &big)?;

    // operators
    writeln!(out, "big + small = {}", &big + &small)?;
    writeln!(out, "big - small = {}", &big - &small)?;
    writeln!(out, "big * small = {}", &big * &small)?;
    writeln!(out, "big / small = {}", &big / &small)?;
    writeln!(out, "big % small = {}", &big % &small)?;
    writeln!(out, "small + big * big   = {}", &small + &big * &big)?;
    writeln!(out, "(small + big) * big = {}", (&small + &big) * &big)?;
    writeln!(out, "small * big % small = {}", &small * &big % &small)?;
    writeln!(out, "small * (big % small) = {}", &small * (&big % &small))?;

    // negative numbers
    writeln!(out, "-big         = {}", -&big)?;
    writeln!(out, "big.negate() = {}", big.negate())?;
    writeln!(out, "big.abs()    = {}", big.abs())?;
    writeln!(out, "big / -3     = {}", &big / Bignum::from(-3))?;
    writeln!(out, "-big % 3     = {}", -&big % Bignum::from(3))?;

    // compound assignment
    let mut num = Bignum::from(10);
    num += Bignum::one();
    writeln!(out, "num += 1 => {num}")?;
    num += Bignum::from(2);
    writeln!(out, "num += 2 => {num}")?;
    num %= Bignum::from(3);
    writeln!(out, "num %= 3 => {num}")?;

    // exponentiation
    let exponent = Bignum::from(125);
    let modulus = Bignum::from(127);
    let mut base = Bignum::from(2);
    writeln!(out, "2^125 = {}", base.pow(&exponent)?)?;
    let mut base = Bignum::from(2);
    writeln!(out, "2^125 mod 127 = {}", base.pow_mod(&exponent, &modulus)?)?;

    // shifts
    let mut n = Bignum::power2(4);
    writeln!(out, "n                => {n}")?;
    writeln!(out, "n.shift_left(3)  => {}", n.shift_left(3))?;
    writeln!(out, "n.shift_right(2) => {}", n.shift_right(2))?;
    writeln!(out, "n << 5           => {}", &n << 5)?;
    writeln!(out, "n >> 7           => {}", &n >> 7)?;

    // chaining on a = 2, b = 3, c = 5
    let fresh = || (Bignum::from(2), Bignum::from(3), Bignum::from(5));
    let chains: [(&str, fn(&mut Bignum, &mut Bignum, &mut Bignum) -> Result<()>); 9] = [
        ("a.swap(b).swap(c)", |a, b, c| {
            a.swap(b).swap(c);
            Ok(())
        }),
        ("a.plus(b).plus(c)", |a, b, c| {
            a.plus(b).plus(c);
            Ok(())
        }),
        ("a.negate()", |a, _, _| {
            a.negate();
            Ok(())
        }),
        ("a.negate().negate()", |a, _, _| {
            a.negate().negate();
            Ok(())
        }),
        ("a.pow(b).pow(c)", |a, b, c| {
            a.pow(b)?.pow(c)?;
            Ok(())
        }),
        ("a.pow(b.pow(c))", |a, b, c| {
            a.pow(b.pow(c)?)?;
            Ok(())
        }),
        ("a.shift_left(4).shift_right(2)", |a, _, _| {
            a.shift_left(4).shift_right(2);
            Ok(())
        }),
        ("a *= b + c; a += b", |a, b, c| {
            *a *= &*b + &*c;
            *a += &*b;
            Ok(())
        }),
        ("a = b.clone(); a.minus(c)", |a, b, c| {
            *a = b.clone();
            a.minus(c);
            Ok(())
        }),
    ];

    for (name, chain) in chains {
        let (mut a, mut b, mut c) = fresh();
        chain(&mut a, &mut b, &mut c)?;
        writeln!(out, "{name:<32} => a = {a}, b = {b}, c = {c}")?;
    }

    // comparisons and swapping
    let mut small = Bignum::from(16);
    let mut big = Bignum::from(32);
    writeln!(out, "{small} < {big} is {}", small < big)?;
    writeln!(out, "{small} > {big} is {}", small > big)?;
    writeln!(out, "{big} - {small} >= 0 is {}", &big - &small >= Bignum::ZERO)?;
    small.swap(&mut big);
    writeln!(out, "swapped: a = {small}, b = {big}")?;

    // random numbers
    let (two, three, five) = (Bignum::from(2), Bignum::from(3), Bignum::from(5));
    samples(out, "from 0 to 2", || Bignum::random(&two, true, &mut rng))?;
    samples(out, "from 1 to 2", || Bignum::random(&two, false, &mut rng))?;
    samples(out, "from 3 to 5", || Bignum::random_range(&three, &five, &mut rng))?;
    samples(out, "(at most) 3-bit", || Bignum::random_bits(3, true, true, &mut rng))?;
    samples(out, "(exactly) 3-bit", || Bignum::random_bits(3, true, false, &mut rng))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusty_bignum::rand::XorShift32;

    #[test]
    fn test_demo_output() {
        let mut out = Vec::new();
        run(&mut out, XorShift32::from_seed(42)).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.contains("small * big = 48923418354479450449602"));
        assert!(out.contains("2^125 mod 127 = 64"));
        assert!(out.contains("small    = 42 (decimal) = 101010 (binary)"));
        assert!(out.contains("a = 19, b = 3, c = 5"));
    }
}
