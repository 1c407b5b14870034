mod helpers;

use std::cmp::Ordering;

use anyhow::Result;
use helpers::samples;
use rusty_bignum::bignum::{divide_and_mod, Bignum};

#[test]
fn product_of_small_and_big() -> Result<()> {
    let small = Bignum::from(1023);
    let big: Bignum = "47823478352374829374".parse()?;

    assert_eq!(small.to_string_radix(2)?, "1111111111");
    assert_eq!((&small * &big).to_string(), "48923418354479450449602");
    assert_eq!((&big * &small).to_string(), "48923418354479450449602");

    Ok(())
}

#[test]
fn cascading_updates() -> Result<()> {
    let mut a = Bignum::from(2);
    let b = Bignum::from(3);
    let c = Bignum::from(5);

    a.plus(&b).plus(&c);
    assert_eq!(a, Bignum::from(10));

    a = Bignum::from(2);
    a.pow(&b)?.pow(&c)?;
    assert_eq!(a.to_string(), "32768");

    a = Bignum::from(2);
    a.shift_left(4).shift_right(2);
    assert_eq!(a, Bignum::from(8));

    a = Bignum::from(2);
    a *= &b + &c;
    a += &b;
    assert_eq!(a, Bignum::from(19));

    Ok(())
}

#[test]
fn radix_round_trip() -> Result<()> {
    for n in samples(200, 160, 0x5eed) {
        let s = n.to_string();
        assert_eq!(s.parse::<Bignum>()?, n);

        for radix in 2..=16 {
            assert_eq!(Bignum::from_str_radix(&n.to_string_radix(radix)?, radix)?, n);
        }
    }

    Ok(())
}

#[test]
fn negation_is_an_involution() {
    for n in samples(200, 130, 1) {
        let mut m = n.clone();
        m.negate().negate();
        assert_eq!(m, n);
        assert_eq!(&n + -&n, Bignum::ZERO);
        assert_eq!(&n - &n, Bignum::ZERO);
    }
}

#[test]
fn ring_laws() {
    let xs = samples(60, 100, 2);
    for w in xs.windows(3) {
        let (a, b, c) = (&w[0], &w[1], &w[2]);
        assert_eq!(a + Bignum::ZERO, *a);
        assert_eq!(a * Bignum::one(), *a);
        assert_eq!(a * Bignum::ZERO, Bignum::ZERO);
        assert_eq!(a + b, b + a);
        assert_eq!(a * b, b * a);
        assert_eq!((a + b) + c, a + (b + c));
        assert_eq!((a * b) * c, a * (b * c));
        assert_eq!(a * (b + c), a * b + a * c);
    }
}

#[test]
fn division_identity() {
    let xs = samples(120, 140, 3);
    for w in xs.windows(2) {
        let (a, b) = (&w[0], &w[1]);
        if b.is_zero() {
            continue;
        }

        let res = a.div_rem(b).unwrap();
        assert_eq!(&res.quotient * b + &res.remainder, *a);
        assert!(res.remainder.is_zero() || res.remainder.is_negative() == b.is_negative());
        assert!(res.remainder.unsigned_abs() < b.unsigned_abs());

        if a.is_non_negative() && b.is_non_negative() {
            assert_eq!(divide_and_mod(a, b).unwrap(), res);
        }
    }
}

#[test]
fn shifts_are_powers_of_two() {
    for (i, n) in samples(100, 90, 4).into_iter().enumerate() {
        let k = i % 70;
        assert_eq!(&n << k, &n * Bignum::power2(k));
        assert_eq!(&n >> k, (&n / Bignum::power2(k)));
    }
}

#[test]
fn pow_mod_agrees_with_pow() -> Result<()> {
    let xs = samples(40, 40, 5);
    for w in xs.windows(2) {
        let base = &w[0];
        let exponent = Bignum::from(w[1].to_u64_wrapping() % 40);
        let modulus = w[1].unsigned_abs() + Bignum::one();

        let mut expected = base.clone();
        expected.pow(&exponent)?.remainder(&modulus)?;

        let mut actual = base.clone();
        actual.pow_mod(&exponent, &modulus)?;

        assert_eq!(actual, expected);
    }

    Ok(())
}

#[test]
fn ordering_is_total() {
    let mut xs = samples(100, 80, 6);
    xs.sort();
    for w in xs.windows(2) {
        assert!(w[0] <= w[1]);
        assert!((&w[1] - &w[0]).is_non_negative());
    }
}

#[test]
fn ordering_is_antisymmetric() {
    // narrow values so plenty of pairs compare equal
    let mut xs = samples(40, 4, 10);
    xs.extend(samples(40, 70, 11));

    for a in &xs {
        for b in &xs {
            assert_eq!(a.compare(b), b.compare(a).reverse(), "{a} vs {b}");
            assert_eq!(
                a.compare(b) == Ordering::Equal,
                a.to_string() == b.to_string(),
                "{a} vs {b}"
            );
        }
    }
}

#[test]
fn native_conversions() {
    for v in [0i64, 1, -1, 42, -42, i64::MIN, i64::MAX, 1 << 40] {
        let n = Bignum::from(v);
        assert_eq!(n.to_i64_wrapping(), v);
        assert_eq!(n.to_string(), v.to_string());
    }

    let wide = Bignum::from(u64::MAX) + Bignum::one();
    assert_eq!(wide.to_u64_wrapping(), 0);
    assert_eq!(wide, Bignum::power2(64));
}
