/* origin: FreeBSD /usr/src/lib/msun/src/e_sqrtf.c */
/*
 * Conversion to float by Ian Lance Taylor, Cygnus Support, ian@cygnus.com.
 */
/*
 * ====================================================
 * Copyright (C) 1993 by Sun Microsystems, Inc. All rights reserved.
 *
 * Developed at SunPro, a Sun Microsystems, Inc. business.
 * Permission to use, copy, modify, and distribute this
 * software is freely granted, provided that this notice
 * is preserved.
 * ====================================================
 */
use crate::math::bits::{float_of_word, word_of};

/// Computes square root rounded to nearest.
///
/// The root is extracted one mantissa bit at a time with integer arithmetic,
/// so the result does not depend on a hardware square root instruction.
/// `sqrtf(-0.0)` is `-0.0`, negative inputs give NaN.
#[inline]
#[allow(clippy::eq_op)]
pub const fn sqrtf(x: f32) -> f32 {
    const TINY: f32 = 1.0e-30;
    const SIGN: i32 = i32::MIN;

    let mut ix = word_of(x);

    // NaN stays NaN, +inf stays +inf, -inf becomes NaN
    if (ix & 0x7f80_0000) == 0x7f80_0000 {
        return x * x + x;
    }

    if ix <= 0 {
        if (ix & !SIGN) == 0 {
            return x;
        }
        return (x - x) / (x - x);
    }

    let mut m = ix >> 23;
    if m == 0 {
        // subnormal, shift until the hidden bit shows up
        let mut i = 0;
        while (ix & 0x0080_0000) == 0 {
            ix <<= 1;
            i += 1;
        }
        m -= i - 1;
    }
    m -= 127;
    ix = (ix & 0x007f_ffff) | 0x0080_0000;
    if m & 1 != 0 {
        ix += ix;
    }
    m >>= 1;

    ix += ix;
    let mut q = 0i32;
    let mut s = 0i32;
    let mut r = 0x0100_0000i32;
    while r != 0 {
        let t = s + r;
        if t <= ix {
            s = t + r;
            ix -= t;
            q += r;
        }
        ix += ix;
        r >>= 1;
    }

    // Rounding direction is probed through the current float rounding mode.
    if ix != 0 {
        let z = 1.0f32 - TINY;
        if z >= 1.0 {
            let z = 1.0f32 + TINY;
            if z > 1.0 {
                q += 2;
            } else {
                q += q & 1;
            }
        }
    }

    ix = (q >> 1) + 0x3f00_0000;
    ix += m << 23;
    float_of_word(ix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::bits::{bits_of, float_of};
    use rand::Rng;

    #[test]
    fn sqrtf_test() {
        assert_eq!(sqrtf(4.), 2.);
        assert_eq!(sqrtf(9.), 3.);
        assert_eq!(sqrtf(16.), 4.);
        assert_eq!(sqrtf(0.25), 0.5);
        assert_eq!(sqrtf(2.), std::f32::consts::SQRT_2);
        assert!(
            (sqrtf(10f32) - 10f32.sqrt()).abs() < 1e-6,
            "Invalid result {}",
            sqrtf(10f32)
        );
    }

    #[test]
    fn sqrtf_special_values() {
        assert_eq!(bits_of(sqrtf(0.0)), 0);
        assert_eq!(bits_of(sqrtf(-0.0)), 0x8000_0000);
        assert_eq!(sqrtf(f32::INFINITY), f32::INFINITY);
        assert!(sqrtf(f32::NEG_INFINITY).is_nan());
        assert!(sqrtf(f32::NAN).is_nan());
        assert!(sqrtf(-1.0).is_nan());
        assert!(sqrtf(-f32::MIN_POSITIVE).is_nan());
        assert!(sqrtf(-float_of(1)).is_nan());
        assert!(sqrtf(f32::MIN).is_nan());
    }

    #[test]
    fn sqrtf_subnormals() {
        // 2^-149 is the smallest subnormal, its root is 2^-74.5
        assert_eq!(sqrtf(float_of(1)), (float_of(1) as f64).sqrt() as f32);
        for bits in [1u32, 2, 3, 0x10, 0x1234, 0x0040_0000, 0x007f_ffff] {
            let x = float_of(bits);
            assert_eq!(bits_of(sqrtf(x)), bits_of(x.sqrt()), "sqrtf({bits:#010x})");
        }
    }

    #[test]
    fn sqrtf_matches_correctly_rounded_root() {
        let mut rng = rand::rng();
        let mut max_away = 0i64;
        for _ in 0..200_000 {
            let bits = rng.random_range(0..0x7f80_0000u32);
            let x = float_of(bits);
            let my_sqrt = sqrtf(x);
            let system = x.sqrt();
            max_away = (bits_of(my_sqrt) as i64 - bits_of(system) as i64)
                .abs()
                .max(max_away);
        }
        println!("sqrtf max away {}", max_away);
        assert_eq!(max_away, 0);
    }

    #[test]
    fn sqrtf_of_square_returns_input() {
        let mut rng = rand::rng();
        for _ in 0..100_000 {
            let x = rng.random_range(0f32..1.0e18);
            let root = sqrtf(x * x);
            let away = (bits_of(root) as i64 - bits_of(x) as i64).abs();
            assert!(away <= 1, "sqrtf({x}^2) = {root}");
        }
    }
}
