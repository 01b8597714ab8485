/* origin: FreeBSD /usr/src/lib/msun/src/e_powf.c */
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
use crate::math::bits::{clear_low_bits, float_of, float_of_word, word_of};
use crate::math::fabsf::fabsf;
use crate::math::scalbnf::scalbnf;
use crate::math::sqrtf::sqrtf;

const BP: [f32; 2] = [1.0, 1.5];
const DP_H: [f32; 2] = [0.0, 5.84960938e-01]; // 0x3f15c000
const DP_L: [f32; 2] = [0.0, 1.56322085e-06]; // 0x35d1cfdc
const TWO24: f32 = 16777216.0; // 0x4b800000
const HUGE: f32 = 1.0e30;
const TINY: f32 = 1.0e-30;
// (3/2)*(log(x)-2s-2/3*s^3)
const L1: f32 = 6.0000002384e-01; // 0x3f19999a
const L2: f32 = 4.2857143283e-01; // 0x3edb6db7
const L3: f32 = 3.3333334327e-01; // 0x3eaaaaab
const L4: f32 = 2.7272811532e-01; // 0x3e8ba305
const L5: f32 = 2.3066075146e-01; // 0x3e6c3255
const L6: f32 = 2.0697501302e-01; // 0x3e53f142
// 2^r on [-ln2/2, ln2/2]
const P1: f32 = 1.6666667163e-01; // 0x3e2aaaab
const P2: f32 = -2.7777778450e-03; // 0xbb360b61
const P3: f32 = 6.6137559770e-05; // 0x388ab355
const P4: f32 = -1.6533901999e-06; // 0xb5ddea0e
const P5: f32 = 4.1381369442e-08; // 0x3331bb4c
const LG2: f32 = 6.9314718246e-01; // 0x3f317218
const LG2_H: f32 = 6.93145752e-01; // 0x3f317200
const LG2_L: f32 = 1.42860654e-06; // 0x35bfbe8c
// -(128-log2(ovfl+.5ulp))
const OVT: f32 = 4.2995665694e-08;
const CP: f32 = 9.6179670095e-01; // 0x3f76384f =2/(3ln2)
const CP_H: f32 = 9.6191406250e-01; // 0x3f764000 =12b cp
const CP_L: f32 = -1.1736857402e-04; // 0xb8f623c6 =tail of cp_h
const IVLN2: f32 = 1.4426950216e+00; // 0x3fb8aa3b =1/ln2
const IVLN2_H: f32 = 1.4426879883e+00; // 0x3fb8aa00 =16b 1/ln2
const IVLN2_L: f32 = 7.0526075433e-06; // 0x36eca570 =1/ln2 tail

/// Heads keep the upper 12 mantissa bits, so head products are exact.
const HEAD_MASK: u32 = 0xffff_f000;

/// Integer classification of the exponent, matters only for negative bases.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Parity {
    NonInteger,
    Odd,
    Even,
}

/// `iy` is the encoding of `|y|`.
#[inline]
const fn parity_of(iy: i32) -> Parity {
    // every float at or above 2^24 is an even integer
    if iy >= 0x4b80_0000 {
        return Parity::Even;
    }
    if iy >= 0x3f80_0000 {
        let k = (iy >> 23) - 0x7f;
        let j = iy >> (23 - k);
        if (j << (23 - k)) == iy {
            return if j & 1 == 1 { Parity::Odd } else { Parity::Even };
        }
    }
    Parity::NonInteger
}

/// Computes `x^y` with IEEE-754 `pow` special value handling.
///
/// `x^0` is 1 even for NaN `x`, `1^y` is 1 even for NaN `y`.
/// A negative base with a non-integer exponent is NaN, including cases where
/// a real root exists, e.g. `powf(-8., 1. / 3.)`. Overflow goes to a signed
/// infinity, underflow to a signed zero or subnormal.
#[inline]
#[allow(clippy::eq_op)]
pub const fn powf(x: f32, y: f32) -> f32 {
    let hx = word_of(x);
    let hy = word_of(y);
    let ix = hx & 0x7fff_ffff;
    let iy = hy & 0x7fff_ffff;

    if iy == 0 {
        return 1.0;
    }
    if hx == 0x3f80_0000 {
        return 1.0;
    }
    if ix > 0x7f80_0000 || iy > 0x7f80_0000 {
        return x + y;
    }

    let parity = if hx < 0 {
        parity_of(iy)
    } else {
        Parity::NonInteger
    };

    // y is +-inf
    if iy == 0x7f80_0000 {
        if ix == 0x3f80_0000 {
            // (-1)^+-inf
            return 1.0;
        } else if ix > 0x3f80_0000 {
            return if hy >= 0 { y } else { 0.0 };
        } else if ix != 0 {
            return if hy >= 0 { 0.0 } else { -y };
        }
    }
    if iy == 0x3f80_0000 {
        return if hy >= 0 { x } else { 1.0 / x };
    }
    if hy == 0x4000_0000 {
        return x * x;
    }
    if hy == 0x3f00_0000 && hx >= 0 {
        return sqrtf(x);
    }

    // x is +-0, +-inf, +-1
    if ix == 0x7f80_0000 || ix == 0 || ix == 0x3f80_0000 {
        let mut z = fabsf(x);
        if hy < 0 {
            z = 1.0 / z;
        }
        if hx < 0 {
            if ix == 0x3f80_0000 && matches!(parity, Parity::NonInteger) {
                z = (z - z) / (z - z);
            } else if matches!(parity, Parity::Odd) {
                z = -z;
            }
        }
        return z;
    }

    let sn = if hx < 0 {
        match parity {
            Parity::NonInteger => return (x - x) / (x - x),
            Parity::Odd => -1.0,
            Parity::Even => 1.0,
        }
    } else {
        1.0
    };

    sn * pow_finite(fabsf(x), y)
}

/// `|x|^y` for finite, non-zero `ax` other than 1 and finite `y`
/// outside of the fast paths.
#[inline]
const fn pow_finite(ax: f32, y: f32) -> f32 {
    let ix = word_of(ax);
    let hy = word_of(y);
    let iy = hy & 0x7fff_ffff;

    let (t1, t2) = if iy > 0x4d00_0000 {
        // |y| > 2^27: over/underflow unless x is within 2^-20 of 1
        if ix < 0x3f7f_fff8 {
            return if hy < 0 { HUGE * HUGE } else { TINY * TINY };
        }
        if ix > 0x3f80_0007 {
            return if hy > 0 { HUGE * HUGE } else { TINY * TINY };
        }
        log2_near_one(ax)
    } else {
        log2_head_tail(ax)
    };

    // (y1 + y2) * (t1 + t2) with y1 being the head of y
    let y1 = clear_low_bits(y, HEAD_MASK);
    let p_l = (y - y1) * t1 + y * t2;
    let p_h = y1 * t1;
    let z = p_l + p_h;
    let j = word_of(z);
    if j > 0x4300_0000 {
        // z > 128
        return HUGE * HUGE;
    } else if j == 0x4300_0000 {
        if p_l + OVT > z - p_h {
            return HUGE * HUGE;
        }
    } else if (j & 0x7fff_ffff) > 0x4316_0000 {
        // z < -150
        return TINY * TINY;
    } else if (j as u32) == 0xc316_0000 && p_l <= z - p_h {
        return TINY * TINY;
    }

    exp2_head_tail(p_h, p_l, j)
}

/// Head and tail of `log2(ax)` for `ax` within 2^-20 of 1, from the
/// Taylor series of `log(ax)` around 1.
#[inline]
const fn log2_near_one(ax: f32) -> (f32, f32) {
    // t has 20 trailing zeros
    let t = ax - 1.0;
    let w = (t * t) * (0.5 - t * (0.333333333333 - t * 0.25));
    let u = IVLN2_H * t;
    let v = t * IVLN2_L - w * IVLN2;
    let t1 = clear_low_bits(u + v, HEAD_MASK);
    let t2 = v - (t1 - u);
    (t1, t2)
}

/// Head and tail of `log2(ax)` for positive finite `ax`.
///
/// `ax` is reduced to `[sqrt(3)/2, sqrt(3))` and expanded either around 1
/// or around 1.5, whichever is closer.
#[inline]
const fn log2_head_tail(ax: f32) -> (f32, f32) {
    let mut ax = ax;
    let mut ix = word_of(ax);
    let mut n = 0i32;
    if ix < 0x0080_0000 {
        ax *= TWO24;
        n -= 24;
        ix = word_of(ax);
    }
    n += (ix >> 23) - 0x7f;
    let j = ix & 0x007f_ffff;
    ix = j | 0x3f80_0000;
    let k = if j <= 0x1c_c471 {
        // |x| < sqrt(3/2)
        0
    } else if j < 0x5d_b3d7 {
        // |x| < sqrt(3)
        1
    } else {
        n += 1;
        ix -= 0x0080_0000;
        0
    };
    ax = float_of_word(ix);

    // s = s_h + s_l = (x - 1) / (x + 1) or (x - 1.5) / (x + 1.5)
    let u = ax - BP[k];
    let v = 1.0 / (ax + BP[k]);
    let s = u * v;
    let s_h = clear_low_bits(s, HEAD_MASK);
    // t_h = ax + bp[k], head only
    let is = (((ix as u32) >> 1) & HEAD_MASK) | 0x2000_0000;
    let t_h = float_of(is + 0x0040_0000 + ((k as u32) << 21));
    let t_l = ax - (t_h - BP[k]);
    let s_l = v * ((u - s_h * t_h) - s_h * t_l);

    let mut s2 = s * s;
    let mut r = s2 * s2 * (L1 + s2 * (L2 + s2 * (L3 + s2 * (L4 + s2 * (L5 + s2 * L6)))));
    r += s_l * (s_h + s);
    s2 = s_h * s_h;
    let t_h = clear_low_bits(3.0 + s2 + r, HEAD_MASK);
    let t_l = r - ((t_h - 3.0) - s2);

    // u + v = s * (1 + ...)
    let u = s_h * t_h;
    let v = s_l * t_h + t_l * s;
    // 2 / (3 * log2) * (s + ...)
    let p_h = clear_low_bits(u + v, HEAD_MASK);
    let p_l = v - (p_h - u);
    let z_h = CP_H * p_h;
    let z_l = CP_L * p_h + p_l * CP + DP_L[k];

    // log2(ax) = n + dp_h + z_h + z_l
    let t = n as f32;
    let t1 = clear_low_bits(((z_h + z_l) + DP_H[k]) + t, HEAD_MASK);
    let t2 = z_l - (((t1 - t) - DP_H[k]) - z_h);
    (t1, t2)
}

/// `2^(p_h + p_l)` where `j` is the encoding of `p_h + p_l`, already known
/// to lie within `[-150, 128]`.
#[inline]
const fn exp2_head_tail(p_h: f32, p_l: f32, j: i32) -> f32 {
    let mut p_h = p_h;
    let i = j & 0x7fff_ffff;
    let mut k = (i >> 23) - 0x7f;
    let mut n = 0i32;
    if i > 0x3f00_0000 {
        // |z| > 0.5, n = [z + 0.5]
        n = j + (0x0080_0000 >> (k + 1));
        k = ((n & 0x7fff_ffff) >> 23) - 0x7f;
        let t = float_of_word(n & !(0x007f_ffff >> k));
        n = ((n & 0x007f_ffff) | 0x0080_0000) >> (23 - k);
        if j < 0 {
            n = -n;
        }
        p_h -= t;
    }

    let t = clear_low_bits(p_l + p_h, 0xffff_8000);
    let u = t * LG2_H;
    let v = (p_l - (t - p_h)) * LG2 + t * LG2_L;
    let z = u + v;
    let w = v - (z - u);
    let t = z * z;
    let t1 = z - t * (P1 + t * (P2 + t * (P3 + t * (P4 + t * P5))));
    let r = (z * t1) / (t1 - 2.0) - (w + z * w);
    let z = 1.0 - (r - z);

    let j = word_of(z) + (n << 23);
    if (j >> 23) <= 0 {
        // result is subnormal
        scalbnf(z, n)
    } else {
        float_of_word(j)
    }
}
