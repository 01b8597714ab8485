/*
 * // Copyright (c) Radzivon Bartoshyk 10/2026. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
//! Entry points with the same signatures whether the software kernels or the
//! platform math library back them. The `native` feature picks the latter.
#[cfg(not(feature = "native"))]
use crate::math::{fabsf, powf, sqrtf};
use crate::math::{atan2nf, scalbnf};

/// Absolute value.
#[inline]
pub fn abs(x: f32) -> f32 {
    #[cfg(feature = "native")]
    {
        x.abs()
    }
    #[cfg(not(feature = "native"))]
    {
        fabsf(x)
    }
}

/// Square root, NaN for negative input.
#[inline]
pub fn sqrt(x: f32) -> f32 {
    #[cfg(feature = "native")]
    {
        x.sqrt()
    }
    #[cfg(not(feature = "native"))]
    {
        sqrtf(x)
    }
}

/// Angle of `(x, y)` in quarter turns, in `[0, 4)`.
///
/// The software path is an approximation with 0.1620 degrees maximum error,
/// see [`atan2nf`].
#[inline]
pub fn atan2_normalized(y: f32, x: f32) -> f32 {
    #[cfg(feature = "native")]
    {
        if y.is_nan() || x.is_nan() || (x == 0. && y == 0.) {
            return atan2nf(y, x);
        }
        let mut r = y.atan2(x) * core::f32::consts::FRAC_2_PI;
        if r.is_sign_negative() {
            r += 4.;
        }
        if r >= 4. { 0. } else { r }
    }
    #[cfg(not(feature = "native"))]
    {
        atan2nf(y, x)
    }
}

/// `x * 2^n`.
#[inline]
pub fn scale_by_power_of_two(x: f32, n: i32) -> f32 {
    scalbnf(x, n)
}

/// `x^y` with IEEE-754 special values.
#[inline]
pub fn power(x: f32, y: f32) -> f32 {
    #[cfg(feature = "native")]
    {
        x.powf(y)
    }
    #[cfg(not(feature = "native"))]
    {
        powf(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::bits_of;

    #[test]
    fn test_axis_angles() {
        assert_eq!(atan2_normalized(0., 1.), 0.);
        assert!((atan2_normalized(1., 0.) - 1.).abs() < 1e-6);
        assert!((atan2_normalized(0., -1.) - 2.).abs() < 1e-6);
        assert!((atan2_normalized(-1., 0.) - 3.).abs() < 1e-6);
        assert!(atan2_normalized(0., 0.).is_nan());
    }

    #[test]
    fn test_full_turn_wraps_to_zero() {
        assert_eq!(bits_of(atan2_normalized(-0., 1.)), 0);
        assert_eq!(bits_of(atan2_normalized(-1.0e-8, 1.)), 0);
        let a = atan2_normalized(-0.001, 1.);
        assert!((3.99..4.).contains(&a), "Invalid result {a}");
    }

    #[test]
    fn test_shared_contract() {
        assert_eq!(abs(-3.5), 3.5);
        assert_eq!(sqrt(4.), 2.);
        assert!(sqrt(-4.).is_nan());
        assert_eq!(scale_by_power_of_two(1., 10), 1024.);
        assert_eq!(power(4., 0.5), 2.);
        assert_eq!(power(f32::NAN, 0.), 1.);
        assert_eq!(power(1., f32::NAN), 1.);
        assert_eq!(power(0., -1.), f32::INFINITY);
        assert!(power(-8., 1. / 3.).is_nan());
        assert!((power(2., 10.) - 1024.).abs() / 1024. < 1e-6);
    }

    #[cfg(not(feature = "native"))]
    #[test]
    fn test_software_routing() {
        for x in [0.1f32, 0.75, 3., 17.25, 1.0e-40, 6.0e30] {
            assert_eq!(bits_of(abs(-x)), bits_of(fabsf(-x)));
            assert_eq!(bits_of(sqrt(x)), bits_of(sqrtf(x)));
            assert_eq!(bits_of(power(x, 1.7)), bits_of(powf(x, 1.7)));
            assert_eq!(bits_of(atan2_normalized(x, -2.)), bits_of(atan2nf(x, -2.)));
        }
    }

    #[cfg(feature = "native")]
    #[test]
    fn test_native_routing() {
        for x in [0.1f32, 0.75, 3., 17.25, 250.] {
            assert_eq!(bits_of(abs(-x)), bits_of(x));
            assert_eq!(bits_of(sqrt(x)), bits_of(x.sqrt()));
            let approx = atan2nf(x, -2.);
            assert!((atan2_normalized(x, -2.) - approx).abs() < 0.002);
        }
    }
}
