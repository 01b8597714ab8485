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
use crate::math::bits::{bits_of, float_of, sign_bit};
use crate::math::fabsf::fabsf;

/// Approximates `atan2(y, x)` measured in quarter turns, in range `[0, 4)`.
///
/// One unit is 90 degrees, so `(0, 1)` maps to 0, `(1, 0)` to 1,
/// `(0, -1)` to 2 and `(-1, 0)` to 3. Maximum error is 0.1620 degrees.
///
/// This is a rational approximation and is not a replacement for a real
/// `atan2`; precision is fixed by the formula. Angles that round up to a
/// full turn, `(-0.0, x > 0)` among them, wrap to `0.0`.
/// `(0, 0)` and any NaN argument yield NaN.
#[inline]
pub const fn atan2nf(y: f32, x: f32) -> f32 {
    const B: f32 = 0.596227;

    let ux_s = sign_bit(x);
    let uy_s = sign_bit(y);

    // 0 for x >= 0 && y >= 0, 2 for x < 0, 4 for x >= 0 && y < 0
    let q = ((!ux_s & uy_s) >> 29 | ux_s >> 30) as f32;

    let bxy_a = fabsf(B * x * y);
    let num = bxy_a + y * y;
    let atan_1q = num / (x * x + bxy_a + num);

    // Quadrants 2 and 4 walk backwards from the offset.
    let uatan_2q = (ux_s ^ uy_s) | bits_of(atan_1q);
    let a = q + float_of(uatan_2q);
    // 4 - atan_1q rounds to 4 for tiny negative y
    if a >= 4. { 0. } else { a }
}
