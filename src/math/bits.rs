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
use core::num::FpCategory;

const SIGN_MASK: u32 = 0x8000_0000;
const EXPONENT_MASK: u32 = 0x7f80_0000;
const MANTISSA_MASK: u32 = 0x007f_ffff;

/// Returns the IEEE-754 encoding of `x` without any numeric conversion.
#[inline]
pub const fn bits_of(x: f32) -> u32 {
    x.to_bits()
}

/// Returns the float whose IEEE-754 encoding is `bits`.
///
/// `float_of(bits_of(x))` reproduces `x` bit for bit, NaN payloads included.
#[inline]
pub const fn float_of(bits: u32) -> f32 {
    f32::from_bits(bits)
}

/// Signed view of the encoding, negative exactly when the sign bit is set.
#[inline(always)]
pub(crate) const fn word_of(x: f32) -> i32 {
    bits_of(x) as i32
}

#[inline(always)]
pub(crate) const fn float_of_word(word: i32) -> f32 {
    float_of(word as u32)
}

/// Keeps only the bits selected by `mask`, used to cut a head off a value
/// so that products of heads are exact.
#[inline(always)]
pub(crate) const fn clear_low_bits(x: f32, mask: u32) -> f32 {
    float_of(bits_of(x) & mask)
}

/// Classifies `x` from its encoding alone.
#[inline]
pub const fn classify(x: f32) -> FpCategory {
    let bits = bits_of(x);
    let exponent = bits & EXPONENT_MASK;
    let mantissa = bits & MANTISSA_MASK;
    if exponent == EXPONENT_MASK {
        if mantissa == 0 {
            FpCategory::Infinite
        } else {
            FpCategory::Nan
        }
    } else if exponent == 0 {
        if mantissa == 0 {
            FpCategory::Zero
        } else {
            FpCategory::Subnormal
        }
    } else {
        FpCategory::Normal
    }
}

/// Tells whether the sign bit of `x` is set, NaN and zero included.
#[inline(always)]
pub(crate) const fn sign_bit(x: f32) -> u32 {
    bits_of(x) & SIGN_MASK
}
