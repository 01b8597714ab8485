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
//! Single precision math implemented with integer arithmetic on IEEE-754
//! encodings, for targets without a floating point unit or a usable libm.
//!
//! Every function is pure, allocation free and safe to call from any thread
//! or interrupt context. Results follow the IEEE-754 rules for NaN, infinity,
//! signed zero and subnormal values, so a caller cannot tell them apart from
//! a hardware FPU, with the exception of [`atan2nf`], which is a documented
//! approximation.
//!
//! The [`abs`], [`sqrt`], [`atan2_normalized`], [`scale_by_power_of_two`]
//! and [`power`] entry points keep the same signatures when the `native`
//! feature routes them to the platform math library instead.
#![cfg_attr(not(any(test, feature = "native")), no_std)]
#![allow(clippy::manual_clamp, clippy::excessive_precision)]
#![deny(unreachable_pub)]
#![forbid(unsafe_code)]
mod dispatch;
/// Kernels are `const fn` so they are usable in constant contexts.
mod math;

pub use dispatch::{abs, atan2_normalized, power, scale_by_power_of_two, sqrt};
pub use math::{atan2nf, bits_of, classify, fabsf, float_of, powf, scalbnf, sqrtf};
