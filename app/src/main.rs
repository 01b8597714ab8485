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
use rand::Rng;
use softmath::{atan2nf, bits_of, powf, scalbnf, sqrtf};

fn ulp_away(a: f32, b: f32) -> i64 {
    (bits_of(a) as i32 as i64 - bits_of(b) as i32 as i64).abs()
}

struct Report {
    name: &'static str,
    max_away: i64,
    worst: (f32, f32),
}

impl Report {
    fn new(name: &'static str) -> Self {
        Report {
            name,
            max_away: 0,
            worst: (0., 0.),
        }
    }

    fn record(&mut self, a: f32, b: f32, reference: f32, value: f32) {
        if reference.is_nan() && value.is_nan() {
            return;
        }
        let away = ulp_away(reference, value);
        if away > self.max_away {
            self.max_away = away;
            self.worst = (a, b);
        }
    }

    fn print(&self) {
        println!(
            "{:>8}: max away {} ULP at ({}, {})",
            self.name, self.max_away, self.worst.0, self.worst.1
        );
    }
}

fn main() {
    let mut rng = rand::rng();

    let mut sqrt_report = Report::new("sqrtf");
    for _ in 0..1_000_000 {
        let x = f32::from_bits(rng.random_range(0..0x7f80_0000u32));
        sqrt_report.record(x, 0., libm::sqrtf(x), sqrtf(x));
    }
    sqrt_report.print();

    let mut pow_report = Report::new("powf");
    for _ in 0..1_000_000 {
        let x = rng.random_range(0f32..100.);
        let y = rng.random_range(-20f32..20.);
        pow_report.record(x, y, libm::powf(x, y), powf(x, y));
    }
    pow_report.print();

    let mut scalbn_report = Report::new("scalbnf");
    for _ in 0..1_000_000 {
        let x = f32::from_bits(rng.random::<u32>());
        let n = rng.random_range(-300..300);
        scalbn_report.record(x, n as f32, libm::scalbnf(x, n), scalbnf(x, n));
    }
    scalbn_report.print();

    let mut max_error = 0f64;
    let mut worst_angle = 0.;
    for i in 0..3_600_000 {
        let angle = (i as f64 / 10_000.).to_radians();
        let x = angle.cos() as f32;
        let y = angle.sin() as f32;
        let reference = (y as f64).atan2(x as f64) / std::f64::consts::FRAC_PI_2;
        let reference = if reference < 0. { reference + 4. } else { reference };
        let d = (atan2nf(y, x) as f64 - reference).abs();
        let d = d.min(4. - d) * 90.;
        if d > max_error {
            max_error = d;
            worst_angle = angle.to_degrees();
        }
    }
    println!(
        "{:>8}: max error {} degrees at {} degrees",
        "atan2nf", max_error, worst_angle
    );
}
