#![no_main]

use libfuzzer_sys::fuzz_target;
use softmath::{atan2nf, bits_of, fabsf, float_of, powf, scalbnf, sqrtf};

fuzz_target!(|data: (u32, u32, i32)| {
    let (bx, by, n) = data;
    let x = float_of(bx);
    let y = float_of(by);

    assert_eq!(bits_of(fabsf(x)), bx & 0x7fff_ffff);

    let root = sqrtf(x);
    if x.is_nan() || (x < 0. && x != 0.) {
        assert!(root.is_nan());
    } else {
        assert_eq!(bits_of(root), bits_of(x.sqrt()));
    }

    assert_eq!(powf(x, 0.), 1.);
    assert_eq!(powf(1., y), 1.);
    _ = powf(x, y);

    let a = atan2nf(y, x);
    assert!(a.is_nan() || (0. ..4.).contains(&a));

    _ = scalbnf(x, n);
    if !x.is_nan() {
        assert_eq!(bits_of(scalbnf(x, 0)), bx);
    }
});
