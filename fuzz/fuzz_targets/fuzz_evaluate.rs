//! Fuzzes evaluation of a multi-segment curve with arbitrary inputs.
//!
//! The first bytes pick handle positions, the rest are read as `f64` inputs.
//! Output must stay finite for every input, NaN and infinities included.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_evaluate
#![no_main]
use libfuzzer_sys::fuzz_target;
use opc_easing::{Anchor, EasingFunction};

fn unit(byte: u8) -> f64 {
    f64::from(byte) / 127.5 - 0.5
}

fuzz_target!(|data: &[u8]| {
    let Some((handles, rest)) = data.split_first_chunk::<6>() else {
        return;
    };
    let [a, b, c, d, e, f] = handles.map(unit);

    let Ok(ease) = EasingFunction::new(vec![
        Anchor::new(0.0, 0.0, a, b),
        Anchor::new(0.5, 0.5, c, d),
        Anchor::new(1.0, 1.0, e, f),
    ]) else {
        return;
    };

    for chunk in rest.chunks_exact(8) {
        let Ok(bytes) = <[u8; 8]>::try_from(chunk) else {
            continue;
        };
        let y = ease.evaluate(f64::from_le_bytes(bytes));
        assert!(y.is_finite());
    }
});
