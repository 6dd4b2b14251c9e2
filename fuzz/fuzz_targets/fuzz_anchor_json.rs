//! Fuzzes anchor parsing and validation with arbitrary text.
//!
//! Any input must either build a curve or return an `EasingError`. A built
//! curve keeps its anchors sorted by `pX` and returns the exact knot values
//! at both ends.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_anchor_json
#![no_main]
use libfuzzer_sys::fuzz_target;
use opc_easing::EasingFunction;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(ease) = EasingFunction::new(text) {
        let anchors = ease.curve().anchors();
        assert!(anchors.len() >= 2);
        assert!(anchors.windows(2).all(|w| w[0].p_x <= w[1].p_x));

        let start = ease.curve().start();
        let end = ease.curve().end();
        assert_eq!(ease.evaluate(0.0).to_bits(), start.y.to_bits());
        assert_eq!(ease.evaluate(1.0).to_bits(), end.y.to_bits());
        let _ = ease.evaluate(0.5);
    }
});
