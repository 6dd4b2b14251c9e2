//! Fuzzes `EaseConfig` deserialization and the string evaluation entry point.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_ease_config
#![no_main]
use libfuzzer_sys::fuzz_target;
use opc_easing::EaseConfig;

fuzz_target!(|data: &[u8]| {
    let Ok(config) = serde_json::from_slice::<EaseConfig>(data) else {
        return;
    };
    let Ok(ease) = config.build(None) else {
        return;
    };

    let text = String::from_utf8_lossy(data);
    let _ = ease.evaluate_str(&text);
});
