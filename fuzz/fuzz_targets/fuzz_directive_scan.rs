//! Fuzz target for the stylesheet directive scanner.
//!
//! The scanner sees arbitrary user stylesheets (and whole `.vue` files), so it must
//! **never panic**, and every target it returns must be a non-empty local reference.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_directive_scan
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if text.len() > 64 * 1024 {
        return;
    }

    for target in unreached_repo::fuzz::scan_stylesheet(text) {
        assert!(!target.is_empty());
        assert!(!target.starts_with("sass:"));
        assert!(!target.contains("://"));
    }
});
