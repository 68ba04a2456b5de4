//! Fuzz target for the connection string parser.
//!
//! Feeds arbitrary strings to `parse` to find panics and non-deterministic
//! results.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_parse
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Never panics, and the same input always gives the same answer
        let first = dburl_core::parse(input);
        let second = dburl_core::parse(input);
        assert_eq!(first, second);
    }
});
