//! Fuzz target for the data decoders.
//!
//! This fuzzer tests that the CSV/TSV and JSON decoders:
//! 1. Never panic on malformed input
//! 2. Handle all delimiter combinations
//! 3. Only ever produce row sets the profiler accepts

#![no_main]

use glimpse::{Parser, Profiler};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    let parser = Parser::new();
    let profiler = Profiler::new();

    if let Ok(rows) = parser.parse_bytes(data) {
        let _ = profiler.profile(&rows);
    }
    if let Ok(rows) = parser.parse_json(data) {
        let _ = profiler.profile(&rows);
    }
});
