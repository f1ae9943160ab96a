#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|source: &str| {
    // Parsing arbitrary text must never panic, and must be repeatable
    let first = pebble::parse(source);
    let second = pebble::parse(source);
    assert_eq!(first, second);
});
