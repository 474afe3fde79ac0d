#![no_main]

use glossa::{parse_rule_file, EngineOptions};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = parse_rule_file(s, None, &EngineOptions::default());
    }
});
