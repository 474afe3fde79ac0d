#![no_main]

use glossa::parse_sound_change_rule;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(rule) = parse_sound_change_rule(s) {
            // canonical text must survive a reparse
            let _ = parse_sound_change_rule(&rule.to_string());
        }
    }
});
