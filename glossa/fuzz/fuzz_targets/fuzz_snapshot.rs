#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(snapshot) = glossa::from_json(s) {
            let mut engine = glossa::Engine::new();
            let _ = engine.import_snapshot(snapshot);
        }
    }
});
