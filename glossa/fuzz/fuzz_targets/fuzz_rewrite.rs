#![no_main]

use glossa::evolution::matcher::rewrite;
use glossa::{parse_sound_change_rule, PhonemeInventory};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (String, Vec<u8>)| {
    let (rule_text, form_bytes) = data;

    let inventory =
        PhonemeInventory::from_symbols(["p", "t", "k", "m", "n", "s", "a", "i", "u"]).unwrap();
    let symbols: Vec<&str> = inventory.symbols().collect();

    let form: Vec<String> = form_bytes
        .iter()
        .map(|b| symbols[*b as usize % symbols.len()].to_string())
        .collect();

    if let Ok(rule) = parse_sound_change_rule(&rule_text) {
        let _ = rewrite(&form, &rule, &inventory);
    }
});
