//! Orthography-to-IPA romanization
//!
//! Maps plain orthographic text to an approximate IPA transcription using a
//! per-language character table. Unmapped characters pass through unchanged
//! and are reported so the user can extend the table.

use crate::inventory::PhonemeInventory;
use crate::response::{TranscriptionResponse, UnmappedChar};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Orthography character to IPA string mapping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RomanizationTable {
    entries: BTreeMap<char, String>,
}

impl Default for RomanizationTable {
    fn default() -> Self {
        let pairs = [
            ('a', "a"),
            ('e', "e"),
            ('i', "i"),
            ('o', "o"),
            ('u', "u"),
            ('y', "j"),
            ('c', "k"),
            ('q', "k"),
            ('x', "ks"),
            ('j', "ʒ"),
            ('g', "ɡ"),
            ('h', "h"),
            ('l', "l"),
            ('m', "m"),
            ('n', "n"),
            ('r', "ɾ"),
            ('s', "s"),
            ('z', "z"),
            ('t', "t"),
            ('d', "d"),
            ('p', "p"),
            ('b', "b"),
            ('f', "f"),
            ('v', "v"),
            ('k', "k"),
            ('w', "w"),
        ];
        Self {
            entries: pairs.iter().map(|(c, s)| (*c, s.to_string())).collect(),
        }
    }
}

impl RomanizationTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    pub fn set(&mut self, orthographic: char, ipa: impl Into<String>) {
        self.entries.insert(orthographic, ipa.into());
    }

    pub fn get(&self, orthographic: char) -> Option<&str> {
        self.entries.get(&orthographic).map(String::as_str)
    }
}

/// Transcribe orthographic text to IPA
///
/// Characters are looked up case-insensitively; whitespace is preserved.
/// A character with no table entry passes through and is recorded as a
/// diagnostic, including entries whose IPA value is not segmentable into
/// the inventory.
pub fn transcribe(
    text: &str,
    table: &RomanizationTable,
    inventory: &PhonemeInventory,
) -> TranscriptionResponse {
    let mut ipa = String::new();
    let mut unmapped = Vec::new();

    for (position, ch) in text.chars().enumerate() {
        if ch.is_whitespace() {
            ipa.push(ch);
            continue;
        }
        match table.get(ch.to_lowercase().next().unwrap_or(ch)) {
            Some(mapped) => {
                if inventory.segment(mapped).is_err() {
                    unmapped.push(UnmappedChar { ch, position });
                }
                ipa.push_str(mapped);
            }
            None => {
                unmapped.push(UnmappedChar { ch, position });
                ipa.push(ch);
            }
        }
    }

    TranscriptionResponse { ipa, unmapped }
}
