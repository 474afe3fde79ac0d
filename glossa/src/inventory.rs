use crate::ast::Span;
use crate::error::GlossaError;
use crate::ipa::{self, PhonemeFeatures, SymbolClass};
use crate::GlossaResult;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A single speech sound: an IPA grapheme plus its feature bundle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phoneme {
    pub symbol: String,
    pub features: PhonemeFeatures,
}

/// Ordered, duplicate-free set of phonemes owned by one language
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PhonemeInventory {
    phonemes: Vec<Phoneme>,
}

impl PhonemeInventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an inventory from chart symbols, failing on the first
    /// unrecognized or duplicate grapheme
    pub fn from_symbols<'a>(symbols: impl IntoIterator<Item = &'a str>) -> GlossaResult<Self> {
        let mut inventory = Self::new();
        for symbol in symbols {
            inventory.add(symbol)?;
        }
        Ok(inventory)
    }

    /// Add a symbol with features taken from the IPA chart
    pub fn add(&mut self, symbol: &str) -> GlossaResult<()> {
        let features = ipa::features_for(symbol).ok_or_else(|| {
            GlossaError::invalid_symbol_with_suggestion(
                format!("'{}' is not a recognized IPA grapheme", symbol),
                Span::empty(),
                "<inventory>",
                Arc::from(symbol),
                ipa::find_closest_symbol(symbol),
            )
        })?;
        self.add_phoneme(Phoneme {
            symbol: symbol.to_string(),
            features,
        })
    }

    /// Add a phoneme with a caller-supplied feature bundle
    ///
    /// Used for project imports where the persisted features are
    /// authoritative; the symbol must still be a chart grapheme.
    pub fn add_phoneme(&mut self, phoneme: Phoneme) -> GlossaResult<()> {
        if ipa::features_for(&phoneme.symbol).is_none() {
            return Err(GlossaError::invalid_symbol_with_suggestion(
                format!("'{}' is not a recognized IPA grapheme", phoneme.symbol),
                Span::empty(),
                "<inventory>",
                Arc::from(phoneme.symbol.as_str()),
                ipa::find_closest_symbol(&phoneme.symbol),
            ));
        }
        if self.contains(&phoneme.symbol) {
            return Err(GlossaError::invalid_symbol(
                format!("'{}' is already in the inventory", phoneme.symbol),
                Span::empty(),
                "<inventory>",
                Arc::from(phoneme.symbol.as_str()),
            ));
        }
        self.phonemes.push(phoneme);
        Ok(())
    }

    /// Remove a symbol without any in-use checks
    ///
    /// The checked operation lives on `Language`, which owns the rules
    /// and dictionary that may reference the symbol.
    pub(crate) fn remove_unchecked(&mut self, symbol: &str) {
        self.phonemes.retain(|p| p.symbol != symbol);
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.phonemes.iter().any(|p| p.symbol == symbol)
    }

    pub fn features(&self, symbol: &str) -> Option<&PhonemeFeatures> {
        self.phonemes
            .iter()
            .find(|p| p.symbol == symbol)
            .map(|p| &p.features)
    }

    /// Vowel/consonant classification backing the `V`/`C` environment classes
    pub fn classify(&self, symbol: &str) -> Option<SymbolClass> {
        self.features(symbol).map(|f| f.class())
    }

    pub fn is_empty(&self) -> bool {
        self.phonemes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.phonemes.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Phoneme> {
        self.phonemes.iter()
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.phonemes.iter().map(|p| p.symbol.as_str())
    }

    /// Segment a raw IPA string into inventory symbols
    ///
    /// Greedy longest-match: at each position the longest inventory symbol
    /// that prefixes the remaining text wins. Needed because combining
    /// diacritics make chart graphemes multi-codepoint.
    pub fn segment(&self, text: &str) -> GlossaResult<Vec<String>> {
        let mut symbols: Vec<&str> = self.phonemes.iter().map(|p| p.symbol.as_str()).collect();
        symbols.sort_by_key(|s| std::cmp::Reverse(s.len()));

        let mut result = Vec::new();
        let mut rest = text;
        while !rest.is_empty() {
            let matched = symbols.iter().find(|s| rest.starts_with(**s));
            match matched {
                Some(symbol) => {
                    result.push(symbol.to_string());
                    rest = &rest[symbol.len()..];
                }
                None => {
                    let next: String = rest.chars().take(1).collect();
                    let consumed = text.len() - rest.len();
                    return Err(GlossaError::invalid_symbol_with_suggestion(
                        format!("'{}' is not a symbol of this inventory", next),
                        Span {
                            start: consumed,
                            end: consumed + next.len(),
                            line: 1,
                            col: text[..consumed].chars().count() + 1,
                        },
                        "<form>",
                        Arc::from(text),
                        ipa::find_closest_symbol(&next),
                    ));
                }
            }
        }
        Ok(result)
    }
}
