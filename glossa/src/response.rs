use crate::grammar::TagSet;
use serde::{Deserialize, Serialize};

/// A source token that could not be resolved in the target dictionary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnresolvedToken {
    pub gloss: String,
    /// Zero-based index of the token in the source text
    pub position: usize,
}

/// One translated (or passed-through) token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenRecord {
    pub gloss: String,
    /// Target-language form after morphology, as inventory symbols;
    /// empty for pass-through tokens
    pub form: Vec<String>,
    pub tags: TagSet,
    pub resolved: bool,
    /// Position in the source text, kept through reordering
    pub source_position: usize,
}

/// Result of one translation pass
///
/// Translation is best effort, fully reported: a dictionary miss never
/// aborts the pass, it lands in `unresolved` while the token passes
/// through untranslated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationResponse {
    pub text: String,
    pub tokens: Vec<TokenRecord>,
    pub unresolved: Vec<UnresolvedToken>,
}

/// Per-entry diagnostics collected while applying an evolution step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EvolutionDiagnostic {
    /// The entry's form was left unchanged because it failed validation
    SkippedEntry { gloss: String, reason: String },
    /// The step deleted every symbol of the form; the entry is retained
    /// but needs user review
    EmptyForm { gloss: String },
    /// The new form violates the language's phonotactic profile
    PhonotacticViolation { gloss: String, sequence: String },
}

/// Report of one applied evolution step
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EvolutionReport {
    pub label: String,
    pub entries_changed: usize,
    pub diagnostics: Vec<EvolutionDiagnostic>,
}

impl EvolutionReport {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            entries_changed: 0,
            diagnostics: Vec::new(),
        }
    }
}

/// An orthographic character with no romanization entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnmappedChar {
    pub ch: char,
    pub position: usize,
}

/// Result of one orthography-to-IPA transcription
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptionResponse {
    pub ipa: String,
    pub unmapped: Vec<UnmappedChar>,
}
