//! # Glossa Engine
//!
//! **A rule engine for constructed languages**
//!
//! Glossa models a constructed language as data: a phoneme inventory
//! drawn from the IPA, a word-order rule, morphology rules, and a
//! dictionary. Sound-change rules grouped into evolution steps rewrite
//! the whole dictionary at once, producing a new generation that can be
//! compared against or reverted to any earlier one.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use glossa::{DictionaryEntry, Engine, GlossaResult, TagSet};
//!
//! fn main() -> GlossaResult<()> {
//!     let mut engine = Engine::new();
//!     engine.create_language("elvish", ["p", "t", "k", "d", "a", "i", "u"])?;
//!
//!     engine.add_entry("elvish", DictionaryEntry {
//!         gloss: "water".to_string(),
//!         form: vec!["p".into(), "a".into(), "t".into(), "a".into()],
//!         tags: TagSet::default(),
//!     })?;
//!
//!     // Stage a lenition step and run it over the dictionary
//!     engine.add_rule_text("elvish", "
//!         step lenition
//!         change t > d / V_V
//!     ", None)?;
//!     let reports = engine.apply_staged("elvish")?;
//!     assert_eq!(reports[0].entries_changed, 1);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Languages
//! A language owns its inventory, grammar rules, dictionary,
//! phonotactic profile, and romanization table. An engine holds any
//! number of languages.
//!
//! ### Rules
//! Rule text is a small line-oriented format: `order S V O, ADJ N`
//! fixes constituent order, `morph [verb past] > -ta` attaches affixes,
//! and `change t > d / V_V` rewrites sounds. `step` headers group
//! changes into named evolution steps.
//!
//! ### Generations
//! Applying a step snapshots the dictionary into an append-only
//! history. Reverting moves a pointer, never deletes, so every stage of
//! a language's evolution stays reachable.

pub mod ast;
pub mod engine;
pub mod error;
pub mod evolution;
pub mod grammar;
pub mod inventory;
pub mod ipa;
pub mod language;
pub mod options;
pub mod parser;
pub mod phonotactics;
pub mod response;
pub mod serializers;
pub mod transcribe;
pub mod translator;
pub mod validator;

pub use ast::Span;
pub use engine::Engine;
pub use error::{ErrorDetails, GlossaError};
pub use evolution::{Generation, GenerationHistory, INITIAL_GENERATION};
pub use grammar::{
    Affix, AffixPosition, ContextSpec, Environment, EvolutionStep, GramNumber, GrammarRule,
    ModifierOrder, MorphologyRule, PartOfSpeech, Role, SoundChangeRule, TagSet, Tense,
    WordOrderRule,
};
pub use inventory::{Phoneme, PhonemeInventory};
pub use ipa::{PhonemeFeatures, SymbolClass};
pub use language::{Dictionary, DictionaryEntry, Language};
pub use options::EngineOptions;
pub use parser::{
    parse_morphology_rule, parse_rule, parse_rule_file, parse_sound_change_rule, parse_tags,
    parse_word_order, RuleFile,
};
pub use phonotactics::Phonotactics;
pub use response::{
    EvolutionDiagnostic, EvolutionReport, TokenRecord, TranscriptionResponse, TranslationResponse,
    UnresolvedToken,
};
pub use serializers::{from_json, to_json, LanguageSnapshot, ProjectSnapshot};
pub use transcribe::{transcribe, RomanizationTable};
pub use translator::Translator;
pub use validator::Validator;

/// Result type for Glossa operations
pub type GlossaResult<T> = Result<T, GlossaError>;

#[cfg(test)]
mod tests;
