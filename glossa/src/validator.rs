use crate::ast::Span;
use crate::error::GlossaError;
use crate::grammar::{ContextSpec, EvolutionStep, GrammarRule, SoundChangeRule};
use crate::ipa;
use crate::language::Language;
use crate::options::EngineOptions;
use crate::GlossaResult;
use std::sync::Arc;

/// Semantic validation of parsed rules against a concrete language
///
/// Parsing is language-independent; everything that needs the inventory
/// happens here, before any state is committed. A step that fails
/// validation leaves the language and its history untouched.
pub struct Validator;

impl Validator {
    pub fn new() -> Self {
        Validator
    }

    /// Validate and canonicalize an evolution step for `language`
    ///
    /// Source and environment symbols must be in the inventory; target
    /// symbols only have to be chart-recognized, since a step may
    /// introduce sounds the language did not have before. Phoneme
    /// sequences are re-segmented against the inventory, so a
    /// multi-character symbol like an affricate matches as one unit.
    pub fn validate_step(
        &self,
        step: EvolutionStep,
        language: &Language,
        options: &EngineOptions,
    ) -> GlossaResult<EvolutionStep> {
        let mut validated = EvolutionStep::new(step.label);
        for rule in step.rules {
            validated.rules.push(self.validate_change(rule, language, options)?);
        }
        Ok(validated)
    }

    /// Validate a standalone word-order or morphology rule
    ///
    /// Sound-change rules are rejected here; they only enter through
    /// evolution steps.
    pub fn validate_rule(
        &self,
        rule: GrammarRule,
        language: &Language,
        options: &EngineOptions,
    ) -> GlossaResult<GrammarRule> {
        match rule {
            GrammarRule::WordOrder(rule) => Ok(GrammarRule::WordOrder(rule)),
            GrammarRule::Morphology(mut rule) => {
                rule.affix.phonemes =
                    self.canonical_inventory_seq(rule.affix.phonemes, language, options)?;
                Ok(GrammarRule::Morphology(rule))
            }
            GrammarRule::SoundChange(_) => Err(GlossaError::Engine(
                "sound-change rules belong to evolution steps; stage them on the engine"
                    .to_string(),
            )),
        }
    }

    /// Validate a whole language, as loaded from a snapshot
    pub fn validate_language(
        &self,
        language: &Language,
        options: &EngineOptions,
    ) -> GlossaResult<()> {
        if options.strict_ipa_validation {
            for symbol in language.inventory.symbols() {
                if ipa::features_for(symbol).is_none() {
                    return Err(self.unknown_symbol_error(
                        format!("inventory symbol '{}' is not a recognized IPA grapheme", symbol),
                        symbol,
                    ));
                }
            }
        }

        for entry in language.dictionary.iter() {
            for symbol in &entry.form {
                if !language.inventory.contains(symbol) {
                    return Err(self.unknown_symbol_error(
                        format!(
                            "form of '{}' uses '{}', which is not in the inventory",
                            entry.gloss, symbol
                        ),
                        symbol,
                    ));
                }
            }
        }

        for rule in language.morphology_rules() {
            for symbol in &rule.affix.phonemes {
                if !language.inventory.contains(symbol) {
                    return Err(self.unknown_symbol_error(
                        format!(
                            "morphology rule '{}' uses '{}', which is not in the inventory",
                            rule, symbol
                        ),
                        symbol,
                    ));
                }
            }
        }

        Ok(())
    }

    fn validate_change(
        &self,
        rule: SoundChangeRule,
        language: &Language,
        options: &EngineOptions,
    ) -> GlossaResult<SoundChangeRule> {
        let source = self.canonical_inventory_seq(rule.source, language, options)?;
        let target = self.canonical_target_seq(rule.target, language, options)?;

        for context in [&rule.environment.left, &rule.environment.right] {
            if let Some(ContextSpec::Symbol(symbol)) = context {
                if !language.inventory.contains(symbol) {
                    return Err(self.unknown_symbol_error(
                        format!(
                            "environment symbol '{}' is not in the inventory of '{}'",
                            symbol, language.name
                        ),
                        symbol,
                    ));
                }
            }
        }

        Ok(SoundChangeRule {
            source,
            target,
            environment: rule.environment,
        })
    }

    /// Re-segment a parsed phoneme sequence against the inventory
    fn canonical_inventory_seq(
        &self,
        symbols: Vec<String>,
        language: &Language,
        options: &EngineOptions,
    ) -> GlossaResult<Vec<String>> {
        let joined = symbols.concat();
        match language.inventory.segment(&joined) {
            Ok(segmented) => Ok(segmented),
            Err(err) if options.strict_ipa_validation => Err(err),
            Err(_) => Ok(symbols),
        }
    }

    /// Like `canonical_inventory_seq`, but new chart-valid symbols are
    /// allowed through
    fn canonical_target_seq(
        &self,
        symbols: Vec<String>,
        language: &Language,
        options: &EngineOptions,
    ) -> GlossaResult<Vec<String>> {
        let joined = symbols.concat();
        if let Ok(segmented) = language.inventory.segment(&joined) {
            return Ok(segmented);
        }
        if options.strict_ipa_validation {
            for symbol in &symbols {
                if ipa::features_for(symbol).is_none() {
                    return Err(self.unknown_symbol_error(
                        format!("target symbol '{}' is not a recognized IPA grapheme", symbol),
                        symbol,
                    ));
                }
            }
        }
        Ok(symbols)
    }

    fn unknown_symbol_error(&self, message: String, symbol: &str) -> GlossaError {
        GlossaError::invalid_symbol_with_suggestion(
            message,
            Span::empty(),
            "<validate>",
            Arc::from(symbol),
            ipa::find_closest_symbol(symbol),
        )
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}
