use crate::evolution::{Evolver, Generation, GenerationHistory};
use crate::grammar::{EvolutionStep, GrammarRule, TagSet};
use crate::language::{DictionaryEntry, Language};
use crate::options::EngineOptions;
use crate::parser;
use crate::response::{EvolutionReport, TranscriptionResponse, TranslationResponse};
use crate::serializers::{LanguageSnapshot, ProjectSnapshot};
use crate::translator::Translator;
use crate::validator::Validator;
use crate::{GlossaError, GlossaResult};
use std::collections::HashMap;

struct LanguageState {
    language: Language,
    history: GenerationHistory,
    staged: Vec<EvolutionStep>,
}

/// The Glossa language engine.
///
/// Holds every language of a project together with its generation
/// history and staged evolution steps. All mutation goes through
/// validate-then-commit: an operation that fails leaves the engine
/// exactly as it was.
pub struct Engine {
    languages: HashMap<String, LanguageState>,
    validator: Validator,
    options: EngineOptions,
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            languages: HashMap::new(),
            validator: Validator,
            options: EngineOptions::default(),
        }
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with custom options
    pub fn with_options(options: EngineOptions) -> Self {
        Self {
            languages: HashMap::new(),
            validator: Validator,
            options,
        }
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Create a language with the given phoneme inventory
    pub fn create_language<'a>(
        &mut self,
        name: &str,
        symbols: impl IntoIterator<Item = &'a str>,
    ) -> GlossaResult<()> {
        if self.languages.contains_key(name) {
            return Err(GlossaError::Conflict(format!(
                "language '{}' already exists",
                name
            )));
        }
        let inventory = crate::inventory::PhonemeInventory::from_symbols(symbols)?;
        let language = Language::new(name, inventory);
        let history = GenerationHistory::new(language.dictionary.clone());
        self.languages.insert(
            name.to_string(),
            LanguageState {
                language,
                history,
                staged: Vec::new(),
            },
        );
        Ok(())
    }

    pub fn remove_language(&mut self, name: &str) {
        self.languages.remove(name);
    }

    pub fn list_languages(&self) -> Vec<String> {
        let mut names: Vec<String> = self.languages.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn language(&self, name: &str) -> Option<&Language> {
        self.languages.get(name).map(|s| &s.language)
    }

    pub fn add_phoneme(&mut self, language: &str, symbol: &str) -> GlossaResult<()> {
        self.state_mut(language)?.language.inventory.add(symbol)
    }

    /// Remove a phoneme, failing if the dictionary, the morphology, or a
    /// staged step still references it
    pub fn remove_phoneme(&mut self, language: &str, symbol: &str) -> GlossaResult<()> {
        let state = self.state_mut(language)?;
        let staged = state.staged.clone();
        state.language.remove_phoneme(symbol, &staged)
    }

    pub fn add_entry(&mut self, language: &str, entry: DictionaryEntry) -> GlossaResult<()> {
        let state = self.state_mut(language)?;
        state.language.add_entry(entry)?;
        state
            .history
            .refresh_initial(state.language.dictionary.clone());
        Ok(())
    }

    /// Correct the tags of an existing entry in place
    pub fn retag_entry(
        &mut self,
        language: &str,
        gloss: &str,
        old_tags: &TagSet,
        new_tags: TagSet,
    ) -> GlossaResult<()> {
        let state = self.state_mut(language)?;
        state.language.dictionary.retag(gloss, old_tags, new_tags)?;
        state
            .history
            .refresh_initial(state.language.dictionary.clone());
        Ok(())
    }

    /// Parse a rule file and commit everything it contains
    ///
    /// Word-order and morphology statements install immediately; `step`
    /// blocks are staged for a later [`Engine::apply_staged`]. The whole
    /// file is parsed and validated before anything is committed.
    pub fn add_rule_text(
        &mut self,
        language: &str,
        text: &str,
        source_id: Option<String>,
    ) -> GlossaResult<()> {
        let file = parser::parse_rule_file(text, source_id, &self.options)?;
        let state = self.state(language)?;

        let mut rules = Vec::with_capacity(file.rules.len());
        for rule in file.rules {
            rules.push(
                self.validator
                    .validate_rule(rule, &state.language, &self.options)?,
            );
        }
        let mut steps = Vec::with_capacity(file.steps.len());
        for step in file.steps {
            steps.push(
                self.validator
                    .validate_step(step, &state.language, &self.options)?,
            );
        }

        let state = self.state_mut(language)?;
        let staged = state.staged.clone();

        // install onto a copy first, so a Conflict or StaleReference on a
        // later line leaves the earlier lines uncommitted too
        let mut preview = state.language.clone();
        for rule in rules {
            preview.install_rule(rule, &staged)?;
        }

        state.language = preview;
        state.staged.extend(steps);
        Ok(())
    }

    /// Validate and install a single rule object
    pub fn install_rule(&mut self, language: &str, rule: GrammarRule) -> GlossaResult<()> {
        let state = self.state(language)?;
        let rule = self
            .validator
            .validate_rule(rule, &state.language, &self.options)?;
        let state = self.state_mut(language)?;
        let staged = state.staged.clone();
        state.language.install_rule(rule, &staged)
    }

    /// Validate and stage an evolution step without applying it
    pub fn stage_step(&mut self, language: &str, step: EvolutionStep) -> GlossaResult<()> {
        let state = self.state(language)?;
        let step = self
            .validator
            .validate_step(step, &state.language, &self.options)?;
        self.state_mut(language)?.staged.push(step);
        Ok(())
    }

    pub fn staged_steps(&self, language: &str) -> GlossaResult<&[EvolutionStep]> {
        Ok(&self.state(language)?.staged)
    }

    /// Apply every staged step in order, one generation each
    ///
    /// Target symbols a step introduces are added to the inventory
    /// before the step runs. Returns one report per applied step.
    pub fn apply_staged(&mut self, language: &str) -> GlossaResult<Vec<EvolutionReport>> {
        let max_steps = self.options.max_evolution_steps;
        let state = self.state_mut(language)?;

        let pending = state.staged.len();
        let applied = state.history.steps_applied();
        if applied + pending > max_steps {
            return Err(GlossaError::LimitExceeded {
                limit_name: "max_evolution_steps".to_string(),
                limit_value: max_steps.to_string(),
                actual_value: (applied + pending).to_string(),
                suggestion: "Revert part of the history or raise the limit".to_string(),
            });
        }

        let steps = std::mem::take(&mut state.staged);
        let mut reports = Vec::with_capacity(steps.len());

        for step in steps {
            for symbol in step.rules.iter().flat_map(|r| r.target.iter()) {
                if !state.language.inventory.contains(symbol)
                    && crate::ipa::features_for(symbol).is_some()
                {
                    state.language.inventory.add(symbol)?;
                }
            }

            let (dictionary, report) = Evolver::apply_step(
                &step,
                &state.language.dictionary,
                &state.language.inventory,
                &state.language.phonotactics,
            );
            state.language.set_dictionary(dictionary.clone());
            state.history.record(step.label.clone(), dictionary, report.clone());
            reports.push(report);
        }

        Ok(reports)
    }

    /// Stage a step and immediately apply it
    pub fn apply_step(
        &mut self,
        language: &str,
        step: EvolutionStep,
    ) -> GlossaResult<EvolutionReport> {
        self.stage_step(language, step)?;
        let mut reports = self.apply_staged(language)?;
        reports
            .pop()
            .ok_or_else(|| GlossaError::Engine("no report from applied step".to_string()))
    }

    /// Generations of a language, oldest first
    pub fn history(&self, language: &str) -> GlossaResult<Vec<&Generation>> {
        Ok(self.state(language)?.history.iter().collect())
    }

    pub fn current_generation(&self, language: &str) -> GlossaResult<&Generation> {
        Ok(self.state(language)?.history.current())
    }

    /// Revert the dictionary to the latest generation with `label`
    ///
    /// History is kept intact; only the current pointer and the live
    /// dictionary move, so the revert can itself be reverted.
    pub fn revert(&mut self, language: &str, label: &str) -> GlossaResult<()> {
        let state = self.state_mut(language)?;
        let dictionary = state.history.revert(label)?.dictionary.clone();
        state.language.set_dictionary(dictionary);
        Ok(())
    }

    /// Translate source text into `language`, best effort
    pub fn translate(&self, language: &str, text: &str) -> GlossaResult<TranslationResponse> {
        Ok(Translator::translate(text, &self.state(language)?.language))
    }

    /// Translate between two managed languages, guessing tags from the
    /// source language's dictionary
    pub fn translate_between(
        &self,
        source: &str,
        target: &str,
        text: &str,
    ) -> GlossaResult<TranslationResponse> {
        let source = &self.state(source)?.language;
        let target = &self.state(target)?.language;
        Ok(Translator::translate_between(text, Some(source), target))
    }

    /// Transcribe orthographic text to IPA using the language's
    /// romanization table
    pub fn transcribe(&self, language: &str, text: &str) -> GlossaResult<TranscriptionResponse> {
        let state = self.state(language)?;
        Ok(crate::transcribe::transcribe(
            text,
            &state.language.romanization,
            &state.language.inventory,
        ))
    }

    /// Export the complete project state
    pub fn export_snapshot(&self) -> ProjectSnapshot {
        let mut names: Vec<&String> = self.languages.keys().collect();
        names.sort();
        let languages = names
            .into_iter()
            .map(|name| {
                let state = &self.languages[name];
                LanguageSnapshot {
                    language: state.language.clone(),
                    history: state.history.clone(),
                    staged_steps: state.staged.clone(),
                }
            })
            .collect();
        ProjectSnapshot::new(languages)
    }

    /// Replace the engine state with a validated snapshot
    ///
    /// Every language is validated before any of them is installed.
    pub fn import_snapshot(&mut self, snapshot: ProjectSnapshot) -> GlossaResult<()> {
        for entry in &snapshot.languages {
            self.validator.validate_language(&entry.language, &self.options)?;
            if !entry.history.is_well_formed() {
                return Err(GlossaError::Engine(format!(
                    "generation history of '{}' is corrupt",
                    entry.language.name
                )));
            }
        }

        self.languages.clear();
        for entry in snapshot.languages {
            self.languages.insert(
                entry.language.name.clone(),
                LanguageState {
                    language: entry.language,
                    history: entry.history,
                    staged: entry.staged_steps,
                },
            );
        }
        Ok(())
    }

    fn state(&self, name: &str) -> GlossaResult<&LanguageState> {
        self.languages
            .get(name)
            .ok_or_else(|| GlossaError::Engine(format!("unknown language '{}'", name)))
    }

    fn state_mut(&mut self, name: &str) -> GlossaResult<&mut LanguageState> {
        self.languages
            .get_mut(name)
            .ok_or_else(|| GlossaError::Engine(format!("unknown language '{}'", name)))
    }
}
