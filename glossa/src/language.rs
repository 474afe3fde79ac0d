use crate::error::GlossaError;
use crate::grammar::{
    EvolutionStep, GrammarRule, MorphologyRule, Role, TagSet, WordOrderRule,
};
use crate::inventory::PhonemeInventory;
use crate::phonotactics::Phonotactics;
use crate::transcribe::RomanizationTable;
use crate::GlossaResult;
use serde::{Deserialize, Serialize};

/// One lexical entry: source-language gloss, constructed-language form,
/// grammatical tags
///
/// Identity is the (gloss, tags) pair; the form may be replaced wholesale
/// by evolution while the identity persists across generations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub gloss: String,
    /// Phoneme-sequence form, one inventory symbol per element
    pub form: Vec<String>,
    pub tags: TagSet,
}

/// Insertion-ordered lexicon, unique by (gloss, tags)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Dictionary {
    entries: Vec<DictionaryEntry>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, entry: DictionaryEntry) -> GlossaResult<()> {
        if self
            .entries
            .iter()
            .any(|e| e.gloss == entry.gloss && e.tags == entry.tags)
        {
            return Err(GlossaError::Conflict(format!(
                "entry '{}' with tags {} already exists",
                entry.gloss, entry.tags
            )));
        }
        self.entries.push(entry);
        Ok(())
    }

    /// Look up an entry by gloss and tags
    ///
    /// Exact (gloss, tags) match wins; otherwise the first entry with the
    /// same gloss in insertion order. A miss is a normal result, not an
    /// error.
    pub fn lookup(&self, gloss: &str, tags: &TagSet) -> Option<&DictionaryEntry> {
        self.entries
            .iter()
            .find(|e| e.gloss == gloss && e.tags == *tags)
            .or_else(|| self.entries.iter().find(|e| e.gloss == gloss))
    }

    /// Replace the tags of an entry in place, keeping its position
    pub fn retag(&mut self, gloss: &str, old_tags: &TagSet, new_tags: TagSet) -> GlossaResult<()> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.gloss == gloss && e.tags == *old_tags)
            .ok_or_else(|| {
                GlossaError::Engine(format!("entry '{}' with tags {} not found", gloss, old_tags))
            })?;
        entry.tags = new_tags;
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &DictionaryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn from_entries(entries: Vec<DictionaryEntry>) -> Self {
        Self { entries }
    }
}

/// A constructed language: inventory, word order, morphology, lexicon,
/// and its auxiliary profiles
///
/// Rules enter only through `install_rule`; lexicon forms change only
/// through explicit entry edits or the evolution engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Language {
    pub name: String,
    pub inventory: PhonemeInventory,
    word_order: WordOrderRule,
    morphology: Vec<MorphologyRule>,
    pub dictionary: Dictionary,
    pub phonotactics: Phonotactics,
    pub romanization: RomanizationTable,
}

impl Language {
    pub fn new(name: impl Into<String>, inventory: PhonemeInventory) -> Self {
        Self {
            name: name.into(),
            inventory,
            word_order: WordOrderRule::svo(),
            morphology: Vec::new(),
            dictionary: Dictionary::new(),
            phonotactics: Phonotactics::new(),
            romanization: RomanizationTable::default(),
        }
    }

    pub fn current_word_order(&self) -> &WordOrderRule {
        &self.word_order
    }

    /// Morphology rules in application order
    pub fn morphology_rules(&self) -> &[MorphologyRule] {
        &self.morphology
    }

    pub fn lookup(&self, gloss: &str, tags: &TagSet) -> Option<&DictionaryEntry> {
        self.dictionary.lookup(gloss, tags)
    }

    /// Install a parsed rule, dispatching on its kind
    ///
    /// `staged_steps` are the un-applied evolution steps held by the
    /// engine; replacing the word order while any exist is a conflict,
    /// and a word order that drops roles still referenced by morphology
    /// patterns is a stale reference.
    pub fn install_rule(
        &mut self,
        rule: GrammarRule,
        staged_steps: &[EvolutionStep],
    ) -> GlossaResult<()> {
        match rule {
            GrammarRule::WordOrder(order) => {
                if !staged_steps.is_empty() {
                    return Err(GlossaError::Conflict(format!(
                        "cannot replace the word order of '{}' while {} staged evolution step(s) are pending",
                        self.name,
                        staged_steps.len()
                    )));
                }
                if let Some(role) = self.orphaned_role(&order) {
                    return Err(GlossaError::StaleReference(format!(
                        "morphology rules of '{}' still reference the {} role, which the new word order drops",
                        self.name,
                        role.name()
                    )));
                }
                self.word_order = order;
            }
            GrammarRule::Morphology(rule) => {
                for symbol in &rule.affix.phonemes {
                    if !self.inventory.contains(symbol) {
                        return Err(GlossaError::StaleReference(format!(
                            "affix symbol '{}' is not in the inventory of '{}'",
                            symbol, self.name
                        )));
                    }
                }
                self.morphology.push(rule);
            }
            GrammarRule::SoundChange(_) => {
                return Err(GlossaError::Engine(
                    "sound-change rules belong to evolution steps; stage them on the engine"
                        .to_string(),
                ));
            }
        }
        Ok(())
    }

    /// First morphology-referenced role that `order` no longer carries
    fn orphaned_role(&self, order: &WordOrderRule) -> Option<Role> {
        self.morphology
            .iter()
            .filter_map(|rule| rule.pattern.role)
            .find(|role| !order.contains_role(*role))
    }

    pub fn add_entry(&mut self, entry: DictionaryEntry) -> GlossaResult<()> {
        for symbol in &entry.form {
            if !self.inventory.contains(symbol) {
                return Err(GlossaError::invalid_symbol_with_suggestion(
                    format!(
                        "form of '{}' uses '{}', which is not in the inventory of '{}'",
                        entry.gloss, symbol, self.name
                    ),
                    crate::ast::Span::empty(),
                    "<entry>",
                    std::sync::Arc::from(symbol.as_str()),
                    crate::ipa::find_closest_symbol(symbol),
                ));
            }
        }
        self.dictionary.add(entry)
    }

    /// Remove a phoneme, failing if anything still references it
    ///
    /// Checks dictionary forms, morphology affixes, and the staged
    /// evolution steps; on failure the inventory is untouched.
    pub fn remove_phoneme(
        &mut self,
        symbol: &str,
        staged_steps: &[EvolutionStep],
    ) -> GlossaResult<()> {
        if !self.inventory.contains(symbol) {
            return Err(GlossaError::Engine(format!(
                "'{}' is not in the inventory of '{}'",
                symbol, self.name
            )));
        }

        if let Some(entry) = self
            .dictionary
            .iter()
            .find(|e| e.form.iter().any(|s| s == symbol))
        {
            return Err(GlossaError::SymbolInUse {
                symbol: symbol.to_string(),
                referenced_by: format!("dictionary entry '{}'", entry.gloss),
            });
        }

        if self
            .morphology
            .iter()
            .any(|rule| rule.affix.phonemes.iter().any(|s| s == symbol))
        {
            return Err(GlossaError::SymbolInUse {
                symbol: symbol.to_string(),
                referenced_by: "a morphology rule affix".to_string(),
            });
        }

        for step in staged_steps {
            let referenced = step.rules.iter().any(|rule| {
                rule.source.iter().any(|s| s == symbol)
                    || rule.target.iter().any(|s| s == symbol)
                    || context_references(&rule.environment.left, symbol)
                    || context_references(&rule.environment.right, symbol)
            });
            if referenced {
                return Err(GlossaError::SymbolInUse {
                    symbol: symbol.to_string(),
                    referenced_by: format!("staged evolution step '{}'", step.label),
                });
            }
        }

        self.inventory.remove_unchecked(symbol);
        Ok(())
    }

    /// Replace the dictionary with a new generation produced by evolution
    pub(crate) fn set_dictionary(&mut self, dictionary: Dictionary) {
        self.dictionary = dictionary;
    }

}

fn context_references(context: &Option<crate::grammar::ContextSpec>, symbol: &str) -> bool {
    matches!(context, Some(crate::grammar::ContextSpec::Symbol(s)) if s == symbol)
}
