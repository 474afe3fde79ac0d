use crate::error::GlossaError;
use crate::grammar::EvolutionStep;
use crate::inventory::PhonemeInventory;
use crate::language::{Dictionary, DictionaryEntry};
use crate::phonotactics::Phonotactics;
use crate::response::{EvolutionDiagnostic, EvolutionReport};
use serde::{Deserialize, Serialize};

pub mod matcher;

/// Applies evolution steps to dictionaries
///
/// Stateless; the generation bookkeeping lives in [`GenerationHistory`].
pub struct Evolver;

impl Evolver {
    /// Apply every rule of `step`, in order, to every entry of `dictionary`
    ///
    /// Degrades gracefully per entry: a form that cannot be processed is
    /// carried over unchanged and reported, never dropped. The input
    /// dictionary is not modified.
    pub fn apply_step(
        step: &EvolutionStep,
        dictionary: &Dictionary,
        inventory: &PhonemeInventory,
        phonotactics: &Phonotactics,
    ) -> (Dictionary, EvolutionReport) {
        let mut report = EvolutionReport::new(step.label.clone());
        let mut entries = Vec::with_capacity(dictionary.len());

        for entry in dictionary.iter() {
            if let Some(unknown) = entry
                .form
                .iter()
                .find(|s| inventory.classify(s).is_none())
            {
                report.diagnostics.push(EvolutionDiagnostic::SkippedEntry {
                    gloss: entry.gloss.clone(),
                    reason: format!("form contains '{}', which is not in the inventory", unknown),
                });
                entries.push(entry.clone());
                continue;
            }

            let mut form = entry.form.clone();
            for rule in &step.rules {
                form = matcher::rewrite(&form, rule, inventory);
            }

            if form != entry.form {
                report.entries_changed += 1;
            }

            if form.is_empty() {
                report.diagnostics.push(EvolutionDiagnostic::EmptyForm {
                    gloss: entry.gloss.clone(),
                });
            }

            for sequence in phonotactics.violations(&form, inventory) {
                report
                    .diagnostics
                    .push(EvolutionDiagnostic::PhonotacticViolation {
                        gloss: entry.gloss.clone(),
                        sequence,
                    });
            }

            entries.push(DictionaryEntry {
                gloss: entry.gloss.clone(),
                form,
                tags: entry.tags,
            });
        }

        (Dictionary::from_entries(entries), report)
    }
}

/// One snapshot in a language's generation history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Generation {
    pub label: String,
    pub dictionary: Dictionary,
    /// Report of the step that produced this generation; `None` for the
    /// initial snapshot
    pub report: Option<EvolutionReport>,
}

/// Append-only history of dictionary snapshots
///
/// Applying a step appends a generation; reverting only moves the
/// current pointer, so a revert is itself reversible. Snapshots are
/// never rewritten after the fact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationHistory {
    generations: Vec<Generation>,
    current: usize,
}

/// Label given to the automatic pre-evolution snapshot
pub const INITIAL_GENERATION: &str = "initial";

impl GenerationHistory {
    pub fn new(dictionary: Dictionary) -> Self {
        Self {
            generations: vec![Generation {
                label: INITIAL_GENERATION.to_string(),
                dictionary,
                report: None,
            }],
            current: 0,
        }
    }

    pub fn current(&self) -> &Generation {
        &self.generations[self.current]
    }

    pub fn current_label(&self) -> &str {
        &self.current().label
    }

    /// Number of applied steps, not counting the initial snapshot
    pub fn steps_applied(&self) -> usize {
        self.generations.len() - 1
    }

    pub fn iter(&self) -> impl Iterator<Item = &Generation> {
        self.generations.iter()
    }

    /// Update the initial snapshot while it is the only generation
    ///
    /// Entries added before the first evolution step belong to the
    /// dictionary that step consumes, so the pre-evolution snapshot
    /// follows live edits until a generation is recorded. Once history
    /// exists, snapshots are immutable.
    pub fn refresh_initial(&mut self, dictionary: Dictionary) {
        if self.generations.len() == 1 {
            self.generations[0].dictionary = dictionary;
        }
    }

    /// Append the generation produced by an applied step and point at it
    pub fn record(&mut self, label: String, dictionary: Dictionary, report: EvolutionReport) {
        self.generations.push(Generation {
            label,
            dictionary,
            report: Some(report),
        });
        self.current = self.generations.len() - 1;
    }

    /// True when the history has an initial snapshot and the current
    /// pointer is in range. Deserialized histories are checked with this
    /// before being installed.
    pub fn is_well_formed(&self) -> bool {
        !self.generations.is_empty() && self.current < self.generations.len()
    }

    /// Move the current pointer to the latest generation with `label`
    pub fn revert(&mut self, label: &str) -> Result<&Generation, GlossaError> {
        let index = self
            .generations
            .iter()
            .rposition(|g| g.label == label)
            .ok_or_else(|| GlossaError::GenerationNotFound(label.to_string()))?;
        self.current = index;
        Ok(&self.generations[index])
    }
}
