mod json;

pub use json::{from_json, to_json};

use crate::evolution::GenerationHistory;
use crate::grammar::EvolutionStep;
use crate::language::Language;
use serde::{Deserialize, Serialize};

/// Current snapshot format version
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serialized state of one language, with its full generation history
/// and any staged-but-unapplied evolution steps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageSnapshot {
    pub language: Language,
    pub history: GenerationHistory,
    #[serde(default)]
    pub staged_steps: Vec<EvolutionStep>,
}

/// A complete project export: every language the engine holds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSnapshot {
    pub version: u32,
    pub languages: Vec<LanguageSnapshot>,
}

impl ProjectSnapshot {
    pub fn new(languages: Vec<LanguageSnapshot>) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            languages,
        }
    }
}
