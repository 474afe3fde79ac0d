/// Engine options supplied by the host at construction time
///
/// The core never reads configuration itself; the embedding application
/// resolves these values and hands them over once.
#[derive(Debug, Clone)]
pub struct EngineOptions {
    /// Require every phoneme sequence in rule text to segment cleanly
    /// against the language's inventory; when off, unsegmentable
    /// sequences keep their raw character split
    pub strict_ipa_validation: bool,

    /// Maximum number of recorded generations per language
    /// Real usage: ~5-20 steps, Limit: 64
    pub max_evolution_steps: usize,

    /// Maximum rule-file size in bytes
    /// Real usage: ~2KB, Limit: 64KB
    pub max_rule_text_bytes: usize,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            strict_ipa_validation: true,
            max_evolution_steps: 64,
            max_rule_text_bytes: 64 * 1024,
        }
    }
}

impl EngineOptions {
    /// Create a new EngineOptions with default values
    pub fn new() -> Self {
        Self::default()
    }
}
