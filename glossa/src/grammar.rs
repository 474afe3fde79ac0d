use crate::ipa::SymbolClass;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Grammatical role slot in a word-order rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Subject,
    Verb,
    DirectObject,
    IndirectObject,
}

impl Role {
    /// Returns a human-readable name for the role
    pub fn name(&self) -> &'static str {
        match self {
            Role::Subject => "subject",
            Role::Verb => "verb",
            Role::DirectObject => "direct object",
            Role::IndirectObject => "indirect object",
        }
    }

    /// The canonical rule-text token for this role
    pub fn token(&self) -> &'static str {
        match self {
            Role::Subject => "S",
            Role::Verb => "V",
            Role::DirectObject => "O",
            Role::IndirectObject => "IO",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// Adjective placement relative to the noun it modifies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModifierOrder {
    AdjectiveNoun,
    NounAdjective,
}

impl fmt::Display for ModifierOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModifierOrder::AdjectiveNoun => write!(f, "ADJ N"),
            ModifierOrder::NounAdjective => write!(f, "N ADJ"),
        }
    }
}

/// Canonical constituent order of a sentence, plus optional modifier placement
///
/// Exactly one word-order rule is active per language; replacing it never
/// rewrites existing dictionary entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordOrderRule {
    pub roles: Vec<Role>,
    pub modifier: Option<ModifierOrder>,
}

impl WordOrderRule {
    /// The default order used for a freshly created language
    pub fn svo() -> Self {
        Self {
            roles: vec![Role::Subject, Role::Verb, Role::DirectObject],
            modifier: None,
        }
    }

    pub fn contains_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

impl fmt::Display for WordOrderRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tokens: Vec<&str> = self.roles.iter().map(|r| r.token()).collect();
        write!(f, "{}", tokens.join(" "))?;
        if let Some(modifier) = &self.modifier {
            if !self.roles.is_empty() {
                write!(f, ", ")?;
            }
            write!(f, "{}", modifier)?;
        }
        Ok(())
    }
}

/// Parts of speech recognized by tag patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Pronoun,
    Preposition,
    Conjunction,
    Interjection,
    Article,
    Numeral,
    Particle,
    Auxiliary,
    Determiner,
    Postposition,
}

impl PartOfSpeech {
    pub fn name(&self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adjective",
            PartOfSpeech::Adverb => "adverb",
            PartOfSpeech::Pronoun => "pronoun",
            PartOfSpeech::Preposition => "preposition",
            PartOfSpeech::Conjunction => "conjunction",
            PartOfSpeech::Interjection => "interjection",
            PartOfSpeech::Article => "article",
            PartOfSpeech::Numeral => "numeral",
            PartOfSpeech::Particle => "particle",
            PartOfSpeech::Auxiliary => "auxiliary",
            PartOfSpeech::Determiner => "determiner",
            PartOfSpeech::Postposition => "postposition",
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tense {
    Past,
    Present,
    Future,
}

impl Tense {
    pub fn name(&self) -> &'static str {
        match self {
            Tense::Past => "past",
            Tense::Present => "present",
            Tense::Future => "future",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GramNumber {
    Singular,
    Plural,
}

impl GramNumber {
    pub fn name(&self) -> &'static str {
        match self {
            GramNumber::Singular => "singular",
            GramNumber::Plural => "plural",
        }
    }
}

/// Grammatical tags attached to a dictionary entry or matched by a
/// morphology pattern
///
/// All fields optional; a pattern field of `None` matches anything, and a
/// fully-`None` tag set is the "unknown" default for unresolved tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TagSet {
    pub role: Option<Role>,
    pub pos: Option<PartOfSpeech>,
    pub tense: Option<Tense>,
    pub number: Option<GramNumber>,
}

impl TagSet {
    pub fn is_unknown(&self) -> bool {
        self.role.is_none() && self.pos.is_none() && self.tense.is_none() && self.number.is_none()
    }

    /// True when every tag this pattern pins down is carried by `tags`
    pub fn matches(&self, tags: &TagSet) -> bool {
        fn field_matches<T: PartialEq + Copy>(pattern: Option<T>, value: Option<T>) -> bool {
            match pattern {
                None => true,
                Some(p) => value == Some(p),
            }
        }
        field_matches(self.role, tags.role)
            && field_matches(self.pos, tags.pos)
            && field_matches(self.tense, tags.tense)
            && field_matches(self.number, tags.number)
    }
}

impl fmt::Display for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tokens: Vec<&str> = Vec::new();
        if let Some(pos) = &self.pos {
            tokens.push(pos.name());
        }
        if let Some(tense) = &self.tense {
            tokens.push(tense.name());
        }
        if let Some(number) = &self.number {
            tokens.push(number.name());
        }
        if let Some(role) = &self.role {
            tokens.push(role.name());
        }
        write!(f, "[{}]", tokens.join(" "))
    }
}

/// Where an affix attaches to a word form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AffixPosition {
    Prefix,
    Suffix,
    /// Inserted before the form's first vowel; vowel-less forms take the
    /// affix as a suffix
    Infix,
}

/// A literal affix: phoneme sequence plus attachment position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Affix {
    pub phonemes: Vec<String>,
    pub position: AffixPosition,
}

impl fmt::Display for Affix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body = self.phonemes.concat();
        match self.position {
            AffixPosition::Prefix => write!(f, "{}-", body),
            AffixPosition::Suffix => write!(f, "-{}", body),
            AffixPosition::Infix => write!(f, "-{}-", body),
        }
    }
}

/// Tag pattern plus affix transformation
///
/// Rules are kept in an ordered list; application order matters because
/// later affixes attach outside earlier ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MorphologyRule {
    pub pattern: TagSet,
    pub affix: Affix,
}

impl fmt::Display for MorphologyRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} > {}", self.pattern, self.affix)
    }
}

/// One context element on one side of the `_` position marker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContextSpec {
    /// `#` - the word edge
    Boundary,
    /// `V` or `C` - any inventory symbol of that class
    Class(SymbolClass),
    /// A literal inventory symbol
    Symbol(String),
}

impl fmt::Display for ContextSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContextSpec::Boundary => write!(f, "#"),
            ContextSpec::Class(class) => write!(f, "{}", class),
            ContextSpec::Symbol(symbol) => write!(f, "{}", symbol),
        }
    }
}

/// Phonological environment of a sound-change rule
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Environment {
    pub left: Option<ContextSpec>,
    pub right: Option<ContextSpec>,
}

impl Environment {
    /// Applies in any environment
    pub fn anywhere() -> Self {
        Self::default()
    }

    pub fn is_unconditional(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(left) = &self.left {
            write!(f, "{}", left)?;
        }
        write!(f, "_")?;
        if let Some(right) = &self.right {
            write!(f, "{}", right)?;
        }
        Ok(())
    }
}

/// A phonological rewrite rule: `SOURCE > TARGET / ENVIRONMENT`
///
/// An empty target denotes deletion. The Display impl re-serializes to
/// canonical rule text, so parse -> format -> parse is the identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoundChangeRule {
    pub source: Vec<String>,
    pub target: Vec<String>,
    pub environment: Environment,
}

impl fmt::Display for SoundChangeRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let target = if self.target.is_empty() {
            "∅".to_string()
        } else {
            self.target.concat()
        };
        write!(f, "{} > {}", self.source.concat(), target)?;
        if !self.environment.is_unconditional() {
            write!(f, " / {}", self.environment)?;
        }
        Ok(())
    }
}

/// Closed family of rule objects produced by the parser
///
/// A sum type rather than a trait hierarchy: the parser and the language
/// model both need exhaustive handling per variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GrammarRule {
    WordOrder(WordOrderRule),
    Morphology(MorphologyRule),
    SoundChange(SoundChangeRule),
}

impl GrammarRule {
    /// Returns a human-readable name for the rule kind
    pub fn kind(&self) -> &'static str {
        match self {
            GrammarRule::WordOrder(_) => "word order",
            GrammarRule::Morphology(_) => "morphology",
            GrammarRule::SoundChange(_) => "sound change",
        }
    }
}

impl fmt::Display for GrammarRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrammarRule::WordOrder(rule) => write!(f, "order {}", rule),
            GrammarRule::Morphology(rule) => write!(f, "morph {}", rule),
            GrammarRule::SoundChange(rule) => write!(f, "change {}", rule),
        }
    }
}

/// An ordered list of sound changes applied as one generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionStep {
    pub label: String,
    pub rules: Vec<SoundChangeRule>,
}

impl EvolutionStep {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            rules: Vec::new(),
        }
    }

    pub fn with_rule(mut self, rule: SoundChangeRule) -> Self {
        self.rules.push(rule);
        self
    }
}

impl fmt::Display for EvolutionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "step {}", self.label)?;
        for rule in &self.rules {
            writeln!(f, "change {}", rule)?;
        }
        Ok(())
    }
}
