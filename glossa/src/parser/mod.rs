use crate::ast::Span;
use crate::error::GlossaError;
use crate::grammar::{EvolutionStep, GrammarRule, MorphologyRule, SoundChangeRule, WordOrderRule};
use crate::options::EngineOptions;
use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser;
use std::sync::Arc;

pub mod morphology;
pub mod sound_change;
pub mod word_order;

#[derive(Parser)]
#[grammar = "src/parser/glossa.pest"]
pub struct GlossaParser;

/// Parsed contents of a rule file
///
/// Standalone word-order, morphology, and free sound-change statements
/// land in `rules`; `step` headers open an [`EvolutionStep`] that
/// collects every subsequent `change` line until the next header.
#[derive(Debug, Clone, Default)]
pub struct RuleFile {
    pub rules: Vec<GrammarRule>,
    pub steps: Vec<EvolutionStep>,
}

pub fn parse_rule_file(
    content: &str,
    source_id: Option<String>,
    options: &EngineOptions,
) -> Result<RuleFile, GlossaError> {
    if content.len() > options.max_rule_text_bytes {
        return Err(GlossaError::LimitExceeded {
            limit_name: "max_rule_text_bytes".to_string(),
            limit_value: format!("{} bytes", options.max_rule_text_bytes),
            actual_value: format!("{} bytes", content.len()),
            suggestion: "Split the rule text into multiple files".to_string(),
        });
    }

    let source_id = source_id.unwrap_or_else(|| "<input>".to_string());
    let source_text: Arc<str> = Arc::from(content);

    let pairs = GlossaParser::parse(Rule::rule_file, content)
        .map_err(|e| pest_error_to_syntax(e, &source_id, &source_text))?;

    let mut file = RuleFile::default();
    let mut open_step: Option<EvolutionStep> = None;

    for pair in pairs {
        if pair.as_rule() != Rule::rule_file {
            continue;
        }
        for statement in pair.into_inner() {
            match statement.as_rule() {
                Rule::order_stmt => {
                    let rule =
                        word_order::parse_order_stmt(statement, &source_id, &source_text)?;
                    file.rules.push(GrammarRule::WordOrder(rule));
                }
                Rule::morph_stmt => {
                    let rule =
                        morphology::parse_morph_stmt(statement, &source_id, &source_text)?;
                    file.rules.push(GrammarRule::Morphology(rule));
                }
                Rule::change_stmt => {
                    let rule =
                        sound_change::parse_change_stmt(statement, &source_id, &source_text)?;
                    match open_step.as_mut() {
                        Some(step) => step.rules.push(rule),
                        None => file.rules.push(GrammarRule::SoundChange(rule)),
                    }
                }
                Rule::step_stmt => {
                    if let Some(step) = open_step.take() {
                        file.steps.push(step);
                    }
                    open_step = Some(EvolutionStep::new(parse_step_label(statement)?));
                }
                Rule::EOI => {}
                _ => {
                    return Err(GlossaError::Engine(format!(
                        "Grammar error: unexpected statement rule {:?}",
                        statement.as_rule()
                    )))
                }
            }
        }
    }

    if let Some(step) = open_step.take() {
        file.steps.push(step);
    }

    Ok(file)
}

/// Parse a single statement of rule text, e.g. `order S V O`
pub fn parse_rule(text: &str) -> Result<GrammarRule, GlossaError> {
    let options = EngineOptions::default();
    let file = parse_rule_file(text, None, &options)?;
    let mut rules = file.rules;
    rules.extend(
        file.steps
            .into_iter()
            .flat_map(|s| s.rules)
            .map(GrammarRule::SoundChange),
    );
    match (rules.len(), rules.into_iter().next()) {
        (1, Some(rule)) => Ok(rule),
        (0, _) => Err(GlossaError::Engine(format!(
            "no rule statement found in '{}'",
            text
        ))),
        _ => Err(GlossaError::Engine(format!(
            "expected a single rule statement, got several in '{}'",
            text
        ))),
    }
}

/// Parse a word-order rule body without the `order` keyword
pub fn parse_word_order(body: &str) -> Result<WordOrderRule, GlossaError> {
    let text = format!("order {}", body);
    match parse_rule(&text)? {
        GrammarRule::WordOrder(rule) => Ok(rule),
        other => Err(GlossaError::Engine(format!(
            "expected a word-order rule, got a {} rule",
            other.kind()
        ))),
    }
}

/// Parse a morphology rule body without the `morph` keyword
pub fn parse_morphology_rule(body: &str) -> Result<MorphologyRule, GlossaError> {
    let text = format!("morph {}", body);
    match parse_rule(&text)? {
        GrammarRule::Morphology(rule) => Ok(rule),
        other => Err(GlossaError::Engine(format!(
            "expected a morphology rule, got a {} rule",
            other.kind()
        ))),
    }
}

/// Parse a bare tag list such as `noun subject` into a tag set
pub fn parse_tags(body: &str) -> Result<crate::grammar::TagSet, GlossaError> {
    let text = format!("[{}]", body.trim());
    let source_text: Arc<str> = Arc::from(text.as_str());
    let pair = GlossaParser::parse(Rule::tag_set, &text)
        .map_err(|e| pest_error_to_syntax(e, "<tags>", &source_text))?
        .next()
        .ok_or_else(|| GlossaError::Engine(format!("no parse result for tags '{}'", body)))?;
    morphology::parse_tag_set(pair, "<tags>", &source_text)
}

/// Parse a sound-change rule body without the `change` keyword
pub fn parse_sound_change_rule(body: &str) -> Result<SoundChangeRule, GlossaError> {
    let text = format!("change {}", body);
    match parse_rule(&text)? {
        GrammarRule::SoundChange(rule) => Ok(rule),
        other => Err(GlossaError::Engine(format!(
            "expected a sound-change rule, got a {} rule",
            other.kind()
        ))),
    }
}

/// Split raw phoneme text into one string per symbol
///
/// Combining diacritics and modifier letters attach to the preceding base
/// character, so `t̪ʰa` yields `["t̪ʰ", "a"]`. Segmentation against an
/// inventory (which also knows multi-character symbols like affricates)
/// happens later, at validation time.
pub(crate) fn split_phonemes(text: &str) -> Vec<String> {
    let mut symbols: Vec<String> = Vec::new();
    for ch in text.chars() {
        if is_attaching_mark(ch) {
            if let Some(last) = symbols.last_mut() {
                last.push(ch);
                continue;
            }
        }
        symbols.push(ch.to_string());
    }
    symbols
}

fn is_attaching_mark(ch: char) -> bool {
    matches!(ch,
        '\u{0300}'..='\u{036F}'
        | '\u{02B0}'..='\u{02FF}'
        | '\u{1AB0}'..='\u{1AFF}'
        | '\u{1DC0}'..='\u{1DFF}'
        | '\u{20D0}'..='\u{20FF}')
}

fn parse_step_label(pair: Pair<Rule>) -> Result<String, GlossaError> {
    for inner in pair.into_inner() {
        if inner.as_rule() == Rule::step_label {
            return Ok(inner.as_str().trim().to_string());
        }
    }
    Err(GlossaError::Engine(
        "Grammar error: step statement without a label".to_string(),
    ))
}

fn pest_error_to_syntax(
    e: pest::error::Error<Rule>,
    source_id: &str,
    source_text: &Arc<str>,
) -> GlossaError {
    let span = match e.line_col {
        pest::error::LineColLocation::Pos((line, col)) => Span {
            start: 0,
            end: 0,
            line,
            col,
        },
        pest::error::LineColLocation::Span((start_line, start_col), (_, _)) => Span {
            start: 0,
            end: 0,
            line: start_line,
            col: start_col,
        },
    };

    GlossaError::syntax(
        format!("Parse error: {}", e.variant),
        span,
        source_id,
        Arc::clone(source_text),
    )
}
