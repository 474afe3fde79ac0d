use crate::ast::Span;
use crate::error::GlossaError;
use crate::grammar::{ContextSpec, Environment, SoundChangeRule};
use crate::ipa::SymbolClass;
use crate::parser::{split_phonemes, Rule};
use pest::iterators::Pair;
use std::sync::Arc;

pub fn parse_change_stmt(
    pair: Pair<Rule>,
    source_id: &str,
    source_text: &Arc<str>,
) -> Result<SoundChangeRule, GlossaError> {
    let mut source = None;
    let mut target = None;
    let mut environment = Environment::anywhere();

    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::change_source => source = Some(split_phonemes(inner.as_str())),
            Rule::change_target => target = Some(parse_change_target(inner)),
            Rule::environment => {
                environment = parse_environment(inner, source_id, source_text)?;
            }
            _ => {
                return Err(GlossaError::Engine(format!(
                    "Grammar error: unexpected rule {:?} in change statement",
                    inner.as_rule()
                )))
            }
        }
    }

    match source {
        // a missing target is a deletion, same as `∅` / `0`
        Some(source) => Ok(SoundChangeRule {
            source,
            target: target.unwrap_or_default(),
            environment,
        }),
        None => Err(GlossaError::Engine(
            "Grammar error: change statement missing source".to_string(),
        )),
    }
}

fn parse_change_target(pair: Pair<Rule>) -> Vec<String> {
    match pair.into_inner().next() {
        // the bare `∅` / `0` deletion marker
        Some(inner) if inner.as_rule() == Rule::empty_target => Vec::new(),
        Some(inner) => split_phonemes(inner.as_str()),
        None => Vec::new(),
    }
}

fn parse_environment(
    pair: Pair<Rule>,
    source_id: &str,
    source_text: &Arc<str>,
) -> Result<Environment, GlossaError> {
    let mut environment = Environment::anywhere();

    for side in pair.into_inner() {
        let edge = match side.as_rule() {
            Rule::env_left => "left",
            Rule::env_right => "right",
            other => {
                return Err(GlossaError::Engine(format!(
                    "Grammar error: unexpected rule {:?} in environment",
                    other
                )))
            }
        };
        let is_left = edge == "left";
        let span = Span::from_pest_span(side.as_span());

        let mut elements = side.into_inner().peekable();
        let context = match elements.next() {
            None => None,
            Some(first) => {
                if elements.peek().is_some() {
                    return Err(GlossaError::ambiguous_environment(
                        format!("the {} context carries more than one element", edge),
                        span,
                        source_id,
                        Arc::clone(source_text),
                    ));
                }
                Some(parse_context_element(first, source_id, source_text)?)
            }
        };

        if is_left {
            environment.left = context;
        } else {
            environment.right = context;
        }
    }

    Ok(environment)
}

fn parse_context_element(
    pair: Pair<Rule>,
    source_id: &str,
    source_text: &Arc<str>,
) -> Result<ContextSpec, GlossaError> {
    let inner = pair.into_inner().next().ok_or_else(|| {
        GlossaError::Engine("Grammar error: empty environment element".to_string())
    })?;

    match inner.as_rule() {
        Rule::boundary => Ok(ContextSpec::Boundary),
        Rule::class_vowel => Ok(ContextSpec::Class(SymbolClass::Vowel)),
        Rule::class_consonant => Ok(ContextSpec::Class(SymbolClass::Consonant)),
        Rule::env_symbol => {
            let symbols = split_phonemes(inner.as_str());
            if symbols.len() > 1 {
                return Err(GlossaError::ambiguous_environment(
                    format!(
                        "'{}' names more than one symbol for a single context position",
                        inner.as_str()
                    ),
                    Span::from_pest_span(inner.as_span()),
                    source_id,
                    Arc::clone(source_text),
                ));
            }
            Ok(ContextSpec::Symbol(inner.as_str().to_string()))
        }
        other => Err(GlossaError::Engine(format!(
            "Grammar error: unexpected rule {:?} in environment element",
            other
        ))),
    }
}
