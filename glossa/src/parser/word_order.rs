use crate::ast::Span;
use crate::error::GlossaError;
use crate::grammar::{ModifierOrder, Role, WordOrderRule};
use crate::parser::Rule;
use pest::iterators::Pair;
use std::sync::Arc;

pub fn parse_order_stmt(
    pair: Pair<Rule>,
    source_id: &str,
    source_text: &Arc<str>,
) -> Result<WordOrderRule, GlossaError> {
    let mut roles = Vec::new();
    let mut modifier = None;

    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::role_list => {
                for role_pair in inner.into_inner() {
                    let role = parse_role(&role_pair)?;
                    if roles.contains(&role) {
                        return Err(GlossaError::duplicate_role(
                            format!("the {} role appears more than once", role.name()),
                            Span::from_pest_span(role_pair.as_span()),
                            source_id,
                            Arc::clone(source_text),
                        ));
                    }
                    roles.push(role);
                }
            }
            Rule::modifier_order => {
                modifier = Some(parse_modifier_order(inner)?);
            }
            _ => {
                return Err(GlossaError::Engine(format!(
                    "Grammar error: unexpected rule {:?} in order statement",
                    inner.as_rule()
                )))
            }
        }
    }

    Ok(WordOrderRule { roles, modifier })
}

fn parse_role(pair: &Pair<Rule>) -> Result<Role, GlossaError> {
    match pair.as_str() {
        "S" => Ok(Role::Subject),
        "V" => Ok(Role::Verb),
        "O" => Ok(Role::DirectObject),
        "IO" => Ok(Role::IndirectObject),
        other => Err(GlossaError::Engine(format!(
            "Grammar error: unknown role token '{}'",
            other
        ))),
    }
}

fn parse_modifier_order(pair: Pair<Rule>) -> Result<ModifierOrder, GlossaError> {
    let inner = pair.into_inner().next().ok_or_else(|| {
        GlossaError::Engine("Grammar error: empty modifier order".to_string())
    })?;
    match inner.as_rule() {
        Rule::adjective_first => Ok(ModifierOrder::AdjectiveNoun),
        Rule::noun_first => Ok(ModifierOrder::NounAdjective),
        other => Err(GlossaError::Engine(format!(
            "Grammar error: unexpected rule {:?} in modifier order",
            other
        ))),
    }
}
