use crate::grammar::{ContextSpec, SoundChangeRule};
use crate::inventory::PhonemeInventory;
use crate::ipa::SymbolClass;

/// Apply one sound-change rule to a segmented form
///
/// Matches are found left to right and never overlap; the scan resumes
/// immediately after a replaced span, so an inserted target is never
/// matched again (`a > aa / _` turns "a" into "aa", not an infinite
/// expansion). Left context is read from the already-rewritten prefix,
/// right context from the not-yet-scanned suffix.
pub fn rewrite(
    form: &[String],
    rule: &SoundChangeRule,
    inventory: &PhonemeInventory,
) -> Vec<String> {
    if rule.source.is_empty() {
        return form.to_vec();
    }

    let mut out: Vec<String> = Vec::with_capacity(form.len());
    let mut i = 0;

    while i < form.len() {
        if matches_at(form, i, rule, &out, inventory) {
            out.extend(rule.target.iter().cloned());
            i += rule.source.len();
        } else {
            out.push(form[i].clone());
            i += 1;
        }
    }

    out
}

fn matches_at(
    form: &[String],
    i: usize,
    rule: &SoundChangeRule,
    rewritten: &[String],
    inventory: &PhonemeInventory,
) -> bool {
    let end = i + rule.source.len();
    if end > form.len() {
        return false;
    }
    if form[i..end] != rule.source[..] {
        return false;
    }

    let left_symbol = rewritten.last().map(String::as_str);
    let right_symbol = form.get(end).map(String::as_str);

    context_matches(rule.environment.left.as_ref(), left_symbol, inventory)
        && context_matches(rule.environment.right.as_ref(), right_symbol, inventory)
}

fn context_matches(
    spec: Option<&ContextSpec>,
    symbol: Option<&str>,
    inventory: &PhonemeInventory,
) -> bool {
    match spec {
        None => true,
        Some(ContextSpec::Boundary) => symbol.is_none(),
        Some(ContextSpec::Class(class)) => match symbol {
            Some(symbol) => classify(symbol, inventory) == Some(*class),
            None => false,
        },
        Some(ContextSpec::Symbol(expected)) => symbol == Some(expected.as_str()),
    }
}

/// Class lookup falls back to the universal chart for symbols a step has
/// introduced but the inventory does not (yet) carry
fn classify(symbol: &str, inventory: &PhonemeInventory) -> Option<SymbolClass> {
    inventory
        .classify(symbol)
        .or_else(|| crate::ipa::features_for(symbol).map(|f| f.class()))
}
