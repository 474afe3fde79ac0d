use crate::ast::Span;
use crate::error::GlossaError;
use crate::grammar::{
    Affix, AffixPosition, GramNumber, MorphologyRule, PartOfSpeech, Role, TagSet, Tense,
};
use crate::parser::{split_phonemes, Rule};
use pest::iterators::Pair;
use std::sync::Arc;

/// Every token accepted inside a `[...]` tag pattern
const TAG_VOCABULARY: &[&str] = &[
    "noun",
    "verb",
    "adjective",
    "adverb",
    "pronoun",
    "preposition",
    "conjunction",
    "interjection",
    "article",
    "numeral",
    "particle",
    "auxiliary",
    "determiner",
    "postposition",
    "past",
    "present",
    "future",
    "singular",
    "plural",
    "subject",
    "object",
    "indirect_object",
];

pub fn parse_morph_stmt(
    pair: Pair<Rule>,
    source_id: &str,
    source_text: &Arc<str>,
) -> Result<MorphologyRule, GlossaError> {
    let mut pattern = None;
    let mut affix = None;

    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::tag_set => pattern = Some(parse_tag_set(inner, source_id, source_text)?),
            Rule::affix => affix = Some(parse_affix(inner)?),
            _ => {
                return Err(GlossaError::Engine(format!(
                    "Grammar error: unexpected rule {:?} in morph statement",
                    inner.as_rule()
                )))
            }
        }
    }

    match (pattern, affix) {
        (Some(pattern), Some(affix)) => Ok(MorphologyRule { pattern, affix }),
        _ => Err(GlossaError::Engine(
            "Grammar error: morph statement missing tag set or affix".to_string(),
        )),
    }
}

pub fn parse_tag_set(
    pair: Pair<Rule>,
    source_id: &str,
    source_text: &Arc<str>,
) -> Result<TagSet, GlossaError> {
    let mut tags = TagSet::default();

    for tag_pair in pair.into_inner() {
        if tag_pair.as_rule() != Rule::tag {
            continue;
        }
        let span = Span::from_pest_span(tag_pair.as_span());
        apply_tag(&mut tags, tag_pair.as_str(), span, source_id, source_text)?;
    }

    Ok(tags)
}

fn apply_tag(
    tags: &mut TagSet,
    token: &str,
    span: Span,
    source_id: &str,
    source_text: &Arc<str>,
) -> Result<(), GlossaError> {
    let pos = match token {
        "noun" => Some(PartOfSpeech::Noun),
        "verb" => Some(PartOfSpeech::Verb),
        "adjective" => Some(PartOfSpeech::Adjective),
        "adverb" => Some(PartOfSpeech::Adverb),
        "pronoun" => Some(PartOfSpeech::Pronoun),
        "preposition" => Some(PartOfSpeech::Preposition),
        "conjunction" => Some(PartOfSpeech::Conjunction),
        "interjection" => Some(PartOfSpeech::Interjection),
        "article" => Some(PartOfSpeech::Article),
        "numeral" => Some(PartOfSpeech::Numeral),
        "particle" => Some(PartOfSpeech::Particle),
        "auxiliary" => Some(PartOfSpeech::Auxiliary),
        "determiner" => Some(PartOfSpeech::Determiner),
        "postposition" => Some(PartOfSpeech::Postposition),
        _ => None,
    };
    if let Some(pos) = pos {
        tags.pos = Some(pos);
        return Ok(());
    }

    match token {
        "past" => tags.tense = Some(Tense::Past),
        "present" => tags.tense = Some(Tense::Present),
        "future" => tags.tense = Some(Tense::Future),
        "singular" => tags.number = Some(GramNumber::Singular),
        "plural" => tags.number = Some(GramNumber::Plural),
        "subject" => tags.role = Some(Role::Subject),
        "object" => tags.role = Some(Role::DirectObject),
        "indirect_object" => tags.role = Some(Role::IndirectObject),
        other => {
            return Err(GlossaError::unknown_tag(
                format!("'{}' is not a recognized grammatical tag", other),
                span,
                source_id,
                Arc::clone(source_text),
                format!("did you mean '{}'?", closest_tag(other)),
            ));
        }
    }
    Ok(())
}

/// The vocabulary entry with the smallest edit distance to `token`
fn closest_tag(token: &str) -> &'static str {
    TAG_VOCABULARY
        .iter()
        .min_by_key(|candidate| edit_distance(token, candidate))
        .copied()
        .unwrap_or("noun")
}

fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            curr[j + 1] = substitution.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

fn parse_affix(pair: Pair<Rule>) -> Result<Affix, GlossaError> {
    let inner = pair
        .into_inner()
        .next()
        .ok_or_else(|| GlossaError::Engine("Grammar error: empty affix".to_string()))?;

    let position = match inner.as_rule() {
        Rule::prefix_affix => AffixPosition::Prefix,
        Rule::suffix_affix => AffixPosition::Suffix,
        Rule::infix_affix => AffixPosition::Infix,
        other => {
            return Err(GlossaError::Engine(format!(
                "Grammar error: unexpected rule {:?} in affix",
                other
            )))
        }
    };

    let seq = inner
        .into_inner()
        .find(|p| p.as_rule() == Rule::phoneme_seq)
        .ok_or_else(|| {
            GlossaError::Engine("Grammar error: affix without phoneme text".to_string())
        })?;

    Ok(Affix {
        phonemes: split_phonemes(seq.as_str()),
        position,
    })
}
