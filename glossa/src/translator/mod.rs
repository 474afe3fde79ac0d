use crate::grammar::{AffixPosition, ModifierOrder, MorphologyRule, PartOfSpeech, TagSet};
use crate::ipa::SymbolClass;
use crate::language::Language;
use crate::response::{TokenRecord, TranslationResponse, UnresolvedToken};

pub mod tokenizer;

use tokenizer::RawToken;

/// Best-effort translator into a constructed language
///
/// Resolution misses never abort a pass: the token passes through with
/// its source text and is listed in the response's `unresolved` set.
pub struct Translator;

struct WorkToken {
    raw: RawToken,
    record: TokenRecord,
}

impl Translator {
    /// Translate with the target language's own dictionary tags
    pub fn translate(text: &str, language: &Language) -> TranslationResponse {
        Self::translate_between(text, None, language)
    }

    /// Translate using a source language model for tag guessing
    ///
    /// When `source` is given, each token's tags are guessed from the
    /// source dictionary before the target lookup; without one the tags
    /// come from the matched target entry.
    pub fn translate_between(
        text: &str,
        source: Option<&Language>,
        target: &Language,
    ) -> TranslationResponse {
        let language = target;
        let mut unresolved = Vec::new();
        let mut work: Vec<WorkToken> = Vec::new();

        for raw in tokenizer::tokenize(text) {
            let gloss = raw.gloss();
            if gloss.is_empty() {
                // bare punctuation token
                work.push(WorkToken {
                    record: TokenRecord {
                        gloss,
                        form: Vec::new(),
                        tags: TagSet::default(),
                        resolved: false,
                        source_position: raw.position,
                    },
                    raw,
                });
                continue;
            }

            let guessed = source
                .and_then(|s| s.lookup(&gloss, &TagSet::default()))
                .map(|entry| entry.tags);
            let record = match language.lookup(&gloss, &guessed.unwrap_or_default()) {
                Some(entry) => {
                    let tags = guessed.unwrap_or(entry.tags);
                    let form =
                        apply_morphology(&entry.form, &tags, language.morphology_rules(), language);
                    TokenRecord {
                        gloss: gloss.clone(),
                        form,
                        tags,
                        resolved: true,
                        source_position: raw.position,
                    }
                }
                None => {
                    unresolved.push(UnresolvedToken {
                        gloss: gloss.clone(),
                        position: raw.position,
                    });
                    TokenRecord {
                        gloss,
                        form: Vec::new(),
                        tags: TagSet::default(),
                        resolved: false,
                        source_position: raw.position,
                    }
                }
            };
            work.push(WorkToken { record, raw });
        }

        reorder(&mut work, language);

        let text = work
            .iter()
            .map(render)
            .collect::<Vec<String>>()
            .join(" ");

        TranslationResponse {
            text,
            tokens: work.into_iter().map(|t| t.record).collect(),
            unresolved,
        }
    }
}

/// Apply matching morphology rules in installation order
///
/// Later affixes attach outside earlier ones. An infix lands before the
/// form's first vowel; a vowel-less form takes it as a suffix.
fn apply_morphology(
    form: &[String],
    tags: &TagSet,
    rules: &[MorphologyRule],
    language: &Language,
) -> Vec<String> {
    let mut form = form.to_vec();

    for rule in rules {
        if !rule.pattern.matches(tags) {
            continue;
        }
        let affix = &rule.affix.phonemes;
        match rule.affix.position {
            AffixPosition::Prefix => {
                let mut with_prefix = affix.clone();
                with_prefix.extend(form);
                form = with_prefix;
            }
            AffixPosition::Suffix => form.extend(affix.iter().cloned()),
            AffixPosition::Infix => {
                let at = form
                    .iter()
                    .position(|s| classify(s, language) == Some(SymbolClass::Vowel))
                    .unwrap_or(form.len());
                form.splice(at..at, affix.iter().cloned());
            }
        }
    }

    form
}

fn classify(symbol: &str, language: &Language) -> Option<SymbolClass> {
    language
        .inventory
        .classify(symbol)
        .or_else(|| crate::ipa::features_for(symbol).map(|f| f.class()))
}

/// Rearrange tokens to the language's word order
///
/// Role-bearing tokens are grouped per role in the order the word-order
/// rule lists them; everything else follows in source order. A final
/// adjacency pass enforces adjective placement when the rule pins it
/// down.
fn reorder(work: &mut Vec<WorkToken>, language: &Language) {
    let order = language.current_word_order();

    work.sort_by_key(|t| {
        // a verb without an explicit role tag still fills the V slot
        let role = t.record.tags.role.or_else(|| {
            (t.record.tags.pos == Some(PartOfSpeech::Verb)).then_some(crate::grammar::Role::Verb)
        });
        let slot = role
            .and_then(|role| order.roles.iter().position(|r| *r == role))
            .unwrap_or(order.roles.len());
        (slot, t.record.source_position)
    });

    if let Some(modifier) = order.modifier {
        for i in 0..work.len().saturating_sub(1) {
            let a = work[i].record.tags.pos;
            let b = work[i + 1].record.tags.pos;
            let swap = match modifier {
                ModifierOrder::AdjectiveNoun => {
                    a == Some(PartOfSpeech::Noun) && b == Some(PartOfSpeech::Adjective)
                }
                ModifierOrder::NounAdjective => {
                    a == Some(PartOfSpeech::Adjective) && b == Some(PartOfSpeech::Noun)
                }
            };
            if swap {
                work.swap(i, i + 1);
            }
        }
    }
}

fn render(token: &WorkToken) -> String {
    let body = if token.record.resolved {
        token.record.form.concat()
    } else {
        token.raw.core.clone()
    };
    format!("{}{}{}", token.raw.prefix, body, token.raw.suffix)
}
