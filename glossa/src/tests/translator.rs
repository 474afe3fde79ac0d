use crate::grammar::{GramNumber, PartOfSpeech, Role, TagSet};
use crate::inventory::PhonemeInventory;
use crate::language::{DictionaryEntry, Language};
use crate::parser::{parse_morphology_rule, parse_word_order};
use crate::translator::tokenizer::tokenize;
use crate::translator::Translator;

fn language() -> Language {
    let inventory =
        PhonemeInventory::from_symbols(["p", "t", "k", "m", "n", "s", "a", "i", "u"]).unwrap();
    let mut language = Language::new("test", inventory);

    for (gloss, form, tags) in [
        (
            "dog",
            "paku",
            TagSet {
                pos: Some(PartOfSpeech::Noun),
                role: Some(Role::Subject),
                ..TagSet::default()
            },
        ),
        (
            "bites",
            "nata",
            TagSet {
                pos: Some(PartOfSpeech::Verb),
                ..TagSet::default()
            },
        ),
        (
            "man",
            "simi",
            TagSet {
                pos: Some(PartOfSpeech::Noun),
                role: Some(Role::DirectObject),
                ..TagSet::default()
            },
        ),
        (
            "big",
            "tu",
            TagSet {
                pos: Some(PartOfSpeech::Adjective),
                ..TagSet::default()
            },
        ),
    ] {
        language
            .add_entry(DictionaryEntry {
                gloss: gloss.to_string(),
                form: form.chars().map(|c| c.to_string()).collect(),
                tags,
            })
            .unwrap();
    }
    language
}

#[test]
fn test_tokenizer_strips_edge_punctuation() {
    let tokens = tokenize("Hello, world!");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].core, "Hello");
    assert_eq!(tokens[0].suffix, ",");
    assert_eq!(tokens[1].core, "world");
    assert_eq!(tokens[1].suffix, "!");
    assert_eq!(tokens[0].gloss(), "hello");
}

#[test]
fn test_tokenizer_keeps_interior_punctuation() {
    let tokens = tokenize("\"don't\"");
    assert_eq!(tokens[0].prefix, "\"");
    assert_eq!(tokens[0].core, "don't");
    assert_eq!(tokens[0].suffix, "\"");
}

#[test]
fn test_simple_translation() {
    let response = Translator::translate("dog bites man", &language());
    assert_eq!(response.text, "paku nata simi");
    assert!(response.unresolved.is_empty());
    assert!(response.tokens.iter().all(|t| t.resolved));
}

#[test]
fn test_reordering_to_sov() {
    let mut language = language();
    language
        .install_rule(
            crate::grammar::GrammarRule::WordOrder(parse_word_order("S O V").unwrap()),
            &[],
        )
        .unwrap();

    let response = Translator::translate("dog bites man", &language);
    assert_eq!(response.text, "paku simi nata");
}

#[test]
fn test_token_without_slot_trails_in_source_order() {
    // the order has no V slot, so the verb sorts after the role slots
    // by its source position
    let mut language = language();
    language
        .install_rule(
            crate::grammar::GrammarRule::WordOrder(parse_word_order("O S").unwrap()),
            &[],
        )
        .unwrap();

    let response = Translator::translate("dog bites man", &language);
    assert_eq!(response.text, "simi paku nata");
}

#[test]
fn test_source_language_tags_override_target_entry_tags() {
    // "dog" is the subject in the target dictionary, but the source
    // model says object; the guess wins and moves it to the O slot
    let inventory = PhonemeInventory::from_symbols(["p"]).unwrap();
    let mut source = Language::new("english", inventory);
    source
        .add_entry(DictionaryEntry {
            gloss: "dog".to_string(),
            form: vec!["p".to_string()],
            tags: TagSet {
                pos: Some(PartOfSpeech::Noun),
                role: Some(Role::DirectObject),
                ..TagSet::default()
            },
        })
        .unwrap();

    let response = Translator::translate_between("dog bites man", Some(&source), &language());
    assert_eq!(response.text, "nata paku simi");
}

#[test]
fn test_unresolved_token_passes_through() {
    let response = Translator::translate("dog bites cheese", &language());
    assert_eq!(response.text, "paku nata cheese");
    assert_eq!(response.unresolved.len(), 1);
    assert_eq!(response.unresolved[0].gloss, "cheese");
    assert_eq!(response.unresolved[0].position, 2);
}

#[test]
fn test_punctuation_travels_with_the_word() {
    let mut language = language();
    language
        .install_rule(
            crate::grammar::GrammarRule::WordOrder(parse_word_order("O V S").unwrap()),
            &[],
        )
        .unwrap();

    let response = Translator::translate("Dog bites man!", &language);
    assert_eq!(response.text, "simi! nata paku");
}

#[test]
fn test_morphology_applies_to_matching_entries() {
    let mut language = language();
    language
        .install_rule(
            crate::grammar::GrammarRule::Morphology(
                parse_morphology_rule("[verb] > -ta").unwrap(),
            ),
            &[],
        )
        .unwrap();

    let response = Translator::translate("dog bites man", &language);
    assert_eq!(response.text, "paku natata simi");
}

#[test]
fn test_infix_lands_before_first_vowel() {
    let mut language = language();
    language
        .install_rule(
            crate::grammar::GrammarRule::Morphology(
                parse_morphology_rule("[noun] > -um-").unwrap(),
            ),
            &[],
        )
        .unwrap();

    let response = Translator::translate("dog", &language);
    // p-um-aku
    assert_eq!(response.text, "pumaku");
}

#[test]
fn test_adjective_placement() {
    let mut language = language();
    language
        .install_rule(
            crate::grammar::GrammarRule::WordOrder(parse_word_order("S V O, N ADJ").unwrap()),
            &[],
        )
        .unwrap();

    let response = Translator::translate("big man", &language);
    // 'man' is tagged direct object, 'big' has no role; the adjacency
    // pass puts the adjective after its noun
    assert_eq!(response.text, "simi tu");
}

#[test]
fn test_number_tag_matching() {
    let mut language = language();
    language
        .add_entry(DictionaryEntry {
            gloss: "dogs".to_string(),
            form: vec!["p".into(), "a".into(), "k".into(), "u".into()],
            tags: TagSet {
                pos: Some(PartOfSpeech::Noun),
                number: Some(GramNumber::Plural),
                ..TagSet::default()
            },
        })
        .unwrap();
    language
        .install_rule(
            crate::grammar::GrammarRule::Morphology(
                parse_morphology_rule("[noun plural] > -na").unwrap(),
            ),
            &[],
        )
        .unwrap();

    let response = Translator::translate("dogs", &language);
    assert_eq!(response.text, "pakuna");
}
