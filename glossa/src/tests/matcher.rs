use crate::evolution::matcher::rewrite;
use crate::inventory::PhonemeInventory;
use crate::parser::parse_sound_change_rule;

fn inventory() -> PhonemeInventory {
    PhonemeInventory::from_symbols(["p", "t", "k", "d", "n", "s", "a", "i", "u"]).unwrap()
}

fn form(s: &str) -> Vec<String> {
    s.chars().map(|c| c.to_string()).collect()
}

#[test]
fn test_intervocalic_voicing() {
    let rule = parse_sound_change_rule("t > d / V_V").unwrap();
    assert_eq!(rewrite(&form("pata"), &rule, &inventory()), form("pada"));
    // word-final and word-initial 't' are not intervocalic
    assert_eq!(rewrite(&form("tat"), &rule, &inventory()), form("tat"));
}

#[test]
fn test_unconditional_change_hits_every_occurrence() {
    let rule = parse_sound_change_rule("t > d").unwrap();
    assert_eq!(rewrite(&form("tata"), &rule, &inventory()), form("dada"));
}

#[test]
fn test_inserted_target_is_never_rematched() {
    let rule = parse_sound_change_rule("a > aa / _").unwrap();
    assert_eq!(rewrite(&form("a"), &rule, &inventory()), form("aa"));
    assert_eq!(rewrite(&form("pata"), &rule, &inventory()), form("paataa"));
}

#[test]
fn test_deletion() {
    let rule = parse_sound_change_rule("a > \u{2205} / _#").unwrap();
    assert_eq!(rewrite(&form("pata"), &rule, &inventory()), form("pat"));
    // only the final vowel goes
    assert_eq!(rewrite(&form("apa"), &rule, &inventory()), form("ap"));
}

#[test]
fn test_word_initial_boundary() {
    let rule = parse_sound_change_rule("k > t / #_").unwrap();
    assert_eq!(rewrite(&form("kaka"), &rule, &inventory()), form("taka"));
}

#[test]
fn test_left_context_reads_rewritten_prefix() {
    // deleting the vowel makes the next 't' word-initial in the output,
    // but contexts look at the rewritten prefix, not the input
    let rule = parse_sound_change_rule("t > d / a_").unwrap();
    assert_eq!(rewrite(&form("atta"), &rule, &inventory()), form("adta"));
}

#[test]
fn test_multi_symbol_source() {
    let rule = parse_sound_change_rule("nt > d").unwrap();
    assert_eq!(rewrite(&form("panta"), &rule, &inventory()), form("pada"));
    // no partial matches
    assert_eq!(rewrite(&form("pan"), &rule, &inventory()), form("pan"));
}

#[test]
fn test_consonant_class_context() {
    let rule = parse_sound_change_rule("a > i / C_C").unwrap();
    assert_eq!(rewrite(&form("pat"), &rule, &inventory()), form("pit"));
    assert_eq!(rewrite(&form("paa"), &rule, &inventory()), form("paa"));
}

#[test]
fn test_literal_symbol_context() {
    let rule = parse_sound_change_rule("t > s / _i").unwrap();
    assert_eq!(rewrite(&form("tita"), &rule, &inventory()), form("sita"));
}

#[test]
fn test_overlapping_matches_do_not_chain() {
    // 'aa > a' halves runs instead of collapsing them entirely: the scan
    // resumes after each replacement
    let rule = parse_sound_change_rule("aa > a").unwrap();
    assert_eq!(rewrite(&form("aaaa"), &rule, &inventory()), form("aa"));
    assert_eq!(rewrite(&form("aaa"), &rule, &inventory()), form("aa"));
}
