use crate::evolution::{Evolver, GenerationHistory, INITIAL_GENERATION};
use crate::grammar::{EvolutionStep, TagSet};
use crate::inventory::PhonemeInventory;
use crate::language::{Dictionary, DictionaryEntry};
use crate::parser::parse_sound_change_rule;
use crate::phonotactics::Phonotactics;
use crate::response::EvolutionDiagnostic;
use crate::GlossaError;

fn entry(gloss: &str, form: &str) -> DictionaryEntry {
    DictionaryEntry {
        gloss: gloss.to_string(),
        form: form.chars().map(|c| c.to_string()).collect(),
        tags: TagSet::default(),
    }
}

fn dictionary(entries: &[(&str, &str)]) -> Dictionary {
    let mut dict = Dictionary::new();
    for (gloss, form) in entries {
        dict.add(entry(gloss, form)).unwrap();
    }
    dict
}

fn inventory() -> PhonemeInventory {
    PhonemeInventory::from_symbols(["p", "t", "k", "d", "a", "i"]).unwrap()
}

fn step(label: &str, rules: &[&str]) -> EvolutionStep {
    let mut step = EvolutionStep::new(label);
    for rule in rules {
        step.rules.push(parse_sound_change_rule(rule).unwrap());
    }
    step
}

#[test]
fn test_apply_step_rewrites_every_entry() {
    let dict = dictionary(&[("water", "pata"), ("stone", "tika")]);
    let (next, report) = Evolver::apply_step(
        &step("lenition", &["t > d / V_V", "k > d / V_V"]),
        &dict,
        &inventory(),
        &Phonotactics::new(),
    );

    let forms: Vec<String> = next.iter().map(|e| e.form.concat()).collect();
    assert_eq!(forms, vec!["pada", "tida"]);
    assert_eq!(report.label, "lenition");
    assert_eq!(report.entries_changed, 2);
    assert!(report.diagnostics.is_empty());
}

#[test]
fn test_step_without_rules_is_the_identity() {
    let dict = dictionary(&[("water", "pata"), ("stone", "tika")]);
    let (next, report) = Evolver::apply_step(
        &step("noop", &[]),
        &dict,
        &inventory(),
        &Phonotactics::new(),
    );

    assert_eq!(next, dict);
    assert_eq!(report.entries_changed, 0);
    assert!(report.diagnostics.is_empty());
}

#[test]
fn test_rules_apply_in_order() {
    // t > d feeds d > i: order matters
    let dict = dictionary(&[("water", "pata")]);
    let (next, _) = Evolver::apply_step(
        &step("chain", &["t > d / V_V", "d > i / V_V"]),
        &dict,
        &inventory(),
        &Phonotactics::new(),
    );
    assert_eq!(next.iter().next().unwrap().form.concat(), "paia");
}

#[test]
fn test_untouched_entry_is_not_counted() {
    let dict = dictionary(&[("water", "pata"), ("sky", "iki")]);
    let (_, report) = Evolver::apply_step(
        &step("voicing", &["t > d / V_V"]),
        &dict,
        &inventory(),
        &Phonotactics::new(),
    );
    assert_eq!(report.entries_changed, 1);
}

#[test]
fn test_entry_with_foreign_symbol_is_skipped_not_dropped() {
    let mut dict = dictionary(&[("water", "pata")]);
    dict.add(DictionaryEntry {
        gloss: "borrowed".to_string(),
        form: vec!["z".to_string(), "a".to_string()],
        tags: TagSet::default(),
    })
    .unwrap();

    let (next, report) = Evolver::apply_step(
        &step("voicing", &["t > d / V_V"]),
        &dict,
        &inventory(),
        &Phonotactics::new(),
    );

    assert_eq!(next.len(), 2);
    assert_eq!(next.lookup("borrowed", &TagSet::default()).unwrap().form.concat(), "za");
    assert!(matches!(
        report.diagnostics.as_slice(),
        [EvolutionDiagnostic::SkippedEntry { gloss, .. }] if gloss == "borrowed"
    ));
}

#[test]
fn test_emptied_form_is_reported() {
    let dict = dictionary(&[("ah", "a")]);
    let (next, report) = Evolver::apply_step(
        &step("loss", &["a > \u{2205}"]),
        &dict,
        &inventory(),
        &Phonotactics::new(),
    );
    assert!(next.iter().next().unwrap().form.is_empty());
    assert!(matches!(
        report.diagnostics.as_slice(),
        [EvolutionDiagnostic::EmptyForm { gloss }] if gloss == "ah"
    ));
}

#[test]
fn test_phonotactic_violations_are_reported_not_blocked() {
    let phonotactics = Phonotactics {
        illegal_sequences: vec!["td".to_string()],
        ..Phonotactics::new()
    };
    let dict = dictionary(&[("edge", "atida")]);
    let (next, report) = Evolver::apply_step(
        &step("syncope", &["i > \u{2205} / t_d"]),
        &dict,
        &inventory(),
        &phonotactics,
    );
    assert_eq!(next.iter().next().unwrap().form.concat(), "atda");
    assert!(matches!(
        report.diagnostics.as_slice(),
        [EvolutionDiagnostic::PhonotacticViolation { sequence, .. }] if sequence == "td"
    ));
}

#[test]
fn test_history_records_and_reverts() {
    let initial = dictionary(&[("water", "pata")]);
    let mut history = GenerationHistory::new(initial.clone());
    assert_eq!(history.current_label(), INITIAL_GENERATION);
    assert_eq!(history.steps_applied(), 0);

    let (gen1, report) = Evolver::apply_step(
        &step("voicing", &["t > d / V_V"]),
        &initial,
        &inventory(),
        &Phonotactics::new(),
    );
    history.record("voicing".to_string(), gen1.clone(), report);
    assert_eq!(history.current_label(), "voicing");
    assert_eq!(history.steps_applied(), 1);

    let reverted = history.revert(INITIAL_GENERATION).unwrap();
    assert_eq!(reverted.dictionary, initial);
    // the later generation is still there
    assert_eq!(history.steps_applied(), 1);
    history.revert("voicing").unwrap();
    assert_eq!(history.current().dictionary, gen1);
}

#[test]
fn test_revert_to_unknown_label() {
    let mut history = GenerationHistory::new(Dictionary::new());
    let err = history.revert("no-such-step").unwrap_err();
    assert!(matches!(err, GlossaError::GenerationNotFound(_)));
}

#[test]
fn test_revert_picks_latest_occurrence_of_label() {
    let mut history = GenerationHistory::new(dictionary(&[("water", "pata")]));
    history.record(
        "tweak".to_string(),
        dictionary(&[("water", "pada")]),
        Default::default(),
    );
    history.record(
        "tweak".to_string(),
        dictionary(&[("water", "pada")]),
        Default::default(),
    );

    let generation = history.revert("tweak").unwrap();
    assert_eq!(
        generation.dictionary.iter().next().unwrap().form.concat(),
        "pada"
    );
}
