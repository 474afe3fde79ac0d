use glossa::{DictionaryEntry, Engine, PartOfSpeech, Role, TagSet, INITIAL_GENERATION};

fn entry(gloss: &str, form: &str, tags: TagSet) -> DictionaryEntry {
    DictionaryEntry {
        gloss: gloss.to_string(),
        form: form.chars().map(|c| c.to_string()).collect(),
        tags,
    }
}

#[test]
fn full_conlang_workflow() {
    let mut engine = Engine::new();
    engine
        .create_language("elvish", ["p", "t", "k", "d", "m", "n", "s", "a", "i", "u"])
        .unwrap();

    engine
        .add_entry(
            "elvish",
            entry(
                "wolf",
                "takum",
                TagSet {
                    pos: Some(PartOfSpeech::Noun),
                    role: Some(Role::Subject),
                    ..TagSet::default()
                },
            ),
        )
        .unwrap();
    engine
        .add_entry(
            "elvish",
            entry(
                "hunts",
                "pisa",
                TagSet {
                    pos: Some(PartOfSpeech::Verb),
                    ..TagSet::default()
                },
            ),
        )
        .unwrap();
    engine
        .add_entry(
            "elvish",
            entry(
                "deer",
                "nuti",
                TagSet {
                    pos: Some(PartOfSpeech::Noun),
                    role: Some(Role::DirectObject),
                    ..TagSet::default()
                },
            ),
        )
        .unwrap();

    // grammar: verb-final order, past-tense suffix
    engine
        .add_rule_text(
            "elvish",
            "order S O V\nmorph [verb past] > -ta",
            Some("grammar.rules".to_string()),
        )
        .unwrap();

    let translated = engine.translate("elvish", "wolf hunts deer").unwrap();
    assert_eq!(translated.text, "takum nuti pisa");
    assert!(translated.unresolved.is_empty());

    // evolve the language by two sound changes
    engine
        .add_rule_text(
            "elvish",
            "step lenition\nchange t > d / V_V\nchange k > d / V_V",
            Some("history.rules".to_string()),
        )
        .unwrap();
    let reports = engine.apply_staged("elvish").unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].entries_changed, 2);

    let evolved = engine.translate("elvish", "wolf hunts deer").unwrap();
    assert_eq!(evolved.text, "tadum nudi pisa");

    // the original generation is still reachable
    engine.revert("elvish", INITIAL_GENERATION).unwrap();
    let reverted = engine.translate("elvish", "wolf hunts deer").unwrap();
    assert_eq!(reverted.text, "takum nuti pisa");
}

#[test]
fn snapshot_survives_export_import() {
    let mut engine = Engine::new();
    engine.create_language("elvish", ["p", "t", "d", "a"]).unwrap();
    engine
        .add_entry("elvish", entry("water", "pata", TagSet::default()))
        .unwrap();
    engine
        .add_rule_text("elvish", "step lenition\nchange t > d / V_V", None)
        .unwrap();
    engine.apply_staged("elvish").unwrap();

    let json = glossa::to_json(&engine.export_snapshot()).unwrap();

    let mut restored = Engine::new();
    restored.import_snapshot(glossa::from_json(&json).unwrap()).unwrap();

    assert_eq!(restored.list_languages(), vec!["elvish"]);
    assert_eq!(
        restored
            .language("elvish")
            .unwrap()
            .lookup("water", &TagSet::default())
            .unwrap()
            .form
            .concat(),
        "pada"
    );
    restored.revert("elvish", INITIAL_GENERATION).unwrap();
    assert_eq!(
        restored
            .language("elvish")
            .unwrap()
            .lookup("water", &TagSet::default())
            .unwrap()
            .form
            .concat(),
        "pata"
    );
}
