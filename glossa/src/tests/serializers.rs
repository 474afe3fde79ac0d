use crate::grammar::TagSet;
use crate::language::DictionaryEntry;
use crate::serializers::{from_json, to_json, SNAPSHOT_VERSION};
use crate::{Engine, GlossaError};

fn engine_with_state() -> Engine {
    let mut engine = Engine::new();
    engine.create_language("elvish", ["p", "t", "d", "a", "i"]).unwrap();
    engine
        .add_entry(
            "elvish",
            DictionaryEntry {
                gloss: "water".to_string(),
                form: vec!["p".into(), "a".into(), "t".into(), "a".into()],
                tags: TagSet::default(),
            },
        )
        .unwrap();
    engine
        .add_rule_text(
            "elvish",
            "order S O V\nmorph [verb past] > -ta\nstep lenition\nchange t > d / V_V",
            None,
        )
        .unwrap();
    engine
}

#[test]
fn test_snapshot_round_trip() {
    let mut engine = engine_with_state();
    engine.apply_staged("elvish").unwrap();

    let json = to_json(&engine.export_snapshot()).unwrap();
    let snapshot = from_json(&json).unwrap();

    let mut restored = Engine::new();
    restored.import_snapshot(snapshot).unwrap();

    let original = engine.language("elvish").unwrap();
    let imported = restored.language("elvish").unwrap();
    assert_eq!(original, imported);
    assert_eq!(
        engine.history("elvish").unwrap(),
        restored.history("elvish").unwrap()
    );
}

#[test]
fn test_snapshot_preserves_staged_steps() {
    let engine = engine_with_state();
    let snapshot = engine.export_snapshot();
    assert_eq!(snapshot.languages[0].staged_steps.len(), 1);

    let mut restored = Engine::new();
    restored.import_snapshot(snapshot).unwrap();
    assert_eq!(restored.staged_steps("elvish").unwrap().len(), 1);

    // the staged step still applies after the round trip
    restored.apply_staged("elvish").unwrap();
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
}

#[test]
fn test_version_mismatch_is_rejected() {
    let engine = engine_with_state();
    let json = to_json(&engine.export_snapshot()).unwrap();
    let bumped = json.replacen(
        &format!("\"version\": {}", SNAPSHOT_VERSION),
        &format!("\"version\": {}", SNAPSHOT_VERSION + 1),
        1,
    );
    assert!(matches!(from_json(&bumped), Err(GlossaError::Engine(_))));
}

#[test]
fn test_import_rejects_corrupt_language() {
    let engine = engine_with_state();
    let mut snapshot = engine.export_snapshot();
    // inject a form symbol that is not in the inventory
    snapshot.languages[0]
        .language
        .dictionary
        .add(DictionaryEntry {
            gloss: "ghost".to_string(),
            form: vec!["z".to_string()],
            tags: TagSet::default(),
        })
        .unwrap();

    let mut restored = Engine::new();
    let err = restored.import_snapshot(snapshot).unwrap_err();
    assert!(matches!(err, GlossaError::InvalidSymbol(_)));
}

#[test]
fn test_import_rejects_corrupt_history() {
    let engine = engine_with_state();
    let json = to_json(&engine.export_snapshot()).unwrap();
    // point the history at a generation that does not exist
    let corrupt = json.replacen("\"current\": 0", "\"current\": 9", 1);

    let mut restored = Engine::new();
    let err = restored.import_snapshot(from_json(&corrupt).unwrap()).unwrap_err();
    assert!(matches!(err, GlossaError::Engine(_)));
    assert!(restored.list_languages().is_empty());
}

#[test]
fn test_malformed_json_is_an_engine_error() {
    assert!(matches!(from_json("{"), Err(GlossaError::Engine(_))));
}
