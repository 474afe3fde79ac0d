use glossa::{parse_morphology_rule, parse_sound_change_rule, PhonemeInventory};

#[test]
fn unknown_tag_message_names_the_closest_tag() {
    let err = parse_morphology_rule("[vreb] > -ta").unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"Unknown tag: 'vreb' is not a recognized grammatical tag (suggestion: did you mean 'verb'?) at <input>:1:8"
    );
}

#[test]
fn invalid_symbol_message_suggests_the_ipa_grapheme() {
    let err = PhonemeInventory::from_symbols(["g"]).unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"Invalid symbol: 'g' is not a recognized IPA grapheme (suggestion: Did you mean '\u{0261}'?) at <inventory>:0:0"
    );
}

#[test]
fn ambiguous_environment_message_explains_the_limit() {
    let err = parse_sound_change_rule("t > d / #V_V").unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"Ambiguous environment: the left context carries more than one element (suggestion: Each side of '_' takes at most one of '#', 'V', 'C', or a symbol) at <input>:1:16"
    );
}
