use crate::inventory::PhonemeInventory;
use crate::ipa::SymbolClass;
use crate::GlossaError;

#[test]
fn test_add_and_classify() {
    let inventory = PhonemeInventory::from_symbols(["p", "t", "a", "i"]).unwrap();
    assert_eq!(inventory.len(), 4);
    assert_eq!(inventory.classify("p"), Some(SymbolClass::Consonant));
    assert_eq!(inventory.classify("a"), Some(SymbolClass::Vowel));
    assert_eq!(inventory.classify("z"), None);
}

#[test]
fn test_rejects_unrecognized_symbol() {
    let mut inventory = PhonemeInventory::new();
    let err = inventory.add("q7").unwrap_err();
    assert!(matches!(err, GlossaError::InvalidSymbol(_)));
}

#[test]
fn test_suggests_ipa_grapheme_for_lookalike() {
    let mut inventory = PhonemeInventory::new();
    // ASCII 'g' is not the IPA voiced velar plosive
    let err = inventory.add("g").unwrap_err();
    match err {
        GlossaError::InvalidSymbol(details) => {
            assert!(details.suggestion.as_ref().unwrap().contains('\u{0261}'));
        }
        other => panic!("expected InvalidSymbol, got {:?}", other),
    }
}

#[test]
fn test_rejects_duplicate_symbol() {
    let mut inventory = PhonemeInventory::from_symbols(["p"]).unwrap();
    assert!(inventory.add("p").is_err());
}

#[test]
fn test_segment_prefers_longest_match() {
    let inventory = PhonemeInventory::from_symbols(["t", "\u{0283}", "t\u{0283}", "a"]).unwrap();
    // "tʃa" segments as the affricate plus the vowel
    let segmented = inventory.segment("t\u{0283}a").unwrap();
    assert_eq!(segmented, vec!["t\u{0283}", "a"]);
}

#[test]
fn test_segment_reports_unknown_remainder() {
    let inventory = PhonemeInventory::from_symbols(["p", "a"]).unwrap();
    let err = inventory.segment("pax").unwrap_err();
    assert!(matches!(err, GlossaError::InvalidSymbol(_)));
}
