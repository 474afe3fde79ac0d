//! IPA chart - maps grapheme strings to articulatory features
//!
//! The tables cover the pulmonic consonant grid, the non-pulmonic rows
//! (clicks, implosives, ejectives), the co-articulated extras, and the
//! vowel grid. Symbols outside these tables are not recognized graphemes
//! and are rejected at inventory-add time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Place of articulation for consonants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Place {
    Bilabial,
    Labiodental,
    Dental,
    Alveolar,
    Postalveolar,
    Retroflex,
    Palatal,
    Velar,
    Uvular,
    Pharyngeal,
    Glottal,
}

/// Manner of articulation for consonants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Manner {
    Plosive,
    Affricate,
    Nasal,
    Trill,
    TapOrFlap,
    Fricative,
    LateralFricative,
    Approximant,
    LateralApproximant,
    Click,
    Implosive,
    Ejective,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Voicing {
    Voiced,
    Voiceless,
}

/// Vowel height (close to open)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Height {
    Close,
    NearClose,
    CloseMid,
    Mid,
    OpenMid,
    NearOpen,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Backness {
    Front,
    Central,
    Back,
}

/// Broad symbol class used by the `V`/`C` environment shorthand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SymbolClass {
    Vowel,
    Consonant,
}

impl fmt::Display for SymbolClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymbolClass::Vowel => write!(f, "V"),
            SymbolClass::Consonant => write!(f, "C"),
        }
    }
}

/// Feature bundle of a single phoneme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhonemeFeatures {
    Consonant {
        place: Place,
        manner: Manner,
        voicing: Voicing,
    },
    Vowel {
        height: Height,
        backness: Backness,
        rounded: bool,
    },
}

impl PhonemeFeatures {
    pub fn class(&self) -> SymbolClass {
        match self {
            PhonemeFeatures::Consonant { .. } => SymbolClass::Consonant,
            PhonemeFeatures::Vowel { .. } => SymbolClass::Vowel,
        }
    }
}

fn consonant(place: Place, manner: Manner, voicing: Voicing) -> PhonemeFeatures {
    PhonemeFeatures::Consonant {
        place,
        manner,
        voicing,
    }
}

fn vowel(height: Height, backness: Backness, rounded: bool) -> PhonemeFeatures {
    PhonemeFeatures::Vowel {
        height,
        backness,
        rounded,
    }
}

/// Look up the features of a recognized IPA grapheme
///
/// Returns `None` for strings that are not in the chart.
pub fn features_for(symbol: &str) -> Option<PhonemeFeatures> {
    use Backness::*;
    use Height::*;
    use Manner::*;
    use Place::*;
    use Voicing::*;

    let features = match symbol {
        // Plosives
        "p" => consonant(Bilabial, Plosive, Voiceless),
        "b" => consonant(Bilabial, Plosive, Voiced),
        "p̪" => consonant(Labiodental, Plosive, Voiceless),
        "b̪" => consonant(Labiodental, Plosive, Voiced),
        "t̪" => consonant(Dental, Plosive, Voiceless),
        "d̪" => consonant(Dental, Plosive, Voiced),
        "t" => consonant(Alveolar, Plosive, Voiceless),
        "d" => consonant(Alveolar, Plosive, Voiced),
        "ʈ" => consonant(Retroflex, Plosive, Voiceless),
        "ɖ" => consonant(Retroflex, Plosive, Voiced),
        "c" => consonant(Palatal, Plosive, Voiceless),
        "ɟ" => consonant(Palatal, Plosive, Voiced),
        "k" => consonant(Velar, Plosive, Voiceless),
        "ɡ" => consonant(Velar, Plosive, Voiced),
        "q" => consonant(Uvular, Plosive, Voiceless),
        "ɢ" => consonant(Uvular, Plosive, Voiced),
        "ʔ" => consonant(Glottal, Plosive, Voiceless),
        "ʡ" => consonant(Pharyngeal, Plosive, Voiceless),

        // Affricates, both plain digraphs and tie-bar spellings
        "pf" => consonant(Labiodental, Affricate, Voiceless),
        "ts" | "t͡s" => consonant(Alveolar, Affricate, Voiceless),
        "dz" | "d͡z" => consonant(Alveolar, Affricate, Voiced),
        "tʃ" | "t͡ʃ" => consonant(Postalveolar, Affricate, Voiceless),
        "dʒ" | "d͡ʒ" => consonant(Postalveolar, Affricate, Voiced),
        "ʈʂ" | "ʈ͡ʂ" => consonant(Retroflex, Affricate, Voiceless),
        "ɖʐ" | "ɖ͡ʐ" => consonant(Retroflex, Affricate, Voiced),
        "tɕ" | "t͡ɕ" => consonant(Palatal, Affricate, Voiceless),
        "dʑ" | "d͡ʑ" => consonant(Palatal, Affricate, Voiced),
        "kx" => consonant(Velar, Affricate, Voiceless),

        // Nasals
        "m" => consonant(Bilabial, Nasal, Voiced),
        "ɱ" => consonant(Labiodental, Nasal, Voiced),
        "n̪" => consonant(Dental, Nasal, Voiced),
        "n" => consonant(Alveolar, Nasal, Voiced),
        "ɳ" => consonant(Retroflex, Nasal, Voiced),
        "ɲ" => consonant(Palatal, Nasal, Voiced),
        "ŋ" => consonant(Velar, Nasal, Voiced),
        "ɴ" => consonant(Uvular, Nasal, Voiced),

        // Trills
        "ʙ" => consonant(Bilabial, Trill, Voiced),
        "r" => consonant(Alveolar, Trill, Voiced),
        "ʀ" => consonant(Uvular, Trill, Voiced),
        "ʜ" => consonant(Pharyngeal, Trill, Voiceless),
        "ʢ" => consonant(Pharyngeal, Trill, Voiced),

        // Taps and flaps
        "ⱱ" => consonant(Labiodental, TapOrFlap, Voiced),
        "ɾ" => consonant(Alveolar, TapOrFlap, Voiced),
        "ɽ" => consonant(Retroflex, TapOrFlap, Voiced),

        // Fricatives
        "ɸ" => consonant(Bilabial, Fricative, Voiceless),
        "β" => consonant(Bilabial, Fricative, Voiced),
        "f" => consonant(Labiodental, Fricative, Voiceless),
        "v" => consonant(Labiodental, Fricative, Voiced),
        "θ" => consonant(Dental, Fricative, Voiceless),
        "ð" => consonant(Dental, Fricative, Voiced),
        "s" => consonant(Alveolar, Fricative, Voiceless),
        "z" => consonant(Alveolar, Fricative, Voiced),
        "ʃ" => consonant(Postalveolar, Fricative, Voiceless),
        "ʒ" => consonant(Postalveolar, Fricative, Voiced),
        "ʂ" => consonant(Retroflex, Fricative, Voiceless),
        "ʐ" => consonant(Retroflex, Fricative, Voiced),
        "ç" => consonant(Palatal, Fricative, Voiceless),
        "ʝ" => consonant(Palatal, Fricative, Voiced),
        "x" => consonant(Velar, Fricative, Voiceless),
        "ɣ" => consonant(Velar, Fricative, Voiced),
        "χ" => consonant(Uvular, Fricative, Voiceless),
        "ʁ" => consonant(Uvular, Fricative, Voiced),
        "ħ" => consonant(Pharyngeal, Fricative, Voiceless),
        "ʕ" => consonant(Pharyngeal, Fricative, Voiced),
        "h" => consonant(Glottal, Fricative, Voiceless),
        "ɦ" => consonant(Glottal, Fricative, Voiced),
        "ɧ" => consonant(Postalveolar, Fricative, Voiceless),

        // Lateral fricatives
        "ɬ" => consonant(Alveolar, LateralFricative, Voiceless),
        "ɮ" => consonant(Alveolar, LateralFricative, Voiced),

        // Approximants
        "ʋ" => consonant(Labiodental, Approximant, Voiced),
        "ɹ" => consonant(Alveolar, Approximant, Voiced),
        "ɻ" => consonant(Retroflex, Approximant, Voiced),
        "j" => consonant(Palatal, Approximant, Voiced),
        "ɰ" => consonant(Velar, Approximant, Voiced),
        "w" => consonant(Velar, Approximant, Voiced),
        "ʍ" => consonant(Velar, Approximant, Voiceless),
        "ɥ" => consonant(Palatal, Approximant, Voiced),

        // Lateral approximants
        "l" => consonant(Alveolar, LateralApproximant, Voiced),
        "ɭ" => consonant(Retroflex, LateralApproximant, Voiced),
        "ʎ" => consonant(Palatal, LateralApproximant, Voiced),
        "ʟ" => consonant(Velar, LateralApproximant, Voiced),

        // Clicks
        "ʘ" => consonant(Bilabial, Click, Voiceless),
        "ǀ" => consonant(Dental, Click, Voiceless),
        "ǃ" => consonant(Alveolar, Click, Voiceless),
        "ǁ" => consonant(Alveolar, Click, Voiceless),
        "ǂ" => consonant(Palatal, Click, Voiceless),

        // Voiced implosives
        "ɓ" => consonant(Bilabial, Implosive, Voiced),
        "ɗ" => consonant(Alveolar, Implosive, Voiced),
        "ʄ" => consonant(Palatal, Implosive, Voiced),
        "ɠ" => consonant(Velar, Implosive, Voiced),
        "ʛ" => consonant(Uvular, Implosive, Voiced),

        // Ejectives
        "pʼ" => consonant(Bilabial, Ejective, Voiceless),
        "tʼ" => consonant(Alveolar, Ejective, Voiceless),
        "kʼ" => consonant(Velar, Ejective, Voiceless),
        "qʼ" => consonant(Uvular, Ejective, Voiceless),
        "sʼ" => consonant(Alveolar, Ejective, Voiceless),

        // Close vowels
        "i" => vowel(Close, Front, false),
        "y" => vowel(Close, Front, true),
        "ɨ" => vowel(Close, Central, false),
        "ʉ" => vowel(Close, Central, true),
        "ɯ" => vowel(Close, Back, false),
        "u" => vowel(Close, Back, true),

        // Near-close vowels
        "ɪ" => vowel(NearClose, Front, false),
        "ʏ" => vowel(NearClose, Front, true),
        "ʊ" => vowel(NearClose, Back, true),
        "ᵻ" => vowel(NearClose, Central, false),
        "ᵿ" => vowel(NearClose, Central, true),

        // Close-mid vowels
        "e" => vowel(CloseMid, Front, false),
        "ø" => vowel(CloseMid, Front, true),
        "ɘ" => vowel(CloseMid, Central, false),
        "ɵ" => vowel(CloseMid, Central, true),
        "ɤ" => vowel(CloseMid, Back, false),
        "o" => vowel(CloseMid, Back, true),

        // Mid vowels
        "ə" => vowel(Mid, Central, false),
        "ɚ" => vowel(Mid, Central, false),

        // Open-mid vowels
        "ɛ" => vowel(OpenMid, Front, false),
        "œ" => vowel(OpenMid, Front, true),
        "ɜ" => vowel(OpenMid, Central, false),
        "ɞ" => vowel(OpenMid, Central, true),
        "ɝ" => vowel(OpenMid, Central, false),
        "ʌ" => vowel(OpenMid, Back, false),
        "ɔ" => vowel(OpenMid, Back, true),

        // Near-open vowels
        "æ" => vowel(NearOpen, Front, false),
        "ɐ" => vowel(NearOpen, Central, false),

        // Open vowels
        "a" => vowel(Open, Front, false),
        "ɶ" => vowel(Open, Front, true),
        "ɑ" => vowel(Open, Back, false),
        "ɒ" => vowel(Open, Back, true),

        _ => return None,
    };

    Some(features)
}

/// Suggest the closest recognized grapheme for an unrecognized symbol
///
/// Keyboard input commonly substitutes ASCII lookalikes for the proper
/// IPA codepoints; catch those first.
pub fn find_closest_symbol(s: &str) -> String {
    let lookalikes: Vec<(&str, &str)> = vec![
        ("g", "ɡ"),
        ("?", "ʔ"),
        ("3", "ɜ"),
        ("E", "ɛ"),
        ("O", "ɔ"),
        ("S", "ʃ"),
        ("Z", "ʒ"),
        ("T", "θ"),
        ("D", "ð"),
        ("N", "ŋ"),
        ("R", "ʁ"),
        ("'", "ʼ"),
    ];

    for (typo, correct) in &lookalikes {
        if s == *typo {
            return format!("Did you mean '{}'?", correct);
        }
    }

    if s.chars().count() > 1 {
        return "Multi-character sequences must be added one grapheme at a time".to_string();
    }

    "Check the IPA chart for the intended grapheme".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_chart_symbols() {
        assert_eq!(
            features_for("p"),
            Some(consonant(Place::Bilabial, Manner::Plosive, Voicing::Voiceless))
        );
        assert_eq!(
            features_for("a"),
            Some(vowel(Height::Open, Backness::Front, false))
        );
        assert_eq!(features_for("p").unwrap().class(), SymbolClass::Consonant);
        assert_eq!(features_for("a").unwrap().class(), SymbolClass::Vowel);
    }

    #[test]
    fn rejects_ascii_lookalikes() {
        // ASCII g is not the IPA velar plosive
        assert_eq!(features_for("g"), None);
        assert!(find_closest_symbol("g").contains('ɡ'));
    }

    #[test]
    fn diacritic_combinations_are_single_graphemes() {
        assert!(features_for("t̪").is_some());
        assert!(features_for("n̪").is_some());
    }

    #[test]
    fn affricates_are_single_graphemes() {
        assert_eq!(
            features_for("tʃ"),
            Some(consonant(
                Place::Postalveolar,
                Manner::Affricate,
                Voicing::Voiceless
            ))
        );
        // the tie-bar spelling maps to the same features
        assert_eq!(features_for("t͡ʃ"), features_for("tʃ"));
        assert!(features_for("dz").is_some());
        assert!(features_for("ʈʂ").is_some());
    }
}
