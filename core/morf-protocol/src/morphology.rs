use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// Part-of-speech tags emitted by the Estonian analysis engine.
///
/// Analyses keep the raw tag string; this enum is only used where the
/// normalizer has to reason about the tag (verbs get the infinitive suffix).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub enum PartOfSpeech {
    Adjective,      // A
    Comparative,    // C
    Adverb,         // D
    GenitiveAttribute, // G
    ProperNoun,     // H
    Interjection,   // I
    Conjunction,    // J
    Adposition,     // K
    Numeral,        // N
    Ordinal,        // O
    Pronoun,        // P
    Noun,           // S
    Superlative,    // U
    Verb,           // V
    VerbParticle,   // X
    Abbreviation,   // Y
    Punctuation,    // Z
}

impl PartOfSpeech {
    pub const fn tag(self) -> &'static str {
        match self {
            PartOfSpeech::Adjective => "A",
            PartOfSpeech::Comparative => "C",
            PartOfSpeech::Adverb => "D",
            PartOfSpeech::GenitiveAttribute => "G",
            PartOfSpeech::ProperNoun => "H",
            PartOfSpeech::Interjection => "I",
            PartOfSpeech::Conjunction => "J",
            PartOfSpeech::Adposition => "K",
            PartOfSpeech::Numeral => "N",
            PartOfSpeech::Ordinal => "O",
            PartOfSpeech::Pronoun => "P",
            PartOfSpeech::Noun => "S",
            PartOfSpeech::Superlative => "U",
            PartOfSpeech::Verb => "V",
            PartOfSpeech::VerbParticle => "X",
            PartOfSpeech::Abbreviation => "Y",
            PartOfSpeech::Punctuation => "Z",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        let pos = match tag {
            "A" => PartOfSpeech::Adjective,
            "C" => PartOfSpeech::Comparative,
            "D" => PartOfSpeech::Adverb,
            "G" => PartOfSpeech::GenitiveAttribute,
            "H" => PartOfSpeech::ProperNoun,
            "I" => PartOfSpeech::Interjection,
            "J" => PartOfSpeech::Conjunction,
            "K" => PartOfSpeech::Adposition,
            "N" => PartOfSpeech::Numeral,
            "O" => PartOfSpeech::Ordinal,
            "P" => PartOfSpeech::Pronoun,
            "S" => PartOfSpeech::Noun,
            "U" => PartOfSpeech::Superlative,
            "V" => PartOfSpeech::Verb,
            "X" => PartOfSpeech::VerbParticle,
            "Y" => PartOfSpeech::Abbreviation,
            "Z" => PartOfSpeech::Punctuation,
            _ => return None,
        };
        Some(pos)
    }

    pub fn is_verb(self) -> bool {
        self == PartOfSpeech::Verb
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTag;

impl fmt::Display for UnknownTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown part-of-speech tag")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnknownTag {}

impl FromStr for PartOfSpeech {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PartOfSpeech::from_tag(s).ok_or(UnknownTag)
    }
}
