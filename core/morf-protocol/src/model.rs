use rkyv::{Archive, Deserialize, Serialize};
use crate::analysis::RawAnalysis;
use alloc::string::String;
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// Every candidate analysis known for one surface form.
#[derive(Debug, Clone, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct LexiconEntry {
    pub word: String,
    pub analyses: Vec<RawAnalysis>,
}

/// Suffix rule used to guess unknown words when heuristics are enabled.
#[derive(Debug, Clone, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct GuessRule {
    pub suffix: String,
    pub ending: String,
    pub partofspeech: String,
    pub form: String,
}

#[derive(Debug, Clone, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Lexicon {
    pub version: u32,
    pub entries: Vec<LexiconEntry>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub guesses: Vec<GuessRule>,
}
