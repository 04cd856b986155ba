use alloc::string::String;
use alloc::vec::Vec;
use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// One candidate analysis exactly as the engine produced it.
///
/// `root` still carries the inline phonetic and compound markup.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct RawAnalysis {
    pub root: String,
    pub ending: String,
    pub clitic: String,
    pub partofspeech: String,
    pub form: String,
}

impl RawAnalysis {
    pub fn new(root: &str, ending: &str, clitic: &str, partofspeech: &str, form: &str) -> Self {
        Self {
            root: root.into(),
            ending: ending.into(),
            clitic: clitic.into(),
            partofspeech: partofspeech.into(),
            form: form.into(),
        }
    }
}

/// Normalized analysis handed to downstream pipelines.
///
/// `lemma` is always rebuilt from `root_tokens` and `partofspeech`;
/// the engine never supplies it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct CanonicalAnalysis {
    pub root: String,
    pub root_tokens: Vec<String>,
    pub lemma: String,
    pub ending: String,
    pub clitic: String,
    pub partofspeech: String,
    pub form: String,
}

/// All candidate analyses for one surface word, in engine order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct WordResult {
    pub text: String,
    pub analysis: Vec<CanonicalAnalysis>,
}
