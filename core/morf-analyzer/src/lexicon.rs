//! Reference engine backed by a compiled lexicon archive.
//!
//! Lexicons are authored as JSON and compiled into an rkyv archive; the
//! archive is validated once when the engine is opened.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use morf_protocol::{GuessRule, Lexicon, RawAnalysis};
use rkyv::AlignedVec;
use tracing::{debug, trace};

use crate::engine::{Engine, EngineWord};
use crate::error::LexiconError;

const PUNCTUATION_TAG: &str = "Z";

pub fn parse_json(json: &str) -> Result<Lexicon, LexiconError> {
    Ok(serde_json::from_str(json)?)
}

/// Serializes a lexicon into its binary archive form.
pub fn compile(lexicon: &Lexicon) -> Result<AlignedVec, LexiconError> {
    rkyv::to_bytes::<_, 256>(lexicon).map_err(|e| LexiconError::Serialize(e.to_string()))
}

pub struct LexiconEngine {
    version: u32,
    entries: HashMap<String, Vec<RawAnalysis>>,
    // Longest suffix first.
    guesses: Vec<GuessRule>,
}

impl LexiconEngine {
    /// Opens a compiled lexicon. Missing or invalid files fail here, not at analysis time.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let engine = Self::from_bytes(&bytes)?;
        debug!(path = ?path, version = engine.version, entries = engine.entries.len(), "opened lexicon");
        Ok(engine)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, LexiconError> {
        // Archives must be read from aligned memory.
        let mut aligned = AlignedVec::with_capacity(bytes.len());
        aligned.extend_from_slice(bytes);
        let lexicon = rkyv::from_bytes::<Lexicon>(&aligned).map_err(|e| LexiconError::Invalid(e.to_string()))?;
        Ok(Self::from_lexicon(lexicon))
    }

    pub fn from_lexicon(lexicon: Lexicon) -> Self {
        let mut entries: HashMap<String, Vec<RawAnalysis>> = HashMap::with_capacity(lexicon.entries.len());
        for entry in lexicon.entries {
            entries.entry(entry.word).or_default().extend(entry.analyses);
        }

        let mut guesses = lexicon.guesses;
        guesses.sort_by(|a, b| b.suffix.chars().count().cmp(&a.suffix.chars().count()));

        Self {
            version: lexicon.version,
            entries,
            guesses,
        }
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    fn lookup(&self, token: &str, use_heuristics: bool) -> Vec<RawAnalysis> {
        if let Some(analyses) = self.entries.get(token) {
            return analyses.clone();
        }

        // Sentence-initial capitals.
        let lower = token.to_lowercase();
        if let Some(analyses) = self.entries.get(&lower) {
            return analyses.clone();
        }

        if is_punctuation(token) {
            return vec![RawAnalysis::new(token, "", "", PUNCTUATION_TAG, "")];
        }

        if use_heuristics {
            if let Some(guess) = self.guess(&lower) {
                trace!(token, root = %guess.root, "guessed unknown word");
                return vec![guess];
            }
        }

        trace!(token, "no analysis");
        Vec::new()
    }

    fn guess(&self, lower: &str) -> Option<RawAnalysis> {
        self.guesses.iter().find_map(|rule| {
            let stem = lower.strip_suffix(rule.suffix.as_str())?;
            if stem.is_empty() {
                return None;
            }
            Some(RawAnalysis::new(stem, &rule.ending, "", &rule.partofspeech, &rule.form))
        })
    }
}

fn is_punctuation(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| !c.is_alphanumeric())
}

impl Engine for LexiconEngine {
    fn analyze(&self, tokens: &[String], use_heuristics: bool) -> Vec<EngineWord> {
        tokens
            .iter()
            .map(|token| EngineWord::new(token.as_str(), self.lookup(token, use_heuristics)))
            .collect()
    }
}
