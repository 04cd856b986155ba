use std::path::PathBuf;

use thiserror::Error;

/// An option name outside the fixed set was supplied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown option `{0}` (expected one of: use_heuristics, trim_phonetic, trim_compound)")]
    UnknownOption(String),
    #[error("invalid options: {0}")]
    Malformed(String),
}

/// Input bytes that are not valid UTF-8.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("token {token} is not valid UTF-8 (first invalid byte at offset {valid_up_to})")]
pub struct EncodingError {
    pub token: usize,
    pub valid_up_to: usize,
}

/// Process-wide engine startup failed. Cached for the life of the process.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InitError {
    #[error("lexicon path {0:?} does not exist")]
    MissingLexicon(PathBuf),
    #[error("environment variable {name} is not valid unicode")]
    InvalidEnvironment { name: &'static str },
}

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("failed to read lexicon {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("lexicon archive is invalid: {0}")]
    Invalid(String),
    #[error("failed to serialize lexicon: {0}")]
    Serialize(String),
    #[error("failed to parse JSON lexicon: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Encoding(#[from] EncodingError),
    #[error("engine initialization failed: {0}")]
    Init(#[from] InitError),
    #[error("failed to open engine: {0}")]
    Engine(#[from] LexiconError),
}
