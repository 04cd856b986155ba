//! Process-wide engine setup and the stateless `analyze` entry point.

use std::env;
use std::path::PathBuf;
use std::sync::OnceLock;

use morf_protocol::WordResult;
use tracing::{debug, error};

use crate::error::{AnalyzeError, InitError};
use crate::input::Words;
use crate::lexicon::LexiconEngine;
use crate::options::AnalyzeOptions;
use crate::session::SessionCell;

pub const LEXICON_PATH_ENV: &str = "MORF_LEXICON_PATH";
pub const DEFAULT_LEXICON_PATH: &str = "dct/et.lexicon";

/// Settings resolved once per process by [`initialize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub lexicon_path: PathBuf,
}

impl RuntimeConfig {
    pub fn from_env() -> Result<Self, InitError> {
        let lexicon_path = match env::var(LEXICON_PATH_ENV) {
            Ok(path) => PathBuf::from(path),
            Err(env::VarError::NotPresent) => PathBuf::from(DEFAULT_LEXICON_PATH),
            Err(env::VarError::NotUnicode(_)) => {
                return Err(InitError::InvalidEnvironment { name: LEXICON_PATH_ENV })
            }
        };
        Ok(Self { lexicon_path })
    }

    pub fn validate(self) -> Result<Self, InitError> {
        if !self.lexicon_path.exists() {
            return Err(InitError::MissingLexicon(self.lexicon_path));
        }
        Ok(self)
    }
}

static RUNTIME: OnceLock<Result<RuntimeConfig, InitError>> = OnceLock::new();

static DEFAULT_SESSION: SessionCell<LexiconEngine> = SessionCell::new(open_default_engine);

/// One-time process initialization. Must succeed before the default session
/// is used; a failure is remembered and every later call fails the same way.
pub fn initialize() -> Result<&'static RuntimeConfig, InitError> {
    RUNTIME
        .get_or_init(|| {
            let result = RuntimeConfig::from_env().and_then(RuntimeConfig::validate);
            match &result {
                Ok(config) => debug!(lexicon = ?config.lexicon_path, "morphology runtime initialized"),
                Err(e) => error!(error = %e, "morphology runtime failed to initialize"),
            }
            result
        })
        .as_ref()
        .map_err(|e| e.clone())
}

/// Drops the default session. Call once at process exit.
pub fn terminate() {
    DEFAULT_SESSION.reset();
}

fn open_default_engine() -> Result<LexiconEngine, AnalyzeError> {
    let config = initialize()?;
    Ok(LexiconEngine::open(&config.lexicon_path)?)
}

/// Analyzes `words` with the process-default engine.
///
/// The engine is built on first use and rebuilt if the call happens in a
/// different process than the one that built it (for example after a fork).
pub fn analyze<'a>(words: impl Into<Words<'a>>, options: &AnalyzeOptions) -> Result<Vec<WordResult>, AnalyzeError> {
    let tokens = words.into().into_tokens();
    if tokens.is_empty() {
        return Ok(Vec::new());
    }
    DEFAULT_SESSION.with(|analyzer| analyzer.analyze(tokens, options))
}
