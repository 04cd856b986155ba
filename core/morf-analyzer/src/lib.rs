//! Normalization layer over an Estonian morphological analysis engine.
//!
//! ```no_run
//! use morf_analyzer::{analyze, AnalyzeOptions};
//!
//! let words = analyze("Ma tahaks suudelda päikesekiiri", &AnalyzeOptions::default())?;
//! for word in &words {
//!     for an in &word.analysis {
//!         println!("{} -> {} ({})", word.text, an.lemma, an.partofspeech);
//!     }
//! }
//! # Ok::<(), morf_analyzer::AnalyzeError>(())
//! ```

pub mod analyzer;
pub mod engine;
pub mod error;
pub mod input;
pub mod lexicon;
pub mod normalize;
pub mod options;
pub mod runtime;
pub mod session;

#[cfg(test)]
mod testing;

pub use analyzer::Analyzer;
pub use engine::{Engine, EngineWord};
pub use error::{AnalyzeError, ConfigError, EncodingError, InitError, LexiconError};
pub use input::Words;
pub use lexicon::{compile, parse_json, LexiconEngine};
pub use normalize::normalize;
pub use options::AnalyzeOptions;
pub use runtime::{analyze, initialize, terminate, RuntimeConfig};
pub use session::{Session, SessionCell};

pub use morf_protocol::{CanonicalAnalysis, RawAnalysis, WordResult};
