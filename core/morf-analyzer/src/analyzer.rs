use morf_protocol::WordResult;
use tracing::trace;

use crate::engine::Engine;
use crate::error::AnalyzeError;
use crate::input::Words;
use crate::normalize::normalize;
use crate::options::AnalyzeOptions;

/// Word list in, analysis list out.
///
/// Owns one engine and formats its output. No disambiguation happens here:
/// every candidate the engine returns is kept, in engine order.
pub struct Analyzer<E> {
    engine: E,
}

impl<E: Engine> Analyzer<E> {
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Analyzes free text or a token list. Results follow input order.
    pub fn analyze<'a>(&self, words: impl Into<Words<'a>>, options: &AnalyzeOptions) -> Vec<WordResult> {
        let tokens = words.into().into_tokens();
        if tokens.is_empty() {
            return Vec::new();
        }

        trace!(tokens = tokens.len(), use_heuristics = options.use_heuristics, "calling engine");
        self.engine
            .analyze(&tokens, options.use_heuristics)
            .into_iter()
            .map(|word| WordResult {
                analysis: word.analyses.iter().map(|raw| normalize(raw, options)).collect(),
                text: word.text,
            })
            .collect()
    }

    /// Like [`Analyzer::analyze`], with options given by name.
    ///
    /// Option names are checked before the engine is called.
    pub fn analyze_with<'a, I, K>(&self, words: impl Into<Words<'a>>, options: I) -> Result<Vec<WordResult>, AnalyzeError>
    where
        I: IntoIterator<Item = (K, bool)>,
        K: AsRef<str>,
    {
        let options = AnalyzeOptions::from_pairs(options)?;
        Ok(self.analyze(words, &options))
    }
}
