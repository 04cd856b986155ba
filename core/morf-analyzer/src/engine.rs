use morf_protocol::RawAnalysis;

/// One engine output item: the surface token as the engine segmented it,
/// plus every candidate analysis in engine order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineWord {
    pub text: String,
    pub analyses: Vec<RawAnalysis>,
}

impl EngineWord {
    pub fn new(text: impl Into<String>, analyses: Vec<RawAnalysis>) -> Self {
        Self {
            text: text.into(),
            analyses,
        }
    }
}

/// The morphological analysis engine behind the normalizer.
///
/// Implementations return one item per input token, in input order.
/// `use_heuristics` controls guessing for words the engine does not know.
pub trait Engine {
    fn analyze(&self, tokens: &[String], use_heuristics: bool) -> Vec<EngineWord>;
}

impl<E: Engine + ?Sized> Engine for &E {
    fn analyze(&self, tokens: &[String], use_heuristics: bool) -> Vec<EngineWord> {
        (**self).analyze(tokens, use_heuristics)
    }
}

impl<E: Engine + ?Sized> Engine for Box<E> {
    fn analyze(&self, tokens: &[String], use_heuristics: bool) -> Vec<EngineWord> {
        (**self).analyze(tokens, use_heuristics)
    }
}
