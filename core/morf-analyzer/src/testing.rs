//! Deterministic engine double for facade tests.

use std::cell::Cell;
use std::collections::HashMap;

use morf_protocol::RawAnalysis;

use crate::engine::{Engine, EngineWord};

pub(crate) struct CannedEngine {
    answers: HashMap<String, Vec<RawAnalysis>>,
    calls: Cell<usize>,
    last_heuristics: Cell<Option<bool>>,
}

impl CannedEngine {
    pub(crate) fn estonian() -> Self {
        let mut answers = HashMap::new();
        answers.insert(
            "tee".to_string(),
            vec![
                RawAnalysis::new("t<ee", "0", "", "S", "sg n"),
                RawAnalysis::new("t<ege", "0", "", "V", "o"),
                RawAnalysis::new("t<ee", "0", "", "S", "adt"),
            ],
        );
        answers.insert("laulab".to_string(), vec![RawAnalysis::new("l<aul", "b", "", "V", "b")]);
        answers.insert(
            "lennukikandjaile".to_string(),
            vec![RawAnalysis::new("lennuki_k<an]dja", "ile", "", "S", "pl all")],
        );
        answers.insert("Ma".to_string(), vec![RawAnalysis::new("mina", "0", "", "P", "sg n")]);
        answers.insert("tahaks".to_string(), vec![RawAnalysis::new("t<aht", "ks", "", "V", "ks")]);
        answers.insert(
            "päikesekiiri".to_string(),
            vec![RawAnalysis::new("p<äikese_k<iir", "i", "", "S", "pl p")],
        );
        Self {
            answers,
            calls: Cell::new(0),
            last_heuristics: Cell::new(None),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.get()
    }

    pub(crate) fn last_heuristics(&self) -> Option<bool> {
        self.last_heuristics.get()
    }
}

impl Engine for CannedEngine {
    fn analyze(&self, tokens: &[String], use_heuristics: bool) -> Vec<EngineWord> {
        self.calls.set(self.calls.get() + 1);
        self.last_heuristics.set(Some(use_heuristics));
        tokens
            .iter()
            .map(|token| EngineWord::new(token.as_str(), self.answers.get(token).cloned().unwrap_or_default()))
            .collect()
    }
}
