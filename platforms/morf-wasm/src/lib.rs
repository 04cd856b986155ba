use wasm_bindgen::prelude::*;
use morf_analyzer::{AnalyzeOptions, Analyzer, LexiconEngine, Words};
use serde::Serialize;

#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Summary of the loaded lexicon, for the JS side.
#[derive(Serialize)]
pub struct EngineInfo {
    pub lexicon_version: u32,
}

/// The analyzer running in the browser.
///
/// A worker owns its own instance; instances are never shared between
/// workers, which gives the same process affinity as the native session.
#[wasm_bindgen]
pub struct MorfEngine {
    analyzer: Analyzer<LexiconEngine>,
}

fn options_from_js(options: JsValue) -> Result<AnalyzeOptions, JsValue> {
    if options.is_undefined() || options.is_null() {
        return Ok(AnalyzeOptions::default());
    }
    // Unknown option names are rejected by `deny_unknown_fields`.
    serde_wasm_bindgen::from_value(options).map_err(|e| JsValue::from_str(&format!("invalid options: {}", e)))
}

#[wasm_bindgen]
impl MorfEngine {
    /// `data` is a compiled lexicon, loaded via fetch() in JS.
    #[wasm_bindgen(constructor)]
    pub fn new(data: Vec<u8>) -> Result<MorfEngine, JsValue> {
        let engine = LexiconEngine::from_bytes(&data).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { analyzer: Analyzer::new(engine) })
    }

    pub fn info(&self) -> Result<JsValue, JsValue> {
        let info = EngineInfo {
            lexicon_version: self.analyzer.engine().version(),
        };
        Ok(serde_wasm_bindgen::to_value(&info)?)
    }

    /// Text -> whitespace tokens -> analyses.
    pub fn analyze(&self, input: &str, options: JsValue) -> Result<JsValue, JsValue> {
        let options = options_from_js(options)?;
        let results = self.analyzer.analyze(input, &options);
        Ok(serde_wasm_bindgen::to_value(&results)?)
    }

    /// Pre-tokenized input: `tokens` must be an array of strings.
    #[wasm_bindgen(js_name = analyzeTokens)]
    pub fn analyze_tokens(&self, tokens: JsValue, options: JsValue) -> Result<JsValue, JsValue> {
        let tokens: Vec<String> = serde_wasm_bindgen::from_value(tokens)?;
        let options = options_from_js(options)?;
        let results = self.analyzer.analyze(Words::from(tokens), &options);
        Ok(serde_wasm_bindgen::to_value(&results)?)
    }
}
