// WASM bindings for Lao word segmentation and checking.
//
// Provides a `WasmLaoWord` class exported via wasm-bindgen that wraps the
// `LaoHandle` from laoword-lo. Spans, check results and grammar errors are
// serialized to JavaScript values using serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   const lao = new WasmLaoWord("lo");
//   lao.segment("ປະເທດລາວ");      // => [{ word: "ປະ", startIndex: 0, endIndex: 1, kind: "LAO" }, ...]
//   lao.check("ປ ລາວ");           // => [{ word: "ປ", ..., grammarCorrect: false }, ...]
//   lao.validate("ກກ");           // => false
//   lao.diagnose("ກກ");           // => "two consonants without a vowel"
//   lao.grammarErrors("ລາວ ກກ");  // => [{ errorCode: 5, startPos: 4, errorLen: 2, ... }]
//   lao.setOption("max_consonants", "6");

use serde::Serialize;
use wasm_bindgen::prelude::*;

use laoword_core::grammar_error::GrammarError;
use laoword_core::span::{GrammarCheckResult, WordSpan};
use laoword_lo::handle::{LaoError, LaoHandle};

// ============================================================================
// Serde-serializable DTO types for JS interop
// ============================================================================

/// Serializable representation of a word span.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsSpan {
    word: String,
    start_index: usize,
    end_index: usize,
    kind: &'static str,
}

/// Serializable representation of a checked span.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsCheckResult {
    word: String,
    start_index: usize,
    end_index: usize,
    grammar_correct: bool,
}

/// Serializable representation of a grammar error.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsGrammarError {
    error_code: i32,
    start_pos: usize,
    error_len: usize,
    short_description: String,
}

// ============================================================================
// Conversion helpers
// ============================================================================

impl From<WordSpan> for JsSpan {
    fn from(span: WordSpan) -> Self {
        let kind = span.kind().label();
        Self {
            word: span.text,
            start_index: span.start_index,
            end_index: span.end_index,
            kind,
        }
    }
}

impl From<GrammarCheckResult> for JsCheckResult {
    fn from(result: GrammarCheckResult) -> Self {
        Self {
            word: result.span.text,
            start_index: result.span.start_index,
            end_index: result.span.end_index,
            grammar_correct: result.grammar_correct,
        }
    }
}

impl From<GrammarError> for JsGrammarError {
    fn from(e: GrammarError) -> Self {
        Self {
            short_description: e.short_description().to_string(),
            error_code: e.error_code,
            start_pos: e.start_pos,
            error_len: e.error_len,
        }
    }
}

fn lao_error_to_js(e: LaoError) -> JsError {
    JsError::new(&e.to_string())
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

// ============================================================================
// WasmLaoWord
// ============================================================================

/// Lao word segmenter and structure checker for WebAssembly.
#[wasm_bindgen]
pub struct WasmLaoWord {
    handle: LaoHandle,
}

#[wasm_bindgen]
impl WasmLaoWord {
    /// Create a new instance for a language tag (`"lo"` or `"lo-LA"`).
    /// Defaults to `"lo"` when no tag is given.
    #[wasm_bindgen(constructor)]
    pub fn new(language: Option<String>) -> Result<WasmLaoWord, JsError> {
        let handle =
            LaoHandle::new(language.as_deref().unwrap_or("lo")).map_err(lao_error_to_js)?;
        Ok(WasmLaoWord { handle })
    }

    /// Split text into word spans.
    ///
    /// Returns a JavaScript array of objects with fields `word`,
    /// `startIndex`, `endIndex` (inclusive) and `kind`
    /// ("LAO", "SPACE", "REPETITION", "NON_LAO").
    pub fn segment(&self, text: &str) -> Result<JsValue, JsError> {
        let spans: Vec<JsSpan> = self
            .handle
            .segment(text)
            .into_iter()
            .map(JsSpan::from)
            .collect();
        to_js(&spans)
    }

    /// Segment text and mark every span correct or incorrect.
    ///
    /// Returns a JavaScript array of objects with fields `word`,
    /// `startIndex`, `endIndex`, `grammarCorrect`.
    pub fn check(&self, text: &str) -> Result<JsValue, JsError> {
        let results: Vec<JsCheckResult> = self
            .handle
            .check(text)
            .into_iter()
            .map(JsCheckResult::from)
            .collect();
        to_js(&results)
    }

    /// Check whether a single word is structurally correct.
    pub fn validate(&self, word: &str) -> bool {
        self.handle.validate(word)
    }

    /// Describe the first rule a word breaks, or null if it is correct.
    pub fn diagnose(&self, word: &str) -> Option<String> {
        self.handle
            .diagnose(word)
            .map(|v| v.description().to_string())
    }

    /// One error object per incorrect span of a paragraph.
    ///
    /// Fields: `errorCode`, `startPos`, `errorLen`, `shortDescription`.
    #[wasm_bindgen(js_name = "grammarErrors")]
    pub fn grammar_errors(&self, text: &str) -> Result<JsValue, JsError> {
        let errors: Vec<JsGrammarError> = self
            .handle
            .grammar_errors(text)
            .into_iter()
            .map(JsGrammarError::from)
            .collect();
        to_js(&errors)
    }

    /// Check text for errors, splitting at newline boundaries.
    ///
    /// Each line is treated as a separate paragraph. Error positions are
    /// relative to the full input text.
    #[wasm_bindgen(js_name = "grammarErrorsFromText")]
    pub fn grammar_errors_from_text(&self, text: &str) -> Result<JsValue, JsError> {
        let errors: Vec<JsGrammarError> = self
            .handle
            .grammar_errors_from_text(text)
            .into_iter()
            .map(JsGrammarError::from)
            .collect();
        to_js(&errors)
    }

    /// Get the library version string.
    #[wasm_bindgen(js_name = "getVersion")]
    pub fn get_version() -> String {
        LaoHandle::get_version().to_string()
    }

    // =========================================================================
    // Option setters
    // =========================================================================

    /// Set an option by name (`max_consonants`, `accept_non_lao`).
    #[wasm_bindgen(js_name = "setOption")]
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<(), JsError> {
        self.handle.set_option(name, value).map_err(lao_error_to_js)
    }

    /// Set the maximum number of consonants allowed in one word.
    #[wasm_bindgen(js_name = "setMaxConsonants")]
    pub fn set_max_consonants(&mut self, value: usize) {
        self.handle.set_max_consonants(value);
    }

    /// Set whether words starting with a non-Lao character are accepted.
    #[wasm_bindgen(js_name = "setAcceptNonLao")]
    pub fn set_accept_non_lao(&mut self, value: bool) {
        self.handle.set_accept_non_lao(value);
    }
}
