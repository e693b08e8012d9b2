//! Error type shared by construction, configuration and the DOM binding.

use wasm_bindgen::JsValue;

/// Failures surfaced to the caller. Steady-state pointer handling never fails;
/// out-of-range coordinates are clamped instead of reported.
#[derive(Debug, thiserror::Error)]
pub enum RulerError {
    /// The scale needs at least two values to span a track.
    #[error("scale must contain at least 2 values, got {len}")]
    InvalidScale { len: usize },
    /// The track width must be finite and strictly positive.
    #[error("track width must be positive, got {0}")]
    InvalidWidth(f64),
    /// The JSON configuration could not be parsed.
    #[error("invalid ruler config: {0}")]
    Config(#[from] serde_json::Error),
    /// No element in the document matches a configured selector.
    #[error("no element matches selector {selector:?}")]
    ElementMissing { selector: String },
    /// A configured selector matched something that is not an `HTMLElement`.
    #[error("element for selector {selector:?} is not an HTMLElement")]
    NotHtmlElement { selector: String },
    /// A browser API call failed.
    #[error("dom error: {0}")]
    Dom(String),
}

impl From<JsValue> for RulerError {
    fn from(value: JsValue) -> Self {
        Self::Dom(format!("{value:?}"))
    }
}
