//! Construction input for a ruler, loadable from host-supplied JSON.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::consts::{DEFAULT_FILL_SELECTOR, DEFAULT_HANDLE_SELECTOR, DEFAULT_INITIAL_INDEX, DEFAULT_TRACK_SELECTOR};
use crate::error::RulerError;

/// CSS selectors for the elements the DOM binding drives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub track: String,
    pub handle: String,
    pub fill: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            track: DEFAULT_TRACK_SELECTOR.to_string(),
            handle: DEFAULT_HANDLE_SELECTOR.to_string(),
            fill: DEFAULT_FILL_SELECTOR.to_string(),
        }
    }
}

/// Everything needed to construct a ruler besides the track width and the
/// commit callback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RulerConfig<V> {
    /// Scale values in track order.
    pub scale: Vec<V>,
    /// 1-based index committed at construction. Values outside the scale
    /// clamp to its first or last entry.
    #[serde(default = "default_initial_index", alias = "position")]
    pub initial_index: usize,
    #[serde(default)]
    pub selectors: Selectors,
}

fn default_initial_index() -> usize {
    DEFAULT_INITIAL_INDEX
}

impl<V> RulerConfig<V> {
    #[must_use]
    pub fn new(scale: Vec<V>) -> Self {
        Self { scale, initial_index: DEFAULT_INITIAL_INDEX, selectors: Selectors::default() }
    }

    #[must_use]
    pub fn with_initial_index(mut self, initial_index: usize) -> Self {
        self.initial_index = initial_index;
        self
    }

    #[must_use]
    pub fn with_selectors(mut self, selectors: Selectors) -> Self {
        self.selectors = selectors;
        self
    }
}

impl RulerConfig<Value> {
    /// Parse a config whose scale values are arbitrary JSON.
    ///
    /// Only the JSON shape is checked here; the scale length and track width
    /// are validated when the ruler is constructed.
    ///
    /// # Errors
    ///
    /// Returns [`RulerError::Config`] when `json` is malformed or lacks `scale`.
    pub fn from_json(json: &str) -> Result<Self, RulerError> {
        Ok(serde_json::from_str(json)?)
    }
}
