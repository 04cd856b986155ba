use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const USE_HEURISTICS: &str = "use_heuristics";
pub const TRIM_PHONETIC: &str = "trim_phonetic";
pub const TRIM_COMPOUND: &str = "trim_compound";

fn enabled() -> bool {
    true
}

/// Per-call analysis settings. Every field defaults to `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalyzeOptions {
    /// Let the engine guess analyses for unknown words.
    #[serde(default = "enabled")]
    pub use_heuristics: bool,
    /// Remove phonetic markers from the exposed `root`.
    #[serde(default = "enabled")]
    pub trim_phonetic: bool,
    /// Remove compound markers from the exposed `root`.
    #[serde(default = "enabled")]
    pub trim_compound: bool,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            use_heuristics: true,
            trim_phonetic: true,
            trim_compound: true,
        }
    }
}

impl AnalyzeOptions {
    /// Sets one option by name. Unknown names are rejected, never ignored.
    pub fn set(&mut self, name: &str, value: bool) -> Result<(), ConfigError> {
        match name {
            USE_HEURISTICS => self.use_heuristics = value,
            TRIM_PHONETIC => self.trim_phonetic = value,
            TRIM_COMPOUND => self.trim_compound = value,
            other => return Err(ConfigError::UnknownOption(other.to_string())),
        }
        Ok(())
    }

    /// Builds options from `(name, value)` pairs on top of the defaults.
    pub fn from_pairs<I, K>(pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, bool)>,
        K: AsRef<str>,
    {
        let mut options = Self::default();
        for (name, value) in pairs {
            options.set(name.as_ref(), value)?;
        }
        Ok(options)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| {
            if e.is_data() && e.to_string().starts_with("unknown field") {
                ConfigError::UnknownOption(unknown_field_name(&e.to_string()))
            } else {
                ConfigError::Malformed(e.to_string())
            }
        })
    }
}

// serde reports "unknown field `x`, expected one of ..."
fn unknown_field_name(message: &str) -> String {
    message
        .split('`')
        .nth(1)
        .unwrap_or(message)
        .to_string()
}
