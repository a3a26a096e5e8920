//! Codec configuration.

use serde::{Deserialize, Serialize};

/// Settings that change how documents are encoded and decoded.
///
/// Hosts typically load this from their settings file; every field has a
/// default so partial settings are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecOptions {
    /// Fail on field kind names this build does not know.
    ///
    /// When disabled, unknown fields are skipped with a warning and the
    /// container keeps its defaults for everything else.
    pub strict_field_kinds: bool,

    /// Record the encode time in the document's meta information.
    pub stamp_saved_at: bool,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            strict_field_kinds: true,
            stamp_saved_at: true,
        }
    }
}

impl CodecOptions {
    /// Options for reading files written by newer builds as far as possible.
    pub fn lenient() -> Self {
        Self {
            strict_field_kinds: false,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = CodecOptions::default();
        assert!(options.strict_field_kinds);
        assert!(options.stamp_saved_at);
    }

    #[test]
    fn test_lenient_options() {
        let options = CodecOptions::lenient();
        assert!(!options.strict_field_kinds);
        assert!(options.stamp_saved_at);
    }
}
