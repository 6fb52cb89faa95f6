use crate::CodecError;
use ringzip_math::DEFAULT_ERROR_THRESHOLD;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// When the encoder may emit a hit flag instead of a literal.
///
/// - **Exact**: the encoder asks the tree the same question the decoder will
///   (closest stored byte to the *previous* byte) and only flags a hit when the
///   answer equals the current byte. Lossless.
/// - **Tolerant**: the encoder asks for the closest stored byte to the
///   *current* byte and flags a hit when it is within
///   `error_threshold * 256` of it. Same output format, but the decoder cannot
///   tell a near match from an exact one, so decompression is lossy and
///   silently so.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchRule {
    #[default]
    Exact,
    Tolerant,
}

impl FromStr for MatchRule {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "exact" => Ok(Self::Exact),
            "tolerant" => Ok(Self::Tolerant),
            _ => Err(CodecError::UnknownMatchRule(s.to_string())),
        }
    }
}

/// Encoder settings. Decoding needs none of them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    pub match_rule: MatchRule,
    /// Per-node tolerance, as a fraction of the 256 byte levels.
    pub error_threshold: f64,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            match_rule: MatchRule::Exact,
            error_threshold: DEFAULT_ERROR_THRESHOLD,
        }
    }
}

impl CodecConfig {
    pub fn tolerant() -> Self {
        Self {
            match_rule: MatchRule::Tolerant,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), CodecError> {
        if !self.error_threshold.is_finite() || self.error_threshold < 0.0 {
            return Err(CodecError::InvalidThreshold(self.error_threshold));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CodecConfig::default();
        assert_eq!(config.match_rule, MatchRule::Exact);
        assert_eq!(config.error_threshold, 0.1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_match_rule_parsing() {
        assert_eq!("exact".parse::<MatchRule>().unwrap(), MatchRule::Exact);
        assert_eq!("Tolerant".parse::<MatchRule>().unwrap(), MatchRule::Tolerant);
        assert_eq!(
            "fuzzy".parse::<MatchRule>(),
            Err(CodecError::UnknownMatchRule("fuzzy".into()))
        );
    }

    #[test]
    fn test_json_roundtrip_and_partial_files() {
        let config = CodecConfig::tolerant();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"match_rule":"tolerant","error_threshold":0.1}"#);
        assert_eq!(serde_json::from_str::<CodecConfig>(&json).unwrap(), config);

        // Missing fields fall back to defaults.
        let partial: CodecConfig = serde_json::from_str(r#"{"error_threshold":0.25}"#).unwrap();
        assert_eq!(partial.match_rule, MatchRule::Exact);
        assert_eq!(partial.error_threshold, 0.25);
    }

    #[test]
    fn test_rejects_bad_threshold() {
        for bad in [-0.1, f64::NAN, f64::INFINITY] {
            let config = CodecConfig {
                error_threshold: bad,
                ..CodecConfig::default()
            };
            assert!(matches!(config.validate(), Err(CodecError::InvalidThreshold(_))));
        }
    }
}
