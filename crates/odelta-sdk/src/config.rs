use serde::{Deserialize, Serialize};

use odelta_patch::PatchConfig;

use crate::error::{SdkError, SdkResult};

/// Configuration for a [`crate::DeltaEngine`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeltaConfig {
    /// Settings passed through to the patch applier.
    pub patch: PatchConfig,
    /// Whether generated deltas carry the Rust type name of the compared values.
    pub record_subject_type: bool,
}

impl Default for DeltaConfig {
    fn default() -> Self {
        Self {
            patch: PatchConfig::default(),
            record_subject_type: true,
        }
    }
}

impl DeltaConfig {
    /// Parse a configuration from TOML. Missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> SdkResult<Self> {
        toml::from_str(s).map_err(|e| SdkError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use odelta_patch::IndexPolicy;

    #[test]
    fn default_config() {
        let c = DeltaConfig::default();
        assert!(c.record_subject_type);
        assert_eq!(c.patch.out_of_range, IndexPolicy::Reject);
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(DeltaConfig::from_toml_str("").unwrap(), DeltaConfig::default());
    }

    #[test]
    fn toml_overrides() {
        let c = DeltaConfig::from_toml_str(
            r#"
            record_subject_type = false

            [patch]
            out_of_range = "grow"
            "#,
        )
        .unwrap();
        assert!(!c.record_subject_type);
        assert_eq!(c.patch.out_of_range, IndexPolicy::Grow);
    }

    #[test]
    fn invalid_toml_is_config_error() {
        let err = DeltaConfig::from_toml_str("[patch]\nout_of_range = \"sideways\"").unwrap_err();
        assert!(matches!(err, SdkError::Config(_)));
    }
}
