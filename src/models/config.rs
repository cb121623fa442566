use colour_sort::SortKind;
use serde::{Deserialize, Deserializer};
use std::path::{Path, PathBuf};

use crate::services::quantizer::SampleReduction;

/// Environment variable naming an optional YAML config file.
pub const CONFIG_ENV: &str = "PALETTEPULL_CONFIG";

/// Run configuration loaded from an optional config.yaml
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Ordering strategy for the palette strip
    #[serde(deserialize_with = "deserialize_sort_kind")]
    pub sort: SortKind,

    /// Number of hue bands for the step sort
    pub step_repetitions: u32,

    /// How 16-bit samples are reduced to 8 bits
    pub sample_reduction: SampleReduction,

    /// Append a space to output names whose base contains a space
    pub legacy_space_suffix: bool,

    /// Re-compress the output PNG with oxipng
    pub optimize: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sort: SortKind::Step,
            step_repetitions: colour_sort::StepSort::default().repetitions(),
            sample_reduction: SampleReduction::HighByte,
            legacy_space_suffix: false,
            optimize: true,
        }
    }
}

fn deserialize_sort_kind<'de, D>(deserializer: D) -> Result<SortKind, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    name.parse().map_err(serde::de::Error::custom)
}

impl AppConfig {
    /// Parse a YAML document. Missing keys take their defaults.
    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document deserializes as unit, not as an empty map
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Load from the file named by `PALETTEPULL_CONFIG`, or use defaults.
    pub fn from_env() -> Self {
        let path = std::env::var(CONFIG_ENV).ok().map(PathBuf::from);
        Self::load(path.as_deref())
    }

    /// Load from `path` if given, falling back to defaults on any failure.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml_str(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        sort = %config.sort,
                        sample_reduction = ?config.sample_reduction,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }
}
