use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use crate::models::{MatchingPolicy, ScoringWeights};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub input: InputSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
    #[serde(default = "default_min_score_threshold")]
    pub min_score_threshold: f64,
    #[serde(default = "default_max_alternatives")]
    pub max_alternatives_per_guest: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            weights: WeightsConfig::default(),
            min_score_threshold: default_min_score_threshold(),
            max_alternatives_per_guest: default_max_alternatives(),
        }
    }
}

impl MatchingSettings {
    /// Policy for a matching run. Weights are passed through as configured.
    pub fn policy(&self) -> MatchingPolicy {
        MatchingPolicy {
            weights: ScoringWeights {
                distance: self.weights.distance,
                style: self.weights.style,
                contribution: self.weights.contribution,
                capacity: self.weights.capacity,
            },
            min_score_threshold: self.min_score_threshold,
            max_alternatives: self.max_alternatives_per_guest,
        }
    }
}

fn default_min_score_threshold() -> f64 { 0.3 }
fn default_max_alternatives() -> usize { 3 }

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_distance_weight")]
    pub distance: f64,
    #[serde(default = "default_style_weight")]
    pub style: f64,
    #[serde(default = "default_contribution_weight")]
    pub contribution: f64,
    #[serde(default = "default_capacity_weight")]
    pub capacity: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            distance: default_distance_weight(),
            style: default_style_weight(),
            contribution: default_contribution_weight(),
            capacity: default_capacity_weight(),
        }
    }
}

fn default_distance_weight() -> f64 { 0.25 }
fn default_style_weight() -> f64 { 0.35 }
fn default_contribution_weight() -> f64 { 0.15 }
fn default_capacity_weight() -> f64 { 0.25 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct InputSettings {
    /// Snapshot file used when none is given on the command line
    pub snapshot_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingSettings {
    /// Apply `LOG_LEVEL` / `LOG_FORMAT` style overrides on top of the file values
    pub fn overridden(self, level: Option<String>, format: Option<String>) -> Self {
        Self {
            level: level.unwrap_or(self.level),
            format: format.unwrap_or(self.format),
        }
    }

    pub fn is_pretty(&self) -> bool {
        self.format == "pretty"
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

fn environment() -> Environment {
    // e.g., SHABBAT__MATCHING__WEIGHTS__STYLE -> matching.weights.style
    Environment::with_prefix("SHABBAT")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with SHABBAT__)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_weights() {
        let weights = WeightsConfig::default();
        assert_eq!(weights.distance, 0.25);
        assert_eq!(weights.style, 0.35);
        assert_eq!(weights.contribution, 0.15);
        assert_eq!(weights.capacity, 0.25);
    }

    #[test]
    fn test_default_policy_matches_engine_default() {
        assert_eq!(MatchingSettings::default().policy(), MatchingPolicy::default());
    }

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "json");
    }

    #[test]
    fn test_logging_env_overrides_file() {
        let logging = LoggingSettings {
            level: "debug".to_string(),
            format: "pretty".to_string(),
        };

        let kept = logging.clone().overridden(None, None);
        assert_eq!(kept.level, "debug");
        assert!(kept.is_pretty());

        let replaced = logging.overridden(Some("warn".to_string()), Some("json".to_string()));
        assert_eq!(replaced.level, "warn");
        assert!(!replaced.is_pretty());
    }

    #[test]
    fn test_load_logging_section() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[logging]\nlevel = \"debug\"\nformat = \"pretty\"").unwrap();

        let settings = Settings::load_from(file.path()).unwrap();

        assert_eq!(settings.logging.level, "debug");
        assert!(settings.logging.is_pretty());
    }

    #[test]
    fn test_load_from_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[matching]\nmin_score_threshold = 0.5\n\n[matching.weights]\nstyle = 0.5\n\n[input]\nsnapshot_path = \"data/snapshot.json\""
        )
        .unwrap();

        let settings = Settings::load_from(file.path()).unwrap();

        assert_eq!(settings.matching.min_score_threshold, 0.5);
        assert_eq!(settings.matching.weights.style, 0.5);
        assert_eq!(settings.matching.weights.distance, 0.25);
        assert_eq!(settings.matching.max_alternatives_per_guest, 3);
        assert_eq!(settings.input.snapshot_path.as_deref(), Some("data/snapshot.json"));
        assert_eq!(settings.logging.level, "info");
    }
}
