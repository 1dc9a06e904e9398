use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::ScoringWeights;
use crate::services::BrandingSettings;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub consultation: ConsultationSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub branding: BrandingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogSettings {
    /// Path to a `.json` or `.toml` wine list; the service starts empty without one
    pub path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConsultationSettings {
    #[serde(default = "default_max_sessions")]
    pub max_sessions: u64,
    #[serde(default = "default_idle_ttl_secs")]
    pub idle_ttl_secs: u64,
}

impl Default for ConsultationSettings {
    fn default() -> Self {
        Self {
            max_sessions: default_max_sessions(),
            idle_ttl_secs: default_idle_ttl_secs(),
        }
    }
}

fn default_max_sessions() -> u64 { 10_000 }
fn default_idle_ttl_secs() -> u64 { 1800 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_color_match")]
    pub color_match: f64,
    #[serde(default = "default_color_mismatch")]
    pub color_mismatch: f64,
    #[serde(default = "default_dish_strong")]
    pub dish_strong: f64,
    #[serde(default = "default_dish_weak")]
    pub dish_weak: f64,
    #[serde(default = "default_attribute_weight")]
    pub sweetness: f64,
    #[serde(default = "default_attribute_weight")]
    pub aroma: f64,
    #[serde(default = "default_attribute_weight")]
    pub body: f64,
    #[serde(default = "default_rating_factor")]
    pub rating_factor: f64,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            color_match: default_color_match(),
            color_mismatch: default_color_mismatch(),
            dish_strong: default_dish_strong(),
            dish_weak: default_dish_weak(),
            sweetness: default_attribute_weight(),
            aroma: default_attribute_weight(),
            body: default_attribute_weight(),
            rating_factor: default_rating_factor(),
            max_results: default_max_results(),
        }
    }
}

fn default_color_match() -> f64 { 5.0 }
fn default_color_mismatch() -> f64 { -10.0 }
fn default_dish_strong() -> f64 { 4.0 }
fn default_dish_weak() -> f64 { 2.0 }
fn default_attribute_weight() -> f64 { 3.0 }
fn default_rating_factor() -> f64 { 0.5 }
fn default_max_results() -> usize { 6 }

impl From<&WeightsConfig> for ScoringWeights {
    fn from(config: &WeightsConfig) -> Self {
        Self {
            color_match: config.color_match,
            color_mismatch: config.color_mismatch,
            dish_strong: config.dish_strong,
            dish_weak: config.dish_weak,
            sweetness: config.sweetness,
            aroma: config.aroma,
            body: config.body,
            rating_factor: config.rating_factor,
            max_results: config.max_results,
        }
    }
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

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with SOMMELIER_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., SOMMELIER__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?;

        settings.try_deserialize()
    }

    pub fn scoring_weights(&self) -> ScoringWeights {
        ScoringWeights::from(&self.scoring.weights)
    }
}

fn environment() -> Environment {
    Environment::with_prefix("SOMMELIER")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
