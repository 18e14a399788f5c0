use std::env;
use std::fmt;

use crate::workflows::visa::EvaluationConfig;

const DEFAULT_CATALOG: &str = "ps1,ps2,ps3,ps4,ps5";

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }

    /// Log filter used when `APP_LOG_LEVEL` is not set.
    pub fn default_log_level(self) -> &'static str {
        match self {
            Self::Production => "warn",
            Self::Development | Self::Test => "info",
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub catalog: CatalogConfig,
    pub evaluation: EvaluationConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let products = parse_product_list(
            &env::var("APP_CATALOG_PRODUCTS").unwrap_or_else(|_| DEFAULT_CATALOG.to_string()),
        )?;

        let defaults = EvaluationConfig::default();
        let evaluation = EvaluationConfig {
            normal_pass_score: read_number("APP_NORMAL_PASS_SCORE", defaults.normal_pass_score)?,
            third_world_pass_score: read_number(
                "APP_THIRD_WORLD_PASS_SCORE",
                defaults.third_world_pass_score,
            )?,
            language_baseline: read_number("APP_LANGUAGE_BASELINE", defaults.language_baseline)?,
            threat_level_ceiling: read_number(
                "APP_THREAT_LEVEL_CEILING",
                defaults.threat_level_ceiling,
            )?,
        };

        let log_level = env::var("APP_LOG_LEVEL")
            .unwrap_or_else(|_| environment.default_log_level().to_string());

        Ok(Self {
            environment,
            catalog: CatalogConfig { products },
            evaluation,
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Products seeded into the demo catalog when no CSV export is supplied.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub products: Vec<String>,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

fn parse_product_list(raw: &str) -> Result<Vec<String>, ConfigError> {
    let products: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect();

    if products.is_empty() {
        return Err(ConfigError::EmptyCatalog);
    }
    Ok(products)
}

fn read_number<T: std::str::FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidInteger { key, value }),
        Err(_) => Ok(default),
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidInteger { key: &'static str, value: String },
    EmptyCatalog,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidInteger { key, value } => {
                write!(f, "{key} must be a valid integer (found '{value}')")
            }
            ConfigError::EmptyCatalog => {
                write!(f, "APP_CATALOG_PRODUCTS must list at least one product")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
