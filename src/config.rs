use chrono::NaiveDate;
use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub planning: PlanningConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// What to plan: the dates to fill, the active rules and the candidate pool.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct PlanningConfig {
    /// ISO-8601 dates to plan meals for.
    #[serde(default)]
    pub dates: Vec<String>,
    /// Active rule names; unknown names fail at startup.
    #[serde(default)]
    pub rules: Vec<String>,
    /// Candidate meal names; empty means the whole catalog.
    #[serde(default)]
    pub meals: Vec<String>,
    /// Whole-plan retries before a run is declared infeasible.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

fn default_max_attempts() -> u32 {
    10
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    #[serde(default = "default_diary_path")]
    pub diary_path: String,
    #[serde(default = "default_shopping_list_dir")]
    pub shopping_list_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            diary_path: default_diary_path(),
            shopping_list_dir: default_shopping_list_dir(),
        }
    }
}

fn default_diary_path() -> String {
    "data/meal_diary.json".to_string()
}

fn default_shopping_list_dir() -> String {
    "data/shopping_lists".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (`MEALPREP__PLANNING__MAX_ATTEMPTS`, etc.)
    /// 2. Config file specified by path or `CONFIG_PATH`
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("planning.max_attempts", 10)?
            .set_default("storage.diary_path", default_diary_path())?
            .set_default("storage.shopping_list_dir", default_shopping_list_dir())?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("MEALPREP")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("planning.dates")
                .with_list_parse_key("planning.rules")
                .with_list_parse_key("planning.meals"),
        );

        builder.build()?.try_deserialize()
    }

    /// Cross-field validation; name resolution against the catalog and the
    /// rule registry happens separately, at startup.
    pub fn validate(&self) -> Result<(), String> {
        if self.planning.max_attempts < 1 {
            return Err("planning.max_attempts must be at least 1".to_string());
        }
        self.planning_dates().map(|_| ())
    }

    /// The configured dates, parsed and checked for duplicates, in order.
    pub fn planning_dates(&self) -> Result<Vec<NaiveDate>, String> {
        let mut dates = Vec::with_capacity(self.planning.dates.len());
        for raw in &self.planning.dates {
            let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map_err(|e| format!("invalid planning date \"{raw}\": {e}"))?;
            if dates.contains(&date) {
                return Err(format!("duplicate planning date \"{raw}\""));
            }
            dates.push(date);
        }
        Ok(dates)
    }
}
