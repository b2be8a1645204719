use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::env;

use crate::error::QuickstartResult;

pub const DEFAULT_CONNECTION_STRING: &str = "mongodb://localhost:27017";
pub const PERSONS_DATABASE: &str = "Persons";
pub const SAMPLES_DATABASE: &str = "Samples";
pub const USERS_COLLECTION: &str = "users";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub mongodb: MongoConfig,
    pub seed: SeedConfig,
    pub samples: SamplesConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MongoConfig {
    pub url: String,
    pub persons_database: String,
    pub samples_database: String,
    pub users_collection: String,
    /// How long the driver waits for a reachable server. Driver default when unset.
    pub server_selection_timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Documents inserted by `insert_many` after the single `insert_one`.
    pub batch_size: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplesConfig {
    /// Sample to run when none is given on the command line. Runs all when unset.
    pub run: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub file_path: Option<String>,
}

impl AppConfig {
    pub fn load() -> QuickstartResult<Self> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(
                File::with_name(&format!(
                    "config/{}",
                    env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into())
                ))
                .required(false),
            )
            // Add local config (gitignored)
            .add_source(File::with_name("config/local").required(false))
            // e.g. QUICKSTART__MONGODB__URL
            .add_source(Environment::with_prefix("QUICKSTART").separator("__"));

        Ok(config.build()?.try_deserialize()?)
    }
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_CONNECTION_STRING.to_string(),
            persons_database: PERSONS_DATABASE.to_string(),
            samples_database: SAMPLES_DATABASE.to_string(),
            users_collection: USERS_COLLECTION.to_string(),
            server_selection_timeout_seconds: None,
        }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self { batch_size: 30 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file_path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_target_local_instance() {
        let config = AppConfig::default();
        assert_eq!(config.mongodb.persons_database, "Persons");
        assert_eq!(config.mongodb.samples_database, "Samples");
        assert!(config.samples.run.is_none());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_source_keeps_defaults() {
        let config: AppConfig = Config::builder()
            .set_override("mongodb.url", "mongodb://db.internal:27018")
            .unwrap()
            .set_override("seed.batch_size", 5)
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.mongodb.url, "mongodb://db.internal:27018");
        assert_eq!(config.mongodb.users_collection, "users");
        assert_eq!(config.seed.batch_size, 5);
        assert_eq!(config.logging.format, "pretty");
        assert!(config.mongodb.server_selection_timeout_seconds.is_none());
    }

    #[test]
    fn test_load_reads_prefixed_environment() {
        env::set_var("QUICKSTART__MONGODB__SERVER_SELECTION_TIMEOUT_SECONDS", "5");
        let loaded = AppConfig::load();
        env::set_var("QUICKSTART__SEED__BATCH_SIZE", "lots");
        let invalid = AppConfig::load();
        env::remove_var("QUICKSTART__MONGODB__SERVER_SELECTION_TIMEOUT_SECONDS");
        env::remove_var("QUICKSTART__SEED__BATCH_SIZE");

        assert_eq!(loaded.unwrap().mongodb.server_selection_timeout_seconds, Some(5));
        assert_eq!(invalid.unwrap_err().error_code(), "CONFIGURATION_ERROR");
    }
}
