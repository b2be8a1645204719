pub mod client;
pub mod filters;
pub mod repositories;

pub use crate::client::{
    create_mongo_client, get_database, health_check as mongo_health_check, reset_database,
    MongoClient, MongoDatabase,
};
pub use crate::repositories::*;

use anyhow::Result;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub mongodb_url: String,
    pub app_name: String,
    pub server_selection_timeout: Option<Duration>,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            mongodb_url: "mongodb://localhost:27017".to_string(),
            app_name: "quickstart-samples".to_string(),
            server_selection_timeout: None,
        }
    }
}

pub async fn initialize_database(config: &DatabaseConfig) -> Result<MongoClient> {
    client::create_mongo_client_with(config).await
}
