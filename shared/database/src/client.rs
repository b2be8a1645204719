use anyhow::{Context, Result};
use mongodb::{bson::doc, options::ClientOptions, Client, Database};

use crate::DatabaseConfig;

pub type MongoClient = Client;
pub type MongoDatabase = Database;

pub async fn create_mongo_client(database_url: &str) -> Result<MongoClient> {
    create_mongo_client_with(&DatabaseConfig {
        mongodb_url: database_url.to_string(),
        ..DatabaseConfig::default()
    })
    .await
}

pub(crate) async fn create_mongo_client_with(config: &DatabaseConfig) -> Result<MongoClient> {
    let mut options = ClientOptions::parse(&config.mongodb_url)
        .await
        .context("Failed to parse MongoDB connection string")?;
    options.app_name = Some(config.app_name.clone());
    if let Some(timeout) = config.server_selection_timeout {
        options.server_selection_timeout = Some(timeout);
    }

    let client = Client::with_options(options)?;

    // Test connection
    health_check(&client)
        .await
        .context("Failed to reach MongoDB")?;

    tracing::info!("Connected to MongoDB database");
    Ok(client)
}

pub fn get_database(client: &MongoClient, database_name: &str) -> MongoDatabase {
    client.database(database_name)
}

/// Drops `database_name` so every run starts from an empty database.
pub async fn reset_database(client: &MongoClient, database_name: &str) -> Result<MongoDatabase> {
    let database = client.database(database_name);
    database
        .drop(None)
        .await
        .with_context(|| format!("Failed to drop database {}", database_name))?;

    tracing::info!(database = database_name, "Database dropped");
    Ok(database)
}

pub async fn health_check(client: &MongoClient) -> Result<()> {
    client
        .database("admin")
        .run_command(doc! {"ping": 1}, None)
        .await?;
    Ok(())
}
