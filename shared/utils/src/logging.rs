use anyhow::Result;
use mongodb::bson::{Bson, Document};
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
    Compact,
}

impl LogFormat {
    /// `json` and `pretty` select those layouts; anything else logs one line per event.
    pub fn parse(format: &str) -> Self {
        match format.to_ascii_lowercase().as_str() {
            "json" => LogFormat::Json,
            "pretty" => LogFormat::Pretty,
            _ => LogFormat::Compact,
        }
    }
}

pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    let file = match &config.file_path {
        Some(file_path) => Some(Mutex::new(
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(file_path)?,
        )),
        None => None,
    };

    match (LogFormat::parse(&config.format), file) {
        (LogFormat::Json, Some(file)) => registry.with(fmt::layer().json().with_writer(file)).try_init()?,
        (LogFormat::Json, None) => registry.with(fmt::layer().json()).try_init()?,
        (LogFormat::Pretty, Some(file)) => registry
            .with(fmt::layer().pretty().with_ansi(false).with_writer(file))
            .try_init()?,
        (LogFormat::Pretty, None) => registry.with(fmt::layer().pretty()).try_init()?,
        (LogFormat::Compact, Some(file)) => registry
            .with(fmt::layer().compact().with_ansi(false).with_writer(file))
            .try_init()?,
        (LogFormat::Compact, None) => registry.with(fmt::layer().compact().with_target(false)).try_init()?,
    }

    tracing::debug!("Logging initialized with level: {}", config.level);
    Ok(())
}

/// Renders a document as relaxed extended JSON, the shape the mongo shell prints.
pub fn document_to_json(document: &Document) -> serde_json::Value {
    Bson::Document(document.clone()).into_relaxed_extjson()
}

pub fn log_document(title: &str, document: &Document) {
    tracing::info!(document = %document_to_json(document), "{}", title);
}
