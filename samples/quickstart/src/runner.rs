use anyhow::Result;
use quickstart_database::{DatabaseConfig, MongoClient};
use quickstart_utils::{AppConfig, MongoConfig, QuickstartResult, SamplesConfig};
use std::time::Duration;
use tracing::{info, Instrument};

use crate::delete::{self, DeleteReport};
use crate::read::{self, ReadReport};
use crate::sample::Sample;
use crate::update::{self, UpdateReport};

/// Everything a sample needs: one connected client and the loaded configuration.
#[derive(Debug, Clone)]
pub struct SampleContext {
    pub client: MongoClient,
    pub config: AppConfig,
}

impl SampleContext {
    pub fn new(client: MongoClient, config: AppConfig) -> Self {
        Self { client, config }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SampleOutcome {
    Read(ReadReport),
    Update(UpdateReport),
    Delete(DeleteReport),
}

pub async fn run_sample(ctx: &SampleContext, sample: Sample) -> Result<SampleOutcome> {
    let span = tracing::info_span!("sample", name = %sample);

    async {
        info!("Running sample");
        let outcome = match sample {
            Sample::ReadDocuments => SampleOutcome::Read(read::run(ctx).await?),
            Sample::UpdateDocuments => SampleOutcome::Update(update::run(ctx).await?),
            Sample::DeleteDocuments => SampleOutcome::Delete(delete::run(ctx).await?),
        };
        info!("Sample finished");
        Ok::<_, anyhow::Error>(outcome)
    }
    .instrument(span)
    .await
}

/// Runs the samples one after another, stopping at the first failure.
pub async fn run_samples(ctx: &SampleContext, samples: &[Sample]) -> Result<Vec<SampleOutcome>> {
    let mut outcomes = Vec::with_capacity(samples.len());
    for sample in samples {
        outcomes.push(run_sample(ctx, *sample).await?);
    }
    Ok(outcomes)
}

/// The command line argument wins over `samples.run`; with neither, every enabled sample runs.
pub fn select_samples(arg: Option<&str>, config: &SamplesConfig) -> QuickstartResult<Vec<Sample>> {
    match arg.or(config.run.as_deref()) {
        Some(name) if !name.eq_ignore_ascii_case("all") => Ok(vec![name.parse()?]),
        _ => Ok(Sample::ALL.into_iter().filter(Sample::enabled).collect()),
    }
}

pub fn database_config(config: &MongoConfig) -> DatabaseConfig {
    DatabaseConfig {
        mongodb_url: config.url.clone(),
        server_selection_timeout: config.server_selection_timeout_seconds.map(Duration::from_secs),
        ..DatabaseConfig::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_config_maps_mongo_settings() {
        let mut mongo = MongoConfig {
            url: "mongodb://db.internal:27018".to_string(),
            ..MongoConfig::default()
        };
        let db_config = database_config(&mongo);
        assert_eq!(db_config.mongodb_url, "mongodb://db.internal:27018");
        assert!(db_config.server_selection_timeout.is_none());

        mongo.server_selection_timeout_seconds = Some(5);
        assert_eq!(
            database_config(&mongo).server_selection_timeout,
            Some(Duration::from_secs(5))
        );
    }

    #[test]
    fn test_select_defaults_to_all_enabled() {
        let samples = select_samples(None, &SamplesConfig::default()).unwrap();
        assert_eq!(samples, Sample::ALL.to_vec());

        let samples = select_samples(Some("ALL"), &SamplesConfig::default()).unwrap();
        assert_eq!(samples.len(), 3);
    }

    #[test]
    fn test_select_argument_overrides_config() {
        let config = SamplesConfig {
            run: Some("update".to_string()),
        };
        assert_eq!(select_samples(None, &config).unwrap(), vec![Sample::UpdateDocuments]);
        assert_eq!(
            select_samples(Some("delete-documents"), &config).unwrap(),
            vec![Sample::DeleteDocuments]
        );
    }

    #[test]
    fn test_select_unknown_sample_fails() {
        let error = select_samples(Some("aggregate"), &SamplesConfig::default()).unwrap_err();
        assert_eq!(error.to_string(), "Unknown sample: aggregate");
    }
}
