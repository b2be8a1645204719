//! Read sample: find a single user by id and all female users, first through
//! the typed `User` collection, then through the schema-less handle.

use anyhow::Result;
use mongodb::bson::{self, doc, oid::ObjectId};
use quickstart_database::{filters, reset_database, DocumentRepository, UserRepository};
use quickstart_models::{Gender, User};
use quickstart_utils::{generate_user, generate_users, log_document, QuickstartError};
use tracing::info;

use crate::runner::SampleContext;
use crate::sample::Sample;

#[derive(Debug, Clone, PartialEq)]
pub struct ReadReport {
    pub seeded: u64,
    pub seeded_id: ObjectId,
    pub found: User,
    pub female_count: usize,
    pub untyped_matches_typed: bool,
}

pub async fn run(ctx: &SampleContext) -> Result<ReadReport> {
    let config = &ctx.config.mongodb;
    let database = reset_database(&ctx.client, Sample::ReadDocuments.database(config)).await?;
    let users = UserRepository::new(&database, &config.users_collection);

    let app_person = generate_user()?;
    users.insert_one(&app_person).await?;
    users
        .insert_many(&generate_users(ctx.config.seed.batch_size)?)
        .await?;
    let seeded = users.count_all().await?;

    // Typed
    let found = users
        .find_one(filters::by_id(app_person.id))
        .await?
        .ok_or_else(|| QuickstartError::not_found(format!("user {}", app_person.id)))?;
    info!(id = %found.id, name = %found.full_name(), "Found seeded user");
    log_document("Document Find with filter", &bson::to_document(&found)?);

    let females = users.find_many(filters::by_gender(Gender::Female)).await?;
    info!("Found {} female persons", females.len());

    // Untyped, once through the filter builder and once with a literal document
    let documents: DocumentRepository = users.untyped();
    let by_builder = documents.find_one(filters::by_id(app_person.id)).await?;
    let by_literal = documents
        .find_one(doc! { "_id": found.id })
        .await?
        .ok_or_else(|| QuickstartError::not_found(format!("document {}", found.id)))?;
    log_document("Document", &by_literal);

    let untyped_matches_typed = by_builder.as_ref() == Some(&by_literal)
        && bson::from_document::<User>(by_literal)? == found;

    Ok(ReadReport {
        seeded,
        seeded_id: app_person.id,
        found,
        female_count: females.len(),
        untyped_matches_typed,
    })
}
