//! Delete sample: remove one person by id and everyone in the (1200, 3500)
//! salary range, then delete by `salary > 2000` through the schema-less handle.

use anyhow::Result;
use quickstart_database::{filters, reset_database, PersonRepository};
use quickstart_utils::{generate_person, generate_persons};
use tracing::info;

use crate::runner::SampleContext;
use crate::sample::Sample;
use crate::{SALARY_LOWER_BOUND, SALARY_UPPER_BOUND};

pub const UNTYPED_SALARY_THRESHOLD: f64 = 2000.0;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteReport {
    pub seeded: u64,
    pub deleted_by_id: u64,
    pub in_salary_range: u64,
    pub deleted_in_range: u64,
    pub untyped_deleted_one: u64,
    pub untyped_deleted_many: u64,
    pub remaining: u64,
}

pub async fn run(ctx: &SampleContext) -> Result<DeleteReport> {
    let config = &ctx.config.mongodb;
    let database = reset_database(&ctx.client, Sample::DeleteDocuments.database(config)).await?;
    let persons = PersonRepository::new(&database, &config.users_collection);

    let app_person = generate_person()?;
    persons.insert_one(&app_person).await?;
    persons
        .insert_many(&generate_persons(ctx.config.seed.batch_size)?)
        .await?;

    let mut report = DeleteReport {
        seeded: persons.count_all().await?,
        ..DeleteReport::default()
    };

    // Typed
    report.deleted_by_id = persons.delete_one(filters::by_id(app_person.id)).await?;
    if report.deleted_by_id == 1 {
        info!("Document {} deleted", app_person.id);
    }

    let salary_filter = filters::salary_between(SALARY_LOWER_BOUND, SALARY_UPPER_BOUND);
    report.in_salary_range = persons.count(salary_filter.clone()).await?;
    report.deleted_in_range = persons.delete_many(salary_filter).await?;
    if report.deleted_in_range == report.in_salary_range {
        info!("{} users deleted", report.in_salary_range);
    }

    // Untyped
    let documents = persons.untyped();
    let above_threshold = filters::salary_greater_than(UNTYPED_SALARY_THRESHOLD);

    report.untyped_deleted_one = documents.delete_one(above_threshold.clone()).await?;
    if report.untyped_deleted_one == 1 {
        info!("Person deleted");
    }

    report.untyped_deleted_many = documents.delete_many(above_threshold).await?;
    if report.untyped_deleted_many > 1 {
        info!("Persons {} deleted", report.untyped_deleted_many);
    }

    report.remaining = persons.count_all().await?;
    Ok(report)
}
