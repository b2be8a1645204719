//! Update sample: `$set` a phone number on one user and raise every salary in
//! the (1200, 3500) range to 4000, typed first and then schema-less.

use anyhow::Result;
use mongodb::bson::oid::ObjectId;
use quickstart_database::{filters, reset_database, UserRepository};
use quickstart_models::fields;
use quickstart_utils::{generate_user, generate_users};
use tracing::info;

use crate::runner::SampleContext;
use crate::sample::Sample;
use crate::{SALARY_LOWER_BOUND, SALARY_UPPER_BOUND};

pub const TYPED_PHONE: &str = "123-456-789";
pub const UNTYPED_PHONE: &str = "123-456-678";
pub const RAISED_SALARY: f64 = 4000.0;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateReport {
    pub target_id: Option<ObjectId>,
    pub phone_updated: bool,
    pub in_salary_range: u64,
    pub salaries_matched: u64,
    pub untyped_phone_updated: bool,
    pub untyped_salaries_matched: u64,
}

pub async fn run(ctx: &SampleContext) -> Result<UpdateReport> {
    let config = &ctx.config.mongodb;
    let database = reset_database(&ctx.client, Sample::UpdateDocuments.database(config)).await?;
    let users = UserRepository::new(&database, &config.users_collection);

    let app_person = generate_user()?;
    users.insert_one(&app_person).await?;
    users
        .insert_many(&generate_users(ctx.config.seed.batch_size)?)
        .await?;

    let mut report = UpdateReport {
        target_id: Some(app_person.id),
        ..UpdateReport::default()
    };

    // Typed
    let result = users
        .update_one(filters::by_id(app_person.id), filters::set(fields::PHONE, TYPED_PHONE))
        .await?;
    if result.matched_count == 1 && result.modified_count == 1 {
        report.phone_updated = true;
        info!("Document {} Updated", app_person.id);
    }

    let salary_filter = filters::salary_between(SALARY_LOWER_BOUND, SALARY_UPPER_BOUND);
    report.in_salary_range = users.count(salary_filter.clone()).await?;

    let result = users
        .update_many(salary_filter, filters::set(fields::SALARY, RAISED_SALARY))
        .await?;
    report.salaries_matched = result.matched_count;
    if result.matched_count == report.in_salary_range {
        info!("Salary has been updated for {}", report.in_salary_range);
    }

    // Untyped
    let documents = users.untyped();
    let result = documents
        .update_one(
            filters::eq(fields::ID, app_person.id),
            filters::set(fields::PHONE, UNTYPED_PHONE),
        )
        .await?;
    if result.matched_count == 1 && result.modified_count == 1 {
        report.untyped_phone_updated = true;
        info!("Person updated");
    }

    let salary_filter = filters::and([
        filters::gt(fields::SALARY, SALARY_LOWER_BOUND),
        filters::lt(fields::SALARY, SALARY_UPPER_BOUND),
    ]);
    let result = documents
        .update_many(salary_filter, filters::set(fields::SALARY, RAISED_SALARY))
        .await?;
    report.untyped_salaries_matched = result.matched_count;

    Ok(report)
}
