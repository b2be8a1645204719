//! Synthetic people for seeding the sample collections.

use chrono::{Duration, Utc};
use fake::faker::address::en::{BuildingNumber, CityName, CountryName, StreetName, ZipCode};
use fake::faker::company::en::CompanyName;
use fake::faker::internet::en::{SafeEmail, Username};
use fake::faker::name::en::{FirstName, LastName};
use fake::faker::phone_number::en::PhoneNumber;
use fake::Fake;
use mongodb::bson::{oid::ObjectId, DateTime};
use quickstart_models::{Address, AppPerson, Gender, User};
use rand::Rng;
use validator::Validate;

use crate::error::QuickstartResult;

pub const MIN_SALARY: f64 = 500.0;
pub const MAX_SALARY: f64 = 5000.0;

const MIN_AGE_DAYS: i64 = 18 * 365;
const MAX_AGE_DAYS: i64 = 70 * 365;

pub fn generate_user_with_rng<R: Rng>(rng: &mut R) -> User {
    let street_name: String = StreetName().fake_with_rng(rng);
    let building: String = BuildingNumber().fake_with_rng(rng);
    let age_days = rng.gen_range(MIN_AGE_DAYS..MAX_AGE_DAYS);
    let born = Utc::now() - Duration::days(age_days);

    User {
        id: ObjectId::new(),
        first_name: FirstName().fake_with_rng(rng),
        last_name: LastName().fake_with_rng(rng),
        user_name: Username().fake_with_rng(rng),
        email: SafeEmail().fake_with_rng(rng),
        gender: if rng.gen_bool(0.5) { Gender::Male } else { Gender::Female },
        date_of_birth: DateTime::from_millis(born.timestamp_millis()),
        salary: random_salary(rng),
        phone: PhoneNumber().fake_with_rng(rng),
        address: Address {
            street: format!("{} {}", building, street_name),
            city: CityName().fake_with_rng(rng),
            zip_code: ZipCode().fake_with_rng(rng),
            country: CountryName().fake_with_rng(rng),
        },
        company: CompanyName().fake_with_rng(rng),
    }
}

pub fn generate_user() -> QuickstartResult<User> {
    validated(generate_user_with_rng(&mut rand::thread_rng()))
}

pub fn generate_users(count: usize) -> QuickstartResult<Vec<User>> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| validated(generate_user_with_rng(&mut rng)))
        .collect()
}

pub fn generate_person() -> QuickstartResult<AppPerson> {
    generate_user().map(AppPerson::from).and_then(validated)
}

pub fn generate_persons(count: usize) -> QuickstartResult<Vec<AppPerson>> {
    generate_users(count)?
        .into_iter()
        .map(|user| validated(AppPerson::from(user)))
        .collect()
}

/// Rejects a generated document that would not pass model validation.
pub fn validated<T: Validate>(document: T) -> QuickstartResult<T> {
    document.validate()?;
    Ok(document)
}

/// Uniform in `[MIN_SALARY, MAX_SALARY)`, rounded to cents.
fn random_salary<R: Rng>(rng: &mut R) -> f64 {
    let salary: f64 = rng.gen_range(MIN_SALARY..MAX_SALARY);
    ((salary * 100.0).round() / 100.0).min(MAX_SALARY - 0.01)
}
