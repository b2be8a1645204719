//! User documents for the read and update samples.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// A user stored in the `users` collection.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[validate(length(min = 1, max = 255, message = "First name must be between 1 and 255 characters"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 255, message = "Last name must be between 1 and 255 characters"))]
    pub last_name: String,
    #[validate(length(min = 1, message = "User name is required"))]
    pub user_name: String,
    #[validate(email(message = "Email must be a valid email address"))]
    pub email: String,
    pub gender: Gender,
    pub date_of_birth: DateTime,
    #[validate(range(min = 0.0, message = "Salary cannot be negative"))]
    pub salary: f64,
    pub phone: String,
    #[validate]
    pub address: Address,
    pub company: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[validate(length(min = 1, message = "Street is required"))]
    pub street: String,
    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,
    pub zip_code: String,
    pub country: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => f.write_str("Male"),
            Gender::Female => f.write_str("Female"),
        }
    }
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
