//! Person documents for the delete sample.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::user::{Gender, User};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppPerson {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[validate(length(min = 1, max = 255))]
    pub first_name: String,
    #[validate(length(min = 1, max = 255))]
    pub last_name: String,
    pub gender: Gender,
    pub date_of_birth: DateTime,
    #[validate(range(min = 0.0))]
    pub salary: f64,
    pub phone: String,
}

impl From<User> for AppPerson {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            gender: user.gender,
            date_of_birth: user.date_of_birth,
            salary: user.salary,
            phone: user.phone,
        }
    }
}
