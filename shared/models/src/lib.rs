//! # Quickstart Document Models
//!
//! Document shapes stored by the quick start samples. All models serialize
//! with serde straight into BSON through the driver, using camelCase field
//! names so that typed and untyped filters address the same keys.
//!
//! ## Key Models
//!
//! - **User**: a person with contact, address and salary details
//! - **AppPerson**: a lighter person record used by the delete sample
//! - **Gender**: stored as the strings `"Male"` / `"Female"`

pub mod person;
pub mod user;

#[cfg(test)]
pub mod property_tests;

pub use person::*;
pub use user::*;

/// BSON field names shared by the typed models and untyped filters.
pub mod fields {
    pub const ID: &str = "_id";
    pub const FIRST_NAME: &str = "firstName";
    pub const LAST_NAME: &str = "lastName";
    pub const GENDER: &str = "gender";
    pub const SALARY: &str = "salary";
    pub const PHONE: &str = "phone";
    pub const EMAIL: &str = "email";
}
