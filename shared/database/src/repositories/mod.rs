//! Repository module for collection CRUD operations
//!
//! One generic repository serves both idioms: typed documents
//! (`Collection<User>`) and schema-less ones (`Collection<Document>`).

pub mod collection;

pub use collection::CollectionRepository;

use mongodb::bson::Document;
use quickstart_models::{AppPerson, User};

pub type UserRepository = CollectionRepository<User>;
pub type PersonRepository = CollectionRepository<AppPerson>;
pub type DocumentRepository = CollectionRepository<Document>;
