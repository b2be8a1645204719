//! Filter and update document builders.
//!
//! Every builder returns a plain [`Document`], so the same filter drives a
//! typed `Collection<User>` and an untyped `Collection<Document>` alike.

use mongodb::bson::{doc, oid::ObjectId, Bson, Document};
use quickstart_models::{fields, Gender};

/// `{ field: value }`
pub fn eq(field: &str, value: impl Into<Bson>) -> Document {
    let mut filter = Document::new();
    filter.insert(field, value.into());
    filter
}

/// `{ field: { $gt: value } }`
pub fn gt(field: &str, value: impl Into<Bson>) -> Document {
    eq(field, doc! { "$gt": value.into() })
}

/// `{ field: { $lt: value } }`
pub fn lt(field: &str, value: impl Into<Bson>) -> Document {
    eq(field, doc! { "$lt": value.into() })
}

/// `{ $and: [ ... ] }`
pub fn and(filters: impl IntoIterator<Item = Document>) -> Document {
    let clauses: Vec<Bson> = filters.into_iter().map(Bson::Document).collect();
    doc! { "$and": clauses }
}

pub fn by_id(id: ObjectId) -> Document {
    eq(fields::ID, id)
}

pub fn by_gender(gender: Gender) -> Document {
    eq(fields::GENDER, gender.to_string())
}

pub fn salary_greater_than(salary: f64) -> Document {
    gt(fields::SALARY, salary)
}

/// Salaries strictly between `lower` and `upper`.
pub fn salary_between(lower: f64, upper: f64) -> Document {
    and([gt(fields::SALARY, lower), lt(fields::SALARY, upper)])
}

/// `{ $set: { field: value } }`
pub fn set(field: &str, value: impl Into<Bson>) -> Document {
    doc! { "$set": eq(field, value) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_by_id() {
        let id = ObjectId::new();
        assert_eq!(by_id(id), doc! { "_id": id });
    }

    #[test]
    fn test_by_gender_matches_stored_string() {
        assert_eq!(by_gender(Gender::Female), doc! { "gender": "Female" });
    }

    #[test]
    fn test_salary_between_is_exclusive_and() {
        assert_eq!(
            salary_between(1200.0, 3500.0),
            doc! { "$and": [ { "salary": { "$gt": 1200.0 } }, { "salary": { "$lt": 3500.0 } } ] }
        );
    }

    #[test]
    fn test_set() {
        assert_eq!(
            set(fields::PHONE, "123-456-789"),
            doc! { "$set": { "phone": "123-456-789" } }
        );
    }

    #[test]
    fn test_and_of_nothing_is_empty_list() {
        assert_eq!(and(Vec::new()), doc! { "$and": [] });
    }

    proptest! {
        #[test]
        fn prop_salary_between_keeps_bounds(lower in -1e6f64..1e6, width in 0.0f64..1e6) {
            let upper = lower + width;
            let filter = salary_between(lower, upper);
            let clauses = filter.get_array("$and").unwrap();

            prop_assert_eq!(clauses.len(), 2);
            prop_assert_eq!(&clauses[0], &Bson::Document(gt("salary", lower)));
            prop_assert_eq!(&clauses[1], &Bson::Document(lt("salary", upper)));
        }
    }
}
