//! Property-based tests for the document models.
//!
//! Whatever values a user carries, the stored document must expose them under
//! the shared field names the untyped filters rely on.

use mongodb::bson::{self, oid::ObjectId, DateTime};
use proptest::prelude::*;
use validator::Validate;

use crate::{fields, Address, AppPerson, Gender, User};

fn arb_gender() -> impl Strategy<Value = Gender> {
    prop_oneof![Just(Gender::Male), Just(Gender::Female)]
}

prop_compose! {
    fn arb_user()(
        first_name in "[A-Z][a-z]{1,12}",
        last_name in "[A-Z][a-z]{1,12}",
        local in "[a-z]{3,10}",
        gender in arb_gender(),
        salary in 0.0f64..100_000.0,
        phone in "[0-9]{3}-[0-9]{3}-[0-9]{4}",
        millis in 0i64..2_000_000_000_000i64,
    ) -> User {
        User {
            id: ObjectId::new(),
            user_name: local.clone(),
            email: format!("{}@example.com", local),
            first_name,
            last_name,
            gender,
            date_of_birth: DateTime::from_millis(millis),
            salary,
            phone,
            address: Address {
                street: "1 Main Street".to_string(),
                city: "Springfield".to_string(),
                zip_code: "12345".to_string(),
                country: "USA".to_string(),
            },
            company: "Acme".to_string(),
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_user_document_exposes_filter_fields(user in arb_user()) {
        let doc = bson::to_document(&user).unwrap();

        prop_assert_eq!(doc.get_object_id(fields::ID).unwrap(), user.id);
        prop_assert_eq!(doc.get_f64(fields::SALARY).unwrap(), user.salary);
        prop_assert_eq!(doc.get_str(fields::PHONE).unwrap(), user.phone.as_str());
        let gender = user.gender.to_string();
        prop_assert_eq!(doc.get_str(fields::GENDER).unwrap(), gender.as_str());
        prop_assert!(user.validate().is_ok());
    }

    #[test]
    fn prop_person_shares_user_field_names(user in arb_user()) {
        let user_doc = bson::to_document(&user).unwrap();
        let person_doc = bson::to_document(&AppPerson::from(user)).unwrap();

        for key in person_doc.keys() {
            prop_assert_eq!(person_doc.get(key), user_doc.get(key));
        }
    }
}
