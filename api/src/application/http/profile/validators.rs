use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;
use zeus_core::domain::profile::entities::Gender;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct SubmitProfileValidator {
    #[validate(email(message = "email must be a valid address"))]
    #[schema(example = "aquiles@olimpo.gr")]
    pub email: String,
    #[validate(length(min = 1, max = 100, message = "name must be between 1 and 100 characters"))]
    #[schema(example = "Aquiles")]
    pub name: String,
    #[schema(example = "Masculino")]
    pub gender: Gender,
    #[validate(range(min = 1, max = 120, message = "age must be between 1 and 120"))]
    #[schema(example = 30)]
    pub age: u32,
    /// Kilograms.
    #[validate(range(min = 1.0, max = 500.0, message = "weight must be between 1 and 500 kg"))]
    #[schema(example = 80.0)]
    pub weight: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> SubmitProfileValidator {
        SubmitProfileValidator {
            email: "aquiles@olimpo.gr".to_string(),
            name: "Aquiles".to_string(),
            gender: Gender::Male,
            age: 30,
            weight: 80.0,
        }
    }

    #[test]
    fn accepts_a_complete_profile() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_fields() {
        let mut profile = valid();
        profile.email = "not-an-email".to_string();
        let errors = profile.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));

        let mut profile = valid();
        profile.age = 0;
        profile.weight = 0.0;
        profile.name = String::new();
        let errors = profile.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("age"));
        assert!(fields.contains_key("weight"));
        assert!(fields.contains_key("name"));
    }

    #[test]
    fn gender_labels_are_accepted_loosely() {
        let profile: SubmitProfileValidator = serde_json::from_value(serde_json::json!({
            "email": "atena@olimpo.gr",
            "name": "Atena",
            "gender": "feminino",
            "age": 28,
            "weight": 62.5
        }))
        .unwrap();

        assert_eq!(profile.gender, Gender::Female);
    }
}
