use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;
use utoipa::ToSchema;

use crate::domain::{common::normalize_label, food_analysis::entities::ValueRange};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
pub enum Gender {
    #[serde(rename = "Masculino")]
    Male,
    #[serde(rename = "Feminino")]
    Female,
    #[serde(rename = "Outro")]
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Masculino",
            Gender::Female => "Feminino",
            Gender::Other => "Outro",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match normalize_label(value).as_str() {
            "masculino" | "male" => Some(Gender::Male),
            "feminino" | "female" => Some(Gender::Female),
            "outro" | "other" => Some(Gender::Other),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for Gender {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Gender::parse(&value).unwrap_or_else(|| {
            warn!(gender = %value, "Unrecognized gender, using Outro");
            Gender::Other
        }))
    }
}

/// Body-profile assessment produced once per profile submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileAnalysis {
    pub ideal_weight_range: ValueRange,
    pub health_status: String,
    pub hero_advice: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub email: String,
    pub name: String,
    pub gender: Gender,
    pub age: u32,
    /// Kilograms.
    pub weight: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<ProfileAnalysis>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_serializes_with_wire_labels() {
        let user = User {
            email: "aquiles@olimpo.gr".to_string(),
            name: "Aquiles".to_string(),
            gender: Gender::Male,
            age: 30,
            weight: 80.0,
            analysis: None,
        };

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["gender"], "Masculino");
        assert!(json.get("analysis").is_none());
    }

    #[test]
    fn gender_accepts_english_and_falls_back_to_other() {
        assert_eq!(Gender::parse("female"), Some(Gender::Female));
        let gender: Gender = serde_json::from_str("\"não informado\"").unwrap();
        assert_eq!(gender, Gender::Other);
    }
}
