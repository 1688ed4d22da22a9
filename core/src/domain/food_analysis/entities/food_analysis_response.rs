use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;
use utoipa::ToSchema;

use crate::domain::{
    common::normalize_label,
    food_analysis::entities::{
        ExerciseSuggestion, FoodItem, HealthySuggestion, NutritionInfo, ValueRange,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
pub enum MealType {
    #[serde(rename = "Café da Manhã")]
    Breakfast,
    #[serde(rename = "Almoço")]
    Lunch,
    #[serde(rename = "Jantar")]
    Dinner,
    #[serde(rename = "Lanche")]
    Snack,
}

impl MealType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "Café da Manhã",
            MealType::Lunch => "Almoço",
            MealType::Dinner => "Jantar",
            MealType::Snack => "Lanche",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match normalize_label(value).as_str() {
            "cafe da manha" | "breakfast" => Some(MealType::Breakfast),
            "almoco" | "lunch" => Some(MealType::Lunch),
            "jantar" | "dinner" => Some(MealType::Dinner),
            "lanche" | "snack" => Some(MealType::Snack),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for MealType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(MealType::parse(&value).unwrap_or_else(|| {
            warn!(meal_type = %value, "Unrecognized meal type, using Lanche");
            MealType::Snack
        }))
    }
}

/// Full result of one food-image analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FoodAnalysisResponse {
    pub meal_type: MealType,
    pub total_calories: f64,
    pub ideal_calories_range: ValueRange,
    pub total_macros: NutritionInfo,
    pub items: Vec<FoodItem>,
    pub health_tips: Vec<String>,
    pub exercise_suggestions: Vec<ExerciseSuggestion>,
    pub healthy_alternatives: Vec<HealthySuggestion>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meal_type_round_trips_wire_labels() {
        for meal_type in [
            MealType::Breakfast,
            MealType::Lunch,
            MealType::Dinner,
            MealType::Snack,
        ] {
            let json = serde_json::to_string(&meal_type).unwrap();
            assert_eq!(json, format!("\"{}\"", meal_type.as_str()));
            assert_eq!(serde_json::from_str::<MealType>(&json).unwrap(), meal_type);
        }
    }

    #[test]
    fn meal_type_tolerates_vocabulary_drift() {
        assert_eq!(MealType::parse("cafe da manha"), Some(MealType::Breakfast));
        assert_eq!(MealType::parse("DINNER"), Some(MealType::Dinner));

        let coerced: MealType = serde_json::from_str("\"Ceia\"").unwrap();
        assert_eq!(coerced, MealType::Snack);
    }
}
