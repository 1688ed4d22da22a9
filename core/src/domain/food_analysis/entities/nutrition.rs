use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;
use utoipa::ToSchema;

use crate::domain::common::normalize_label;

/// Calorie and macronutrient content of a single item or a whole meal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct NutritionInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub calories: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub protein: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub carbs: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub fats: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fiber: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FoodItem {
    pub name: String,
    pub portion: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub nutrition: NutritionInfo,
}

/// Reads an explicit `null` the same way as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Inclusive `{min, max}` band, used for calories and for body weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
pub enum Intensity {
    #[serde(rename = "leve")]
    Light,
    #[serde(rename = "moderada")]
    Moderate,
    #[serde(rename = "intensa")]
    Intense,
}

impl Intensity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intensity::Light => "leve",
            Intensity::Moderate => "moderada",
            Intensity::Intense => "intensa",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match normalize_label(value).as_str() {
            "leve" | "light" => Some(Intensity::Light),
            "moderada" | "moderado" | "moderate" => Some(Intensity::Moderate),
            "intensa" | "intenso" | "intense" => Some(Intensity::Intense),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for Intensity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Intensity::parse(&value).unwrap_or_else(|| {
            warn!(intensity = %value, "Unrecognized exercise intensity, using moderada");
            Intensity::Moderate
        }))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseSuggestion {
    pub activity: String,
    pub duration_minutes: f64,
    pub intensity: Intensity,
}

/// A healthier alternative or improvement to the analyzed meal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthySuggestion {
    pub title: String,
    pub description: String,
}
