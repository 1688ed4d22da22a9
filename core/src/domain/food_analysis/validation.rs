use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError, food_analysis::entities::FoodAnalysisResponse,
};

/// Parses raw model output into an untyped JSON value.
pub(crate) fn parse_payload(raw: &str) -> Result<Value, CoreError> {
    serde_json::from_str(raw.trim()).map_err(|e| {
        error!("Failed to parse LLM response: {}", e);
        CoreError::MalformedResponse(format!("response is not valid JSON: {}", e))
    })
}

/// Looks up a dot-separated path; `null` counts as missing.
pub(crate) fn require<'a>(value: &'a Value, path: &str, at: &str) -> Result<&'a Value, CoreError> {
    path.split('.')
        .try_fold(value, |current, key| {
            current.get(key).filter(|v| !v.is_null())
        })
        .ok_or_else(|| {
            error!("LLM response is missing `{}{}`", at, path);
            CoreError::MalformedResponse(format!("missing required field `{}{}`", at, path))
        })
}

fn wrong_type(path: &str, at: &str, expected: &str) -> CoreError {
    error!("LLM response field `{}{}` is not a {}", at, path, expected);
    CoreError::MalformedResponse(format!("field `{}{}` must be a {}", at, path, expected))
}

pub(crate) fn require_number(value: &Value, path: &str, at: &str) -> Result<f64, CoreError> {
    require(value, path, at)?
        .as_f64()
        .ok_or_else(|| wrong_type(path, at, "number"))
}

pub(crate) fn require_string<'a>(
    value: &'a Value,
    path: &str,
    at: &str,
) -> Result<&'a str, CoreError> {
    require(value, path, at)?
        .as_str()
        .ok_or_else(|| wrong_type(path, at, "string"))
}

pub(crate) fn require_array<'a>(
    value: &'a Value,
    path: &str,
    at: &str,
) -> Result<&'a Vec<Value>, CoreError> {
    require(value, path, at)?
        .as_array()
        .ok_or_else(|| wrong_type(path, at, "array"))
}

/// Converts an already validated payload into its typed shape.
pub(crate) fn into_typed<T: DeserializeOwned>(payload: Value) -> Result<T, CoreError> {
    serde_json::from_value(payload).map_err(|e| {
        error!("LLM response does not match the expected shape: {}", e);
        CoreError::MalformedResponse(format!("unexpected response shape: {}", e))
    })
}

/// Validates a food analysis response against the required-field contract
/// before building the typed value. Any violation fails the whole analysis.
pub fn parse_food_analysis(raw: &str) -> Result<FoodAnalysisResponse, CoreError> {
    let payload = parse_payload(raw)?;

    require_string(&payload, "mealType", "")?;
    for path in [
        "totalCalories",
        "idealCaloriesRange.min",
        "idealCaloriesRange.max",
        "totalMacros.calories",
        "totalMacros.protein",
        "totalMacros.carbs",
        "totalMacros.fats",
    ] {
        require_number(&payload, path, "")?;
    }

    for (index, item) in require_array(&payload, "items", "")?.iter().enumerate() {
        let at = format!("items[{}].", index);
        require_string(item, "name", &at)?;
        require_string(item, "portion", &at)?;
    }

    for (index, tip) in require_array(&payload, "healthTips", "")?.iter().enumerate() {
        if !tip.is_string() {
            return Err(wrong_type(&format!("healthTips[{}]", index), "", "string"));
        }
    }

    for (index, suggestion) in require_array(&payload, "exerciseSuggestions", "")?
        .iter()
        .enumerate()
    {
        let at = format!("exerciseSuggestions[{}].", index);
        require_string(suggestion, "activity", &at)?;
        require_number(suggestion, "durationMinutes", &at)?;
        require_string(suggestion, "intensity", &at)?;
    }

    for (index, alternative) in require_array(&payload, "healthyAlternatives", "")?
        .iter()
        .enumerate()
    {
        let at = format!("healthyAlternatives[{}].", index);
        require_string(alternative, "title", &at)?;
        require_string(alternative, "description", &at)?;
    }

    into_typed(payload)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domain::food_analysis::entities::{Intensity, MealType};

    pub(crate) fn sample_analysis_json(total_calories: f64) -> Value {
        serde_json::json!({
            "mealType": "Almoço",
            "totalCalories": total_calories,
            "idealCaloriesRange": { "min": 500, "max": 700 },
            "totalMacros": { "calories": total_calories, "protein": 35, "carbs": 70, "fats": 20 },
            "items": [
                {
                    "name": "Arroz integral",
                    "portion": "1 xícara",
                    "nutrition": { "calories": 215, "protein": 5, "carbs": 45, "fats": 2 }
                },
                { "name": "Frango grelhado", "portion": "150g" }
            ],
            "healthTips": ["Beba água durante a refeição"],
            "exerciseSuggestions": [
                { "activity": "Corrida", "durationMinutes": 45, "intensity": "intensa" },
                { "activity": "Ciclismo", "durationMinutes": 60, "intensity": "moderada" },
                { "activity": "Caminhada", "durationMinutes": 120, "intensity": "leve" }
            ],
            "healthyAlternatives": [
                { "title": "Troque o arroz", "description": "Use quinoa." },
                { "title": "Mais salada", "description": "Dobre as folhas." },
                { "title": "Menos óleo", "description": "Prefira assados." }
            ]
        })
    }

    #[test]
    fn parses_a_complete_response() {
        let raw = sample_analysis_json(650.0).to_string();
        let analysis = parse_food_analysis(&raw).unwrap();

        assert_eq!(analysis.meal_type, MealType::Lunch);
        assert_eq!(analysis.total_calories, 650.0);
        assert_eq!(analysis.ideal_calories_range.max, 700.0);
        assert_eq!(analysis.items.len(), 2);
        assert_eq!(analysis.items[1].nutrition.calories, 0.0);
        assert_eq!(analysis.exercise_suggestions[0].intensity, Intensity::Intense);
        assert_eq!(analysis.healthy_alternatives.len(), 3);
    }

    #[test]
    fn missing_total_macros_is_malformed() {
        let mut payload = sample_analysis_json(650.0);
        payload.as_object_mut().unwrap().remove("totalMacros");

        let err = parse_food_analysis(&payload.to_string()).unwrap_err();
        assert!(matches!(err, CoreError::MalformedResponse(msg) if msg.contains("totalMacros")));
    }

    #[test]
    fn missing_macro_field_is_malformed() {
        let mut payload = sample_analysis_json(650.0);
        payload["totalMacros"]
            .as_object_mut()
            .unwrap()
            .remove("fats");

        let err = parse_food_analysis(&payload.to_string()).unwrap_err();
        assert_eq!(
            err,
            CoreError::MalformedResponse("missing required field `totalMacros.fats`".to_string())
        );
    }

    #[test]
    fn exercise_without_intensity_is_malformed() {
        let mut payload = sample_analysis_json(650.0);
        payload["exerciseSuggestions"][1]
            .as_object_mut()
            .unwrap()
            .remove("intensity");

        let err = parse_food_analysis(&payload.to_string()).unwrap_err();
        assert_eq!(
            err,
            CoreError::MalformedResponse(
                "missing required field `exerciseSuggestions[1].intensity`".to_string()
            )
        );
    }

    #[test]
    fn wrong_types_are_malformed() {
        let mut payload = sample_analysis_json(650.0);
        payload["totalCalories"] = Value::String("muitas".to_string());
        assert!(matches!(
            parse_food_analysis(&payload.to_string()),
            Err(CoreError::MalformedResponse(_))
        ));

        let mut payload = sample_analysis_json(650.0);
        payload["healthTips"] = serde_json::json!([1, 2]);
        assert!(matches!(
            parse_food_analysis(&payload.to_string()),
            Err(CoreError::MalformedResponse(_))
        ));
    }

    #[test]
    fn null_item_nutrition_does_not_fail_the_analysis() {
        let mut payload = sample_analysis_json(650.0);
        payload["items"][0]["nutrition"] = Value::Null;
        payload["items"][1]["nutrition"] = serde_json::json!({ "calories": 250, "fats": null });

        let analysis = parse_food_analysis(&payload.to_string()).unwrap();
        assert_eq!(analysis.items[0].nutrition.calories, 0.0);
        assert_eq!(analysis.items[1].nutrition.calories, 250.0);
        assert_eq!(analysis.items[1].nutrition.fats, 0.0);
    }

    #[test]
    fn non_json_text_is_malformed() {
        assert!(matches!(
            parse_food_analysis("Desculpe, não consegui analisar."),
            Err(CoreError::MalformedResponse(_))
        ));
    }

    #[test]
    fn unknown_meal_type_is_coerced_not_rejected() {
        let mut payload = sample_analysis_json(300.0);
        payload["mealType"] = Value::String("Brunch".to_string());

        let analysis = parse_food_analysis(&payload.to_string()).unwrap();
        assert_eq!(analysis.meal_type, MealType::Snack);
    }
}
