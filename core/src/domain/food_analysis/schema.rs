use serde_json::json;

fn nutrition_properties() -> serde_json::Value {
    json!({
        "calories": { "type": "number" },
        "protein": { "type": "number" },
        "carbs": { "type": "number" },
        "fats": { "type": "number" }
    })
}

/// Returns the JSON schema pinned on food image analysis requests
pub fn get_food_analysis_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "mealType": {
                "type": "string",
                "enum": ["Café da Manhã", "Almoço", "Jantar", "Lanche"]
            },
            "totalCalories": { "type": "number" },
            "idealCaloriesRange": {
                "type": "object",
                "properties": {
                    "min": { "type": "number" },
                    "max": { "type": "number" }
                },
                "required": ["min", "max"]
            },
            "totalMacros": {
                "type": "object",
                "properties": nutrition_properties(),
                "required": ["calories", "protein", "carbs", "fats"]
            },
            "items": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "portion": { "type": "string" },
                        "nutrition": {
                            "type": "object",
                            "properties": nutrition_properties()
                        }
                    },
                    "required": ["name", "portion"]
                }
            },
            "healthTips": {
                "type": "array",
                "items": { "type": "string" }
            },
            "exerciseSuggestions": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "activity": { "type": "string" },
                        "durationMinutes": { "type": "number" },
                        "intensity": {
                            "type": "string",
                            "enum": ["leve", "moderada", "intensa"]
                        }
                    },
                    "required": ["activity", "durationMinutes", "intensity"]
                }
            },
            "healthyAlternatives": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "title": { "type": "string" },
                        "description": { "type": "string" }
                    },
                    "required": ["title", "description"]
                }
            }
        },
        "required": [
            "mealType", "totalCalories", "idealCaloriesRange", "totalMacros",
            "items", "healthTips", "exerciseSuggestions", "healthyAlternatives"
        ]
    })
}
