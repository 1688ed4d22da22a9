use serde_json::json;

/// Returns the JSON schema pinned on profile assessment requests
pub fn get_profile_analysis_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "idealWeightRange": {
                "type": "object",
                "properties": {
                    "min": { "type": "number" },
                    "max": { "type": "number" }
                },
                "required": ["min", "max"]
            },
            "healthStatus": { "type": "string" },
            "heroAdvice": { "type": "string" }
        },
        "required": ["idealWeightRange", "healthStatus", "heroAdvice"]
    })
}
