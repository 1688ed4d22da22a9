use crate::domain::{
    common::entities::app_errors::CoreError,
    food_analysis::validation::{into_typed, parse_payload, require_number, require_string},
    profile::entities::ProfileAnalysis,
};

/// Validates a profile assessment response before building the typed value.
pub fn parse_profile_analysis(raw: &str) -> Result<ProfileAnalysis, CoreError> {
    let payload = parse_payload(raw)?;

    require_number(&payload, "idealWeightRange.min", "")?;
    require_number(&payload, "idealWeightRange.max", "")?;
    require_string(&payload, "healthStatus", "")?;
    require_string(&payload, "heroAdvice", "")?;

    into_typed(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_assessment() {
        let analysis = parse_profile_analysis(
            r#"{"idealWeightRange":{"min":70,"max":78},"healthStatus":"Físico Divino","heroAdvice":"Coma bem, treine forte."}"#,
        )
        .unwrap();

        assert_eq!(analysis.ideal_weight_range.min, 70.0);
        assert_eq!(analysis.health_status, "Físico Divino");
    }

    #[test]
    fn missing_advice_is_malformed() {
        let err = parse_profile_analysis(
            r#"{"idealWeightRange":{"min":70,"max":78},"healthStatus":"Físico Divino"}"#,
        )
        .unwrap_err();

        assert_eq!(
            err,
            CoreError::MalformedResponse("missing required field `heroAdvice`".to_string())
        );
    }

    #[test]
    fn range_bound_must_be_numeric() {
        let err = parse_profile_analysis(
            r#"{"idealWeightRange":{"min":"setenta","max":78},"healthStatus":"x","heroAdvice":"y"}"#,
        )
        .unwrap_err();

        assert!(matches!(err, CoreError::MalformedResponse(_)));
    }
}
