use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{food_analysis::entities::ValueRange, profile::entities::Gender};

#[derive(Debug, Clone, PartialEq)]
pub struct AssessProfileInput {
    pub name: String,
    pub gender: Gender,
    pub age: u32,
    pub weight: f64,
}

/// Where the current weight sits against the assessed ideal band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum WeightStatus {
    Below,
    Within,
    Above,
}

impl WeightStatus {
    pub fn compute(weight: f64, ideal: &ValueRange) -> Self {
        if weight < ideal.min {
            WeightStatus::Below
        } else if weight > ideal.max {
            WeightStatus::Above
        } else {
            WeightStatus::Within
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_status_against_band() {
        let ideal = ValueRange {
            min: 70.0,
            max: 78.0,
        };
        assert_eq!(WeightStatus::compute(65.0, &ideal), WeightStatus::Below);
        assert_eq!(WeightStatus::compute(78.0, &ideal), WeightStatus::Within);
        assert_eq!(WeightStatus::compute(80.0, &ideal), WeightStatus::Above);
    }
}
