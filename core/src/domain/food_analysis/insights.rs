use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::food_analysis::entities::{FoodAnalysisResponse, NutritionInfo, ValueRange};

/// How the meal's calories sit against the ideal band for its meal type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CalorieProgress {
    /// `total / max` as a percentage, capped at 100.
    pub percent_of_max: f64,
    pub over_target: bool,
    pub within_range: bool,
}

impl CalorieProgress {
    pub fn compute(total_calories: f64, ideal: &ValueRange) -> Self {
        let percent_of_max = if ideal.max > 0.0 {
            (total_calories / ideal.max * 100.0).clamp(0.0, 100.0)
        } else if total_calories > 0.0 {
            100.0
        } else {
            0.0
        };

        Self {
            percent_of_max,
            over_target: total_calories > ideal.max,
            within_range: ideal.contains(total_calories),
        }
    }
}

/// Share of each macronutrient in the macro total, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MacroBreakdown {
    pub protein_percent: f64,
    pub carbs_percent: f64,
    pub fats_percent: f64,
}

impl MacroBreakdown {
    pub fn compute(macros: &NutritionInfo) -> Self {
        let sum = macros.protein + macros.carbs + macros.fats;
        if sum <= 0.0 {
            return Self {
                protein_percent: 0.0,
                carbs_percent: 0.0,
                fats_percent: 0.0,
            };
        }

        Self {
            protein_percent: macros.protein / sum * 100.0,
            carbs_percent: macros.carbs / sum * 100.0,
            fats_percent: macros.fats / sum * 100.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseCategory {
    Running,
    Cycling,
    Walking,
    Strength,
}

impl ExerciseCategory {
    pub fn classify(activity: &str) -> Self {
        let activity = activity.to_lowercase();

        if activity.contains("corrida") {
            ExerciseCategory::Running
        } else if activity.contains("bike") || activity.contains("ciclismo") {
            ExerciseCategory::Cycling
        } else if activity.contains("caminhada") {
            ExerciseCategory::Walking
        } else {
            ExerciseCategory::Strength
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalysisInsights {
    pub calorie_progress: CalorieProgress,
    pub macro_breakdown: MacroBreakdown,
    /// One category per exercise suggestion, in the same order.
    pub exercise_categories: Vec<ExerciseCategory>,
}

impl AnalysisInsights {
    pub fn from_analysis(analysis: &FoodAnalysisResponse) -> Self {
        Self {
            calorie_progress: CalorieProgress::compute(
                analysis.total_calories,
                &analysis.ideal_calories_range,
            ),
            macro_breakdown: MacroBreakdown::compute(&analysis.total_macros),
            exercise_categories: analysis
                .exercise_suggestions
                .iter()
                .map(|s| ExerciseCategory::classify(&s.activity))
                .collect(),
        }
    }
}
