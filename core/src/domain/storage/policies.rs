use crate::domain::food_analysis::entities::AnalysisHistory;

pub const HISTORY_LIMIT: usize = 10;

/// Puts `entry` in front and drops whatever falls past [`HISTORY_LIMIT`].
/// Insertion order is the source of truth, timestamps are not compared.
pub fn prepend_bounded(
    history: Vec<AnalysisHistory>,
    entry: AnalysisHistory,
) -> Vec<AnalysisHistory> {
    std::iter::once(entry)
        .chain(history)
        .take(HISTORY_LIMIT)
        .collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domain::food_analysis::{
        entities::FoodAnalysisResponse, validation::tests::sample_analysis_json,
    };

    pub(crate) fn history_entry(total_calories: f64) -> AnalysisHistory {
        let data: FoodAnalysisResponse =
            serde_json::from_value(sample_analysis_json(total_calories)).unwrap();
        AnalysisHistory::new("data:image/jpeg;base64,aGVsbG8=".to_string(), data)
    }

    #[test]
    fn length_is_min_of_appends_and_limit() {
        for appends in 0..25 {
            let mut history = Vec::new();
            for n in 0..appends {
                history = prepend_bounded(history, history_entry(n as f64));
            }

            assert_eq!(history.len(), appends.min(HISTORY_LIMIT));
            let calories: Vec<f64> = history.iter().map(|h| h.data.total_calories).collect();
            let expected: Vec<f64> = (0..appends)
                .rev()
                .take(HISTORY_LIMIT)
                .map(|n| n as f64)
                .collect();
            assert_eq!(calories, expected);
        }
    }

    #[test]
    fn eleventh_entry_evicts_only_the_oldest() {
        let mut history = Vec::new();
        for n in 0..HISTORY_LIMIT {
            history = prepend_bounded(history, history_entry(n as f64));
        }
        let before = history.clone();

        let newest = history_entry(999.0);
        let after = prepend_bounded(history, newest.clone());

        assert_eq!(after.len(), HISTORY_LIMIT);
        assert_eq!(after[0], newest);
        assert_eq!(&after[1..], &before[..HISTORY_LIMIT - 1]);
        assert!(!after.contains(&before[HISTORY_LIMIT - 1]));
    }
}
