use std::collections::HashMap;

use super::error::InvalidInputError;
use super::types::{BatchResult, ComparisonResult, Record, ScoreSet};

/// Compare AI scores against human scores for a single record.
///
/// Both sets must cover exactly the same dimensions; anything else is
/// rejected rather than zero-filled. Empty sets are accepted and yield
/// an MAE of 0.0.
pub fn compare(ai: &ScoreSet, human: &ScoreSet) -> Result<ComparisonResult, InvalidInputError> {
    if ai.len() != human.len() {
        return Err(InvalidInputError::mismatch(ai, human));
    }

    let mut per_dimension = HashMap::with_capacity(ai.len());
    let mut total_difference = 0.0;

    for (dimension, &ai_score) in ai {
        let human_score = match human.get(dimension) {
            Some(&score) => score,
            None => return Err(InvalidInputError::mismatch(ai, human)),
        };
        let diff = (ai_score - human_score).abs() as f64;
        total_difference += diff;
        per_dimension.insert(dimension.clone(), diff);
    }

    let dimension_count = ai.len();
    let mean_absolute_error = if dimension_count > 0 {
        total_difference / dimension_count as f64
    } else {
        0.0
    };

    Ok(ComparisonResult {
        mean_absolute_error,
        total_difference,
        dimension_count,
        per_dimension,
        interpretation: classify(mean_absolute_error),
    })
}

/// Map an MAE value to its quality band.
///
/// Boundaries belong to the better band: 0.50 is already "Good", 0.75 is
/// "Acceptable", 1.00 is "Poor". The input is not clamped.
pub fn classify(mae: f64) -> &'static str {
    if mae < 0.50 {
        "Excellent (matches human analyst very closely)"
    } else if mae < 0.75 {
        "Good (production-ready)"
    } else if mae < 1.00 {
        "Acceptable (needs minor calibration)"
    } else {
        "Poor (needs major fixes)"
    }
}

/// Compare every record in input order and average the per-record MAE values.
///
/// Fails on the first record whose score sets mismatch; the error names the
/// record's id and position. All-or-nothing: no partial results on failure.
pub fn compare_batch(records: &[Record]) -> Result<BatchResult, InvalidInputError> {
    let mut per_record = Vec::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        let result =
            compare(&record.ai, &record.human).map_err(|e| e.for_record(index, &record.id))?;
        per_record.push(result);
    }

    let average_mae = if per_record.is_empty() {
        0.0
    } else {
        let sum: f64 = per_record.iter().map(|r| r.mean_absolute_error).sum();
        sum / per_record.len() as f64
    };

    Ok(BatchResult {
        average_mae,
        per_record,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(pairs: &[(&str, i64)]) -> ScoreSet {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    // Chat 27811316: disagreement only on Sentiment and CustomerCentricity.
    fn reference_ai() -> ScoreSet {
        scores(&[
            ("IssueIdentification", 4),
            ("ResolutionCompliance", 3),
            ("Clarity", 2),
            ("Retention", 2),
            ("Sentiment", 3),
            ("CustomerCentricity", 4),
        ])
    }

    fn reference_human() -> ScoreSet {
        scores(&[
            ("IssueIdentification", 4),
            ("ResolutionCompliance", 3),
            ("Clarity", 2),
            ("Retention", 2),
            ("Sentiment", 4),
            ("CustomerCentricity", 3),
        ])
    }

    #[test]
    fn test_identical_sets_have_zero_mae() {
        let ai = reference_ai();
        let result = compare(&ai, &ai).unwrap();
        assert_eq!(result.mean_absolute_error, 0.0);
        assert_eq!(result.total_difference, 0.0);
        assert!(result.interpretation.starts_with("Excellent"));
    }

    #[test]
    fn test_reference_chat_breakdown() {
        let result = compare(&reference_ai(), &reference_human()).unwrap();

        assert_eq!(result.total_difference, 2.0);
        assert_eq!(result.dimension_count, 6);
        assert!((result.mean_absolute_error - 2.0 / 6.0).abs() < 1e-12);
        assert!(result.interpretation.starts_with("Excellent"));

        assert_eq!(result.per_dimension["Sentiment"], 1.0);
        assert_eq!(result.per_dimension["CustomerCentricity"], 1.0);
        assert_eq!(result.per_dimension["IssueIdentification"], 0.0);
        assert_eq!(result.per_dimension["ResolutionCompliance"], 0.0);
        assert_eq!(result.per_dimension["Clarity"], 0.0);
        assert_eq!(result.per_dimension["Retention"], 0.0);
    }

    #[test]
    fn test_comparison_is_symmetric() {
        let forward = compare(&reference_ai(), &reference_human()).unwrap();
        let backward = compare(&reference_human(), &reference_ai()).unwrap();
        assert_eq!(forward.mean_absolute_error, backward.mean_absolute_error);
        assert_eq!(forward.per_dimension, backward.per_dimension);
    }

    #[test]
    fn test_total_difference_is_sum_of_absolute_diffs() {
        let ai = scores(&[("A", 5), ("B", 0), ("C", 2)]);
        let human = scores(&[("A", 1), ("B", 3), ("C", 2)]);
        let result = compare(&ai, &human).unwrap();
        assert_eq!(result.total_difference, 4.0 + 3.0 + 0.0);
        assert_eq!(result.per_dimension["A"], 4.0);
        assert_eq!(result.per_dimension["B"], 3.0);
    }

    #[test]
    fn test_empty_sets_yield_zero_mae() {
        let empty = ScoreSet::new();
        let result = compare(&empty, &empty).unwrap();
        assert_eq!(result.mean_absolute_error, 0.0);
        assert_eq!(result.dimension_count, 0);
        assert!(result.per_dimension.is_empty());
        assert!(result.interpretation.starts_with("Excellent"));
    }

    #[test]
    fn test_disjoint_keys_rejected() {
        let ai = scores(&[("A", 1)]);
        let human = scores(&[("B", 1)]);
        let error = compare(&ai, &human).unwrap_err();
        let message = error.to_string();
        assert!(message.contains("mismatched dimension sets"));
        assert!(message.contains("A"));
        assert!(message.contains("B"));
    }

    #[test]
    fn test_subset_keys_rejected() {
        let ai = scores(&[("A", 1), ("B", 2)]);
        let human = scores(&[("A", 1)]);
        assert!(compare(&ai, &human).is_err());
        assert!(compare(&human, &ai).is_err());
    }

    #[test]
    fn test_classify_band_boundaries() {
        assert!(classify(0.49).starts_with("Excellent"));
        assert!(classify(0.50).starts_with("Good"));
        assert!(classify(0.74).starts_with("Good"));
        assert!(classify(0.75).starts_with("Acceptable"));
        assert!(classify(0.99).starts_with("Acceptable"));
        assert!(classify(1.00).starts_with("Poor"));
    }

    #[test]
    fn test_classify_extremes() {
        assert!(classify(0.0).starts_with("Excellent"));
        assert!(classify(5.0).starts_with("Poor"));
        // Negative MAE cannot come out of compare(), but the bands are
        // half-open so it falls into the best one.
        assert!(classify(-1.0).starts_with("Excellent"));
    }

    #[test]
    fn test_batch_averages_per_record_mae() {
        let records = vec![
            Record {
                id: "27811316".to_string(),
                ai: reference_ai(),
                human: reference_human(),
            },
            Record {
                id: "27811317".to_string(),
                ai: scores(&[("A", 4), ("B", 2), ("C", 3), ("D", 1), ("E", 5), ("F", 0)]),
                human: scores(&[("A", 4), ("B", 3), ("C", 3), ("D", 0), ("E", 5), ("F", 0)]),
            },
        ];

        let batch = compare_batch(&records).unwrap();
        assert_eq!(batch.per_record.len(), 2);
        // Both records disagree by 2 points over 6 dimensions.
        assert!((batch.per_record[1].mean_absolute_error - 2.0 / 6.0).abs() < 1e-12);
        assert!((batch.average_mae - 2.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_batch_preserves_input_order() {
        let agree = scores(&[("A", 3)]);
        let disagree = scores(&[("A", 5)]);
        let records = vec![
            Record {
                id: "first".to_string(),
                ai: agree.clone(),
                human: disagree,
            },
            Record {
                id: "second".to_string(),
                ai: agree.clone(),
                human: agree,
            },
        ];

        let batch = compare_batch(&records).unwrap();
        assert_eq!(batch.per_record[0].mean_absolute_error, 2.0);
        assert_eq!(batch.per_record[1].mean_absolute_error, 0.0);
        assert_eq!(batch.average_mae, 1.0);
    }

    #[test]
    fn test_batch_fails_fast_and_names_record() {
        let records = vec![
            Record {
                id: "ok".to_string(),
                ai: scores(&[("A", 1)]),
                human: scores(&[("A", 1)]),
            },
            Record {
                id: "broken".to_string(),
                ai: scores(&[("A", 1)]),
                human: scores(&[("B", 1)]),
            },
        ];

        let error = compare_batch(&records).unwrap_err();
        match &error {
            InvalidInputError::MismatchedRecord { id, index, .. } => {
                assert_eq!(id, "broken");
                assert_eq!(*index, 1);
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(error.to_string().contains("broken"));
        assert!(error.to_string().contains("index 1"));
    }

    #[test]
    fn test_batch_of_nothing_is_zero() {
        let batch = compare_batch(&[]).unwrap();
        assert_eq!(batch.average_mae, 0.0);
        assert!(batch.per_record.is_empty());
    }
}
