use crate::scoring::{Record, ScoreSet};

pub const MIN_SCORE: i64 = 0;
pub const MAX_SCORE: i64 = 5;

/// Validate that every score in a batch sits inside the 0-5 rubric.
/// Returns all violations at once (not just the first). The scoring core
/// accepts any integer; this check belongs to the input layer.
pub fn validate_records(records: &[Record]) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    for record in records {
        collect_range_errors(&record.id, "ai", &record.ai, &mut errors);
        collect_range_errors(&record.id, "human", &record.human, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn collect_range_errors(id: &str, side: &str, scores: &ScoreSet, errors: &mut Vec<String>) {
    // Sorted so the error listing is deterministic.
    let mut dimensions: Vec<(&String, &i64)> = scores.iter().collect();
    dimensions.sort_unstable_by(|a, b| a.0.cmp(b.0));

    for (dimension, &score) in dimensions {
        if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
            errors.push(format!(
                "record '{}': {}_{} = {} is outside {}..{}",
                id, side, dimension, score, MIN_SCORE, MAX_SCORE
            ));
        }
    }
}
