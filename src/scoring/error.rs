use super::types::ScoreSet;

/// The only failure the scoring core produces: two score sets that do not
/// cover the same dimensions. Batch comparisons attach the offending
/// record's id and position.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInputError {
    #[error("mismatched dimension sets: {detail}")]
    MismatchedDimensions { detail: String },

    #[error("record '{id}' (index {index}): mismatched dimension sets: {detail}")]
    MismatchedRecord {
        id: String,
        index: usize,
        detail: String,
    },
}

impl InvalidInputError {
    /// Build a mismatch error from the two key sets. Keys unique to each
    /// side are listed sorted so the message is deterministic.
    pub(crate) fn mismatch(ai: &ScoreSet, human: &ScoreSet) -> Self {
        let mut only_ai: Vec<&str> = ai
            .keys()
            .filter(|k| !human.contains_key(*k))
            .map(String::as_str)
            .collect();
        let mut only_human: Vec<&str> = human
            .keys()
            .filter(|k| !ai.contains_key(*k))
            .map(String::as_str)
            .collect();
        only_ai.sort_unstable();
        only_human.sort_unstable();

        let mut parts = Vec::new();
        if !only_ai.is_empty() {
            parts.push(format!("only in AI scores: [{}]", only_ai.join(", ")));
        }
        if !only_human.is_empty() {
            parts.push(format!("only in human scores: [{}]", only_human.join(", ")));
        }

        InvalidInputError::MismatchedDimensions {
            detail: parts.join("; "),
        }
    }

    /// Attach batch context (which record failed) to a mismatch.
    pub(crate) fn for_record(self, index: usize, id: &str) -> Self {
        match self {
            InvalidInputError::MismatchedDimensions { detail } => {
                InvalidInputError::MismatchedRecord {
                    id: id.to_string(),
                    index,
                    detail,
                }
            }
            already => already,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn scores(keys: &[&str]) -> ScoreSet {
        keys.iter().map(|k| (k.to_string(), 1)).collect()
    }

    #[test]
    fn test_mismatch_lists_both_sides_sorted() {
        let ai = scores(&["Clarity", "Accuracy"]);
        let human = scores(&["Tone", "Brevity"]);
        let error = InvalidInputError::mismatch(&ai, &human);
        assert_eq!(
            error.to_string(),
            "mismatched dimension sets: only in AI scores: [Accuracy, Clarity]; \
             only in human scores: [Brevity, Tone]"
        );
    }

    #[test]
    fn test_mismatch_omits_empty_side() {
        let ai = scores(&["Clarity"]);
        let human = scores(&["Clarity", "Tone"]);
        let error = InvalidInputError::mismatch(&ai, &human);
        assert_eq!(
            error.to_string(),
            "mismatched dimension sets: only in human scores: [Tone]"
        );
    }

    #[test]
    fn test_for_record_adds_context() {
        let ai: ScoreSet = HashMap::new();
        let human = scores(&["Clarity"]);
        let error = InvalidInputError::mismatch(&ai, &human).for_record(3, "27811316");
        assert_eq!(
            error.to_string(),
            "record '27811316' (index 3): mismatched dimension sets: \
             only in human scores: [Clarity]"
        );
    }
}
