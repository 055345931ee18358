use std::collections::HashMap;

/// Scores for one record from a single rater, keyed by dimension name.
///
/// Scores are small integers (0-5 in the QA rubric) but the scoring core
/// accepts any integer; range checks live in the input layer.
pub type ScoreSet = HashMap<String, i64>;

/// One comparable unit: AI and human scores for the same chat.
///
/// The id is opaque and carried through unchanged.
#[derive(Debug, Clone)]
pub struct Record {
    pub id: String,
    pub ai: ScoreSet,
    pub human: ScoreSet,
}

/// Result of comparing two score sets.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonResult {
    pub mean_absolute_error: f64,
    pub total_difference: f64,
    pub dimension_count: usize,
    /// Dimension name -> |ai - human|
    pub per_dimension: HashMap<String, f64>,
    pub interpretation: &'static str,
}

/// Per-record results (in input order) plus the batch-wide average MAE.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchResult {
    pub average_mae: f64,
    pub per_record: Vec<ComparisonResult>,
}
