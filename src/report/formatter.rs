use std::io::IsTerminal;

use owo_colors::OwoColorize;
use terminal_size::{terminal_size, Width};

use crate::scoring::{classify, BatchResult, ComparisonResult, Record};

const RULE_WIDTH: usize = 70;

// Widest interpretation label plus the MAE column and separators.
const BATCH_FIXED_WIDTH: usize = 58;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format an MAE value for display ("0.33")
pub fn format_mae(mae: f64) -> String {
    format!("{:.2}", mae)
}

/// Display order for report rows: configured dimensions first (those present
/// in the result), then any remaining dimensions sorted by name.
pub fn display_order(result: &ComparisonResult, configured: &[String]) -> Vec<String> {
    let mut order: Vec<String> = configured
        .iter()
        .filter(|d| result.per_dimension.contains_key(*d))
        .cloned()
        .collect();
    let mut rest: Vec<String> = result
        .per_dimension
        .keys()
        .filter(|k| !configured.contains(k))
        .cloned()
        .collect();
    rest.sort_unstable();
    order.extend(rest);
    order
}

/// Colorize an interpretation label by its quality band.
/// Same thresholds as `classify`; green fades to red as agreement degrades.
fn paint_interpretation(mae: f64, label: &str) -> String {
    if mae < 0.50 {
        label.green().to_string()
    } else if mae < 0.75 {
        label.bright_green().to_string()
    } else if mae < 1.00 {
        label.yellow().to_string()
    } else {
        label.red().to_string()
    }
}

fn interpretation_cell(mae: f64, label: &str, use_colors: bool) -> String {
    if use_colors {
        paint_interpretation(mae, label)
    } else {
        label.to_string()
    }
}

/// Format the per-dimension report for a single record.
///
/// Dimension rows in the caller-supplied order, then the sum of differences,
/// the dimension count, the MAE and its interpretation.
pub fn format_comparison(
    record: &Record,
    result: &ComparisonResult,
    order: &[String],
    use_colors: bool,
) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let thin_rule = "-".repeat(RULE_WIDTH);

    let mut lines = Vec::new();
    lines.push(rule.clone());
    lines.push(format!("AGREEMENT REPORT - {}", record.id));
    lines.push(rule.clone());
    lines.push(format!(
        "{:<25} {:>5} {:>7} {:>8}",
        "Dimension", "AI", "Human", "|Diff|"
    ));
    lines.push(thin_rule.clone());

    for dimension in order {
        let cells = (
            record.ai.get(dimension),
            record.human.get(dimension),
            result.per_dimension.get(dimension),
        );
        if let (Some(ai_score), Some(human_score), Some(diff)) = cells {
            lines.push(format!(
                "{:<25} {:>5} {:>7} {:>8.0}",
                dimension, ai_score, human_score, diff
            ));
        }
    }

    lines.push(thin_rule);
    lines.push(format!(
        "{:<25} {:>21.0}",
        "Sum of differences:", result.total_difference
    ));
    lines.push(format!(
        "{:<25} {:>21}",
        "Dimensions compared:", result.dimension_count
    ));
    lines.push(String::new());
    lines.push(format!(
        "{:<25} {:>21}",
        "MAE:",
        format_mae(result.mean_absolute_error)
    ));
    lines.push(format!(
        "{:<25} {}",
        "Interpretation:",
        interpretation_cell(result.mean_absolute_error, result.interpretation, use_colors)
    ));
    lines.push(rule);

    lines.join("\n")
}

/// Format the batch summary: one row per record plus the average row,
/// with the average classified through the same bands.
pub fn format_batch(records: &[Record], batch: &BatchResult, use_colors: bool) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let thin_rule = "-".repeat(RULE_WIDTH);
    let id_width = id_column_width(records);

    let mut lines = Vec::new();
    lines.push(rule.clone());
    lines.push(format!(
        "BATCH AGREEMENT REPORT - {} records",
        batch.per_record.len()
    ));
    lines.push(rule.clone());
    lines.push(format!(
        "{:<width$} {:>6}  {}",
        "Record",
        "MAE",
        "Interpretation",
        width = id_width
    ));
    lines.push(thin_rule.clone());

    for (record, result) in records.iter().zip(&batch.per_record) {
        lines.push(format!(
            "{:<width$} {:>6}  {}",
            truncate_id(&record.id, id_width),
            format_mae(result.mean_absolute_error),
            interpretation_cell(result.mean_absolute_error, result.interpretation, use_colors),
            width = id_width
        ));
    }

    lines.push(thin_rule);
    lines.push(format!(
        "{:<width$} {:>6}  {}",
        "AVERAGE",
        format_mae(batch.average_mae),
        interpretation_cell(batch.average_mae, classify(batch.average_mae), use_colors),
        width = id_width
    ));
    lines.push(rule);

    lines.join("\n")
}

/// Id column width: widest id, clamped so the MAE and interpretation columns
/// still fit the terminal. Pipes (no terminal) never truncate.
fn id_column_width(records: &[Record]) -> usize {
    let longest = records
        .iter()
        .map(|r| r.id.chars().count())
        .max()
        .unwrap_or(0)
        .max(7); // "AVERAGE"

    match terminal_size() {
        Some((Width(w), _)) => longest.min((w as usize).saturating_sub(BATCH_FIXED_WIDTH).max(8)),
        None => longest,
    }
}

/// Truncate a record id to fit the column, accounting for Unicode
fn truncate_id(id: &str, max_width: usize) -> String {
    let chars: Vec<char> = id.chars().collect();
    if chars.len() <= max_width {
        id.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}
