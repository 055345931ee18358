use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use chrono::Local;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::scoring::{BatchResult, Record};

/// Default results filename, timestamped like `mae_results_20260806_141503.csv`.
pub fn default_results_path() -> PathBuf {
    PathBuf::from(format!(
        "mae_results_{}.csv",
        Local::now().format("%Y%m%d_%H%M%S")
    ))
}

/// Render batch results as CSV rows: one line per record, input order.
/// Interpretation labels contain no commas, so no quoting is needed.
pub fn results_csv(records: &[Record], batch: &BatchResult) -> String {
    let mut lines = vec!["chat_id,mae,total_difference,interpretation".to_string()];
    for (record, result) in records.iter().zip(&batch.per_record) {
        lines.push(format!(
            "{},{:.2},{:.0},{}",
            record.id,
            result.mean_absolute_error,
            result.total_difference,
            result.interpretation
        ));
    }
    lines.join("\n") + "\n"
}

/// Write batch results to a CSV file atomically, so a failed run never
/// leaves a truncated results file behind.
pub fn write_results(path: &Path, records: &[Record], batch: &BatchResult) -> Result<()> {
    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open results file at {}", path.display()))?;

    file.write_all(results_csv(records, batch).as_bytes())
        .with_context(|| format!("Failed to write results to {}", path.display()))?;

    file.commit()
        .with_context(|| format!("Failed to save results to {}", path.display()))?;

    Ok(())
}
