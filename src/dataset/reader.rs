use anyhow::{bail, Context, Result};
use std::collections::HashMap;

use crate::scoring::{Record, ScoreSet};

pub(crate) const ID_COLUMN: &str = "chat_id";
pub(crate) const AI_PREFIX: &str = "ai_";
pub(crate) const HUMAN_PREFIX: &str = "human_";

/// Which score set a CSV column feeds, if any.
enum Column {
    Id,
    Ai(String),
    Human(String),
    Ignored,
}

/// Parse a batch CSV into records.
///
/// Expected header: `chat_id` plus `ai_<Dimension>` and `human_<Dimension>`
/// columns. The dimension set is derived from the header, so any vocabulary
/// works as long as both prefixes cover it. Cells are bare integers and ids;
/// the format has no quoting. Columns outside the contract are ignored,
/// blank lines are skipped.
pub fn parse_records(content: &str) -> Result<Vec<Record>> {
    let mut lines = content.lines().enumerate();

    let header = loop {
        match lines.next() {
            Some((_, line)) if line.trim().is_empty() => continue,
            Some((_, line)) => break line,
            None => bail!("CSV is empty"),
        }
    };

    let columns = parse_header(header)?;

    let mut records = Vec::new();
    for (line_index, line) in lines {
        if line.trim().is_empty() {
            continue;
        }
        records.push(parse_row(line, line_index + 1, &columns)?);
    }

    Ok(records)
}

fn parse_header(header: &str) -> Result<Vec<Column>> {
    let mut columns = Vec::new();
    let mut has_id = false;
    let mut has_scores = false;

    for name in header.split(',') {
        let name = name.trim();
        if name == ID_COLUMN {
            has_id = true;
            columns.push(Column::Id);
        } else if let Some(dimension) = name.strip_prefix(AI_PREFIX) {
            has_scores = true;
            columns.push(Column::Ai(dimension.to_string()));
        } else if let Some(dimension) = name.strip_prefix(HUMAN_PREFIX) {
            has_scores = true;
            columns.push(Column::Human(dimension.to_string()));
        } else {
            columns.push(Column::Ignored);
        }
    }

    if !has_id {
        bail!("CSV header has no '{}' column", ID_COLUMN);
    }
    if !has_scores {
        bail!(
            "CSV header has no '{}'/'{}' score columns",
            AI_PREFIX,
            HUMAN_PREFIX
        );
    }

    Ok(columns)
}

fn parse_row(line: &str, line_number: usize, columns: &[Column]) -> Result<Record> {
    let cells: Vec<&str> = line.split(',').map(str::trim).collect();
    if cells.len() != columns.len() {
        bail!(
            "line {}: expected {} fields, found {}",
            line_number,
            columns.len(),
            cells.len()
        );
    }

    let mut id = String::new();
    let mut ai: ScoreSet = HashMap::new();
    let mut human: ScoreSet = HashMap::new();

    for (cell, column) in cells.iter().zip(columns) {
        match column {
            Column::Id => id = cell.to_string(),
            Column::Ai(dimension) => {
                ai.insert(dimension.clone(), parse_score(cell, line_number, dimension)?);
            }
            Column::Human(dimension) => {
                human.insert(dimension.clone(), parse_score(cell, line_number, dimension)?);
            }
            Column::Ignored => {}
        }
    }

    Ok(Record { id, ai, human })
}

fn parse_score(cell: &str, line_number: usize, dimension: &str) -> Result<i64> {
    cell.parse().with_context(|| {
        format!(
            "line {}: '{}' is not an integer score for {}",
            line_number, cell, dimension
        )
    })
}
