use crate::config::DEFAULT_DIMENSIONS;
use crate::scoring::Record;

use super::reader::{AI_PREFIX, HUMAN_PREFIX, ID_COLUMN};

// Two chats from the QA team's worked example. The first disagrees by one
// point on Sentiment and one on CustomerCentricity; the second is further
// off (four points across four dimensions).
const SAMPLE_ROWS: [(&str, [i64; 6], [i64; 6]); 2] = [
    ("27811316", [4, 3, 2, 2, 3, 4], [4, 3, 2, 2, 4, 3]),
    ("27811317", [3, 2, 3, 3, 4, 3], [4, 3, 2, 3, 4, 4]),
];

/// Expected MAE for the quicktest record: 2 points of disagreement over
/// 6 dimensions.
pub const QUICKTEST_EXPECTED_MAE: f64 = 2.0 / 6.0;

/// The built-in sample batch used by the CSV template and quicktest.
pub fn sample_records() -> Vec<Record> {
    SAMPLE_ROWS
        .iter()
        .map(|(id, ai, human)| Record {
            id: id.to_string(),
            ai: DEFAULT_DIMENSIONS
                .iter()
                .zip(ai)
                .map(|(d, s)| (d.to_string(), *s))
                .collect(),
            human: DEFAULT_DIMENSIONS
                .iter()
                .zip(human)
                .map(|(d, s)| (d.to_string(), *s))
                .collect(),
        })
        .collect()
}

/// The reference record (chat 27811316) used by the quicktest command.
pub fn quicktest_record() -> Record {
    sample_records().swap_remove(0)
}

/// Render the sample records as the CSV template handed to analysts.
pub fn template_csv() -> String {
    let mut header: Vec<String> = vec![ID_COLUMN.to_string()];
    header.extend(
        DEFAULT_DIMENSIONS
            .iter()
            .map(|d| format!("{}{}", AI_PREFIX, d)),
    );
    header.extend(
        DEFAULT_DIMENSIONS
            .iter()
            .map(|d| format!("{}{}", HUMAN_PREFIX, d)),
    );

    let mut lines = vec![header.join(",")];
    for (id, ai, human) in &SAMPLE_ROWS {
        let mut cells = vec![id.to_string()];
        cells.extend(ai.iter().map(i64::to_string));
        cells.extend(human.iter().map(i64::to_string));
        lines.push(cells.join(","));
    }

    lines.join("\n") + "\n"
}
