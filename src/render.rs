//! Serializes paired results back to aligned tab-separated text

use crate::engine::Pair;
use crate::record::{Dataset, Record};

/// Render ordered pairs as spreadsheet-pasteable text.
///
/// The header line holds control's headers, one blank separator cell, then
/// test's headers. Each pair renders as control's cells, a blank separator
/// cell, then test's cells, with an absent side replaced by a full run of
/// empty cells so column alignment survives the paste.
pub fn render(control: &Dataset, test: &Dataset, pairs: &[Pair<'_>]) -> String {
    let control_blank = blank_cells(control.column_count());
    let test_blank = blank_cells(test.column_count());

    let mut lines = Vec::with_capacity(pairs.len() + 1);
    lines.push(format!(
        "{}\t\t{}",
        control.headers().join("\t"),
        test.headers().join("\t"),
    ));

    for pair in pairs {
        let control_cells = pair
            .control()
            .map(|record| row_cells(record, control.column_count()))
            .unwrap_or_else(|| control_blank.clone());
        let test_cells = pair
            .test()
            .map(|record| row_cells(record, test.column_count()))
            .unwrap_or_else(|| test_blank.clone());
        lines.push(format!("{}\t\t{}", control_cells, test_cells));
    }

    lines.join("\n")
}

// Pads short rows and drops surplus cells so every line spans the same columns.
fn row_cells(record: &Record, column_count: usize) -> String {
    (0..column_count)
        .map(|index| record.value(index))
        .collect::<Vec<_>>()
        .join("\t")
}

fn blank_cells(count: usize) -> String {
    vec![""; count].join("\t")
}
