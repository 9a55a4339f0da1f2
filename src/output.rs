//! Output formatting utilities

use crate::engine::Comparison;
use crate::record::Dataset;
use std::path::Path;

/// Pretty printer for tabalign output
pub struct PrettyPrinter;

impl PrettyPrinter {
    /// Print the run summary for an align command. Goes to stderr so stdout
    /// stays pasteable.
    pub fn print_align_summary(comparison: &Comparison, output: Option<&Path>) {
        eprintln!("📋 Aligned {} pairs", comparison.pair_count);
        eprintln!("├─ Matched: {}", comparison.stats.matched);
        eprintln!("├─ Control only: {}", comparison.stats.control_only);
        eprintln!("├─ Test only: {}", comparison.stats.test_only);
        eprintln!("├─ Comparisons: {}", comparison.stats.comparisons);
        match output {
            Some(path) => eprintln!("└─ Output: {}", path.display()),
            None => eprintln!("└─ Output: stdout"),
        }
    }

    /// Print a dataset's headers alongside their normalized field identifiers
    pub fn print_field_list(dataset: &Dataset) {
        if dataset.column_count() == 0 {
            println!("No columns found.");
            return;
        }

        println!("📋 Columns ({} data rows):", dataset.record_count());
        let last = dataset.column_count() - 1;
        for (id, &index) in dataset.fields() {
            let prefix = if index == last { "└─" } else { "├─" };
            println!("{} {} → {}", prefix, dataset.headers()[index], id);
        }
    }
}
