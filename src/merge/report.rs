// src/merge/report.rs
use crate::config::consts::NOT_AVAILABLE;
use crate::store::DataSet;

use super::dates::UNPARSEABLE;

/// Per-column count of missing cells, nonzero columns only, in column order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MissingReport {
    pub counts: Vec<(String, usize)>,
}

impl MissingReport {
    pub fn is_clean(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, n)| n).sum()
    }

    pub fn get(&self, column: &str) -> usize {
        self.counts.iter().find(|(c, _)| c == column).map_or(0, |(_, n)| *n)
    }

    pub fn log(&self) {
        logf!("--- Missing Values Report ---");
        if self.is_clean() {
            logf!("No missing values found in the final dataset.");
        }
        for (column, n) in &self.counts {
            logf!("  {:<16} {}", column, n);
        }
    }
}

/// A cell is missing when blank, when it holds the scraper's "N/A" placeholder,
/// or (for `cleaned_date`) when it holds the unparseable marker.
fn is_missing(column: &str, cell: &str) -> bool {
    let cell = cell.trim();
    cell.is_empty() || cell == NOT_AVAILABLE || (column == "cleaned_date" && cell == UNPARSEABLE)
}

/// Read-only: `data` is not touched.
pub fn missing_values(data: &DataSet) -> MissingReport {
    let counts = data
        .headers
        .iter()
        .enumerate()
        .map(|(ix, column)| {
            let n = data
                .rows
                .iter()
                .filter(|row| is_missing(column, row.get(ix).map(String::as_str).unwrap_or("")))
                .count();
            (column.clone(), n)
        })
        .filter(|(_, n)| *n > 0)
        .collect();
    MissingReport { counts }
}
