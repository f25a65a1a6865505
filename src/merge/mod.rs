// src/merge/mod.rs
//! Merge & normalize: announcement CSV in, enriched CSV out.
pub mod dates;
pub mod enrich;
pub mod report;
pub mod topic;

use std::collections::BTreeSet;
use std::path::PathBuf;

use chrono::NaiveDateTime;

use crate::config::consts::PREVIEW_ROWS;
use crate::config::{MergeOptions, TitleMap};
use crate::error::Result;
use crate::file::{read_dataset, write_dataset};

pub use dates::{normalize_date, CleanedDate};
pub use enrich::{enrich, Enriched, EnrichedAnnouncement, PREFERRED_ORDER};
pub use report::{missing_values, MissingReport};
pub use topic::{classify, Topic};

#[derive(Debug)]
pub struct MergeSummary {
    pub output: PathBuf,
    pub rows: usize,
    pub unknown_ids: BTreeSet<String>,
    pub missing: MissingReport,
}

/// Run the merge once. `now` anchors every relative date in the batch.
/// A missing input file comes back as `ScrapeError::MissingInputFile`.
pub fn run(opts: &MergeOptions, titles: &TitleMap, now: NaiveDateTime) -> Result<MergeSummary> {
    for entry in titles.suspect_entries() {
        logw!(
            "Title table entry {} -> '{}' is known to be mismatched; rows with this id may be mislabeled",
            entry.app_id, entry.title
        );
    }

    logf!("Reading data from '{}'...", opts.input.display());
    let input = read_dataset(&opts.input)?;

    logf!("Cleaning dates, adding titles and topics for {} row(s)...", input.len());
    let Enriched { data, unknown_ids } = enrich(input, titles, now);

    if !unknown_ids.is_empty() {
        let ids: Vec<&str> = unknown_ids.iter().map(String::as_str).collect();
        logw!(
            "Unknown game IDs (not in the title table, titled 'Unknown Game'): {}",
            ids.join(", ")
        );
    }

    for row in &data.rows {
        if data.cell(row, "cleaned_date") == dates::UNPARSEABLE {
            let raw = data.cell(row, "original_date");
            logd!(
                "Unparseable date {:?} for game_id {} (rule: {})",
                raw,
                data.cell(row, "game_id"),
                dates::matching_rule(raw, now).unwrap_or("none")
            );
        }
    }

    let missing = missing_values(&data);
    missing.log();

    let output = write_dataset(&opts.output, &data)?;
    logf!("Successfully saved the updated data to '{}'", output.display());
    for row in data.rows.iter().take(PREVIEW_ROWS) {
        logd!("{}", row.join(" | "));
    }

    Ok(MergeSummary { output, rows: data.len(), unknown_ids, missing })
}
