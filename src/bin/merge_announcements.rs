// src/bin/merge_announcements.rs
use chrono::Local;
use color_eyre::eyre::Result;

use steam_scrape::config::{MergeOptions, TitleMap};
use steam_scrape::{merge, ScrapeError};

fn main() -> Result<()> {
    color_eyre::install()?;
    steam_scrape::log::init();

    let opts = MergeOptions::default();
    // One clock read for the whole batch.
    let now = Local::now().naive_local();

    match merge::run(&opts, TitleMap::global(), now) {
        Ok(summary) => {
            println!("Wrote {} rows to {}", summary.rows, summary.output.display());
            Ok(())
        }
        Err(ScrapeError::MissingInputFile(path)) => {
            eprintln!("Error: the input file '{}' was not found.", path.display());
            eprintln!("Please make sure you have run the announcement harvester first.");
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}
