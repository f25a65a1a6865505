// src/bin/harvest_announcements.rs
use std::path::Path;

use color_eyre::eyre::Result;

use steam_scrape::config::consts::{ANNOUNCEMENTS_FILE, GAME_IDS};
use steam_scrape::config::{ScrollPolicy, Settings};
use steam_scrape::harvest::announcements;
use steam_scrape::progress::LogProgress;

fn main() -> Result<()> {
    color_eyre::install()?;
    steam_scrape::log::init();

    let settings = Settings::from_env();
    let app_ids: Vec<String> = GAME_IDS.iter().map(|id| id.to_string()).collect();
    let mut progress = LogProgress::new("announcements");

    match announcements::run(
        &settings,
        &app_ids,
        &ScrollPolicy::default(),
        Path::new(ANNOUNCEMENTS_FILE),
        Some(&mut progress),
    )? {
        Some(path) => println!("Wrote {}", path.display()),
        None => println!("No data was scraped. The CSV file was not created."),
    }
    Ok(())
}
