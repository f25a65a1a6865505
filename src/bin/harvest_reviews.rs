// src/bin/harvest_reviews.rs
use color_eyre::eyre::Result;

use steam_scrape::config::ReviewOptions;
use steam_scrape::harvest::reviews;
use steam_scrape::progress::LogProgress;
use steam_scrape::steam::SteamStore;

fn main() -> Result<()> {
    color_eyre::install()?;
    steam_scrape::log::init();

    let store = SteamStore::new();
    let opts = ReviewOptions::default();
    let mut progress = LogProgress::new("reviews");

    let summaries = reviews::run(&store, &opts, Some(&mut progress))?;
    for s in &summaries {
        println!("{}: {} reviews -> {}", s.language, s.rows, s.path.display());
    }
    Ok(())
}
