// src/harvest/announcements.rs
use std::path::{Path, PathBuf};

use super::pause;
use crate::browser::{Browser, WebDriverSession};
use crate::config::consts::{announcements_url, AGE_GATE_SELECTOR, PREVIEW_ROWS};
use crate::config::{ScrollPolicy, Settings};
use crate::error::Result;
use crate::file::write_dataset;
use crate::progress::Progress;
use crate::specs::announcements::{parse_cards, AnnouncementRecord};
use crate::store::DataSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollOutcome {
    /// Scrolls that grew the page.
    pub attempts: usize,
    /// Two consecutive heights matched before the cap was hit.
    pub reached_end: bool,
    pub final_height: u64,
}

/// Scroll to the bottom until the page stops growing, at most
/// `policy.max_attempts` times, waiting `policy.settle` after each scroll.
pub fn scroll_until_settled(browser: &mut dyn Browser, policy: &ScrollPolicy) -> Result<ScrollOutcome> {
    let mut last_height = browser.scroll_height()?;
    let mut attempts = 0;

    while attempts < policy.max_attempts {
        browser.scroll_to_bottom()?;
        pause(policy.settle);

        let new_height = browser.scroll_height()?;
        if new_height == last_height {
            logd!("Reached the end of the page at height {}", new_height);
            return Ok(ScrollOutcome { attempts, reached_end: true, final_height: new_height });
        }
        last_height = new_height;
        attempts += 1;
    }

    Ok(ScrollOutcome { attempts, reached_end: false, final_height: last_height })
}

/// Click through the age check if the page shows one. Returns whether it did.
pub fn dismiss_age_gate(browser: &mut dyn Browser, policy: &ScrollPolicy, app_id: &str) -> Result<bool> {
    pause(policy.age_gate_probe);
    if browser.click_first(AGE_GATE_SELECTOR)? {
        logf!("Age verification page found for app_id {}. Clicked through.", app_id);
        pause(policy.age_gate_settle);
        Ok(true)
    } else {
        logd!("No age verification page for app_id {}", app_id);
        Ok(false)
    }
}

/// Load, unlock, scroll, and parse one app's announcement feed.
pub fn scrape_app(
    browser: &mut dyn Browser,
    app_id: &str,
    policy: &ScrollPolicy,
) -> Result<Vec<AnnouncementRecord>> {
    browser.goto(&announcements_url(app_id))?;
    dismiss_age_gate(browser, policy, app_id)?;

    let outcome = scroll_until_settled(browser, policy)?;
    if !outcome.reached_end {
        logd!("app_id {}: scroll cap ({}) hit, page may have more", app_id, policy.max_attempts);
    }

    let cards = parse_cards(&browser.page_source()?, app_id)?;
    logf!("Found {} announcement cards for app_id {} after scrolling", cards.len(), app_id);
    Ok(cards)
}

/// Every app in order on one browser. A failing app is logged and contributes
/// no rows; the rest still run.
pub fn harvest(
    browser: &mut dyn Browser,
    app_ids: &[String],
    policy: &ScrollPolicy,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> DataSet {
    let mut data = DataSet::new(AnnouncementRecord::headers());

    if let Some(p) = progress.as_deref_mut() {
        p.begin(app_ids.len());
    }

    for app_id in app_ids {
        logf!("Scraping announcements for app_id: {}", app_id);
        match scrape_app(browser, app_id, policy) {
            Ok(cards) => {
                let n = cards.len();
                for card in cards {
                    data.push_row(card.to_row());
                }
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(app_id, n);
                }
            }
            Err(e) => {
                loge!("An error occurred while processing app_id {}: {}", app_id, e);
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(app_id, &e.to_string());
                }
            }
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    data
}

/// Full pipeline against a live WebDriver. The session lives exactly as long
/// as this call. Returns the CSV path, or `None` when nothing was scraped.
pub fn run(
    settings: &Settings,
    app_ids: &[String],
    policy: &ScrollPolicy,
    out: &Path,
    progress: Option<&mut dyn Progress>,
) -> Result<Option<PathBuf>> {
    let mut session = WebDriverSession::start(settings)?;
    let data = harvest(&mut session, app_ids, policy, progress);
    if let Err(e) = session.quit() {
        logw!("WebDriver session did not close cleanly: {}", e);
    }

    write_if_any(&data, out)
}

/// Write `data` to `out` unless it has no rows.
pub fn write_if_any(data: &DataSet, out: &Path) -> Result<Option<PathBuf>> {
    if data.is_empty() {
        logw!("No data was scraped. The CSV file was not created.");
        return Ok(None);
    }
    let path = write_dataset(out, data)?;
    logf!("Successfully scraped {} announcements. Data exported to '{}'", data.len(), path.display());
    for row in data.rows.iter().take(PREVIEW_ROWS) {
        logd!("{}", row.join(" | "));
    }
    Ok(Some(path))
}
