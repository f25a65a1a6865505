// src/specs/announcements.rs
//! Rendered announcements feed → one record per card.
//!
//! Card anatomy (class names on `div`s):
//! - `apphub_Card`: the card itself
//! - `apphub_CardContentNewsDate`: date text, free-form ("Yesterday", "21 Nov, 2024", …)
//! - `apphub_CardHeaderContent`: wraps an `<a>` whose text is the title
//! - `apphub_CardContentNewsDesc`: description

use scraper::Html;

use crate::config::consts::NOT_AVAILABLE;
use crate::core::html::{first_text, selector, stripped_text};
use crate::error::Result;

pub const ANNOUNCEMENT_COLUMNS: [&str; 4] = ["game_id", "date", "title", "desc"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnnouncementRecord {
    pub game_id: String,
    pub date: String,
    pub title: String,
    pub desc: String,
}

impl AnnouncementRecord {
    pub fn headers() -> Vec<String> {
        ANNOUNCEMENT_COLUMNS.iter().map(|c| s!(*c)).collect()
    }

    pub fn to_row(&self) -> Vec<String> {
        vec![self.game_id.clone(), self.date.clone(), self.title.clone(), self.desc.clone()]
    }
}

pub fn parse_cards(doc: &str, app_id: &str) -> Result<Vec<AnnouncementRecord>> {
    let html = Html::parse_document(doc);
    let card_sel = selector("div.apphub_Card")?;
    let date_sel = selector("div.apphub_CardContentNewsDate")?;
    let header_sel = selector("div.apphub_CardHeaderContent")?;
    let link_sel = selector("a")?;
    let desc_sel = selector("div.apphub_CardContentNewsDesc")?;

    let or_na = |v: Option<String>| v.unwrap_or_else(|| s!(NOT_AVAILABLE));

    let records = html
        .select(&card_sel)
        .map(|card| {
            // Title is the first link inside the header; a header without one is N/A.
            let title = card
                .select(&header_sel)
                .next()
                .and_then(|h| h.select(&link_sel).next())
                .map(stripped_text);

            AnnouncementRecord {
                game_id: s!(app_id),
                date: or_na(first_text(card, &date_sel)),
                title: or_na(title),
                desc: or_na(first_text(card, &desc_sel)),
            }
        })
        .collect();

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: &str = r#"
      <html><body><div id="AppHubCards">
        <div class="apphub_Card modalContentLink interactable">
          <div class="apphub_CardHeaderContent"><a href="/news/1"> Hotfix 1.2 </a></div>
          <div class="apphub_CardContentNewsDate"> 21 Nov, 2024 </div>
          <div class="apphub_CardContentNewsDesc">Minor <b>fixes</b> and tweaks</div>
        </div>
        <div class="apphub_Card">
          <div class="apphub_CardHeaderContent"><span>no link</span></div>
          <div class="apphub_CardContentNewsDesc">Body only</div>
        </div>
      </div></body></html>
    "#;

    #[test]
    fn extracts_each_card() {
        let cards = parse_cards(FEED, "292030").unwrap();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0], AnnouncementRecord {
            game_id: s!("292030"),
            date: s!("21 Nov, 2024"),
            title: s!("Hotfix 1.2"),
            desc: s!("Minorfixesand tweaks"),
        });
    }

    #[test]
    fn missing_parts_become_na() {
        let cards = parse_cards(FEED, "292030").unwrap();
        assert_eq!(cards[1].date, NOT_AVAILABLE);
        assert_eq!(cards[1].title, NOT_AVAILABLE);
        assert_eq!(cards[1].desc, "Body only");
    }

    #[test]
    fn page_without_cards_yields_nothing() {
        assert!(parse_cards("<html><body></body></html>", "1").unwrap().is_empty());
    }
}
