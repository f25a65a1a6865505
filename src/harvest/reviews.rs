// src/harvest/reviews.rs
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::config::consts::REVIEWS_PAGE_MAX;
use crate::config::ReviewOptions;
use crate::core::sanitize::file_component;
use crate::error::{Result, ScrapeError};
use crate::file::write_dataset;
use crate::progress::Progress;
use crate::specs::reviews::{Cursor, Review, ReviewQuery, ReviewRecord};
use crate::steam::StoreApi;
use crate::store::DataSet;

/// A title paired with the id the search returned for it.
/// Carrying both keeps titles and ids aligned when some searches fail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedGame {
    pub title: String,
    pub app_id: String,
}

#[derive(Debug, Default)]
pub struct Resolution {
    pub games: Vec<ResolvedGame>,
    pub unresolved: Vec<(String, ScrapeError)>,
}

/// One search per title, input order preserved. Titles without a usable hit are
/// logged and left out of `games`; they are listed in `unresolved`.
pub fn resolve_app_ids(api: &dyn StoreApi, titles: &[String]) -> Resolution {
    let mut out = Resolution::default();

    for title in titles {
        match api.search_app_id(title) {
            Ok(app_id) => {
                logd!("Resolved '{}' -> {}", title, app_id);
                out.games.push(ResolvedGame { title: title.clone(), app_id });
            }
            Err(e) => {
                logw!("{}", e);
                out.unresolved.push((title.clone(), e));
            }
        }
    }

    if !out.unresolved.is_empty() {
        let names: Vec<&str> = out.unresolved.iter().map(|(t, _)| t.as_str()).collect();
        logw!(
            "{} of {} title(s) could not be resolved and will be skipped: {}",
            names.len(), titles.len(), names.join(", ")
        );
    }
    out
}

/// Up to `n` reviews for one app, following the endpoint's cursor.
///
/// Requests `min(100, remaining)` per page and stops when the budget is spent
/// or a page comes back short, so at most `ceil(n / 100)` requests are made.
/// Any page failure ends the walk for this app.
pub fn collect_reviews(
    api: &dyn StoreApi,
    app_id: &str,
    n: usize,
    language: &str,
) -> Result<Vec<Review>> {
    let mut reviews = Vec::new();
    let mut remaining = n;
    let mut cursor = Cursor::start();

    while remaining > 0 {
        let per_page = remaining.min(REVIEWS_PAGE_MAX);
        remaining = remaining.saturating_sub(REVIEWS_PAGE_MAX);

        let page = api.review_page(app_id, &ReviewQuery { cursor: &cursor, per_page, language })?;
        let got = page.reviews.len();
        reviews.extend(page.reviews);
        cursor = page.cursor;

        if got < REVIEWS_PAGE_MAX {
            break; // end of data
        }
    }

    reviews.truncate(n);
    Ok(reviews)
}

/// Reviews for every resolved game in one language, as a table in review-CSV shape.
/// Per-game counts are returned in first-seen order.
pub fn harvest_language(
    api: &dyn StoreApi,
    games: &[ResolvedGame],
    language: &str,
    per_game: usize,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> (DataSet, Vec<(String, usize)>) {
    let mut data = DataSet::new(ReviewRecord::headers());
    let mut counts = Vec::with_capacity(games.len());

    if let Some(p) = progress.as_deref_mut() {
        p.begin(games.len());
    }

    for game in games {
        match collect_reviews(api, &game.app_id, per_game, language) {
            Ok(reviews) => {
                counts.push((game.title.clone(), reviews.len()));
                for review in reviews {
                    let rec = ReviewRecord { game: game.title.clone(), review };
                    data.push_row(rec.to_row());
                }
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(&game.app_id, counts.last().map(|c| c.1).unwrap_or(0));
                }
            }
            Err(e) => {
                loge!("Failed to fetch reviews for '{}' (app_id {}): {}", game.title, game.app_id, e);
                counts.push((game.title.clone(), 0));
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(&game.app_id, &e.to_string());
                }
            }
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    (data, counts)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LanguageSummary {
    pub language: String,
    pub path: PathBuf,
    pub rows: usize,
    pub columns: usize,
    pub per_game: Vec<(String, usize)>,
}

/// Whole review pipeline: resolve once, then one CSV per language.
/// A write failure stops the run.
pub fn run(
    api: &dyn StoreApi,
    opts: &ReviewOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<LanguageSummary>> {
    let resolution = resolve_app_ids(api, &opts.games);
    let mut summaries = Vec::with_capacity(opts.languages.len());

    for language in &opts.languages {
        logf!("Scraping reviews for language: {}", language);
        let (data, per_game) =
            harvest_language(api, &resolution.games, language, opts.per_game, progress.as_deref_mut());

        let path = write_dataset(&opts.out_path(&file_component(language)), &data)?;
        logf!("Reviews for language {} saved to '{}'", language, path.display());
        log_counts(&data);

        summaries.push(LanguageSummary {
            language: language.clone(),
            path,
            rows: data.len(),
            columns: data.headers.len(),
            per_game,
        });
    }
    Ok(summaries)
}

// Rows per game, most first, then table shape.
fn log_counts(data: &DataSet) {
    let mut by_game: BTreeMap<&str, usize> = BTreeMap::new();
    for row in &data.rows {
        *by_game.entry(data.cell(row, "game")).or_default() += 1;
    }
    let mut counts: Vec<(&str, usize)> = by_game.into_iter().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    for (game, n) in counts {
        logf!("  {:<32} {}", game, n);
    }
    logf!("shape: ({}, {})", data.len(), data.headers.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specs::reviews::ReviewPage;
    use std::cell::RefCell;

    fn review(ts: i64) -> Review {
        Review {
            timestamp_created: ts,
            review: s!("ok"),
            voted_up: true,
            weighted_vote_score: 0.5,
            language: s!("english"),
            author: serde_json::Value::Null,
        }
    }

    /// Serves `total` reviews, honouring `per_page`; records each request.
    struct Endless {
        total: usize,
        calls: RefCell<Vec<(String, usize)>>,
    }

    impl StoreApi for Endless {
        fn search_app_id(&self, title: &str) -> Result<String> {
            Ok(title.to_ascii_lowercase())
        }
        fn review_page(&self, _app_id: &str, q: &ReviewQuery<'_>) -> Result<ReviewPage> {
            let served: usize = self.calls.borrow().iter().map(|c| c.1).sum();
            self.calls.borrow_mut().push((s!(q.cursor.as_param()), q.per_page));
            let n = q.per_page.min(self.total.saturating_sub(served));
            let calls = self.calls.borrow().len();
            Ok(ReviewPage {
                cursor: serde_json::from_value(serde_json::json!(format!("c{calls}"))).unwrap(),
                reviews: (0..n).map(|i| review(i as i64)).collect(),
            })
        }
    }

    #[test]
    fn stops_at_budget() {
        let api = Endless { total: 10_000, calls: RefCell::new(vec![]) };
        let got = collect_reviews(&api, "1", 250, "english").unwrap();
        assert_eq!(got.len(), 250);
        let calls = api.calls.borrow();
        assert_eq!(calls.iter().map(|c| c.1).collect::<Vec<_>>(), vec![100, 100, 50]);
    }

    #[test]
    fn cursor_is_threaded_through() {
        let api = Endless { total: 10_000, calls: RefCell::new(vec![]) };
        collect_reviews(&api, "1", 300, "english").unwrap();
        let cursors: Vec<String> = api.calls.borrow().iter().map(|c| c.0.clone()).collect();
        assert_eq!(cursors, vec!["*", "c1", "c2"]);
    }

    #[test]
    fn short_page_ends_walk() {
        let api = Endless { total: 130, calls: RefCell::new(vec![]) };
        let got = collect_reviews(&api, "1", 1000, "english").unwrap();
        assert_eq!(got.len(), 130);
        assert_eq!(api.calls.borrow().len(), 2);
    }

    #[test]
    fn zero_budget_makes_no_request() {
        let api = Endless { total: 10, calls: RefCell::new(vec![]) };
        assert!(collect_reviews(&api, "1", 0, "english").unwrap().is_empty());
        assert!(api.calls.borrow().is_empty());
    }

    struct Broken;

    impl StoreApi for Broken {
        fn search_app_id(&self, title: &str) -> Result<String> {
            Err(ScrapeError::NotFound(s!(title)))
        }
        fn review_page(&self, _app_id: &str, _q: &ReviewQuery<'_>) -> Result<ReviewPage> {
            Err(ScrapeError::Api { status: 502, message: s!("Bad Gateway") })
        }
    }

    #[test]
    fn failed_game_is_logged_without_progress() {
        let games = [ResolvedGame { title: s!("Broken"), app_id: s!("77") }];
        let ((data, counts), logged) =
            crate::log::capture(|| harvest_language(&Broken, &games, "english", 100, None));

        assert!(data.is_empty());
        assert_eq!(counts, vec![(s!("Broken"), 0)]);
        assert!(logged.contains("app_id 77"), "log was: {logged}");
        assert!(logged.contains("502"), "log was: {logged}");
    }

    /// Progress sink that counts calls; shared across languages by `run`.
    #[derive(Default)]
    struct Tally {
        begun: usize,
        failed: Vec<String>,
    }

    impl Progress for Tally {
        fn begin(&mut self, _total: usize) {
            self.begun += 1;
        }
        fn item_failed(&mut self, id: &str, _reason: &str) {
            self.failed.push(s!(id));
        }
    }

    #[test]
    fn progress_is_reused_across_languages() {
        let dir = tempfile::tempdir().unwrap();
        let opts = ReviewOptions {
            games: vec![s!("Alpha")],
            languages: vec![s!("english"), s!("german")],
            per_game: 5,
            out_dir: dir.path().to_path_buf(),
        };
        let mut tally = Tally::default();

        // Search succeeds with the lowercased title; the page then fails.
        struct SearchOnly;
        impl StoreApi for SearchOnly {
            fn search_app_id(&self, title: &str) -> Result<String> {
                Ok(title.to_ascii_lowercase())
            }
            fn review_page(&self, app_id: &str, q: &ReviewQuery<'_>) -> Result<ReviewPage> {
                Broken.review_page(app_id, q)
            }
        }

        let summaries = run(&SearchOnly, &opts, Some(&mut tally)).unwrap();
        assert_eq!(summaries.len(), 2);
        assert_eq!(tally.begun, 2);
        assert_eq!(tally.failed, vec!["alpha", "alpha"]);
    }
}
