// src/steam.rs
//! Store-side collaborators: title search and the paginated reviews endpoint.

use crate::config::consts::{REVIEWS_PATH, SEARCH_CATEGORY, SEARCH_PATH, STORE_HOST};
use crate::core::net;
use crate::error::Result;
use crate::specs::{
    reviews::{self, ReviewPage, ReviewQuery},
    search,
};

/// The two store calls the review harvester needs.
/// `SteamStore` talks to the live site; tests supply canned pages.
pub trait StoreApi {
    /// First search hit for `title`.
    fn search_app_id(&self, title: &str) -> Result<String>;

    /// One page of reviews for `app_id`.
    fn review_page(&self, app_id: &str, query: &ReviewQuery<'_>) -> Result<ReviewPage>;
}

pub struct SteamStore {
    agent: ureq::Agent,
    base_url: String,
}

impl SteamStore {
    pub fn new() -> Self {
        Self::with_base_url(STORE_HOST)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            agent: net::agent(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for SteamStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreApi for SteamStore {
    fn search_app_id(&self, title: &str) -> Result<String> {
        let url = join!(&self.base_url, SEARCH_PATH);
        logd!("Search: GET {} term={}", url, title);
        let doc = net::get_text(&self.agent, &url, &[("term", title), ("category1", SEARCH_CATEGORY)])?;
        search::first_app_id(&doc, title)
    }

    fn review_page(&self, app_id: &str, query: &ReviewQuery<'_>) -> Result<ReviewPage> {
        let url = join!(&self.base_url, REVIEWS_PATH, app_id);
        let pairs = query.query_pairs();
        let borrowed: Vec<(&str, &str)> = pairs.iter().map(|(k, v)| (*k, v.as_str())).collect();
        logd!("Reviews: GET {} num_per_page={}", url, query.per_page);
        let body = net::get_text(&self.agent, &url, &borrowed)?;
        reviews::parse_page(&body)
    }
}
