// src/specs/reviews.rs
//! Reviews endpoint payload and the review CSV shape.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::config::consts::REVIEWS_DAY_RANGE;
use crate::error::{Result, ScrapeError};

/// Continuation token handed back by the reviews endpoint.
/// Passed through untouched; never inspected or built by hand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cursor(String);

impl Cursor {
    /// Sentinel meaning "first page".
    pub fn start() -> Self {
        Cursor(s!("*"))
    }

    /// Value for the `cursor` query parameter.
    pub fn as_param(&self) -> &str {
        &self.0
    }
}

/// One request to the reviews endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewQuery<'a> {
    pub cursor: &'a Cursor,
    pub per_page: usize,
    pub language: &'a str,
}

impl ReviewQuery<'_> {
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("json", s!("1")),
            ("filter", s!("all")),
            ("language", s!(self.language)),
            ("day_range", s!(REVIEWS_DAY_RANGE)),
            ("review_type", s!("all")),
            ("purchase_type", s!("all")),
            ("cursor", s!(self.cursor.as_param())),
            ("num_per_page", self.per_page.to_string()),
        ]
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Review {
    pub timestamp_created: i64,
    #[serde(default)]
    pub review: String,
    #[serde(default)]
    pub voted_up: bool,
    #[serde(default, deserialize_with = "score_from_any")]
    pub weighted_vote_score: f64,
    #[serde(default)]
    pub language: String,
    /// Nested author object, kept opaque.
    #[serde(default)]
    pub author: Value,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ReviewPage {
    pub cursor: Cursor,
    pub reviews: Vec<Review>,
}

#[derive(Deserialize)]
struct RawPage {
    #[serde(default)]
    success: i64,
    cursor: Option<Cursor>,
    #[serde(default)]
    reviews: Vec<Review>,
}

/// Decode one page; `success != 1` or a missing cursor is an API error.
pub fn parse_page(body: &str) -> Result<ReviewPage> {
    let raw: RawPage = serde_json::from_str(body)?;
    if raw.success != 1 {
        return Err(ScrapeError::Api { status: 200, message: format!("success={}", raw.success) });
    }
    let cursor = raw
        .cursor
        .ok_or_else(|| ScrapeError::Parse(s!("reviews page without cursor")))?;
    Ok(ReviewPage { cursor, reviews: raw.reviews })
}

// The endpoint sends this as a quoted decimal ("0.52") or a bare 0.
fn score_from_any<'de, D: Deserializer<'de>>(de: D) -> std::result::Result<f64, D::Error> {
    match Value::deserialize(de)? {
        Value::Number(n) => Ok(n.as_f64().unwrap_or_default()),
        Value::String(s) if s.trim().is_empty() => Ok(0.0),
        Value::String(s) => s.trim().parse().map_err(serde::de::Error::custom),
        Value::Null => Ok(0.0),
        other => Err(serde::de::Error::custom(format!("unexpected score {other}"))),
    }
}

/* ---------------- CSV shape ---------------- */

pub const REVIEW_COLUMNS: [&str; 7] = [
    "timestamp_created",
    "game",
    "review",
    "voted_up",
    "weighted_vote_score",
    "language",
    "author",
];

/// A review tagged with the title it was harvested for.
#[derive(Clone, Debug, PartialEq)]
pub struct ReviewRecord {
    pub game: String,
    pub review: Review,
}

impl ReviewRecord {
    pub fn headers() -> Vec<String> {
        REVIEW_COLUMNS.iter().map(|c| s!(*c)).collect()
    }

    pub fn to_row(&self) -> Vec<String> {
        let r = &self.review;
        vec![
            r.timestamp_created.to_string(),
            self.game.clone(),
            r.review.clone(),
            r.voted_up.to_string(),
            r.weighted_vote_score.to_string(),
            r.language.clone(),
            if r.author.is_null() { s!() } else { r.author.to_string() },
        ]
    }
}
