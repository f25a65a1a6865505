// src/specs/search.rs
//! Store search results page → first app id.

use scraper::Html;

use crate::core::html::selector;
use crate::error::{Result, ScrapeError};

const RESULT_ROW: &str = ".search_result_row";
const APP_ID_ATTR: &str = "data-ds-appid";

/// Identifier of the first search hit for `title`.
///
/// `NotFound` when the page has no result row, `MissingAppId` when the first
/// row carries no usable id. Later rows are never consulted.
pub fn first_app_id(doc: &str, title: &str) -> Result<String> {
    let html = Html::parse_document(doc);
    let row_sel = selector(RESULT_ROW)?;

    let row = html
        .select(&row_sel)
        .next()
        .ok_or_else(|| ScrapeError::NotFound(s!(title)))?;

    match row.value().attr(APP_ID_ATTR).map(str::trim) {
        Some(id) if !id.is_empty() => Ok(s!(id)),
        _ => Err(ScrapeError::MissingAppId(s!(title))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_first_row_only() {
        let doc = r##"
            <div id="search_resultsRows">
              <a class="search_result_row ds_collapse_flag" data-ds-appid="1245620" href="#">ELDEN RING</a>
              <a class="search_result_row" data-ds-appid="2778580" href="#">ELDEN RING Shadow</a>
            </div>
        "##;
        assert_eq!(first_app_id(doc, "Elden Ring").unwrap(), "1245620");
    }

    #[test]
    fn no_rows_is_not_found() {
        let doc = "<div id='search_resultsRows'></div>";
        assert!(matches!(first_app_id(doc, "Nope"), Err(ScrapeError::NotFound(t)) if t == "Nope"));
    }

    #[test]
    fn row_without_id_is_missing_app_id() {
        let doc = r#"<a class="search_result_row" data-ds-appid=" ">x</a>"#;
        assert!(matches!(first_app_id(doc, "X"), Err(ScrapeError::MissingAppId(_))));
        let doc = r#"<a class="search_result_row">x</a>"#;
        assert!(matches!(first_app_id(doc, "X"), Err(ScrapeError::MissingAppId(_))));
    }
}
