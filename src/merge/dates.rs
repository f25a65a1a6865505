// src/merge/dates.rs
//! Free-form announcement dates → calendar dates.
//!
//! Rules run top to bottom and the first one that answers wins. A rule answers
//! `None` to pass the string on, or `Some(..)` to settle it (including settling
//! it as [`CleanedDate::Unparseable`]). "Now" is supplied by the caller and
//! should be captured once per run.

use std::fmt;
use std::sync::OnceLock;

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime};
use regex::Regex;

pub const UNPARSEABLE: &str = "unparseable";

/// Formats tried, in order, when the string carries a comma (and so a year).
pub const DATED_FORMATS: [&str; 3] = [
    "%d %b, %Y", // 21 Nov, 2024
    "%B %d, %Y", // May 29, 2024
    "%b %d, %Y", // Dec 3, 2022
];

/// Format for strings without a year once the current year is appended.
pub const YEARLESS_FORMAT: &str = "%d %b %Y"; // 16 Jan

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CleanedDate {
    Date(NaiveDate),
    Unparseable,
}

impl CleanedDate {
    pub fn date(self) -> Option<NaiveDate> {
        match self {
            CleanedDate::Date(d) => Some(d),
            CleanedDate::Unparseable => None,
        }
    }
}

impl From<Option<NaiveDate>> for CleanedDate {
    fn from(d: Option<NaiveDate>) -> Self {
        d.map_or(CleanedDate::Unparseable, CleanedDate::Date)
    }
}

impl fmt::Display for CleanedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CleanedDate::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            CleanedDate::Unparseable => f.write_str(UNPARSEABLE),
        }
    }
}

/// Input handed to every rule: the raw text, its lowercase form, and "now".
struct Probe<'a> {
    raw: &'a str,
    lower: String,
    now: NaiveDateTime,
}

type Rule = fn(&Probe<'_>) -> Option<CleanedDate>;

/// Priority order is the order of this table.
const RULES: [(&str, Rule); 4] = [
    ("yesterday", yesterday),
    ("days ago", days_ago),
    ("dated", with_year),
    ("yearless", without_year),
];

pub fn normalize_date(raw: &str, now: NaiveDateTime) -> CleanedDate {
    let probe = Probe { raw: raw.trim(), lower: raw.to_lowercase(), now };
    RULES
        .iter()
        .find_map(|(_, rule)| rule(&probe))
        .unwrap_or(CleanedDate::Unparseable)
}

/// Name of the rule that settled `raw`; useful when auditing odd rows.
pub fn matching_rule(raw: &str, now: NaiveDateTime) -> Option<&'static str> {
    let probe = Probe { raw: raw.trim(), lower: raw.to_lowercase(), now };
    RULES.iter().find(|(_, rule)| rule(&probe).is_some()).map(|(name, _)| *name)
}

fn yesterday(p: &Probe<'_>) -> Option<CleanedDate> {
    if !p.lower.contains("yesterday") {
        return None;
    }
    Some(p.now.date().pred_opt().into())
}

fn days_ago(p: &Probe<'_>) -> Option<CleanedDate> {
    if !p.lower.contains("days ago") {
        return None;
    }
    static FIRST_INT: OnceLock<Regex> = OnceLock::new();
    let re = FIRST_INT.get_or_init(|| Regex::new(r"\d+").expect("valid regex"));

    let back = re
        .find(&p.lower)
        .and_then(|m| m.as_str().parse::<u64>().ok())
        .and_then(|n| p.now.date().checked_sub_days(Days::new(n)));
    Some(back.into())
}

fn with_year(p: &Probe<'_>) -> Option<CleanedDate> {
    if !p.raw.contains(',') {
        return None;
    }
    // None here falls through to the yearless rule
    DATED_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(p.raw, fmt).ok())
        .map(CleanedDate::Date)
}

fn without_year(p: &Probe<'_>) -> Option<CleanedDate> {
    let year = p.now.year();
    let candidate = format!("{} {}", p.raw, year);
    let Ok(date) = NaiveDate::parse_from_str(&candidate, YEARLESS_FORMAT) else {
        return Some(CleanedDate::Unparseable);
    };
    // A yearless date later than now belongs to last year.
    // Midnight of `date` is after `now` exactly when the day itself is.
    if date > p.now.date() {
        return Some(date.with_year(year - 1).into());
    }
    Some(CleanedDate::Date(date))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(12, 0, 0).unwrap()
    }

    fn ymd(y: i32, m: u32, d: u32) -> CleanedDate {
        CleanedDate::Date(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn yesterday_any_case() {
        let now = at(2024, 3, 1);
        assert_eq!(normalize_date("Yesterday", now), ymd(2024, 2, 29));
        assert_eq!(normalize_date("posted YESTERDAY at 5pm", now), ymd(2024, 2, 29));
    }

    #[test]
    fn days_ago_uses_first_integer() {
        let now = at(2024, 6, 10);
        assert_eq!(normalize_date("5 days ago", now), ymd(2024, 6, 5));
        assert_eq!(normalize_date("Posted 12 Days Ago", now), ymd(2024, 5, 29));
        assert_eq!(normalize_date("some days ago", now), CleanedDate::Unparseable);
    }

    #[test]
    fn dated_formats() {
        let now = at(2026, 1, 1);
        assert_eq!(normalize_date("21 Nov, 2024", now), ymd(2024, 11, 21));
        assert_eq!(normalize_date("May 29, 2024", now), ymd(2024, 5, 29));
        assert_eq!(normalize_date("Dec 3, 2022", now), ymd(2022, 12, 3));
        assert_eq!(normalize_date("September 14, 2023", now), ymd(2023, 9, 14));
    }

    #[test]
    fn yearless_same_year_when_not_future() {
        assert_eq!(normalize_date("16 Jan", at(2024, 1, 20)), ymd(2024, 1, 16));
    }

    #[test]
    fn yearless_rolls_back_when_future() {
        assert_eq!(normalize_date("16 Jan", at(2024, 1, 10)), ymd(2023, 1, 16));
    }

    #[test]
    fn yearless_today_is_not_future() {
        assert_eq!(normalize_date("10 Jan", at(2024, 1, 10)), ymd(2024, 1, 10));
    }

    #[test]
    fn leap_day_without_prior_year_is_unparseable() {
        // 29 Feb 2024 is after 2024-02-01, and 2023 has no 29 Feb.
        assert_eq!(normalize_date("29 Feb", at(2024, 2, 1)), CleanedDate::Unparseable);
    }

    #[test]
    fn garbage_is_marked_not_defaulted() {
        let now = at(2024, 6, 10);
        for raw in ["", "N/A", "Today", "1 day ago", "Nov 99, 2024"] {
            assert_eq!(normalize_date(raw, now), CleanedDate::Unparseable, "{raw:?}");
        }
    }

    #[test]
    fn rule_priority() {
        let now = at(2024, 6, 10);
        assert_eq!(matching_rule("Yesterday, 3 days ago", now), Some("yesterday"));
        assert_eq!(matching_rule("3 days ago, 2020", now), Some("days ago"));
        assert_eq!(matching_rule("21 Nov, 2024", now), Some("dated"));
        assert_eq!(matching_rule("bad, text", now), Some("yearless"));
    }

    #[test]
    fn display_is_iso_or_marker() {
        assert_eq!(ymd(2024, 1, 2).to_string(), "2024-01-02");
        assert_eq!(CleanedDate::Unparseable.to_string(), UNPARSEABLE);
    }

    #[test]
    fn explicit_year_is_taken_as_written() {
        // Only relative and yearless strings are anchored to `now`.
        let now = at(2024, 6, 10);
        assert_eq!(normalize_date("Dec 3, 2030", now), ymd(2030, 12, 3));
        assert_eq!(matching_rule("Dec 3, 2030", now), Some("dated"));
    }

    #[test]
    fn relative_and_yearless_never_after_now() {
        let now = at(2024, 6, 10);
        for raw in ["Yesterday", "0 days ago", "10 Jun", "11 Jun", "31 Dec"] {
            if let Some(d) = normalize_date(raw, now).date() {
                assert!(d <= now.date(), "{raw} -> {d}");
            }
        }
    }
}
