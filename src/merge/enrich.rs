// src/merge/enrich.rs
use std::collections::BTreeSet;

use chrono::NaiveDateTime;

use super::dates::{normalize_date, CleanedDate};
use super::topic::{classify, Topic};
use crate::config::TitleMap;
use crate::specs::announcements::AnnouncementRecord;
use crate::store::DataSet;

/// Leading columns of the enriched CSV, when present. Anything else follows.
pub const PREFERRED_ORDER: [&str; 7] = [
    "game_id",
    "game_title",
    "original_date",
    "cleaned_date",
    "title",
    "topic",
    "desc",
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnrichedAnnouncement {
    pub record: AnnouncementRecord,
    pub game_title: &'static str,
    pub cleaned_date: CleanedDate,
    pub topic: Topic,
}

impl EnrichedAnnouncement {
    pub fn from_record(record: AnnouncementRecord, titles: &TitleMap, now: NaiveDateTime) -> Self {
        Self {
            game_title: titles.title_or_unknown(&record.game_id),
            cleaned_date: normalize_date(&record.date, now),
            topic: classify(&record.title, &record.desc),
            record,
        }
    }
}

#[derive(Debug)]
pub struct Enriched {
    pub data: DataSet,
    /// Distinct ids with no title, sorted.
    pub unknown_ids: BTreeSet<String>,
}

/// Add `game_title`, `cleaned_date` and `topic`, rename `date` to
/// `original_date`, and move the known columns to the front. Existing cells are
/// never rewritten, and columns the input lacks are read as empty.
pub fn enrich(mut data: DataSet, titles: &TitleMap, now: NaiveDateTime) -> Enriched {
    data.rename_column("date", "original_date");

    let mut unknown_ids = BTreeSet::new();
    let mut cleaned = Vec::with_capacity(data.len());
    let mut game_titles = Vec::with_capacity(data.len());
    let mut topics = Vec::with_capacity(data.len());

    for row in &data.rows {
        let record = AnnouncementRecord {
            game_id: s!(data.cell(row, "game_id")),
            date: s!(data.cell(row, "original_date")),
            title: s!(data.cell(row, "title")),
            desc: s!(data.cell(row, "desc")),
        };
        if !titles.contains(&record.game_id) {
            unknown_ids.insert(record.game_id.clone());
        }
        let e = EnrichedAnnouncement::from_record(record, titles, now);
        cleaned.push(e.cleaned_date.to_string());
        game_titles.push(s!(e.game_title));
        topics.push(s!(e.topic.as_str()));
    }

    data.set_column("cleaned_date", cleaned);
    data.set_column("game_title", game_titles);
    data.set_column("topic", topics);
    data.reorder(&PREFERRED_ORDER);

    Enriched { data, unknown_ids }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UNKNOWN_GAME;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap().and_hms_opt(9, 0, 0).unwrap()
    }

    fn input() -> DataSet {
        DataSet::from_rows(vec![
            row!["game_id", "date", "title", "desc", "source"],
            row!["292030", "Yesterday", "Hotfix 1.2", "minor fixes", "feed"],
            row!["42", "21 Nov, 2024", "Winter Update", "new DLC", "feed"],
            row!["42", "N/A", "N/A", "N/A", ""],
        ]).unwrap()
    }

    #[test]
    fn columns_are_added_and_ordered() {
        let out = enrich(input(), TitleMap::global(), now()).data;
        assert_eq!(
            out.headers,
            row!["game_id", "game_title", "original_date", "cleaned_date", "title", "topic", "desc", "source"]
        );
        assert_eq!(
            out.rows[0],
            row!["292030", "The Witcher 3: Wild Hunt", "Yesterday", "2024-06-09", "Hotfix 1.2", "Hotfix", "minor fixes", "feed"]
        );
    }

    #[test]
    fn unknown_ids_reported_once() {
        let out = enrich(input(), TitleMap::global(), now());
        assert_eq!(out.unknown_ids.into_iter().collect::<Vec<_>>(), vec![s!("42")]);
        assert_eq!(out.data.cell(&out.data.rows[1], "game_title"), UNKNOWN_GAME);
        assert_eq!(out.data.cell(&out.data.rows[2], "game_title"), UNKNOWN_GAME);
    }

    #[test]
    fn placeholders_stay_but_date_is_marked() {
        let out = enrich(input(), TitleMap::global(), now()).data;
        let row = &out.rows[2];
        assert_eq!(out.cell(row, "original_date"), "N/A");
        assert_eq!(out.cell(row, "cleaned_date"), "unparseable");
        assert_eq!(out.cell(row, "topic"), "Other");
    }

    #[test]
    fn missing_optional_columns_are_tolerated() {
        let ds = DataSet::from_rows(vec![row!["game_id", "title"], row!["1086940", "Patch 7"]]).unwrap();
        let out = enrich(ds, TitleMap::global(), now()).data;
        assert_eq!(out.headers, row!["game_id", "game_title", "cleaned_date", "title", "topic"]);
        assert_eq!(out.rows[0], row!["1086940", "Baldur's Gate 3", "unparseable", "Patch 7", "Patch"]);
    }
}
