// src/config/titles.rs
//! Static app id → display title table used by the merge step.
//!
//! Built once, never mutated. Identifiers that are not in the table resolve to
//! [`UNKNOWN_GAME`]; nothing is inserted lazily.

use std::collections::HashMap;
use std::sync::OnceLock;

pub const UNKNOWN_GAME: &str = "Unknown Game";

/// One row of the hand-maintained table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TitleEntry {
    pub app_id: &'static str,
    pub title: &'static str,
    /// False when the id is known not to belong to the title.
    pub verified: bool,
}

const ENTRIES: &[TitleEntry] = &[
    // 1222690 is not the Dragon Age: Inquisition store id; kept so existing CSVs still map.
    TitleEntry { app_id: "1222690", title: "Dragon Age: Inquisition", verified: false },
    TitleEntry { app_id: "292030", title: "The Witcher 3: Wild Hunt", verified: true },
    TitleEntry { app_id: "1593500", title: "God of War", verified: true },
    TitleEntry { app_id: "814380", title: "Sekiro: Shadows Die Twice", verified: true },
    TitleEntry { app_id: "2531310", title: "The Last of Us Part II", verified: true },
    TitleEntry { app_id: "1426210", title: "It Takes Two", verified: true },
    TitleEntry { app_id: "1245620", title: "ELDEN RING", verified: true },
    TitleEntry { app_id: "1086940", title: "Baldur's Gate 3", verified: true },
];

#[derive(Debug)]
pub struct TitleMap {
    by_id: HashMap<&'static str, &'static str>,
    suspect: Vec<TitleEntry>,
}

impl TitleMap {
    /// Process-wide table built from the compiled-in entries.
    pub fn global() -> &'static TitleMap {
        static MAP: OnceLock<TitleMap> = OnceLock::new();
        MAP.get_or_init(|| TitleMap::from_entries(ENTRIES))
    }

    pub fn from_entries(entries: &[TitleEntry]) -> Self {
        let by_id = entries.iter().map(|e| (e.app_id, e.title)).collect();
        let suspect = entries.iter().filter(|e| !e.verified).copied().collect();
        Self { by_id, suspect }
    }

    pub fn get(&self, app_id: &str) -> Option<&'static str> {
        self.by_id.get(app_id.trim()).copied()
    }

    pub fn title_or_unknown(&self, app_id: &str) -> &'static str {
        self.get(app_id).unwrap_or(UNKNOWN_GAME)
    }

    pub fn contains(&self, app_id: &str) -> bool {
        self.by_id.contains_key(app_id.trim())
    }

    /// Entries whose id/title pairing is known to be wrong.
    pub fn suspect_entries(&self) -> &[TitleEntry] {
        &self.suspect
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
