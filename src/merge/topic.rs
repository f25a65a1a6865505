// src/merge/topic.rs
//! Keyword topic for an announcement.
//!
//! Rules are checked top to bottom; first hit wins. "hotfix" only counts in the
//! title, so a description that says "hotfix" lands in `Fix` instead.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Topic {
    Dlc,
    Hotfix,
    Patch,
    Update,
    Fix,
    Other,
}

impl Topic {
    pub const ALL: [Topic; 6] = [Topic::Dlc, Topic::Hotfix, Topic::Patch, Topic::Update, Topic::Fix, Topic::Other];

    pub fn as_str(self) -> &'static str {
        match self {
            Topic::Dlc => "DLC",
            Topic::Hotfix => "Hotfix",
            Topic::Patch => "Patch",
            Topic::Update => "Update",
            Topic::Fix => "Fix",
            Topic::Other => "Other",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

struct Text {
    title: String,
    /// title + " " + desc
    full: String,
}

type Rule = fn(&Text) -> bool;

const RULES: [(Topic, Rule); 5] = [
    (Topic::Dlc, mentions_dlc),
    (Topic::Hotfix, title_mentions_hotfix),
    (Topic::Patch, mentions_patch),
    (Topic::Update, mentions_update),
    (Topic::Fix, mentions_fix),
];

fn mentions_dlc(t: &Text) -> bool { t.full.contains("dlc") }
fn title_mentions_hotfix(t: &Text) -> bool { t.title.contains("hotfix") || t.title.contains("hot fix") }
fn mentions_patch(t: &Text) -> bool { t.full.contains("patch") }
fn mentions_update(t: &Text) -> bool { t.full.contains("update") }
fn mentions_fix(t: &Text) -> bool { t.full.contains("fix") }

pub fn classify(title: &str, desc: &str) -> Topic {
    let title = title.to_lowercase();
    let full = format!("{} {}", title, desc.to_lowercase());
    let text = Text { title, full };

    RULES
        .iter()
        .find(|(_, rule)| rule(&text))
        .map_or(Topic::Other, |(topic, _)| *topic)
}
