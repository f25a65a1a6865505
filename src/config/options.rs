// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;

/// Runtime environment. Everything else is compiled in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub webdriver_url: String,
    pub headless: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            webdriver_url: s!(DEFAULT_WEBDRIVER_URL),
            headless: false,
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();
        if let Some(url) = lookup(ENV_WEBDRIVER_URL).filter(|v| !v.trim().is_empty()) {
            settings.webdriver_url = url.trim().trim_end_matches('/').to_string();
        }
        if let Some(flag) = lookup(ENV_CHROME_HEADLESS) {
            settings.headless = matches!(flag.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes");
        }
        settings
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewOptions {
    pub games: Vec<String>,
    pub languages: Vec<String>,
    pub per_game: usize,
    pub out_dir: PathBuf,
}

impl Default for ReviewOptions {
    fn default() -> Self {
        Self {
            games: GAMES.iter().map(|g| s!(*g)).collect(),
            languages: LANGUAGES.iter().map(|l| s!(*l)).collect(),
            per_game: REVIEWS_PER_GAME,
            out_dir: PathBuf::from(REVIEWS_OUT_DIR),
        }
    }
}

impl ReviewOptions {
    pub fn out_path(&self, language: &str) -> PathBuf {
        self.out_dir.join(reviews_file_name(language))
    }
}

/// Waits and caps for one announcements page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrollPolicy {
    pub max_attempts: usize,
    pub settle: Duration,
    pub age_gate_probe: Duration,
    pub age_gate_settle: Duration,
}

impl Default for ScrollPolicy {
    fn default() -> Self {
        Self {
            max_attempts: MAX_SCROLL_ATTEMPTS,
            settle: Duration::from_secs(SCROLL_SETTLE_SECS),
            age_gate_probe: Duration::from_secs(AGE_GATE_PROBE_SECS),
            age_gate_settle: Duration::from_secs(AGE_GATE_SETTLE_SECS),
        }
    }
}

impl ScrollPolicy {
    /// No waiting at all; for tests and replayed pages.
    pub fn immediate(max_attempts: usize) -> Self {
        Self {
            max_attempts,
            settle: Duration::ZERO,
            age_gate_probe: Duration::ZERO,
            age_gate_settle: Duration::ZERO,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MergeOptions {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(ANNOUNCEMENTS_FILE),
            output: PathBuf::from(ENRICHED_FILE),
        }
    }
}
