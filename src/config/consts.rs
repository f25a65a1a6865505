// src/config/consts.rs

// Net config
pub const STORE_HOST: &str = "https://store.steampowered.com";
pub const SEARCH_PATH: &str = "/search/";
pub const SEARCH_CATEGORY: &str = "998"; // games only
pub const REVIEWS_PATH: &str = "/appreviews/";
pub const ANNOUNCEMENTS_URL_TMPL: &str = "https://steamcommunity.com/app/{}/allnews/";
pub const HTTP_USER_AGENT: &str = "Mozilla/5.0";
pub const HTTP_TIMEOUT_SECS: u64 = 30;
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

// Browser
pub const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:9515";
pub const ENV_WEBDRIVER_URL: &str = "WEBDRIVER_URL";
pub const ENV_CHROME_HEADLESS: &str = "CHROME_HEADLESS";
pub const AGE_GATE_SELECTOR: &str = ".btn_blue_steamui.btn_medium";
pub const AGE_GATE_PROBE_SECS: u64 = 2;
pub const AGE_GATE_SETTLE_SECS: u64 = 3;
pub const MAX_SCROLL_ATTEMPTS: usize = 5; // static pages would loop forever otherwise
pub const SCROLL_SETTLE_SECS: u64 = 3;

// Reviews
pub const REVIEWS_PER_GAME: usize = 1000;
pub const REVIEWS_PAGE_MAX: usize = 100;
pub const REVIEWS_DAY_RANGE: &str = "9223372036854775807";
pub const REVIEWS_OUT_DIR: &str = "data";

// Files
pub const ANNOUNCEMENTS_FILE: &str = "steam_announcements.csv";
pub const ENRICHED_FILE: &str = "steam_announcements_with_titles.csv";
pub const CSV_SEP: char = ',';

/// Placeholder for card elements that were not rendered.
pub const NOT_AVAILABLE: &str = "N/A";
/// Rows echoed at debug level after a CSV is written.
pub const PREVIEW_ROWS: usize = 5;

pub const GAMES: &[&str] = &[
    "Dragon Age: Inquisition",
    "The Witcher 3: Wild Hunt",
    "God of War",
    "Sekiro: Shadows Die Twice",
    "The Last of Us Part II",
    "It Takes Two",
    "Elden Ring",
    "Baldur's Gate 3",
];

pub const GAME_IDS: &[&str] = &[
    "1222690",
    "292030",
    "1593500",
    "814380",
    "2531310",
    "1426210",
    "1245620",
    "1086940",
];

pub const LANGUAGES: &[&str] = &["english"];

/// `data/GOTY_Steam_reviews_<language>_sample.csv`
pub fn reviews_file_name(language: &str) -> String {
    join!("GOTY_Steam_reviews_", language, "_sample.csv")
}

pub fn announcements_url(app_id: &str) -> String {
    ANNOUNCEMENTS_URL_TMPL.replace("{}", app_id)
}
