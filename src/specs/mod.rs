// src/specs/mod.rs
//! # Page and payload "specs"
//!
//! Each spec knows how to read one upstream shape: the store search page, the
//! reviews JSON payload, and the rendered announcements feed. They are pure:
//! input text in, typed records out. Fetching, pacing and file output live in
//! `steam`, `browser` and `harvest`.
//!
//! ## Conventions
//! - Selectors are CSS via `scraper`; no regexes over whole documents.
//! - Absent card pieces become the literal `"N/A"`, never an empty string.
//! - Column order for every CSV written by the harvesters is declared here
//!   next to the record that fills it.
//! - Specs are tested offline against inline fixtures.
pub mod announcements;
pub mod reviews;
pub mod search;
