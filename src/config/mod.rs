// src/config/mod.rs
pub mod consts;
pub mod options;
pub mod titles;

pub use options::{MergeOptions, ReviewOptions, ScrollPolicy, Settings};
pub use titles::{TitleMap, UNKNOWN_GAME};
