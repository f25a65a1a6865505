// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod browser;
pub mod config;
pub mod core;
pub mod csv;
pub mod error;
pub mod file;
pub mod harvest;
pub mod merge;
pub mod progress;
pub mod specs;
pub mod steam;
pub mod store;

pub use error::{Result, ScrapeError};
