// src/browser/mod.rs
//! Rendered-page collaborator.
//!
//! The announcement harvester only needs five operations from a browser, so
//! that is all [`Browser`] exposes. [`WebDriverSession`] implements it against
//! a W3C WebDriver endpoint (chromedriver); tests implement it with scripted
//! page heights and canned HTML.

pub mod webdriver;

pub use webdriver::WebDriverSession;

use crate::error::Result;

pub trait Browser {
    /// Navigate and wait for the load to finish.
    fn goto(&mut self, url: &str) -> Result<()>;

    /// Click the first element matching `css`. `Ok(false)` when nothing matches.
    fn click_first(&mut self, css: &str) -> Result<bool>;

    /// Current `document.body.scrollHeight`.
    fn scroll_height(&mut self) -> Result<u64>;

    fn scroll_to_bottom(&mut self) -> Result<()>;

    /// Serialized DOM as currently rendered.
    fn page_source(&mut self) -> Result<String>;
}
