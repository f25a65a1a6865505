// src/harvest/mod.rs
//! The two scraping pipelines. Both are strictly sequential: one identifier at
//! a time, one page or scroll at a time, and a failure on one identifier never
//! aborts the others.
pub mod announcements;
pub mod reviews;

use std::{thread, time::Duration};

pub(crate) fn pause(d: Duration) {
    if !d.is_zero() {
        thread::sleep(d);
    }
}
