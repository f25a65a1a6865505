// src/store.rs
//! In-memory table: one header row plus string cells.
//!
//! Every cell stays the exact text that was read, so identifiers such as
//! `game_id` round-trip without numeric coercion.

use crate::error::{Result, ScrapeError};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn new(headers: Vec<String>) -> Self {
        Self { headers, rows: Vec::new() }
    }

    /// First parsed row becomes the header; short rows are padded with empty cells.
    pub fn from_rows(mut rows: Vec<Vec<String>>) -> Result<Self> {
        if rows.is_empty() {
            return Ok(Self::default());
        }
        let headers = rows.remove(0);
        let width = headers.len();
        for (i, row) in rows.iter_mut().enumerate() {
            if row.len() > width {
                return Err(ScrapeError::Parse(format!(
                    "row {} has {} fields, header has {}",
                    i + 2, row.len(), width
                )));
            }
            row.resize(width, s!());
        }
        Ok(Self { headers, rows })
    }

    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Cell text or "" when the column is absent.
    pub fn cell<'a>(&'a self, row: &'a [String], name: &str) -> &'a str {
        self.column(name)
            .and_then(|ix| row.get(ix))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        debug_assert_eq!(row.len(), self.headers.len());
        self.rows.push(row);
    }

    pub fn rename_column(&mut self, from: &str, to: &str) -> bool {
        match self.column(from) {
            Some(ix) => { self.headers[ix] = s!(to); true }
            None => false,
        }
    }

    /// Append a column, or overwrite it if the name already exists.
    pub fn set_column(&mut self, name: &str, values: Vec<String>) {
        debug_assert_eq!(values.len(), self.rows.len());
        match self.column(name) {
            Some(ix) => {
                for (row, v) in self.rows.iter_mut().zip(values) { row[ix] = v; }
            }
            None => {
                self.headers.push(s!(name));
                for (row, v) in self.rows.iter_mut().zip(values) { row.push(v); }
            }
        }
    }

    /// Move `preferred` columns (those present) to the front in that order;
    /// everything else follows in its original relative order.
    pub fn reorder(&mut self, preferred: &[&str]) {
        let mut order: Vec<usize> = preferred.iter().filter_map(|p| self.column(p)).collect();
        for ix in 0..self.headers.len() {
            if !order.contains(&ix) { order.push(ix); }
        }
        self.headers = order.iter().map(|&ix| self.headers[ix].clone()).collect();
        for row in &mut self.rows {
            *row = order.iter().map(|&ix| take_cell(row, ix)).collect();
        }
    }
}

fn take_cell(row: &mut [String], ix: usize) -> String {
    row.get_mut(ix).map(std::mem::take).unwrap_or_default()
}
