// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::config::consts::CSV_SEP;
use crate::csv::{parse_rows, write_row};
use crate::error::{Result, ScrapeError};
use crate::store::DataSet;

/// Read a UTF-8 CSV with a header row.
/// A missing file is reported as `MissingInputFile`, not a bare IO error.
pub fn read_dataset(path: &Path) -> Result<DataSet> {
    if !path.exists() {
        return Err(ScrapeError::MissingInputFile(path.to_path_buf()));
    }
    let text = fs::read_to_string(path)?;
    DataSet::from_rows(parse_rows(&text, CSV_SEP))
}

/// Create/truncate `path` and write header + rows. Parent directories are created.
/// Returns the path written to.
pub fn write_dataset(path: &Path, data: &DataSet) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    write_all(path, data).map_err(|e| ScrapeError::write(path, e))?;
    Ok(path.to_path_buf())
}

fn write_all(path: &Path, data: &DataSet) -> std::io::Result<()> {
    let file = File::create(path)?; // truncate/overwrite
    let mut out = BufWriter::new(file);
    write_row(&mut out, &data.headers, CSV_SEP)?;
    for row in &data.rows {
        write_row(&mut out, row, CSV_SEP)?;
    }
    out.flush()
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(ScrapeError::write(
            dir,
            std::io::Error::new(std::io::ErrorKind::AlreadyExists, "path exists but is not a directory"),
        ));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| ScrapeError::write(dir, e))?;
    }
    Ok(())
}
