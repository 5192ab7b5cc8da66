//! Flat-file log storage.
//! The file is opened, fully read or appended, and closed per operation;
//! there is no locking and no state kept between calls.

use crate::errors::AppResult;
use crate::models::entry::Entry;
use crate::utils::path::expand_tilde;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

pub struct LogStore {
    path: PathBuf,
}

impl LogStore {
    pub fn new(path: &str) -> Self {
        Self {
            path: expand_tilde(path),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load and parse every entry in the log.
    /// Blank lines are day separators and are dropped here; a missing file
    /// is an empty log. A malformed line is fatal.
    pub fn read_entries(&self) -> AppResult<Vec<Entry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;

        content
            .lines()
            .filter(|line| !line.is_empty())
            .map(Entry::parse)
            .collect()
    }

    /// Raw last line of the file, used by the day-change check.
    /// A missing or unreadable file yields None and is never an error.
    pub fn last_line(&self) -> Option<String> {
        let content = fs::read_to_string(&self.path).ok()?;
        content.lines().last().map(str::to_owned)
    }

    /// Append a pre-formatted chunk, creating the parent directory first
    /// when absent.
    pub fn append(&self, chunk: &str) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(chunk.as_bytes())?;

        Ok(())
    }
}
