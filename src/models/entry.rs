use super::entry_kind::EntryKind;
use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// On-disk date prefix of a log line ("2024-01-01")
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// On-disk datetime prefix of a log line ("2024-01-01 09:00")
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// One timestamped record of the log file.
///
/// The textual layout `YYYY-MM-DD HH:MM: <message>` lives only in
/// `parse` and `to_line`; everything else works on the typed fields.
/// The kind is attached once here instead of being re-derived from the
/// message text on every pass.
#[derive(Debug, Clone, Serialize)]
pub struct Entry {
    pub timestamp: NaiveDateTime, // ⇔ "YYYY-MM-DD HH:MM" prefix
    pub message: String,          // ⇔ text after ": "
    pub kind: EntryKind,          // derived from message at load time
}

impl Entry {
    pub fn new(timestamp: NaiveDateTime, message: &str) -> Self {
        Self {
            timestamp,
            kind: EntryKind::classify(message),
            message: message.to_string(),
        }
    }

    /// Parse a single non-blank log line.
    /// Any line that does not carry a valid datetime prefix is fatal.
    pub fn parse(line: &str) -> AppResult<Self> {
        let trimmed = line.trim_end_matches(['\n', '\r']);

        let (stamp, message) = trimmed
            .split_once(": ")
            .ok_or_else(|| AppError::InvalidLine(trimmed.to_string()))?;

        let timestamp = NaiveDateTime::parse_from_str(stamp, DATETIME_FORMAT)
            .map_err(|_| AppError::InvalidLine(trimmed.to_string()))?;

        Ok(Self::new(timestamp, message))
    }

    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    pub fn date_str(&self) -> String {
        self.timestamp.format(DATE_FORMAT).to_string()
    }

    /// Serialize back to the on-disk line format (without trailing newline).
    pub fn to_line(&self) -> String {
        format!("{}: {}", self.timestamp.format(DATETIME_FORMAT), self.message)
    }
}
