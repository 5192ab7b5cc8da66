use crate::errors::AppResult;
use crate::models::entry::{DATE_FORMAT, DATETIME_FORMAT};
use crate::store::LogStore;
use chrono::{Local, NaiveDate, NaiveDateTime};

/// High-level business logic for the `log` and `arrived` commands.
pub struct WriteLogic;

impl WriteLogic {
    /// Append a message with the current local timestamp.
    pub fn append(store: &LogStore, message: &str) -> AppResult<()> {
        let chunk = Self::form_log_message(store, message, Local::now().naive_local());
        store.append(&chunk)
    }

    /// Format `<timestamp>: <message>\n`, prefixed with one blank
    /// separator line when the calendar day changed since the last entry.
    pub fn form_log_message(store: &LogStore, message: &str, now: NaiveDateTime) -> String {
        let line = format!("{}: {}\n", now.format(DATETIME_FORMAT), message);

        if Self::is_another_day(store, now.date()) {
            format!("\n{}", line)
        } else {
            line
        }
    }

    /// True when the last log line carries a different date than `today`.
    /// A missing or empty log file reads as "same day", so the very first
    /// entry gets no separator.
    pub fn is_another_day(store: &LogStore, today: NaiveDate) -> bool {
        match store.last_line() {
            Some(last) => !last.starts_with(&today.format(DATE_FORMAT).to_string()),
            None => false,
        }
    }
}
