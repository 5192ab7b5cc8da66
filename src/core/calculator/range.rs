//! Date-range search over the ordered entry sequence.
//! Entries are assumed monotonically non-decreasing in timestamp; the
//! invariant is never enforced, only relied upon.

use crate::models::entry::Entry;
use chrono::NaiveDate;

/// Index of the first entry with date >= `target` (forward scan), or of
/// the last entry with date <= `target` (reverse scan, index reported in
/// original order). None when no entry satisfies the predicate.
pub fn find_date_line(entries: &[Entry], target: NaiveDate, reverse: bool) -> Option<usize> {
    if reverse {
        entries.iter().rposition(|e| e.date() <= target)
    } else {
        entries.iter().position(|e| e.date() >= target)
    }
}

/// First entry index covered by `date`.
pub fn date_begins(entries: &[Entry], date: NaiveDate) -> Option<usize> {
    find_date_line(entries, date, false)
}

/// Last entry index covered by `date`.
pub fn date_ends(entries: &[Entry], date: NaiveDate) -> Option<usize> {
    find_date_line(entries, date, true)
}
