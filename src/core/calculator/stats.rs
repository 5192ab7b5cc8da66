//! Interval accumulation between consecutive log entries.

use super::range::{date_begins, date_ends};
use crate::models::entry::Entry;
use crate::utils::time::format_duration;
use chrono::NaiveDate;

/// Individual interval durations in seconds, one bucket per category.
#[derive(Debug, Default, Clone)]
pub struct Stats {
    pub work: Vec<i64>,
    pub slack: Vec<i64>,
}

impl Stats {
    pub fn total_work(&self) -> i64 {
        self.work.iter().sum()
    }

    pub fn total_slack(&self) -> i64 {
        self.slack.iter().sum()
    }
}

/// Accumulate work/slack intervals for entries in the inclusive date range.
///
/// Each entry in range is paired with the *next* entry of the full
/// sequence, and the interval takes its category from that next entry's
/// kind: the interval ending at a Slack entry is slack, the one ending
/// at a DayStart entry is skipped entirely. The attribution looks
/// backwards on purpose; reclassifying by the current entry instead
/// would change every reported total.
pub fn calculate_stats(entries: &[Entry], date_from: NaiveDate, date_to: NaiveDate) -> Stats {
    let mut stats = Stats::default();

    let Some(line_begins) = date_begins(entries, date_from) else {
        return stats;
    };
    let Some(line_ends) = date_ends(entries, date_to) else {
        return stats;
    };
    if line_ends < line_begins {
        return stats;
    }

    for i in line_begins..=line_ends {
        // the last line in range has no successor to pair with
        if i + 1 > line_ends {
            break;
        }

        let next = &entries[i + 1];

        if next.kind.is_day_start() {
            continue;
        }

        let elapsed = (next.timestamp - entries[i].timestamp).num_seconds();

        if next.kind.is_slack() {
            stats.slack.push(elapsed);
        } else {
            stats.work.push(elapsed);
        }
    }

    stats
}

/// Print the two fixed-format total lines.
pub fn print_stats(stats: &Stats) {
    println!("Work: {}", format_duration(stats.total_work()));
    println!("Slack: {}", format_duration(stats.total_slack()));
}
