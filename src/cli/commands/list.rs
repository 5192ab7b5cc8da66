use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::entry::Entry;
use crate::store::LogStore;
use crate::utils::date;
use ansi_term::Colour;
use chrono::NaiveDate;

/// Print the raw log entries falling inside a period.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period, now } = cmd {
        let (date_from, date_to) = if *now {
            (date::today(), date::today())
        } else {
            resolve_period(period)?
        };

        let store = LogStore::new(&cfg.log_file);
        let entries = store.read_entries()?;

        let in_range: Vec<&Entry> = entries
            .iter()
            .filter(|e| e.date() >= date_from && e.date() <= date_to)
            .collect();

        if in_range.is_empty() {
            println!("No entries from {} to {}", date_from, date_to);
            return Ok(());
        }

        println!("📅 Log entries from {} to {}:\n", date_from, date_to);

        let mut prev_date: Option<NaiveDate> = None;
        for entry in in_range {
            // blank separator between day groups, as in the file itself
            if let Some(prev) = prev_date
                && prev != entry.date()
            {
                println!();
            }
            prev_date = Some(entry.date());

            println!("{}", paint(entry));
        }
    }

    Ok(())
}

fn resolve_period(period: &Option<String>) -> AppResult<(NaiveDate, NaiveDate)> {
    if let Some(p) = period {
        if p.contains(':') {
            let parts: Vec<&str> = p.split(':').collect();
            if parts.len() == 2 {
                return date::range_bounds(parts[0], parts[1]).map_err(AppError::InvalidPeriod);
            }
            return Err(AppError::InvalidPeriod(p.to_string()));
        }

        return date::period_bounds(p).map_err(AppError::InvalidPeriod);
    }

    Ok(date::current_month_bounds())
}

fn paint(entry: &Entry) -> String {
    let line = entry.to_line();

    if entry.kind.is_day_start() {
        Colour::Green.paint(line).to_string()
    } else if entry.kind.is_slack() {
        Colour::Yellow.paint(line).to_string()
    } else {
        line
    }
}
