use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::{calculate_stats, print_stats};
use crate::errors::{AppError, AppResult};
use crate::store::LogStore;
use crate::utils::date;
use chrono::NaiveDate;

/// Calculate and print work/slack totals for a date range.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { from, to, period } = cmd {
        let (date_from, date_to) = resolve_bounds(from, to, period)?;

        let store = LogStore::new(&cfg.log_file);
        let entries = store.read_entries()?;

        let stats = calculate_stats(&entries, date_from, date_to);
        print_stats(&stats);
    }

    Ok(())
}

/// Turn the CLI range flags into inclusive (from, to) bounds.
/// `--period` and `--from`/`--to` are mutually exclusive (enforced by
/// clap); with neither, the range is today only.
fn resolve_bounds(
    from: &Option<String>,
    to: &Option<String>,
    period: &Option<String>,
) -> AppResult<(NaiveDate, NaiveDate)> {
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

    let date_from = match from {
        Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?,
        None => date::today(),
    };
    let date_to = match to {
        Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?,
        None => date::today(),
    };

    Ok((date_from, date_to))
}
