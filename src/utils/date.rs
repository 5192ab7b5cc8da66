use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Resolve a period string into inclusive (from, to) date bounds.
/// Accepted forms: YYYY-MM-DD, YYYY-MM, YYYY.
/// Err carries the offending input for the caller to wrap.
pub fn period_bounds(p: &str) -> Result<(NaiveDate, NaiveDate), String> {
    // YYYY-MM-DD
    if let Ok(d) = NaiveDate::parse_from_str(p, "%Y-%m-%d") {
        return Ok((d, d));
    }

    // YYYY-MM
    if let Ok(first) = NaiveDate::parse_from_str(&(p.to_string() + "-01"), "%Y-%m-%d") {
        return Ok((first, last_day_of_month(first.year(), first.month())));
    }

    // YYYY
    if let Ok(year) = p.parse::<i32>()
        && let Some(first) = NaiveDate::from_ymd_opt(year, 1, 1)
    {
        let last = NaiveDate::from_ymd_opt(year, 12, 31).unwrap();
        return Ok((first, last));
    }

    Err(p.to_string())
}

/// Resolve a `start:end` range into bounds spanning both periods.
pub fn range_bounds(start: &str, end: &str) -> Result<(NaiveDate, NaiveDate), String> {
    let (from, _) = period_bounds(start)?;
    let (_, to) = period_bounds(end)?;
    Ok((from, to))
}

pub fn current_month_bounds() -> (NaiveDate, NaiveDate) {
    let today = today();
    let first = NaiveDate::from_ymd_opt(today.year(), today.month(), 1).unwrap();
    (first, last_day_of_month(today.year(), today.month()))
}

fn last_day_of_month(year: i32, month: u32) -> NaiveDate {
    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    next_month.unwrap().pred_opt().unwrap()
}
