use crate::config::Config;
use crate::core::writer::WriteLogic;
use crate::errors::AppResult;
use crate::store::LogStore;
use crate::ui::messages::success;

/// Mark the start of a tracked day.
/// Equivalent to `log arrived`; the entry is classified as a day start
/// and closes no work or slack interval.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = LogStore::new(&cfg.log_file);
    WriteLogic::append(&store, "arrived")?;

    success("Day start recorded");

    Ok(())
}
