use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::writer::WriteLogic;
use crate::errors::AppResult;
use crate::store::LogStore;
use crate::ui::messages::success;

/// Append a timestamped message to the log file.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { message } = cmd {
        let text = message.join(" ");

        let store = LogStore::new(&cfg.log_file);
        WriteLogic::append(&store, &text)?;

        success(format!("Logged: {}", text));
    }

    Ok(())
}
