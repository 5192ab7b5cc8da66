use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - an empty log file (prod or test mode)
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("⚙️  Initializing timeflow…");

    if let Some(custom) = &cli.file {
        Config::init_all(Some(custom.clone()), cli.test)?;
    } else {
        Config::init_all(None, cli.test)?;
    }

    let path = Config::config_file();
    let mut cfg = Config::load();
    if let Some(custom) = &cli.file {
        cfg.log_file = custom.clone();
    }

    println!("📄 Config file : {}", path.display());
    println!("🗒️  Log file    : {}", &cfg.log_file);
    println!("🎉 Timeflow initialization completed!");

    Ok(())
}
