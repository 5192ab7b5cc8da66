use clap::{Parser, Subcommand};

/// Command-line interface definition for Timeflow
/// CLI application to track working time in a plain text log
#[derive(Parser)]
#[command(
    name = "timeflow",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple time logging CLI: append timestamped entries to a plain text log and calculate work/slack stats",
    long_about = None
)]
pub struct Cli {
    /// Override log file path (useful for tests or a custom log)
    #[arg(global = true, long = "file")]
    pub file: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and the log file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Append a timestamped message to the log
    Log {
        /// Message text; end it with `**` to mark the time since the
        /// previous entry as slack
        #[arg(required = true, num_args = 1.., value_name = "MESSAGE")]
        message: Vec<String>,
    },

    /// Mark the start of a tracked day (shorthand for `log arrived`)
    Arrived,

    /// Calculate work and slack totals for a date range
    Stats {
        /// Start date (YYYY-MM-DD); defaults to today
        #[arg(long = "from", value_name = "DATE")]
        from: Option<String>,

        /// End date (YYYY-MM-DD); defaults to today
        #[arg(long = "to", value_name = "DATE")]
        to: Option<String>,

        #[arg(
            long,
            short,
            help = "Filter by year/month/day or a custom range",
            conflicts_with_all = ["from", "to"]
        )]
        period: Option<String>,
    },

    /// List log entries for a period
    List {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,

        #[arg(long = "today", help = "Show only today's entries")]
        now: bool,
    },
}
