use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rigtimelog
/// CLI application to keep drilling-rig daily time logs with SQLite
#[derive(Parser)]
#[command(
    name = "rigtimelog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Drilling-rig daily time log: activity durations, main/sub codes and NPT, stored in SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Fields shared by `add` and `edit`.
#[derive(Args, Debug, Clone, Default)]
pub struct EntryFields {
    /// Start time of the activity (HH:MM or HH:MM:SS)
    #[arg(long = "from")]
    pub from: Option<String>,

    /// End time of the activity (HH:MM or HH:MM:SS); earlier than --from means past midnight
    #[arg(long = "to")]
    pub to: Option<String>,

    /// Main activity code (short code, or 'none' to clear)
    #[arg(long = "main")]
    pub main: Option<String>,

    /// Sub activity code, among the sub codes of the entry's main code
    #[arg(long = "sub")]
    pub sub: Option<String>,

    /// Free-text description of the activity
    #[arg(long = "desc")]
    pub desc: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Show the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage main/sub activity codes
    Code {
        #[command(subcommand)]
        action: CodeAction,
    },

    /// Append a time-log line to a daily report
    Add {
        /// Well name ('-' for the configured default well)
        well: String,

        /// Report date (YYYY-MM-DD, 'today' or 'yesterday')
        date: String,

        #[command(flatten)]
        fields: EntryFields,

        #[arg(long = "npt", help = "Mark the activity as non-productive time")]
        npt: bool,
    },

    /// Edit one time-log line of a daily report
    Edit {
        /// Well name ('-' for the configured default well)
        well: String,

        /// Report date (YYYY-MM-DD, 'today' or 'yesterday')
        date: String,

        #[arg(long = "line", help = "Line number to edit (1-based)")]
        line: usize,

        #[command(flatten)]
        fields: EntryFields,

        #[arg(long = "clear-sub", conflicts_with = "sub", help = "Remove the sub code")]
        clear_sub: bool,

        #[arg(long = "npt", conflicts_with = "no_npt", help = "Mark as non-productive time")]
        npt: bool,

        #[arg(long = "no-npt", help = "Mark as productive time")]
        no_npt: bool,
    },

    /// Delete time-log lines of a daily report
    Del {
        /// Well name ('-' for the configured default well)
        well: String,

        /// Report date (YYYY-MM-DD, 'today' or 'yesterday')
        date: String,

        #[arg(long = "line", help = "Line to delete (default: every line)")]
        line: Option<usize>,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Show a daily report
    List {
        /// Well name ('-' for the configured default well)
        well: String,

        /// Report date (YYYY-MM-DD, 'today' or 'yesterday')
        date: String,

        #[arg(long = "json", help = "Print the report as JSON")]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum CodeAction {
    /// Add a main code
    AddMain { code: String, name: String },

    /// Add a sub code under an existing main code
    AddSub {
        main: String,
        code: String,
        name: String,
    },

    /// List all main codes with their sub codes
    List,
}
