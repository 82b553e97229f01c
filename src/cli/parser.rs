use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for dayclock
/// CLI application to track daily attendance with SQLite or JSON storage
#[derive(Parser)]
#[command(
    name = "dayclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "A daily attendance tracker: clock in/out, breaks, worked and break time",
    long_about = None
)]
pub struct Cli {
    /// Override database path (`.json` selects the JSON store)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Only print warnings, errors and requested views
    #[arg(global = true, long, short = 'q')]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When a live action happens. Both default to "now".
#[derive(Args, Debug, Clone, Default)]
pub struct Stamp {
    /// Time of the action (HH:MM), default: current time
    #[arg(long = "at", value_name = "HH:MM")]
    pub at: Option<String>,

    /// Day of the action (YYYY-MM-DD), default: today
    #[arg(long = "date", value_name = "YYYY-MM-DD")]
    pub date: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Clock in
    In(Stamp),

    /// Clock out (closes a running break)
    Out(Stamp),

    /// Start or end a break
    Break {
        #[command(subcommand)]
        action: BreakAction,
    },

    /// Edit the record of any date
    Edit {
        /// Date of the record (YYYY-MM-DD)
        date: String,

        #[arg(long = "in", value_name = "HH:MM", help = "Clock-in time")]
        clock_in: Option<String>,

        #[arg(long = "out", value_name = "HH:MM", help = "Clock-out time")]
        clock_out: Option<String>,

        #[arg(long = "clear-in", conflicts_with = "clock_in", help = "Remove the clock-in time")]
        clear_in: bool,

        #[arg(long = "clear-out", conflicts_with = "clock_out", help = "Remove the clock-out time")]
        clear_out: bool,

        /// Replace all breaks, e.g. "12:00-13:00,15:00-15:10" ("HH:MM-" = still running)
        #[arg(long = "breaks", value_name = "LIST")]
        breaks: Option<String>,

        #[arg(long = "clear-breaks", conflicts_with = "breaks", help = "Remove all breaks")]
        clear_breaks: bool,
    },

    /// Show one day (default: today)
    Show {
        /// Date to show (YYYY-MM-DD)
        date: Option<String>,
    },

    /// List recorded days
    List {
        #[arg(
            long,
            short,
            help = "YYYY, YYYY-MM, YYYY-MM-DD, a FROM:TO range, or 'all' (default: current month)"
        )]
        period: Option<String>,

        #[arg(long = "today", conflicts_with = "period", help = "Show only today's record")]
        today: bool,
    },

    /// Manage the configuration file (view, check, migrate or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their defaults")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the SQLite database (migrations, integrity checks, etc.)
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
}

#[derive(Subcommand)]
pub enum BreakAction {
    /// Start a break
    Start(Stamp),
    /// End the running break
    End(Stamp),
}
