use clap::{Parser, Subcommand};

/// Command-line interface definition for cronos
/// Named stopwatches stored in SQLite
#[derive(Parser)]
#[command(
    name = "cronos",
    version = env!("CARGO_PKG_VERSION"),
    about = "Create, run, edit and delete named stopwatches stored in SQLite",
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

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

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

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Create a new crono (interactive stopwatch unless --elapsed is given)
    Add {
        #[arg(long, short, help = "Title of the crono")]
        title: Option<String>,

        #[arg(
            long,
            short,
            help = "Save directly with this elapsed time (HH:MM:SS) instead of running the stopwatch"
        )]
        elapsed: Option<String>,
    },

    /// Edit a crono (interactive stopwatch unless --title/--elapsed are given)
    Edit {
        /// Crono id
        id: i64,

        #[arg(long, short, help = "New title")]
        title: Option<String>,

        #[arg(long, short, help = "New elapsed time (HH:MM:SS)")]
        elapsed: Option<String>,
    },

    /// List saved cronos
    List {
        #[arg(long = "json", help = "Print the cronos as a JSON array")]
        json: bool,
    },

    /// Delete a crono by id
    Del {
        /// Crono id
        id: i64,

        #[arg(long, short = 'f', help = "Do not ask for confirmation")]
        force: bool,
    },
}
