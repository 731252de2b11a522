use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for rendered screens.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Styled terminal text
    #[default]
    Term,
    /// The screen projection as JSON
    Json,
    /// An HTML fragment
    Html,
}

#[derive(Parser, Debug)]
#[command(name = "userbook", bin_name = "userbook", version)]
#[command(about = "Keep a small book of users from the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the collection and config.json
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputMode::Term, help_heading = "Options")]
    pub output: OutputMode,

    /// Disable colored output
    #[arg(long, global = true, help_heading = "Options")]
    pub no_color: bool,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

/// Values for the six form fields. Only the given ones are filled in.
#[derive(Args, Debug, Default, Clone)]
pub struct FieldArgs {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub password: Option<String>,

    #[arg(long)]
    pub age: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    /// Card number (16 digits)
    #[arg(long)]
    pub card: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List users
    #[command(alias = "ls", display_order = 1)]
    List,

    /// Show one user's details
    #[command(alias = "v", display_order = 2)]
    View {
        /// Row number as shown by `list`
        number: String,
    },

    /// Add a user
    #[command(alias = "a", display_order = 3)]
    Add {
        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Edit a user, changing only the given fields
    #[command(alias = "e", display_order = 4)]
    Edit {
        /// Row number as shown by `list`
        number: String,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Remove a user
    #[command(alias = "rm", display_order = 5)]
    Remove {
        /// Row number as shown by `list`
        number: String,

        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Start an interactive session
    #[command(display_order = 6)]
    Shell,

    /// Print the location of the stored collection
    #[command(display_order = 7)]
    Path,

    /// Get or set configuration
    #[command(display_order = 8)]
    Config {
        /// Configuration key (storage-key, validation, confirm-remove)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
