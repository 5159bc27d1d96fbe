use crate::core::query::SortKey;
use crate::export::ExportFormat;
use clap::{Parser, Subcommand, builder::NonEmptyStringValueParser};

/// Command-line interface definition for rActivities
/// CLI application to track portfolio activities with SQLite
#[derive(Parser)]
#[command(
    name = "ractivities",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple portfolio activity tracker: log activities, check hour quotas and query the list",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Read activities from a JSON data file instead of the local store
    /// (read-only mode)
    #[arg(global = true, long = "data")]
    pub data: Option<String>,

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
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Add a new activity
    Add {
        /// Title of the activity
        #[arg(value_parser = NonEmptyStringValueParser::new())]
        title: String,

        /// Theme bucket (e.g. Security, Networks, "Electronics/IoT")
        #[arg(long, value_parser = NonEmptyStringValueParser::new())]
        theme: String,

        /// Activity kind (Hackathon, Conference, Other, ...)
        #[arg(long = "type", default_value = "Other")]
        kind: String,

        /// Credited hours (1-10)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=10))]
        hours: u32,

        /// Date of the activity (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<String>,

        /// Status: completed, pending or draft (default from config)
        #[arg(long)]
        status: Option<String>,

        /// Evidence description (certificate, photos, ...)
        #[arg(long)]
        proof: Option<String>,

        /// Attached evidence file name
        #[arg(long = "proof-file")]
        proof_file: Option<String>,

        /// Short description
        #[arg(long = "desc")]
        description: Option<String>,

        /// Reflective write-up
        #[arg(long)]
        reflection: Option<String>,

        /// Skill tags, comma separated
        #[arg(long)]
        skills: Option<String>,
    },

    /// Edit an existing activity (fields left out stay unchanged)
    Edit {
        /// Id of the activity to edit
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        theme: Option<String>,

        #[arg(long = "type")]
        kind: Option<String>,

        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=10))]
        hours: Option<u32>,

        #[arg(long)]
        date: Option<String>,

        #[arg(long)]
        status: Option<String>,

        #[arg(long)]
        proof: Option<String>,

        #[arg(long = "proof-file")]
        proof_file: Option<String>,

        #[arg(long = "desc")]
        description: Option<String>,

        #[arg(long)]
        reflection: Option<String>,

        #[arg(long)]
        skills: Option<String>,
    },

    /// Delete an activity by id
    Del {
        /// Id of the activity to delete
        id: String,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// List activities (filter, search, sort)
    List {
        #[arg(long, help = "Filter by theme (exact match)")]
        theme: Option<String>,

        #[arg(long, help = "Filter by status: completed, pending or draft")]
        status: Option<String>,

        #[arg(long, help = "Case-insensitive search in title, description, theme and skills")]
        search: Option<String>,

        #[arg(long, value_enum, default_value = "date-desc")]
        sort: SortKey,

        #[arg(long, help = "Show full cards (proof, skills, reflection)")]
        details: bool,
    },

    /// Show portfolio statistics
    Stats,

    /// Check the portfolio against the quotas (60h, 6 themes, 6 activities)
    Validate,

    /// Suggest missing themes and activity ideas
    Suggest,

    /// Export the activity list
    Export {
        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite the output file without asking")]
        force: bool,
    },

    /// Import an activity list from a JSON file (replaces the stored list)
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Show or toggle the admin presentation mode
    Admin {
        #[arg(long, conflicts_with = "disable")]
        enable: bool,

        #[arg(long)]
        disable: bool,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Watch the JSON data file and report changes
    Watch {
        /// Poll interval in seconds (default from config)
        #[arg(long)]
        interval: Option<u64>,

        /// Stop after this many seconds (default: run until interrupted)
        #[arg(long)]
        duration: Option<u64>,
    },
}
