use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for offerdesk
/// CLI application for the local offer-letter workflow over SQLite
#[derive(Parser)]
#[command(
    name = "offerdesk",
    version = env!("CARGO_PKG_VERSION"),
    about = "Manage employee records, capture signatures and export signed offer letters",
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
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Sign in with an employee id
    Login {
        /// Employee ID to sign in with
        employee_id: String,

        /// Keep me signed in (survives across sessions)
        #[arg(long)]
        keep: bool,
    },

    /// Sign out and forget the stored employee id
    Logout,

    /// Create or update an employee record
    Add {
        /// Existing id to update; omitted for a new record
        #[arg(long)]
        id: Option<String>,

        #[arg(long)]
        name: String,

        #[arg(long)]
        position: String,

        /// Start date (YYYY-MM-DD)
        #[arg(long = "start-date")]
        start_date: String,

        #[arg(long)]
        location: String,

        /// Annual salary, non-negative
        #[arg(long, allow_negative_numbers = true)]
        salary: i64,

        #[arg(long)]
        benefits: String,
    },

    /// List employee records
    List {
        #[arg(long, help = "List generated offers instead of employees")]
        offers: bool,
    },

    /// Delete an employee record by id
    Del { id: String },

    /// Generate (or regenerate) the offer for an employee
    Generate {
        /// Employee id; defaults to the signed-in session
        employee_id: Option<String>,
    },

    /// Accept a generated offer
    Accept {
        /// Employee id; defaults to the signed-in session
        employee_id: Option<String>,

        /// Confirm agreement with the terms and conditions
        #[arg(long = "agree-terms")]
        agree_terms: bool,
    },

    /// Export the accepted, signed offer letter as a PDF
    Download {
        /// Employee id; defaults to the signed-in session
        employee_id: Option<String>,

        /// Signature image file to embed (png, jpg, gif, webp or bmp)
        #[arg(long = "sign-image", conflicts_with = "sign_strokes")]
        sign_image: Option<String>,

        /// Recorded pointer trace (JSON) to rasterize as the signature
        #[arg(long = "sign-strokes")]
        sign_strokes: Option<String>,

        /// Output file; defaults to <Company>_Offer_Letter_<id>.pdf
        #[arg(long, value_name = "FILE")]
        out: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Export the employee roster
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Manage the database (integrity checks, maintenance)
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,

        #[arg(long = "reset", help = "Delete every employee and offer record")]
        reset: bool,
    },
}
