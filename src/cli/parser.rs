use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for ottracker
/// CLI application to record employee overtime entries per department
#[derive(Parser)]
#[command(
    name = "ottracker",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record employee overtime entries per department and render aggregate reports",
    long_about = None
)]
pub struct Cli {
    /// Override data file path (useful for tests or custom locations)
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
    /// Initialize the data file and configuration
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

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal audit log")]
        print: bool,
    },

    /// Show data file statistics
    Info,

    /// Record one overtime entry for a department
    Add {
        /// Department the entry is filed under
        #[arg(help = "Department: scheduling, occ, training or operations")]
        department: String,

        /// Entry date (YYYY-MM-DD)
        #[arg(long = "date", help = "Entry date (YYYY-MM-DD), defaults to today")]
        date: Option<String>,

        #[arg(long = "id", help = "Employee ID")]
        id: Option<String>,

        #[arg(long = "name", help = "Employee name")]
        name: Option<String>,

        #[arg(long = "designation", help = "Employee designation")]
        designation: Option<String>,

        #[arg(
            long = "status",
            help = "Employee status: active, on-leave or training"
        )]
        status: Option<String>,

        /// Overtime hours, 0.5 granularity suggested
        #[arg(long = "hours", help = "Overtime hours (>= 0)")]
        hours: Option<f64>,

        #[arg(long = "approved-by", help = "Name of the approving manager")]
        approved_by: Option<String>,
    },

    /// List stored overtime entries
    List {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        range: Option<String>,

        #[arg(long = "dept", help = "Show only entries filed under this department")]
        dept: Option<String>,
    },

    /// Render the overtime analysis dashboard
    Report {
        #[arg(long, help = "Filter by year/month/day or a custom range")]
        range: Option<String>,
    },

    /// Export overtime records
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the data file
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },
}
