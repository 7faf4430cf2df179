use crate::export::ExportFormat;
use crate::models::task_kind::TaskKind;
use clap::{Parser, Subcommand};

/// Command-line interface definition for annostat
#[derive(Parser)]
#[command(
    name = "annostat",
    version = env!("CARGO_PKG_VERSION"),
    about = "Annotation campaign tracking: annotator progress, busy time and reliability",
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

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "path", help = "Print the configuration file path")]
        path: bool,
    },

    /// Import campaign data from JSONL files
    Import {
        /// Campaign name
        #[arg(long)]
        campaign: String,

        /// Task kind of the campaign
        #[arg(long, value_enum)]
        kind: TaskKind,

        /// Semicolon-separated campaign option tokens (e.g. "mqm;esa")
        #[arg(long, default_value = "")]
        options: String,

        /// JSONL file with one annotation record per line
        #[arg(long)]
        records: Option<String>,

        /// JSONL file with annotator accounts (username, is_active, is_staff)
        #[arg(long)]
        annotators: Option<String>,

        /// JSONL file with assigned item totals (username, total_items)
        #[arg(long)]
        agendas: Option<String>,
    },

    /// Print the status table for one or more comma-separated campaigns
    Status {
        /// Campaign name, or comma-separated list of names
        campaign: String,

        /// Sort column index (0=username, 1=active, 2=annotations,
        /// 3=first activity, 4=last activity, 5=busy time, 6=reliability)
        #[arg(long)]
        sort: Option<String>,

        /// Include the reliability column (privileged view)
        #[arg(long)]
        staff: bool,
    },

    /// Export status rows to CSV or JSONL
    Export {
        /// Campaign name, or comma-separated list of names
        campaign: String,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Absolute path of the output file
        #[arg(long)]
        out: String,

        /// Sort column index, same addressing as `status --sort`
        #[arg(long)]
        sort: Option<String>,

        /// Include the reliability column (privileged view)
        #[arg(long)]
        staff: bool,

        /// Restrict to shadow accounts created by task agenda resets
        #[arg(long = "reset-accounts-only")]
        reset_accounts_only: bool,

        /// Overwrite the output file if it exists
        #[arg(long)]
        force: bool,
    },
}
