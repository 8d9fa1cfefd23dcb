use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use salescomp_observability::{LogFormat, ObservabilityConfig};

#[derive(Debug, Parser)]
#[command(name = "salescomp")]
#[command(about = "Sales commission payouts from order and invoice exports")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Report output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table, env = "SALESCOMP_FORMAT")]
    pub format: OutputFormat,

    /// Log line format (logs go to stderr; filter with RUST_LOG)
    #[arg(long, global = true, value_enum, default_value_t = LogStyle::Pretty, env = "SALESCOMP_LOG_FORMAT")]
    pub log_format: LogStyle,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Rank sales owners by total commission
    #[command(after_help = "\
Examples:
  salescomp commissions --orders orders.csv --invoices invoices.json
  SALESCOMP_WORKERS=4 salescomp commissions --orders orders.csv --invoices invoices.json --format json")]
    Commissions {
        #[command(flatten)]
        orders: OrderSourceArgs,

        /// Invoice document (JSON)
        #[arg(long, env = "SALESCOMP_INVOICES")]
        invoices: PathBuf,

        /// Threads used to distribute orders
        #[arg(long, default_value_t = 1, env = "SALESCOMP_WORKERS")]
        workers: usize,
    },

    /// List every sales owner per company
    CompanyOwners {
        #[command(flatten)]
        orders: OrderSourceArgs,
    },

    /// Count crate types per company
    CrateDistribution {
        #[command(flatten)]
        orders: OrderSourceArgs,
    },

    /// Primary contact name and address per order
    Contacts {
        #[command(flatten)]
        orders: OrderSourceArgs,
    },
}

#[derive(Debug, Args)]
pub struct OrderSourceArgs {
    /// Order table (delimited text with a header row)
    #[arg(long = "orders", env = "SALESCOMP_ORDERS")]
    pub path: PathBuf,

    /// Column delimiter of the order table
    #[arg(long, default_value_t = ';', env = "SALESCOMP_DELIMITER")]
    pub delimiter: char,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogStyle {
    Pretty,
    Json,
}

impl Cli {
    pub fn observability(&self) -> ObservabilityConfig {
        ObservabilityConfig {
            format: match self.log_format {
                LogStyle::Pretty => LogFormat::Pretty,
                LogStyle::Json => LogFormat::Json,
            },
            ..ObservabilityConfig::default()
        }
    }
}
