use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::linter::formatter;

#[derive(Parser)]
#[command(name = "cfn-lint-bridge")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Run cfn-lint on CloudFormation templates and report editor diagnostics")]
#[command(long_about = "Runs the external cfn-lint binary on CloudFormation templates, maps its JSON output to 0-based editor diagnostics, and prints them. Settings are read from the [cfnlint] table of .cfn-lint-bridge.toml in the project root or the home directory.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Lint CloudFormation templates with cfn-lint
    Lint {
        /// Template files to lint
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,

        /// Directory cfn-lint runs from (default: current directory)
        #[arg(long, value_name = "DIR")]
        project_root: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "stylish")]
        format: OutputFormat,

        /// Lint files even when they do not look like templates
        #[arg(long)]
        force: bool,
    },

    /// Report whether a file looks like a CloudFormation template
    Detect {
        /// File to inspect
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Print the cfn-lint command line that would be executed for a file
    Args {
        /// Template file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Directory cfn-lint runs from (default: current directory)
        #[arg(long, value_name = "DIR")]
        project_root: Option<PathBuf>,
    },

    /// Check that the configured cfn-lint can be started
    Doctor {
        /// Directory used to discover configuration (default: current directory)
        #[arg(long, value_name = "DIR")]
        project_root: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Stylish,
    Json,
    Compact,
}

impl From<OutputFormat> for formatter::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Stylish => Self::Stylish,
            OutputFormat::Json => Self::Json,
            OutputFormat::Compact => Self::Compact,
        }
    }
}

impl Cli {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let level = match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };

        env_logger::Builder::from_default_env()
            .filter_level(level)
            .init();
    }
}
