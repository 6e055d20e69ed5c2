//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for one-shot answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Question and answer, colored
    Text,
    /// JSON object with `question` and `answer`
    Json,
}

/// CLI arguments for covenant
#[derive(Parser, Debug)]
#[command(name = "covenant")]
#[command(author, version, about = "Ask questions about your agreements, answered from their text")]
#[command(long_about = r#"
Covenant answers questions about stored legal agreements. Answers are grounded
in the agreement's own text; when the text is silent, the assistant says so.

Configuration files are loaded from (in priority order):
1. COVENANT_* environment variables (e.g. COVENANT_BACKEND__API_KEY)
2. --config <path>     Explicit config file
3. ./covenant.toml     Project-level config
4. ~/.config/covenant/config.toml   Global config

Example:
  covenant serve --log-dir ./logs
  covenant ask --agreement 665f1c --user alice "What is the notice period?"
  covenant chat --agreement 665f1c --user alice
  covenant issue-token --user alice
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP API
    Serve {
        /// Listen address (overrides server.bind)
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,

        /// Also write logs to daily files in this directory
        #[arg(long, value_name = "DIR")]
        log_dir: Option<PathBuf>,
    },

    /// Ask a single question
    Ask {
        /// Agreement to ask about
        #[arg(short, long, value_name = "ID")]
        agreement: String,

        /// Identity the question is asked as
        #[arg(short, long, value_name = "USER")]
        user: String,

        /// The question
        question: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        output: OutputFormat,

        /// Suppress progress indicators
        #[arg(short, long)]
        quiet: bool,
    },

    /// Start an interactive conversation about one agreement
    Chat {
        /// Agreement to talk about
        #[arg(short, long, value_name = "ID")]
        agreement: String,

        /// Identity the questions are asked as
        #[arg(short, long, value_name = "USER")]
        user: String,

        /// Suppress progress indicators
        #[arg(short, long)]
        quiet: bool,

        /// Do not read or write line history
        #[arg(long)]
        no_history: bool,
    },

    /// Print a signed API token for a user
    IssueToken {
        /// User id carried by the token
        #[arg(short, long, value_name = "USER")]
        user: String,

        /// Validity in hours
        #[arg(long, default_value_t = 24)]
        ttl_hours: i64,
    },
}
