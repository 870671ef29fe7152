//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for a finished debate
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Every turn as it is posted, then the outcome
    Full,
    /// Only the summariser's verdict
    Summary,
    /// The final session snapshot as JSON
    Json,
}

impl From<OutputFormat> for agora_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => agora_domain::OutputFormat::Full,
            OutputFormat::Summary => agora_domain::OutputFormat::Summary,
            OutputFormat::Json => agora_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for agora
#[derive(Parser, Debug)]
#[command(name = "agora")]
#[command(author, version, about = "Multi-persona LLM debates")]
#[command(long_about = r#"
Agora stages a debate between LLM personas on a proposition.

A host assigns the two debaters opposite positions, moderates the rounds and
calls for closing statements. A fact-checker then reviews the claims and a
summariser delivers the verdict.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./agora.toml        Project-level config
3. ~/.config/agora/config.toml   Global config

Example:
  agora "Remote work improves productivity"
  agora --max-rounds 2 -o summary "Tabs are better than spaces"
  agora --resume 1700000000.000100
  agora --event envelope.json --slack
"#)]
pub struct Cli {
    /// The proposition to debate
    pub proposition: Option<String>,

    /// Maximum number of debate rounds (overrides config)
    #[arg(long, value_name = "N")]
    pub max_rounds: Option<u32>,

    /// Channel the debate is posted to
    #[arg(long, value_name = "CHANNEL", default_value = "console")]
    pub channel: String,

    /// Continue a stored debate by id
    #[arg(long, value_name = "DEBATE_ID", conflicts_with_all = ["proposition", "event"])]
    pub resume: Option<String>,

    /// Handle an inbound chat event envelope (JSON file, `-` for stdin)
    #[arg(long, value_name = "PATH", conflicts_with = "proposition")]
    pub event: Option<PathBuf>,

    /// List the stored debates of --channel and exit
    #[arg(long)]
    pub list: bool,

    /// Delete expired debates from the store and exit
    #[arg(long)]
    pub purge_expired: bool,

    /// Directory of the session store (overrides config)
    #[arg(long, value_name = "DIR")]
    pub store_dir: Option<PathBuf>,

    /// Keep sessions in memory only
    #[arg(long, conflicts_with = "store_dir")]
    pub ephemeral: bool,

    /// Post turns to Slack instead of the console
    #[arg(long)]
    pub slack: bool,

    /// Append turn events to this JSONL file (overrides config)
    #[arg(long, value_name = "PATH")]
    pub conversation_log: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
