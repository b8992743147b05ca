//! CLI command definitions

use clap::{Parser, ValueEnum};
use corpus_application::CorpusSpec;
use std::path::PathBuf;

/// Output format for drawn items
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One item per line
    Plain,
    /// JSON array of draws
    Json,
}

impl From<OutputFormat> for corpus_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Plain => Self::Plain,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// CLI arguments for corpus-pool
#[derive(Parser, Debug)]
#[command(name = "corpus-pool")]
#[command(author, version, about = "Draw random items from JSON corpora without repeats")]
#[command(long_about = r#"
corpus-pool draws random items from one or more JSON corpora. An item is not
drawn again until every item of its corpus has been drawn; the history of
draws is kept in a JSON file between runs.

Each CORPUS is a JSON file, optionally followed by '#' and a dot-separated
selector path leading to the array of items inside the document.

Configuration files are loaded from (in priority order):
1. CORPUS_POOL_* environment variables
2. --config <path>                         Explicit config file
3. ./corpus-pool.toml                      Project-level config
4. ~/.config/corpus-pool/config.toml       Global config

Example:
  corpus-pool condiments.json
  corpus-pool -n 3 food.json#data.fruits food.json#data.grains
  corpus-pool --reset condiments
"#)]
pub struct Cli {
    /// Corpora to draw from (`path` or `path#selector.selector`)
    #[arg(value_name = "CORPUS")]
    pub corpora: Vec<CorpusSpec>,

    /// Number of items to draw
    #[arg(short = 'n', long, value_name = "N")]
    pub count: Option<usize>,

    /// Path to the history file
    #[arg(long, value_name = "PATH")]
    pub history: Option<PathBuf>,

    /// Seed the random number generator for reproducible draws
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Draw without saving the history
    #[arg(long)]
    pub dry_run: bool,

    /// Remove the named domains from the history and exit
    #[arg(long, value_name = "DOMAIN", num_args = 1.., conflicts_with = "reset_all")]
    pub reset: Vec<String>,

    /// Remove every domain from the history and exit
    #[arg(long)]
    pub reset_all: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Prefix each item with the corpus it came from
    #[arg(long)]
    pub show_corpus: bool,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only report errors
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

impl Cli {
    /// Whether this invocation resets history instead of drawing
    pub fn is_reset(&self) -> bool {
        self.reset_all || !self.reset.is_empty()
    }
}
