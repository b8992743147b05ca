//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod corpora;
mod draw;
mod history;
mod output;

pub use corpora::FileCorpusConfig;
pub use draw::FileDrawConfig;
pub use history::{DEFAULT_HISTORY_FILE, FileHistoryConfig};
pub use output::{FileOutputConfig, FileOutputFormat};

use corpus_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Where the selection history is kept
    pub history: FileHistoryConfig,
    /// Draw settings
    pub draw: FileDrawConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Corpora drawn from when none are given on the command line
    pub corpora: Vec<FileCorpusConfig>,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.draw.count == 0 {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::ZeroCount,
                "draw.count is 0, nothing will be drawn",
            ));
        }

        if self
            .history
            .path
            .as_deref()
            .is_some_and(|p| p.trim().is_empty())
        {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::EmptyHistoryPath,
                "history.path cannot be empty",
            ));
        }

        for (index, corpus) in self.corpora.iter().enumerate() {
            if corpus.path.trim().is_empty() {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::EmptyCorpusPath { index },
                    format!("corpora[{}].path cannot be empty", index),
                ));
            }
            if corpus.selectors.iter().any(String::is_empty) {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::EmptySelector { index },
                    format!("corpora[{}].selectors contains an empty selector", index),
                ));
            }
        }

        issues
    }
}
