//! Configuration file loading for corpus-pool
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `CORPUS_POOL_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./corpus-pool.toml` or `./.corpus-pool.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/corpus-pool/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    DEFAULT_HISTORY_FILE, FileConfig, FileCorpusConfig, FileDrawConfig, FileHistoryConfig,
    FileOutputConfig, FileOutputFormat,
};
pub use loader::ConfigLoader;
