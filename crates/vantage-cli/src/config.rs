//! CLI configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;
use vantage_portfolio::PortfolioConfig;

use crate::error::{CliError, CliResult};

/// Built-in configuration used when no file is given.
pub const DEFAULT_CONFIG: &str = include_str!("../config/default.toml");

/// Data file locations for the file-based collaborators.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataConfig {
    /// Directory of `<ticker>.csv` daily bar files.
    pub bars_dir: Option<PathBuf>,

    /// JSON news feed.
    pub news_file: Option<PathBuf>,

    /// Benchmark sessions CSV.
    pub benchmark_file: Option<PathBuf>,
}

impl DataConfig {
    /// Resolves relative paths against `base`.
    fn resolve(&mut self, base: &Path) {
        for path in [&mut self.bars_dir, &mut self.news_file, &mut self.benchmark_file]
            .into_iter()
            .flatten()
        {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Portfolio and sector table.
    #[serde(default)]
    pub portfolio: PortfolioConfig,

    /// Data sources.
    #[serde(default)]
    pub data: DataConfig,
}

impl CliConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> CliResult<Self> {
        toml::from_str(content).map_err(|e| CliError::Config(e.to_string()))
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml(&content)?;

        let base = path.parent().unwrap_or_else(|| Path::new("."));
        config.data.resolve(base);
        Ok(config)
    }

    /// Load the given file, or the built-in configuration.
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => {
                debug!(path = %path.display(), "loading configuration");
                Self::from_file(path)
            }
            None => Self::from_toml(DEFAULT_CONFIG),
        }
    }
}
