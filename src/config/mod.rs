//! Configuration for approved repositories and category rules.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fallback display color when the dominant category has no configured rule.
pub const DEFAULT_COLOR: &str = "#94a3b8";

/// Reserved category for paths matching no rule.
pub const FALLBACK_CATEGORY: &str = "code";

/// Configuration errors. All of these are fatal before any segmentation runs.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file does not exist.
    #[error("Configuration file not found: {0:?}")]
    NotFound(PathBuf),

    /// The configuration file could not be read.
    #[error("Failed to read configuration file {path:?}")]
    Read {
        /// Path of the unreadable file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid JSON of the expected shape.
    #[error("Failed to parse configuration file {path:?}")]
    Parse {
        /// Path of the malformed file.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// A repository was requested by name but is not in the approved set.
    #[error("'{0}' is not in approved_repos")]
    UnknownRepo(String),
}

/// One approved repository entry.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RepoEntry {
    /// Repository name, used for session identifiers and `--repo` selection.
    pub name: String,

    /// Path to the local checkout. A leading `~` is expanded to the home
    /// directory.
    pub local_path: String,

    /// Granted permissions. Log acquisition requires `"read_log"`.
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl RepoEntry {
    /// Whether this repository grants log read access.
    pub fn can_read_log(&self) -> bool {
        self.permissions.iter().any(|p| p == "read_log")
    }

    /// Local checkout path with a leading `~` expanded, including a bare
    /// `~` on its own.
    pub fn expanded_path(&self) -> PathBuf {
        if let Some(home) = dirs::home_dir() {
            if self.local_path == "~" {
                return home;
            }
            if let Some(rest) = self.local_path.strip_prefix("~/") {
                return home.join(rest);
            }
        }
        PathBuf::from(&self.local_path)
    }
}

/// One content category rule.
///
/// Rules are an ordered list: classification scans them in configured order
/// and the first category with a matching pattern wins.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CategoryRule {
    /// Category name.
    pub name: String,

    /// Path substrings; a path containing any of them belongs to this
    /// category.
    #[serde(default)]
    pub patterns: Vec<String>,

    /// Display color for sessions dominated by this category.
    pub color: String,
}

/// Top-level devlog configuration, loaded from `devlog-config.json`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DevlogConfig {
    /// Repositories eligible for session generation.
    #[serde(default)]
    pub approved_repos: Vec<RepoEntry>,

    /// Whether approved repositories are processed without per-run
    /// confirmation. Only changes diagnostic wording.
    #[serde(default)]
    pub auto_approve: bool,

    /// Idle gap, in hours, that separates two sessions. Fractional values
    /// are allowed (1.5 is ninety minutes).
    #[serde(default = "default_gap_hours")]
    pub session_gap_hours: f64,

    /// Ordered category rules, first match wins.
    #[serde(default)]
    pub categories: Vec<CategoryRule>,

    /// Default output path for the session dataset, relative to the
    /// working directory.
    #[serde(default = "default_output_path")]
    pub output_path: String,
}

fn default_gap_hours() -> f64 {
    3.0
}

fn default_output_path() -> String {
    "assets/devlog/sessions.json".to_string()
}

impl DevlogConfig {
    /// Load configuration from a JSON file. A missing file is a fatal
    /// configuration error, not a silent default.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Look up an approved repository by name.
    pub fn find_repo(&self, name: &str) -> Result<&RepoEntry, ConfigError> {
        self.approved_repos
            .iter()
            .find(|r| r.name == name)
            .ok_or_else(|| ConfigError::UnknownRepo(name.to_string()))
    }

    /// Session gap as a chrono duration.
    pub fn gap(&self) -> chrono::Duration {
        chrono::Duration::seconds((self.session_gap_hours * 3600.0) as i64)
    }
}
