//! Data model and dataset serialization.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Line statistics for one file touched by a commit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileDelta {
    /// Number of lines added in this file.
    pub insertions: u64,
    /// Number of lines removed in this file.
    pub deletions: u64,
    /// Path to the file relative to repository root.
    pub path: String,
}

/// One commit as read from the repository log.
///
/// Immutable input unit of the engine. Within one repository's sequence,
/// timestamps are expected to be non-decreasing (the acquisition step walks
/// the log oldest-first).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitRecord {
    /// Full SHA-1 hash of the commit.
    pub hash: String,
    /// Author timestamp in ISO format with its original UTC offset.
    pub timestamp: DateTime<FixedOffset>,
    /// Commit subject line.
    pub message: String,
    /// Commit author name.
    pub author: String,
    /// Per-file line statistics, in the order the diff reports them.
    pub files: Vec<FileDelta>,
}

impl CommitRecord {
    /// Total lines added across all files in this commit.
    pub fn insertions(&self) -> u64 {
        self.files.iter().map(|f| f.insertions).sum()
    }

    /// Total lines removed across all files in this commit.
    pub fn deletions(&self) -> u64 {
        self.files.iter().map(|f| f.deletions).sum()
    }
}

/// One work session: a maximal run of commits with no inter-commit gap
/// exceeding the configured threshold.
///
/// Built exactly once by the aggregator and never mutated afterwards. Field
/// names and order match the JSON contract of the visualization layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Deterministic identifier: two-character repo prefix plus a 1-based
    /// zero-padded index within the repository (e.g. `ke007`).
    pub id: String,
    /// Repository name from configuration.
    pub repo: String,
    /// Timestamp of the first commit in the session.
    pub start: DateTime<FixedOffset>,
    /// Timestamp of the last commit in the session.
    pub end: DateTime<FixedOffset>,
    /// Whole-minute duration, floored, never below 1.
    pub duration_min: i64,
    /// Number of commits in the session.
    pub commit_count: usize,
    /// Deduplicated, lexicographically sorted union of touched paths.
    pub files_changed: Vec<String>,
    /// Total lines added across the session.
    pub insertions: u64,
    /// Total lines removed across the session.
    pub deletions: u64,
    /// Most frequent content category among touched files.
    pub dominant_category: String,
    /// Display color for the dominant category.
    pub color: String,
    /// Commit subjects in original order.
    pub messages: Vec<String>,
    /// Composite intensity score in `[0, 1]`, 3 decimal places.
    pub intensity: f64,
    /// Visual texture reference, populated by a downstream process.
    /// Always `null` in the output of this tool.
    pub texture_url: Option<String>,
}

/// Render the session dataset as a pretty-printed JSON array.
pub fn to_json(sessions: &[Session]) -> Result<String> {
    serde_json::to_string_pretty(sessions).context("Failed to serialize session dataset")
}

/// Write the session dataset to a file, creating parent directories.
pub fn write_dataset<P: AsRef<Path>>(sessions: &[Session], path: P) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }

    let content = to_json(sessions)?;
    fs::write(path, content)
        .with_context(|| format!("Failed to write dataset: {}", path.display()))?;

    Ok(())
}
