//! Generate command — runs the full pipeline and writes sessions.json.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use tracing::{info, warn};

use crate::config::{DevlogConfig, RepoEntry};
use crate::data::{self, Session};
use crate::engine;
use crate::git::collect_history;

/// Generate command options.
#[derive(Parser)]
pub struct GenerateCommand {
    /// Restrict to one approved repository by name.
    #[arg(long, value_name = "NAME")]
    pub repo: Option<String>,

    /// Only include commits on or after this date (YYYY-MM-DD).
    #[arg(long, value_name = "DATE")]
    pub since: Option<NaiveDate>,

    /// Print the dataset to stdout instead of writing it.
    #[arg(long)]
    pub dry_run: bool,

    /// Override the configured output path.
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Path to the devlog configuration file.
    #[arg(long, value_name = "PATH", default_value = "devlog-config.json")]
    pub config: PathBuf,
}

impl GenerateCommand {
    /// Executes the generate command.
    pub fn execute(self) -> Result<()> {
        let config = DevlogConfig::load(&self.config).context("Failed to load configuration")?;

        // An unknown --repo name is a usage error; everything below it only
        // skips.
        let targets: Vec<&RepoEntry> = match &self.repo {
            Some(name) => vec![config.find_repo(name)?],
            None => config.approved_repos.iter().collect(),
        };

        let mut per_repo: Vec<Vec<Session>> = Vec::new();
        for repo in targets {
            if let Some(sessions) = process_repo(repo, &config, self.since) {
                per_repo.push(sessions);
            }
        }

        let sessions = engine::merge(per_repo);
        let json = data::to_json(&sessions)?;

        if self.dry_run {
            println!("{json}");
            return Ok(());
        }

        let output = self
            .output
            .unwrap_or_else(|| PathBuf::from(&config.output_path));
        data::write_dataset(&sessions, &output)?;
        info!("{} sessions -> {}", sessions.len(), output.display());

        Ok(())
    }
}

/// Run acquisition, segmentation and aggregation for one repository.
///
/// All per-repository failures (missing checkout, no permission, empty
/// history) are reported and absorbed here so one bad repository never
/// aborts the run.
fn process_repo(
    repo: &RepoEntry,
    config: &DevlogConfig,
    since: Option<NaiveDate>,
) -> Option<Vec<Session>> {
    if config.auto_approve {
        info!("auto-approved: {}", repo.name);
    } else {
        warn!("{} is approved but auto_approve=false", repo.name);
    }

    if !repo.can_read_log() {
        warn!("{}: no read_log permission, skipping", repo.name);
        return None;
    }

    let commits = match collect_history(&repo.expanded_path(), since) {
        Ok(commits) => commits,
        Err(e) => {
            warn!("{}: {e:#}, skipping", repo.name);
            return None;
        }
    };

    info!("{}: {} commits", repo.name, commits.len());
    if commits.is_empty() {
        return None;
    }

    match engine::sessions_for_repo(&repo.name, commits, config.gap(), &config.categories) {
        Ok(sessions) => {
            info!("{}: {} sessions", repo.name, sessions.len());
            Some(sessions)
        }
        Err(e) => {
            // Unreachable with a well-behaved segmenter; reported rather
            // than silently dropped.
            warn!("{}: {e}, skipping", repo.name);
            None
        }
    }
}
