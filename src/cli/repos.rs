//! Repos command — lists approved repositories and their permissions.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::config::DevlogConfig;

/// Repos command options.
#[derive(Parser)]
pub struct ReposCommand {
    /// Path to the devlog configuration file.
    #[arg(long, value_name = "PATH", default_value = "devlog-config.json")]
    pub config: PathBuf,
}

impl ReposCommand {
    /// Executes the repos command.
    pub fn execute(self) -> Result<()> {
        let config = DevlogConfig::load(&self.config).context("Failed to load configuration")?;

        for repo in &config.approved_repos {
            let access = if repo.can_read_log() {
                "read_log"
            } else {
                "no log access"
            };
            println!("{}  {}  [{}]", repo.name, repo.local_path, access);
        }

        Ok(())
    }
}
