//! CLI interface for devlog-sessions.

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod generate;
pub mod repos;

pub use generate::GenerateCommand;
pub use repos::ReposCommand;

/// devlog-sessions: git history → work-session dataset
#[derive(Parser)]
#[command(name = "devlog-sessions")]
#[command(about = "Generates a work-session dataset from git commit history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// The main command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Main command categories
#[derive(Subcommand)]
pub enum Commands {
    /// Generate the session dataset from approved repositories
    Generate(GenerateCommand),
    /// List approved repositories and their permissions
    Repos(ReposCommand),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Generate(generate_cmd) => generate_cmd.execute(),
            Commands::Repos(repos_cmd) => repos_cmd.execute(),
        }
    }
}
