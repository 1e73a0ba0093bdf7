//! # devlog-sessions
//!
//! Turns git commit history into a dataset of discrete work sessions.
//!
//! Commits are clustered into sessions by idle gaps (default 3 hours), and
//! each session is annotated with its duration, churn totals, a dominant
//! content category and a bounded intensity score. The result is a JSON
//! array consumed by a devlog visualization layer.
//!
//! ## Quick Start
//!
//! ```rust
//! use devlog_sessions::engine::intensity;
//!
//! assert_eq!(intensity(30, 500, 0, 15), 1.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod data;
pub mod engine;
pub mod git;

pub use crate::cli::Cli;

/// The current version of devlog-sessions.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
