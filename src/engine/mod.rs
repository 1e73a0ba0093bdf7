//! The session engine: segmentation, classification, scoring, aggregation
//! and multi-repository merging.
//!
//! Every component here is a deterministic, side-effect-free function of its
//! inputs. Running the engine twice over the same commit history and
//! configuration yields an identical dataset, including session identifiers;
//! the visualization layer depends on that stability.

pub mod aggregate;
pub mod classify;
pub mod error;
pub mod merge;
pub mod score;
pub mod segment;

pub use aggregate::build_session;
pub use classify::CategoryClassifier;
pub use error::EngineError;
pub use merge::merge;
pub use score::intensity;
pub use segment::segment;

use crate::config::CategoryRule;
use crate::data::{CommitRecord, Session};

/// Segment one repository's commit history and aggregate each group into a
/// session.
///
/// Commits must be in chronological order. Session indices (and therefore
/// identifiers) are 1-based positions of the groups within this run.
pub fn sessions_for_repo(
    repo: &str,
    commits: Vec<CommitRecord>,
    gap: chrono::Duration,
    rules: &[CategoryRule],
) -> Result<Vec<Session>, EngineError> {
    let classifier = CategoryClassifier::new(rules);

    segment(commits, gap)
        .iter()
        .enumerate()
        .map(|(index, group)| build_session(repo, index, group, &classifier))
        .collect()
}
