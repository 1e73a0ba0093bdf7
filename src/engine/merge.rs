//! Merging per-repository session lists into one dataset.

use crate::data::Session;

/// Merge independently produced per-repository session lists into a single
/// list ordered by start timestamp, most recent first.
///
/// The sort is stable: sessions with identical start timestamps keep their
/// relative order (repository arrival order, then within-repository order),
/// so the merged dataset does not depend on which repository finished
/// processing first.
pub fn merge<I>(per_repo_sessions: I) -> Vec<Session>
where
    I: IntoIterator<Item = Vec<Session>>,
{
    let mut merged: Vec<Session> = per_repo_sessions.into_iter().flatten().collect();
    merged.sort_by(|a, b| b.start.cmp(&a.start));
    merged
}
