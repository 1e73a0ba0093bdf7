//! Temporal segmentation of commit sequences.

use chrono::Duration;

use crate::data::CommitRecord;

/// Partition a time-ordered commit sequence into contiguous groups separated
/// by idle gaps.
///
/// A single greedy forward scan: the first commit opens the first group.
/// Each subsequent commit joins the current group unless the elapsed time
/// since the *previous commit* strictly exceeds `gap`, in which case it
/// closes the group and opens a new one. The last group is always closed at
/// end of input.
///
/// Empty input yields no groups; a single commit yields one single-element
/// group; commits with identical timestamps always share a group. The
/// partition is local and order-dependent by design, which makes it
/// deterministic and reproducible.
pub fn segment(commits: Vec<CommitRecord>, gap: Duration) -> Vec<Vec<CommitRecord>> {
    let mut groups = Vec::new();
    let mut current: Vec<CommitRecord> = Vec::new();

    for commit in commits {
        if let Some(previous) = current.last() {
            if commit.timestamp - previous.timestamp > gap {
                groups.push(std::mem::take(&mut current));
            }
        }
        current.push(commit);
    }

    if !current.is_empty() {
        groups.push(current);
    }

    groups
}
