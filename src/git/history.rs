//! Reads commit history from a local checkout into CommitRecord values.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset, NaiveDate};
use git2::{Commit, Repository, Sort};

use crate::data::{CommitRecord, FileDelta};

/// Collect the commit history of the repository at `path`, oldest first.
///
/// Walks from HEAD in time order. Each record carries the author timestamp
/// with its original UTC offset, the subject line, and per-file line stats
/// from the diff against the first parent (the empty tree for the root
/// commit). With `since`, commits dated before that day are dropped.
///
/// A repository that cannot be opened is the caller's cue to skip it; a
/// repository with no matching commits yields an empty vector.
pub fn collect_history(path: &Path, since: Option<NaiveDate>) -> Result<Vec<CommitRecord>> {
    let repo = Repository::open(path)
        .with_context(|| format!("Failed to open git repository: {}", path.display()))?;

    let mut walker = repo.revwalk().context("Failed to create revwalk")?;
    walker.push_head().context("Failed to resolve HEAD")?;
    // Oldest first, matching `git log --reverse`.
    walker
        .set_sorting(Sort::TIME | Sort::REVERSE)
        .context("Failed to set revwalk sorting")?;

    let mut records = Vec::new();
    for oid in walker {
        let oid = oid.context("Failed to get commit OID from walker")?;
        let commit = repo.find_commit(oid).context("Failed to find commit")?;

        let timestamp = commit_timestamp(&commit)?;
        if let Some(since) = since {
            if timestamp.date_naive() < since {
                continue;
            }
        }

        records.push(CommitRecord {
            hash: oid.to_string(),
            timestamp,
            message: commit.summary().unwrap_or("").to_string(),
            author: commit.author().name().unwrap_or("Unknown").to_string(),
            files: file_deltas(&repo, &commit)?,
        });
    }

    Ok(records)
}

/// Author timestamp with its original UTC offset.
fn commit_timestamp(commit: &Commit<'_>) -> Result<DateTime<FixedOffset>> {
    let when = commit.author().when();
    let date = DateTime::from_timestamp(when.seconds(), 0)
        .context("Invalid commit timestamp")?
        .with_timezone(
            &FixedOffset::east_opt(when.offset_minutes() * 60)
                .unwrap_or_else(|| FixedOffset::east_opt(0).unwrap()),
        );
    Ok(date)
}

/// Per-file insertion/deletion counts for one commit.
///
/// Merge commits are diffed against their first parent, like everything
/// else; the root commit is diffed against the empty tree.
fn file_deltas(repo: &Repository, commit: &Commit<'_>) -> Result<Vec<FileDelta>> {
    let commit_tree = commit.tree().context("Failed to get commit tree")?;

    let parent_tree = if commit.parent_count() > 0 {
        Some(
            commit
                .parent(0)
                .context("Failed to get parent commit")?
                .tree()
                .context("Failed to get parent tree")?,
        )
    } else {
        None
    };

    let diff = repo
        .diff_tree_to_tree(parent_tree.as_ref(), Some(&commit_tree), None)
        .context("Failed to create diff")?;

    let mut deltas: Vec<FileDelta> = diff
        .deltas()
        .filter_map(|delta| delta.new_file().path().and_then(|p| p.to_str()))
        .map(|path| FileDelta {
            insertions: 0,
            deletions: 0,
            path: path.to_string(),
        })
        .collect();

    diff.foreach(
        &mut |_delta, _progress| true,
        None,
        None,
        Some(&mut |delta, _hunk, line| {
            let path = delta.new_file().path().and_then(|p| p.to_str());
            if let Some(entry) = deltas.iter_mut().find(|f| Some(f.path.as_str()) == path) {
                match line.origin() {
                    '+' => entry.insertions += 1,
                    '-' => entry.deletions += 1,
                    _ => {}
                }
            }
            true
        }),
    )
    .context("Failed to process diff")?;

    Ok(deltas)
}
