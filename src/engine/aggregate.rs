//! Session aggregation: from a contiguous commit group to a Session record.

use std::collections::BTreeSet;

use crate::data::{CommitRecord, Session};
use crate::engine::{classify::CategoryClassifier, error::EngineError, score::intensity};

/// Build one session from a non-empty, contiguous commit group.
///
/// `index` is the 0-based position of this group among all groups produced
/// for the repository in the current run; the session identifier embeds it
/// 1-based, zero-padded to 3 digits, behind a two-character repository
/// prefix (`ke007`). Identifiers are therefore stable for a fixed history
/// and gap threshold, and re-derived wholesale when either changes.
pub fn build_session(
    repo: &str,
    index: usize,
    commits: &[CommitRecord],
    classifier: &CategoryClassifier<'_>,
) -> Result<Session, EngineError> {
    // Unreachable when fed from the segmenter, which never yields empty
    // groups.
    let (first, last) = match (commits.first(), commits.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(EngineError::EmptyCommitGroup),
    };

    let start = first.timestamp;
    let end = last.timestamp;
    // Whole minutes, floored, never below 1: a session always has a visible
    // duration even when it is a single commit.
    let duration_min = ((end - start).num_seconds() / 60).max(1);

    let mut insertions = 0;
    let mut deletions = 0;
    let mut paths = BTreeSet::new();
    for commit in commits {
        insertions += commit.insertions();
        deletions += commit.deletions();
        paths.extend(commit.files.iter().map(|f| f.path.clone()));
    }
    // BTreeSet iteration is already the lexicographic order the output
    // contract asks for.
    let files_changed: Vec<String> = paths.into_iter().collect();

    let dominant_category = classifier.dominant_category(&files_changed);
    let color = classifier.color_for(&dominant_category).to_string();
    let score = intensity(commits.len(), insertions, deletions, files_changed.len());
    let messages = commits.iter().map(|c| c.message.clone()).collect();

    Ok(Session {
        id: session_id(repo, index),
        repo: repo.to_string(),
        start,
        end,
        duration_min,
        commit_count: commits.len(),
        files_changed,
        insertions,
        deletions,
        dominant_category,
        color,
        messages,
        intensity: score,
        texture_url: None,
    })
}

/// Deterministic session identifier: repo prefix + 1-based 3-digit index.
fn session_id(repo: &str, index: usize) -> String {
    let prefix: String = repo.chars().take(2).collect();
    format!("{prefix}{:03}", index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CategoryRule;
    use crate::data::FileDelta;
    use chrono::{DateTime, FixedOffset};

    fn commit(rfc3339: &str, message: &str, files: &[(u64, u64, &str)]) -> CommitRecord {
        CommitRecord {
            hash: "f".repeat(40),
            timestamp: DateTime::<FixedOffset>::parse_from_rfc3339(rfc3339).unwrap(),
            message: message.to_string(),
            author: "Test User".to_string(),
            files: files
                .iter()
                .map(|(insertions, deletions, path)| FileDelta {
                    insertions: *insertions,
                    deletions: *deletions,
                    path: (*path).to_string(),
                })
                .collect(),
        }
    }

    fn docs_rules() -> Vec<CategoryRule> {
        vec![CategoryRule {
            name: "docs".to_string(),
            patterns: vec!["README".to_string()],
            color: "#60a5fa".to_string(),
        }]
    }

    #[test]
    fn test_empty_group_is_rejected() {
        let classifier = CategoryClassifier::new(&[]);
        assert!(matches!(
            build_session("kesson-space", 0, &[], &classifier),
            Err(EngineError::EmptyCommitGroup)
        ));
    }

    #[test]
    fn test_single_commit_has_duration_floor_of_one() {
        let classifier = CategoryClassifier::new(&[]);
        let group = [commit("2026-02-01T10:00:00+09:00", "init", &[(1, 0, "a.rs")])];

        let session = build_session("kesson-space", 0, &group, &classifier).unwrap();

        assert_eq!(session.duration_min, 1);
        assert_eq!(session.start, session.end);
    }

    #[test]
    fn test_duration_floors_sub_minute_remainder() {
        let classifier = CategoryClassifier::new(&[]);
        let group = [
            commit("2026-02-01T10:00:00+09:00", "a", &[]),
            commit("2026-02-01T10:02:59+09:00", "b", &[]),
        ];

        let session = build_session("kesson-space", 0, &group, &classifier).unwrap();
        assert_eq!(session.duration_min, 2);
    }

    #[test]
    fn test_files_deduplicated_and_sorted() {
        let classifier = CategoryClassifier::new(&[]);
        let group = [
            commit("2026-02-01T10:00:00+09:00", "a", &[(1, 0, "src/b.js"), (2, 0, "src/a.js")]),
            commit("2026-02-01T10:10:00+09:00", "b", &[(3, 1, "src/a.js")]),
        ];

        let session = build_session("kesson-space", 0, &group, &classifier).unwrap();

        assert_eq!(session.files_changed, vec!["src/a.js", "src/b.js"]);
        assert_eq!(session.insertions, 6);
        assert_eq!(session.deletions, 1);
    }

    #[test]
    fn test_session_id_format() {
        let classifier = CategoryClassifier::new(&[]);
        let group = [commit("2026-02-01T10:00:00+09:00", "a", &[])];

        let session = build_session("kesson-space", 6, &group, &classifier).unwrap();
        assert_eq!(session.id, "ke007");
    }

    #[test]
    fn test_session_id_short_repo_name() {
        let classifier = CategoryClassifier::new(&[]);
        let group = [commit("2026-02-01T10:00:00+09:00", "a", &[])];

        let session = build_session("x", 0, &group, &classifier).unwrap();
        assert_eq!(session.id, "x001");
    }

    #[test]
    fn test_dominant_category_and_color() {
        let rules = docs_rules();
        let classifier = CategoryClassifier::new(&rules);
        let group = [commit(
            "2026-02-01T10:00:00+09:00",
            "docs pass",
            &[(5, 0, "README.md"), (2, 0, "README.ja.md"), (1, 0, "src/a.js")],
        )];

        let session = build_session("kesson-space", 0, &group, &classifier).unwrap();

        assert_eq!(session.dominant_category, "docs");
        assert_eq!(session.color, "#60a5fa");
    }

    #[test]
    fn test_unclassified_session_gets_default_color() {
        let classifier = CategoryClassifier::new(&[]);
        let group = [commit("2026-02-01T10:00:00+09:00", "a", &[(1, 0, "foo.bin")])];

        let session = build_session("kesson-space", 0, &group, &classifier).unwrap();

        assert_eq!(session.dominant_category, "code");
        assert_eq!(session.color, crate::config::DEFAULT_COLOR);
    }

    #[test]
    fn test_messages_keep_commit_order() {
        let classifier = CategoryClassifier::new(&[]);
        let group = [
            commit("2026-02-01T10:00:00+09:00", "first", &[]),
            commit("2026-02-01T10:05:00+09:00", "second", &[]),
        ];

        let session = build_session("kesson-space", 0, &group, &classifier).unwrap();
        assert_eq!(session.messages, vec!["first", "second"]);
    }

    #[test]
    fn test_texture_url_is_absent() {
        let classifier = CategoryClassifier::new(&[]);
        let group = [commit("2026-02-01T10:00:00+09:00", "a", &[])];

        let session = build_session("kesson-space", 0, &group, &classifier).unwrap();
        assert!(session.texture_url.is_none());
    }
}
