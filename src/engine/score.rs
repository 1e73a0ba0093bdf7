//! Composite intensity scoring for sessions.

/// Saturation threshold for the commit-count term.
const COMMIT_SATURATION: f64 = 30.0;
/// Saturation threshold for the line-churn term.
const CHURN_SATURATION: f64 = 500.0;
/// Saturation threshold for the files-touched term.
const FILE_SATURATION: f64 = 15.0;

/// Compute a session's intensity score in `[0, 1]`.
///
/// Weighted sum of three independently capped terms: commit frequency is
/// the strongest signal (0.5), raw line churn second (0.3), breadth of
/// files touched third (0.2). Each term saturates at its threshold, so no
/// single signal can push the score past its weight and the total stays in
/// `[0, 1]` by construction. Rounded to 3 decimal places.
pub fn intensity(commit_count: usize, insertions: u64, deletions: u64, file_count: usize) -> f64 {
    let churn = (insertions + deletions) as f64;

    let term_commits = (commit_count as f64 / COMMIT_SATURATION).min(1.0) * 0.5;
    let term_churn = (churn / CHURN_SATURATION).min(1.0) * 0.3;
    let term_files = (file_count as f64 / FILE_SATURATION).min(1.0) * 0.2;

    round3(term_commits + term_churn + term_files)
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
