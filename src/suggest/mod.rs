//! "Did you mean" suggestions for filenames that do not exist.
//!
//! Similarity is the Ratcliff/Obershelp ratio: twice the number of
//! characters in matching blocks divided by the total length of both
//! strings. Matching blocks are found by taking the longest common
//! substring and recursing on the pieces left and right of it.

use std::path::Path;

use crate::config::SuggestConfig;
use crate::files;

/// Similarity of two strings in `[0.0, 1.0]`. Two empty strings are
/// identical.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    2.0 * matching_chars(&a, &b) as f64 / total as f64
}

/// Total length of the matching blocks between `a` and `b`.
fn matching_chars(a: &[char], b: &[char]) -> usize {
    let (i, j, len) = longest_common_run(a, b);
    if len == 0 {
        return 0;
    }
    len + matching_chars(&a[..i], &b[..j]) + matching_chars(&a[i + len..], &b[j + len..])
}

/// Longest common substring as `(start_in_a, start_in_b, len)`.
///
/// Ties go to the run starting earliest in `a`, then earliest in `b`.
fn longest_common_run(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);
    // prev[j + 1] = length of the common run ending at a[i - 1], b[j]
    let mut prev = vec![0usize; b.len() + 1];
    let mut cur = vec![0usize; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        for (j, cb) in b.iter().enumerate() {
            cur[j + 1] = if ca == cb { prev[j] + 1 } else { 0 };
            let len = cur[j + 1];
            if len > best.2 {
                best = (i + 1 - len, j + 1 - len, len);
            }
        }
        std::mem::swap(&mut prev, &mut cur);
    }

    best
}

/// Rank `candidates` by similarity to `target` and keep the best `limit`
/// whose score is at least `cutoff`. Equal scores are ordered by name,
/// descending.
pub fn close_matches<'a, I>(target: &str, candidates: I, limit: usize, cutoff: f64) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut scored: Vec<(f64, &str)> = candidates
        .into_iter()
        .map(|c| (similarity(c, target), c))
        .filter(|(score, _)| *score >= cutoff)
        .collect();

    scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| b.1.cmp(a.1)));
    scored
        .into_iter()
        .take(limit)
        .map(|(_, name)| name.to_string())
        .collect()
}

/// Suggest files in `dir` whose names resemble `missing`.
///
/// A directory that cannot be listed yields no suggestions.
pub async fn suggest_similar(dir: &Path, missing: &str, config: &SuggestConfig) -> Vec<String> {
    let names = match files::list_files(dir).await {
        Ok(names) => names,
        Err(e) => {
            tracing::warn!(dir = %dir.display(), error = %e, "cannot list directory for suggestions");
            return Vec::new();
        }
    };

    let matches = close_matches(
        missing,
        names.iter().map(String::as_str),
        config.limit,
        config.cutoff,
    );
    tracing::debug!(missing, candidates = names.len(), found = matches.len(), "suggestion pass");
    matches
}
