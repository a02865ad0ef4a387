//! Similarity scoring between a requested note name and existing ones.
//!
//! Scores are integers in `0..=100`. The final score takes the best of a
//! plain edit ratio and several token-based ratios, discounting the token
//! and partial variants so that only a near-identical string reaches 100.

use std::collections::HashSet;

use crate::error::{NoteError, Result};

/// Minimum score a candidate needs to be offered as a possible duplicate.
pub const DEFAULT_THRESHOLD: u8 = 90;

/// Maximum number of candidates returned by [`FuzzyMatcher::find_matches`].
pub const DEFAULT_LIMIT: usize = 5;

const TOKEN_SCALE: f64 = 0.95;
const PARTIAL_SCALE: f64 = 0.9;
const FAR_PARTIAL_SCALE: f64 = 0.6;

/// A candidate name with its similarity to the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchCandidate {
    pub name: String,
    pub score: u8,
}

/// Filters a list of names down to those similar to a query.
#[derive(Debug, Clone, Copy)]
pub struct FuzzyMatcher {
    threshold: u8,
    limit: usize,
}

impl FuzzyMatcher {
    /// Creates a matcher that keeps candidates scoring at least `threshold`.
    ///
    /// # Errors
    ///
    /// Returns `NoteError::InvalidConfiguration` if `threshold` exceeds 100.
    pub fn new(threshold: u8) -> Result<Self> {
        if threshold > 100 {
            return Err(NoteError::invalid_configuration(format!(
                "fuzzy threshold must be between 0 and 100, got {threshold}"
            )));
        }
        Ok(Self {
            threshold,
            limit: DEFAULT_LIMIT,
        })
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    /// Scores every candidate against `query` and returns those with
    /// `score >= threshold`.
    ///
    /// Results are ordered by descending score; equal scores keep the order
    /// in which candidates were supplied. A candidate listed twice is
    /// reported once.
    pub fn find_matches<S: AsRef<str>>(&self, query: &str, candidates: &[S]) -> Vec<MatchCandidate> {
        let mut seen = HashSet::new();
        let mut matches: Vec<MatchCandidate> = candidates
            .iter()
            .map(AsRef::as_ref)
            .filter(|name| seen.insert(*name))
            .map(|name| MatchCandidate {
                name: name.to_string(),
                score: score(query, name),
            })
            .filter(|m| m.score >= self.threshold)
            .collect();

        // sort_by is stable, which keeps supplied order for ties
        matches.sort_by(|a, b| b.score.cmp(&a.score));
        matches.truncate(self.limit);

        for m in &matches {
            log::debug!("fuzzy match for '{query}': '{}' ({})", m.name, m.score);
        }
        matches
    }
}

impl Default for FuzzyMatcher {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Similarity of two strings in `0..=100`, ignoring case and punctuation.
///
/// # Examples
///
/// ```
/// use nook::matching::score;
///
/// assert_eq!(score("PyCon 2023", "PyCon 2023"), 100);
/// assert_eq!(score("PyCon 2023", "PyCon 2020"), 90);
/// assert!(score("PyCon 2023", "Strange Loop") < 50);
/// ```
pub fn score(query: &str, candidate: &str) -> u8 {
    if query.to_lowercase() == candidate.to_lowercase() {
        return 100;
    }

    let a = normalize(query);
    let b = normalize(candidate);
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let len_a = a.chars().count() as f64;
    let len_b = b.chars().count() as f64;
    let len_ratio = len_a.max(len_b) / len_a.min(len_b);

    let base = ratio(&a, &b);
    let best = if len_ratio < 1.5 {
        let token_best = token_sort_ratio(&a, &b, ratio).max(token_set_ratio(&a, &b, ratio));
        base.max(token_best * TOKEN_SCALE)
    } else {
        let scale = if len_ratio < 8.0 {
            PARTIAL_SCALE
        } else {
            FAR_PARTIAL_SCALE
        };
        let partial = partial_ratio(&a, &b) * scale;
        let token_best = token_sort_ratio(&a, &b, partial_ratio)
            .max(token_set_ratio(&a, &b, partial_ratio));
        base.max(partial).max(token_best * TOKEN_SCALE * scale)
    };

    best.round().clamp(0.0, 100.0) as u8
}

/// Lower-cases and replaces every non-alphanumeric character with a space.
fn normalize(s: &str) -> String {
    let replaced: String = s
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    replaced.trim().to_lowercase()
}

/// Indel similarity: `2 * LCS / (len_a + len_b)`, scaled to 100.
fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    ratio_chars(&a, &b)
}

fn ratio_chars(a: &[char], b: &[char]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 0.0;
    }
    100.0 * (2 * lcs_len(a, b)) as f64 / total as f64
}

fn lcs_len(a: &[char], b: &[char]) -> usize {
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];
    for ca in a {
        for (j, cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// Best ratio of the shorter string against each equal-length window of the longer.
fn partial_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    if short.is_empty() {
        return 0.0;
    }
    if short.len() == long.len() {
        return ratio_chars(&short, &long);
    }

    let mut best: f64 = 0.0;
    for window in long.windows(short.len()) {
        best = best.max(ratio_chars(&short, window));
        if best >= 100.0 {
            break;
        }
    }
    best
}

fn tokens(s: &str) -> Vec<&str> {
    s.split_whitespace().collect()
}

fn token_sort_ratio(a: &str, b: &str, scorer: fn(&str, &str) -> f64) -> f64 {
    let mut ta = tokens(a);
    let mut tb = tokens(b);
    ta.sort_unstable();
    tb.sort_unstable();
    scorer(&ta.join(" "), &tb.join(" "))
}

/// Compares the shared tokens against each side's full token set.
fn token_set_ratio(a: &str, b: &str, scorer: fn(&str, &str) -> f64) -> f64 {
    let set_a: HashSet<&str> = tokens(a).into_iter().collect();
    let set_b: HashSet<&str> = tokens(b).into_iter().collect();

    let mut common: Vec<&str> = set_a.intersection(&set_b).copied().collect();
    let mut only_a: Vec<&str> = set_a.difference(&set_b).copied().collect();
    let mut only_b: Vec<&str> = set_b.difference(&set_a).copied().collect();
    common.sort_unstable();
    only_a.sort_unstable();
    only_b.sort_unstable();

    let common = common.join(" ");
    let join = |rest: &[&str]| {
        let rest = rest.join(" ");
        match (common.is_empty(), rest.is_empty()) {
            (true, _) => rest,
            (false, true) => common.clone(),
            (false, false) => format!("{common} {rest}"),
        }
    };
    let combined_a = join(&only_a);
    let combined_b = join(&only_b);

    let mut best = scorer(&combined_a, &combined_b);
    if !common.is_empty() {
        best = best
            .max(scorer(&common, &combined_a))
            .max(scorer(&common, &combined_b));
    }
    best
}
