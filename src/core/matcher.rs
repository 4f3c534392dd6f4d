//! Relevance scoring
//!
//! Scores a candidate file against a query using fixed tiers:
//!
//! | tier | rule                          | score        |
//! |------|-------------------------------|--------------|
//! | 1    | name equals query             | 1000         |
//! | 2    | relative path equals query    | 900          |
//! | 3    | name starts with query        | 800          |
//! | 4    | relative path starts with it  | 700          |
//! | 5    | name contains query           | 600          |
//! | 6    | relative path contains it     | 500          |
//! | 7    | fuzzy on name / on path       | 300+ / 200+  |
//!
//! All comparisons are case-insensitive. An empty query scores every file 1.0.

/// Score returned for every file when the query is empty
pub const UNRANKED_SCORE: f64 = 1.0;

const EXACT_NAME: f64 = 1000.0;
const EXACT_PATH: f64 = 900.0;
const PREFIX_NAME: f64 = 800.0;
const PREFIX_PATH: f64 = 700.0;
const CONTAINS_NAME: f64 = 600.0;
const CONTAINS_PATH: f64 = 500.0;
const FUZZY_NAME_BASE: f64 = 300.0;
const FUZZY_PATH_BASE: f64 = 200.0;

/// Texts shorter than this earn a bonus of the difference
const SHORT_TEXT_LIMIT: usize = 50;

/// Score a file by name and relative path. Zero means "no match".
pub fn score(file_name: &str, relative_path: &str, query: &str) -> f64 {
    if query.is_empty() {
        return UNRANKED_SCORE;
    }

    let query = query.to_lowercase();
    let name = file_name.to_lowercase();
    let path = relative_path.to_lowercase();

    if name == query {
        EXACT_NAME
    } else if path == query {
        EXACT_PATH
    } else if name.starts_with(&query) {
        PREFIX_NAME
    } else if path.starts_with(&query) {
        PREFIX_PATH
    } else if name.contains(&query) {
        CONTAINS_NAME
    } else if path.contains(&query) {
        CONTAINS_PATH
    } else {
        let by_name = fuzzy_score(&name, &query);
        if by_name > 0.0 {
            return FUZZY_NAME_BASE + by_name;
        }
        let by_path = fuzzy_score(&path, &query);
        if by_path > 0.0 {
            return FUZZY_PATH_BASE + by_path;
        }
        0.0
    }
}

/// Subsequence match of `pattern` in `text`, rewarding contiguous runs and
/// short texts. Returns 0 unless every pattern byte is found in order.
///
/// Both inputs are expected to be lowercased already.
pub fn fuzzy_score(text: &str, pattern: &str) -> f64 {
    let text = text.as_bytes();
    let pattern = pattern.as_bytes();
    if pattern.is_empty() {
        return 0.0;
    }

    let mut pattern_idx = 0;
    let mut matches = 0usize;
    let mut run = 0usize;
    let mut score = 0.0;

    for &byte in text {
        if pattern_idx >= pattern.len() {
            break;
        }
        if byte == pattern[pattern_idx] {
            matches += 1;
            run += 1;
            pattern_idx += 1;
            score += (run * 2) as f64;
        } else {
            run = 0;
        }
    }

    if pattern_idx < pattern.len() {
        return 0.0;
    }

    let length_bonus = SHORT_TEXT_LIMIT.saturating_sub(text.len()) as f64;
    // matches == pattern.len() here, so this is always +100
    let ratio_bonus = matches as f64 / pattern.len() as f64 * 100.0;
    score + length_bonus + ratio_bonus
}
