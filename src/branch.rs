//! Branch naming
//!
//! Derives a ref-safe branch name from a submission title and resolves
//! collisions against the repository's existing branches.

use regex::Regex;
use std::collections::HashSet;

/// Placeholder used when a title slugifies to nothing (e.g. all punctuation)
const FALLBACK_SLUG: &str = "patch";

/// Normalize a title into a ref-safe slug
///
/// Lowercases, collapses every run of non-alphanumeric characters into a
/// single hyphen, and trims leading/trailing hyphens. Deterministic and
/// idempotent; may return an empty string for titles with no alphanumerics.
#[must_use]
pub fn slugify(title: &str) -> String {
    let non_alphanumeric = Regex::new("[^a-z0-9]+").unwrap();
    non_alphanumeric
        .replace_all(&title.to_lowercase(), "-")
        .trim_matches('-')
        .to_string()
}

/// The first branch name derived from `title` that is not already taken
///
/// Returns the slug itself when free, otherwise probes `slug-1`, `slug-2`, …
/// until an unused name is found. The probe always terminates because
/// `existing` is finite. Callers validate title emptiness beforehand; a
/// title that still slugifies to nothing falls back to `"patch"`.
#[must_use]
pub fn next_available(title: &str, existing: &HashSet<String>) -> String {
    let slug = slugify(title);
    let base = if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    };

    if !existing.contains(&base) {
        return base;
    }

    let mut suffix = 1u64;
    loop {
        let candidate = format!("{base}-{suffix}");
        if !existing.contains(&candidate) {
            return candidate;
        }
        suffix += 1;
    }
}
