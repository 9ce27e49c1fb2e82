//! Hostname-like segment detection for import paths.

use once_cell::sync::Lazy;
use regex::Regex;

/// Dotted lowercase labels ending in an alphabetic top-level label, e.g. `github.com`.
static HOSTNAME_SEGMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([a-z0-9]+(-[a-z0-9]+)*\.)+[a-z]{2,}$").expect("valid regex")
});

/// Check whether a single path segment looks like a domain name.
pub fn is_hostname_like(segment: &str) -> bool {
    HOSTNAME_SEGMENT.is_match(segment)
}

/// Count the `/`-separated segments of `import_path` that look like a domain name.
pub fn hostname_segments(import_path: &str) -> usize {
    import_path.split('/').filter(|segment| is_hostname_like(segment)).count()
}

/// An import is external when at least one of its segments is hostname-like.
pub fn is_external_import(import_path: &str) -> bool {
    hostname_segments(import_path) > 0
}
