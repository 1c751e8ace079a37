//! Origin allow-list guard for the widget API.
//!
//! Matching is on the host only: scheme and port are ignored, comparison is
//! case-insensitive. With a non-empty allow-list, a missing or unparseable
//! `Origin` header is denied (fail closed).

use url::Url;

/// Normalize a configured domain entry for comparison and storage.
///
/// Accepts bare hosts (`example.com`), full origins
/// (`https://example.com:8443/`), and entries with stray whitespace or a
/// trailing slash; yields the lowercased host, or `None` for entries with
/// no usable host.
#[must_use]
pub fn normalize_domain(entry: &str) -> Option<String> {
    let entry = entry.trim();
    if entry.is_empty() {
        return None;
    }

    if entry.contains("://") {
        let url = Url::parse(entry).ok()?;
        return url.host_str().map(str::to_lowercase);
    }

    let host = entry
        .split('/')
        .next()
        .unwrap_or_default()
        .split(':')
        .next()
        .unwrap_or_default();
    if host.is_empty() {
        return None;
    }
    Some(host.to_lowercase())
}

/// Extract the host from an `Origin` header value.
fn origin_host(origin: &str) -> Option<String> {
    let url = Url::parse(origin.trim()).ok()?;
    url.host_str().map(str::to_lowercase)
}

/// Whether a request from `origin` may use the widget API.
///
/// An empty allow-list admits every origin, header or not. A non-empty list
/// admits only origins whose host matches a configured domain.
#[must_use]
pub fn origin_allowed(origin: Option<&str>, allowed_domains: &[String]) -> bool {
    if allowed_domains.is_empty() {
        return true;
    }

    let Some(host) = origin.and_then(origin_host) else {
        return false;
    };

    allowed_domains
        .iter()
        .filter_map(|d| normalize_domain(d))
        .any(|allowed| allowed == host)
}
