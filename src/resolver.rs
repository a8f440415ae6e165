//! Resolution of mapping tokens to absolute URLs.

use crate::config::BaseDomains;

/// Which side of a mapping a token belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlRole {
    /// Old URL, resolved against the source base domain
    Source,
    /// Expected new URL, resolved against the target base domain
    Target,
}

/// Returns true if `token` parses as an absolute URL on its own.
pub fn is_absolute_url(token: &str) -> bool {
    url::Url::parse(token).is_ok()
}

/// Resolves a path-or-URL token to the URL that will be requested or expected.
///
/// - Absolute tokens are returned unchanged, whatever the configuration.
/// - Otherwise the base domain for `role` is joined to the token with exactly
///   one `/` (one trailing slash is dropped from the domain and one leading
///   slash from the token).
/// - Without a base domain the token is returned as-is; the check then fails
///   on it and the record ends up in `error`.
///
/// # Examples
///
/// ```
/// use redirect_verifier::{resolve, BaseDomains, UrlRole};
///
/// let domains = BaseDomains::new(Some("https://old.com/"), None);
/// assert_eq!(resolve("/a", UrlRole::Source, &domains), "https://old.com/a");
/// assert_eq!(resolve("/a", UrlRole::Target, &domains), "/a");
/// assert_eq!(resolve("https://x.com/p", UrlRole::Source, &domains), "https://x.com/p");
/// ```
pub fn resolve(token: &str, role: UrlRole, domains: &BaseDomains) -> String {
    if token.is_empty() || is_absolute_url(token) {
        return token.to_string();
    }

    let domain = match role {
        UrlRole::Source => domains.source.as_deref(),
        UrlRole::Target => domains.target.as_deref(),
    };

    match domain.filter(|d| !d.is_empty()) {
        Some(domain) => {
            let domain = domain.strip_suffix('/').unwrap_or(domain);
            let path = token.strip_prefix('/').unwrap_or(token);
            format!("{domain}/{path}")
        }
        None => token.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn both(source: &str, target: &str) -> BaseDomains {
        BaseDomains::new(Some(source), Some(target))
    }

    #[test]
    fn test_slash_combinations_join_with_single_slash() {
        for domain in ["https://old.com", "https://old.com/"] {
            for token in ["a/b", "/a/b"] {
                let domains = both(domain, "https://new.com");
                assert_eq!(
                    resolve(token, UrlRole::Source, &domains),
                    "https://old.com/a/b",
                    "domain={domain:?} token={token:?}"
                );
            }
        }
    }

    #[test]
    fn test_only_one_slash_is_stripped_each_side() {
        let domains = both("https://old.com//", "https://new.com");
        assert_eq!(
            resolve("//a", UrlRole::Source, &domains),
            "https://old.com///a"
        );
    }

    #[test]
    fn test_role_selects_domain() {
        let domains = both("https://old.com", "https://new.com");
        assert_eq!(resolve("/p", UrlRole::Source, &domains), "https://old.com/p");
        assert_eq!(resolve("/p", UrlRole::Target, &domains), "https://new.com/p");
    }

    #[test]
    fn test_absolute_url_ignores_configuration() {
        let domains = both("https://old.com", "https://new.com");
        for token in ["https://x.com/p1", "http://y.com/p2?q=1#frag"] {
            assert_eq!(resolve(token, UrlRole::Source, &domains), token);
            assert_eq!(resolve(token, UrlRole::Target, &domains), token);
            assert_eq!(resolve(token, UrlRole::Source, &BaseDomains::default()), token);
        }
    }

    #[test]
    fn test_resolve_is_idempotent_on_its_output() {
        let domains = both("https://old.com/", "https://new.com");
        let once = resolve("/a", UrlRole::Source, &domains);
        assert_eq!(resolve(&once, UrlRole::Source, &domains), once);
    }

    #[test]
    fn test_missing_domain_returns_token_unchanged() {
        let domains = BaseDomains::new(Some("https://old.com"), None);
        assert_eq!(resolve("/new", UrlRole::Target, &domains), "/new");
        assert_eq!(resolve("new", UrlRole::Target, &domains), "new");
    }

    #[test]
    fn test_empty_token() {
        let domains = both("https://old.com", "https://new.com");
        assert_eq!(resolve("", UrlRole::Source, &domains), "");
    }

    #[test]
    fn test_query_and_fragment_are_kept() {
        let domains = both("https://old.com", "https://new.com");
        assert_eq!(
            resolve("/search?q=1#top", UrlRole::Source, &domains),
            "https://old.com/search?q=1#top"
        );
    }

    #[test]
    fn test_is_absolute_url() {
        assert!(is_absolute_url("https://example.com"));
        assert!(!is_absolute_url("/path"));
        assert!(!is_absolute_url("example.com/path"));
    }
}
