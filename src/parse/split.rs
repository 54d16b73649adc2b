//! Generic URL splitting and its inverse.
//!
//! The splitter is deliberately non-validating: it recognizes the
//! `scheme://netloc/path;params?query#fragment` layout and leaves everything
//! else to the caller. It accepts relative references as well as absolute URLs.

use tracing::{debug, trace};

use crate::error::UrlError;
use crate::types::UrlComponents;
use crate::value::authority::{validate_port, Authority};

/// Schemes whose last path segment may carry `;params`.
const USES_PARAMS: &[&str] = &[
    "", "ftp", "hdl", "prospero", "http", "imap", "https", "shttp", "rtsp", "rtspu", "sip",
    "sips", "mms", "sftp", "tel",
];

/// Schemes that are written with a `//netloc` part even when it is empty.
const USES_NETLOC: &[&str] = &[
    "ftp", "http", "gopher", "nntp", "telnet", "imap", "wais", "file", "mms", "https", "shttp",
    "snews", "prospero", "rtsp", "rtspu", "rsync", "svn", "svn+ssh", "sftp", "nfs", "git",
    "git+ssh",
];

/// Split a URL string into its six components.
///
/// The scheme is lowercased; every other component is returned verbatim.
/// Components that are absent come back as empty strings.
///
/// # Examples
///
/// ```
/// use urlkit::split_url;
///
/// let parts = split_url("HTTP://user@example.com:8080/a/b;type=x?q=1#top").unwrap();
/// assert_eq!(parts.scheme, "http");
/// assert_eq!(parts.netloc, "user@example.com:8080");
/// assert_eq!(parts.path, "/a/b");
/// assert_eq!(parts.params, "type=x");
/// assert_eq!(parts.query, "q=1");
/// assert_eq!(parts.fragment, "top");
/// ```
///
/// # Errors
///
/// Returns [`UrlError::MalformedUrl`] when the netloc holds an unbalanced
/// IPv6 bracket.
pub fn split_url(url: &str) -> Result<UrlComponents, UrlError> {
    let (scheme, mut rest) = split_scheme(url);

    let mut netloc = "";
    if let Some(after) = rest.strip_prefix("//") {
        let end = after
            .find(|c: char| matches!(c, '/' | '?' | '#'))
            .unwrap_or(after.len());
        netloc = &after[..end];
        rest = &after[end..];

        if netloc.contains('[') != netloc.contains(']') {
            return Err(UrlError::MalformedUrl(format!(
                "invalid IPv6 literal in {url:?}"
            )));
        }
    }

    let (rest, fragment) = rest.split_once('#').unwrap_or((rest, ""));
    let (rest, query) = rest.split_once('?').unwrap_or((rest, ""));

    let (path, params) = if USES_PARAMS.contains(&scheme.as_str()) {
        split_params(rest)
    } else {
        (rest, "")
    };

    trace!(url, scheme = %scheme, netloc, path, "split url");

    Ok(UrlComponents::new(scheme, netloc, path, params, query, fragment))
}

/// Reassemble a URL string from its six components.
///
/// This is the inverse of [`split_url`]: splitting the result gives back the
/// same components for any input that `split_url` produced.
///
/// # Examples
///
/// ```
/// use urlkit::{unsplit_url, UrlComponents};
///
/// let parts = UrlComponents::new("https", "example.com", "/a", "", "q=1", "");
/// assert_eq!(unsplit_url(&parts), "https://example.com/a?q=1");
///
/// let relative = UrlComponents::new("", "", "../a", "", "", "top");
/// assert_eq!(unsplit_url(&relative), "../a#top");
/// ```
pub fn unsplit_url(parts: &UrlComponents) -> String {
    let mut path = parts.path.clone();
    if !parts.params.is_empty() {
        path.push(';');
        path.push_str(&parts.params);
    }

    let mut url = String::with_capacity(
        parts.scheme.len() + parts.netloc.len() + path.len() + parts.query.len() + parts.fragment.len() + 8,
    );

    if !parts.scheme.is_empty() {
        url.push_str(&parts.scheme);
        url.push(':');
    }

    let wants_netloc = !parts.netloc.is_empty()
        || (!parts.scheme.is_empty()
            && USES_NETLOC.contains(&parts.scheme.as_str())
            && !path.starts_with("//"));
    if wants_netloc {
        url.push_str("//");
        url.push_str(&parts.netloc);
        if !path.is_empty() && !path.starts_with('/') {
            url.push('/');
        }
    }
    url.push_str(&path);

    if !parts.query.is_empty() {
        url.push('?');
        url.push_str(&parts.query);
    }

    if !parts.fragment.is_empty() {
        url.push('#');
        url.push_str(&parts.fragment);
    }

    url
}

/// Decompose a netloc into username, password, host and port.
///
/// The userinfo ends at the last `@`; the password is everything after the
/// first `:` of the userinfo. The host is lowercased and a bracketed IPv6
/// literal keeps its brackets. An empty port is treated as absent.
///
/// # Examples
///
/// ```
/// use urlkit::split_netloc;
///
/// let auth = split_netloc("User:Secret@Example.COM:8080").unwrap();
/// assert_eq!(auth.username(), Some("User"));
/// assert_eq!(auth.password(), Some("Secret"));
/// assert_eq!(auth.host(), Some("example.com"));
/// assert_eq!(auth.port(), Some("8080"));
/// ```
///
/// # Errors
///
/// Returns [`UrlError::InvalidPort`] when the port is not a number in the
/// 0-65535 range, and [`UrlError::MalformedUrl`] when text other than
/// `:<port>` surrounds a bracketed host.
pub fn split_netloc(netloc: &str) -> Result<Authority, UrlError> {
    let (userinfo, hostport) = match netloc.rsplit_once('@') {
        Some((userinfo, hostport)) => (Some(userinfo), hostport),
        None => (None, netloc),
    };

    let (username, password) = match userinfo {
        Some(info) => match info.split_once(':') {
            Some((user, pass)) => (Some(user), Some(pass)),
            None => (Some(info), None),
        },
        None => (None, None),
    };

    let (host, port) = match (hostport.find('['), hostport.find(']')) {
        (Some(open), Some(close)) if open < close => {
            let tail = &hostport[close + 1..];
            let port = tail.strip_prefix(':');
            if open != 0 || (port.is_none() && !tail.is_empty()) {
                debug!(netloc, "unexpected text around bracketed host");
                return Err(UrlError::MalformedUrl(format!("invalid IPv6 literal in {netloc:?}")));
            }
            (&hostport[open..=close], port)
        }
        _ => match hostport.split_once(':') {
            Some((host, port)) => (host, Some(port)),
            None => (hostport, None),
        },
    };

    let port = port.filter(|p| !p.is_empty());
    if let Some(port) = port {
        validate_port(port)?;
    }

    let host = (!host.is_empty()).then(|| host.to_lowercase());

    Ok(Authority::from_validated(
        username.map(str::to_string),
        password.map(str::to_string),
        host,
        port.map(str::to_string),
    ))
}

/// Whether `candidate` is a scheme per RFC 3986 section 3.1.
pub(crate) fn is_scheme(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Split the leading `scheme:` off a URL string, if it has one.
fn split_scheme(url: &str) -> (String, &str) {
    match url.split_once(':') {
        Some((candidate, rest)) if is_scheme(candidate) => (candidate.to_ascii_lowercase(), rest),
        _ => (String::new(), url),
    }
}

/// Split `;params` off the last segment of a path.
fn split_params(path: &str) -> (&str, &str) {
    let start = path.rfind('/').unwrap_or(0);
    match path[start..].find(';') {
        Some(i) => (&path[..start + i], &path[start + i + 1..]),
        None => (path, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_url_complete() {
        let parts = split_url("https://u:p@api.github.com:443/repos;v=1?page=1&sort=name#readme").unwrap();

        assert_eq!(parts.scheme, "https");
        assert_eq!(parts.netloc, "u:p@api.github.com:443");
        assert_eq!(parts.path, "/repos");
        assert_eq!(parts.params, "v=1");
        assert_eq!(parts.query, "page=1&sort=name");
        assert_eq!(parts.fragment, "readme");
    }

    #[test]
    fn test_split_url_minimal() {
        let parts = split_url("https://example.com").unwrap();

        assert_eq!(parts.scheme, "https");
        assert_eq!(parts.netloc, "example.com");
        assert_eq!(parts.path, "");
        assert_eq!(parts.params, "");
        assert_eq!(parts.query, "");
        assert_eq!(parts.fragment, "");
    }

    #[test]
    fn test_split_relative_reference() {
        let parts = split_url("../a/b?x=1#f").unwrap();

        assert_eq!(parts.scheme, "");
        assert_eq!(parts.netloc, "");
        assert_eq!(parts.path, "../a/b");
        assert_eq!(parts.query, "x=1");
        assert_eq!(parts.fragment, "f");
    }

    #[test]
    fn test_split_scheme_rules() {
        assert_eq!(split_url("MAILTO:someone@example.com").unwrap().scheme, "mailto");
        assert_eq!(split_url("mailto:someone@example.com").unwrap().path, "someone@example.com");

        let parts = split_url("localhost:8080").unwrap();
        assert_eq!(parts.scheme, "localhost");
        assert_eq!(parts.path, "8080");

        // a scheme starts with a letter
        let parts = split_url("1a:b").unwrap();
        assert_eq!(parts.scheme, "");
        assert_eq!(parts.path, "1a:b");

        let parts = split_url("g;x=1:y").unwrap();
        assert_eq!(parts.scheme, "");
        assert_eq!(parts.path, "g");
        assert_eq!(parts.params, "x=1:y");

        // invalid scheme characters
        let parts = split_url("a b:c").unwrap();
        assert_eq!(parts.scheme, "");
        assert_eq!(parts.path, "a b:c");

        let parts = split_url(":nothing").unwrap();
        assert_eq!(parts.scheme, "");
    }

    #[test]
    fn test_split_params_only_last_segment() {
        let parts = split_url("http://h/a;x/b;y;z").unwrap();
        assert_eq!(parts.path, "/a;x/b");
        assert_eq!(parts.params, "y;z");

        let parts = split_url("http://h/a;x/b").unwrap();
        assert_eq!(parts.path, "/a;x/b");
        assert_eq!(parts.params, "");

        // schemes without params keep the semicolon in the path
        let parts = split_url("git://h/a;b").unwrap();
        assert_eq!(parts.path, "/a;b");
        assert_eq!(parts.params, "");
    }

    #[test]
    fn test_split_unbalanced_ipv6() {
        assert!(matches!(
            split_url("http://[::1/path"),
            Err(UrlError::MalformedUrl(_))
        ));
        assert!(split_url("http://[::1]:80/path").is_ok());
    }

    #[test]
    fn test_unsplit_netloc_rules() {
        let parts = UrlComponents::new("http", "", "", "", "", "");
        assert_eq!(unsplit_url(&parts), "http://");

        let parts = UrlComponents::new("http", "", "a/b", "", "", "");
        assert_eq!(unsplit_url(&parts), "http:///a/b");

        let parts = UrlComponents::new("mailto", "", "x@y.z", "", "", "");
        assert_eq!(unsplit_url(&parts), "mailto:x@y.z");

        let parts = UrlComponents::new("", "h", "a", "p", "", "");
        assert_eq!(unsplit_url(&parts), "//h/a;p");
    }

    #[test]
    fn test_split_unsplit_round_trip() {
        let urls = [
            "http://example.com",
            "https://user:pw@example.com:8443/a/b;p?q=1&r=2#frag",
            "ftp://files.example.com/pub/file.txt",
            "mailto:someone@example.com",
            "../relative/path?x=y",
            "//host/only",
            "#top",
        ];

        for url in urls {
            let parts = split_url(url).unwrap();
            assert_eq!(unsplit_url(&parts), url, "Round trip failed for: {}", url);
        }
    }

    #[test]
    fn test_split_netloc_full() {
        let auth = split_netloc("u:p@h:8080").unwrap();
        assert_eq!(auth.username(), Some("u"));
        assert_eq!(auth.password(), Some("p"));
        assert_eq!(auth.host(), Some("h"));
        assert_eq!(auth.port(), Some("8080"));
    }

    #[test]
    fn test_split_netloc_userinfo_edges() {
        let auth = split_netloc("a@b@host").unwrap();
        assert_eq!(auth.username(), Some("a@b"));
        assert_eq!(auth.host(), Some("host"));

        let auth = split_netloc("user:pa:ss@host").unwrap();
        assert_eq!(auth.username(), Some("user"));
        assert_eq!(auth.password(), Some("pa:ss"));

        let auth = split_netloc("@host").unwrap();
        assert_eq!(auth.username(), Some(""));
        assert_eq!(auth.password(), None);
    }

    #[test]
    fn test_split_netloc_empty_and_ports() {
        let auth = split_netloc("").unwrap();
        assert_eq!(auth, Authority::default());

        let auth = split_netloc("host:").unwrap();
        assert_eq!(auth.host(), Some("host"));
        assert_eq!(auth.port(), None);

        assert!(matches!(split_netloc("host:http"), Err(UrlError::InvalidPort(_))));
        assert!(matches!(split_netloc("host:65536"), Err(UrlError::InvalidPort(_))));
    }

    #[test]
    fn test_split_netloc_ipv6() {
        let auth = split_netloc("[2001:DB8::1]:443").unwrap();
        assert_eq!(auth.host(), Some("[2001:db8::1]"));
        assert_eq!(auth.port(), Some("443"));

        let auth = split_netloc("[::1]").unwrap();
        assert_eq!(auth.host(), Some("[::1]"));
        assert_eq!(auth.port(), None);
    }

    #[test]
    fn test_split_netloc_ipv6_trailing_junk() {
        for netloc in ["[::1]junk:80", "[::1]junk", "x[::1]:80", "u@[::1]80"] {
            assert!(
                matches!(split_netloc(netloc), Err(UrlError::MalformedUrl(_))),
                "Expected MalformedUrl for: {}",
                netloc
            );
        }

        let err = crate::Url::parse("http://[::1]junk:80/x").unwrap_err();
        assert!(matches!(err, UrlError::MalformedUrl(_)));

        let auth = split_netloc("[::1]:").unwrap();
        assert_eq!(auth.port(), None);
    }
}
