//! Reference resolution as described in RFC 3986 section 5.

use once_cell::sync::Lazy;
use regex::Regex;

/// RFC 3986 Appendix B: splits any reference into its five parts.
///
/// The scheme group follows the section 3.1 grammar, the same rule
/// `split_url` applies, so `g;x=1:y` stays a relative path.
static REFERENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^(?:([A-Za-z][A-Za-z0-9+.-]*):)?(?://([^/?#]*))?([^?#]*)(?:\?([^#]*))?(?:#(.*))?$")
        .unwrap_or_else(|_| unreachable!("reference pattern is valid"))
});

/// A reference split into its RFC 3986 components.
///
/// `None` and `Some("")` differ: `http://h?` has an empty query while
/// `http://h` has none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Reference<'a> {
    scheme: Option<&'a str>,
    authority: Option<&'a str>,
    path: &'a str,
    query: Option<&'a str>,
    fragment: Option<&'a str>,
}

impl<'a> Reference<'a> {
    fn split(input: &'a str) -> Self {
        let Some(caps) = REFERENCE.captures(input) else {
            return Self {
                scheme: None,
                authority: None,
                path: input,
                query: None,
                fragment: None,
            };
        };

        Self {
            scheme: caps.get(1).map(|m| m.as_str()),
            authority: caps.get(2).map(|m| m.as_str()),
            path: caps.get(3).map_or("", |m| m.as_str()),
            query: caps.get(4).map(|m| m.as_str()),
            fragment: caps.get(5).map(|m| m.as_str()),
        }
    }
}

/// Resolve `reference` against `base`.
///
/// A reference with a scheme wins outright; otherwise the authority, path and
/// query are inherited from `base` as far as the reference leaves them out,
/// and dot segments are removed from the merged path.
///
/// # Examples
///
/// ```
/// use urlkit::resolve;
///
/// assert_eq!(resolve("http://a/b/c/d;p?q", "../g"), "http://a/b/g");
/// assert_eq!(resolve("http://a/b/c/d;p?q", "?y"), "http://a/b/c/d;p?y");
/// assert_eq!(resolve("http://a/b/c/d;p?q", "https://x/y"), "https://x/y");
/// ```
pub fn resolve(base: &str, reference: &str) -> String {
    let b = Reference::split(base);
    let r = Reference::split(reference);

    let (scheme, authority, path, query) = if r.scheme.is_some() {
        (r.scheme, r.authority, remove_dot_segments(r.path), r.query)
    } else if r.authority.is_some() {
        (b.scheme, r.authority, remove_dot_segments(r.path), r.query)
    } else if r.path.is_empty() {
        (b.scheme, b.authority, b.path.to_string(), r.query.or(b.query))
    } else if r.path.starts_with('/') {
        (b.scheme, b.authority, remove_dot_segments(r.path), r.query)
    } else {
        (b.scheme, b.authority, remove_dot_segments(&merge(&b, r.path)), r.query)
    };

    let mut target = String::with_capacity(base.len() + reference.len());
    if let Some(scheme) = scheme {
        target.push_str(scheme);
        target.push(':');
    }
    if let Some(authority) = authority {
        target.push_str("//");
        target.push_str(authority);
    }
    target.push_str(&path);
    if let Some(query) = query {
        target.push('?');
        target.push_str(query);
    }
    if let Some(fragment) = r.fragment {
        target.push('#');
        target.push_str(fragment);
    }
    target
}

/// Merge a relative-path reference with the base path (RFC 3986 5.2.3).
fn merge(base: &Reference<'_>, path: &str) -> String {
    if base.authority.is_some() && base.path.is_empty() {
        return format!("/{path}");
    }

    match base.path.rfind('/') {
        Some(i) => format!("{}{}", &base.path[..=i], path),
        None => path.to_string(),
    }
}

/// Remove `.` and `..` segments from a path (RFC 3986 5.2.4).
///
/// `..` above the root is dropped silently.
///
/// # Examples
///
/// ```
/// use urlkit::remove_dot_segments;
///
/// assert_eq!(remove_dot_segments("/a/b/c/./../../g"), "/a/g");
/// assert_eq!(remove_dot_segments("mid/content=5/../6"), "mid/6");
/// ```
pub fn remove_dot_segments(path: &str) -> String {
    let mut input = path;
    let mut output = String::with_capacity(path.len());

    while !input.is_empty() {
        if let Some(rest) = input.strip_prefix("../") {
            input = rest;
        } else if let Some(rest) = input.strip_prefix("./") {
            input = rest;
        } else if input.starts_with("/./") {
            input = &input[2..];
        } else if input == "/." {
            input = "/";
        } else if input.starts_with("/../") {
            input = &input[3..];
            pop_segment(&mut output);
        } else if input == "/.." {
            input = "/";
            pop_segment(&mut output);
        } else if input == "." || input == ".." {
            input = "";
        } else {
            let skip = usize::from(input.starts_with('/'));
            let end = input[skip..].find('/').map_or(input.len(), |i| i + skip);
            output.push_str(&input[..end]);
            input = &input[end..];
        }
    }

    output
}

fn pop_segment(output: &mut String) {
    match output.rfind('/') {
        Some(i) => output.truncate(i),
        None => output.clear(),
    }
}
