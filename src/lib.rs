//! urlkit - a structured, round-trippable URL value type
//!
//! This crate parses a URL string into its components (scheme, authority,
//! path segments, query pairs, fragment and params), lets you build a URL from
//! components, mutate it in place, canonicalize its path, join references
//! against it and turn it back into a string.
//!
//! # Features
//!
//! - **Round-trippable**: `Url::parse(s)?.to_string()` reproduces `s` for
//!   URLs in canonical form
//! - **Structured path**: paths are segment lists that know whether they are
//!   absolute, with `.`/`..` canonicalization
//! - **Ordered query**: query pairs keep their order and duplicate keys
//! - **Synced authority**: the netloc string is always derived from username,
//!   password, host and port, so the two views cannot disagree
//! - **RFC 3986 joining**: references resolve the way browsers and HTTP
//!   clients expect
//!
//! # Quick Start
//!
//! ```
//! use urlkit::{Path, Url};
//!
//! // Parse a URL into components
//! let url = Url::parse("https://user:pw@example.com:8443/a/./b/../c?x=1&y=2#top")?;
//! assert_eq!(url.host(), Some("example.com"));
//! assert_eq!(url.netloc(), "user:pw@example.com:8443");
//! assert_eq!(url.query_value("y"), Some("2"));
//!
//! // Canonicalize the path in place
//! let mut url = url;
//! url.path_mut().canonify();
//! assert_eq!(url.path().to_string(), "/a/c");
//!
//! // Build one from parts
//! let built = Url::builder().host("a.com").path("/p").query([("x", "1")]).build()?;
//! assert_eq!(built, "http://a.com/p?x=1");
//!
//! // Join a relative reference
//! let joined = Url::parse("http://a.com/x/y")?.join("../z")?;
//! assert_eq!(joined, "http://a.com/z");
//!
//! // Paths on their own
//! assert!(Path::parse("/a/b").is_absolute());
//! # Ok::<(), urlkit::UrlError>(())
//! ```
//!
//! # String Format
//!
//! ```text
//! scheme://[username[:password]@]host[:port]/path;params?query#fragment
//! ```
//!
//! The query is serialized as `application/x-www-form-urlencoded` pairs.
//!
//! # Error Handling
//!
//! All fallible functions return `Result<T, UrlError>`:
//!
//! - `MalformedUrl`: the string could not be split (e.g. unbalanced IPv6 brackets)
//! - `MalformedAuthority`: a netloc does not match `[user[:pass]@]host[:port]`
//! - `InvalidPort`: a port is not a number in the 0-65535 range

// Re-export the value types
pub use value::{Authority, Path, Url, UrlBuilder, DEFAULT_SCHEME};

// Re-export the string primitives
pub use parse::{
    encode_query, parse_query, remove_dot_segments, resolve, split_netloc, split_url,
    unsplit_url,
};

// Re-export public types
pub use error::UrlError;
pub use types::{Component, UrlComponents};
pub use value::validate_port;

// Module declarations
pub mod error;
pub mod parse;
pub mod types;
pub mod value;
