//! The URL value types.
//!
//! This module contains the structured representations:
//! - `Path`: ordered path segments with canonicalization
//! - `Authority`: username, password, host and port behind a netloc
//! - `Url`: the aggregate, with parsing, building, joining and serialization

pub mod authority;
pub mod path;
pub mod url;

// Re-export main functionality
pub use authority::{validate_port, Authority};
pub use path::Path;
pub use self::url::{Url, UrlBuilder, DEFAULT_SCHEME};
