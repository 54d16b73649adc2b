//! The parse and unparse primitives the value types are built on.
//!
//! This module contains the string-level URL operations:
//! - Splitting a URL string into its six components and joining them back
//! - Lenient decomposition of a netloc into its authority sub-fields
//! - `application/x-www-form-urlencoded` query handling
//! - RFC 3986 reference resolution

pub mod query;
pub mod resolve;
pub mod split;

// Re-export main functionality
pub use query::{encode_query, parse_query};
pub use resolve::{remove_dot_segments, resolve};
pub use split::{split_netloc, split_url, unsplit_url};
