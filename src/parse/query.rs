//! Query string decoding and encoding.
//!
//! Both directions use `application/x-www-form-urlencoded` rules from the
//! `url` crate, so `+` and percent escapes are decoded on the way in and
//! reserved characters are escaped on the way out.

use std::borrow::Borrow;

use url::form_urlencoded;

/// Parse a query string into an ordered list of key/value pairs.
///
/// Order and duplicate keys are preserved. A piece without `=` yields an
/// empty value; empty pieces (`a=1&&b=2`) are skipped.
///
/// Blank values are always kept, unlike `parse_qsl`-style parsers that drop
/// them unless asked not to. `flag` and `flag=` both become `("flag", "")`,
/// and [`encode_query`] writes that pair back as `flag=`.
///
/// # Examples
///
/// ```
/// use urlkit::parse_query;
///
/// let pairs = parse_query("a=1&b=two+words&a=3");
/// assert_eq!(pairs, vec![
///     ("a".to_string(), "1".to_string()),
///     ("b".to_string(), "two words".to_string()),
///     ("a".to_string(), "3".to_string()),
/// ]);
/// ```
pub fn parse_query(query: &str) -> Vec<(String, String)> {
    form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect()
}

/// Encode key/value pairs into a query string, keeping their order.
///
/// # Examples
///
/// ```
/// use urlkit::encode_query;
///
/// let query = encode_query(&[("q", "rust lang"), ("page", "2")]);
/// assert_eq!(query, "q=rust+lang&page=2");
/// ```
pub fn encode_query<I, K, V>(pairs: I) -> String
where
    I: IntoIterator,
    I::Item: Borrow<(K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}
