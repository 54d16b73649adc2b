//! The URL value type.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Add;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::value::authority::Authority;
use crate::value::path::Path;
use crate::error::UrlError;
use crate::parse::{encode_query, parse_query, resolve, split_netloc, split_url, unsplit_url};
use crate::types::{Component, UrlComponents};

/// Scheme used when a URL is built from components without one.
pub const DEFAULT_SCHEME: &str = "http";

/// A URL broken into scheme, authority, path, params, query and fragment.
///
/// The string form is `scheme://[username[:password]@]host[:port]/path;params?query#fragment`.
/// Two URLs are equal when their string forms are equal.
///
/// # Examples
///
/// ```
/// use urlkit::Url;
///
/// let url = Url::parse("https://user@example.com:8443/a/b?x=1&y=2#top").unwrap();
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host(), Some("example.com"));
/// assert_eq!(url.port_number(), Some(8443));
/// assert_eq!(url.path().segments(), ["", "a", "b"]);
/// assert_eq!(url.query_value("y"), Some("2"));
/// assert!(url.is_secure());
/// assert_eq!(url.to_string(), "https://user@example.com:8443/a/b?x=1&y=2#top");
/// ```
#[derive(Clone)]
pub struct Url {
    scheme: String,
    authority: Authority,
    path: Path,
    params: String,
    query: Vec<(String, String)>,
    fragment: String,
}

impl Url {
    /// Parse a URL string, absolute or relative.
    ///
    /// The scheme and host are lowercased and the query is decoded into
    /// pairs; everything else is kept as written. A string without a scheme
    /// gets an empty scheme, not the builder default.
    ///
    /// # Errors
    ///
    /// [`UrlError::MalformedUrl`] if the string cannot be split and
    /// [`UrlError::InvalidPort`] if the port is not a valid number.
    pub fn parse(input: &str) -> Result<Self, UrlError> {
        let parts = split_url(input)?;
        let authority = split_netloc(&parts.netloc)?;
        let query = parse_query(&parts.query);

        trace!(input, pairs = query.len(), "parsed url");

        Ok(Self {
            scheme: parts.scheme,
            authority,
            path: Path::parse(&parts.path),
            params: parts.params,
            query,
            fragment: parts.fragment,
        })
    }

    /// Start building a URL from components.
    pub fn builder() -> UrlBuilder {
        UrlBuilder::default()
    }

    /// Scheme without the `:`; empty for a scheme-less reference.
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Replace the scheme. It is stored as given.
    pub fn set_scheme(&mut self, scheme: impl Into<String>) {
        self.scheme = scheme.into();
    }

    /// The decomposed authority.
    pub fn authority(&self) -> &Authority {
        &self.authority
    }

    /// The authority recomposed as `[username[:password]@]host[:port]`.
    pub fn netloc(&self) -> String {
        self.authority.netloc()
    }

    /// Replace the authority by decomposing `netloc`.
    ///
    /// On error the URL is left unchanged.
    pub fn set_netloc(&mut self, netloc: &str) -> Result<(), UrlError> {
        self.authority = netloc.parse()?;
        Ok(())
    }

    /// User name from the authority.
    pub fn username(&self) -> Option<&str> {
        self.authority.username()
    }

    /// Replace the user name in the authority.
    pub fn set_username(&mut self, username: Option<&str>) {
        self.authority.set_username(username.map(str::to_string));
    }

    /// Password from the authority.
    pub fn password(&self) -> Option<&str> {
        self.authority.password()
    }

    /// Replace the password. It only shows up when a user name is set.
    pub fn set_password(&mut self, password: Option<&str>) {
        self.authority.set_password(password.map(str::to_string));
    }

    /// Host from the authority; lowercased when parsed from a string.
    pub fn host(&self) -> Option<&str> {
        self.authority.host()
    }

    /// Replace the host. `None` makes the URL relative.
    pub fn set_host(&mut self, host: Option<&str>) {
        self.authority.set_host(host.map(str::to_string));
    }

    /// Port as written in the URL.
    pub fn port(&self) -> Option<&str> {
        self.authority.port()
    }

    /// Port as a number.
    pub fn port_number(&self) -> Option<u16> {
        self.authority.port_number()
    }

    /// Set the port from text, rejecting anything but 0-65535.
    pub fn set_port(&mut self, port: Option<&str>) -> Result<(), UrlError> {
        self.authority.set_port(port)
    }

    /// Set the port from a number.
    pub fn set_port_number(&mut self, port: Option<u16>) {
        self.authority.set_port_number(port);
    }

    /// The path segments.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Mutable access to the path, e.g. to canonify it in place.
    pub fn path_mut(&mut self) -> &mut Path {
        &mut self.path
    }

    /// Replace the path; strings are split on `/`, segment lists are kept as is.
    pub fn set_path(&mut self, path: impl Into<Path>) {
        self.path = path.into();
    }

    /// Parameters of the last path segment, without the `;`.
    pub fn params(&self) -> &str {
        &self.params
    }

    /// Replace the parameters.
    pub fn set_params(&mut self, params: impl Into<String>) {
        self.params = params.into();
    }

    /// Query pairs in their original order.
    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    /// Mutable access to the query pairs.
    pub fn query_mut(&mut self) -> &mut Vec<(String, String)> {
        &mut self.query
    }

    /// Replace all query pairs.
    pub fn set_query<I, K, V>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.query = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
    }

    /// Add a pair after the existing ones.
    pub fn append_query_pair(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.query.push((key.into(), value.into()));
    }

    /// The query pairs encoded as `key=value&key2=value2`.
    pub fn query_string(&self) -> String {
        encode_query(&self.query)
    }

    /// First value for `key`.
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// All values for `key`, in order.
    pub fn query_values(&self, key: &str) -> Vec<&str> {
        self.query
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// True if there is at least one query pair.
    pub fn has_query(&self) -> bool {
        !self.query.is_empty()
    }

    /// Fragment without the `#`.
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    /// Replace the fragment; an empty string removes it.
    pub fn set_fragment(&mut self, fragment: impl Into<String>) {
        self.fragment = fragment.into();
    }

    /// True if the fragment is non-empty.
    pub fn has_fragment(&self) -> bool {
        !self.fragment.is_empty()
    }

    /// Copy of this URL with the fragment removed.
    pub fn without_fragment(&self) -> Self {
        let mut url = self.clone();
        url.fragment.clear();
        url
    }

    /// True if the URL has a non-empty host.
    pub fn is_absolute(&self) -> bool {
        self.authority.has_host()
    }

    /// True if the URL has no host.
    pub fn is_relative(&self) -> bool {
        !self.is_absolute()
    }

    /// True for the `https` scheme, in any case.
    pub fn is_secure(&self) -> bool {
        self.scheme.eq_ignore_ascii_case("https")
    }

    /// The six serialized components, in the shape [`unsplit_url`] takes.
    pub fn components(&self) -> UrlComponents {
        UrlComponents::new(
            self.scheme.clone(),
            self.netloc(),
            self.path.to_string(),
            self.params.clone(),
            self.query_string(),
            self.fragment.clone(),
        )
    }

    /// One serialized component.
    pub fn component(&self, component: Component) -> String {
        match component {
            Component::Scheme => self.scheme.clone(),
            Component::Netloc => self.netloc(),
            Component::Path => self.path.to_string(),
            Component::Params => self.params.clone(),
            Component::Query => self.query_string(),
            Component::Fragment => self.fragment.clone(),
        }
    }

    /// Resolve `reference` against this URL.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlkit::Url;
    ///
    /// let base = Url::parse("http://a.com/x/y").unwrap();
    /// assert_eq!(base.join("../z").unwrap(), "http://a.com/z");
    /// assert_eq!(base.join("z?q=1").unwrap(), "http://a.com/x/z?q=1");
    /// ```
    pub fn join(&self, reference: impl AsRef<str>) -> Result<Url, UrlError> {
        let base = self.to_string();
        let resolved = resolve(&base, reference.as_ref());
        debug!(base = %base, reference = reference.as_ref(), resolved = %resolved, "joined url");
        Url::parse(&resolved)
    }

    /// Convert into a [`url::Url`], which requires an absolute URL.
    pub fn to_url(&self) -> Result<url::Url, UrlError> {
        Ok(url::Url::parse(&self.to_string())?)
    }
}

impl Default for Url {
    fn default() -> Self {
        Self {
            scheme: DEFAULT_SCHEME.to_string(),
            authority: Authority::default(),
            path: Path::new(),
            params: String::new(),
            query: Vec::new(),
            fragment: String::new(),
        }
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&unsplit_url(&self.components()))
    }
}

impl fmt::Debug for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Url").field(&self.to_string()).finish()
    }
}

impl FromStr for Url {
    type Err = UrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Url::parse(s)
    }
}

impl TryFrom<&str> for Url {
    type Error = UrlError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Url::parse(s)
    }
}

impl TryFrom<&url::Url> for Url {
    type Error = UrlError;

    fn try_from(url: &url::Url) -> Result<Self, Self::Error> {
        Url::parse(url.as_str())
    }
}

impl IntoIterator for &Url {
    type Item = String;
    type IntoIter = std::array::IntoIter<String, 6>;

    /// Iterate over scheme, netloc, path, params, query and fragment.
    fn into_iter(self) -> Self::IntoIter {
        self.components().into_iter()
    }
}

impl PartialEq for Url {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

impl Eq for Url {}

impl PartialEq<str> for Url {
    fn eq(&self, other: &str) -> bool {
        self.to_string() == other
    }
}

impl PartialEq<&str> for Url {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

impl Hash for Url {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl Add<&Url> for &Url {
    type Output = Result<Url, UrlError>;

    fn add(self, rhs: &Url) -> Self::Output {
        self.join(rhs.to_string())
    }
}

impl Add<&Url> for Url {
    type Output = Result<Url, UrlError>;

    fn add(self, rhs: &Url) -> Self::Output {
        self.join(rhs.to_string())
    }
}

impl Add<&str> for &Url {
    type Output = Result<Url, UrlError>;

    fn add(self, rhs: &str) -> Self::Output {
        self.join(rhs)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Url {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Url {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Url::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Builds a [`Url`] from individual components.
///
/// A non-empty netloc takes precedence over username, password, host and
/// port given separately. The scheme defaults to `http`.
///
/// # Examples
///
/// ```
/// use urlkit::Url;
///
/// let url = Url::builder()
///     .host("a.com")
///     .path("/p")
///     .query([("x", "1")])
///     .build()
///     .unwrap();
/// assert_eq!(url, Url::parse("http://a.com/p?x=1").unwrap());
/// ```
#[derive(Debug, Clone, Default)]
pub struct UrlBuilder {
    scheme: Option<String>,
    netloc: Option<String>,
    username: Option<String>,
    password: Option<String>,
    host: Option<String>,
    port: Option<String>,
    path: Path,
    params: String,
    query: Vec<(String, String)>,
    fragment: String,
}

impl UrlBuilder {
    pub fn scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = Some(scheme.into());
        self
    }

    pub fn netloc(mut self, netloc: impl Into<String>) -> Self {
        self.netloc = Some(netloc.into());
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Port as a string; validated by [`build`](Self::build).
    pub fn port(mut self, port: impl Into<String>) -> Self {
        self.port = Some(port.into());
        self
    }

    pub fn port_number(mut self, port: u16) -> Self {
        self.port = Some(port.to_string());
        self
    }

    pub fn path(mut self, path: impl Into<Path>) -> Self {
        self.path = path.into();
        self
    }

    pub fn params(mut self, params: impl Into<String>) -> Self {
        self.params = params.into();
        self
    }

    pub fn query<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.query = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self
    }

    pub fn query_pair(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn fragment(mut self, fragment: impl Into<String>) -> Self {
        self.fragment = fragment.into();
        self
    }

    /// Assemble the URL.
    ///
    /// # Errors
    ///
    /// [`UrlError::MalformedAuthority`] if a netloc was given that does not
    /// decompose, [`UrlError::InvalidPort`] if the port is not a valid number.
    pub fn build(self) -> Result<Url, UrlError> {
        let authority = match self.netloc.filter(|n| !n.is_empty()) {
            Some(netloc) => netloc.parse::<Authority>()?,
            None => Authority::from_parts(self.username, self.password, self.host, self.port)?,
        };

        Ok(Url {
            scheme: self.scheme.unwrap_or_else(|| DEFAULT_SCHEME.to_string()),
            authority,
            path: self.path,
            params: self.params,
            query: self.query,
            fragment: self.fragment,
        })
    }
}
