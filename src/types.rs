//! Core data structures shared by the parse primitives and the value types.

/// The six serialized components of a URL.
///
/// This is the decomposed form produced by [`split_url`](crate::split_url) and
/// consumed by [`unsplit_url`](crate::unsplit_url). Iterating yields the
/// components in the order scheme, netloc, path, params, query, fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct UrlComponents {
    /// URL scheme, lowercased when parsed (e.g. "https")
    pub scheme: String,
    /// Authority without the leading `//` (e.g. "user:pw@example.com:8080")
    pub netloc: String,
    /// Path, without params (e.g. "/search")
    pub path: String,
    /// Legacy params after the last path segment, without the leading `;`
    pub params: String,
    /// Query string without the leading `?` (e.g. "q=test")
    pub query: String,
    /// Fragment without the leading `#` (e.g. "results")
    pub fragment: String,
}

impl UrlComponents {
    /// Create new URL components.
    pub fn new(
        scheme: impl Into<String>,
        netloc: impl Into<String>,
        path: impl Into<String>,
        params: impl Into<String>,
        query: impl Into<String>,
        fragment: impl Into<String>,
    ) -> Self {
        Self {
            scheme: scheme.into(),
            netloc: netloc.into(),
            path: path.into(),
            params: params.into(),
            query: query.into(),
            fragment: fragment.into(),
        }
    }

    /// Get a single component by selector.
    pub fn get(&self, component: Component) -> &str {
        match component {
            Component::Scheme => &self.scheme,
            Component::Netloc => &self.netloc,
            Component::Path => &self.path,
            Component::Params => &self.params,
            Component::Query => &self.query,
            Component::Fragment => &self.fragment,
        }
    }

    /// Check if an authority is present.
    pub fn has_netloc(&self) -> bool {
        !self.netloc.is_empty()
    }

    /// Check if a query string is present.
    pub fn has_query(&self) -> bool {
        !self.query.is_empty()
    }

    /// Check if a fragment is present.
    pub fn has_fragment(&self) -> bool {
        !self.fragment.is_empty()
    }
}

impl IntoIterator for UrlComponents {
    type Item = String;
    type IntoIter = std::array::IntoIter<String, 6>;

    fn into_iter(self) -> Self::IntoIter {
        [
            self.scheme,
            self.netloc,
            self.path,
            self.params,
            self.query,
            self.fragment,
        ]
        .into_iter()
    }
}

impl From<UrlComponents> for (String, String, String, String, String, String) {
    fn from(c: UrlComponents) -> Self {
        (c.scheme, c.netloc, c.path, c.params, c.query, c.fragment)
    }
}

/// Enum for selecting one of the six serialized URL components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    /// URL scheme (https, http, ftp)
    Scheme,
    /// Full authority (user:pw@host:port)
    Netloc,
    /// Path component (/api/v1/users)
    Path,
    /// Params component (type=a)
    Params,
    /// Query string (foo=bar&baz=qux)
    Query,
    /// Fragment/anchor (section1)
    Fragment,
}

impl Component {
    /// All components in serialization order.
    pub const ALL: [Component; 6] = [
        Component::Scheme,
        Component::Netloc,
        Component::Path,
        Component::Params,
        Component::Query,
        Component::Fragment,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_components_iteration_order() {
        let components = UrlComponents::new("https", "example.com", "/a", "p", "q=1", "top");
        let items: Vec<String> = components.into_iter().collect();

        assert_eq!(items, vec!["https", "example.com", "/a", "p", "q=1", "top"]);
    }

    #[test]
    fn test_components_get() {
        let components = UrlComponents::new("https", "example.com", "/a", "p", "q=1", "top");

        let values: Vec<&str> = Component::ALL.iter().map(|c| components.get(*c)).collect();
        assert_eq!(values, vec!["https", "example.com", "/a", "p", "q=1", "top"]);
    }

    #[test]
    fn test_components_empty() {
        let components = UrlComponents::default();

        assert!(!components.has_netloc());
        assert!(!components.has_query());
        assert!(!components.has_fragment());
    }

    #[test]
    fn test_components_into_tuple() {
        let components = UrlComponents::new("http", "h", "/", "", "", "f");
        let (scheme, netloc, path, params, query, fragment) = components.into();

        assert_eq!(scheme, "http");
        assert_eq!(netloc, "h");
        assert_eq!(path, "/");
        assert_eq!(params, "");
        assert_eq!(query, "");
        assert_eq!(fragment, "f");
    }
}
