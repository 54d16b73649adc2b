//! The authority (netloc) part of a URL.
//!
//! The authority is only ever stored decomposed; the combined netloc string
//! is recomputed on demand so the two views cannot drift apart.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::error::UrlError;

/// `[user[:password]@]host[:port]`, with a bracketed IPv6 literal as host.
static NETLOC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:([^:@]+)(?::([^@]+))?@)?(\[[^\]]*\]|[^:]+)(?::([0-9]+))?$")
        .unwrap_or_else(|_| unreachable!("netloc pattern is valid"))
});

/// Check that a port is a decimal number in the 0-65535 range.
pub fn validate_port(port: &str) -> Result<u16, UrlError> {
    if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
        return Err(UrlError::InvalidPort(port.to_string()));
    }
    port.parse::<u16>()
        .map_err(|_| UrlError::InvalidPort(port.to_string()))
}

/// Username, password, host and port of a URL.
///
/// Every part is optional. An absent part is left out of the netloc
/// entirely, while a present but empty one keeps its separator.
///
/// # Examples
///
/// ```
/// use urlkit::Authority;
///
/// let auth: Authority = "u:p@h:8080".parse().unwrap();
/// assert_eq!(auth.username(), Some("u"));
/// assert_eq!(auth.port(), Some("8080"));
/// assert_eq!(auth.netloc(), "u:p@h:8080");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Authority {
    username: Option<String>,
    password: Option<String>,
    host: Option<String>,
    port: Option<String>,
}

impl Authority {
    /// Authority made of just a host.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: Some(host.into()),
            ..Self::default()
        }
    }

    /// Build an authority from its parts, validating the port.
    pub fn from_parts(
        username: Option<String>,
        password: Option<String>,
        host: Option<String>,
        port: Option<String>,
    ) -> Result<Self, UrlError> {
        if let Some(port) = &port {
            validate_port(port)?;
        }
        Ok(Self::from_validated(username, password, host, port))
    }

    pub(crate) fn from_validated(
        username: Option<String>,
        password: Option<String>,
        host: Option<String>,
        port: Option<String>,
    ) -> Self {
        Self {
            username,
            password,
            host,
            port,
        }
    }

    /// User name from the userinfo, if any.
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Password from the userinfo, if any.
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    /// Host, with brackets kept around an IPv6 literal.
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// Port exactly as it was given.
    pub fn port(&self) -> Option<&str> {
        self.port.as_deref()
    }

    /// Port as a number.
    pub fn port_number(&self) -> Option<u16> {
        self.port.as_deref().and_then(|p| p.parse().ok())
    }

    /// Replace the user name. Without one the netloc has no userinfo at all.
    pub fn set_username(&mut self, username: Option<String>) {
        self.username = username;
    }

    /// Replace the password. It is only rendered alongside a user name.
    pub fn set_password(&mut self, password: Option<String>) {
        self.password = password;
    }

    /// Replace the host. No validation is done.
    pub fn set_host(&mut self, host: Option<String>) {
        self.host = host;
    }

    /// Set the port; it must be a decimal number in the 0-65535 range.
    pub fn set_port(&mut self, port: Option<&str>) -> Result<(), UrlError> {
        if let Some(port) = port {
            validate_port(port)?;
        }
        self.port = port.map(str::to_string);
        Ok(())
    }

    /// Set the port from a number; always valid.
    pub fn set_port_number(&mut self, port: Option<u16>) {
        self.port = port.map(|p| p.to_string());
    }

    /// True if a non-empty host is set.
    pub fn has_host(&self) -> bool {
        self.host.as_deref().is_some_and(|h| !h.is_empty())
    }

    /// Recompose the `[user[:password]@]host[:port]` string.
    pub fn netloc(&self) -> String {
        let mut netloc = String::new();

        if let Some(username) = &self.username {
            netloc.push_str(username);
            if let Some(password) = &self.password {
                netloc.push(':');
                netloc.push_str(password);
            }
            netloc.push('@');
        }

        netloc.push_str(self.host.as_deref().unwrap_or(""));

        if let Some(port) = &self.port {
            netloc.push(':');
            netloc.push_str(port);
        }

        netloc
    }
}

impl FromStr for Authority {
    type Err = UrlError;

    /// Decompose a netloc with the `[user[:password]@]host[:port]` pattern.
    ///
    /// Parts not present in the input are absent, not empty.
    fn from_str(netloc: &str) -> Result<Self, Self::Err> {
        let Some(caps) = NETLOC.captures(netloc) else {
            debug!(netloc, "netloc does not match the authority pattern");
            return Err(UrlError::MalformedAuthority(netloc.to_string()));
        };

        let group = |i: usize| caps.get(i).map(|m| m.as_str().to_string());
        Self::from_parts(group(1), group(2), group(3), group(4))
    }
}

impl fmt::Display for Authority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.netloc())
    }
}
