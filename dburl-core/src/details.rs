//! The parsed connection record.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Connection parameters extracted from a connection URL.
///
/// Every field is always present. A component missing from the URL is an
/// empty string, so "absent" and "present but empty" are indistinguishable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConnectionDetails {
    pub(crate) scheme: String,
    pub(crate) username: String,
    pub(crate) password: String,
    pub(crate) host: String,
    pub(crate) port: String,
    pub(crate) name: String,
}

impl ConnectionDetails {
    /// Create a record from its six fields.
    pub fn new(
        scheme: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        host: impl Into<String>,
        port: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            scheme: scheme.into(),
            username: username.into(),
            password: password.into(),
            host: host.into(),
            port: port.into(),
            name: name.into(),
        }
    }

    /// Get the URL scheme, e.g. `postgres`.
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Get the username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Get the password.
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Get the host name or IP literal, without IPv6 brackets.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Get the port as written in the URL.
    pub fn port(&self) -> &str {
        &self.port
    }

    /// Get the database name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check if every field is empty.
    pub fn is_empty(&self) -> bool {
        self.scheme.is_empty()
            && self.username.is_empty()
            && self.password.is_empty()
            && self.host.is_empty()
            && self.port.is_empty()
            && self.name.is_empty()
    }

    /// Check if a username or password was given.
    pub fn has_credentials(&self) -> bool {
        !self.username.is_empty() || !self.password.is_empty()
    }

    /// Consume the record, returning `(scheme, username, password, host, port, name)`.
    pub fn into_parts(self) -> (String, String, String, String, String, String) {
        (
            self.scheme,
            self.username,
            self.password,
            self.host,
            self.port,
            self.name,
        )
    }
}

/// Renders the record URL-style with the password masked.
impl fmt::Display for ConnectionDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.scheme.is_empty() {
            write!(f, "{}:", self.scheme)?;
        }
        f.write_str("//")?;

        if self.has_credentials() {
            f.write_str(&self.username)?;
            if !self.password.is_empty() {
                f.write_str(":***")?;
            }
            f.write_str("@")?;
        }

        if self.host.contains(':') {
            write!(f, "[{}]", self.host)?;
        } else {
            f.write_str(&self.host)?;
        }
        if !self.port.is_empty() {
            write!(f, ":{}", self.port)?;
        }

        if !self.name.is_empty() {
            write!(f, "/{}", self.name)?;
        }
        Ok(())
    }
}

impl FromStr for ConnectionDetails {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parser::parse(s)
    }
}

impl TryFrom<&str> for ConnectionDetails {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        crate::parser::parse(value)
    }
}
