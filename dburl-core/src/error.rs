//! Error types for connection string parsing.

use std::fmt;

use thiserror::Error;

/// Result type for connection string parsing.
pub type ParseResult<T> = Result<T, ParseError>;

/// The URL component a percent-escape was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    /// Userinfo before the `:`.
    Username,
    /// Userinfo after the `:`.
    Password,
    /// Host name.
    Host,
    /// Path (the database name).
    Path,
    /// Fragment after `#`.
    Fragment,
}

impl Component {
    /// Get the component name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Password => "password",
            Self::Host => "host",
            Self::Path => "path",
            Self::Fragment => "fragment",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors raised when a connection string is not valid URL syntax.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The URL parser rejected the input.
    #[error("invalid connection URL: {0}")]
    Url(#[from] url::ParseError),

    /// The input contains an ASCII control character.
    #[error("invalid control character in connection URL at byte {position}")]
    ControlCharacter {
        /// Byte offset of the offending character.
        position: usize,
    },

    /// A `%` that does not start a two-digit hex escape.
    #[error("invalid percent-escape {escape:?} in {component}")]
    InvalidEscape {
        /// Where the escape was found.
        component: Component,
        /// The malformed escape text, at most three characters.
        escape: String,
    },
}

impl ParseError {
    /// Create an invalid escape error.
    pub fn invalid_escape(component: Component, escape: impl Into<String>) -> Self {
        Self::InvalidEscape {
            component,
            escape: escape.into(),
        }
    }

    /// Check if the URL parser itself rejected the input.
    pub fn is_url_error(&self) -> bool {
        matches!(self, Self::Url(_))
    }

    /// Get the underlying URL parser error, if any.
    pub fn url_error(&self) -> Option<url::ParseError> {
        match self {
            Self::Url(e) => Some(*e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = ParseError::invalid_escape(Component::Username, "%zz");
        assert!(matches!(err, ParseError::InvalidEscape { .. }));
        assert!(!err.is_url_error());

        let err = ParseError::from(url::ParseError::InvalidPort);
        assert!(err.is_url_error());
        assert_eq!(err.url_error(), Some(url::ParseError::InvalidPort));
    }

    #[test]
    fn test_error_display() {
        let err = ParseError::invalid_escape(Component::Path, "%4");
        assert_eq!(err.to_string(), "invalid percent-escape \"%4\" in path");

        let err = ParseError::ControlCharacter { position: 3 };
        assert_eq!(
            err.to_string(),
            "invalid control character in connection URL at byte 3"
        );
    }
}
