//! # dburl-core
//!
//! Splits a database connection URL into scheme, credentials, host, port and
//! database name.
//!
//! This crate provides:
//! - [`parse`], the connection string parser
//! - [`ConnectionDetails`], the six-field record it produces
//! - [`ParseError`], raised for input that is not valid URL syntax
//! - `tracing` integration, see [`logging`]
//!
//! ## Example
//!
//! ```rust
//! use dburl_core::ConnectionDetails;
//!
//! let details: ConnectionDetails = "postgres://username@:5432/dbname".parse().unwrap();
//! assert_eq!(details.username(), "username");
//! assert_eq!(details.host(), "");
//! assert_eq!(details.port(), "5432");
//! assert_eq!(details.name(), "dbname");
//! ```

pub mod details;
pub mod error;
mod escape;
pub mod logging;
pub mod parser;
mod raw;

pub use details::ConnectionDetails;
pub use error::{Component, ParseError, ParseResult};
pub use parser::parse;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::details::ConnectionDetails;
    pub use crate::error::{ParseError, ParseResult};
    pub use crate::parser::parse;
}
