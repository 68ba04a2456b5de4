//! Component text exactly as written in a connection string.
//!
//! The URL parser normalizes what it stores: ports become integers, dot
//! segments are removed from paths, IPv6 literals are re-serialized. The
//! parser reads those fields from here instead, and uses the URL parser only
//! to accept or reject the input.

use std::ops::Range;

/// Stands in for an empty host so the authority still parses.
///
/// A plain ASCII name under the reserved `.invalid` TLD: it passes IDNA and
/// the domain checks of special schemes unchanged.
pub(crate) const PLACEHOLDER_HOST: &str = "empty-host.invalid";

/// Stands in for a numeric port the URL parser cannot store.
pub(crate) const PLACEHOLDER_PORT: &str = "1";

/// Byte ranges of the components of a connection string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawUrl<'a> {
    input: &'a str,
    /// `scheme:` followed by something other than `/`, e.g. `postgres:dbname`.
    opaque: bool,
    /// Host including IPv6 brackets. `Some` iff the input has an authority.
    host: Option<Range<usize>>,
    /// Port text after the `:`, if a `:` follows the host.
    port: Option<Range<usize>>,
    /// Path up to `?` or `#`.
    path: Range<usize>,
}

impl<'a> RawUrl<'a> {
    /// Split `input` into its components.
    pub(crate) fn split(input: &'a str) -> Self {
        let rest_start = scheme_end(input).map_or(0, |colon| colon + 1);
        let rest = &input[rest_start..];
        let opaque = rest_start > 0 && !rest.starts_with('/');

        let (host, port, path_start) = match rest.strip_prefix("//") {
            Some(after) => {
                let start = rest_start + 2;
                let end = start + after.find(['/', '?', '#']).unwrap_or(after.len());
                let (host, port) = split_authority(input, start..end);
                (Some(host), port, end)
            }
            None => (None, None, rest_start),
        };

        let path_end = path_start
            + input[path_start..]
                .find(['?', '#'])
                .unwrap_or(input.len() - path_start);

        Self {
            input,
            opaque,
            host,
            port,
            path: path_start..path_end,
        }
    }

    pub(crate) fn input(&self) -> &'a str {
        self.input
    }

    pub(crate) fn is_opaque(&self) -> bool {
        self.opaque
    }

    pub(crate) fn has_authority(&self) -> bool {
        self.host.is_some()
    }

    /// Host text without IPv6 brackets.
    pub(crate) fn host(&self) -> Option<&'a str> {
        let host = &self.input[self.host.clone()?];
        Some(
            host.strip_prefix('[')
                .and_then(|h| h.strip_suffix(']'))
                .unwrap_or(host),
        )
    }

    /// Port text, empty when absent.
    pub(crate) fn port(&self) -> &'a str {
        self.port.clone().map_or("", |port| &self.input[port])
    }

    pub(crate) fn path(&self) -> &'a str {
        &self.input[self.path.clone()]
    }

    /// An authority is present but its host is empty.
    pub(crate) fn host_is_empty(&self) -> bool {
        self.host.as_ref().is_some_and(Range::is_empty)
    }

    /// The port is all digits, so only its value can be out of range.
    pub(crate) fn port_is_numeric(&self) -> bool {
        let port = self.port();
        !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit())
    }

    /// The input with [`PLACEHOLDER_HOST`] and/or [`PLACEHOLDER_PORT`] spliced in.
    ///
    /// The host is only replaced when empty, the port only when numeric.
    pub(crate) fn patched(&self, fill_host: bool, fill_port: bool) -> String {
        let mut out = String::with_capacity(self.input.len() + PLACEHOLDER_HOST.len());
        let mut copied = 0;

        if let Some(host) = self.host.clone().filter(|_| fill_host && self.host_is_empty()) {
            out.push_str(&self.input[copied..host.start]);
            out.push_str(PLACEHOLDER_HOST);
            copied = host.end;
        }
        if let Some(port) = self.port.clone().filter(|_| fill_port && self.port_is_numeric()) {
            out.push_str(&self.input[copied..port.start]);
            out.push_str(PLACEHOLDER_PORT);
            copied = port.end;
        }

        out.push_str(&self.input[copied..]);
        out
    }
}

/// Byte offset of the `:` ending a syntactically valid scheme.
fn scheme_end(input: &str) -> Option<usize> {
    let colon = input.find(':')?;
    let mut chars = input[..colon].chars();
    let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    valid.then_some(colon)
}

/// Split `userinfo@host:port` into host and port ranges.
fn split_authority(input: &str, authority: Range<usize>) -> (Range<usize>, Option<Range<usize>>) {
    let text = &input[authority.clone()];
    let host_start = authority.start + text.rfind('@').map_or(0, |at| at + 1);
    let host_port = &input[host_start..authority.end];

    let host_len = if host_port.starts_with('[') {
        host_port.find(']').map_or(host_port.len(), |close| close + 1)
    } else {
        host_port.find(':').unwrap_or(host_port.len())
    };
    let host_end = host_start + host_len;

    let port = input[host_end..authority.end]
        .starts_with(':')
        .then(|| host_end + 1..authority.end);
    (host_start..host_end, port)
}
