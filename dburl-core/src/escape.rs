//! Percent-escape checks and decoding for URL components.

use percent_encoding::percent_decode_str;

use crate::error::{Component, ParseError, ParseResult};

/// Check that every `%` in `text` starts a `%XX` hex escape.
pub(crate) fn validate(component: Component, text: &str) -> ParseResult<()> {
    let bytes = text.as_bytes();
    let mut from = 0;

    while let Some(offset) = bytes[from..].iter().position(|&b| b == b'%') {
        let start = from + offset;
        match bytes.get(start + 1..start + 3) {
            Some([hi, lo]) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit() => {
                from = start + 3;
            }
            _ => {
                let escape: String = text[start..].chars().take(3).collect();
                return Err(ParseError::invalid_escape(component, escape));
            }
        }
    }

    Ok(())
}

/// Check a host as written in the input.
///
/// On top of [`validate`], escapes of ASCII bytes other than `%25` are
/// rejected: an ASCII host character has to be written literally.
pub(crate) fn validate_host(text: &str) -> ParseResult<()> {
    validate(Component::Host, text)?;

    let ascii = text
        .match_indices('%')
        .map(|(start, _)| &text[start..start + 3])
        .find(|escape| *escape != "%25" && escape.as_bytes()[1] < b'8');
    match ascii {
        Some(escape) => Err(ParseError::invalid_escape(Component::Host, escape)),
        None => Ok(()),
    }
}

/// Validate and percent-decode a component.
///
/// Bytes that do not form valid UTF-8 after decoding are replaced with U+FFFD.
pub(crate) fn decode(component: Component, text: &str) -> ParseResult<String> {
    validate(component, text)?;
    Ok(percent_decode_str(text).decode_utf8_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_plain_and_escaped() {
        assert!(validate(Component::Path, "").is_ok());
        assert!(validate(Component::Path, "dbname").is_ok());
        assert!(validate(Component::Username, "user%40corp").is_ok());
        assert!(validate(Component::Password, "%2f%2F%aB").is_ok());
    }

    #[test]
    fn test_validate_rejects_malformed() {
        let err = validate(Component::Username, "user%zz").unwrap_err();
        assert_eq!(err, ParseError::invalid_escape(Component::Username, "%zz"));

        let err = validate(Component::Path, "db%4").unwrap_err();
        assert_eq!(err, ParseError::invalid_escape(Component::Path, "%4"));

        let err = validate(Component::Host, "host%").unwrap_err();
        assert_eq!(err, ParseError::invalid_escape(Component::Host, "%"));
    }

    #[test]
    fn test_validate_multibyte_after_percent() {
        let err = validate(Component::Path, "%é").unwrap_err();
        assert_eq!(err, ParseError::invalid_escape(Component::Path, "%é"));
    }

    #[test]
    fn test_validate_host() {
        assert!(validate_host("host.test").is_ok());
        assert!(validate_host("caf%C3%A9").is_ok());
        assert!(validate_host("a%25b").is_ok());

        let err = validate_host("host%41").unwrap_err();
        assert_eq!(err, ParseError::invalid_escape(Component::Host, "%41"));

        let err = validate_host("host%2e").unwrap_err();
        assert_eq!(err, ParseError::invalid_escape(Component::Host, "%2e"));

        let err = validate_host("host%g1").unwrap_err();
        assert_eq!(err, ParseError::invalid_escape(Component::Host, "%g1"));
    }

    #[test]
    fn test_decode() {
        assert_eq!(
            decode(Component::Password, "p%40ss%3Aword").unwrap(),
            "p@ss:word"
        );
        assert_eq!(decode(Component::Path, "caf%C3%A9").unwrap(), "café");
        assert_eq!(decode(Component::Path, "%FF").unwrap(), "\u{FFFD}");
    }
}
