//! Logging setup for dburl.
//!
//! The parser emits `tracing` events; nothing is printed unless a subscriber
//! is installed. Applications that already configure `tracing` get dburl's
//! events for free. Otherwise [`init`] can install one, controlled by:
//!
//! - `DBURL_DEBUG=true|1|yes` - enable debug logging
//! - `DBURL_LOG_LEVEL=trace|debug|info|warn|error` - set a specific level
//! - `DBURL_LOG_FORMAT=json|pretty|compact` - output format (default: json)
//!
//! [`init`] only produces output with the `subscriber` feature on.
//!
//! Passwords and raw connection strings are never logged.

use std::env;
use std::sync::Once;

static INIT: Once = Once::new();

/// Check if debug logging is enabled via `DBURL_DEBUG`.
#[inline]
pub fn is_debug_enabled() -> bool {
    debug_flag(env::var("DBURL_DEBUG").ok().as_deref())
}

/// Get the configured log level from `DBURL_LOG_LEVEL`.
///
/// Defaults to "debug" if `DBURL_DEBUG` is enabled, otherwise "warn".
pub fn get_log_level() -> &'static str {
    log_level(
        env::var("DBURL_LOG_LEVEL").ok().as_deref(),
        is_debug_enabled(),
    )
}

/// Get the configured log format from `DBURL_LOG_FORMAT`.
pub fn get_log_format() -> &'static str {
    log_format(env::var("DBURL_LOG_FORMAT").ok().as_deref())
}

/// Install a global subscriber for dburl's events.
///
/// Subsequent calls are no-ops. Nothing is installed unless `DBURL_DEBUG` or
/// `DBURL_LOG_LEVEL` is set.
pub fn init() {
    INIT.call_once(|| {
        if !is_debug_enabled() && env::var("DBURL_LOG_LEVEL").is_err() {
            return;
        }

        #[cfg(feature = "subscriber")]
        {
            use tracing_subscriber::{EnvFilter, fmt, prelude::*};

            let level = get_log_level();
            let filter = EnvFilter::try_new(format!("dburl={level},dburl_core={level}"))
                .unwrap_or_else(|_| EnvFilter::new("warn"));

            // try_init: the host application may already own the global subscriber.
            let installed = match get_log_format() {
                "compact" => tracing_subscriber::registry()
                    .with(filter)
                    .with(fmt::layer().compact())
                    .try_init(),
                "pretty" => tracing_subscriber::registry()
                    .with(filter)
                    .with(fmt::layer().pretty())
                    .try_init(),
                _ => tracing_subscriber::registry()
                    .with(filter)
                    .with(fmt::layer().json())
                    .try_init(),
            };

            if installed.is_ok() {
                tracing::info!(
                    level = level,
                    format = get_log_format(),
                    "dburl logging initialized"
                );
            }
        }
    });
}

fn debug_flag(value: Option<&str>) -> bool {
    value.is_some_and(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"))
}

fn log_level(value: Option<&str>, debug: bool) -> &'static str {
    let fallback = if debug { "debug" } else { "warn" };
    match value.map(str::to_lowercase).as_deref() {
        Some("trace") => "trace",
        Some("debug") => "debug",
        Some("info") => "info",
        Some("warn") => "warn",
        Some("error") => "error",
        _ => fallback,
    }
}

fn log_format(value: Option<&str>) -> &'static str {
    match value.map(str::to_lowercase).as_deref() {
        Some("pretty") => "pretty",
        Some("compact") => "compact",
        _ => "json",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_flag() {
        assert!(!debug_flag(None));
        assert!(!debug_flag(Some("false")));
        assert!(!debug_flag(Some("")));
        assert!(debug_flag(Some("true")));
        assert!(debug_flag(Some("YES")));
        assert!(debug_flag(Some("1")));
    }

    #[test]
    fn test_log_level() {
        assert_eq!(log_level(None, false), "warn");
        assert_eq!(log_level(None, true), "debug");
        assert_eq!(log_level(Some("TRACE"), false), "trace");
        assert_eq!(log_level(Some("error"), true), "error");
        assert_eq!(log_level(Some("verbose"), false), "warn");
        assert_eq!(log_level(Some("verbose"), true), "debug");
    }

    #[test]
    fn test_log_format() {
        assert_eq!(log_format(None), "json");
        assert_eq!(log_format(Some("Pretty")), "pretty");
        assert_eq!(log_format(Some("compact")), "compact");
        assert_eq!(log_format(Some("xml")), "json");
    }
}
