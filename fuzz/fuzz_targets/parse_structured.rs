//! Structured fuzz target for the connection string parser.
//!
//! Builds URLs from arbitrary alphanumeric parts and checks that each part
//! comes back out in the matching field.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_parse_structured
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct FuzzUrl {
    username: String,
    password: String,
    host: String,
    port: Option<u16>,
    name: String,
}

impl FuzzUrl {
    fn sanitized(&self) -> (String, String, String, String, String) {
        (
            sanitize(&self.username),
            sanitize(&self.password),
            sanitize(&self.host),
            self.port.map(|p| p.to_string()).unwrap_or_default(),
            sanitize(&self.name),
        )
    }
}

fn sanitize(s: &str) -> String {
    s.chars().filter(char::is_ascii_alphanumeric).take(32).collect()
}

fuzz_target!(|input: FuzzUrl| {
    let (username, password, host, port, name) = input.sanitized();

    let mut url = String::from("postgres://");
    if !username.is_empty() || !password.is_empty() {
        url.push_str(&username);
        if !password.is_empty() {
            url.push(':');
            url.push_str(&password);
        }
        url.push('@');
    }
    url.push_str(&host);
    if !port.is_empty() {
        url.push(':');
        url.push_str(&port);
    }
    if !name.is_empty() {
        url.push('/');
        url.push_str(&name);
    }

    let details = dburl_core::parse(&url).expect("well-formed URL must parse");
    assert_eq!(details.scheme(), "postgres");
    assert_eq!(details.username(), username);
    assert_eq!(details.password(), password);
    assert_eq!(details.host(), host);
    assert_eq!(details.port(), port);
    assert_eq!(details.name(), name);
});
