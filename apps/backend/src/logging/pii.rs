use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"\b([A-Za-z0-9._%+-])[A-Za-z0-9._%+-]*(@[A-Za-z0-9.-]+\.[A-Za-z]+)\b").unwrap()
});

/// Credential-shaped runs: three base64url segments joined by dots.
static COMPACT_TOKEN: Lazy<Regex> = Lazy::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"[A-Za-z0-9_-]{8,}\.[A-Za-z0-9_-]{8,}\.[A-Za-z0-9_=-]{8,}").unwrap()
});

/// Any other long opaque run (base64, base64url or hex).
static OPAQUE: Lazy<Regex> = Lazy::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"\b[A-Za-z0-9+/_-]{24,}={0,2}").unwrap()
});

/// Mask emails (first character of the local part is kept) and anything that
/// looks like a bearer credential. Tokens go first so the email pass never
/// sees half of one.
pub fn redact(input: &str) -> String {
    let tokens = COMPACT_TOKEN.replace_all(input, "[REDACTED_TOKEN]");
    let opaque = OPAQUE.replace_all(&tokens, "[REDACTED_TOKEN]");
    EMAIL.replace_all(&opaque, "$1***$2").into_owned()
}

/// Display wrapper that redacts when formatted, for use in log fields.
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
