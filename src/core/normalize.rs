use crate::utils::error::{LookupError, Result};

/// Cleans one raw input line into a bare domain: trims whitespace, strips a
/// case-insensitive `http://`/`https://` scheme, then a case-insensitive
/// `www.`, then a single trailing slash. Case of the remaining host is left
/// alone. Idempotent: normalizing an already-normalized domain is a no-op.
pub fn normalize(raw: &str) -> Result<String> {
    let mut domain = raw.trim();

    for scheme in ["http://", "https://"] {
        if let Some(rest) = strip_prefix_ignore_case(domain, scheme) {
            domain = rest;
            break;
        }
    }

    if let Some(rest) = strip_prefix_ignore_case(domain, "www.") {
        domain = rest;
    }

    domain = domain.strip_suffix('/').unwrap_or(domain);

    if domain.is_empty() {
        return Err(LookupError::EmptyDomain);
    }

    Ok(domain.to_string())
}

// str::get keeps this safe on non-ASCII input: a prefix-length index that
// lands mid-character is simply not a match.
fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix).then(|| &s[prefix.len()..])
}
