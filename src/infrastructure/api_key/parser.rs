//! Credential string parser
//!
//! A presented key has the form `<prefix>.<secret>`. The split happens on
//! the first `.`, so secrets may themselves contain dots. A key without a
//! separator, or with an empty half, is malformed and rejected before any
//! repository lookup.

use thiserror::Error;

/// Structurally invalid credential string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Malformed API key")]
pub struct MalformedKey;

/// Borrowed view of a well-formed credential
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedKey<'a> {
    pub prefix: &'a str,
    pub secret: &'a str,
}

/// Split a raw credential into its prefix and secret parts
pub fn parse_key(raw: &str) -> Result<ParsedKey<'_>, MalformedKey> {
    let (prefix, secret) = raw.split_once('.').ok_or(MalformedKey)?;

    if prefix.is_empty() || secret.is_empty() {
        return Err(MalformedKey);
    }

    Ok(ParsedKey { prefix, secret })
}
