//! Line patterns for function headers and call sites.
//!
//! Matching is deliberately shallow: a line either looks like a header or a
//! call/invoke, and the first `@name` token after the keyword wins.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::text_pos::utf16_len;

static DEFINE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^(define[^@]+)(@[-a-zA-Z$._0-9"]+)\(.+\{"#).expect("define pattern compiles"));

static CALL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^([^=]*=?\s*call[^@]+)(@[-a-zA-Z$._0-9"]+)\(.+"#).expect("call pattern compiles"));

static INVOKE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^([^=]*=?\s*invoke[^@]+)(@[-a-zA-Z$._0-9"]+)\(.+"#).expect("invoke pattern compiles"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    Call,
    Invoke,
}

/// A matched line split at the `@name` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameMatch<'a> {
    /// Everything before the name (capture group 1).
    pub prefix: &'a str,
    /// The `@name` token itself (capture group 2).
    pub name: &'a str,
}

impl NameMatch<'_> {
    /// UTF-16 start and end columns of the name token on its line.
    pub fn name_columns(&self) -> (u32, u32) {
        let start = utf16_len(self.prefix);
        (start, start + utf16_len(self.name))
    }
}

/// Match a `define ... @name(...) {` header line.
pub fn match_define(line: &str) -> Option<NameMatch<'_>> {
    captures_name(&DEFINE_PATTERN, line)
}

/// Match a `call` line, falling back to `invoke`.
pub fn match_reference(line: &str) -> Option<(ReferenceKind, NameMatch<'_>)> {
    if let Some(found) = captures_name(&CALL_PATTERN, line) {
        return Some((ReferenceKind::Call, found));
    }
    captures_name(&INVOKE_PATTERN, line).map(|found| (ReferenceKind::Invoke, found))
}

fn captures_name<'a>(
    pattern: &Regex,
    line: &'a str,
) -> Option<NameMatch<'a>> {
    let captures = pattern.captures(line)?;
    Some(NameMatch {
        prefix: captures.get(1)?.as_str(),
        name: captures.get(2)?.as_str(),
    })
}

#[cfg(test)]
#[path = "../../tests/src/symbols/patterns_tests.rs"]
mod tests;
