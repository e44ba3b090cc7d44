//! Two-pass directive extraction.
//!
//! Validation and extraction are independent scans over the same input: an
//! anchored pattern decides whether the whole string is a directive manifest,
//! then an unanchored pattern collects the arguments. The property tests in
//! `tests/grammar_properties.rs` check that the two scans agree on every
//! accepted input.

use std::sync::LazyLock;

use regex::Regex;

use crate::DirectiveError;

/// Case-insensitive trigger. Its presence switches the extractor from
/// empty passthrough to strict whole-string validation.
static TRIGGER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)@include").unwrap());

/// Whole-string manifest grammar: zero or more directives, each optionally
/// surrounded by spaces, tabs, or newlines, with nothing else permitted.
/// Arguments are case-sensitive even though the trigger check is not.
static MANIFEST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[ \t\n]*@include\([a-z0-9./_]*\)[ \t\n]*)*$").unwrap());

/// Unanchored argument scan, lazy up to the first closing parenthesis.
static ARGUMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@include\((.*?)\)").unwrap());

/// Extract `@include(path)` directive arguments from a manifest string.
///
/// Input without the `@include` trigger (case-insensitive) yields an empty
/// list; that is a success, not an error. Input containing the trigger must
/// consist entirely of whitespace-separated directives, otherwise the
/// manifest is rejected.
///
/// # Errors
///
/// Returns [`DirectiveError::Malformed`] when the trigger is present but the
/// whole string does not match the directive grammar.
pub fn extract(input: &str) -> Result<Vec<String>, DirectiveError> {
    if !TRIGGER.is_match(input) {
        return Ok(Vec::new());
    }

    if !MANIFEST.is_match(input) {
        return Err(DirectiveError::Malformed);
    }

    Ok(ARGUMENT
        .captures_iter(input)
        .map(|caps| caps[1].to_owned())
        .collect())
}
