//! Include directive extraction.
//!
//! Parses `@include(path)` directives from document manifest strings. A
//! manifest is well-formed when the whole string consists of nothing but
//! whitespace-separated `@include(...)` directives; extraction returns the
//! directive arguments in their order of appearance.
//!
//! The referenced paths are not resolved or read here. Consumers decide what
//! to do with them (typically feeding them into a document build pipeline).
//!
//! # Example
//!
//! ```
//! let paths = docinc_directives::extract("@include(a.md) @include(sub/b.md)").unwrap();
//! assert_eq!(paths, ["a.md", "sub/b.md"]);
//! ```

mod extract;

pub use extract::extract;

/// Directive parsing error.
#[derive(Debug, thiserror::Error)]
pub enum DirectiveError {
    /// Input contains `@include` but is not a pure directive manifest.
    #[error("Illformed string")]
    Malformed,
}
