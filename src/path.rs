//! Path validation and normalization.
//!
//! A path expression addresses a single location in a nested container using
//! freely concatenated dot and bracket segments: `.identifier`, `["key"]`,
//! `['key']`, `[0]`. A leading bare identifier (`foo.bar`, `foo[1]`) is also
//! accepted and normalized into canonical bracket-string form before the
//! grammar check.
//!
//! Validation never evaluates anything: the string is matched against an
//! anchored grammar and rejected outright when it does not fit, which is what
//! makes paths like `["foo"]=2;...` inert.
//!
//! ## Grammar
//!
//! ```text
//! path       := segment+
//! segment    := '.' identifier | '[' (quoted | integer) ']'
//! identifier := [A-Za-z_$][A-Za-z0-9_$]*
//! quoted     := '"' (chars, '"' only if escaped) '"'
//!             | "'" (chars, "'" only if escaped) "'"
//! ```
//!
//! A quote is escaped when the run of backslashes immediately before it has
//! odd length.
//!
//! ## Examples
//!
//! ```rust
//! use pathcrud::validate;
//!
//! let validated = validate("foo[1].bar[\"baz\"]").unwrap();
//! assert_eq!(validated.normalized(), "[\"foo\"][1].bar[\"baz\"]");
//!
//! assert!(validate("[abc123]").is_err());
//! ```

use crate::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Anchored path grammar. Quoted segments admit any character except an
/// unescaped closing quote; index segments are bare decimal digits.
static PATH_GRAMMAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^((\.[_a-zA-Z$][_a-zA-Z0-9$]*)|(\[(('[^'\\]*(?:\\.[^'\\]*)*')|("[^"\\]*(?:\\.[^"\\]*)*")|(\d+))\]))+$"#,
    )
    .expect("path grammar pattern is valid")
});

/// A path that has passed the grammar check, ready for tokenization.
///
/// When the raw path began with a bare identifier, [`first_part`] holds that
/// identifier exactly as written (escapes and all) and [`remainder`] holds
/// the rest of the raw path, leading delimiter included; otherwise
/// [`first_part`] is `None` and [`remainder`] is empty. In both cases
/// [`normalized`] fully matches the grammar.
///
/// [`first_part`]: ValidatedPath::first_part
/// [`remainder`]: ValidatedPath::remainder
/// [`normalized`]: ValidatedPath::normalized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedPath {
    normalized: String,
    first_part: Option<String>,
    remainder: String,
}

impl ValidatedPath {
    /// The full path in canonical (grammar-matching) form.
    #[must_use]
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// The raw leading bare identifier, if the path needed conversion.
    #[must_use]
    pub fn first_part(&self) -> Option<&str> {
        self.first_part.as_deref()
    }

    /// Everything after the leading bare identifier, delimiter included.
    /// Empty when no conversion happened or the identifier was the whole path.
    #[must_use]
    pub fn remainder(&self) -> &str {
        &self.remainder
    }
}

/// Validates a path expression, normalizing a leading bare identifier into
/// bracket-string form first.
///
/// # Examples
///
/// ```rust
/// use pathcrud::validate;
///
/// // Already-delimited paths pass through unchanged.
/// let v = validate("[\"foo\"]").unwrap();
/// assert_eq!(v.normalized(), "[\"foo\"]");
/// assert!(v.first_part().is_none());
///
/// // Bare leading identifiers are converted.
/// let v = validate("foo.bar").unwrap();
/// assert_eq!(v.normalized(), "[\"foo\"].bar");
/// assert_eq!(v.first_part(), Some("foo"));
/// assert_eq!(v.remainder(), ".bar");
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidPath`] when the path is empty or fails the
/// grammar after normalization.
pub fn validate(path: &str) -> Result<ValidatedPath> {
    if path.is_empty() {
        return Err(Error::invalid_path(path));
    }

    let validated = if path.starts_with(['.', '[']) {
        ValidatedPath {
            normalized: path.to_string(),
            first_part: None,
            remainder: String::new(),
        }
    } else {
        convert_first_path_part(path)
    };

    if !PATH_GRAMMAR.is_match(&validated.normalized) {
        return Err(Error::invalid_path(path));
    }
    Ok(validated)
}

/// Looks backward from `index` and reports whether the character there is
/// escaped: true when the run of backslashes immediately before it has odd
/// length.
///
/// Only looks backward, so a backslash that is itself escaped (`\\`) does
/// not count as an escape for the character after it. Cost is linear in the
/// run length, not the string length.
pub(crate) fn is_escaped(index: usize, input: &str) -> bool {
    let bytes = input.as_bytes();
    let mut run = 0;
    let mut i = index;
    while i > 0 && bytes[i - 1] == b'\\' {
        run += 1;
        i -= 1;
    }
    run % 2 == 1
}

/// Formats a raw first path part into bracket notation.
///
/// A part consisting entirely of decimal digits becomes a numeric index
/// segment (`[42]`); anything else is wrapped in double quotes with every
/// previously unescaped `"` escaped. Already-escaped quotes are left alone,
/// so formatting is idempotent. Single quotes are never escaped.
fn format_first_path_part(part: &str) -> String {
    if !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()) {
        return format!("[{}]", part);
    }

    let mut out = String::with_capacity(part.len() + 4);
    out.push_str("[\"");
    for (i, ch) in part.char_indices() {
        if ch == '"' && !is_escaped(i, part) {
            out.push('\\');
        }
        out.push(ch);
    }
    out.push_str("\"]");
    out
}

/// Converts the leading bare identifier of a path into bracket notation.
///
/// Scans for the first `.` or `[` preceded by an even run of backslashes;
/// everything before it is the first part, everything from the delimiter on
/// (delimiter retained) is the remainder. Escaped delimiters are kept in the
/// first part literally. Without any unescaped delimiter the whole input is
/// the first part.
fn convert_first_path_part(path: &str) -> ValidatedPath {
    let mut part = String::new();
    for (i, ch) in path.char_indices() {
        if (ch == '.' || ch == '[') && !is_escaped(i, path) {
            let remainder = &path[i..];
            return ValidatedPath {
                normalized: format!("{}{}", format_first_path_part(&part), remainder),
                first_part: Some(part),
                remainder: remainder.to_string(),
            };
        }
        part.push(ch);
    }

    ValidatedPath {
        normalized: format_first_path_part(&part),
        first_part: Some(part),
        remainder: String::new(),
    }
}
