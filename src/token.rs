//! Path tokenization.
//!
//! Turns a [`ValidatedPath`] into the ordered accessor sequence the
//! traversal engine walks. The scan position is a local variable threaded
//! through the tokenizer, so concurrent calls never share cursor state.
//!
//! Quoted bracket segments are emitted with only the surrounding quote
//! characters stripped; interior escape sequences stay exactly as written,
//! so the key for `["a\"b"]` is `a\"b`, backslash included. This mirrors the
//! behavior path consumers have always depended on and is kept deliberately.
//!
//! ## Examples
//!
//! ```rust
//! use pathcrud::{parse, validate, Accessor};
//!
//! let parsed = parse(&validate("foo[1].bar").unwrap()).unwrap();
//! assert_eq!(
//!     parsed.segments(),
//!     &[
//!         Accessor::Key("foo".to_string()),
//!         Accessor::Index(1),
//!         Accessor::Key("bar".to_string()),
//!     ]
//! );
//! ```

use crate::path::is_escaped;
use crate::{Error, Result, ValidatedPath};

/// One resolved step of a path: a string key into an object or an integer
/// index into an array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Accessor {
    Key(String),
    Index(usize),
}

/// A non-empty ordered accessor sequence, root to leaf.
///
/// Produced by [`parse`]; the constructor guarantees at least one accessor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPath(Vec<Accessor>);

impl ParsedPath {
    /// The accessors in root-to-leaf order. Never empty.
    #[must_use]
    pub fn segments(&self) -> &[Accessor] {
        &self.0
    }

    /// Splits into the terminal accessor and the intermediate ones.
    pub(crate) fn split_last(&self) -> (&Accessor, &[Accessor]) {
        // Non-emptiness is a constructor invariant; violating it is a bug.
        self.0
            .split_last()
            .expect("ParsedPath is never empty")
    }
}

impl<'a> IntoIterator for &'a ParsedPath {
    type Item = &'a Accessor;
    type IntoIter = std::slice::Iter<'a, Accessor>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Tokenizes a validated path into its accessor sequence.
///
/// When the validated path carried a converted first part, that part is
/// emitted verbatim as the leading key and only the remainder is scanned;
/// otherwise the whole normalized path is scanned from the start.
///
/// # Errors
///
/// Returns [`Error::MalformedSegment`] when a token matches none of the
/// three segment forms. After a successful [`validate`](crate::validate)
/// this is unreachable, except for bracket indices that overflow `usize`;
/// it exists as a check on that internal invariant, not as user-input
/// handling.
pub fn parse(validated: &ValidatedPath) -> Result<ParsedPath> {
    let mut segments = Vec::new();

    let rest = match validated.first_part() {
        Some(first) => {
            segments.push(Accessor::Key(first.to_string()));
            validated.remainder()
        }
        None => validated.normalized(),
    };

    let mut pos = 0;
    while pos < rest.len() {
        let (accessor, next) = scan_segment(rest, pos)?;
        segments.push(accessor);
        pos = next;
    }

    if segments.is_empty() {
        return Err(Error::malformed_segment(rest));
    }
    Ok(ParsedPath(segments))
}

/// Scans one segment starting at `pos`, returning the accessor and the
/// position just past it.
fn scan_segment(input: &str, pos: usize) -> Result<(Accessor, usize)> {
    let bytes = input.as_bytes();
    match bytes[pos] {
        b'.' => scan_identifier(input, pos),
        b'[' => match bytes.get(pos + 1) {
            Some(&quote @ (b'"' | b'\'')) => scan_quoted(input, pos, quote),
            Some(b) if b.is_ascii_digit() => scan_index(input, pos),
            _ => Err(Error::malformed_segment(&input[pos..])),
        },
        _ => Err(Error::malformed_segment(&input[pos..])),
    }
}

fn scan_identifier(input: &str, pos: usize) -> Result<(Accessor, usize)> {
    let bytes = input.as_bytes();
    let start = pos + 1;
    match bytes.get(start) {
        Some(b) if b.is_ascii_alphabetic() || *b == b'_' || *b == b'$' => {}
        _ => return Err(Error::malformed_segment(&input[pos..])),
    }

    let mut end = start + 1;
    while end < bytes.len()
        && (bytes[end].is_ascii_alphanumeric() || bytes[end] == b'_' || bytes[end] == b'$')
    {
        end += 1;
    }
    Ok((Accessor::Key(input[start..end].to_string()), end))
}

fn scan_quoted(input: &str, pos: usize, quote: u8) -> Result<(Accessor, usize)> {
    let bytes = input.as_bytes();
    // Find the first closing quote whose preceding backslash run is even.
    // Quote bytes are ASCII, so a byte scan cannot land inside a multi-byte
    // character.
    let mut close = pos + 2;
    loop {
        match bytes.get(close) {
            Some(b) if *b == quote && !is_escaped(close, input) => break,
            Some(_) => close += 1,
            None => return Err(Error::malformed_segment(&input[pos..])),
        }
    }

    if bytes.get(close + 1) != Some(&b']') {
        return Err(Error::malformed_segment(&input[pos..]));
    }
    // Delimiters stripped, interior escapes preserved as written.
    Ok((Accessor::Key(input[pos + 2..close].to_string()), close + 2))
}

fn scan_index(input: &str, pos: usize) -> Result<(Accessor, usize)> {
    let bytes = input.as_bytes();
    let start = pos + 1;
    let mut end = start;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }

    if bytes.get(end) != Some(&b']') {
        return Err(Error::malformed_segment(&input[pos..]));
    }
    let index: usize = input[start..end]
        .parse()
        .map_err(|_| Error::malformed_segment(&input[pos..]))?;
    Ok((Accessor::Index(index), end + 1))
}
