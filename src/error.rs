//! Error types for path validation, tokenization, and traversal.
//!
//! ## Error Categories
//!
//! - **Path errors**: the path string itself is rejected ([`Error::InvalidPath`],
//!   [`Error::MalformedSegment`])
//! - **Traversal errors**: the path is valid but does not fit the container
//!   ([`Error::NotFound`], [`Error::PathNotFound`], [`Error::AlreadyExists`],
//!   [`Error::TypeMismatch`])
//!
//! All errors are synchronous and surfaced immediately; nothing is retried.
//! The only intentional error swallowing in the crate is [`insert`]'s
//! existence probe and [`get_or`]'s default-value fallback.
//!
//! [`insert`]: crate::insert
//! [`get_or`]: crate::get_or
//!
//! ## Examples
//!
//! ```rust
//! use pathcrud::{get, nested, Error};
//!
//! let container = nested!({});
//! match get(&container, "foo") {
//!     Err(Error::NotFound { path }) => assert_eq!(path, "foo"),
//!     other => panic!("expected NotFound, got {:?}", other),
//! }
//! ```

use thiserror::Error;

/// Represents all possible errors produced by path operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input path is empty or fails the path grammar.
    #[error("{path:?} is not a valid path")]
    InvalidPath { path: String },

    /// The tokenizer saw a token matching none of the segment forms.
    ///
    /// This is a defensive check on an internal invariant: it is unreachable
    /// for any path accepted by [`validate`](crate::validate), except for
    /// bracket indices too large for `usize`.
    #[error("malformed path segment: {segment:?}")]
    MalformedSegment { segment: String },

    /// `get` found nothing at the path and no default was supplied.
    #[error("no entity exists in the given object at path: {path}")]
    NotFound { path: String },

    /// `set` or `remove` traversed through a missing intermediate value.
    #[error("missing intermediate value along path: {path}")]
    PathNotFound { path: String },

    /// `insert` found a value already present at the target path.
    #[error("an entity already exists at path: {path}")]
    AlreadyExists { path: String },

    /// An accessor kind does not fit the container it was applied to,
    /// e.g. a string key against a sequence.
    #[error("type mismatch during traversal: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

impl Error {
    /// Creates an [`Error::InvalidPath`] for the given raw path.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pathcrud::Error;
    ///
    /// let err = Error::invalid_path("[abc123]");
    /// assert!(err.to_string().contains("not a valid path"));
    /// ```
    pub fn invalid_path(path: &str) -> Self {
        Error::InvalidPath {
            path: path.to_string(),
        }
    }

    /// Creates an [`Error::MalformedSegment`] for the given unrecognized token.
    pub fn malformed_segment(segment: &str) -> Self {
        Error::MalformedSegment {
            segment: segment.to_string(),
        }
    }

    /// Creates an [`Error::NotFound`] for the given path.
    pub fn not_found(path: &str) -> Self {
        Error::NotFound {
            path: path.to_string(),
        }
    }

    /// Creates an [`Error::PathNotFound`] for the given path.
    pub fn path_not_found(path: &str) -> Self {
        Error::PathNotFound {
            path: path.to_string(),
        }
    }

    /// Creates an [`Error::AlreadyExists`] for the given path.
    pub fn already_exists(path: &str) -> Self {
        Error::AlreadyExists {
            path: path.to_string(),
        }
    }

    /// Creates an [`Error::TypeMismatch`] between an expected container kind
    /// and the kind actually found.
    pub fn type_mismatch(expected: &'static str, found: &'static str) -> Self {
        Error::TypeMismatch { expected, found }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
