//! # pathcrud
//!
//! Path-based CRUD for nested data: validate, tokenize, and traverse
//! dot/bracket path expressions against containers of maps, sequences, and
//! scalars — with no dynamic evaluation anywhere.
//!
//! ## Path Syntax
//!
//! Dot notation, bracket-string notation (double or single quoted), and
//! bracket-index notation, freely concatenated:
//!
//! ```text
//! foo[1].bar["baz"]
//! .users[0].name
//! ["key with spaces"]['or single quotes'][2]
//! ```
//!
//! A leading bare identifier (`foo.bar`) is accepted and normalized into
//! canonical bracket-string form. Backslashes escape delimiters inside bare
//! identifiers and quotes inside quoted segments; a character is escaped
//! when the run of backslashes immediately before it has odd length.
//!
//! ## Key Features
//!
//! - **No evaluation**: paths are checked against an anchored grammar and
//!   walked step by step; injection-shaped input like
//!   `["foo"]=2;console.log("hi")` is simply an invalid path
//! - **Four operations**: [`get`] (with [`get_or`] for defaults), [`set`],
//!   [`insert`], [`remove`] with defined error semantics for each
//! - **Sparse deletion**: removing an array element leaves a hole instead of
//!   shifting later elements
//! - **Serde compatible**: [`Value`] round-trips through any serde format,
//!   so containers can be loaded straight from JSON
//! - **No unsafe code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! ```rust
//! use pathcrud::{get, insert, nested, remove, set};
//!
//! let mut data = nested!({
//!     "foo": ["bar", "baz"],
//!     "boozle": { "zoo": [0, [1, { "zak": "zoozle" }], 3, 4] }
//! });
//!
//! // Read a deep value.
//! let zak = get(&data, "boozle.zoo[1][1].zak").unwrap();
//! assert_eq!(zak.as_str(), Some("zoozle"));
//!
//! // Overwrite, insert, delete.
//! set(&mut data, "foo[0]", "qux".into()).unwrap();
//! insert(&mut data, "boozle.count", 4.into()).unwrap();
//! remove(&mut data, "foo[1]").unwrap();
//! ```
//!
//! ## Working with JSON
//!
//! [`Value`] implements `Serialize`/`Deserialize`, so containers come from
//! and go back to JSON without a custom loader:
//!
//! ```rust
//! use pathcrud::{get, Value};
//!
//! let data: Value = serde_json::from_str(r#"{"users":[{"name":"Alice"}]}"#).unwrap();
//! assert_eq!(get(&data, "users[0].name").unwrap().as_str(), Some("Alice"));
//! ```
//!
//! ## Pipeline
//!
//! Raw string → [`validate`] (normalizing a bare leading identifier) →
//! [`ValidatedPath`] → [`parse`] → [`ParsedPath`] of [`Accessor`]s →
//! traversal. The lower stages are public for callers that want to inspect
//! or reuse a parsed path, but the operations above run the whole pipeline
//! per call.
//!
//! ## Concurrency
//!
//! Fully synchronous with no interior locking or shared scan state; the
//! caller serializes concurrent access to a shared container. Each call is
//! linear in path length plus path depth.

pub mod crud;
pub mod error;
pub mod macros;
pub mod map;
pub mod path;
pub mod token;
pub mod value;

pub use crud::{get, get_or, insert, remove, set};
pub use error::{Error, Result};
pub use map::ValueMap;
pub use path::{validate, ValidatedPath};
pub use token::{parse, Accessor, ParsedPath};
pub use value::{Number, Value};
