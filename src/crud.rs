//! Path-addressed get/set/insert/remove over [`Value`] containers.
//!
//! Every operation is one linear synchronous traversal: validate the path,
//! tokenize it, then walk the accessor sequence. Paths are re-validated and
//! re-tokenized on every call; nothing is cached between calls. The
//! container is only borrowed for the duration of the call, and a failure
//! before the terminal step leaves it untouched.
//!
//! ## Traversal rules
//!
//! - object + key: entry lookup
//! - object + index: lookup of the decimal string key (numeric keys on
//!   objects coerce, the way bracket-index access does on dynamic objects)
//! - array + index: slot lookup; out-of-bounds and holes are absent
//! - array + key, or any scalar used as a container: type mismatch
//!
//! ## Examples
//!
//! ```rust
//! use pathcrud::{get, nested, remove, set};
//!
//! let mut data = nested!({ "users": [{ "name": "Alice" }] });
//!
//! assert_eq!(get(&data, "users[0].name").unwrap().as_str(), Some("Alice"));
//!
//! set(&mut data, "users[0].name", "Bob".into()).unwrap();
//! assert_eq!(get(&data, "users[0].name").unwrap().as_str(), Some("Bob"));
//!
//! remove(&mut data, "users[0]").unwrap();
//! assert!(get(&data, "users[0]").is_err());
//! ```

use crate::{parse, validate, Accessor, Error, ParsedPath, Result, Value};

/// Outcome of one traversal step, before it is mapped to an operation's
/// public error.
enum StepError {
    /// The accessor fit the container kind but nothing was there.
    Absent,
    /// The accessor kind does not fit the container kind.
    Kind {
        expected: &'static str,
        found: &'static str,
    },
}

impl StepError {
    /// Maps a failed intermediate step to the error `set`/`remove` surface.
    fn into_traversal_error(self, path: &str) -> Error {
        match self {
            StepError::Absent => Error::path_not_found(path),
            StepError::Kind { expected, found } => Error::type_mismatch(expected, found),
        }
    }
}

fn descend<'a>(value: &'a Value, accessor: &Accessor) -> std::result::Result<&'a Value, StepError> {
    match (value, accessor) {
        (Value::Object(map), Accessor::Key(key)) => map.get(key).ok_or(StepError::Absent),
        (Value::Object(map), Accessor::Index(index)) => {
            map.get(&index.to_string()).ok_or(StepError::Absent)
        }
        (Value::Array(slots), Accessor::Index(index)) => match slots.get(*index) {
            Some(Some(v)) => Ok(v),
            _ => Err(StepError::Absent),
        },
        (Value::Array(_), Accessor::Key(_)) => Err(StepError::Kind {
            expected: "object",
            found: "array",
        }),
        (other, _) => Err(StepError::Kind {
            expected: "object or array",
            found: other.type_name(),
        }),
    }
}

fn descend_mut<'a>(
    value: &'a mut Value,
    accessor: &Accessor,
) -> std::result::Result<&'a mut Value, StepError> {
    match (value, accessor) {
        (Value::Object(map), Accessor::Key(key)) => map.get_mut(key).ok_or(StepError::Absent),
        (Value::Object(map), Accessor::Index(index)) => {
            map.get_mut(&index.to_string()).ok_or(StepError::Absent)
        }
        (Value::Array(slots), Accessor::Index(index)) => match slots.get_mut(*index) {
            Some(Some(v)) => Ok(v),
            _ => Err(StepError::Absent),
        },
        (Value::Array(_), Accessor::Key(_)) => Err(StepError::Kind {
            expected: "object",
            found: "array",
        }),
        (other, _) => Err(StepError::Kind {
            expected: "object or array",
            found: other.type_name(),
        }),
    }
}

/// Walks all but the last accessor, surfacing traversal errors for
/// mutating operations.
fn traverse_to_parent<'a>(
    container: &'a mut Value,
    parsed: &ParsedPath,
    path: &str,
) -> Result<(&'a mut Value, Accessor)> {
    let (last, parents) = parsed.split_last();
    let mut current = container;
    for accessor in parents {
        current = descend_mut(current, accessor).map_err(|e| e.into_traversal_error(path))?;
    }
    Ok((current, last.clone()))
}

/// Retrieves the value at `path` inside `container`.
///
/// # Examples
///
/// ```rust
/// use pathcrud::{get, nested};
///
/// let data = nested!({ "boozle": { "zoo": [0, [1, { "zak": "zoozle" }], 3, 4] } });
/// let value = get(&data, "boozle.zoo[1][1].zak").unwrap();
/// assert_eq!(value.as_str(), Some("zoozle"));
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidPath`] for a bad path, and [`Error::NotFound`]
/// when any intermediate or the final value is absent or cannot be
/// traversed.
pub fn get<'a>(container: &'a Value, path: &str) -> Result<&'a Value> {
    let parsed = parse(&validate(path)?)?;
    let mut current = container;
    for accessor in &parsed {
        current = descend(current, accessor).map_err(|_| Error::not_found(path))?;
    }
    Ok(current)
}

/// Retrieves the value at `path`, falling back to `default` on any
/// traversal failure.
///
/// The path itself is still validated first: an invalid path is an error
/// regardless of the default, as is a malformed segment.
///
/// # Examples
///
/// ```rust
/// use pathcrud::{get_or, nested};
///
/// let data = nested!({});
/// let value = get_or(&data, "foo", "baz".into()).unwrap();
/// assert_eq!(value.as_str(), Some("baz"));
///
/// // Even type mismatches along the way fall back to the default.
/// let data = nested!({ "foo": 1 });
/// let value = get_or(&data, "foo.bar[0]", "baz".into()).unwrap();
/// assert_eq!(value.as_str(), Some("baz"));
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidPath`] when the path fails validation.
pub fn get_or(container: &Value, path: &str, default: Value) -> Result<Value> {
    let parsed = parse(&validate(path)?)?;
    let mut current = container;
    for accessor in &parsed {
        match descend(current, accessor) {
            Ok(next) => current = next,
            Err(_) => return Ok(default),
        }
    }
    Ok(current.clone())
}

/// Sets `value` at `path`, creating or overwriting the final slot.
///
/// Every intermediate container along the path must already exist; missing
/// intermediate structure is never auto-created. Assigning past the end of
/// an array fills the gap with holes. No mutation occurs if traversal fails
/// before the last step.
///
/// # Examples
///
/// ```rust
/// use pathcrud::{get, nested, set};
///
/// let mut data = nested!({ "foo": "bar" });
/// set(&mut data, "[\"foo\"]", 2.into()).unwrap();
/// assert_eq!(get(&data, "foo").unwrap().as_i64(), Some(2));
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidPath`] for a bad path, [`Error::PathNotFound`]
/// when an intermediate value is missing, and [`Error::TypeMismatch`] when
/// an accessor kind does not fit the container it lands on.
pub fn set(container: &mut Value, path: &str, value: Value) -> Result<()> {
    let parsed = parse(&validate(path)?)?;
    let (target, last) = traverse_to_parent(container, &parsed, path)?;
    assign(target, &last, value)
}

/// Inserts `value` at `path`, failing if a value is already there.
///
/// The existence probe is a `get`: any failure to retrieve counts as
/// absent, after which this delegates to [`set`].
///
/// # Examples
///
/// ```rust
/// use pathcrud::{insert, nested, Error};
///
/// let mut data = nested!({ "foo": "bar" });
/// assert!(matches!(
///     insert(&mut data, "foo", "yolo".into()),
///     Err(Error::AlreadyExists { .. })
/// ));
/// ```
///
/// # Errors
///
/// Returns [`Error::AlreadyExists`] when the target holds a value, plus
/// everything [`set`] can return.
pub fn insert(container: &mut Value, path: &str, value: Value) -> Result<()> {
    if get(container, path).is_ok() {
        return Err(Error::already_exists(path));
    }
    set(container, path, value)
}

/// Deletes the value at `path`.
///
/// Removing an object entry drops it without disturbing sibling order.
/// Removing an array element leaves a hole at that index — later elements
/// are *not* shifted left (delete semantics, not splice). Deleting an
/// already-absent terminal slot is a no-op.
///
/// # Examples
///
/// ```rust
/// use pathcrud::{get, nested, remove};
///
/// let mut data = nested!({ "items": [0, 1, 2] });
/// remove(&mut data, "items[1]").unwrap();
///
/// // Index 2 is still index 2; index 1 is now a hole.
/// assert_eq!(get(&data, "items[2]").unwrap().as_i64(), Some(2));
/// assert!(get(&data, "items[1]").is_err());
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidPath`] for a bad path, [`Error::PathNotFound`]
/// when an intermediate value is missing, and [`Error::TypeMismatch`] when
/// the terminal container does not fit the accessor kind.
pub fn remove(container: &mut Value, path: &str) -> Result<()> {
    let parsed = parse(&validate(path)?)?;
    let (target, last) = traverse_to_parent(container, &parsed, path)?;
    delete(target, &last)
}

/// Terminal assignment: create-or-overwrite the final slot.
fn assign(target: &mut Value, accessor: &Accessor, value: Value) -> Result<()> {
    match (target, accessor) {
        (Value::Object(map), Accessor::Key(key)) => {
            map.insert(key.clone(), value);
            Ok(())
        }
        (Value::Object(map), Accessor::Index(index)) => {
            map.insert(index.to_string(), value);
            Ok(())
        }
        (Value::Array(slots), Accessor::Index(index)) => {
            if *index >= slots.len() {
                slots.resize_with(index + 1, || None);
            }
            slots[*index] = Some(value);
            Ok(())
        }
        (Value::Array(_), Accessor::Key(_)) => Err(Error::type_mismatch("object", "array")),
        (other, _) => Err(Error::type_mismatch("object or array", other.type_name())),
    }
}

/// Terminal deletion: object entries are removed, array slots become holes.
fn delete(target: &mut Value, accessor: &Accessor) -> Result<()> {
    match (target, accessor) {
        (Value::Object(map), Accessor::Key(key)) => {
            map.remove(key);
            Ok(())
        }
        (Value::Object(map), Accessor::Index(index)) => {
            map.remove(&index.to_string());
            Ok(())
        }
        (Value::Array(slots), Accessor::Index(index)) => {
            if let Some(slot) = slots.get_mut(*index) {
                *slot = None;
            }
            Ok(())
        }
        (Value::Array(_), Accessor::Key(_)) => Err(Error::type_mismatch("object", "array")),
        (other, _) => Err(Error::type_mismatch("object or array", other.type_name())),
    }
}
