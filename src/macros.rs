/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// Arrays built with this macro are dense: every element occupies a filled
/// slot. Holes only appear later, through [`remove`](crate::remove) or
/// out-of-bounds [`set`](crate::set).
///
/// # Examples
///
/// ```rust
/// use pathcrud::{get, nested};
///
/// let container = nested!({
///     "foo": ["bar", "baz"],
///     "count": 2
/// });
///
/// assert_eq!(get(&container, "foo[1]").unwrap().as_str(), Some("baz"));
/// ```
#[macro_export]
macro_rules! nested {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$(Some($crate::nested!($elem))),*])
    };

    ({}) => {
        $crate::Value::Object($crate::ValueMap::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::ValueMap::new();
        $(
            object.insert($key.to_string(), $crate::nested!($value));
        )*
        $crate::Value::Object(object)
    }};

    // Fallback for expressions: anything `Value: From` accepts.
    ($other:expr) => {
        $crate::Value::from($other)
    };
}
