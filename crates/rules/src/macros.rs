//! Macros for declaring schema fields with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`fields!`]: builds the `(name, field)` list a schema is made from
//!
//! # Examples
//!
//! ```rust,ignore
//! use nebula_rules::prelude::*;
//!
//! let user = schema(fields! {
//!     "name" => value(|v: &Json| v.as_str().map(str::to_owned).ok_or("EMPTY_NAME")),
//!     "age" => value(|v: &Json| v.as_i64().ok_or("INVALID_AGE")),
//! })?;
//! ```

/// Builds a `Vec<(String, FieldRef<E>)>` from `name => validator` pairs,
/// preserving declaration order.
///
/// Each validator is boxed with [`schema::field`](crate::schema::field); the
/// identity check happens when the list is turned into a schema.
#[macro_export]
macro_rules! fields {
    () => {
        ::std::vec::Vec::<(::std::string::String, $crate::schema::FieldRef<_>)>::new()
    };
    ($($name:expr => $validator:expr),+ $(,)?) => {
        ::std::vec![
            $((::std::string::String::from($name), $crate::schema::field($validator))),+
        ]
    };
}
