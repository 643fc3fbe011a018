//! # nebula-rules
//!
//! Declarative validation and business-rule composition for Nebula.
//!
//! ## Building blocks
//!
//! - [`Value`](value::Value): a single-field validator from untyped input
//!   (`serde_json::Value`) to a `Result`.
//! - [`Schema`](schema::Schema): an ordered set of named `Value`s validating a
//!   whole object, either accumulating every failure
//!   ([`SchemaMode::All`](schema::SchemaMode)) or stopping at the first one
//!   ([`SchemaMode::Strict`](schema::SchemaMode)).
//! - [`Specification`](spec::Specification): a conditionally applicable chain
//!   of business [`Rule`](spec::Rule)s over a domain type, combinable with
//!   `and` / `or` / `not`.
//!
//! Every composite carries [`ElementMeta`](foundation::ElementMeta): a kind
//! tag plus a structural fingerprint that [`is_value`](foundation::is_value),
//! [`is_schema`](foundation::is_schema), [`is_spec`](foundation::is_spec) and
//! [`is_rule`](foundation::is_rule) recompute to tell real composites apart
//! from look-alikes.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use nebula_rules::prelude::*;
//! use serde_json::json;
//!
//! let user = schema(fields! {
//!     "name" => value(|v: &Json| match v.as_str() {
//!         Some(s) if !s.is_empty() => Ok(s.to_owned()),
//!         _ => Err("EMPTY_NAME"),
//!     }),
//!     "age" => value(|v: &Json| match v.as_i64() {
//!         Some(n) if n >= 0 => Ok(n),
//!         _ => Err("INVALID_AGE"),
//!     }),
//! })?;
//!
//! let errors = user.validate(&json!({ "name": "", "age": -5 })).unwrap_err();
//! assert_eq!(errors.get("name"), Some(&"EMPTY_NAME"));
//! assert_eq!(errors.get("age"), Some(&"INVALID_AGE"));
//! ```
//!
//! ## Two error channels
//!
//! Bad input is reported through the `Err` branch of an ordinary `Result`.
//! Misconfigured validators (a schema field that is not a `Value`, a reserved
//! field name, ...) are reported as [`Panic`](foundation::Panic) and never
//! appear inside a domain `Err`.

pub mod combinators;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod schema;
pub mod spec;
pub mod value;
