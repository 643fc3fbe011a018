//! VALUE - single-field validator
//!
//! A [`Value`] wraps a pure function from untyped input to a `Result`, plus
//! identity metadata. Calling [`Value::validate`] invokes the wrapped function
//! directly; nothing else runs on the call path.
//!
//! # Examples
//!
//! ```rust,ignore
//! use nebula_rules::value::value;
//! use serde_json::json;
//!
//! let age = value(|v: &Json| match v.as_i64() {
//!     Some(n) if n >= 0 => Ok(n),
//!     _ => Err("INVALID_AGE"),
//! })
//! .with_doc("age in whole years");
//!
//! assert_eq!(age.validate(&json!(30)), Ok(30));
//! assert_eq!(age.validate(&json!(-5)), Err("INVALID_AGE"));
//! ```

use std::any::type_name;
use std::fmt;
use std::sync::Arc;

use serde_json::{Value as Json, json};

use crate::foundation::identity::{Element, Tag, fingerprint_json};
use crate::foundation::meta::ElementMeta;

type CheckFn<T, E> = dyn Fn(&Json) -> Result<T, E> + Send + Sync;

/// Atomic validator over untyped input.
///
/// Immutable once built; clones share the wrapped function.
pub struct Value<T, E> {
    meta: ElementMeta,
    signature: Signature,
    check: Arc<CheckFn<T, E>>,
}

/// Type-level description of the wrapped function, used as fingerprint content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Signature {
    validator: &'static str,
    output: &'static str,
    error: &'static str,
}

impl Signature {
    fn to_json(self) -> Json {
        json!({
            "validator": self.validator,
            "output": self.output,
            "error": self.error,
        })
    }
}

impl<T: 'static, E: 'static> Value<T, E> {
    /// Wraps `check` as a value validator.
    pub fn new<F>(check: F) -> Self
    where
        F: Fn(&Json) -> Result<T, E> + Send + Sync + 'static,
    {
        let signature = Signature {
            validator: type_name::<F>(),
            output: type_name::<T>(),
            error: type_name::<E>(),
        };
        let hash = fingerprint_json(Tag::Value, &signature.to_json());
        tracing::trace!(hash = %hash, validator = signature.validator, "value built");

        Self {
            meta: ElementMeta::new(Tag::Value, hash),
            signature,
            check: Arc::new(check),
        }
    }
}

impl<T, E> Value<T, E> {
    /// Attaches a human description. The fingerprint is unaffected.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.meta = self.meta.with_doc(Some(doc.into()));
        self
    }

    /// Validates `input`.
    #[inline]
    pub fn validate(&self, input: &Json) -> Result<T, E> {
        (self.check)(input)
    }

    /// Human description, if any.
    pub fn doc(&self) -> Option<&str> {
        self.meta.doc()
    }
}

/// Creates a [`Value`] from a validator function.
pub fn value<T, E, F>(check: F) -> Value<T, E>
where
    T: 'static,
    E: 'static,
    F: Fn(&Json) -> Result<T, E> + Send + Sync + 'static,
{
    Value::new(check)
}

impl<T, E> Element for Value<T, E> {
    fn meta(&self) -> &ElementMeta {
        &self.meta
    }

    fn content(&self) -> Json {
        self.signature.to_json()
    }
}

// Clone impl - manual because T and E need not be Clone
impl<T, E> Clone for Value<T, E> {
    fn clone(&self) -> Self {
        Self {
            meta: self.meta.clone(),
            signature: self.signature,
            check: Arc::clone(&self.check),
        }
    }
}

impl<T, E> fmt::Debug for Value<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Value")
            .field("hash", self.meta.hash())
            .field("doc", &self.meta.doc())
            .field("validator", &self.signature.validator)
            .finish()
    }
}
