//! Prelude module for convenient imports.
//!
//! Provides a single `use nebula_rules::prelude::*;` import that brings in the
//! element kinds, their factories, the identity predicates and
//! `serde_json::Value` as `Json`.
//!
//! # Examples
//!
//! ```rust,ignore
//! use nebula_rules::prelude::*;
//!
//! let name = value(|v: &Json| v.as_str().map(str::to_owned).ok_or("EMPTY_NAME"));
//! let user = schema(fields! { "name" => name })?;
//! assert!(is_schema(&user));
//! ```

// ============================================================================
// FOUNDATION: results, identity, metadata, panics
// ============================================================================

pub use crate::foundation::{
    ELEMENT_ID, Element, ElementMeta, Fingerprint, Panic, Tag, err, fingerprint, from_json,
    get_element_meta, is_err, is_ok, is_result, is_rule, is_schema, is_spec, is_value,
    meta_from_json, ok, to_json, unwrap, unwrap_json,
};

// ============================================================================
// ELEMENTS
// ============================================================================

pub use crate::fields;
pub use crate::schema::{
    FieldRef, FieldValidator, Schema, SchemaBuilder, SchemaErrors, SchemaMode, SchemaOutput,
    field, schema, schema_with_doc,
};
pub use crate::spec::{Rule, SpecBuilder, SpecKind, Specification, rule, spec};
pub use crate::value::{Value, value};

// ============================================================================
// COMBINATORS
// ============================================================================

pub use crate::combinators::Condition;

pub use serde_json::Value as Json;
