//! SCHEMA - object validator composed of named values
//!
//! A [`Schema`] is an ordered mapping from field name to a [`Value`]. It is
//! used two ways:
//!
//! - as a whole-object validator: [`Schema::validate`] /
//!   [`Schema::validate_with`] run every field against the matching property
//!   of a JSON object;
//! - as a bag of field validators: [`Schema::field`] /
//!   [`Schema::validate_field`] run a single field standalone.
//!
//! # Modes
//!
//! - [`SchemaMode::All`] (default) evaluates every field exactly once and
//!   returns every failure, keyed by field name.
//! - [`SchemaMode::Strict`] stops at the first failing field in declaration
//!   order; later fields are never invoked.
//!
//! # Configuration errors
//!
//! Every field must pass the `Value` identity check. Handing in a rule, a
//! specification or any look-alike is a [`Panic`], not a validation failure.
//!
//! # Examples
//!
//! ```rust,ignore
//! use nebula_rules::prelude::*;
//! use serde_json::json;
//!
//! let user = Schema::builder()
//!     .doc("user registration form")
//!     .field("name", value(|v: &Json| v.as_str().filter(|s| !s.is_empty()).map(str::to_owned).ok_or("EMPTY_NAME")))
//!     .field("age", value(|v: &Json| v.as_i64().filter(|n| *n >= 0).ok_or("INVALID_AGE")))
//!     .build()?;
//!
//! let strict = user.validate_with(&json!({ "name": "", "age": -5 }), SchemaMode::Strict);
//! assert_eq!(strict.unwrap_err().fields().collect::<Vec<_>>(), ["name"]);
//!
//! assert_eq!(user.validate_field("age", &json!(41))?, Ok(json!(41)));
//! ```

mod errors;
mod mode;

pub use errors::SchemaErrors;
pub use mode::{ParseModeError, SchemaMode};

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::{Value as Json, json};

use crate::foundation::identity::{Element, Tag, fingerprint_json, is_value};
use crate::foundation::meta::{ElementMeta, get_element_meta};
use crate::foundation::panic::Panic;
use crate::spec::{Rule, Specification};
use crate::value::Value;

/// Field names reserved for element metadata.
pub const RESERVED_FIELD_NAMES: [&str; 4] = ["id", "tag", "hash", "doc"];

/// Validated output of a whole-object validation, keyed by field name.
pub type SchemaOutput = IndexMap<String, Json>;

/// Shared handle to a field validator.
pub type FieldRef<E> = Arc<dyn FieldValidator<E>>;

// `&Json::Null` handed to fields whose property is absent.
static NULL: Json = Json::Null;

// ============================================================================
// FIELD VALIDATOR
// ============================================================================

/// Anything that can be offered as a schema field.
///
/// Only genuine [`Value`]s are accepted when a schema is built; the other
/// implementations exist so that handing in the wrong element kind is caught
/// as a [`Panic`] rather than at compile time only.
pub trait FieldValidator<E>: Element + Send + Sync {
    /// Validates one property, producing its JSON output.
    fn validate_field(&self, input: &Json) -> Result<Json, E>;
}

impl<T, E> FieldValidator<E> for Value<T, E>
where
    T: Into<Json>,
{
    fn validate_field(&self, input: &Json) -> Result<Json, E> {
        self.validate(input).map(Into::into)
    }
}

impl<E> FieldValidator<E> for Rule<Json, E> {
    fn validate_field(&self, input: &Json) -> Result<Json, E> {
        self.check(input).map(|()| input.clone())
    }
}

impl<E> FieldValidator<E> for Specification<Json, E> {
    fn validate_field(&self, input: &Json) -> Result<Json, E> {
        self.check(input).map(|()| input.clone())
    }
}

/// Boxes a field validator for use in a field list.
pub fn field<E, F>(validator: F) -> FieldRef<E>
where
    F: FieldValidator<E> + 'static,
{
    Arc::new(validator)
}

// ============================================================================
// SCHEMA
// ============================================================================

/// Object validator over a mapping of named values.
pub struct Schema<E> {
    meta: ElementMeta,
    fields: Arc<IndexMap<String, FieldRef<E>>>,
}

impl<E: 'static> Schema<E> {
    /// Starts a schema builder.
    pub fn builder() -> SchemaBuilder<E> {
        SchemaBuilder::new()
    }

    /// Builds a schema from `(name, field)` pairs in declaration order.
    pub fn new<I, K>(fields: I) -> Result<Self, Panic>
    where
        I: IntoIterator<Item = (K, FieldRef<E>)>,
        K: Into<String>,
    {
        Self::from_parts(None, fields)
    }

    fn from_parts<I, K>(doc: Option<String>, fields: I) -> Result<Self, Panic>
    where
        I: IntoIterator<Item = (K, FieldRef<E>)>,
        K: Into<String>,
    {
        let mut checked = IndexMap::new();
        for (name, field) in fields {
            let name = name.into();
            if let Err(panic) = check_field(&name, field.as_ref(), &checked) {
                tracing::debug!(code = panic.code(), field = %name, "schema rejected");
                return Err(panic);
            }
            checked.insert(name, field);
        }

        let hash = fingerprint_json(Tag::Schema, &fields_content(&checked));
        tracing::debug!(hash = %hash, fields = checked.len(), "schema built");

        Ok(Self {
            meta: ElementMeta::new(Tag::Schema, hash).with_doc(doc),
            fields: Arc::new(checked),
        })
    }
}

fn check_field<E>(
    name: &str,
    field: &dyn FieldValidator<E>,
    seen: &IndexMap<String, FieldRef<E>>,
) -> Result<(), Panic> {
    if RESERVED_FIELD_NAMES.contains(&name) {
        return Err(Panic::ReservedFieldName { field: name.into() });
    }
    if !is_value(field) {
        return Err(Panic::FieldIsNotValue {
            field: name.into(),
            found: describe(field),
        });
    }
    if seen.contains_key(name) {
        return Err(Panic::DuplicateField { field: name.into() });
    }
    Ok(())
}

fn describe<E>(field: &dyn FieldValidator<E>) -> String {
    match get_element_meta(field) {
        Some(meta) if meta.tag() == Tag::Value => "Value with a mismatched hash".to_owned(),
        Some(meta) => meta.tag().to_string(),
        None => "unrecognized element".to_owned(),
    }
}

fn fields_content<E>(fields: &IndexMap<String, FieldRef<E>>) -> Json {
    let entries: Vec<Json> = fields
        .iter()
        .map(|(name, field)| json!([name, field.meta().hash()]))
        .collect();
    json!({ "fields": entries })
}

fn property<'a>(input: &'a Json, name: &str) -> &'a Json {
    input.get(name).unwrap_or(&NULL)
}

impl<E> Schema<E> {
    /// Validates every field in [`SchemaMode::All`].
    pub fn validate(&self, input: &Json) -> Result<SchemaOutput, SchemaErrors<E>> {
        self.validate_with(input, SchemaMode::All)
    }

    /// Validates the object under the given mode.
    ///
    /// A property missing from `input`, or an `input` that is not an object,
    /// reaches the field validator as `null`.
    pub fn validate_with(
        &self,
        input: &Json,
        mode: SchemaMode,
    ) -> Result<SchemaOutput, SchemaErrors<E>> {
        match mode {
            SchemaMode::All => self.validate_all(input),
            SchemaMode::Strict => self.validate_strict(input),
        }
    }

    fn validate_all(&self, input: &Json) -> Result<SchemaOutput, SchemaErrors<E>> {
        let mut output = SchemaOutput::with_capacity(self.fields.len());
        let mut errors = SchemaErrors::new();

        for (name, field) in self.fields.iter() {
            match field.validate_field(property(input, name)) {
                Ok(value) => {
                    output.insert(name.clone(), value);
                }
                Err(error) => {
                    tracing::trace!(field = %name, "field failed");
                    errors.insert(name.clone(), error);
                }
            }
        }

        if errors.is_empty() {
            Ok(output)
        } else {
            tracing::debug!(
                schema = %self.meta.hash(),
                failed = errors.len(),
                "schema validation failed"
            );
            Err(errors)
        }
    }

    fn validate_strict(&self, input: &Json) -> Result<SchemaOutput, SchemaErrors<E>> {
        let mut output = SchemaOutput::with_capacity(self.fields.len());

        for (name, field) in self.fields.iter() {
            match field.validate_field(property(input, name)) {
                Ok(value) => {
                    output.insert(name.clone(), value);
                }
                Err(error) => {
                    tracing::debug!(
                        schema = %self.meta.hash(),
                        field = %name,
                        "schema validation stopped at first failure"
                    );
                    return Err(SchemaErrors::single(name.clone(), error));
                }
            }
        }

        Ok(output)
    }

    /// Validates a single field standalone.
    ///
    /// # Errors
    ///
    /// [`Panic::UnknownField`] if the schema has no such field; the inner
    /// `Result` is the field's own verdict.
    pub fn validate_field(&self, name: &str, input: &Json) -> Result<Result<Json, E>, Panic> {
        let field = self
            .fields
            .get(name)
            .ok_or_else(|| Panic::UnknownField { field: name.into() })?;
        Ok(field.validate_field(input))
    }

    /// The validator for `name`, if declared.
    pub fn field(&self, name: &str) -> Option<&dyn FieldValidator<E>> {
        self.fields.get(name).map(AsRef::as_ref)
    }

    /// Field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// `true` if the schema has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Human description, if any.
    pub fn doc(&self) -> Option<&str> {
        self.meta.doc()
    }
}

impl<E> Element for Schema<E> {
    fn meta(&self) -> &ElementMeta {
        &self.meta
    }

    fn content(&self) -> Json {
        fields_content(&self.fields)
    }
}

impl<E> Clone for Schema<E> {
    fn clone(&self) -> Self {
        Self {
            meta: self.meta.clone(),
            fields: Arc::clone(&self.fields),
        }
    }
}

impl<E> fmt::Debug for Schema<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("hash", self.meta.hash())
            .field("doc", &self.meta.doc())
            .field("fields", &self.fields.keys().collect::<Vec<_>>())
            .finish()
    }
}

// ============================================================================
// BUILDER AND FACTORIES
// ============================================================================

/// Fluent schema construction.
pub struct SchemaBuilder<E> {
    doc: Option<String>,
    fields: Vec<(String, FieldRef<E>)>,
}

impl<E: 'static> SchemaBuilder<E> {
    fn new() -> Self {
        Self {
            doc: None,
            fields: Vec::new(),
        }
    }

    /// Sets the human description.
    #[must_use = "builder methods must be chained or built"]
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Appends a field.
    #[must_use = "builder methods must be chained or built"]
    pub fn field<F>(mut self, name: impl Into<String>, validator: F) -> Self
    where
        F: FieldValidator<E> + 'static,
    {
        let validator: FieldRef<E> = Arc::new(validator);
        self.fields.push((name.into(), validator));
        self
    }

    /// Appends an already shared field.
    #[must_use = "builder methods must be chained or built"]
    pub fn field_ref(mut self, name: impl Into<String>, validator: FieldRef<E>) -> Self {
        self.fields.push((name.into(), validator));
        self
    }

    /// Checks every field and builds the schema.
    pub fn build(self) -> Result<Schema<E>, Panic> {
        Schema::from_parts(self.doc, self.fields)
    }
}

impl<E> fmt::Debug for SchemaBuilder<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaBuilder")
            .field("doc", &self.doc)
            .field(
                "fields",
                &self.fields.iter().map(|(name, _)| name).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Builds a schema from `(name, field)` pairs; see [`fields!`](crate::fields).
pub fn schema<E, I, K>(fields: I) -> Result<Schema<E>, Panic>
where
    E: 'static,
    I: IntoIterator<Item = (K, FieldRef<E>)>,
    K: Into<String>,
{
    Schema::new(fields)
}

/// Builds a documented schema from `(name, field)` pairs.
pub fn schema_with_doc<E, I, K>(doc: impl Into<String>, fields: I) -> Result<Schema<E>, Panic>
where
    E: 'static,
    I: IntoIterator<Item = (K, FieldRef<E>)>,
    K: Into<String>,
{
    Schema::from_parts(Some(doc.into()), fields)
}
