//! Configuration-error channel
//!
//! A [`Panic`] reports a defect in how validators were put together, found
//! while building or invoking a composite. It is never a validation failure:
//! domain failures travel through the `Err` branch of the validator's own
//! `Result`, and a `Panic` never appears inside one.
//!
//! Every kind has a code namespaced by its owning module, for example
//! `SCHEMA:FIELD_IS_NOT_VALUE`.

use crate::foundation::identity::Tag;

/// A fatal configuration error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Panic {
    /// A schema field failed the `Value` identity check.
    #[error("SCHEMA:FIELD_IS_NOT_VALUE: field '{field}' is not a Value ({found})")]
    FieldIsNotValue {
        /// Offending field name.
        field: String,
        /// What was found in its place.
        found: String,
    },

    /// A schema field uses a name reserved for element metadata.
    #[error("SCHEMA:RESERVED_FIELD_NAME: field name '{field}' is reserved for element metadata")]
    ReservedFieldName {
        /// Offending field name.
        field: String,
    },

    /// The same field name was declared twice.
    #[error("SCHEMA:DUPLICATE_FIELD: field '{field}' is declared more than once")]
    DuplicateField {
        /// Offending field name.
        field: String,
    },

    /// Standalone field validation was asked for a field the schema lacks.
    #[error("SCHEMA:UNKNOWN_FIELD: schema has no field '{field}'")]
    UnknownField {
        /// Requested field name.
        field: String,
    },

    /// Content handed to the fingerprint function is not representable as JSON.
    #[error("HASH:UNSERIALIZABLE_CONTENT: cannot fingerprint {tag} content: {reason}")]
    UnserializableContent {
        /// Kind whose content was being fingerprinted.
        tag: Tag,
        /// Serializer message.
        reason: String,
    },
}

impl Panic {
    /// Namespaced code, e.g. `SCHEMA:FIELD_IS_NOT_VALUE`.
    pub fn code(&self) -> &'static str {
        match self {
            Self::FieldIsNotValue { .. } => "SCHEMA:FIELD_IS_NOT_VALUE",
            Self::ReservedFieldName { .. } => "SCHEMA:RESERVED_FIELD_NAME",
            Self::DuplicateField { .. } => "SCHEMA:DUPLICATE_FIELD",
            Self::UnknownField { .. } => "SCHEMA:UNKNOWN_FIELD",
            Self::UnserializableContent { .. } => "HASH:UNSERIALIZABLE_CONTENT",
        }
    }

    /// Owning module of this panic kind, e.g. `SCHEMA`.
    pub fn module(&self) -> &'static str {
        let code = self.code();
        code.split_once(':').map_or(code, |(module, _)| module)
    }

    /// Field name the panic is about, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::FieldIsNotValue { field, .. }
            | Self::ReservedFieldName { field }
            | Self::DuplicateField { field }
            | Self::UnknownField { field } => Some(field),
            Self::UnserializableContent { .. } => None,
        }
    }
}
