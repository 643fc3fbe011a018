//! Structural identity of validators
//!
//! A [`Fingerprint`] is the lowercase hex SHA-256 of the JCS (RFC 8785)
//! encoding of `{"content": <content>, "tag": <tag>}`: object keys sorted at
//! every level, compact separators, ECMAScript number formatting. The same
//! content always yields the same fingerprint, across runs and regardless of
//! map insertion order.
//!
//! Composites are tagged with their fingerprint when built. The `is_*`
//! predicates recompute it from the candidate's current [`Element::content`]
//! and compare against the stored one, which rejects look-alikes that only
//! copy the tag.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Value as Json, json};
use sha2::{Digest, Sha256};

use crate::foundation::meta::{ElementMeta, get_element_meta};
use crate::foundation::panic::Panic;

// ============================================================================
// TAG
// ============================================================================

/// Kind discriminant carried in every element's metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tag {
    /// Single-field validator.
    Value,
    /// Object validator built from named values.
    Schema,
    /// Conditional, combinable rule chain.
    Specification,
    /// Standalone named validator over a domain type.
    Rule,
}

impl Tag {
    /// Returns the tag name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Value => "Value",
            Self::Schema => "Schema",
            Self::Specification => "Specification",
            Self::Rule => "Rule",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// FINGERPRINT
// ============================================================================

/// Deterministic content-derived identity of an element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Returns the hex digest.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Fingerprint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Fingerprints arbitrary plain data under a kind label.
///
/// # Errors
///
/// Returns [`Panic::UnserializableContent`] if `content` cannot be represented
/// as JSON (for example a map with non-string keys).
pub fn fingerprint<C>(tag: Tag, content: &C) -> Result<Fingerprint, Panic>
where
    C: Serialize + ?Sized,
{
    let content = serde_json::to_value(content).map_err(|e| Panic::UnserializableContent {
        tag,
        reason: e.to_string(),
    })?;
    Ok(fingerprint_json(tag, &content))
}

/// Fingerprints content that is already JSON. Total.
pub(crate) fn fingerprint_json(tag: Tag, content: &Json) -> Fingerprint {
    Fingerprint(hex::encode(Sha256::digest(canonical_bytes(tag, content))))
}

/// RFC 8785 (JCS) encoding of the `{content, tag}` envelope.
fn canonical_bytes(tag: Tag, content: &Json) -> Vec<u8> {
    let envelope = json!({ "content": content, "tag": tag.as_str() });
    // A `Json` tree has string keys and finite numbers only, which JCS always
    // accepts; the compact form is a deterministic stand-in regardless.
    serde_jcs::to_string(&envelope)
        .unwrap_or_else(|_| envelope.to_string())
        .into_bytes()
}

// ============================================================================
// ELEMENT
// ============================================================================

/// Uniform identity capability of `Value`, `Schema`, `Specification` and `Rule`.
///
/// `content` must describe the element's structure only; the identity fields
/// (id, tag, hash, doc) are excluded.
pub trait Element {
    /// Identity metadata assigned at construction.
    fn meta(&self) -> &ElementMeta;

    /// Structural content the fingerprint is computed from.
    fn content(&self) -> Json;
}

fn is_element_of<C>(candidate: &C, tag: Tag) -> bool
where
    C: Element + ?Sized,
{
    let Some(meta) = get_element_meta(candidate) else {
        return false;
    };
    meta.tag() == tag && fingerprint_json(tag, &candidate.content()) == *meta.hash()
}

/// `true` if `candidate` is a genuine `Value`.
pub fn is_value<C: Element + ?Sized>(candidate: &C) -> bool {
    is_element_of(candidate, Tag::Value)
}

/// `true` if `candidate` is a genuine `Schema`.
pub fn is_schema<C: Element + ?Sized>(candidate: &C) -> bool {
    is_element_of(candidate, Tag::Schema)
}

/// `true` if `candidate` is a genuine `Specification`.
pub fn is_spec<C: Element + ?Sized>(candidate: &C) -> bool {
    is_element_of(candidate, Tag::Specification)
}

/// `true` if `candidate` is a genuine `Rule`.
pub fn is_rule<C: Element + ?Sized>(candidate: &C) -> bool {
    is_element_of(candidate, Tag::Rule)
}
