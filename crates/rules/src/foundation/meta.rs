//! Identity metadata shared by every element kind

use serde::{Deserialize, Serialize};
use serde_json::Value as Json;

use crate::foundation::identity::{Element, Fingerprint, Tag};

/// Fixed discriminant marking a value as an element.
pub const ELEMENT_ID: &str = "Element";

/// `{ id, tag, hash, doc? }` carried by `Value`, `Schema`, `Specification`
/// and `Rule`.
///
/// Built only by the crate's own constructors; a deserialized instance is
/// never trusted until [`get_element_meta`] or one of the `is_*` predicates
/// has checked it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementMeta {
    id: String,
    tag: Tag,
    hash: Fingerprint,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    doc: Option<String>,
}

impl ElementMeta {
    pub(crate) fn new(tag: Tag, hash: Fingerprint) -> Self {
        Self {
            id: ELEMENT_ID.to_owned(),
            tag,
            hash,
            doc: None,
        }
    }

    pub(crate) fn with_doc(mut self, doc: Option<String>) -> Self {
        self.doc = doc;
        self
    }

    /// Element discriminant; always [`ELEMENT_ID`] for genuine metadata.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Kind tag.
    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// Structural fingerprint assigned at construction.
    pub fn hash(&self) -> &Fingerprint {
        &self.hash
    }

    /// Optional human description.
    pub fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }

    fn is_element(&self) -> bool {
        self.id == ELEMENT_ID
    }
}

/// Reads the identity fields of any element, or `None` when the element does
/// not carry a recognizable identity shape.
pub fn get_element_meta<E>(element: &E) -> Option<&ElementMeta>
where
    E: Element + ?Sized,
{
    let meta = element.meta();
    meta.is_element().then_some(meta)
}

/// Reads identity metadata from its exported JSON form, or `None` when the
/// candidate does not have the metadata shape.
pub fn meta_from_json(candidate: &Json) -> Option<ElementMeta> {
    let meta: ElementMeta = serde_json::from_value(candidate.clone()).ok()?;
    meta.is_element().then_some(meta)
}
