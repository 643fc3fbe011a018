//! Core types shared by every validator kind
//!
//! - **Result helpers**: [`ok`], [`err`], [`is_result`] and the JSON wire shape
//! - **Identity**: [`Tag`], [`Fingerprint`], the [`Element`] trait and the
//!   `is_*` predicates that re-verify a composite's fingerprint
//! - **Metadata**: [`ElementMeta`] and [`get_element_meta`]
//! - **Panic**: the configuration-error channel
//!
//! # Architecture
//!
//! `Value`, `Schema`, `Specification` and `Rule` share no common base type.
//! They share a metadata convention instead: each one exposes its
//! [`ElementMeta`] and its structural content, and the identity predicates
//! recompute the fingerprint from that content on every check.
//!
//! ```rust,ignore
//! use nebula_rules::foundation::{is_schema, get_element_meta, Tag};
//!
//! assert!(is_schema(&user_schema));
//! let meta = get_element_meta(&user_schema).unwrap();
//! assert_eq!(meta.tag(), Tag::Schema);
//! ```

pub mod identity;
pub mod meta;
pub mod panic;
pub mod result;

pub use identity::{
    Element, Fingerprint, Tag, fingerprint, is_rule, is_schema, is_spec, is_value,
};
pub use meta::{ELEMENT_ID, ElementMeta, get_element_meta, meta_from_json};
pub use panic::Panic;
pub use result::{
    WireError, err, from_json, is_err, is_ok, is_result, ok, to_json, unwrap, unwrap_json,
};
