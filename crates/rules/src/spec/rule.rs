//! RULE - standalone named validator over a domain type
//!
//! A [`Rule`] is usable on its own or inside a specification builder via
//! [`SpecBuilder::with_rule`](super::SpecBuilder::with_rule).

use std::any::type_name;
use std::fmt;
use std::sync::Arc;

use serde_json::{Value as Json, json};

use crate::foundation::identity::{Element, Tag, fingerprint_json};
use crate::foundation::meta::ElementMeta;

pub(crate) type CheckFn<T, E> = dyn Fn(&T) -> Result<(), E> + Send + Sync;

/// Name reported for rules declared without one.
pub const ANONYMOUS_RULE: &str = "<anonymous>";

/// Named (or anonymous) predicate-validator over `T`.
pub struct Rule<T, E> {
    meta: ElementMeta,
    name: Option<Arc<str>>,
    validator: &'static str,
    check: Arc<CheckFn<T, E>>,
}

fn rule_content(name: Option<&str>, validator: &str) -> Json {
    json!({ "name": name, "validator": validator })
}

impl<T: 'static, E: 'static> Rule<T, E> {
    /// Creates a named rule.
    pub fn new<F>(name: impl Into<String>, check: F) -> Self
    where
        F: Fn(&T) -> Result<(), E> + Send + Sync + 'static,
    {
        Self::from_fn(Some(name.into()), check)
    }

    /// Creates a rule without a name.
    pub fn anonymous<F>(check: F) -> Self
    where
        F: Fn(&T) -> Result<(), E> + Send + Sync + 'static,
    {
        Self::from_fn(None, check)
    }

    /// Builds a rule whose own error type converts into `E`.
    pub(crate) fn from_fn<R, F>(name: Option<String>, check: F) -> Self
    where
        R: Into<E> + 'static,
        F: Fn(&T) -> Result<(), R> + Send + Sync + 'static,
    {
        let validator = type_name::<F>();
        let hash = fingerprint_json(Tag::Rule, &rule_content(name.as_deref(), validator));

        Self {
            meta: ElementMeta::new(Tag::Rule, hash),
            name: name.map(Arc::from),
            validator,
            check: Arc::new(move |input: &T| -> Result<(), E> { check(input).map_err(Into::into) }),
        }
    }

    /// Widens the error type, keeping name, identity and behavior.
    pub fn map_err_into<E2>(self) -> Rule<T, E2>
    where
        E: Into<E2>,
        E2: 'static,
    {
        let check = self.check;
        Rule {
            meta: self.meta,
            name: self.name,
            validator: self.validator,
            check: Arc::new(move |input: &T| -> Result<(), E2> { check(input).map_err(Into::into) }),
        }
    }
}

impl<T, E> Rule<T, E> {
    /// Attaches a human description. The fingerprint is unaffected.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.meta = self.meta.with_doc(Some(doc.into()));
        self
    }

    /// Rule name, if declared with one.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Human description, if any.
    pub fn doc(&self) -> Option<&str> {
        self.meta.doc()
    }

    /// Runs the rule against a borrowed input.
    #[inline]
    pub fn check(&self, input: &T) -> Result<(), E> {
        (self.check)(input)
    }

    /// Runs the rule, handing the input back on success.
    pub fn validate(&self, input: T) -> Result<T, E> {
        self.check(&input).map(|()| input)
    }

    pub(crate) fn display_name(&self) -> &str {
        self.name().unwrap_or(ANONYMOUS_RULE)
    }
}

/// Creates a named [`Rule`].
///
/// # Examples
///
/// ```rust,ignore
/// let adult = rule("adult", |u: &User| if u.age >= 18 { Ok(()) } else { Err("INVALID_AGE") });
/// assert_eq!(adult.check(&minor), Err("INVALID_AGE"));
/// ```
pub fn rule<T, E, F>(name: impl Into<String>, check: F) -> Rule<T, E>
where
    T: 'static,
    E: 'static,
    F: Fn(&T) -> Result<(), E> + Send + Sync + 'static,
{
    Rule::new(name, check)
}

impl<T, E> Element for Rule<T, E> {
    fn meta(&self) -> &ElementMeta {
        &self.meta
    }

    fn content(&self) -> Json {
        rule_content(self.name(), self.validator)
    }
}

impl<T, E> Clone for Rule<T, E> {
    fn clone(&self) -> Self {
        Self {
            meta: self.meta.clone(),
            name: self.name.clone(),
            validator: self.validator,
            check: Arc::clone(&self.check),
        }
    }
}

impl<T, E> fmt::Debug for Rule<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.display_name())
            .field("hash", self.meta.hash())
            .field("doc", &self.meta.doc())
            .finish()
    }
}
