//! SPECIFICATION - conditional, combinable business rules
//!
//! A [`Specification`] is built once from a [`SpecBuilder`]: an optional
//! applicability predicate plus an ordered chain of [`Rule`]s.
//!
//! # Evaluation
//!
//! 1. If a `when` predicate is present and does not hold, the input is
//!    vacuously satisfied and no rule runs.
//! 2. Otherwise rules run in declaration order; the first `Err` is returned
//!    as is and the remaining rules are skipped.
//! 3. If every rule passes, `satisfy` hands the input back.
//!
//! Unlike `Schema` in its default mode, a rule chain never accumulates.
//!
//! # Error types
//!
//! `E` is the union of every rule's error type, expressed the Rust way: each
//! rule's own error `R` must implement `Into<E>`. The `and` / `or` combinators
//! accept an operand whose error converts into `E`; `not` takes its error type
//! from the custom error it is given.
//!
//! # Examples
//!
//! ```rust,ignore
//! use nebula_rules::spec::spec;
//!
//! let registration = spec::<User, &str>()
//!     .rule("r1", |u| if u.age >= 18 { Ok(()) } else { Err("INVALID_AGE") })
//!     .rule("r2", |u| if u.email.contains('@') { Ok(()) } else { Err("INVALID_EMAIL") })
//!     .build();
//!
//! assert_eq!(registration.satisfy(minor), Err("INVALID_AGE"));
//! ```

mod builder;
mod rule;

pub use builder::{SpecBuilder, spec};
pub use rule::{ANONYMOUS_RULE, Rule, rule};

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde_json::{Value as Json, json};

use crate::combinators::Condition;
use crate::foundation::identity::{Element, Tag, fingerprint_json};
use crate::foundation::meta::ElementMeta;
use rule::CheckFn;

/// Shape of a built specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpecKind {
    /// Built from a builder: optional condition plus a rule chain.
    Chain,
    /// Negation of another specification.
    Not,
    /// Conjunction of two specifications.
    And,
    /// Disjunction of two specifications.
    Or,
}

impl SpecKind {
    /// Lowercase name, as used in fingerprint content.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Chain => "chain",
            Self::Not => "not",
            Self::And => "and",
            Self::Or => "or",
        }
    }
}

impl fmt::Display for SpecKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

enum Node<T, E> {
    Chain {
        condition: Option<Condition<T>>,
        rules: Arc<[Rule<T, E>]>,
    },
    Composite {
        content: Json,
        check: Arc<CheckFn<T, E>>,
    },
}

impl<T, E> Clone for Node<T, E> {
    fn clone(&self) -> Self {
        match self {
            Self::Chain { condition, rules } => Self::Chain {
                condition: condition.clone(),
                rules: Arc::clone(rules),
            },
            Self::Composite { content, check } => Self::Composite {
                content: content.clone(),
                check: Arc::clone(check),
            },
        }
    }
}

fn chain_content<T, E>(condition: Option<&Condition<T>>, rules: &[Rule<T, E>]) -> Json {
    let rules: Vec<Json> = rules.iter().map(|rule| json!(rule.meta().hash())).collect();
    json!({
        "kind": SpecKind::Chain,
        "when": condition.map(Condition::predicate_name),
        "rules": rules,
    })
}

/// Immutable, reusable business-rule set over `T`.
pub struct Specification<T, E> {
    meta: ElementMeta,
    kind: SpecKind,
    node: Node<T, E>,
}

impl<T: 'static, E: 'static> Specification<T, E> {
    pub(crate) fn chain(
        condition: Option<Condition<T>>,
        rules: Vec<Rule<T, E>>,
        doc: Option<String>,
    ) -> Self {
        let rules: Arc<[Rule<T, E>]> = rules.into();
        let hash = fingerprint_json(Tag::Specification, &chain_content(condition.as_ref(), &rules));
        tracing::debug!(
            hash = %hash,
            rules = rules.len(),
            conditional = condition.is_some(),
            "specification built"
        );

        Self {
            meta: ElementMeta::new(Tag::Specification, hash).with_doc(doc),
            kind: SpecKind::Chain,
            node: Node::Chain { condition, rules },
        }
    }

    pub(crate) fn composite<F>(kind: SpecKind, content: Json, check: F) -> Self
    where
        F: Fn(&T) -> Result<(), E> + Send + Sync + 'static,
    {
        let hash = fingerprint_json(Tag::Specification, &content);
        tracing::debug!(hash = %hash, kind = kind.as_str(), "specification combined");

        Self {
            meta: ElementMeta::new(Tag::Specification, hash),
            kind,
            node: Node::Composite {
                content,
                check: Arc::new(check),
            },
        }
    }
}

impl<T, E> Specification<T, E> {
    /// Evaluates the specification, handing the input back on success.
    pub fn satisfy(&self, input: T) -> Result<T, E> {
        self.check(&input).map(|()| input)
    }

    /// Evaluates the specification against a borrowed input.
    pub fn check(&self, input: &T) -> Result<(), E> {
        match &self.node {
            Node::Chain { condition, rules } => {
                if let Some(condition) = condition {
                    if !condition.holds(input) {
                        tracing::trace!(spec = %self.meta.hash(), "not applicable, vacuously satisfied");
                        return Ok(());
                    }
                }
                for rule in rules.iter() {
                    if let Err(error) = rule.check(input) {
                        tracing::trace!(
                            spec = %self.meta.hash(),
                            rule = rule.display_name(),
                            "rule failed"
                        );
                        return Err(error);
                    }
                }
                Ok(())
            }
            Node::Composite { check, .. } => check(input),
        }
    }

    /// Shape of this specification.
    pub fn kind(&self) -> SpecKind {
        self.kind
    }

    /// Rules of a chain in declaration order; empty for combined specifications.
    pub fn rules(&self) -> &[Rule<T, E>] {
        match &self.node {
            Node::Chain { rules, .. } => &rules[..],
            Node::Composite { .. } => &[],
        }
    }

    /// First rule declared under `name`.
    pub fn rule(&self, name: &str) -> Option<&Rule<T, E>> {
        self.rules().iter().find(|rule| rule.name() == Some(name))
    }

    /// `true` if a `when` predicate guards the chain.
    pub fn has_condition(&self) -> bool {
        matches!(
            &self.node,
            Node::Chain {
                condition: Some(_),
                ..
            }
        )
    }

    /// Human description, if any.
    pub fn doc(&self) -> Option<&str> {
        self.meta.doc()
    }
}

impl<T, E> Element for Specification<T, E> {
    fn meta(&self) -> &ElementMeta {
        &self.meta
    }

    fn content(&self) -> Json {
        match &self.node {
            Node::Chain { condition, rules } => chain_content(condition.as_ref(), rules),
            Node::Composite { content, .. } => content.clone(),
        }
    }
}

impl<T, E> Clone for Specification<T, E> {
    fn clone(&self) -> Self {
        Self {
            meta: self.meta.clone(),
            kind: self.kind,
            node: self.node.clone(),
        }
    }
}

impl<T, E> fmt::Debug for Specification<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Specification")
            .field("kind", &self.kind)
            .field("hash", self.meta.hash())
            .field("doc", &self.meta.doc())
            .field("rules", &self.rules().iter().map(Rule::display_name).collect::<Vec<_>>())
            .finish()
    }
}
