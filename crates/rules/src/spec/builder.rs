//! Specification builder
//!
//! The builder is the unbuilt state: it accepts `when` and `rule` calls and is
//! consumed by [`SpecBuilder::build`]. A built [`Specification`] has no way
//! back, so rules cannot be added after the fact.

use std::fmt;

use crate::combinators::Condition;
use crate::spec::{Rule, Specification};

/// Unbuilt specification over `T` whose rule errors convert into `E`.
pub struct SpecBuilder<T, E> {
    condition: Option<Condition<T>>,
    rules: Vec<Rule<T, E>>,
    doc: Option<String>,
}

/// Starts an empty specification builder: no predicate, no rules.
pub fn spec<T: 'static, E: 'static>() -> SpecBuilder<T, E> {
    SpecBuilder::new()
}

impl<T: 'static, E: 'static> SpecBuilder<T, E> {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self {
            condition: None,
            rules: Vec::new(),
            doc: None,
        }
    }

    /// Sets the applicability predicate, replacing any earlier one.
    #[must_use = "builder methods must be chained or built"]
    pub fn when<P>(mut self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.condition = Some(Condition::new(predicate));
        self
    }

    /// Appends a named rule.
    #[must_use = "builder methods must be chained or built"]
    pub fn rule<R, F>(mut self, name: impl Into<String>, check: F) -> Self
    where
        R: Into<E> + 'static,
        F: Fn(&T) -> Result<(), R> + Send + Sync + 'static,
    {
        self.rules.push(Rule::from_fn(Some(name.into()), check));
        self
    }

    /// Appends an anonymous rule.
    #[must_use = "builder methods must be chained or built"]
    pub fn rule_fn<R, F>(mut self, check: F) -> Self
    where
        R: Into<E> + 'static,
        F: Fn(&T) -> Result<(), R> + Send + Sync + 'static,
    {
        self.rules.push(Rule::from_fn(None, check));
        self
    }

    /// Appends a standalone rule, keeping its identity.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_rule<R>(mut self, rule: Rule<T, R>) -> Self
    where
        R: Into<E> + 'static,
    {
        self.rules.push(rule.map_err_into());
        self
    }

    /// Sets the human description.
    #[must_use = "builder methods must be chained or built"]
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Freezes the builder into a specification.
    pub fn build(self) -> Specification<T, E> {
        Specification::chain(self.condition, self.rules, self.doc)
    }
}

impl<T: 'static, E: 'static> Default for SpecBuilder<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> fmt::Debug for SpecBuilder<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpecBuilder")
            .field("condition", &self.condition)
            .field("rules", &self.rules)
            .field("doc", &self.doc)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::identity::{Element, is_rule, is_spec};
    use crate::spec::rule;

    #[derive(Debug, PartialEq)]
    enum OrderError {
        Empty,
        TooLarge,
    }

    #[derive(Debug, PartialEq)]
    struct Empty;

    impl From<Empty> for OrderError {
        fn from(_: Empty) -> Self {
            Self::Empty
        }
    }

    #[test]
    fn test_rule_errors_widen_into_union() {
        let spec = spec::<Vec<u32>, OrderError>()
            .rule("non_empty", |items| if items.is_empty() { Err(Empty) } else { Ok(()) })
            .rule("bounded", |items| {
                if items.len() > 3 { Err(OrderError::TooLarge) } else { Ok(()) }
            })
            .build();

        assert_eq!(spec.check(&vec![]), Err(OrderError::Empty));
        assert_eq!(spec.check(&vec![1, 2, 3, 4]), Err(OrderError::TooLarge));
        assert_eq!(spec.satisfy(vec![1]), Ok(vec![1]));
    }

    #[test]
    fn test_with_rule_reuses_standalone_rule() {
        let non_empty = rule("non_empty", |items: &Vec<u32>| {
            if items.is_empty() { Err(Empty) } else { Ok(()) }
        });
        let hash = non_empty.meta().hash().clone();

        let spec = spec::<Vec<u32>, OrderError>().with_rule(non_empty).build();
        let reused = spec.rule("non_empty").unwrap();

        assert!(is_rule(reused));
        assert_eq!(reused.meta().hash(), &hash);
        assert_eq!(spec.check(&vec![]), Err(OrderError::Empty));
    }

    #[test]
    fn test_anonymous_rule() {
        let spec = spec::<u32, &'static str>()
            .rule_fn(|n| if *n < 10 { Ok(()) } else { Err("TOO_BIG") })
            .build();

        assert_eq!(spec.rules()[0].name(), None);
        assert_eq!(spec.check(&12), Err("TOO_BIG"));
    }

    #[test]
    fn test_doc_and_identity() {
        let plain = spec::<u32, &'static str>().rule("r", |_| Ok::<(), &str>(())).build();
        let documented = SpecBuilder::<u32, &'static str>::default()
            .doc("accepts everything")
            .rule("r", |_| Ok::<(), &str>(()))
            .build();

        assert_eq!(documented.doc(), Some("accepts everything"));
        assert!(is_spec(&plain));
        assert!(is_spec(&documented));
    }
}
