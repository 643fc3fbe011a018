//! NOT combinator - logical negation of a specification

use std::any::type_name;
use std::fmt;

use serde_json::json;

use crate::foundation::identity::Element;
use crate::spec::{SpecKind, Specification};

impl<T: 'static, E: 'static> Specification<T, E> {
    /// Inverts the specification.
    ///
    /// - If `self` is satisfied, the negation fails with `error`.
    /// - If `self` fails, the negation succeeds and hands the input back.
    ///
    /// The resulting error type is the type of `error`.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let not_banned = banned.not("BANNED");
    /// assert_eq!(not_banned.satisfy(spammer), Err("BANNED"));
    /// ```
    pub fn not<N>(&self, error: N) -> Specification<T, N>
    where
        N: Clone + fmt::Debug + Send + Sync + 'static,
    {
        let inner = self.clone();
        let content = json!({
            "kind": SpecKind::Not,
            "inner": inner.meta().hash(),
            "error": { "type": type_name::<N>(), "value": format!("{error:?}") },
        });

        Specification::composite(SpecKind::Not, content, move |input: &T| -> Result<(), N> {
            match inner.check(input) {
                Ok(()) => Err(error.clone()),
                Err(_) => Ok(()),
            }
        })
    }
}
