//! AND combinator - logical conjunction of specifications

use serde_json::json;

use crate::foundation::identity::Element;
use crate::spec::{SpecKind, Specification};

impl<T: 'static, E: 'static> Specification<T, E> {
    /// Combines two specifications with logical AND.
    ///
    /// `self` runs first; its `Err` is returned without evaluating `other`.
    /// Otherwise the result of `other` is returned as is, with its error
    /// converted into `E`.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let adult_with_email = adult.and(&has_email);
    /// assert_eq!(adult_with_email.satisfy(minor), Err("INVALID_AGE"));
    /// ```
    pub fn and<E2>(&self, other: &Specification<T, E2>) -> Specification<T, E>
    where
        E2: Into<E> + 'static,
    {
        let left = self.clone();
        let right = other.clone();
        let content = json!({
            "kind": SpecKind::And,
            "left": left.meta().hash(),
            "right": right.meta().hash(),
        });

        Specification::composite(SpecKind::And, content, move |input: &T| -> Result<(), E> {
            left.check(input)?;
            right.check(input).map_err(Into::into)
        })
    }
}
