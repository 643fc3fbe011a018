//! OR combinator - logical disjunction of specifications

use serde_json::json;

use crate::foundation::identity::Element;
use crate::spec::{SpecKind, Specification};

impl<T: 'static, E: 'static> Specification<T, E> {
    /// Combines two specifications with logical OR.
    ///
    /// `self` runs first; its success is returned without evaluating `other`.
    /// Otherwise the result of `other` is returned as is, so when both fail
    /// the reported error is the one `other` produced.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let staff = admin.or(&moderator);
    /// assert_eq!(staff.satisfy(guest), Err("NOT_MODERATOR"));
    /// ```
    pub fn or<E2>(&self, other: &Specification<T, E2>) -> Specification<T, E>
    where
        E2: Into<E> + 'static,
    {
        let left = self.clone();
        let right = other.clone();
        let content = json!({
            "kind": SpecKind::Or,
            "left": left.meta().hash(),
            "right": right.meta().hash(),
        });

        Specification::composite(SpecKind::Or, content, move |input: &T| -> Result<(), E> {
            match left.check(input) {
                Ok(()) => Ok(()),
                Err(_) => right.check(input).map_err(Into::into),
            }
        })
    }
}
