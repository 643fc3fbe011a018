//! WHEN - applicability predicate of a specification
//!
//! A specification built with [`SpecBuilder::when`](crate::spec::SpecBuilder::when)
//! only runs its rules for inputs the [`Condition`] holds for. For every other
//! input it is vacuously satisfied.
//!
//! # Examples
//!
//! ```rust,ignore
//! let adults_need_email = spec::<User, &str>()
//!     .when(|u| u.age >= 18)
//!     .rule("email", |u| if u.email.contains('@') { Ok(()) } else { Err("INVALID_EMAIL") })
//!     .build();
//!
//! assert!(adults_need_email.satisfy(child_without_email).is_ok()); // skipped
//! ```

use std::any::type_name;
use std::fmt;
use std::sync::Arc;

type PredicateFn<T> = dyn Fn(&T) -> bool + Send + Sync;

/// Applicability predicate over `T`.
pub struct Condition<T> {
    predicate: Arc<PredicateFn<T>>,
    name: &'static str,
}

impl<T: 'static> Condition<T> {
    /// Wraps a predicate.
    pub fn new<P>(predicate: P) -> Self
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Arc::new(predicate),
            name: type_name::<P>(),
        }
    }
}

impl<T> Condition<T> {
    /// `true` if the guarded rules apply to `input`.
    #[inline]
    pub fn holds(&self, input: &T) -> bool {
        (self.predicate)(input)
    }

    /// Type name of the predicate, used as fingerprint content.
    pub fn predicate_name(&self) -> &'static str {
        self.name
    }
}

impl<T> Clone for Condition<T> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
            name: self.name,
        }
    }
}

impl<T> fmt::Debug for Condition<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Condition")
            .field("predicate", &self.name)
            .finish()
    }
}
