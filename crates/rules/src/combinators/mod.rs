//! Specification combinators
//!
//! Each combinator returns a new [`Specification`](crate::spec::Specification)
//! and leaves its operands untouched:
//!
//! - [`and`](crate::spec::Specification::and): both must hold; the left error wins
//! - [`or`](crate::spec::Specification::or): either may hold; the right error is reported
//! - [`not`](crate::spec::Specification::not): inverts, failing with a custom error
//!
//! plus [`Condition`], the `when` predicate that makes a rule chain
//! conditionally applicable.
//!
//! # Examples
//!
//! ```rust,ignore
//! let privileged = admin.or(&owner);
//! let regular = privileged.not("PRIVILEGED");
//! let publishable = verified.and(&regular);
//! ```

mod and;
mod not;
mod or;
mod when;

pub use when::Condition;
