//! Value Objects
//!
//! Immutable types that describe domain concepts without identity.

mod name_policy;

pub use name_policy::*;
