//! Unifytron - Structural Unification Library
//!
//! This library decides whether two in-memory values can be made structurally
//! identical by choosing bindings for logic variables, and reports those
//! bindings when they can.
//!
//! # Architecture
//!
//! 1. **Term Model** (`backend::models`)
//!    - `Term` is a closed set of kinds: primitive, sequence, record,
//!      callable, logic variable and wildcard
//!    - `Variable` carries an explicit identity; same-named variables built by
//!      separate calls are independent
//!    - `Bindings` is the substitution environment of one call
//!
//! 2. **Unification Engine** (`backend::eval`)
//!    - Recursive structural comparison with one mutable environment per call
//!    - Type-constrained variables consult `backend::types`
//!    - Failure is `None`; partial bindings are never exposed
//!
//! # Example
//!
//! ```rust
//! use unifytron::*;
//!
//! let a = variable("a").unwrap();
//! let pattern = Term::record([("hello", Term::from(&a))]);
//! let value = Term::record([("hello", "world")]);
//!
//! let bindings = unify(&pattern, &value).unwrap();
//! assert_eq!(bindings.get("a"), Some(&Term::from("world")));
//!
//! // The wildcard matches anything and binds nothing
//! assert!(unify(&Term::from(&a), &WILDCARD).unwrap().get("a").is_none());
//! ```
//!
//! # Matching Rules
//!
//! - **Wildcard**: unifies with anything, checked before variables
//! - **Variables**: bind once per call; later occurrences must agree
//! - **Sequences**: equal length, index-aligned elements unify
//! - **Records**: equal key sets, unless a catch-all entry (key `_` by
//!   default) absorbs the other side's extra entries
//! - **Callables**: identity only
//! - **Primitives**: equality within the same kind
//!
//! # Limitations
//!
//! There is no occurs check. A variable bound to a term containing itself is
//! reported as-is, and `Bindings::apply` on such a binding does not terminate.

pub mod backend;

pub use backend::{
    bind_variable, bindings_to_json, satisfies, term_to_json, typed_variable, unifies, unify,
    unify_with, variable, wildcard, Bindings, Callable, CallableId, Primitive, Record, Term,
    TermKind, TypeConstraint, TypeDescriptor, UnifyConfig, UnifyError, UnifyResult, VarId,
    Variable, WILDCARD,
};
