// Backend module for structural unification
//
// This module provides:
// - `models`: terms, logic variables, callables and the bindings environment
// - `types`: type constraints checked when a constrained variable binds
// - `eval`: the unification engine
// - `json`: classification of JSON values into terms

pub mod config;
pub mod errors;
pub mod eval;
pub mod json;
pub mod models;
pub mod types;

pub use config::{UnifyConfig, DEFAULT_CATCH_ALL_KEY};
pub use errors::{UnifyError, UnifyResult};
pub use eval::{bind_variable, unifies, unify, unify_with};
pub use json::{bindings_to_json, term_to_json};
pub use models::*;
pub use types::{satisfies, ConstraintFn, TypeConstraint, TypeDescriptor};
