//! Logic variables and the wildcard.
//!
//! Every call to [`variable`] or [`typed_variable`] yields a new instance with
//! its own [`VarId`]. The name is only the key under which a binding is
//! reported; two variables named `a` built by separate calls are independent.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};

use regex::Regex;

use super::Term;
use crate::backend::errors::{UnifyError, UnifyResult};
use crate::backend::types::TypeConstraint;

/// Global counter for generating unique variable IDs
static VARIABLE_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Pattern for a usable variable name
static LABEL: OnceLock<Regex> = OnceLock::new();

fn is_simple_label(name: &str) -> bool {
    LABEL
        .get_or_init(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("label pattern is valid"))
        .is_match(name)
}

/// The wildcard sentinel: unifies with any term and binds nothing
pub const WILDCARD: Term = Term::Wildcard;

/// Return the wildcard sentinel
#[inline]
pub fn wildcard() -> Term {
    WILDCARD
}

/// Identity token of a [`Variable`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VarId(u64);

impl VarId {
    fn fresh() -> Self {
        VarId(VARIABLE_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    #[inline]
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

/// A named logic variable with an optional type constraint
///
/// Clones share identity. Equality and hashing use the id only.
#[derive(Clone)]
pub struct Variable {
    id: VarId,
    name: Arc<str>,
    constraint: Option<TypeConstraint>,
}

impl Variable {
    /// Create a variable, validating its name
    pub fn new(name: &str, constraint: Option<TypeConstraint>) -> UnifyResult<Self> {
        if name.is_empty() {
            return Err(UnifyError::InvalidArgument(
                "variable name must not be empty".to_string(),
            ));
        }
        if !is_simple_label(name) {
            return Err(UnifyError::InvalidArgument(format!(
                "variable name {:?} is not a simple label",
                name
            )));
        }
        Ok(Variable {
            id: VarId::fresh(),
            name: Arc::from(name),
            constraint,
        })
    }

    #[inline]
    pub fn id(&self) -> VarId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn constraint(&self) -> Option<&TypeConstraint> {
        self.constraint.as_ref()
    }

    /// Check whether two handles denote the same variable instance
    #[inline]
    pub fn same_instance(&self, other: &Variable) -> bool {
        self.id == other.id
    }
}

impl PartialEq for Variable {
    fn eq(&self, other: &Self) -> bool {
        self.same_instance(other)
    }
}

impl Eq for Variable {}

impl Hash for Variable {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.constraint {
            Some(c) => write!(f, "${}#{}: {:?}", self.name, self.id.0, c),
            None => write!(f, "${}#{}", self.name, self.id.0),
        }
    }
}

/// Create an unconstrained logic variable
pub fn variable(name: &str) -> UnifyResult<Variable> {
    Variable::new(name, None)
}

/// Create a logic variable that only binds to values meeting `constraint`
pub fn typed_variable(name: &str, constraint: impl Into<TypeConstraint>) -> UnifyResult<Variable> {
    Variable::new(name, Some(constraint.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::types::TypeDescriptor;

    #[test]
    fn test_fresh_identity_per_construction() {
        let a1 = variable("a").unwrap();
        let a2 = variable("a").unwrap();
        assert_eq!(a1.name(), a2.name());
        assert_ne!(a1, a2);
        assert_eq!(a1, a1.clone());
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(matches!(variable(""), Err(UnifyError::InvalidArgument(_))));
    }

    #[test]
    fn test_non_label_names_rejected() {
        for bad in ["1a", "a b", "a-b", "(x)", " "] {
            assert!(
                matches!(variable(bad), Err(UnifyError::InvalidArgument(_))),
                "{:?} should be rejected",
                bad
            );
        }
        for good in ["a", "_", "x1", "$n", "snake_case"] {
            assert!(variable(good).is_ok(), "{:?} should be accepted", good);
        }
    }

    #[test]
    fn test_typed_variable_carries_constraint() {
        let d = typed_variable("d", TypeDescriptor::Date).unwrap();
        assert!(matches!(
            d.constraint(),
            Some(TypeConstraint::Type(TypeDescriptor::Date))
        ));
        assert!(variable("d").unwrap().constraint().is_none());
    }

    #[test]
    fn test_wildcard_constant() {
        assert_eq!(wildcard(), WILDCARD);
        assert!(WILDCARD.is_wildcard());
    }
}
