//! Type constraints attached to logic variables.
//!
//! A constrained variable only binds to candidates whose runtime kind matches
//! the named type exactly. There is no coercion between kinds: a `Long`
//! constraint rejects `Float` candidates and vice versa.

use std::fmt;
use std::sync::Arc;

use crate::backend::models::{Primitive, Term};

/// Runtime type of a ground value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeDescriptor {
    Nil,
    Bool,
    Long,
    Float,
    String,
    Date,
    Sequence,
    Record,
    Callable,
}

impl TypeDescriptor {
    /// Runtime type of a term, or `None` for variables and the wildcard
    pub fn of(term: &Term) -> Option<TypeDescriptor> {
        match term {
            Term::Primitive(Primitive::Nil) => Some(TypeDescriptor::Nil),
            Term::Primitive(Primitive::Bool(_)) => Some(TypeDescriptor::Bool),
            Term::Primitive(Primitive::Long(_)) => Some(TypeDescriptor::Long),
            Term::Primitive(Primitive::Float(_)) => Some(TypeDescriptor::Float),
            Term::Primitive(Primitive::String(_)) => Some(TypeDescriptor::String),
            Term::Primitive(Primitive::Date(_)) => Some(TypeDescriptor::Date),
            Term::Sequence(_) => Some(TypeDescriptor::Sequence),
            Term::Record(_) => Some(TypeDescriptor::Record),
            Term::Callable(_) => Some(TypeDescriptor::Callable),
            Term::Variable(_) | Term::Wildcard => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TypeDescriptor::Nil => "Nil",
            TypeDescriptor::Bool => "Bool",
            TypeDescriptor::Long => "Long",
            TypeDescriptor::Float => "Float",
            TypeDescriptor::String => "String",
            TypeDescriptor::Date => "Date",
            TypeDescriptor::Sequence => "Sequence",
            TypeDescriptor::Record => "Record",
            TypeDescriptor::Callable => "Callable",
        }
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Caller-supplied acceptance test for candidate values
pub type ConstraintFn = Arc<dyn Fn(&Term) -> bool + Send + Sync>;

/// Requirement a candidate must meet before a variable binds to it
#[derive(Clone)]
pub enum TypeConstraint {
    /// Candidate must be exactly this runtime type
    Type(TypeDescriptor),
    /// Candidate must pass the predicate
    Predicate(ConstraintFn),
}

impl TypeConstraint {
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&Term) -> bool + Send + Sync + 'static,
    {
        TypeConstraint::Predicate(Arc::new(f))
    }
}

impl From<TypeDescriptor> for TypeConstraint {
    fn from(ty: TypeDescriptor) -> Self {
        TypeConstraint::Type(ty)
    }
}

impl fmt::Debug for TypeConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeConstraint::Type(ty) => write!(f, "Type({})", ty),
            TypeConstraint::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

/// Decide whether `candidate` satisfies `constraint`
pub fn satisfies(constraint: &TypeConstraint, candidate: &Term) -> bool {
    match constraint {
        TypeConstraint::Type(expected) => TypeDescriptor::of(candidate) == Some(*expected),
        TypeConstraint::Predicate(pred) => pred(candidate),
    }
}
