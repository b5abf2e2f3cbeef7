use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use super::{Callable, Variable};

/// Key/value collection term; keys are unique and unordered for matching
pub type Record = BTreeMap<String, Term>;

/// A value presented to the unification engine
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    /// A ground literal
    Primitive(Primitive),
    /// An ordered list of terms
    Sequence(Vec<Term>),
    /// A key/value collection of terms
    Record(Record),
    /// A function compared by identity
    Callable(Callable),
    /// A logic variable
    Variable(Variable),
    /// Matches any term without binding
    Wildcard,
}

/// Ground literal values
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Nil,
    Bool(bool),
    Long(i64),
    Float(f64),
    String(String),
    Date(DateTime<Utc>),
}

/// The six term kinds the engine distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TermKind {
    Wildcard,
    Variable,
    Sequence,
    Callable,
    Record,
    Primitive,
}

impl Term {
    /// Classify this term
    #[inline]
    pub fn kind(&self) -> TermKind {
        match self {
            Term::Wildcard => TermKind::Wildcard,
            Term::Variable(_) => TermKind::Variable,
            Term::Sequence(_) => TermKind::Sequence,
            Term::Callable(_) => TermKind::Callable,
            Term::Record(_) => TermKind::Record,
            Term::Primitive(_) => TermKind::Primitive,
        }
    }

    /// Build a sequence from anything convertible to terms
    pub fn seq<I, T>(items: I) -> Term
    where
        I: IntoIterator<Item = T>,
        T: Into<Term>,
    {
        Term::Sequence(items.into_iter().map(Into::into).collect())
    }

    /// Build a record from key/value pairs (later duplicates replace earlier ones)
    pub fn record<I, K, V>(entries: I) -> Term
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Term>,
    {
        Term::Record(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    #[inline]
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Term::Wildcard)
    }

    #[inline]
    pub fn is_variable(&self) -> bool {
        matches!(self, Term::Variable(_))
    }

    /// Check that no logic variable occurs anywhere inside this term
    pub fn is_ground(&self) -> bool {
        match self {
            Term::Variable(_) => false,
            Term::Sequence(items) => items.iter().all(Term::is_ground),
            Term::Record(entries) => entries.values().all(Term::is_ground),
            Term::Primitive(_) | Term::Callable(_) | Term::Wildcard => true,
        }
    }

    pub fn as_variable(&self) -> Option<&Variable> {
        match self {
            Term::Variable(v) => Some(v),
            _ => None,
        }
    }
}

impl From<Primitive> for Term {
    fn from(p: Primitive) -> Self {
        Term::Primitive(p)
    }
}

impl From<bool> for Term {
    fn from(b: bool) -> Self {
        Term::Primitive(Primitive::Bool(b))
    }
}

impl From<i64> for Term {
    fn from(n: i64) -> Self {
        Term::Primitive(Primitive::Long(n))
    }
}

impl From<i32> for Term {
    fn from(n: i32) -> Self {
        Term::Primitive(Primitive::Long(n as i64))
    }
}

impl From<f64> for Term {
    fn from(x: f64) -> Self {
        Term::Primitive(Primitive::Float(x))
    }
}

impl From<&str> for Term {
    fn from(s: &str) -> Self {
        Term::Primitive(Primitive::String(s.to_string()))
    }
}

impl From<String> for Term {
    fn from(s: String) -> Self {
        Term::Primitive(Primitive::String(s))
    }
}

impl From<DateTime<Utc>> for Term {
    fn from(d: DateTime<Utc>) -> Self {
        Term::Primitive(Primitive::Date(d))
    }
}

impl<T: Into<Term>> From<Vec<T>> for Term {
    fn from(items: Vec<T>) -> Self {
        Term::seq(items)
    }
}

impl From<Record> for Term {
    fn from(r: Record) -> Self {
        Term::Record(r)
    }
}

impl From<Callable> for Term {
    fn from(c: Callable) -> Self {
        Term::Callable(c)
    }
}

impl From<Variable> for Term {
    fn from(v: Variable) -> Self {
        Term::Variable(v)
    }
}

impl From<&Variable> for Term {
    fn from(v: &Variable) -> Self {
        Term::Variable(v.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::models::{variable, WILDCARD};

    #[test]
    fn test_kind_covers_every_variant() {
        assert_eq!(WILDCARD.kind(), TermKind::Wildcard);
        assert_eq!(Term::from(variable("a").unwrap()).kind(), TermKind::Variable);
        assert_eq!(Term::seq([1, 2]).kind(), TermKind::Sequence);
        assert_eq!(
            Term::from(Callable::new(|_| Term::Wildcard)).kind(),
            TermKind::Callable
        );
        assert_eq!(Term::record([("k", 1)]).kind(), TermKind::Record);
        assert_eq!(Term::from("s").kind(), TermKind::Primitive);
    }

    #[test]
    fn test_empty_record_is_not_a_sequence() {
        let empty: Record = Record::new();
        assert_eq!(Term::from(empty).kind(), TermKind::Record);
        assert_eq!(Term::seq(Vec::<Term>::new()).kind(), TermKind::Sequence);
    }

    #[test]
    fn test_is_ground() {
        let a = variable("a").unwrap();
        assert!(Term::seq([1, 2]).is_ground());
        assert!(WILDCARD.is_ground());
        assert!(!Term::seq(vec![Term::from(1), Term::from(&a)]).is_ground());
        assert!(!Term::record([("hello", Term::seq(vec![Term::from(&a)]))]).is_ground());
    }

    #[test]
    fn test_record_duplicate_keys_collapse() {
        let r = Term::record([("k", 1), ("k", 2)]);
        match r {
            Term::Record(entries) => {
                assert_eq!(entries.len(), 1);
                assert_eq!(entries.get("k"), Some(&Term::from(2)));
            }
            other => panic!("expected record, got {:?}", other),
        }
    }
}
