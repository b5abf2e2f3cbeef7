//! Substitution environment produced by one unification call
//!
//! The representation adapts to the number of bindings:
//! - Empty: no allocation for calls that bind nothing (ground terms, wildcards)
//! - Single: inline for the very common one-variable pattern
//! - Small: SmallVec for 2-8 bindings, spilling to the heap beyond that
//!
//! Entries are keyed by variable instance. Reporting by name is a view over
//! those entries: when two distinct instances share a name, the later write
//! wins under that name.

use smallvec::SmallVec;

use super::{Term, Variable};

/// Hybrid bindings structure optimized for common cases
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SmartBindings {
    /// No bindings (zero-cost)
    #[default]
    Empty,
    /// Single binding (inline, no allocation)
    Single((Variable, Term)),
    /// 2-8 bindings (stack-allocated via SmallVec)
    /// >8 bindings (SmallVec spills to heap automatically)
    Small(Box<SmallVec<[(Variable, Term); 8]>>),
}

impl SmartBindings {
    /// Create empty bindings
    #[inline]
    pub fn new() -> Self {
        SmartBindings::Empty
    }

    #[inline]
    fn entries(&self) -> &[(Variable, Term)] {
        match self {
            SmartBindings::Empty => &[],
            SmartBindings::Single(entry) => std::slice::from_ref(entry),
            SmartBindings::Small(vec) => vec.as_slice(),
        }
    }

    /// Get the value bound to this exact variable instance
    #[inline]
    pub fn lookup(&self, var: &Variable) -> Option<&Term> {
        self.entries()
            .iter()
            .find(|(v, _)| v.same_instance(var))
            .map(|(_, t)| t)
    }

    /// Get the value reported under `name` (most recent write wins)
    #[inline]
    pub fn get(&self, name: &str) -> Option<&Term> {
        self.entries()
            .iter()
            .rev()
            .find(|(v, _)| v.name() == name)
            .map(|(_, t)| t)
    }

    /// Check whether any binding is reported under `name`
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Record a binding, replacing any earlier value for the same instance
    ///
    /// Transitions:
    /// - Empty → Single
    /// - Single → Small (with 2 elements)
    /// - Small → Small (push)
    pub fn insert(&mut self, var: &Variable, value: Term) {
        match self {
            SmartBindings::Empty => {
                *self = SmartBindings::Single((var.clone(), value));
            }
            SmartBindings::Single(existing) if existing.0.same_instance(var) => {
                existing.1 = value;
            }
            SmartBindings::Single(_) => {
                let previous = std::mem::take(self);
                let mut vec = SmallVec::new();
                if let SmartBindings::Single(entry) = previous {
                    vec.push(entry);
                }
                vec.push((var.clone(), value));
                *self = SmartBindings::Small(Box::new(vec));
            }
            SmartBindings::Small(vec) => {
                match vec.iter_mut().find(|(v, _)| v.same_instance(var)) {
                    Some(entry) => entry.1 = value,
                    None => vec.push((var.clone(), value)),
                }
            }
        }
    }

    /// Iterate over reported bindings as `(name, value)`, one per name
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Term)> + '_ {
        let entries = self.entries();
        entries
            .iter()
            .enumerate()
            .filter(move |(i, (var, _))| {
                !entries[i + 1..]
                    .iter()
                    .any(|(later, _)| later.name() == var.name())
            })
            .map(|(_, (var, value))| (var.name(), value))
    }

    /// Iterate over every bound variable instance, including shadowed ones
    pub fn instances(&self) -> impl Iterator<Item = (&Variable, &Term)> + '_ {
        self.entries().iter().map(|(v, t)| (v, t))
    }

    /// Names that have a reported binding
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.iter().map(|(name, _)| name)
    }

    /// Get the number of reported names
    #[inline]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Check if there are no bindings
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, SmartBindings::Empty)
    }

    /// Instantiate `term`, replacing every bound variable with its value
    ///
    /// Unbound variables and wildcards are left in place. A variable bound to a
    /// term containing itself makes this recurse without end.
    pub fn apply(&self, term: &Term) -> Term {
        if self.is_empty() {
            return term.clone();
        }
        match term {
            Term::Variable(var) => match self.lookup(var) {
                Some(value) => self.apply(value),
                None => term.clone(),
            },
            Term::Sequence(items) => {
                Term::Sequence(items.iter().map(|item| self.apply(item)).collect())
            }
            Term::Record(entries) => Term::Record(
                entries
                    .iter()
                    .map(|(k, v)| (k.clone(), self.apply(v)))
                    .collect(),
            ),
            Term::Primitive(_) | Term::Callable(_) | Term::Wildcard => term.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::models::variable;

    #[test]
    fn test_empty_bindings() {
        let bindings = SmartBindings::new();
        assert!(bindings.is_empty());
        assert_eq!(bindings.len(), 0);
        assert_eq!(bindings.get("x"), None);
    }

    #[test]
    fn test_single_binding() {
        let x = variable("x").unwrap();
        let y = variable("y").unwrap();
        let mut bindings = SmartBindings::new();
        bindings.insert(&x, Term::from(42));

        assert!(!bindings.is_empty());
        assert_eq!(bindings.len(), 1);
        assert_eq!(bindings.get("x"), Some(&Term::from(42)));
        assert_eq!(bindings.lookup(&x), Some(&Term::from(42)));
        assert_eq!(bindings.lookup(&y), None);

        // Check variant
        assert!(matches!(bindings, SmartBindings::Single(_)));
    }

    #[test]
    fn test_transition_to_small() {
        let x = variable("x").unwrap();
        let y = variable("y").unwrap();
        let mut bindings = SmartBindings::new();
        bindings.insert(&x, Term::from(42));
        bindings.insert(&y, Term::from(43));

        assert_eq!(bindings.len(), 2);
        assert_eq!(bindings.get("x"), Some(&Term::from(42)));
        assert_eq!(bindings.get("y"), Some(&Term::from(43)));

        // Check variant transitioned to Small
        assert!(matches!(bindings, SmartBindings::Small(_)));
    }

    #[test]
    fn test_insert_same_instance_replaces() {
        let x = variable("x").unwrap();
        let mut bindings = SmartBindings::new();
        bindings.insert(&x, Term::from(1));
        bindings.insert(&x, Term::from(2));
        assert!(matches!(bindings, SmartBindings::Single(_)));
        assert_eq!(bindings.lookup(&x), Some(&Term::from(2)));
    }

    #[test]
    fn test_same_name_later_write_wins() {
        let first = variable("a").unwrap();
        let second = variable("a").unwrap();
        let mut bindings = SmartBindings::new();
        bindings.insert(&first, Term::from(1));
        bindings.insert(&second, Term::from(2));

        assert_eq!(bindings.get("a"), Some(&Term::from(2)));
        assert_eq!(bindings.lookup(&first), Some(&Term::from(1)));
        assert_eq!(bindings.len(), 1);
        assert_eq!(bindings.instances().count(), 2);
    }

    #[test]
    fn test_iterator() {
        let mut bindings = SmartBindings::new();
        for (name, n) in [("x", 1), ("y", 2), ("z", 3)] {
            bindings.insert(&variable(name).unwrap(), Term::from(n));
        }

        let collected: Vec<_> = bindings.iter().collect();
        assert_eq!(collected.len(), 3);
        assert!(collected.contains(&("x", &Term::from(1))));
        assert!(collected.contains(&("y", &Term::from(2))));
        assert!(collected.contains(&("z", &Term::from(3))));
    }

    #[test]
    fn test_spills_past_inline_capacity() {
        let mut bindings = SmartBindings::new();
        for i in 0..12 {
            bindings.insert(&variable(&format!("v{}", i)).unwrap(), Term::from(i));
        }
        assert_eq!(bindings.len(), 12);
        for i in 0..12 {
            assert_eq!(bindings.get(&format!("v{}", i)), Some(&Term::from(i)));
        }
    }

    #[test]
    fn test_apply_instantiates_nested_terms() {
        let a = variable("a").unwrap();
        let b = variable("b").unwrap();
        let unbound = variable("c").unwrap();
        let mut bindings = SmartBindings::new();
        bindings.insert(&a, Term::seq(vec![Term::from(&b)]));
        bindings.insert(&b, Term::from("leaf"));

        let template = Term::record([
            ("first", Term::from(&a)),
            ("second", Term::from(&unbound)),
            ("third", Term::Wildcard),
        ]);
        let expected = Term::record([
            ("first", Term::seq(["leaf"])),
            ("second", Term::from(&unbound)),
            ("third", Term::Wildcard),
        ]);
        assert_eq!(bindings.apply(&template), expected);
    }
}
