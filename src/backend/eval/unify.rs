//! Structural unification of terms.
//!
//! This module implements the core unification algorithm, supporting logic
//! variables (optionally type-constrained), the wildcard, and structural
//! comparison of sequences and records. Matching is deterministic: every
//! variable occurrence has exactly one candidate binding and there are no
//! choice points.
//!
//! Terms are trees, so there is no occurs check. Binding a variable to a term
//! that contains it succeeds and is reported as-is.

use std::sync::OnceLock;

use tracing::{debug, trace};

use crate::backend::config::UnifyConfig;
use crate::backend::models::{Bindings, Record, Term, Variable};
use crate::backend::types::satisfies;

fn default_config() -> &'static UnifyConfig {
    static DEFAULT: OnceLock<UnifyConfig> = OnceLock::new();
    DEFAULT.get_or_init(UnifyConfig::default)
}

/// Unify two terms, returning variable bindings if successful.
///
/// # Returns
/// - `Some(bindings)` if the terms unify, with the bindings made along the way
/// - `None` if they do not; no partial bindings are exposed
///
/// # Examples
/// ```
/// use unifytron::{unify, variable, Term, WILDCARD};
///
/// let a = variable("a").unwrap();
/// let bindings = unify(&Term::from(&a), &Term::from(1)).unwrap();
/// assert_eq!(bindings.get("a"), Some(&Term::from(1)));
///
/// assert!(unify(&WILDCARD, &Term::seq([1, 2])).is_some());
/// assert!(unify(&Term::seq([1]), &Term::seq([1, 2, 3])).is_none());
/// ```
pub fn unify(a: &Term, b: &Term) -> Option<Bindings> {
    unify_with(a, b, default_config())
}

/// Unify two terms under an explicit configuration.
pub fn unify_with(a: &Term, b: &Term, config: &UnifyConfig) -> Option<Bindings> {
    trace!(target: "unifytron::backend::eval::unify", ?a, ?b);
    let mut bindings = Bindings::new();
    if unify_impl(a, b, &mut bindings, config) {
        Some(bindings)
    } else {
        debug!(target: "unifytron::backend::eval::unify", "terms do not unify");
        None
    }
}

/// Check whether two terms unify, discarding the bindings.
pub fn unifies(a: &Term, b: &Term) -> bool {
    unify(a, b).is_some()
}

/// Internal unification that accumulates bindings across recursive calls.
///
/// A `false` result means the whole top-level call fails; callers drop
/// `bindings` in that case.
pub(crate) fn unify_impl(
    a: &Term,
    b: &Term,
    bindings: &mut Bindings,
    config: &UnifyConfig,
) -> bool {
    match (a, b) {
        // Wildcard absorbs anything, including variables, and binds nothing
        (Term::Wildcard, _) | (_, Term::Wildcard) => true,

        (Term::Variable(var), other) | (other, Term::Variable(var)) => {
            bind_variable(var, other, bindings, config)
        }

        // Sequences must have same length and all elements must unify
        (Term::Sequence(xs), Term::Sequence(ys)) => {
            if xs.len() != ys.len() {
                return false;
            }
            for (x, y) in xs.iter().zip(ys.iter()) {
                if !unify_impl(x, y, bindings, config) {
                    return false;
                }
            }
            true
        }

        (Term::Record(xs), Term::Record(ys)) => unify_records(xs, ys, bindings, config),

        (Term::Callable(f), Term::Callable(g)) => f.same_instance(g),

        (Term::Primitive(p), Term::Primitive(q)) => p == q,

        _ => false,
    }
}

/// Bind `var` to `candidate`, or check consistency if `var` is already bound.
///
/// A candidate that is itself a variable is resolved first. Two unbound
/// variables cannot be unified with each other.
pub fn bind_variable(
    var: &Variable,
    candidate: &Term,
    bindings: &mut Bindings,
    config: &UnifyConfig,
) -> bool {
    let candidate = match candidate {
        Term::Wildcard => return true,
        Term::Variable(other) => match bindings.lookup(other) {
            Some(value) => value.clone(),
            None => {
                return match bindings.lookup(var).cloned() {
                    Some(value) => bind_variable(other, &value, bindings, config),
                    None => false,
                };
            }
        },
        other => other.clone(),
    };

    if let Some(existing) = bindings.lookup(var).cloned() {
        return unify_impl(&existing, &candidate, bindings, config);
    }

    if let Some(constraint) = var.constraint() {
        if !satisfies(constraint, &candidate) {
            trace!(
                target: "unifytron::backend::eval::bind_variable",
                var = var.name(),
                ?candidate,
                "type constraint rejected candidate"
            );
            return false;
        }
    }

    trace!(target: "unifytron::backend::eval::bind_variable", var = var.name(), value = ?candidate);
    bindings.insert(var, candidate);
    true
}

/// Unify two records.
///
/// Without a catch-all entry on either side, key sets must be equal. With one:
/// - keys on both sides (the catch-all key included) unify pairwise
/// - a named key missing from the other side is absorbed by the other side's
///   catch-all value, and fails if there is none
/// - a catch-all whose key the other side lacks must absorb at least one entry
fn unify_records(left: &Record, right: &Record, bindings: &mut Bindings, config: &UnifyConfig) -> bool {
    let key = config.catch_all_key();
    let left_rest = key.and_then(|k| left.get(k));
    let right_rest = key.and_then(|k| right.get(k));

    if left_rest.is_none() && right_rest.is_none() {
        if left.len() != right.len() {
            return false;
        }
        for (k, lv) in left {
            let Some(rv) = right.get(k) else {
                return false;
            };
            if !unify_impl(lv, rv, bindings, config) {
                return false;
            }
        }
        return true;
    }

    for (k, lv) in left {
        if let Some(rv) = right.get(k) {
            if !unify_impl(lv, rv, bindings, config) {
                return false;
            }
        }
    }

    let is_rest_key = |k: &String| key == Some(k.as_str());
    let left_extra: Vec<&Term> = left
        .iter()
        .filter(|(k, _)| !right.contains_key(*k) && !is_rest_key(*k))
        .map(|(_, v)| v)
        .collect();
    let right_extra: Vec<&Term> = right
        .iter()
        .filter(|(k, _)| !left.contains_key(*k) && !is_rest_key(*k))
        .map(|(_, v)| v)
        .collect();

    if left_rest.is_some() && right_rest.is_none() && right_extra.is_empty() {
        return false;
    }
    if right_rest.is_some() && left_rest.is_none() && left_extra.is_empty() {
        return false;
    }

    absorb(right_rest, &left_extra, bindings, config)
        && absorb(left_rest, &right_extra, bindings, config)
}

fn absorb(rest: Option<&Term>, extras: &[&Term], bindings: &mut Bindings, config: &UnifyConfig) -> bool {
    if extras.is_empty() {
        return true;
    }
    match rest {
        Some(rest) => extras
            .iter()
            .all(|value| unify_impl(rest, value, bindings, config)),
        None => false,
    }
}
