//! Conversion between JSON documents and terms.
//!
//! JSON values are classified structurally: arrays become sequences, objects
//! become records, and scalars become primitives. Integral numbers that fit in
//! an `i64` become `Long`, everything else `Float`.

use serde_json::{Map, Number, Value};

use crate::backend::models::{Bindings, Primitive, Record, Term};

impl From<Value> for Term {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Term::Primitive(Primitive::Nil),
            Value::Bool(b) => Term::from(b),
            Value::Number(n) => number_to_term(&n),
            Value::String(s) => Term::from(s),
            Value::Array(items) => Term::Sequence(items.into_iter().map(Term::from).collect()),
            Value::Object(entries) => Term::Record(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, Term::from(v)))
                    .collect::<Record>(),
            ),
        }
    }
}

impl From<&Value> for Term {
    fn from(value: &Value) -> Self {
        Term::from(value.clone())
    }
}

fn number_to_term(n: &Number) -> Term {
    match n.as_i64() {
        Some(i) => Term::from(i),
        None => Term::from(n.as_f64().unwrap_or(f64::NAN)),
    }
}

/// Render a term as JSON.
///
/// Returns `None` for terms with no JSON counterpart: variables, the
/// wildcard, callables and non-finite floats. Dates render as RFC 3339 strings.
pub fn term_to_json(term: &Term) -> Option<Value> {
    match term {
        Term::Primitive(Primitive::Nil) => Some(Value::Null),
        Term::Primitive(Primitive::Bool(b)) => Some(Value::Bool(*b)),
        Term::Primitive(Primitive::Long(n)) => Some(Value::from(*n)),
        Term::Primitive(Primitive::Float(x)) => Number::from_f64(*x).map(Value::Number),
        Term::Primitive(Primitive::String(s)) => Some(Value::String(s.clone())),
        Term::Primitive(Primitive::Date(d)) => Some(Value::String(d.to_rfc3339())),
        Term::Sequence(items) => items
            .iter()
            .map(term_to_json)
            .collect::<Option<Vec<_>>>()
            .map(Value::Array),
        Term::Record(entries) => entries
            .iter()
            .map(|(k, v)| term_to_json(v).map(|v| (k.clone(), v)))
            .collect::<Option<Map<_, _>>>()
            .map(Value::Object),
        Term::Callable(_) | Term::Variable(_) | Term::Wildcard => None,
    }
}

/// Render reported bindings as a JSON object keyed by variable name.
///
/// Bindings whose value has no JSON counterpart are skipped.
pub fn bindings_to_json(bindings: &Bindings) -> Value {
    let map: Map<String, Value> = bindings
        .iter()
        .filter_map(|(name, value)| term_to_json(value).map(|v| (name.to_string(), v)))
        .collect();
    Value::Object(map)
}
