// Unification engine
//
// unify(a, b):
//   bindings = {}
//   if unify_impl(a, b, bindings) then Some(bindings) else None

mod unify;

pub use unify::{bind_variable, unifies, unify, unify_with};
