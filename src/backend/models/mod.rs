pub mod bindings;
pub mod callable;
pub mod term;
pub mod variable;

pub use bindings::SmartBindings as Bindings;
pub use callable::{Callable, CallableFn, CallableId};
pub use term::{Primitive, Record, Term, TermKind};
pub use variable::{typed_variable, variable, wildcard, VarId, Variable, WILDCARD};
