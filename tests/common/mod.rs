// Shared constructors for integration tests

#![allow(dead_code)]

use unifytron::{Term, Variable};

/// Fresh unconstrained variable
pub fn var(name: &str) -> Variable {
    unifytron::variable(name).unwrap()
}

/// Variable occurrence as a term
pub fn v(var: &Variable) -> Term {
    Term::from(var)
}

/// Empty record
pub fn empty_record() -> Term {
    Term::record(Vec::<(String, Term)>::new())
}

/// Empty sequence
pub fn empty_seq() -> Term {
    Term::seq(Vec::<Term>::new())
}

/// Install a test subscriber so `RUST_LOG=unifytron=trace` shows engine traces
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
