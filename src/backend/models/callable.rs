//! Function-identity terms.
//!
//! A callable unifies only with itself. Identity is an explicit [`CallableId`]
//! handed out at construction, so two closures with identical bodies are still
//! distinct terms, while clones of one `Callable` remain the same term.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::Term;

/// Global counter for generating unique callable IDs
static CALLABLE_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Identity token of a [`Callable`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CallableId(u64);

impl CallableId {
    fn fresh() -> Self {
        CallableId(CALLABLE_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw numeric value of this id
    #[inline]
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

/// Shared function body
pub type CallableFn = Arc<dyn Fn(&[Term]) -> Term + Send + Sync>;

/// An opaque function value compared by identity
#[derive(Clone)]
pub struct Callable {
    id: CallableId,
    name: Option<String>,
    func: CallableFn,
}

impl Callable {
    /// Wrap a function in a fresh callable identity
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&[Term]) -> Term + Send + Sync + 'static,
    {
        Callable {
            id: CallableId::fresh(),
            name: None,
            func: Arc::new(func),
        }
    }

    /// Wrap a function with a display name (the name plays no part in matching)
    pub fn named<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&[Term]) -> Term + Send + Sync + 'static,
    {
        Callable {
            name: Some(name.into()),
            ..Callable::new(func)
        }
    }

    #[inline]
    pub fn id(&self) -> CallableId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Invoke the function
    pub fn call(&self, args: &[Term]) -> Term {
        (self.func)(args)
    }

    /// Check whether two handles denote the same callable instance
    #[inline]
    pub fn same_instance(&self, other: &Callable) -> bool {
        self.id == other.id
    }
}

impl PartialEq for Callable {
    fn eq(&self, other: &Self) -> bool {
        self.same_instance(other)
    }
}

impl Eq for Callable {}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "Callable({}#{})", name, self.id.0),
            None => write!(f, "Callable(#{})", self.id.0),
        }
    }
}
