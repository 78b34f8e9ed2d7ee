use std::rc::Rc;

use indexmap::IndexMap;

use crate::{diagnostics::Result, runtime::Interpreter};

/// Handler invoked when a registered operator name is dispatched. A handler
/// may pop and push any number of values, raise an error condition, or
/// print to the output sink.
pub type OpHandler = Rc<dyn Fn(&mut Interpreter) -> Result<()>>;

/// Name-keyed table of operator handlers. Registration is last-write-wins:
/// re-registering a name silently replaces the earlier handler, which is
/// how extensions override built-ins. Insertion order is preserved so
/// operator listings stay deterministic.
#[derive(Default)]
pub struct Registry {
    ops: IndexMap<String, OpHandler>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<F>(&mut self, name: impl Into<String>, handler: F)
    where
        F: Fn(&mut Interpreter) -> Result<()> + 'static,
    {
        self.ops.insert(name.into(), Rc::new(handler));
    }

    /// Look up a handler by exact name. Returns a clone so the caller can
    /// invoke it without holding a borrow of the registry.
    pub fn get(&self, name: &str) -> Option<OpHandler> {
        self.ops.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.ops.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.ops.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}
