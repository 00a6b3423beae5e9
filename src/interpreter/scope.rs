use std::{collections::HashMap, rc::Rc};

use crate::{ast::FunctionDef, interpreter::value::Value};

/// Handle to a scope stored in a [`ScopeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId(usize);

/// One scope: variable and function bindings plus the enclosing scope.
#[derive(Debug, Default)]
pub struct ScopeRecord {
    /// The scope lookups fall back to; `None` for the root.
    pub parent:    Option<ScopeId>,
    /// Variable bindings made directly in this scope.
    pub variables: HashMap<String, Value>,
    /// Function definitions registered directly in this scope.
    pub functions: HashMap<String, Rc<FunctionDef>>,
}

/// Arena of scopes addressed by [`ScopeId`].
///
/// Scopes are pushed when a function call or block starts and popped when it
/// ends, so the arena behaves as a stack while the parent links form the
/// resolution chain. A scope's parent is always pushed before it, which keeps
/// every chain acyclic.
///
/// # Example
/// ```
/// use nula::interpreter::{scope::ScopeArena, value::Value};
///
/// let mut scopes = ScopeArena::new();
/// let root = scopes.root();
/// scopes.set_variable(root, "x", Value::Number(1.0));
///
/// let inner = scopes.push(root);
/// scopes.set_variable(inner, "x", Value::Number(2.0));
/// assert_eq!(scopes.variable(inner, "x"), Some(&Value::Number(2.0)));
///
/// scopes.pop(inner);
/// assert_eq!(scopes.variable(root, "x"), Some(&Value::Number(1.0)));
/// ```
#[derive(Debug)]
pub struct ScopeArena {
    scopes: Vec<ScopeRecord>,
}

impl Default for ScopeArena {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeArena {
    /// Creates an arena holding only the root scope.
    #[must_use]
    pub fn new() -> Self {
        Self { scopes: vec![ScopeRecord::default()] }
    }

    /// Returns the root scope.
    #[must_use]
    pub const fn root(&self) -> ScopeId {
        ScopeId(0)
    }

    /// Number of live scopes, the root included.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Creates a child scope of `parent` and returns its handle.
    pub fn push(&mut self, parent: ScopeId) -> ScopeId {
        let id = ScopeId(self.scopes.len());
        self.scopes.push(ScopeRecord { parent: Some(parent),
                                       ..ScopeRecord::default() });
        log::trace!("entered scope {} (parent {})", id.0, parent.0);
        id
    }

    /// Discards `id` together with any scope created after it.
    ///
    /// The root scope is never discarded.
    pub fn pop(&mut self, id: ScopeId) {
        debug_assert_eq!(id.0 + 1, self.scopes.len(), "scopes must be popped in LIFO order");
        self.scopes.truncate(id.0.max(1));
        log::trace!("left scope {}", id.0);
    }

    /// Binds `name` in scope `id` only, replacing a binding there if any.
    pub fn set_variable(&mut self, id: ScopeId, name: &str, value: Value) {
        self.scopes[id.0].variables.insert(name.to_string(), value);
    }

    /// Registers `def` in scope `id`, replacing a same-named definition there.
    pub fn define_function(&mut self, id: ScopeId, def: Rc<FunctionDef>) {
        self.scopes[id.0].functions.insert(def.name.clone(), def);
    }

    /// Resolves a variable, starting at `id` and walking outward.
    #[must_use]
    pub fn variable(&self, id: ScopeId, name: &str) -> Option<&Value> {
        self.chain(id).find_map(|scope| scope.variables.get(name))
    }

    /// Resolves a function, starting at `id` and walking outward.
    #[must_use]
    pub fn function(&self, id: ScopeId, name: &str) -> Option<Rc<FunctionDef>> {
        self.chain(id).find_map(|scope| scope.functions.get(name)).cloned()
    }

    /// Iterates from `id` through its ancestors to the root.
    fn chain(&self, id: ScopeId) -> impl Iterator<Item = &ScopeRecord> {
        std::iter::successors(Some(&self.scopes[id.0]), |scope| {
            scope.parent.map(|parent| &self.scopes[parent.0])
        })
    }
}
