//! Environments: symbol tables chained to a parent for lexical lookup.
//!
//! The root environment lives for the whole session. A closure owns its own
//! [`Environment`] outright; when a call completes, that environment is moved
//! into a fresh [`Env`] frame whose parent is the calling environment, and the
//! body is evaluated against the frame.

use rustc_hash::FxHashMap;
use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use crate::Value;

/// Shared handle to an environment frame, as threaded through evaluation.
///
/// Clones point at the same frame. Not thread-safe.
#[derive(Clone)]
pub struct Env(Rc<RefCell<Environment>>);

impl Env {
    #[inline]
    pub fn new(env: Environment) -> Self {
        Env(Rc::new(RefCell::new(env)))
    }

    #[inline]
    pub fn borrow(&self) -> Ref<'_, Environment> {
        self.0.borrow()
    }

    #[inline]
    pub fn borrow_mut(&self) -> RefMut<'_, Environment> {
        self.0.borrow_mut()
    }

    /// Whether two handles point at the same frame.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// The outermost frame reachable from this one.
    pub fn root(&self) -> Env {
        let mut current = self.clone();
        loop {
            let parent = current.borrow().parent().cloned();
            match parent {
                Some(parent) => current = parent,
                None => return current,
            }
        }
    }

    /// Look up a symbol starting at this frame.
    #[inline]
    pub fn lookup(&self, name: &str) -> Option<Value> {
        self.borrow().lookup(name)
    }

    /// Bind in this frame.
    #[inline]
    pub fn define_local(&self, name: impl Into<String>, value: Value) {
        self.borrow_mut().define(name, value);
    }

    /// Bind in the root frame.
    #[inline]
    pub fn define_global(&self, name: impl Into<String>, value: Value) {
        self.root().borrow_mut().define(name, value);
    }
}

impl fmt::Debug for Env {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Env").field(&*self.borrow()).finish()
    }
}

/// A symbol table with an optional parent.
///
/// Cloning copies every binding deeply; the parent link is a reference to
/// the enclosing frame and is never copied through.
#[derive(Clone, Default)]
pub struct Environment {
    bindings: FxHashMap<String, Value>,
    parent: Option<Env>,
}

impl Environment {
    /// Create a new empty environment with no parent.
    pub fn new() -> Self {
        Environment {
            bindings: FxHashMap::default(),
            parent: None,
        }
    }

    /// Create a new empty environment with a parent.
    pub fn with_parent(parent: Env) -> Self {
        Environment {
            bindings: FxHashMap::default(),
            parent: Some(parent),
        }
    }

    /// Bind `name` in this environment, replacing any existing binding.
    #[inline]
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.bindings.insert(name.into(), value);
    }

    /// Look up a symbol here, then along the parent chain.
    ///
    /// Returns a copy of the stored value.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.bindings.get(name) {
            return Some(value.clone());
        }
        if let Some(parent) = &self.parent {
            return parent.borrow().lookup(name);
        }
        None
    }

    /// Whether `name` is bound in this environment itself (parents ignored).
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Number of local bindings.
    #[inline]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Locally bound names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.bindings.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    #[inline]
    pub fn parent(&self) -> Option<&Env> {
        self.parent.as_ref()
    }

    /// Point this environment at a new enclosing frame.
    #[inline]
    pub fn set_parent(&mut self, parent: Env) {
        self.parent = Some(parent);
    }
}

/// Environments compare by their own bindings; the parent link is ignored.
impl PartialEq for Environment {
    fn eq(&self, other: &Self) -> bool {
        self.bindings == other.bindings
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("names", &self.names())
            .field("has_parent", &self.parent.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests;
