//! Lexical environments.
//!
//! An [`Environment`] is a handle to one scope. Scopes are shared through
//! `Rc<RefCell<_>>`: a closure keeps its defining scope alive, and a child
//! scope keeps its parent alive. Parents never point at children, so the
//! chain from any scope ends at the single root.

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use tiel_ir::Name;

use crate::Value;

/// Lookup or assignment hit a name no enclosing scope defines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("undefined name {0:?}")]
pub struct UndefinedName(pub Name);

/// A single-threaded, reference-counted cell.
///
/// All scope allocations go through [`LocalScope::new`].
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    #[inline]
    pub fn borrow(&self) -> std::cell::Ref<'_, T> {
        self.0.borrow()
    }

    #[inline]
    pub fn borrow_mut(&self) -> std::cell::RefMut<'_, T> {
        self.0.borrow_mut()
    }

    /// Whether both handles point at the same scope.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Bindings of one scope plus the link to the enclosing one.
#[derive(Default)]
pub struct Scope {
    bindings: FxHashMap<Name, Value>,
    parent: Option<LocalScope<Scope>>,
}

impl Scope {
    pub fn with_parent(parent: LocalScope<Scope>) -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent: Some(parent),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    #[inline]
    pub fn contains(&self, name: Name) -> bool {
        self.bindings.contains_key(&name)
    }
}

/// Handle to a scope in the environment chain.
///
/// Cloning the handle shares the scope; use [`Environment::child`] to open
/// a nested one.
#[derive(Clone)]
pub struct Environment(LocalScope<Scope>);

impl Environment {
    /// A fresh root scope with no parent.
    pub fn new() -> Self {
        Environment(LocalScope::new(Scope::default()))
    }

    /// A new empty scope whose parent is `self`.
    #[must_use]
    pub fn child(&self) -> Self {
        Environment(LocalScope::new(Scope::with_parent(self.0.clone())))
    }

    /// Bind `name` in this scope, replacing any binding it already has here.
    /// Enclosing scopes are never touched.
    pub fn define(&self, name: Name, value: Value) {
        self.0.borrow_mut().bindings.insert(name, value);
    }

    /// Value of the nearest binding of `name`, searching outward.
    pub fn get(&self, name: Name) -> Result<Value, UndefinedName> {
        let mut scope = self.0.clone();
        loop {
            let parent = {
                let current = scope.borrow();
                if let Some(value) = current.bindings.get(&name) {
                    return Ok(value.clone());
                }
                current.parent.clone()
            };
            match parent {
                Some(parent) => scope = parent,
                None => return Err(UndefinedName(name)),
            }
        }
    }

    /// Overwrite the nearest existing binding of `name`. Never creates one.
    pub fn assign(&self, name: Name, value: Value) -> Result<(), UndefinedName> {
        let mut scope = self.0.clone();
        loop {
            let parent = {
                let mut current = scope.borrow_mut();
                if let Some(slot) = current.bindings.get_mut(&name) {
                    *slot = value;
                    return Ok(());
                }
                current.parent.clone()
            };
            match parent {
                Some(parent) => scope = parent,
                None => return Err(UndefinedName(name)),
            }
        }
    }

    /// Whether `name` is bound in this scope itself (not a parent).
    pub fn defines_locally(&self, name: Name) -> bool {
        self.0.borrow().contains(name)
    }

    /// Number of scopes from this one up to and including the root.
    pub fn depth(&self) -> usize {
        let mut depth = 1;
        let mut scope = self.0.clone();
        loop {
            let parent = scope.borrow().parent.clone();
            match parent {
                Some(parent) => {
                    depth += 1;
                    scope = parent;
                }
                None => return depth,
            }
        }
    }

    /// Whether both handles refer to the same scope.
    pub fn ptr_eq(&self, other: &Environment) -> bool {
        self.0.ptr_eq(&other.0)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("bindings", &self.0.borrow().len())
            .field("depth", &self.depth())
            .finish()
    }
}
