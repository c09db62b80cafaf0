//! Stores for the editable row collection.
//!
//! A store is the single owner of a table's collection. It offers a snapshot
//! read and one mutation primitive, "replace the value with `f(previous)`".
//! Host UI frameworks supply their own reactive cell by implementing
//! [`Store`]; [`CellStore`] is the plain single-threaded default.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// A read-snapshot / replace-by-function cell.
///
/// Implementations must apply each `replace` atomically with respect to
/// other calls on the same store.
pub trait Store<T> {
    /// A snapshot of the current value.
    fn read(&self) -> T;

    /// Replace the value with `f(previous)`.
    fn replace(&self, f: impl FnOnce(&T) -> T);
}

/// A shared, single-threaded store. Clones are handles onto the same value.
#[derive(Debug, Default)]
pub struct CellStore<T> {
    value: Rc<RefCell<T>>,
    version: Rc<Cell<u64>>,
}

impl<T> Clone for CellStore<T> {
    fn clone(&self) -> Self {
        return CellStore {
            value: Rc::clone(&self.value),
            version: Rc::clone(&self.version),
        };
    }
}

impl<T> CellStore<T> {
    pub fn new(value: T) -> CellStore<T> {
        return CellStore {
            value: Rc::new(RefCell::new(value)),
            version: Rc::new(Cell::new(0)),
        };
    }

    /// Number of replacements applied so far.
    pub fn version(&self) -> u64 {
        return self.version.get();
    }

    /// Run `f` against the current value without cloning it.
    pub fn with<O>(&self, f: impl FnOnce(&T) -> O) -> O {
        return f(&self.value.borrow());
    }
}

impl<T: Clone> Store<T> for CellStore<T> {
    fn read(&self) -> T {
        return self.value.borrow().clone();
    }

    /// # Panics
    ///
    /// If `f` calls `replace` on the same store.
    fn replace(&self, f: impl FnOnce(&T) -> T) {
        let next = {
            let previous = self.value.borrow();
            f(&previous)
        };
        *self.value.borrow_mut() = next;
        self.version.set(self.version.get() + 1);
    }
}
