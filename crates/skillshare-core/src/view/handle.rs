//! View State Handles
//!
//! Controllers reach their view state through a handle instead of owning
//! it, so the host (Leptos signals in the browser, `Rc<RefCell<_>>` in
//! tests) decides where the state lives. Reads and writes return `None`
//! once the host has disposed of the state; completions that arrive after
//! a view is torn down are dropped.

use std::cell::RefCell;
use std::rc::Rc;

pub trait StateHandle<T> {
    fn read<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R>;

    fn write<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R>;
}

impl<T> StateHandle<T> for Rc<RefCell<T>> {
    fn read<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }

    fn write<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}
