//! Reactive application state shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each panel owns one plain state struct. Components hold them as
//! `RwSignal<T>` context values; async panel operations in `crate::actions`
//! only see them through [`Store`], so the same operation runs against a
//! signal in the browser and against a mutex in tests.

pub mod contract;
pub mod nft;
pub mod notice;
pub mod token;
pub mod wallet;

use leptos::prelude::*;

/// Read/modify access to a piece of panel state.
pub trait Store<T>: Clone {
    /// Read without subscribing the caller to changes.
    fn peek<R>(&self, f: impl FnOnce(&T) -> R) -> R;

    /// Mutate in place and notify observers.
    fn modify(&self, f: impl FnOnce(&mut T));
}

impl<T: Send + Sync + 'static> Store<T> for RwSignal<T> {
    fn peek<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.with_untracked(f)
    }

    fn modify(&self, f: impl FnOnce(&mut T)) {
        self.update(f);
    }
}

#[cfg(test)]
impl<T> Store<T> for std::sync::Arc<std::sync::Mutex<T>> {
    fn peek<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.lock().unwrap())
    }

    fn modify(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.lock().unwrap());
    }
}
