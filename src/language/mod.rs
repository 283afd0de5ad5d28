// SPDX-License-Identifier: PMPL-1.0-or-later

//! Session language state and the translation service built on it.
//!
//! A [`LanguageService`] owns one active-language cell. Handles are cheap
//! clones of the same state, so a service can be passed down explicitly or
//! installed once with [`scope::provide_language`] and fetched anywhere
//! below with [`scope::use_language`].
//!
//! The service is single-threaded (`!Send`). Toggling writes the cell and
//! then notifies subscribers, so every read after a toggle sees the new
//! language.

pub mod scope;

pub use scope::{provide_language, provide_language_with, use_language, with_language_scope, LanguageScope};

use crate::i18n::{Catalog, Lang};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};
use std::sync::Arc;

type Callback = Rc<dyn Fn(Lang)>;

struct SessionState {
    current: Cell<Lang>,
    catalog: Arc<Catalog>,
    subscribers: RefCell<Vec<(u64, Callback)>>,
    next_subscriber: Cell<u64>,
}

/// Handle to one session's active language and its translation lookup.
#[derive(Clone)]
pub struct LanguageService {
    state: Rc<SessionState>,
}

impl LanguageService {
    /// New session on the built-in catalog, starting at [`Lang::default`].
    pub fn new() -> Self {
        Self::with_catalog(Catalog::builtin())
    }

    /// New session on a caller-supplied catalog.
    pub fn with_catalog(catalog: Arc<Catalog>) -> Self {
        Self {
            state: Rc::new(SessionState {
                current: Cell::new(Lang::default()),
                catalog,
                subscribers: RefCell::new(Vec::new()),
                next_subscriber: Cell::new(0),
            }),
        }
    }

    pub fn current_language(&self) -> Lang {
        self.state.current.get()
    }

    /// Advance to the next supported language, wrapping after the last one,
    /// then notify subscribers.
    pub fn toggle_language(&self) {
        let previous = self.state.current.get();
        let next = previous.next();
        self.state.current.set(next);
        tracing::debug!(from = %previous, to = %next, "language toggled");

        // Snapshot so callbacks may read the service or drop subscriptions.
        let callbacks: Vec<Callback> = self
            .state
            .subscribers
            .borrow()
            .iter()
            .map(|(_, callback)| Rc::clone(callback))
            .collect();
        for callback in callbacks {
            callback(next);
        }
    }

    /// Toggle until `target` is active. Toggling is the only transition, so
    /// any supported language is reached within one full cycle.
    pub fn switch_to(&self, target: Lang) {
        for _ in 0..Lang::all().len() {
            if self.current_language() == target {
                return;
            }
            self.toggle_language();
        }
    }

    /// Translate `key` in the active language, or return `key` unchanged when
    /// the active table has no entry for it.
    pub fn translate<'a>(&self, key: &'a str) -> &'a str {
        match self.lookup(key) {
            Some(value) => value,
            None => {
                tracing::debug!(lang = %self.current_language(), key, "missing translation");
                key
            }
        }
    }

    /// Typed lookup in the active language, without the key fallback.
    pub fn lookup(&self, key: &str) -> Option<&'static str> {
        self.state.catalog.get(self.current_language(), key)
    }

    /// Register `callback` to run with the new language after every toggle.
    /// The callback stays registered until the returned [`Subscription`] drops.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(Lang) + 'static,
    {
        let id = self.state.next_subscriber.get();
        self.state.next_subscriber.set(id + 1);
        self.state
            .subscribers
            .borrow_mut()
            .push((id, Rc::new(callback)));
        Subscription {
            id,
            state: Rc::downgrade(&self.state),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.state.subscribers.borrow().len()
    }

    /// Whether two handles refer to the same session state.
    #[cfg(test)]
    pub(crate) fn same_session(&self, other: &LanguageService) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl Default for LanguageService {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LanguageService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageService")
            .field("current", &self.current_language())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// Keeps a toggle callback registered. Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    id: u64,
    state: Weak<SessionState>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(state) = self.state.upgrade() {
            state
                .subscribers
                .borrow_mut()
                .retain(|(id, _)| *id != self.id);
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
