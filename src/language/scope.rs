// SPDX-License-Identifier: PMPL-1.0-or-later

//! Ambient access to the session language.
//!
//! A scope root installs one [`LanguageService`] on the current thread's
//! scope stack; any code running while the returned [`LanguageScope`] guard
//! is alive can fetch it with [`use_language`] instead of threading it
//! through every constructor. Scopes nest: the innermost live scope wins,
//! and each scope owns its own language state.
//!
//! ```
//! use folio_i18n::i18n::Lang;
//! use folio_i18n::language::{provide_language, use_language};
//!
//! let _scope = provide_language();
//! let lang = use_language().unwrap();
//! lang.toggle_language();
//! assert_eq!(lang.current_language(), Lang::Pt);
//! assert_eq!(lang.translate("nav.about"), "Sobre");
//! ```

use super::LanguageService;
use crate::error::LanguageError;
use std::cell::{Cell, RefCell};

thread_local! {
    static SCOPES: RefCell<Vec<(u64, LanguageService)>> = const { RefCell::new(Vec::new()) };
    static NEXT_SCOPE_ID: Cell<u64> = const { Cell::new(0) };
}

/// Guard for an installed language scope. Dropping it uninstalls the scope.
#[must_use = "the scope is uninstalled as soon as the guard drops"]
#[derive(Debug)]
pub struct LanguageScope {
    id: u64,
    service: LanguageService,
}

impl LanguageScope {
    /// The service installed by this scope.
    pub fn service(&self) -> &LanguageService {
        &self.service
    }
}

impl Drop for LanguageScope {
    fn drop(&mut self) {
        // A thread being torn down may already have destroyed the stack.
        let _ = SCOPES.try_with(|scopes| {
            scopes.borrow_mut().retain(|(id, _)| *id != self.id);
        });
        tracing::debug!(scope = self.id, "language scope uninstalled");
    }
}

/// Install a fresh language scope starting at the default language.
pub fn provide_language() -> LanguageScope {
    provide_language_with(LanguageService::new())
}

/// Install `service` as the innermost language scope.
pub fn provide_language_with(service: LanguageService) -> LanguageScope {
    let id = NEXT_SCOPE_ID.with(|next| {
        let id = next.get();
        next.set(id + 1);
        id
    });
    SCOPES.with(|scopes| scopes.borrow_mut().push((id, service.clone())));
    tracing::debug!(scope = id, lang = %service.current_language(), "language scope installed");
    LanguageScope { id, service }
}

/// Run `f` inside a freshly installed scope, uninstalling it afterwards.
pub fn with_language_scope<R>(f: impl FnOnce() -> R) -> R {
    let _scope = provide_language();
    f()
}

/// The innermost installed language service.
///
/// Fails with [`LanguageError::OutsideScope`] when no scope is installed on
/// this thread; there is no default service to fall back to.
pub fn use_language() -> Result<LanguageService, LanguageError> {
    SCOPES.with(|scopes| {
        scopes
            .borrow()
            .last()
            .map(|(_, service)| service.clone())
            .ok_or(LanguageError::OutsideScope)
    })
}
