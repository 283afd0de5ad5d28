// SPDX-License-Identifier: PMPL-1.0-or-later

//! Error types for the language subsystem.

use crate::i18n::Lang;
use thiserror::Error;

/// Errors raised by the language accessor and language parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LanguageError {
    /// `use_language()` was called with no scope installed on this thread.
    #[error("use_language() must be called within a language scope (install one with provide_language())")]
    OutsideScope,

    /// A language code outside the supported set.
    #[error("unsupported language code '{0}' (supported: {supported})", supported = supported_codes())]
    UnsupportedLanguage(String),
}

/// Errors raised when building a [`Catalog`](crate::i18n::Catalog) from tables.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("catalog has no table for language '{0}'")]
    MissingLanguage(Lang),

    #[error("catalog has more than one table for language '{0}'")]
    DuplicateLanguage(Lang),

    #[error("key '{key}' appears more than once in the '{lang}' table")]
    DuplicateKey { lang: Lang, key: &'static str },
}

fn supported_codes() -> String {
    Lang::all()
        .iter()
        .map(|lang| lang.code())
        .collect::<Vec<_>>()
        .join(", ")
}
