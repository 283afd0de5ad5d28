// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation catalog for the portfolio site.
//!
//! ## Supported languages
//!
//! | Code | Language   | Native name |
//! |------|------------|-------------|
//! | en   | English    | English     |
//! | pt   | Portuguese | Português   |
//!
//! ## Design
//!
//! Translation keys use dotted namespaces: `"nav.about"`, `"hero.title"`,
//! `"contact.email"`. The dots are a naming convention only; lookups treat
//! keys as opaque strings.
//!
//! The catalog is embedded at compile time as static data: no file I/O,
//! no async, no allocation during lookups. Session state (which language is
//! active) lives in [`crate::language`], not here.

mod catalog;
mod iso639;

pub use catalog::{Catalog, Lang, ParityGap, Table};
pub use iso639::{language_name, native_name};
