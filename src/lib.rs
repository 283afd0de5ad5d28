// SPDX-License-Identifier: PMPL-1.0-or-later

//! folio-i18n: the localization layer of a portfolio site.
//!
//! The page is a stack of sections (navbar, hero, about, projects,
//! technologies, experience, contact, footer) that all display text in the
//! visitor's chosen language.
//!
//! PILLARS:
//! 1. **Catalog**: static English/Portuguese tables keyed by dotted strings.
//! 2. **Language service**: one active-language cell per session, a cyclic
//!    toggle, and lookup that falls back to the raw key.
//! 3. **Scopes**: install a service once at the page root and fetch it from
//!    any section with `use_language()`; outside a scope that call fails.

pub mod error;
pub mod i18n;
pub mod language;
pub mod page;
