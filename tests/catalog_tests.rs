// SPDX-License-Identifier: PMPL-1.0-or-later

//! Data-quality checks for the built-in translation catalog

use folio_i18n::error::CatalogError;
use folio_i18n::i18n::{Catalog, Lang, Table};
use folio_i18n::language::LanguageService;
use std::collections::HashSet;
use std::sync::Arc;

#[test]
fn test_every_key_exists_in_every_language() {
    let catalog = Catalog::builtin();
    let gaps = catalog.parity_gaps();
    assert!(
        gaps.is_empty(),
        "keys missing from a language: {:?}",
        gaps.iter()
            .map(|g| format!("{} (missing in {})", g.key, g.missing_in))
            .collect::<Vec<_>>()
    );
}

#[test]
fn test_catalog_covers_exactly_the_supported_languages() {
    let catalog = Catalog::builtin();
    for lang in Lang::all() {
        assert!(
            catalog.keys(*lang).count() > 0,
            "{} table should not be empty",
            lang
        );
    }
}

#[test]
fn test_keys_are_unique_per_language() {
    let catalog = Catalog::builtin();
    for lang in Lang::all() {
        let mut seen = HashSet::new();
        for key in catalog.keys(*lang) {
            assert!(seen.insert(key), "duplicate key '{}' in {}", key, lang);
        }
    }
}

#[test]
fn test_no_translation_is_blank() {
    let catalog = Catalog::builtin();
    for lang in Lang::all() {
        for key in catalog.keys(*lang) {
            let value = catalog.get(*lang, key).unwrap();
            assert!(!value.trim().is_empty(), "{} '{}' is blank", lang, key);
        }
    }
}

#[test]
fn test_dots_carry_no_meaning_in_lookup() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.get(Lang::En, "nav.about"), Some("About"));
    assert_eq!(catalog.get(Lang::En, "nav"), None);
    assert_eq!(catalog.get(Lang::En, "about"), None);
    assert_eq!(catalog.get(Lang::En, "nav.about."), None);
}

#[test]
fn test_custom_catalog_drives_service_without_parity() {
    const EN: Table = &[("greeting", "Hello"), ("farewell", "Bye")];
    const PT: Table = &[("greeting", "Olá")];

    let catalog = Catalog::from_tables(&[(Lang::En, EN), (Lang::Pt, PT)]).unwrap();
    assert_eq!(catalog.parity_gaps().len(), 1);

    let lang = LanguageService::with_catalog(Arc::new(catalog));
    assert_eq!(lang.translate("farewell"), "Bye");
    lang.toggle_language();
    assert_eq!(lang.translate("greeting"), "Olá");
    // Missing in Portuguese: the key shows through, not the English text.
    assert_eq!(lang.translate("farewell"), "farewell");
}

#[test]
fn test_catalog_without_portuguese_is_rejected() {
    const EN: Table = &[("greeting", "Hello")];
    let err = Catalog::from_tables(&[(Lang::En, EN)]).unwrap_err();
    assert_eq!(err, CatalogError::MissingLanguage(Lang::Pt));
    assert_eq!(err.to_string(), "catalog has no table for language 'pt'");
}
