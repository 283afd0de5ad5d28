// SPDX-License-Identifier: PMPL-1.0-or-later

//! Behavioural tests for the session language service and its scopes

use folio_i18n::error::LanguageError;
use folio_i18n::i18n::{Catalog, Lang};
use folio_i18n::language::{provide_language, use_language, with_language_scope, LanguageService};
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn test_fresh_scope_uses_default_language() {
    let _scope = provide_language();
    let lang = use_language().expect("scope is installed");
    assert_eq!(lang.translate("nav.about"), "About");
    assert_eq!(lang.current_language(), Lang::En);
    assert_eq!(lang.current_language().code(), "en");
}

#[test]
fn test_one_toggle_switches_to_portuguese() {
    let _scope = provide_language();
    let lang = use_language().unwrap();
    lang.toggle_language();
    assert_eq!(lang.translate("nav.about"), "Sobre");
    assert_eq!(lang.current_language().code(), "pt");
}

#[test]
fn test_two_toggles_return_to_default() {
    let _scope = provide_language();
    let lang = use_language().unwrap();
    lang.toggle_language();
    lang.toggle_language();
    assert_eq!(lang.translate("nav.about"), "About");
}

#[test]
fn test_unknown_key_is_returned_unchanged_in_every_language() {
    let lang = LanguageService::new();
    for _ in 0..Lang::all().len() {
        assert_eq!(lang.translate("does.not.exist"), "does.not.exist");
        lang.toggle_language();
    }
}

#[test]
fn test_accessor_without_scope_is_a_usage_error() {
    let result = use_language();
    assert!(matches!(result, Err(LanguageError::OutsideScope)));
}

#[test]
fn test_usage_error_aborts_the_calling_operation() {
    fn heading() -> Result<String, LanguageError> {
        let lang = use_language()?;
        Ok(lang.translate("hero.title").to_string())
    }

    assert_eq!(heading(), Err(LanguageError::OutsideScope));
    let inside = with_language_scope(heading);
    assert_eq!(inside.as_deref(), Ok("Full Stack Developer"));
}

#[test]
fn test_state_stays_in_supported_set() {
    let lang = LanguageService::new();
    for _ in 0..25 {
        assert!(Lang::all().contains(&lang.current_language()));
        lang.toggle_language();
    }
}

#[test]
fn test_toggle_cycle_visits_each_language_once() {
    let lang = LanguageService::new();
    let start = lang.current_language();
    let mut visited = vec![start];
    for _ in 1..Lang::all().len() {
        lang.toggle_language();
        visited.push(lang.current_language());
    }
    lang.toggle_language();

    assert_eq!(lang.current_language(), start);
    assert_eq!(visited, Lang::all().to_vec());
}

#[test]
fn test_translate_is_stable_between_toggles() {
    let lang = LanguageService::new();
    let catalog = Catalog::builtin();
    for _ in 0..Lang::all().len() {
        for key in catalog.keys(Lang::En).chain(["missing.key"]) {
            assert_eq!(lang.translate(key), lang.translate(key));
        }
        lang.toggle_language();
    }
}

#[test]
fn test_independent_scopes_do_not_share_state() {
    let first = provide_language();
    let second = provide_language();
    second.service().toggle_language();

    assert_eq!(first.service().current_language(), Lang::En);
    assert_eq!(second.service().current_language(), Lang::Pt);

    first.service().toggle_language();
    first.service().toggle_language();
    assert_eq!(first.service().current_language(), Lang::En);
    assert_eq!(second.service().current_language(), Lang::Pt);
}

#[test]
fn test_explicit_injection_shares_one_session() {
    let service = LanguageService::new();
    let _scope = folio_i18n::language::provide_language_with(service.clone());
    use_language().unwrap().toggle_language();
    assert_eq!(service.current_language(), Lang::Pt);
}

#[test]
fn test_all_subscribers_observe_toggle_before_next_read() {
    let _scope = provide_language();
    let lang = use_language().unwrap();
    let log = Rc::new(RefCell::new(Vec::new()));

    let subs: Vec<_> = (0..3)
        .map(|i| {
            let log = Rc::clone(&log);
            lang.subscribe(move |new| log.borrow_mut().push((i, new)))
        })
        .collect();

    lang.toggle_language();
    assert_eq!(
        *log.borrow(),
        vec![(0, Lang::Pt), (1, Lang::Pt), (2, Lang::Pt)]
    );
    assert_eq!(lang.current_language(), Lang::Pt);

    drop(subs);
    lang.toggle_language();
    assert_eq!(log.borrow().len(), 3);
}

#[test]
fn test_switch_to_then_translate_through_accessor() {
    let scope = provide_language();
    scope.service().switch_to(Lang::Pt);
    let lang = use_language().unwrap();
    assert_eq!(lang.translate("contact.email"), "Enviar Email");
    assert_eq!(lang.translate("no.such.key"), "no.such.key");

    scope.service().switch_to(Lang::En);
    assert_eq!(lang.translate("contact.email"), "Email Me");
}

#[test]
fn test_accessor_fails_again_after_scope_teardown() {
    {
        let _scope = provide_language();
        assert!(use_language().is_ok());
    }
    assert_eq!(use_language().unwrap_err(), LanguageError::OutsideScope);
}
