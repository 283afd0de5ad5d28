// SPDX-License-Identifier: PMPL-1.0-or-later

//! ISO 639-1 display names for the language switcher.
//!
//! Reference: <https://www.loc.gov/standards/iso639-2/php/code_list.php>

/// Returns the English name of an ISO 639-1 code.
///
/// Returns `None` for codes without a translation catalog.
pub fn language_name(code: &str) -> Option<&'static str> {
    match code {
        "en" => Some("English"),
        "pt" => Some("Portuguese"),
        _ => None,
    }
}

/// Returns the native name of an ISO 639-1 language code.
///
/// Used by the language listing, where visitors should see their language
/// written in its own words.
pub fn native_name(code: &str) -> Option<&'static str> {
    match code {
        "en" => Some("English"),
        "pt" => Some("Português"),
        _ => None,
    }
}
