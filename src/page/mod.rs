// SPDX-License-Identifier: PMPL-1.0-or-later

//! Portfolio page composition.
//!
//! Sections are consumers of the session language: they read it through
//! [`use_language`] rather than receiving it as an argument.

pub mod formatter;
pub mod output;
pub mod sections;
pub mod view;

use crate::error::LanguageError;
use crate::i18n::Lang;
use crate::language::{use_language, LanguageService};
use anyhow::Result;
use serde::Serialize;
use std::path::Path;

pub use formatter::PageFormatter;
pub use output::PageOutputFormat;
pub use sections::{RenderedLine, RenderedSection, Section};
pub use view::PageView;

/// Ordered list of sections under one page root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    sections: Vec<Section>,
}

impl Page {
    /// The full portfolio: navbar, content sections, footer.
    pub fn portfolio() -> Self {
        Self::with_sections(Section::all().to_vec())
    }

    pub fn with_sections(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Render against the innermost installed language scope.
    pub fn render(&self) -> Result<RenderedPage, LanguageError> {
        let lang = use_language()?;
        Ok(self.render_with(&lang))
    }

    pub fn render_with(&self, lang: &LanguageService) -> RenderedPage {
        RenderedPage {
            language: lang.current_language(),
            sections: self.sections.iter().map(|s| s.render(lang)).collect(),
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::portfolio()
    }
}

/// Translated text of a whole page in one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedPage {
    pub language: Lang,
    pub sections: Vec<RenderedSection>,
}

impl RenderedPage {
    pub fn section(&self, section: Section) -> Option<&RenderedSection> {
        self.sections.iter().find(|s| s.section == section)
    }
}

/// Save a rendered page to file in `format`
pub fn save_page<P: AsRef<Path>>(page: &RenderedPage, path: P, format: PageOutputFormat) -> Result<()> {
    let formatter = PageFormatter::new();
    formatter.save(page, path, format)
}

/// Print a rendered page to the console
pub fn print_page(page: &RenderedPage) {
    let formatter = PageFormatter::new();
    formatter.print(page);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::provide_language;

    #[test]
    fn render_outside_scope_fails() {
        assert_eq!(
            Page::portfolio().render().unwrap_err(),
            LanguageError::OutsideScope
        );
    }

    #[test]
    fn render_inside_scope_uses_scope_language() {
        let scope = provide_language();
        scope.service().toggle_language();
        let page = Page::portfolio().render().unwrap();
        assert_eq!(page.language, Lang::Pt);
        assert_eq!(page.sections.len(), Section::all().len());
        let footer = page.section(Section::Footer).unwrap();
        assert_eq!(footer.heading(), Some("Feito com"));
    }

    #[test]
    fn custom_section_order_is_kept() {
        let _scope = provide_language();
        let page = Page::with_sections(vec![Section::Contact, Section::Hero])
            .render()
            .unwrap();
        let order: Vec<Section> = page.sections.iter().map(|s| s.section).collect();
        assert_eq!(order, vec![Section::Contact, Section::Hero]);
    }
}
