// SPDX-License-Identifier: PMPL-1.0-or-later

//! Portfolio page sections and the labels each one displays.

use crate::language::LanguageService;
use serde::Serialize;

/// One content section of the portfolio page, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Navbar,
    Hero,
    About,
    Projects,
    Technologies,
    Experience,
    Contact,
    Footer,
}

impl Section {
    /// Every section, top to bottom.
    pub fn all() -> &'static [Section] {
        &[
            Section::Navbar,
            Section::Hero,
            Section::About,
            Section::Projects,
            Section::Technologies,
            Section::Experience,
            Section::Contact,
            Section::Footer,
        ]
    }

    pub fn id(&self) -> &'static str {
        match self {
            Section::Navbar => "navbar",
            Section::Hero => "hero",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Technologies => "technologies",
            Section::Experience => "experience",
            Section::Contact => "contact",
            Section::Footer => "footer",
        }
    }

    /// Translation keys shown by this section, in display order.
    pub fn keys(&self) -> &'static [&'static str] {
        match self {
            Section::Navbar => &[
                "nav.about",
                "nav.projects",
                "nav.technologies",
                "nav.experience",
                "nav.contact",
            ],
            Section::Hero => &[
                "hero.greeting",
                "hero.title",
                "hero.description",
                "hero.viewProjects",
                "hero.contactMe",
            ],
            Section::About => &[
                "about.title",
                "about.subtitle",
                "about.bio1",
                "about.bio2",
                "about.bio3",
            ],
            Section::Projects => &[
                "projects.title",
                "projects.subtitle",
                "projects.all",
                "projects.loading",
                "projects.viewCode",
                "projects.liveDemo",
            ],
            Section::Technologies => &["tech.title", "tech.subtitle"],
            Section::Experience => &[
                "exp.title",
                "exp.subtitle",
                "exp.years",
                "exp.projects",
                "exp.technologies",
                "exp.clients",
            ],
            Section::Contact => &[
                "contact.title",
                "contact.subtitle",
                "contact.description",
                "contact.email",
                "contact.linkedin",
                "contact.github",
            ],
            Section::Footer => &["footer.madeWith", "footer.by"],
        }
    }

    pub fn render(&self, lang: &LanguageService) -> RenderedSection {
        RenderedSection {
            section: *self,
            lines: self
                .keys()
                .iter()
                .map(|&key| RenderedLine {
                    key,
                    text: lang.translate(key).to_string(),
                })
                .collect(),
        }
    }
}

/// A translated label together with the key it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedLine {
    pub key: &'static str,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedSection {
    pub section: Section,
    pub lines: Vec<RenderedLine>,
}

impl RenderedSection {
    /// The first label, used as the section heading.
    pub fn heading(&self) -> Option<&str> {
        self.lines.first().map(|line| line.text.as_str())
    }
}
