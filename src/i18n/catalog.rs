// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation catalog for the portfolio site.
//!
//! Embeds every user-facing string for the supported languages as a
//! compile-time static table. Lookup is a linear scan of the key list per
//! language, which is fine for the ~50 keys a page carries; each section
//! resolves a handful of keys per render.
//!
//! ## Adding a new language
//!
//! 1. Add a variant to [`Lang`]
//! 2. Add arms to `Lang::code()` and `Lang::from_code()`
//! 3. Append the variant to `Lang::all()` (this is also the toggle order)
//! 4. Create a `const XX: Table` below and register it in `builtin_tables()`
//!
//! ## Adding a new key
//!
//! Add the entry to every table. `Catalog::parity_gaps()` and the test
//! suite report keys that exist in one table but not another.

use crate::error::{CatalogError, LanguageError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::str::FromStr;
use std::sync::{Arc, OnceLock};

use super::iso639;

/// One language's key/value table.
pub type Table = &'static [(&'static str, &'static str)];

/// Supported display languages.
///
/// The set is closed: the language switcher cycles through exactly these
/// values in [`Lang::all`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    En,
    Pt,
}

impl Lang {
    /// ISO 639-1 two-letter code for this language.
    pub fn code(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Pt => "pt",
        }
    }

    /// Parse an ISO 639-1 code into a supported language.
    ///
    /// Returns `None` for unsupported codes. Case-sensitive (codes must be
    /// lowercase per ISO 639-1).
    pub fn from_code(code: &str) -> Option<Lang> {
        match code {
            "en" => Some(Lang::En),
            "pt" => Some(Lang::Pt),
            _ => None,
        }
    }

    /// All supported languages, in toggle order. The first entry is the default.
    pub fn all() -> &'static [Lang] {
        &[Lang::En, Lang::Pt]
    }

    /// The language that follows this one in [`Lang::all`], wrapping around.
    pub fn next(&self) -> Lang {
        let all = Lang::all();
        let index = all.iter().position(|lang| lang == self).unwrap_or(0);
        all[(index + 1) % all.len()]
    }

    /// English name of the language.
    pub fn name(&self) -> &'static str {
        iso639::language_name(self.code()).unwrap_or(self.code())
    }

    /// Name of the language written in the language itself.
    pub fn native_name(&self) -> &'static str {
        iso639::native_name(self.code()).unwrap_or(self.code())
    }
}

impl Default for Lang {
    fn default() -> Self {
        Lang::all()[0]
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Lang {
    type Err = LanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Lang::from_code(s).ok_or_else(|| LanguageError::UnsupportedLanguage(s.to_string()))
    }
}

// ─── Catalog ────────────────────────────────────────────────────────

/// A key present in one language's table but absent from another's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParityGap {
    pub key: &'static str,
    pub present_in: Lang,
    pub missing_in: Lang,
}

/// Immutable language → (key → text) mapping.
///
/// Holds exactly one table per supported language. Built once; nothing
/// mutates it afterwards.
#[derive(Debug, Clone)]
pub struct Catalog {
    tables: Vec<(Lang, Table)>,
}

impl Catalog {
    /// The embedded English/Portuguese catalog, constructed on first use and
    /// shared for the rest of the process.
    pub fn builtin() -> Arc<Catalog> {
        static BUILTIN: OnceLock<Arc<Catalog>> = OnceLock::new();
        BUILTIN
            .get_or_init(|| {
                Arc::new(Catalog {
                    tables: builtin_tables().to_vec(),
                })
            })
            .clone()
    }

    /// Build a catalog from explicit tables.
    ///
    /// Every supported language must have exactly one table and keys must be
    /// unique within a table. Cross-language key parity is not checked here;
    /// see [`Catalog::parity_gaps`].
    pub fn from_tables(tables: &[(Lang, Table)]) -> Result<Catalog, CatalogError> {
        let mut seen_langs = HashSet::new();
        for &(lang, table) in tables {
            if !seen_langs.insert(lang) {
                return Err(CatalogError::DuplicateLanguage(lang));
            }
            let mut seen_keys = HashSet::new();
            for &(key, _) in table {
                if !seen_keys.insert(key) {
                    return Err(CatalogError::DuplicateKey { lang, key });
                }
            }
        }
        if let Some(&missing) = Lang::all().iter().find(|lang| !seen_langs.contains(*lang)) {
            return Err(CatalogError::MissingLanguage(missing));
        }

        Ok(Catalog {
            tables: tables.to_vec(),
        })
    }

    /// Look up `key` in `lang`'s table. `None` when the key is absent.
    pub fn get(&self, lang: Lang, key: &str) -> Option<&'static str> {
        lookup(self.table(lang), key)
    }

    /// Keys of `lang`'s table, in declaration order.
    pub fn keys(&self, lang: Lang) -> impl Iterator<Item = &'static str> + '_ {
        self.table(lang).iter().map(|&(key, _)| key)
    }

    /// Every key that some table has and another lacks.
    pub fn parity_gaps(&self) -> Vec<ParityGap> {
        let mut gaps = Vec::new();
        for &(present_in, table) in &self.tables {
            for &(missing_in, other) in &self.tables {
                if present_in == missing_in {
                    continue;
                }
                for &(key, _) in table {
                    if lookup(other, key).is_none() {
                        gaps.push(ParityGap {
                            key,
                            present_in,
                            missing_in,
                        });
                    }
                }
            }
        }
        gaps
    }

    fn table(&self, lang: Lang) -> Table {
        self.tables
            .iter()
            .find(|(l, _)| *l == lang)
            .map(|&(_, table)| table)
            .unwrap_or(&[])
    }
}

fn lookup(table: Table, key: &str) -> Option<&'static str> {
    for &(k, v) in table {
        if k == key {
            return Some(v);
        }
    }
    None
}

fn builtin_tables() -> &'static [(Lang, Table)] {
    &[(Lang::En, EN), (Lang::Pt, PT)]
}

// ─── English ────────────────────────────────────────────────────────

const EN: Table = &[
    // Navbar
    ("nav.about", "About"),
    ("nav.projects", "Projects"),
    ("nav.technologies", "Technologies"),
    ("nav.experience", "Experience"),
    ("nav.contact", "Contact"),
    // Hero
    ("hero.greeting", "Hello, I'm"),
    ("hero.title", "Full Stack Developer"),
    ("hero.description", "I build exceptional digital experiences that combine clean code with stunning design. Specialized in React, Node.js, and modern web technologies."),
    ("hero.viewProjects", "View Projects"),
    ("hero.contactMe", "Contact Me"),
    // About
    ("about.title", "About Me"),
    ("about.subtitle", "Get to know me better"),
    ("about.bio1", "I'm a passionate Full Stack Developer with over 5 years of experience building web applications that make a difference. My journey in software development started with a curiosity about how things work on the internet, and it has evolved into a career focused on creating elegant, efficient, and user-friendly solutions."),
    ("about.bio2", "I specialize in modern JavaScript/TypeScript ecosystems, with expertise in React, Node.js, and cloud technologies. I believe in writing clean, maintainable code and following best practices that ensure scalability and performance."),
    ("about.bio3", "When I'm not coding, you'll find me exploring new technologies, contributing to open-source projects, or sharing knowledge with the developer community. I'm always eager to take on new challenges and collaborate on innovative projects."),
    // Projects
    ("projects.title", "Projects"),
    ("projects.subtitle", "Check out my recent work"),
    ("projects.all", "All"),
    ("projects.loading", "Loading projects..."),
    ("projects.error", "Failed to load projects. Please try again later."),
    ("projects.noDescription", "No description available"),
    ("projects.viewCode", "View Code"),
    ("projects.liveDemo", "Live Demo"),
    // Technologies
    ("tech.title", "Technologies"),
    ("tech.subtitle", "Tools and technologies I work with"),
    // Experience
    ("exp.title", "Experience"),
    ("exp.subtitle", "My professional journey in numbers"),
    ("exp.years", "Years Experience"),
    ("exp.projects", "Projects Completed"),
    ("exp.technologies", "Technologies"),
    ("exp.clients", "Happy Clients"),
    // Contact
    ("contact.title", "Get In Touch"),
    ("contact.subtitle", "Let's work together on your next project"),
    ("contact.description", "I'm currently available for freelance work and full-time positions. If you have a project that needs coding or an opportunity that matches my skills, don't hesitate to reach out!"),
    ("contact.email", "Email Me"),
    ("contact.linkedin", "Connect on LinkedIn"),
    ("contact.github", "Follow on GitHub"),
    // Footer
    ("footer.madeWith", "Made with"),
    ("footer.by", "by John Developer"),
];

// ─── Portuguese ─────────────────────────────────────────────────────

const PT: Table = &[
    ("nav.about", "Sobre"),
    ("nav.projects", "Projetos"),
    ("nav.technologies", "Tecnologias"),
    ("nav.experience", "Experiência"),
    ("nav.contact", "Contato"),
    ("hero.greeting", "Olá, eu sou"),
    ("hero.title", "Desenvolvedor Full Stack"),
    ("hero.description", "Construo experiências digitais excepcionais que combinam código limpo com design impressionante. Especializado em React, Node.js e tecnologias web modernas."),
    ("hero.viewProjects", "Ver Projetos"),
    ("hero.contactMe", "Entre em Contato"),
    ("about.title", "Sobre Mim"),
    ("about.subtitle", "Conheça-me melhor"),
    ("about.bio1", "Sou um Desenvolvedor Full Stack apaixonado com mais de 5 anos de experiência construindo aplicações web que fazem a diferença. Minha jornada no desenvolvimento de software começou com a curiosidade sobre como as coisas funcionam na internet, e evoluiu para uma carreira focada em criar soluções elegantes, eficientes e amigáveis."),
    ("about.bio2", "Especializo-me em ecossistemas modernos JavaScript/TypeScript, com expertise em React, Node.js e tecnologias cloud. Acredito em escrever código limpo e manutenível, seguindo as melhores práticas que garantem escalabilidade e performance."),
    ("about.bio3", "Quando não estou programando, você me encontrará explorando novas tecnologias, contribuindo para projetos open-source ou compartilhando conhecimento com a comunidade de desenvolvedores. Estou sempre ansioso para enfrentar novos desafios e colaborar em projetos inovadores."),
    ("projects.title", "Projetos"),
    ("projects.subtitle", "Confira meus trabalhos recentes"),
    ("projects.all", "Todos"),
    ("projects.loading", "Carregando projetos..."),
    ("projects.error", "Falha ao carregar projetos. Tente novamente mais tarde."),
    ("projects.noDescription", "Sem descrição disponível"),
    ("projects.viewCode", "Ver Código"),
    ("projects.liveDemo", "Demo ao Vivo"),
    ("tech.title", "Tecnologias"),
    ("tech.subtitle", "Ferramentas e tecnologias com as quais trabalho"),
    ("exp.title", "Experiência"),
    ("exp.subtitle", "Minha jornada profissional em números"),
    ("exp.years", "Anos de Experiência"),
    ("exp.projects", "Projetos Concluídos"),
    ("exp.technologies", "Tecnologias"),
    ("exp.clients", "Clientes Satisfeitos"),
    ("contact.title", "Entre em Contato"),
    ("contact.subtitle", "Vamos trabalhar juntos no seu próximo projeto"),
    ("contact.description", "Atualmente estou disponível para trabalhos freelance e posições em tempo integral. Se você tem um projeto que precisa de desenvolvimento ou uma oportunidade que combina com minhas habilidades, não hesite em entrar em contato!"),
    ("contact.email", "Enviar Email"),
    ("contact.linkedin", "Conectar no LinkedIn"),
    ("contact.github", "Seguir no GitHub"),
    ("footer.madeWith", "Feito com"),
    ("footer.by", "por John Developer"),
];
