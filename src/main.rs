// SPDX-License-Identifier: PMPL-1.0-or-later

//! folio: render and inspect the portfolio site's translations
//!
//! Installs a language scope the same way the page root does, then renders
//! sections, looks up keys, or audits the catalog for keys missing from one
//! of the languages.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use colored::*;
use folio_i18n::i18n::{Catalog, Lang};
use folio_i18n::language::{provide_language, use_language};
use folio_i18n::page::{self, Page, PageOutputFormat};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Render and inspect the portfolio site's translations")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render every page section in one language
    Render {
        /// Language code to render in
        #[arg(short, long, default_value = "en")]
        lang: Lang,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: PageOutputFormat,

        /// Write the rendered page to a file instead of the terminal
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Translate a single key (prints the key itself when missing)
    Translate {
        /// Translation key, e.g. nav.about
        #[arg(value_name = "KEY")]
        key: String,

        /// Language code to translate into
        #[arg(short, long, default_value = "en")]
        lang: Lang,
    },

    /// List the keys of one language's table
    Keys {
        /// Language code whose table to list
        #[arg(short, long, default_value = "en")]
        lang: Lang,
    },

    /// List supported languages in toggle order
    Languages,

    /// Report keys present in one language but missing from another
    Check,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            lang,
            format,
            output,
        } => {
            let scope = provide_language();
            scope.service().switch_to(lang);

            let rendered = Page::portfolio().render()?;

            if let Some(output_path) = output {
                page::save_page(&rendered, &output_path, format)?;
                println!("{} {}", "Page saved to:".green(), output_path.display());
            } else if format == PageOutputFormat::Text {
                page::print_page(&rendered);
            } else {
                println!("{}", format.serialize(&rendered)?);
            }
        }

        Commands::Translate { key, lang } => {
            let scope = provide_language();
            scope.service().switch_to(lang);
            println!("{}", use_language()?.translate(&key));
        }

        Commands::Keys { lang } => {
            for key in Catalog::builtin().keys(lang) {
                println!("{}", key);
            }
        }

        Commands::Languages => {
            for lang in Lang::all() {
                let marker = if *lang == Lang::default() {
                    " (default)".dimmed().to_string()
                } else {
                    String::new()
                };
                println!(
                    "  {}  {:12} {}{}",
                    lang.code().bold(),
                    lang.name(),
                    lang.native_name(),
                    marker
                );
            }
        }

        Commands::Check => {
            let gaps = Catalog::builtin().parity_gaps();
            if gaps.is_empty() {
                println!("{}", "catalog parity OK".green());
            } else {
                for gap in &gaps {
                    println!(
                        "  [{}] '{}' present in {} but missing in {}",
                        "MISSING".red(),
                        gap.key,
                        gap.present_in,
                        gap.missing_in
                    );
                }
                bail!("{} key(s) missing from at least one language", gaps.len());
            }
        }
    }

    Ok(())
}
