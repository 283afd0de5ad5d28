// SPDX-License-Identifier: PMPL-1.0-or-later

//! Page formatting and output

use crate::page::{PageOutputFormat, RenderedPage, RenderedSection};
use anyhow::{Context, Result};
use colored::*;
use std::fs;
use std::path::Path;

pub struct PageFormatter;

impl PageFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn print(&self, page: &RenderedPage) {
        println!(
            "\n{}",
            format!("=== PORTFOLIO ({}) ===", page.language.native_name())
                .bold()
                .cyan()
        );
        println!();

        for section in &page.sections {
            self.print_section(section);
            println!();
        }
    }

    fn print_section(&self, section: &RenderedSection) {
        let mut lines = section.lines.iter();
        if let Some(first) = lines.next() {
            println!("{}", first.text.bold().yellow());
        }
        for line in lines {
            println!("  {}", line.text);
        }
    }

    pub fn save<P: AsRef<Path>>(
        &self,
        page: &RenderedPage,
        path: P,
        format: PageOutputFormat,
    ) -> Result<()> {
        let path = path.as_ref();
        let body = format.serialize(page)?;
        fs::write(path, body).with_context(|| format!("writing {}", path.display()))
    }
}

impl Default for PageFormatter {
    fn default() -> Self {
        Self::new()
    }
}
