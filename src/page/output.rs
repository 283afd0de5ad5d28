// SPDX-License-Identifier: PMPL-1.0-or-later

//! Serialization helpers for printed/exported pages

use crate::page::RenderedPage;
use anyhow::Result;
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PageOutputFormat {
    Text,
    Json,
    Yaml,
}

impl PageOutputFormat {
    pub fn serialize(&self, page: &RenderedPage) -> Result<String> {
        match self {
            PageOutputFormat::Text => Ok(format_page_as_text(page)),
            PageOutputFormat::Json => Ok(serde_json::to_string_pretty(page)?),
            PageOutputFormat::Yaml => Ok(serde_yaml::to_string(page)?),
        }
    }
}

/// Plain text, one block per section. No terminal colours.
fn format_page_as_text(page: &RenderedPage) -> String {
    let mut lines = Vec::new();
    lines.push(format!("[{}]", page.language));
    for section in &page.sections {
        lines.push(String::new());
        lines.push(format!("== {} ==", section.section.id()));
        for line in &section.lines {
            lines.push(format!("  {}", line.text));
        }
    }
    lines.join("\n")
}
