//! Presentation layer for recommendation results.
//!
//! Matching produces plain data; this module is the only place that decides
//! how it looks. Text output keeps the original block format
//! (`Music N / - Name / - Author / - Link`), and JSON output serializes the
//! entries as-is for scripting.

use crate::catalog::{Catalog, Entry, LabelIndex};
use anyhow::Result;
use clap::ValueEnum;
use std::io::Write;

/// Output format for the `recommend` command.
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
pub enum OutputFormat {
    /// Numbered text blocks, one per entry
    Text,
    /// JSON array of entries
    Json,
}

/// Write recommendation results in the chosen format.
pub fn render(out: &mut impl Write, entries: &[Entry], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => render_text(out, entries),
        OutputFormat::Json => render_json(out, entries),
    }
}

fn render_text(out: &mut impl Write, entries: &[Entry]) -> Result<()> {
    for (number, entry) in entries.iter().enumerate() {
        writeln!(out, "Music {}", number + 1)?;
        writeln!(out, "- Name: {}", entry.name)?;
        writeln!(out, "- Author: {}", entry.author)?;
        writeln!(out, "- Link: {}", entry.link)?;
        writeln!(out)?;
    }
    Ok(())
}

fn render_json(out: &mut impl Write, entries: &[Entry]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, entries)?;
    writeln!(out)?;
    Ok(())
}

/// Write a summary of the catalog: categories with entry counts, then
/// labels with the entry counts they aggregate.
pub fn render_list(out: &mut impl Write, catalog: &Catalog, labels: &LabelIndex) -> Result<()> {
    writeln!(out, "Categories ({}):", catalog.len())?;
    for (category, entries) in catalog.iter() {
        writeln!(out, "  {category} ({} entries)", entries.len())?;
    }

    writeln!(out, "Labels ({}):", labels.len())?;
    for (label, entries) in labels.iter() {
        writeln!(out, "  {label} ({} entries)", entries.len())?;
    }
    Ok(())
}
