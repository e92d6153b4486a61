//! Tiered keyword matching over the parsed catalog.
//!
//! A single pure, deterministic function: no state, no I/O, no randomness.
//! Tiers are evaluated in order and the first one that produces anything
//! wins:
//!
//! 1. exact label match;
//! 2. exact category match;
//! 3. substring scan over every entry's name and author;
//! 4. fuzzy fallback on the nearest category by positional prefix mismatch.

use crate::catalog::{Catalog, Entry, LabelIndex};
use anyhow::{bail, Result};
use log::debug;

/// Recommend entries for a mood/keyword query.
///
/// The query is lowercased before matching; labels, categories and entry
/// names are already lowercase from parse time, and authors are lowercased
/// here at comparison time.
///
/// Substring matches are returned in catalog iteration order: category
/// order first, then entry order within a category. The fuzzy tier breaks
/// mismatch-count ties in favor of the first-encountered category.
///
/// # Errors
///
/// Fails only when the fuzzy tier is reached with an empty catalog, which
/// leaves nothing to fall back on.
pub fn recommend(query: &str, catalog: &Catalog, labels: &LabelIndex) -> Result<Vec<Entry>> {
    let query = query.to_lowercase();

    if let Some(hits) = labels.get(&query) {
        debug!("Query '{query}' matched a label ({} entries)", hits.len());
        return Ok(hits.to_vec());
    }

    if let Some(hits) = catalog.get(&query) {
        debug!("Query '{query}' matched a category ({} entries)", hits.len());
        return Ok(hits.to_vec());
    }

    let hits: Vec<Entry> = catalog
        .iter()
        .flat_map(|(_, entries)| entries)
        .filter(|entry| entry.name.contains(&query) || entry.author.to_lowercase().contains(&query))
        .cloned()
        .collect();

    if !hits.is_empty() {
        debug!("Query '{query}' substring-matched {} entries", hits.len());
        return Ok(hits);
    }

    // Last resort: nearest category by prefix mismatch. min_by_key keeps the
    // first of equally-distant categories, preserving file order.
    let Some(nearest) = catalog
        .iter()
        .map(|(category, _)| category)
        .min_by_key(|category| prefix_mismatch(&query, category))
    else {
        bail!("Cannot recommend for '{query}': catalog has no categories");
    };

    debug!("Query '{query}' fell back to nearest category '{nearest}'");
    Ok(catalog.get(nearest).unwrap_or(&[]).to_vec())
}

/// Positional character mismatch count over the overlapping prefix.
///
/// Only the first `min(len(a), len(b))` characters are compared; anything
/// beyond the shorter string never counts. So `"ang"` vs `"anger"` is 0.
#[must_use]
pub fn prefix_mismatch(a: &str, b: &str) -> usize {
    a.chars()
        .zip(b.chars())
        .filter(|(left, right)| left != right)
        .count()
}
