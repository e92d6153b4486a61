//! # Catalog Loader Module
//!
//! Parses the flat-file music catalog (default name `musics`) into two
//! in-memory maps: categories to entries, and labels to aggregated entries.
//! Both are rebuilt from the file on every command and never mutated after
//! construction.
//!
//! ## File format
//!
//! ```text
//! anger
//! + aggressive
//! ~ Break Stuff | Limp Bizkit | http://example.com/1
//! ~ Bodies | Drowning Pool | http://example.com/2
//!
//! calm
//! ~ Weightless | Marconi Union | http://example.com/3
//! ```
//!
//! - A non-blank line without a marker starts a new category (trimmed,
//!   lowercased).
//! - `+ label` tags the current block with a label.
//! - `~ name | author | link` adds an entry to the current category. The
//!   name is lowercased at parse time; the author keeps its original case
//!   (matching lowercases it at query time instead).
//! - A blank line hands every label collected since the previous blank line
//!   a copy of all entries accumulated so far under the current category,
//!   then clears the pending labels. End of input flushes the same way.

use anyhow::{bail, Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// A single recommendable song.
///
/// `name` is lowercased and trimmed at parse time. `author` and `link` are
/// trimmed only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,
    pub author: String,
    pub link: String,
}

/// Insertion-ordered map from a normalized keyword to its entries.
///
/// Keys are lowercased and trimmed before insertion. Iteration follows
/// first-appearance order, which the substring tier and the fuzzy tie-break
/// in [`crate::recommend`] depend on. Appending under an existing key
/// extends its bucket.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EntryMap {
    keys: Vec<String>,
    buckets: Vec<Vec<Entry>>,
    index: HashMap<String, usize>,
}

/// Category name → entries, in file order.
pub type Catalog = EntryMap;

/// Label name → entries aggregated from every category tagged with it.
pub type LabelIndex = EntryMap;

impl EntryMap {
    /// Look up a bucket by its already-normalized key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&[Entry]> {
        self.index.get(key).map(|&i| self.buckets[i].as_slice())
    }

    /// Iterate buckets in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Entry])> {
        self.keys
            .iter()
            .zip(self.buckets.iter())
            .map(|(k, b)| (k.as_str(), b.as_slice()))
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Append entries under `key`, creating the bucket if absent.
    ///
    /// The key is created even when `entries` is empty, so a label over a
    /// category with no entries still resolves (to an empty result) at
    /// query time.
    fn append(&mut self, key: &str, entries: &[Entry]) {
        let i = match self.index.get(key) {
            Some(&i) => i,
            None => {
                self.keys.push(key.to_string());
                self.buckets.push(Vec::new());
                self.index.insert(key.to_string(), self.keys.len() - 1);
                self.keys.len() - 1
            }
        };
        self.buckets[i].extend_from_slice(entries);
    }

    fn push(&mut self, key: &str, entry: Entry) {
        self.append(key, std::slice::from_ref(&entry));
    }
}

/// Read and parse a catalog file.
///
/// # Errors
///
/// Fails if the file cannot be read, or on any malformed line (see
/// [`parse`]). Parse errors carry the offending line number.
pub fn load(path: &Path) -> Result<(Catalog, LabelIndex)> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;

    parse(&content).with_context(|| format!("Failed to parse catalog file: {}", path.display()))
}

/// Parse catalog text into a [`Catalog`] and a [`LabelIndex`].
///
/// Parsing is deterministic: loading the same text twice yields identical
/// maps.
///
/// # Errors
///
/// - An entry line with fewer than three `|`-separated fields. Fields
///   beyond the third are ignored, not an error.
/// - An entry or label line before any category heading.
pub fn parse(content: &str) -> Result<(Catalog, LabelIndex)> {
    let mut catalog = Catalog::default();
    let mut labels = LabelIndex::default();

    // Category of the block being read, and the labels collected since the
    // last blank line. Pending labels survive a category change until the
    // next blank line, so a flush always uses the category current at flush
    // time.
    let mut current: Option<String> = None;
    let mut pending: Vec<String> = Vec::new();

    for (number, raw) in content.lines().enumerate() {
        let number = number + 1;
        let line = raw.trim();

        if line.is_empty() {
            flush_pending(&mut labels, &catalog, current.as_deref(), &mut pending);
            continue;
        }

        if let Some(rest) = line.strip_prefix('+') {
            if current.is_none() {
                bail!("Label before any category heading at line {number}: {line}");
            }
            pending.push(rest.trim().to_lowercase());
        } else if let Some(rest) = line.strip_prefix('~') {
            let Some(category) = current.as_deref() else {
                bail!("Entry before any category heading at line {number}: {line}");
            };
            let entry = parse_entry(rest, number)?;
            catalog.push(category, entry);
        } else {
            current = Some(line.to_lowercase());
        }
    }

    // A file without a trailing blank line still flushes its last block.
    flush_pending(&mut labels, &catalog, current.as_deref(), &mut pending);

    debug!(
        "Parsed catalog: {} categories, {} labels",
        catalog.len(),
        labels.len()
    );
    Ok((catalog, labels))
}

/// Give every pending label a copy of the current category's entries.
///
/// A category heading only materializes in the catalog once it holds an
/// entry, so labels over an entry-less block aggregate nothing.
fn flush_pending(
    labels: &mut LabelIndex,
    catalog: &Catalog,
    current: Option<&str>,
    pending: &mut Vec<String>,
) {
    for label in pending.drain(..) {
        let entries = current.and_then(|c| catalog.get(c)).unwrap_or(&[]);
        labels.append(&label, entries);
    }
}

/// Split an entry line body on `|` into name, author and link.
fn parse_entry(body: &str, number: usize) -> Result<Entry> {
    let mut fields = body.split('|');
    let (Some(name), Some(author), Some(link)) = (fields.next(), fields.next(), fields.next())
    else {
        bail!(
            "Malformed entry at line {number}: expected 'name | author | link', got: {}",
            body.trim()
        );
    };

    Ok(Entry {
        name: name.trim().to_lowercase(),
        author: author.trim().to_string(),
        link: link.trim().to_string(),
    })
}
