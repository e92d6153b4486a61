//! Mood-keyword music recommendations from a flat-file catalog.
//!
//! Core modules:
//! - [`catalog`] - Flat-file catalog parsing (categories, labels, entries)
//! - [`recommend`] - Tiered keyword matching
//! - [`render`] - Swappable presentation layer (text blocks, JSON)
//!
//! ### Supporting Modules
//!
//! - [`config`] - Catalog file resolution and data directory management
//! - [`cli`] - Command-line interface definitions with clap integration
//! - [`completion`] - Shell completion generation for enhanced UX
//!
//! ## Quick Start Example
//!
//! ```
//! use moodtune::{catalog, recommend};
//!
//! let text = "\
//! anger
//! + aggressive
//! ~ Break Stuff | Limp Bizkit | http://example.com/1
//! ";
//!
//! let (by_category, by_label) = catalog::parse(text)?;
//! let results = recommend::recommend("aggressive", &by_category, &by_label)?;
//!
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].name, "break stuff");
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Matching Tiers
//!
//! Queries are matched against the catalog in four tiers, first hit wins:
//!
//! 1. **Label exact**: the query equals a label; its aggregated entries are
//!    returned.
//! 2. **Category exact**: the query equals a category; its entries are
//!    returned in file order.
//! 3. **Substring**: every entry whose song name or author contains the
//!    query, in catalog order.
//! 4. **Fuzzy fallback**: the category with the fewest positional character
//!    mismatches over the shared prefix; ties go to the first category in
//!    file order.
//!
//! All comparisons are case-insensitive. The catalog is rebuilt from the
//! file on every invocation and never mutated afterwards; there is no
//! persistent state.
//!
//! ## Error Handling
//!
//! All fallible functions return `Result<T, anyhow::Error>`. Fatal
//! conditions are malformed catalog lines (reported with their line
//! number), entries before any category heading, an unreadable catalog
//! file, and a fuzzy fallback over an empty catalog.
//!
//! ## Logging
//!
//! Modules log through the `log` facade; the binary installs `env_logger`,
//! so `RUST_LOG=debug moodtune recommend calm` shows catalog resolution and
//! the matching tier that answered the query.

pub mod catalog;
pub mod cli;
pub mod completion;
pub mod config;
pub mod recommend;
pub mod render;
