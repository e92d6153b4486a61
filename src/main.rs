//! # Moodtune - Mood-Keyword Music Recommendations
//!
//! Moodtune recommends songs for a mood or keyword from a flat-file catalog
//! grouped by category and optional labels. Matching is tiered: exact label,
//! exact category, substring over names and authors, then a fuzzy nearest-
//! category fallback.
//!
//! ## Architecture
//!
//! - `cli`: Command-line interface definitions
//! - `catalog`: Flat-file catalog parsing
//! - `recommend`: Tiered keyword matching
//! - `render`: Output formatting (text blocks, JSON)
//! - `config`: Catalog file resolution
//! - `completion`: Shell completion generation
//!
//! ## Usage
//!
//! ```bash
//! # Recommend for a category
//! moodtune recommend anger
//!
//! # Recommend for a label, as JSON
//! moodtune recommend aggressive --format json
//!
//! # Inspect the catalog
//! moodtune list --catalog ./musics
//! ```

use anyhow::Result;
use clap::{CommandFactory, Parser};
use log::info;
use moodtune::{catalog, cli, completion, config, recommend, render};
use std::io;

/// Main entry point for the Moodtune application.
///
/// Initializes logging, parses command-line arguments, and routes commands
/// to the appropriate module functions. All operations return Results for
/// consistent error handling throughout the application.
///
/// # Logging
///
/// Initializes environment logger which can be controlled via `RUST_LOG`:
/// - `RUST_LOG=debug moodtune recommend calm` - Enable debug logging
/// - `RUST_LOG=moodtune::recommend=debug moodtune recommend calm` - Module-specific logging
fn main() -> Result<()> {
    // Initialize environment logger for debugging and monitoring
    env_logger::init();

    // Parse command-line arguments using Clap derive macros
    let args = cli::Args::parse();

    // Route commands to appropriate module functions
    match args.command {
        cli::Command::Recommend {
            query,
            catalog: catalog_path,
            format,
        } => {
            let path = config::resolve_catalog_path(catalog_path.as_deref())?;
            info!("Recommending for '{query}' from {}", path.display());

            let (by_category, by_label) = catalog::load(&path)?;
            let results = recommend::recommend(&query, &by_category, &by_label)?;

            render::render(&mut io::stdout().lock(), &results, format)?;
        }
        cli::Command::List { catalog: catalog_path } => {
            let path = config::resolve_catalog_path(catalog_path.as_deref())?;
            info!("Listing catalog from {}", path.display());

            let (by_category, by_label) = catalog::load(&path)?;
            render::render_list(&mut io::stdout().lock(), &by_category, &by_label)?;
        }
        cli::Command::Completion { shell } => {
            let mut cmd = cli::Args::command();
            completion::generate_completions(completion::shell_to_completion_shell(&shell), &mut cmd);
        }
        cli::Command::CompletionEnhanced { shell } => match shell {
            cli::Shell::Bash => completion::generate_enhanced_bash_completion(),
            cli::Shell::Fish => completion::generate_enhanced_fish_completion(),
            _ => {
                return Err(anyhow::anyhow!(
                    "Enhanced completions only supported for bash and fish"
                ))
            }
        },
        cli::Command::CompleteKeywords => {
            // This is used by shell completion scripts to get available keywords
            completion::print_keyword_completions()?;
        }
        cli::Command::CompleteKeywordsFish => {
            // This is used by fish shell completion scripts to get available keywords
            completion::print_keyword_completions_for_shell(Some("fish"))?;
        }
    }

    Ok(())
}
