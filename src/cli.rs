//! # Command-Line Interface Module
//!
//! This module defines the command-line interface for Moodtune using Clap
//! derive macros. It provides a type-safe way to parse command-line
//! arguments and route them to appropriate functionality.
//!
//! ## Commands
//!
//! - `recommend`: Match a mood/keyword against the catalog and print results
//! - `list`: Display the catalog's categories and labels
//! - `completion`: Generate shell completion scripts
//!
//! ## Examples
//!
//! ```bash
//! moodtune recommend anger
//! moodtune recommend aggressive --format json
//! moodtune list --catalog ./musics
//! ```

use crate::render::OutputFormat;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Shell types supported for completion generation
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

/// Main application arguments structure.
///
/// Uses Clap derive macros to automatically generate argument parsing,
/// help text, and validation. The main structure contains only a subcommand
/// since all functionality is accessed through specific commands.
#[derive(Parser)]
#[command(name = "moodtune")]
#[command(about = "Moodtune: mood-keyword music recommendations from a flat-file catalog")]
#[command(version)]
pub struct Args {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Enumeration of all available subcommands.
///
/// Each variant corresponds to a major piece of functionality in Moodtune.
/// Command arguments are embedded directly in the enum variants for
/// type safety and automatic validation.
#[derive(Subcommand)]
pub enum Command {
    /// Recommend songs for a mood or keyword
    ///
    /// Loads the catalog and matches the query in four tiers: exact label,
    /// exact category, substring over song names and authors, and finally
    /// the nearest category by fuzzy prefix comparison. All matching is
    /// case-insensitive.
    Recommend {
        /// Mood or keyword to match
        ///
        /// Can be a label (`aggressive`), a category (`anger`), or any
        /// fragment of a song name or author. A query that matches nothing
        /// still yields the closest category's songs.
        #[arg(value_hint = clap::ValueHint::Other)]
        query: String,

        /// Path to the catalog file
        ///
        /// Defaults to `./musics`, then the platform data directory.
        #[arg(long, env = "MOODTUNE_CATALOG")]
        catalog: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// List the catalog's categories and labels
    ///
    /// Displays every category and label with the number of entries each
    /// resolves to. Useful for checking what keywords a catalog answers to.
    List {
        /// Path to the catalog file
        ///
        /// Defaults to `./musics`, then the platform data directory.
        #[arg(long, env = "MOODTUNE_CATALOG")]
        catalog: Option<PathBuf>,
    },

    /// Generate shell completions
    ///
    /// Generates completion scripts for various shells to enable tab
    /// completion of commands and options.
    ///
    /// Usage: moodtune completion bash > ~/.local/share/bash-completion/completions/moodtune
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },

    /// Generate enhanced completion with keyword completion
    ///
    /// Generates an enhanced completion script that completes the
    /// `recommend` query position with label and category names from the
    /// catalog.
    ///
    /// Usage: moodtune completion-enhanced bash > ~/.local/share/bash-completion/completions/moodtune
    /// Usage: moodtune completion-enhanced fish > ~/.config/fish/completions/moodtune.fish
    CompletionEnhanced {
        /// Shell to generate enhanced completions for (currently bash and fish supported)
        shell: Shell,
    },

    /// List available keywords for completion (hidden command)
    #[command(hide = true)]
    CompleteKeywords,

    /// List available keywords for fish shell completion (hidden command)
    #[command(hide = true)]
    CompleteKeywordsFish,
}
