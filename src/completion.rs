//! # Shell Completion Module
//!
//! This module provides shell completion functionality for Moodtune,
//! including:
//! - Generation of completion scripts for various shells
//! - Custom completion of query keywords (labels and categories) from the
//!   catalog
//! - Integration with clap's completion system
//!
//! ## Usage
//!
//! ```bash
//! # Generate bash completions
//! moodtune completion bash > ~/.local/share/bash-completion/completions/moodtune
//!
//! # Generate zsh completions
//! moodtune completion zsh > ~/.config/zsh/completions/_moodtune
//! ```

use crate::catalog;
use crate::config;
use anyhow::Result;
use clap::Command;
use clap_complete::{generate, Generator, Shell as CompletionShell};
use std::io;

/// Generate shell completions for the given shell
pub fn generate_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
}

/// Generate enhanced fish completion script with keyword completion
pub fn generate_enhanced_fish_completion() {
    println!(
        r#"# Enhanced Moodtune completion script for Fish shell with keyword completion
# Install with: moodtune completion-enhanced fish > ~/.config/fish/completions/moodtune.fish

# Function to get keyword completions
function __moodtune_complete_keywords
    # Get keyword completions from moodtune command, suppress errors
    if command -sq moodtune
        moodtune complete-keywords-fish 2>/dev/null
    end
end

# Clear existing completions to avoid conflicts
complete -c moodtune -e

# Global options
complete -c moodtune -s h -l help -d 'Print help information'
complete -c moodtune -s V -l version -d 'Print version information'

# Main commands
complete -c moodtune -f -n '__fish_is_first_token' -a 'recommend' -d 'Recommend songs for a mood or keyword'
complete -c moodtune -f -n '__fish_is_first_token' -a 'list' -d 'List the catalog categories and labels'
complete -c moodtune -f -n '__fish_is_first_token' -a 'completion' -d 'Generate shell completions'
complete -c moodtune -f -n '__fish_is_first_token' -a 'completion-enhanced' -d 'Generate enhanced shell completions'
complete -c moodtune -f -n '__fish_is_first_token' -a 'help' -d 'Print help for commands'

# recommend command - complete with keywords and options
complete -c moodtune -n '__fish_seen_subcommand_from recommend' -a '(__moodtune_complete_keywords)' -d 'Label or category'
complete -c moodtune -n '__fish_seen_subcommand_from recommend' -l catalog -d 'Path to the catalog file' -r
complete -c moodtune -f -n '__fish_seen_subcommand_from recommend' -s f -l format -a 'text json' -d 'Output format'

# list command - complete with options
complete -c moodtune -n '__fish_seen_subcommand_from list' -l catalog -d 'Path to the catalog file' -r

# completion commands - complete with shell types
complete -c moodtune -f -n '__fish_seen_subcommand_from completion' -a 'bash' -d 'Generate bash completions'
complete -c moodtune -f -n '__fish_seen_subcommand_from completion' -a 'zsh' -d 'Generate zsh completions'
complete -c moodtune -f -n '__fish_seen_subcommand_from completion' -a 'fish' -d 'Generate fish completions'
complete -c moodtune -f -n '__fish_seen_subcommand_from completion' -a 'power-shell' -d 'Generate PowerShell completions'
complete -c moodtune -f -n '__fish_seen_subcommand_from completion' -a 'elvish' -d 'Generate elvish completions'
complete -c moodtune -f -n '__fish_seen_subcommand_from completion-enhanced' -a 'bash' -d 'Generate enhanced bash completions'
complete -c moodtune -f -n '__fish_seen_subcommand_from completion-enhanced' -a 'fish' -d 'Generate enhanced fish completions'

# help command - complete with subcommands for help topics
complete -c moodtune -f -n '__fish_seen_subcommand_from help' -a 'recommend' -d 'Help for recommend command'
complete -c moodtune -f -n '__fish_seen_subcommand_from help' -a 'list' -d 'Help for list command'
complete -c moodtune -f -n '__fish_seen_subcommand_from help' -a 'completion' -d 'Help for completion command'
complete -c moodtune -f -n '__fish_seen_subcommand_from help' -a 'completion-enhanced' -d 'Help for completion-enhanced command'
"#
    );
}

/// Generate enhanced bash completion script with keyword completion
pub fn generate_enhanced_bash_completion() {
    println!(
        r#"#!/bin/bash
# Enhanced Moodtune completion script with keyword completion
# Install with: moodtune completion-enhanced bash > ~/.local/share/bash-completion/completions/moodtune

_moodtune_complete_keywords() {{
    # Get keyword completions from moodtune command
    local keywords
    if command -v moodtune >/dev/null 2>&1; then
        # Use complete-keywords command to get available labels and categories
        mapfile -t keywords < <(moodtune complete-keywords 2>/dev/null)
        printf '%s\n' "${{keywords[@]}}"
    fi
}}

_moodtune() {{
    local cur prev words cword
    _init_completion || return

    case "${{prev}}" in
        recommend)
            # Complete with labels and categories from the catalog
            mapfile -t COMPREPLY < <(_moodtune_complete_keywords | grep -i "^${{cur}}")
            return 0
            ;;
        completion|completion-enhanced)
            # Complete with shell types
            COMPREPLY=($(compgen -W "bash zsh fish power-shell elvish" -- "${{cur}}"))
            return 0
            ;;
        --catalog)
            # Complete with files
            _filedir
            return 0
            ;;
        --format|-f)
            COMPREPLY=($(compgen -W "text json" -- "${{cur}}"))
            return 0
            ;;
    esac

    # Check if we're completing a subcommand
    local subcommands="recommend list completion completion-enhanced help"

    if [[ $cword -eq 1 ]]; then
        # Complete main commands
        COMPREPLY=($(compgen -W "$subcommands --help --version" -- "${{cur}}"))
    else
        # Handle command-specific options
        case "${{words[1]}}" in
            recommend)
                COMPREPLY=($(compgen -W "--catalog --format -f --help" -- "${{cur}}"))
                ;;
            list)
                COMPREPLY=($(compgen -W "--catalog --help" -- "${{cur}}"))
                ;;
            completion|completion-enhanced)
                COMPREPLY=($(compgen -W "bash zsh fish power-shell elvish" -- "${{cur}}"))
                ;;
            *)
                # Default completion
                COMPREPLY=($(compgen -W "$subcommands" -- "${{cur}}"))
                ;;
        esac
    fi
}} &&
complete -F _moodtune moodtune

# ex: filetype=sh
"#
    );
}

/// Convert our Shell enum to clap_complete's Shell enum
pub fn shell_to_completion_shell(shell: &crate::cli::Shell) -> CompletionShell {
    match shell {
        crate::cli::Shell::Bash => CompletionShell::Bash,
        crate::cli::Shell::Zsh => CompletionShell::Zsh,
        crate::cli::Shell::Fish => CompletionShell::Fish,
        crate::cli::Shell::PowerShell => CompletionShell::PowerShell,
        crate::cli::Shell::Elvish => CompletionShell::Elvish,
    }
}

/// Get available query keywords for completion
///
/// Returns every label and category name from the catalog. Labels come
/// first since they are the intended query surface; duplicates (a label
/// shadowing a category of the same name) are removed.
pub fn get_keyword_completions() -> Result<Vec<String>> {
    let path = match config::resolve_catalog_path(None) {
        Ok(path) => path,
        Err(_) => return Ok(Vec::new()), // Return empty if no catalog
    };

    let (catalog, labels) = match catalog::load(&path) {
        Ok(maps) => maps,
        Err(_) => return Ok(Vec::new()), // Return empty on any parse error
    };

    let mut completions: Vec<String> = Vec::new();
    for (label, _) in labels.iter() {
        completions.push(label.to_string());
    }
    for (category, _) in catalog.iter() {
        if !completions.iter().any(|c| c == category) {
            completions.push(category.to_string());
        }
    }

    // Sort for consistent output
    completions.sort();
    Ok(completions)
}

/// Print available completions for query keywords
/// This is used by shell completion systems to get dynamic completions
pub fn print_keyword_completions() -> Result<()> {
    print_keyword_completions_for_shell(None)
}

/// Print available completions for query keywords, formatted for a specific
/// shell
pub fn print_keyword_completions_for_shell(shell: Option<&str>) -> Result<()> {
    let completions = get_keyword_completions()?;

    for completion in completions {
        match shell {
            Some("fish") => {
                // Fish handles escaping automatically, don't add quotes
                println!("{completion}");
            }
            _ => {
                // For bash, zsh, and other shells, quote keywords with spaces
                if completion.contains(' ') || completion.contains('\t') {
                    println!("\"{}\"", completion.replace('"', "\\\""));
                } else {
                    println!("{completion}");
                }
            }
        }
    }

    Ok(())
}
