//! # Integration Tests for Moodtune
//!
//! This module contains integration tests that exercise the full
//! functionality of Moodtune from a user perspective: loading a catalog
//! file from disk, matching queries through every tier, and rendering the
//! results.

use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

const SAMPLE_CATALOG: &str = "\
Anger
+ Aggressive
~ Break Stuff | Limp Bizkit | http://example.com/1
~ Bodies | Drowning Pool | http://example.com/2

Calm
+ Quiet
+ Focus
~ Weightless | Marconi Union | http://example.com/3

Sadness
~ Hurt | Johnny Cash | http://example.com/4
";

/// Test helper to write a sample catalog file into a temp directory
fn create_test_catalog() -> Result<(TempDir, PathBuf)> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("musics");
    fs::write(&path, SAMPLE_CATALOG)?;
    Ok((temp_dir, path))
}

#[cfg(test)]
mod cli_tests {
    use super::*;

    #[test]
    fn test_cli_help_displays_correctly() {
        let output = Command::new("cargo")
            .args(["run", "--", "--help"])
            .output()
            .expect("Failed to run help command");

        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("moodtune"));
        assert!(stdout.contains("recommend"));
        assert!(stdout.contains("list"));
        assert!(stdout.contains("completion"));
    }

    #[test]
    fn test_cli_recommend_from_file() -> Result<()> {
        let (_temp_dir, path) = create_test_catalog()?;

        let output = Command::new("cargo")
            .args(["run", "--", "recommend", "aggressive", "--catalog"])
            .arg(&path)
            .output()
            .expect("Failed to run recommend command");

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("Music 1"));
        assert!(stdout.contains("- Name: break stuff"));
        assert!(stdout.contains("- Author: Limp Bizkit"));
        assert!(stdout.contains("- Link: http://example.com/1"));
        Ok(())
    }

    #[test]
    fn test_cli_missing_catalog_fails() {
        let output = Command::new("cargo")
            .args(["run", "--", "recommend", "calm", "--catalog", "/nonexistent/musics"])
            .output()
            .expect("Failed to run recommend command");

        assert!(!output.status.success());
    }
}

#[cfg(test)]
mod loader_tests {
    use super::*;
    use moodtune::catalog;

    #[test]
    fn test_load_from_disk() -> Result<()> {
        let (_temp_dir, path) = create_test_catalog()?;

        let (by_category, by_label) = catalog::load(&path)?;
        assert_eq!(by_category.len(), 3);
        assert_eq!(by_label.len(), 3);
        assert_eq!(by_category.get("anger").unwrap().len(), 2);
        Ok(())
    }

    #[test]
    fn test_loading_twice_yields_identical_maps() -> Result<()> {
        let (_temp_dir, path) = create_test_catalog()?;

        let first = catalog::load(&path)?;
        let second = catalog::load(&path)?;
        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn test_malformed_entry_line_is_fatal() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("musics");
        fs::write(&path, "anger\n~ missing fields\n")?;

        let err = catalog::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("line 2"));
        Ok(())
    }
}

#[cfg(test)]
mod recommender_tests {
    use super::*;
    use moodtune::{catalog, recommend};

    #[test]
    fn test_label_query_returns_aggregated_entries() -> Result<()> {
        let (_temp_dir, path) = create_test_catalog()?;
        let (by_category, by_label) = catalog::load(&path)?;

        // A label query returns the tagged block's entries with the name
        // lowercased and the author's case preserved.
        let results = recommend::recommend("aggressive", &by_category, &by_label)?;
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].name, "break stuff");
        assert_eq!(results[0].author, "Limp Bizkit");
        assert_eq!(results[0].link, "http://example.com/1");
        Ok(())
    }

    #[test]
    fn test_category_query_returns_file_order() -> Result<()> {
        let (_temp_dir, path) = create_test_catalog()?;
        let (by_category, by_label) = catalog::load(&path)?;

        let results = recommend::recommend("Anger", &by_category, &by_label)?;
        let names: Vec<&str> = results.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["break stuff", "bodies"]);
        Ok(())
    }

    #[test]
    fn test_substring_query_is_case_insensitive() -> Result<()> {
        let (_temp_dir, path) = create_test_catalog()?;
        let (by_category, by_label) = catalog::load(&path)?;

        let results = recommend::recommend("JOHNNY", &by_category, &by_label)?;
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "hurt");
        Ok(())
    }

    #[test]
    fn test_unmatched_query_falls_through_to_fuzzy() -> Result<()> {
        let (_temp_dir, path) = create_test_catalog()?;
        let (by_category, by_label) = catalog::load(&path)?;

        // Matches no label, category or substring; the fuzzy tier still
        // answers with the nearest category's entries.
        let results = recommend::recommend("zzzznotfound", &by_category, &by_label)?;
        assert!(!results.is_empty());
        Ok(())
    }

    #[test]
    fn test_fuzzy_query_prefers_prefix_overlap() -> Result<()> {
        let (_temp_dir, path) = create_test_catalog()?;
        let (by_category, by_label) = catalog::load(&path)?;

        // "sadn" overlaps "sadness" with zero mismatches over 4 chars.
        let results = recommend::recommend("sadn", &by_category, &by_label)?;
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "hurt");
        Ok(())
    }
}

#[cfg(test)]
mod render_tests {
    use super::*;
    use moodtune::catalog::Entry;
    use moodtune::render::{render, OutputFormat};

    #[test]
    fn test_end_to_end_text_output() -> Result<()> {
        let (_temp_dir, path) = create_test_catalog()?;
        let (by_category, by_label) = moodtune::catalog::load(&path)?;
        let results = moodtune::recommend::recommend("calm", &by_category, &by_label)?;

        let mut out = Vec::new();
        render(&mut out, &results, OutputFormat::Text)?;

        let text = String::from_utf8(out)?;
        assert!(text.starts_with("Music 1\n- Name: weightless\n"));
        Ok(())
    }

    #[test]
    fn test_end_to_end_json_output() -> Result<()> {
        let (_temp_dir, path) = create_test_catalog()?;
        let (by_category, by_label) = moodtune::catalog::load(&path)?;
        let results = moodtune::recommend::recommend("calm", &by_category, &by_label)?;

        let mut out = Vec::new();
        render(&mut out, &results, OutputFormat::Json)?;

        let parsed: Vec<Entry> = serde_json::from_slice(&out)?;
        assert_eq!(parsed, results);
        Ok(())
    }
}

#[cfg(test)]
mod configuration_tests {
    use super::*;
    use moodtune::config;

    #[test]
    fn test_explicit_catalog_resolution() -> Result<()> {
        let (_temp_dir, path) = create_test_catalog()?;

        let resolved = config::resolve_catalog_path(Some(&path))?;
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("musics"));
        Ok(())
    }

    #[test]
    fn test_data_directory_creation() -> Result<()> {
        let data_dir = config::get_data_dir()?;

        assert!(data_dir.exists());
        assert!(data_dir.is_dir());
        assert!(data_dir.is_absolute());
        Ok(())
    }
}
