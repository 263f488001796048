//! The `skillmatch validate` command.

use std::path::PathBuf;

use anyhow::Result;

use skillmatch_core::parser;

pub fn execute(catalog_path: Option<PathBuf>) -> Result<()> {
    let catalogs = match catalog_path {
        Some(path) if path.is_dir() => parser::load_catalog_directory(&path)?,
        Some(path) => vec![parser::parse_catalog(&path)?],
        None => vec![parser::builtin_catalog()?],
    };

    let mut total_warnings = 0;

    for catalog in &catalogs {
        println!(
            "Catalog: {} ({} questions, {} resources, {} careers)",
            catalog.name,
            catalog.questions.len(),
            catalog.resources.len(),
            catalog.careers.len()
        );

        let warnings = parser::validate_catalog(catalog);
        for w in &warnings {
            let prefix = w
                .entry
                .as_ref()
                .map(|entry| format!("  [{entry}]"))
                .unwrap_or_else(|| "  ".to_string());
            println!("{prefix} WARNING: {}", w.message);
        }
        total_warnings += warnings.len();
    }

    if total_warnings == 0 {
        println!("All catalogs valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}
