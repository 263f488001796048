//! The `skillmatch init` command.

use anyhow::Result;

use skillmatch_core::parser::builtin_catalog_source;

pub fn execute() -> Result<()> {
    // Create skillmatch.toml
    if std::path::Path::new("skillmatch.toml").exists() {
        println!("skillmatch.toml already exists, skipping.");
    } else {
        std::fs::write("skillmatch.toml", SAMPLE_CONFIG)?;
        println!("Created skillmatch.toml");
    }

    // Create a copy of the built-in catalog to edit
    std::fs::create_dir_all("catalog")?;
    let catalog_path = std::path::Path::new("catalog/catalog.toml");
    if catalog_path.exists() {
        println!("catalog/catalog.toml already exists, skipping.");
    } else {
        std::fs::write(catalog_path, builtin_catalog_source())?;
        println!("Created catalog/catalog.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit catalog/catalog.toml with your questions, resources, and careers");
    println!("  2. Run: skillmatch validate --catalog catalog/catalog.toml");
    println!("  3. Run: skillmatch quiz");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# skillmatch configuration

catalog = "catalog/catalog.toml"

# What to do with answers outside the 0-4 option range: "reject" or "clamp"
answer_policy = "reject"

popular_tag_limit = 12
recommendation_limit = 6
output_dir = "./skillmatch-results"
"#;
