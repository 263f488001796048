//! TOML catalog parser.
//!
//! Loads catalogs from TOML files and directories, and validates them.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::{Career, Catalog, Level, Question, Resource, OPTIONS_PER_QUESTION};

const BUILTIN_CATALOG: &str = include_str!("../data/default_catalog.toml");

/// Intermediate TOML structure for parsing catalog files.
#[derive(Debug, Deserialize)]
struct TomlCatalogFile {
    catalog: TomlCatalogHeader,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
    #[serde(default)]
    resources: Vec<TomlResource>,
    #[serde(default)]
    careers: Vec<TomlCareer>,
}

#[derive(Debug, Deserialize)]
struct TomlCatalogHeader {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct TomlQuestion {
    id: u32,
    text: String,
    #[serde(default)]
    options: Vec<String>,
    category: String,
}

#[derive(Debug, Deserialize)]
struct TomlResource {
    id: String,
    title: String,
    #[serde(default)]
    provider: String,
    #[serde(rename = "type")]
    kind: String,
    level: String,
    #[serde(default)]
    duration: String,
    #[serde(default)]
    rating: f32,
    #[serde(default)]
    url: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct TomlCareer {
    id: String,
    title: String,
    #[serde(default)]
    description: String,
    match_percentage: u8,
    #[serde(default)]
    salary: String,
    #[serde(default)]
    growth: String,
    #[serde(default)]
    skills: Vec<String>,
    #[serde(default)]
    icon: String,
}

/// Parse a single TOML file into a `Catalog`.
pub fn parse_catalog(path: &Path) -> Result<Catalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog file: {}", path.display()))?;

    parse_catalog_str(&content, path)
}

/// Parse a TOML string into a `Catalog`.
pub fn parse_catalog_str(content: &str, source_path: &Path) -> Result<Catalog> {
    let parsed: TomlCatalogFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let questions = parsed
        .questions
        .into_iter()
        .map(|q| Question {
            id: q.id,
            text: q.text,
            options: q.options,
            category: q.category,
        })
        .collect();

    let resources = parsed
        .resources
        .into_iter()
        .map(|r| {
            let level: Level = r
                .level
                .parse()
                .map_err(|e: String| anyhow::anyhow!("resource {}: {}", r.id, e))?;
            Ok(Resource {
                id: r.id,
                title: r.title,
                provider: r.provider,
                kind: r.kind,
                level,
                duration: r.duration,
                rating: r.rating,
                url: r.url,
                tags: r.tags,
                description: r.description,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let careers = parsed
        .careers
        .into_iter()
        .map(|c| Career {
            id: c.id,
            title: c.title,
            description: c.description,
            match_percentage: c.match_percentage,
            salary: c.salary,
            growth: c.growth,
            skills: c.skills,
            icon: c.icon,
        })
        .collect();

    Ok(Catalog {
        id: parsed.catalog.id,
        name: parsed.catalog.name,
        description: parsed.catalog.description,
        questions,
        resources,
        careers,
    })
}

/// The catalog shipped with skillmatch.
pub fn builtin_catalog() -> Result<Catalog> {
    parse_catalog_str(BUILTIN_CATALOG, Path::new("<builtin>"))
}

/// The raw TOML of the built-in catalog, for `skillmatch init`.
pub fn builtin_catalog_source() -> &'static str {
    BUILTIN_CATALOG
}

/// Load the catalog at `path`, or the built-in one when no path is given.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(p) => parse_catalog(p),
        None => builtin_catalog(),
    }
}

/// Recursively load all `.toml` catalog files from a directory.
pub fn load_catalog_directory(dir: &Path) -> Result<Vec<Catalog>> {
    let mut catalogs = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            catalogs.extend(load_catalog_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_catalog(&path) {
                Ok(catalog) => catalogs.push(catalog),
                Err(e) => {
                    tracing::warn!("skipping {}: {:#}", path.display(), e);
                }
            }
        }
    }

    Ok(catalogs)
}

/// A warning from catalog validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The entry the warning is about, e.g. `question 3` or `resource 7`.
    pub entry: Option<String>,
    /// Warning message.
    pub message: String,
}

impl ValidationWarning {
    fn new(entry: String, message: impl Into<String>) -> Self {
        Self {
            entry: Some(entry),
            message: message.into(),
        }
    }
}

/// Validate a catalog for common issues.
pub fn validate_catalog(catalog: &Catalog) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    let mut seen = HashSet::new();
    for q in &catalog.questions {
        let entry = format!("question {}", q.id);
        if !seen.insert(q.id) {
            warnings.push(ValidationWarning::new(entry.clone(), "duplicate question ID"));
        }
        if q.text.trim().is_empty() {
            warnings.push(ValidationWarning::new(entry.clone(), "question text is empty"));
        }
        if q.category.trim().is_empty() {
            warnings.push(ValidationWarning::new(entry.clone(), "category is empty"));
        }
        if q.options.len() != OPTIONS_PER_QUESTION {
            warnings.push(ValidationWarning::new(
                entry,
                format!(
                    "expected {OPTIONS_PER_QUESTION} options, found {}",
                    q.options.len()
                ),
            ));
        }
    }

    let mut seen = HashSet::new();
    for r in &catalog.resources {
        let entry = format!("resource {}", r.id);
        if !seen.insert(r.id.as_str()) {
            warnings.push(ValidationWarning::new(entry.clone(), "duplicate resource ID"));
        }
        if r.title.trim().is_empty() {
            warnings.push(ValidationWarning::new(entry.clone(), "title is empty"));
        }
        if !(0.0..=5.0).contains(&r.rating) {
            warnings.push(ValidationWarning::new(
                entry,
                format!("rating {} is outside 0.0-5.0", r.rating),
            ));
        }
    }

    let mut seen = HashSet::new();
    for c in &catalog.careers {
        let entry = format!("career {}", c.id);
        if !seen.insert(c.id.as_str()) {
            warnings.push(ValidationWarning::new(entry.clone(), "duplicate career ID"));
        }
        if c.match_percentage > 100 {
            warnings.push(ValidationWarning::new(
                entry.clone(),
                format!("match percentage {} exceeds 100", c.match_percentage),
            ));
        }
        if c.skills.is_empty() {
            warnings.push(ValidationWarning::new(entry, "career lists no skills"));
        }
    }

    if catalog.questions.is_empty() {
        warnings.push(ValidationWarning {
            entry: None,
            message: "catalog has no quiz questions".into(),
        });
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const MINIMAL_TOML: &str = r#"
[catalog]
id = "mini"
name = "Mini"

[[questions]]
id = 1
text = "Do you like puzzles?"
options = ["No", "A little", "Somewhat", "Yes", "Very much"]
category = "technical"

[[resources]]
id = "r1"
title = "Rust in Action"
type = "Book"
level = "advanced"
tags = ["Rust"]
"#;

    #[test]
    fn parse_minimal_catalog() {
        let catalog = parse_catalog_str(MINIMAL_TOML, &PathBuf::from("mini.toml")).unwrap();
        assert_eq!(catalog.id, "mini");
        assert_eq!(catalog.questions.len(), 1);
        assert_eq!(catalog.resources[0].level, Level::Advanced);
        assert_eq!(catalog.resources[0].kind, "Book");
        assert!(catalog.resources[0].description.is_empty());
        assert!(catalog.careers.is_empty());
        assert!(validate_catalog(&catalog).is_empty());
    }

    #[test]
    fn builtin_catalog_matches_shipped_data() {
        let catalog = builtin_catalog().unwrap();
        assert_eq!(catalog.questions.len(), 5);
        assert_eq!(catalog.resources.len(), 8);
        assert_eq!(catalog.careers.len(), 6);
        assert_eq!(
            catalog.categories(),
            vec![
                "technical",
                "collaboration",
                "analytical",
                "creativity",
                "communication"
            ]
        );
        assert!(validate_catalog(&catalog).is_empty());
    }

    #[test]
    fn unknown_level_is_an_error() {
        let toml = r#"
[catalog]
id = "bad"
name = "Bad"

[[resources]]
id = "r1"
title = "Something"
type = "Course"
level = "Expert"
"#;
        let err = parse_catalog_str(toml, &PathBuf::from("bad.toml")).unwrap_err();
        assert!(err.to_string().contains("unknown level"));
    }

    #[test]
    fn parse_malformed_toml() {
        let bad = "this is not [valid toml }{";
        assert!(parse_catalog_str(bad, &PathBuf::from("bad.toml")).is_err());
    }

    #[test]
    fn validate_reports_problems() {
        let toml = r#"
[catalog]
id = "issues"
name = "Issues"

[[questions]]
id = 1
text = "First"
options = ["a", "b", "c"]
category = "technical"

[[questions]]
id = 1
text = " "
options = ["a", "b", "c", "d", "e"]
category = ""

[[resources]]
id = "r1"
title = "One"
type = "Course"
level = "Beginner"
rating = 7.5

[[resources]]
id = "r1"
title = ""
type = "Course"
level = "Beginner"

[[careers]]
id = "c1"
title = "Wizard"
match_percentage = 120
"#;
        let catalog = parse_catalog_str(toml, &PathBuf::from("issues.toml")).unwrap();
        let warnings = validate_catalog(&catalog);
        let messages: Vec<&str> = warnings.iter().map(|w| w.message.as_str()).collect();

        assert!(messages.contains(&"expected 5 options, found 3"));
        assert!(messages.contains(&"duplicate question ID"));
        assert!(messages.contains(&"question text is empty"));
        assert!(messages.contains(&"category is empty"));
        assert!(messages.contains(&"rating 7.5 is outside 0.0-5.0"));
        assert!(messages.contains(&"duplicate resource ID"));
        assert!(messages.contains(&"title is empty"));
        assert!(messages.contains(&"match percentage 120 exceeds 100"));
        assert!(messages.contains(&"career lists no skills"));
    }

    #[test]
    fn validate_empty_quiz() {
        let toml = "[catalog]\nid = \"empty\"\nname = \"Empty\"\n";
        let catalog = parse_catalog_str(toml, &PathBuf::from("empty.toml")).unwrap();
        let warnings = validate_catalog(&catalog);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].entry.is_none());
    }

    #[test]
    fn load_directory_skips_broken_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("mini.toml"), MINIMAL_TOML).unwrap();
        std::fs::write(dir.path().join("broken.toml"), "not [toml").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let catalogs = load_catalog_directory(dir.path()).unwrap();
        assert_eq!(catalogs.len(), 1);
        assert_eq!(catalogs[0].id, "mini");
    }

    #[test]
    fn load_catalog_defaults_to_builtin() {
        let catalog = load_catalog(None).unwrap();
        assert_eq!(catalog.id, "skillmatch-default");
    }
}
