//! skillmatch configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::careers::DEFAULT_RECOMMENDATION_LIMIT;
use crate::filter::DEFAULT_POPULAR_TAG_LIMIT;
use crate::scoring::AnswerPolicy;

/// Top-level skillmatch configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillmatchConfig {
    /// Catalog file to use instead of the built-in one.
    #[serde(default)]
    pub catalog: Option<PathBuf>,
    /// What to do with quiz answers outside the option range.
    #[serde(default)]
    pub answer_policy: AnswerPolicy,
    /// How many tags the popular-tags facet offers.
    #[serde(default = "default_popular_tag_limit")]
    pub popular_tag_limit: usize,
    /// How many careers to recommend.
    #[serde(default = "default_recommendation_limit")]
    pub recommendation_limit: usize,
    /// Where assessment reports are written by default.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_popular_tag_limit() -> usize {
    DEFAULT_POPULAR_TAG_LIMIT
}
fn default_recommendation_limit() -> usize {
    DEFAULT_RECOMMENDATION_LIMIT
}
fn default_output_dir() -> PathBuf {
    PathBuf::from("./skillmatch-results")
}

impl Default for SkillmatchConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            answer_policy: AnswerPolicy::default(),
            popular_tag_limit: default_popular_tag_limit(),
            recommendation_limit: default_recommendation_limit(),
            output_dir: default_output_dir(),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
///
/// Substituted values are not scanned again.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(end) = rest[start..].find('}') else {
            break;
        };
        result.push_str(&rest[..start]);
        let var_name = &rest[start + 2..start + end];
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + end + 1..];
    }
    result.push_str(rest);
    result
}

fn resolve_path(path: &Path) -> PathBuf {
    PathBuf::from(resolve_env_vars(&path.to_string_lossy()))
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without a path:
/// 1. `skillmatch.toml` in the current directory
/// 2. `~/.config/skillmatch/config.toml`
///
/// Environment variable overrides: `SKILLMATCH_CATALOG`, `SKILLMATCH_ANSWER_POLICY`.
pub fn load_config_from(path: Option<&Path>) -> Result<SkillmatchConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("skillmatch.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            parse_config_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => SkillmatchConfig::default(),
    };

    if let Ok(catalog) = std::env::var("SKILLMATCH_CATALOG") {
        if !catalog.trim().is_empty() {
            config.catalog = Some(PathBuf::from(catalog));
        }
    }

    if let Ok(policy) = std::env::var("SKILLMATCH_ANSWER_POLICY") {
        config.answer_policy = policy
            .parse()
            .map_err(|e: String| anyhow::anyhow!("SKILLMATCH_ANSWER_POLICY: {e}"))?;
    }

    config.catalog = config.catalog.as_deref().map(resolve_path);
    config.output_dir = resolve_path(&config.output_dir);

    Ok(config)
}

/// Parse a configuration document.
pub fn parse_config_str(content: &str) -> Result<SkillmatchConfig> {
    Ok(toml::from_str(content)?)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("skillmatch"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_env_vars_basic() {
        std::env::set_var("_SKILLMATCH_TEST_VAR", "hello");
        assert_eq!(resolve_env_vars("${_SKILLMATCH_TEST_VAR}"), "hello");
        assert_eq!(
            resolve_env_vars("prefix_${_SKILLMATCH_TEST_VAR}_suffix"),
            "prefix_hello_suffix"
        );
        assert_eq!(resolve_env_vars("no_vars"), "no_vars");
        assert_eq!(resolve_env_vars("${unterminated"), "${unterminated");
        std::env::remove_var("_SKILLMATCH_TEST_VAR");
    }

    #[test]
    fn resolve_env_vars_does_not_rescan_values() {
        std::env::set_var("_SKILLMATCH_SELF_REF", "${_SKILLMATCH_SELF_REF}");
        std::env::set_var("_SKILLMATCH_OTHER", "b");
        assert_eq!(
            resolve_env_vars("a/${_SKILLMATCH_SELF_REF}/${_SKILLMATCH_OTHER}"),
            "a/${_SKILLMATCH_SELF_REF}/b"
        );
        assert_eq!(resolve_env_vars("${_SKILLMATCH_UNSET_VAR}x"), "x");
        std::env::remove_var("_SKILLMATCH_SELF_REF");
        std::env::remove_var("_SKILLMATCH_OTHER");
    }

    #[test]
    fn default_config() {
        let config = SkillmatchConfig::default();
        assert_eq!(config.answer_policy, AnswerPolicy::Reject);
        assert_eq!(config.popular_tag_limit, 12);
        assert_eq!(config.recommendation_limit, 6);
        assert!(config.catalog.is_none());
    }

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
catalog = "catalog/catalog.toml"
answer_policy = "clamp"
popular_tag_limit = 5
recommendation_limit = 3
output_dir = "out"
"#;
        let config = parse_config_str(toml_str).unwrap();
        assert_eq!(config.catalog, Some(PathBuf::from("catalog/catalog.toml")));
        assert_eq!(config.answer_policy, AnswerPolicy::Clamp);
        assert_eq!(config.popular_tag_limit, 5);
        assert_eq!(config.recommendation_limit, 3);
        assert_eq!(config.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn parse_empty_config_uses_defaults() {
        assert_eq!(parse_config_str("").unwrap(), SkillmatchConfig::default());
    }

    #[test]
    fn unknown_policy_is_rejected() {
        assert!(parse_config_str("answer_policy = \"ignore\"").is_err());
    }

    #[test]
    fn explicit_path_must_exist() {
        let err = load_config_from(Some(Path::new("/nonexistent/skillmatch.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("skillmatch.toml");
        std::fs::write(&path, "popular_tag_limit = 4\n").unwrap();
        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.popular_tag_limit, 4);
    }
}
