//! Multi-facet resource filtering.
//!
//! A [`FilterState`] holds the active search term and facet selections. The
//! filter is conjunctive across facets, an empty facet imposes no
//! constraint, and the result preserves catalog order.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::model::{Career, Level, Resource};

/// Default number of tags offered in the "popular tags" facet.
pub const DEFAULT_POPULAR_TAG_LIMIT: usize = 12;

/// Active search term and facet selections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    #[serde(default)]
    pub search_term: String,
    #[serde(default)]
    pub types: BTreeSet<String>,
    #[serde(default)]
    pub levels: BTreeSet<Level>,
    #[serde(default)]
    pub tags: BTreeSet<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter state that pre-selects a career's skills as tag filters.
    pub fn for_career(career: &Career) -> Self {
        Self {
            tags: career.skills.iter().map(|s| s.to_lowercase()).collect(),
            ..Self::default()
        }
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn clear_search(&mut self) {
        self.search_term.clear();
    }

    pub fn toggle_type(&mut self, kind: &str) {
        toggle(&mut self.types, kind.to_string());
    }

    pub fn toggle_level(&mut self, level: Level) {
        toggle(&mut self.levels, level);
    }

    pub fn toggle_tag(&mut self, tag: &str) {
        toggle(&mut self.tags, tag.to_string());
    }

    /// Reset every facet and the search term.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn has_active_filters(&self) -> bool {
        !self.search_term.is_empty()
            || !self.types.is_empty()
            || !self.levels.is_empty()
            || !self.tags.is_empty()
    }

    /// Labels for the active-filters strip: search first, then types,
    /// levels, and tags.
    pub fn active_chips(&self) -> Vec<String> {
        let mut chips = Vec::new();
        if !self.search_term.is_empty() {
            chips.push(format!("Search: {}", self.search_term));
        }
        chips.extend(self.types.iter().cloned());
        chips.extend(self.levels.iter().map(Level::to_string));
        chips.extend(self.tags.iter().cloned());
        chips
    }

    /// Remove one chip label. Types are checked first, then levels; anything
    /// else is treated as a tag.
    pub fn remove_chip(&mut self, label: &str) {
        if self.types.contains(label) {
            self.types.remove(label);
            return;
        }
        if let Ok(level) = label.parse::<Level>() {
            if self.levels.remove(&level) {
                return;
            }
        }
        self.tags.remove(label);
    }

    /// Whether a single resource passes every active criterion.
    pub fn matches(&self, resource: &Resource) -> bool {
        self.matches_search(resource)
            && self.matches_type(resource)
            && self.matches_level(resource)
            && self.matches_tags(resource)
    }

    fn matches_search(&self, resource: &Resource) -> bool {
        if self.search_term.is_empty() {
            return true;
        }
        let term = self.search_term.to_lowercase();
        resource.title.to_lowercase().contains(&term)
            || resource.description.to_lowercase().contains(&term)
            || resource.has_tag_containing(&term)
    }

    fn matches_type(&self, resource: &Resource) -> bool {
        self.types.is_empty() || self.types.contains(&resource.kind)
    }

    fn matches_level(&self, resource: &Resource) -> bool {
        self.levels.is_empty() || self.levels.contains(&resource.level)
    }

    // Partial containment: "python" matches a resource tagged "Python 3".
    fn matches_tags(&self, resource: &Resource) -> bool {
        self.tags.is_empty()
            || self
                .tags
                .iter()
                .any(|tag| resource.has_tag_containing(&tag.to_lowercase()))
    }
}

fn toggle<T: Ord>(set: &mut BTreeSet<T>, value: T) {
    if !set.remove(&value) {
        set.insert(value);
    }
}

/// Return the resources that pass `filter`, in catalog order.
pub fn filter_resources(catalog: &[Resource], filter: &FilterState) -> Vec<Resource> {
    let filtered: Vec<Resource> = catalog
        .iter()
        .filter(|r| filter.matches(r))
        .cloned()
        .collect();

    tracing::debug!(
        total = catalog.len(),
        matched = filtered.len(),
        "filtered resources"
    );
    filtered
}

/// Filter options derived from a resource catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetOptions {
    /// Distinct resource types in first-appearance order.
    pub types: Vec<String>,
    /// Distinct levels in first-appearance order.
    pub levels: Vec<Level>,
    /// Every distinct tag, sorted.
    pub tags: Vec<String>,
    /// The leading sorted tags offered as quick filters.
    pub popular_tags: Vec<String>,
}

impl FacetOptions {
    pub fn from_resources(resources: &[Resource], popular_tag_limit: usize) -> Self {
        let mut types: Vec<String> = Vec::new();
        let mut levels: Vec<Level> = Vec::new();
        let mut tags: BTreeSet<&str> = BTreeSet::new();

        for r in resources {
            if !types.contains(&r.kind) {
                types.push(r.kind.clone());
            }
            if !levels.contains(&r.level) {
                levels.push(r.level);
            }
            tags.extend(r.tags.iter().map(String::as_str));
        }

        let tags: Vec<String> = tags.into_iter().map(str::to_string).collect();
        let popular_tags = tags.iter().take(popular_tag_limit).cloned().collect();

        Self {
            types,
            levels,
            tags,
            popular_tags,
        }
    }
}
