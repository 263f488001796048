//! The `skillmatch resources` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use skillmatch_core::careers::find_career;
use skillmatch_core::filter::{filter_resources, FacetOptions, FilterState};
use skillmatch_core::model::{Career, Level, Resource};

use super::{open_session, OutputFormat};

/// Filter arguments as given on the command line.
pub struct ResourceQuery {
    pub search: Option<String>,
    pub types: Vec<String>,
    pub levels: Vec<String>,
    pub tags: Vec<String>,
    pub career: Option<String>,
}

impl ResourceQuery {
    fn to_filter_state(&self, careers: &[Career]) -> Result<FilterState> {
        let mut state = match &self.career {
            Some(id) => FilterState::for_career(find_career(careers, id)?),
            None => FilterState::new(),
        };

        match self.search.as_deref() {
            Some(term) if !term.trim().is_empty() => state.set_search(term),
            _ => state.clear_search(),
        }
        for kind in &self.types {
            state.types.insert(kind.clone());
        }
        for level in &self.levels {
            let level: Level = level.parse().map_err(anyhow::Error::msg)?;
            state.levels.insert(level);
        }
        for tag in &self.tags {
            state.tags.insert(tag.clone());
        }

        Ok(state)
    }
}

pub fn execute(
    config_path: Option<PathBuf>,
    catalog: Option<PathBuf>,
    query: ResourceQuery,
    show_facets: bool,
    format: OutputFormat,
) -> Result<()> {
    let session = open_session(config_path, catalog)?;
    let filter = query.to_filter_state(&session.catalog.careers)?;
    let resources = filter_resources(&session.catalog.resources, &filter);

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&resources)?);
        return Ok(());
    }

    if show_facets {
        let facets =
            FacetOptions::from_resources(&session.catalog.resources, session.config.popular_tag_limit);
        print_facets(&facets);
    }

    if filter.has_active_filters() {
        println!("Active filters: {}", filter.active_chips().join(", "));
    }

    if resources.is_empty() {
        println!("No resources found. Try adjusting your filters or search term.");
        return Ok(());
    }

    print_resources(&resources);
    println!(
        "{} of {} resources",
        resources.len(),
        session.catalog.resources.len()
    );

    Ok(())
}

fn print_facets(facets: &FacetOptions) {
    let levels: Vec<String> = facets.levels.iter().map(Level::to_string).collect();
    println!("Resource types: {}", facets.types.join(", "));
    println!("Levels: {}", levels.join(", "));
    println!("Popular tags: {}", facets.popular_tags.join(", "));
    println!();
}

fn print_resources(resources: &[Resource]) {
    let mut table = Table::new();
    table.set_header(vec![
        "ID", "Title", "Provider", "Type", "Level", "Duration", "Rating",
    ]);
    for r in resources {
        table.add_row(vec![
            Cell::new(&r.id),
            Cell::new(&r.title),
            Cell::new(&r.provider),
            Cell::new(&r.kind),
            Cell::new(r.level),
            Cell::new(&r.duration),
            Cell::new(format!("{:.1}", r.rating)),
        ]);
    }
    println!("{table}");
}
