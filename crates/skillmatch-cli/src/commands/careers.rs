//! The `skillmatch careers` command.

use std::path::PathBuf;

use anyhow::Result;
use serde::Serialize;

use skillmatch_core::careers::{recommend, MatchTier};
use skillmatch_core::model::Career;

use super::{open_session, print_careers, OutputFormat};

#[derive(Serialize)]
struct RankedCareer<'a> {
    rank: usize,
    tier: MatchTier,
    #[serde(flatten)]
    career: &'a Career,
}

pub fn execute(
    config_path: Option<PathBuf>,
    catalog: Option<PathBuf>,
    top: Option<usize>,
    format: OutputFormat,
) -> Result<()> {
    let session = open_session(config_path, catalog)?;
    let limit = top.unwrap_or(session.config.recommendation_limit);
    anyhow::ensure!(limit >= 1, "--top must be at least 1");

    let ranked = recommend(&session.catalog.careers, limit);

    match format {
        OutputFormat::Json => {
            let out: Vec<RankedCareer> = ranked
                .iter()
                .enumerate()
                .map(|(i, c)| RankedCareer {
                    rank: i + 1,
                    tier: MatchTier::for_percentage(c.match_percentage),
                    career: *c,
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        OutputFormat::Text => {
            if ranked.is_empty() {
                println!("No careers in catalog.");
            } else {
                print_careers(&ranked);
            }
        }
    }

    Ok(())
}
