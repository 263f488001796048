//! Skill scoring, resource filtering, and career catalog for skillmatch.
//!
//! This crate defines the catalog data model, the quiz scoring and resource
//! filtering logic, the assessment report types and the portfolio builder
//! that the skillmatch CLI builds on.

pub mod careers;
pub mod config;
pub mod error;
pub mod filter;
pub mod model;
pub mod parser;
pub mod portfolio;
pub mod quiz;
pub mod report;
pub mod scoring;

pub use error::CoreError;
pub use filter::{filter_resources, FilterState};
pub use scoring::{compute_scores, AnswerSet, CategoryScores};
