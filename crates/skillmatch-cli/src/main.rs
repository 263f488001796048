//! skillmatch command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

use commands::portfolio::PortfolioAction;
use commands::{CompareFormat, OutputFormat};

#[derive(Parser)]
#[command(
    name = "skillmatch",
    version,
    about = "Skill assessment and learning resource browser"
)]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Take the skill quiz interactively
    Quiz {
        /// Catalog TOML file (defaults to the built-in catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Write the assessment report to this file
        #[arg(long)]
        output: Option<PathBuf>,

        /// Write the assessment report into the configured output directory
        #[arg(long)]
        save: bool,
    },

    /// Score a set of answers without prompting
    Score {
        /// Answers, positional ("4,3,2") or indexed ("0:4,2:3"); "-" leaves a question unanswered
        #[arg(long)]
        answers: String,

        /// Catalog TOML file (defaults to the built-in catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Write the assessment report to this file
        #[arg(long)]
        output: Option<PathBuf>,

        /// Write the assessment report into the configured output directory
        #[arg(long)]
        save: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Browse and filter learning resources
    Resources {
        /// Case-insensitive search over title, description, and tags
        #[arg(long)]
        search: Option<String>,

        /// Resource type to include (repeatable)
        #[arg(long = "type")]
        types: Vec<String>,

        /// Level to include: beginner, intermediate, advanced (repeatable)
        #[arg(long = "level")]
        levels: Vec<String>,

        /// Tag to match, partial and case-insensitive (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,

        /// Pre-filter by a career's skills
        #[arg(long)]
        career: Option<String>,

        /// Show the available filter options
        #[arg(long)]
        facets: bool,

        /// Catalog TOML file (defaults to the built-in catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List recommended career paths
    Careers {
        /// Number of careers to show
        #[arg(long)]
        top: Option<usize>,

        /// Catalog TOML file (defaults to the built-in catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Validate catalog TOML files
    Validate {
        /// Catalog file or directory (defaults to the built-in catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Compare two assessment reports
    Compare {
        /// Baseline report JSON
        #[arg(long)]
        baseline: PathBuf,

        /// Current report JSON
        #[arg(long)]
        current: PathBuf,

        /// Points a category must move to count as changed
        #[arg(long, default_value = "5")]
        threshold: u8,

        /// Exit code 1 if any category declined
        #[arg(long)]
        fail_on_regression: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = CompareFormat::Text)]
        format: CompareFormat,
    },

    /// Build and preview a portfolio
    Portfolio {
        /// Portfolio JSON file
        #[arg(long, default_value = "portfolio.json")]
        file: PathBuf,

        #[command(subcommand)]
        action: PortfolioAction,
    },

    /// Create starter config and catalog
    Init,
}

fn main() {
    let mut filter = tracing_subscriber::EnvFilter::from_default_env();
    if let Ok(directive) = "skillmatch=info".parse() {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config;

    let result = match cli.command {
        Commands::Quiz {
            catalog,
            output,
            save,
        } => commands::quiz::execute(config, catalog, output, save),
        Commands::Score {
            answers,
            catalog,
            output,
            save,
            format,
        } => commands::score::execute(config, catalog, answers, output, save, format),
        Commands::Resources {
            search,
            types,
            levels,
            tags,
            career,
            facets,
            catalog,
            format,
        } => commands::resources::execute(
            config,
            catalog,
            commands::resources::ResourceQuery {
                search,
                types,
                levels,
                tags,
                career,
            },
            facets,
            format,
        ),
        Commands::Careers {
            top,
            catalog,
            format,
        } => commands::careers::execute(config, catalog, top, format),
        Commands::Validate { catalog } => commands::validate::execute(catalog),
        Commands::Compare {
            baseline,
            current,
            threshold,
            fail_on_regression,
            format,
        } => commands::compare::execute(baseline, current, threshold, fail_on_regression, format),
        Commands::Portfolio { file, action } => commands::portfolio::execute(file, action),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
