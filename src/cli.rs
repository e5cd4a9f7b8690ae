use clap::Parser;
use std::path::PathBuf;

use catalog_keywords::application::dto::OutputFormat;
use catalog_keywords::keyword_aggregation::domain::CategorySlug;

/// Aggregate keyword usage across a component catalog
#[derive(Parser, Debug)]
#[command(name = "catalog-keywords")]
#[command(version)]
#[command(
    about = "Count how many visible catalog components use each keyword",
    long_about = None
)]
pub struct Args {
    /// Path to the catalog JSON export [default: catalog.json]
    #[arg(short, long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Only count components of this category
    #[arg(short = 's', long, value_name = "SLUG", conflicts_with = "grouped")]
    pub category: Option<CategorySlug>,

    /// Produce one keyword list per category
    #[arg(short, long)]
    pub grouped: bool,

    /// Output format: json or markdown [default: json]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Path to a config file (defaults to ./catalog-keywords.config.yml when present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}
