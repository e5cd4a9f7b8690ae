mod cli;
mod config;

use catalog_keywords::adapters::outbound::console::StderrProgressReporter;
use catalog_keywords::adapters::outbound::filesystem::CatalogFileStore;
use catalog_keywords::application::dto::{KeywordRequest, KeywordScope, OutputFormat};
use catalog_keywords::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use catalog_keywords::application::use_cases::AggregateKeywordsUseCase;
use catalog_keywords::keyword_aggregation::domain::{CategorySlug, ReportMetadata};
use catalog_keywords::shared::error::ExitCode;
use catalog_keywords::shared::Result;
use clap::Parser;
use cli::Args;
use config::ConfigFile;
use owo_colors::OwoColorize;
use std::path::PathBuf;
use std::process;

const DEFAULT_CATALOG: &str = "catalog.json";

/// Effective settings after merging CLI arguments over the config file
#[derive(Debug, PartialEq)]
struct Options {
    catalog: PathBuf,
    format: OutputFormat,
    scope: KeywordScope,
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    // clap exits with code 2 on invalid arguments and 0 on --help/--version
    let args = Args::parse();

    if let Err(e) = run(args).await {
        eprintln!("\n{}\n", "❌ An error occurred:".red());
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

async fn run(args: Args) -> Result<()> {
    let config = load_config(&args)?;
    let options = resolve_options(args, config)?;

    // Create adapters (Dependency Injection)
    let store = CatalogFileStore::new(options.catalog);
    let progress_reporter = StderrProgressReporter::new();

    let use_case = AggregateKeywordsUseCase::new(store, progress_reporter);
    let response = use_case
        .execute(KeywordRequest::new(options.scope))
        .await?;

    eprintln!("{}", FormatterFactory::progress_message(options.format));
    let formatter = FormatterFactory::create(options.format);
    let formatted_output = formatter.format(&response, &ReportMetadata::generate())?;

    let presenter = PresenterFactory::create(PresenterType::from_output(options.output));
    presenter.present(&formatted_output)?;

    Ok(())
}

/// Loads the explicit `--config` file, or discovers one in the working directory
fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    match &args.config {
        Some(path) => {
            let config = config::load_config_from_path(path)?;
            eprintln!("📄 Loaded config from: {}", path.display());
            Ok(Some(config))
        }
        None => config::discover_config(&std::env::current_dir()?),
    }
}

/// Merges CLI arguments over config values; CLI always wins
fn resolve_options(args: Args, config: Option<ConfigFile>) -> Result<Options> {
    let config = config.unwrap_or_default();

    let catalog = args
        .catalog
        .or(config.catalog)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG));

    let format = match (args.format, config.format) {
        (Some(format), _) => format,
        (None, Some(format)) => format.parse().map_err(anyhow::Error::msg)?,
        (None, None) => OutputFormat::default(),
    };

    let scope = if let Some(slug) = args.category {
        KeywordScope::Category(slug)
    } else if args.grouped {
        KeywordScope::GroupedByCategory
    } else if let Some(category) = config.category {
        KeywordScope::Category(CategorySlug::new(category.trim())?)
    } else if config.grouped == Some(true) {
        KeywordScope::GroupedByCategory
    } else {
        KeywordScope::All
    };

    Ok(Options {
        catalog,
        format,
        scope,
        output: args.output,
    })
}
