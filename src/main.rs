//! City Search - Main entrypoint.
//!
//! Loads configuration, reads the record file, builds the search index and
//! then answers queries from the console until input closes.

use std::path::{Path, PathBuf};
use std::process;

use city_search_lib::config::{ConfigLoader, LogConfig, SearchConfig, Validate, ENV_PREFIX};
use city_search_lib::error::{
    ErrorContext, ErrorReporter, SearchError, SearchResult, TracingErrorReporter,
};
use city_search_lib::records::load_records;
use city_search_lib::search::{PrefixSearch, SearchStrategy};
use city_search_lib::shell;
use city_search_lib::timing::timed;
use clap::{Parser, Subcommand};
use tracing::info;

/// Command line arguments for City Search.
#[derive(Parser, Debug)]
#[clap(name = "City Search", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Record file, one city per line (overrides `records.path`)
    #[clap(short, long, value_parser)]
    records: Option<PathBuf>,

    /// Maximum matches per query (overrides `query.limit`)
    #[clap(short, long)]
    limit: Option<usize>,

    /// Search implementation (overrides `query.strategy`)
    #[clap(short, long, value_enum)]
    strategy: Option<SearchStrategy>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Answer queries read from standard input, one per line
    Repl,

    /// Answer a single query and exit
    Query {
        /// The prefix to search for
        text: String,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// Logs go to stderr so stdout only carries search results.
fn init_logging(log: &LogConfig) -> SearchResult<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_line_number(log.source_location)
        .with_file(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| SearchError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Applies command line overrides on top of the loaded configuration.
fn apply_overrides(mut config: SearchConfig, args: &Args) -> SearchResult<SearchConfig> {
    if let Some(records) = &args.records {
        config.records.path = records.clone();
    }
    if let Some(limit) = args.limit {
        config.query.limit = limit;
    }
    if let Some(strategy) = args.strategy {
        config.query.strategy = strategy;
    }
    config.validate()?;
    Ok(config)
}

/// Reads the records and builds the configured searcher.
fn build_search(config: &SearchConfig) -> SearchResult<Box<dyn PrefixSearch>> {
    let records = timed("Reading records file", || load_records(&config.records.path))?;
    info!(count = records.len(), path = ?config.records.path, "Records loaded");

    let strategy = config.query.strategy;
    Ok(timed("Building search index", || strategy.build(records)))
}

fn run(args: Args, config: SearchConfig) -> SearchResult<()> {
    match args.command.as_ref().unwrap_or(&Command::Repl) {
        Command::Repl => {
            let search = build_search(&config)?;
            info!(strategy = search.name(), limit = config.query.limit, "Ready for queries");

            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            shell::run(search.as_ref(), config.query.limit, stdin.lock(), stdout.lock())?;
            Ok(())
        }
        Command::Query { text } => {
            let search = build_search(&config)?;
            for city in shell::answer(search.as_ref(), text, config.query.limit) {
                println!("{city}");
            }
            Ok(())
        }
        Command::Validate => {
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let default_config = SearchConfig::default();

            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| SearchError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(output, toml)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}

/// Main entry point for the application.
fn main() {
    let args = <Args as clap::Parser>::parse();
    let reporter = TracingErrorReporter;

    let loaded = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX).load();

    // Logging needs the configuration, so a bad configuration is logged with defaults
    let log_config = loaded
        .as_ref()
        .map(|config| config.log.clone())
        .unwrap_or_default();
    if let Err(e) = init_logging(&log_config) {
        eprintln!("{e}");
        process::exit(1);
    }

    let config = match loaded
        .map_err(SearchError::from)
        .and_then(|config| apply_overrides(config, &args))
    {
        Ok(config) => config,
        Err(e) => {
            let context = ErrorContext::new(e, "config")
                .with_details(config_details(args.config.as_deref()));
            reporter.report(&context);
            process::exit(1);
        }
    };

    let details = run_details(&config);
    if let Err(e) = run(args, config) {
        reporter.report(&ErrorContext::new(e, "search").with_details(details));
        process::exit(1);
    }
}

/// Describes where the configuration came from, for error reports.
fn config_details(config_path: Option<&Path>) -> String {
    match config_path {
        Some(path) => format!("config file: {}, env prefix: {ENV_PREFIX}", path.display()),
        None => format!("config file: none (defaults), env prefix: {ENV_PREFIX}"),
    }
}

/// Describes the search setup, for error reports.
fn run_details(config: &SearchConfig) -> String {
    format!(
        "records: {}, strategy: {:?}, limit: {}",
        config.records.path.display(),
        config.query.strategy,
        config.query.limit
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_details() {
        assert_eq!(
            config_details(Some(Path::new("conf/search.toml"))),
            "config file: conf/search.toml, env prefix: CITY_SEARCH"
        );
        assert!(config_details(None).contains("defaults"));
    }

    #[test]
    fn test_run_details_in_error_report() {
        let mut config = SearchConfig::default();
        config.records.path = PathBuf::from("data/towns.txt");
        config.query.strategy = SearchStrategy::Scan;

        let context = ErrorContext::new(SearchError::Custom("boom".to_string()), "search")
            .with_details(run_details(&config));
        let report = context.to_string();

        assert!(report.contains("Error in search: boom"));
        assert!(report.contains("records: data/towns.txt, strategy: Scan, limit: 10"));
    }
}
