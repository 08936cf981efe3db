//! CLI for post sentiment analytics
//!
//! Usage:
//! ```bash
//! cargo run -- --help
//! cargo run -- analyze --database posts.db
//! cargo run -- analyze --records posts.json --format json --top-k 20
//! cargo run -- resources --config analytics.toml
//! ```

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use post_sentiment::{
    utils::{load_config, setup_logging},
    AppConfig, ConsoleSink, JsonFileSource, JsonSink, Language, Pipeline, RecordSource,
    ResourceCache, SqliteSource, VisualizationSink,
};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "post-sentiment")]
#[command(version)]
#[command(about = "Sentiment analytics for batches of social-media posts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (.toml or .json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level, overrides the configuration file
    #[arg(short, long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the analytics pass and print the report
    Analyze {
        /// SQLite database holding the posts
        #[arg(long, conflicts_with = "records")]
        database: Option<PathBuf>,

        /// JSON file with an array of {text, timestamp, language} objects
        #[arg(long)]
        records: Option<PathBuf>,

        /// Query selecting (text, timestamp[, language]) rows
        #[arg(long)]
        query: Option<String>,

        /// Number of most common words to report
        #[arg(short = 'k', long)]
        top_k: Option<usize>,

        /// Objectivity threshold on compound magnitude
        #[arg(short, long)]
        threshold: Option<f64>,

        /// Language of posts that do not declare one
        #[arg(long)]
        language: Option<Language>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Run the terminal stages concurrently
        #[arg(long)]
        parallel: bool,
    },

    /// Load the language resources and report what is available
    Resources,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => AppConfig::default(),
    };

    let level = cli.log_level.clone().unwrap_or_else(|| config.logging.level.clone());
    setup_logging(&level);

    match cli.command {
        Commands::Analyze {
            database,
            records,
            query,
            top_k,
            threshold,
            language,
            format,
            parallel,
        } => {
            if database.is_some() {
                config.source.database_path = database;
                config.source.records_path = None;
            }
            if records.is_some() {
                config.source.records_path = records;
                config.source.database_path = None;
            }
            if let Some(query) = query {
                config.source.query = query;
            }
            if let Some(k) = top_k {
                config.analysis.top_k = k;
            }
            if let Some(t) = threshold {
                config.analysis.objectivity_threshold = t;
            }
            if let Some(lang) = language {
                config.analysis.default_language = lang;
            }
            config.analysis.parallel |= parallel;
            config.validate()?;

            run_analyze(&config, format)?;
        }
        Commands::Resources => {
            run_resources(&config)?;
        }
    }

    Ok(())
}

fn run_analyze(config: &AppConfig, format: OutputFormat) -> Result<()> {
    let mut cache = ResourceCache::new(config.resources.clone());
    let resources = cache
        .prepare(&[config.analysis.default_language])
        .context("resource setup failed")?;

    let pipeline = Pipeline::new(config.analysis.clone(), &resources)?;

    let mut source: Box<dyn RecordSource> = match (&config.source.database_path, &config.source.records_path) {
        (Some(db), _) => Box::new(SqliteSource::new(db).with_query(config.source.query.clone())),
        (None, Some(path)) => Box::new(JsonFileSource::new(path)),
        (None, None) => bail!("no record source: pass --database or --records, or set one in the config"),
    };

    let report = pipeline.run(source.as_mut())?;
    info!(records = report.record_count(), "rendering report");

    match format {
        OutputFormat::Text => ConsoleSink::stdout().render(&report)?,
        OutputFormat::Json => JsonSink::new(std::io::stdout()).render(&report)?,
    }

    Ok(())
}

fn run_resources(config: &AppConfig) -> Result<()> {
    let mut cache = ResourceCache::new(config.resources.clone());
    let resources = cache
        .prepare(&[config.analysis.default_language])
        .context("resource setup failed")?;

    println!("Lexicon entries: {}", resources.lexicon.len());
    for language in resources.languages() {
        let count = resources.stopwords.get(&language).map(|s| s.len()).unwrap_or(0);
        println!("Stopwords ({}): {}", language, count);
    }

    Ok(())
}
