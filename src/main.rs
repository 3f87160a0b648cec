//! Command-line interface for the starboard binary.
//!
//! The CLI collects live metadata for the curated catalog, augments the final
//! section with the most-starred repositories for the configured language,
//! and writes the rendered Markdown document to standard output. Diagnostics
//! go to standard error so the document stream stays clean.

use std::{
    io::{self, IsTerminal},
    path::PathBuf,
    process,
};

use clap::Parser;
use starboard::{
    CatalogConfig, Document, Error, GithubHost, collect_sections, load_catalog, update_stamp,
    write_document,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line interface for rendering the curated repository list.
#[derive(Debug, Parser,)]
#[command(name = "starboard", version, about = "Render a curated GitHub repository catalog")]
struct Cli
{
    /// GitHub personal access token used to authenticate all API calls.
    #[arg(long = "token", env = "GH_TOKEN", hide_env_values = true)]
    token: String,

    /// Path to a catalog file overriding the embedded catalog.
    #[arg(long = "config", value_name = "PATH")]
    config: Option<PathBuf,>,

    /// Language for the popular-repositories search query.
    #[arg(long = "language", value_name = "LANG")]
    language: Option<String,>,
}

/// Entry point that reports errors and sets the appropriate exit status.
#[tokio::main]
async fn main()
{
    init_diagnostics();

    if let Err(error,) = run().await {
        eprintln!("{}", error.to_display_string());
        process::exit(1,);
    }
}

/// Executes the pipeline using parsed arguments.
///
/// # Errors
///
/// Propagates errors originating from catalog loading, metadata collection,
/// and document rendering. Any error terminates the run before the document
/// is written.
async fn run() -> Result<(), Error,>
{
    let cli = Cli::parse();

    info!("generating README");

    let mut catalog = match cli.config.as_deref() {
        Some(path,) => load_catalog(path,)?,
        None => CatalogConfig::embedded()?,
    };
    if let Some(language,) = cli.language {
        catalog.language = language;
    }

    let host = GithubHost::from_token(&cli.token,)?;
    let sections = collect_sections(&host, &catalog,).await?;
    let document = Document::new(&catalog, update_stamp(), sections,);

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_document(&mut handle, &document,)?;

    info!("done");

    Ok((),)
}

/// Installs the stderr diagnostics subscriber.
///
/// `RUST_LOG` controls verbosity; progress lines default to `info`. ANSI
/// styling is disabled when stderr is not a terminal.
fn init_diagnostics()
{
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info",),),
        )
        .with_writer(io::stderr,)
        .with_ansi(io::stderr().is_terminal(),)
        .init();
}
