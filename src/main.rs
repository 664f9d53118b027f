//! # news_extract
//!
//! Scrapes article listings and article bodies from a configured news site and
//! exports the articles that have a body to a dated CSV file.
//!
//! ## Usage
//!
//! ```sh
//! news_extract eluniversal -c config.yaml -o ./csv
//! ```
//!
//! ## Architecture
//!
//! 1. **Config**: look up the site's host and selectors in `config.yaml`
//! 2. **Indexing**: fetch the homepage and list its article links
//! 3. **Fetching**: resolve and fetch each link in order, skipping failures
//!    and articles without a body
//! 4. **Output**: write `<site>_<YYYY_MM_DD>_articles.csv`
//!
//! Logs go to stderr; stdout carries one line per fetched article title.

use clap::Parser;
use std::error::Error;
use std::path::Path;
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod config;
mod error;
mod links;
mod models;
mod outputs;
mod pages;
mod scrapers;
mod utils;

use cli::Cli;
use config::Config;
use pages::HttpPageSource;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(std::io::stderr)
        .init();

    let start_time = std::time::Instant::now();

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let config = Config::load(&args.config)?;
    info!(choices = ?config.site_names(), "Configured news sites");
    if let Err(e) = args.validate_news_site(&config.site_names()) {
        e.exit();
    }

    let site = config.site(&args.news_site)?;
    let source = HttpPageSource::new(&args.news_site, site)?;

    let mut stdout = std::io::stdout().lock();
    let result = scrapers::news_site::scrape(
        &source,
        &config,
        &args.news_site,
        Path::new(&args.output_dir),
        &mut stdout,
    )
    .await;

    match result {
        Ok(path) => {
            let elapsed = start_time.elapsed();
            info!(
                path = %path.display(),
                ?elapsed,
                "Execution complete"
            );
            Ok(())
        }
        Err(e) => {
            error!(news_site = %args.news_site, error = %e, "Scrape failed");
            Err(e.into())
        }
    }
}
