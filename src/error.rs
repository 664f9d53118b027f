//! Error types for configuration, page fetching, and CSV export.
//!
//! Only [`TransportError`] is recoverable, and only while fetching a single
//! article: the fetcher turns it into a skipped link. Everything wrapped by
//! [`ScrapeError`] ends the run.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Problems with the site configuration file or the values inside it.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("unknown news site `{0}`")]
    UnknownSite(String),

    #[error("news site `{site}` has an invalid url `{url}`: {source}")]
    InvalidUrl {
        site: String,
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("news site `{site}` has an invalid `{query}` selector: {reason}")]
    InvalidSelector {
        site: String,
        query: &'static str,
        reason: String,
    },

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

/// A single page could not be retrieved.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} responded with HTTP {status}")]
    Status { url: String, status: u16 },
}

/// Writing the CSV file failed.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to prepare output directory {path}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Fatal errors that abort a scrape run.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to fetch homepage for `{site}`: {source}")]
    Homepage {
        site: String,
        #[source]
        source: TransportError,
    },

    #[error(transparent)]
    Export(#[from] ExportError),
}
