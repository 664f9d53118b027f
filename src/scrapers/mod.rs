//! Scraping a configured news site into a list of valid articles.
//!
//! A run has two phases:
//!
//! 1. **Indexing**: fetch the site's homepage and list its raw article links
//! 2. **Fetching**: resolve each link against the host, fetch the article,
//!    and keep it only if it has a body
//!
//! Links are fetched one at a time, in homepage order. A link that fails to
//! fetch or yields an empty article is logged and skipped without failing the
//! run; only configuration, homepage, and export errors are fatal.
//!
//! # Submodules
//!
//! - [`fetch`]: the per-link Article Fetcher and its [`fetch::FetchOutcome`]
//! - [`news_site`]: the orchestrator that drives a whole run

pub mod fetch;
pub mod news_site;
