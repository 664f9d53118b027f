//! Fetching a single article from a raw homepage link.

use crate::error::TransportError;
use crate::links::resolve;
use crate::models::Article;
use crate::pages::PageSource;
use thiserror::Error;
use tracing::{info, instrument, warn};

/// Result of fetching one link.
#[derive(Debug)]
pub enum FetchOutcome {
    Fetched(Article),
    Skipped(SkipReason),
}

/// Why a link produced no article.
#[derive(Debug, Error)]
pub enum SkipReason {
    /// The page could not be retrieved. Not retried.
    #[error("transport error: {0}")]
    Transport(TransportError),
    /// The page was retrieved but had no body text.
    #[error("no body at {url}")]
    EmptyBody { url: String },
}

/// Resolve `link` against `host` and fetch the article behind it.
///
/// Transport failures and empty bodies are logged as warnings and reported as
/// [`FetchOutcome::Skipped`]; this function never fails the run.
#[instrument(level = "info", skip(source, host))]
pub async fn fetch_article<S: PageSource>(
    source: &S,
    news_site: &str,
    host: &str,
    link: &str,
) -> FetchOutcome {
    let url = resolve(host, link);
    info!(%url, "Start fetching article");

    let article = match source.article(&url).await {
        Ok(article) => article,
        Err(e) => {
            warn!(%url, error = %e, "Error while fetching the article");
            return FetchOutcome::Skipped(SkipReason::Transport(e));
        }
    };

    if !article.has_body() {
        warn!(%url, "Invalid article, there is no body");
        return FetchOutcome::Skipped(SkipReason::EmptyBody { url });
    }

    FetchOutcome::Fetched(article)
}
