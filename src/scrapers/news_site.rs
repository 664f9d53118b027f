//! Driving a full scrape of one news site.

use crate::config::Config;
use crate::error::ScrapeError;
use crate::models::Article;
use crate::outputs::articles_csv::save_articles;
use crate::pages::PageSource;
use crate::scrapers::fetch::{FetchOutcome, fetch_article};
use crate::utils::truncate_for_log;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// What a scrape collected before export.
#[derive(Debug, Default)]
pub struct ScrapeRun {
    /// Valid articles, in homepage link order.
    pub articles: Vec<Article>,
    /// Number of links the homepage yielded.
    pub links: usize,
    /// Links that produced no article.
    pub skipped: usize,
}

/// Fetch the homepage of `news_site` and every article it links to.
///
/// Links are fetched sequentially and a failed link never stops the loop.
/// Each kept article's title is written as one line to `progress`.
///
/// # Errors
///
/// Fails if `news_site` is not configured or its homepage cannot be fetched.
#[instrument(level = "info", skip(source, config, progress))]
pub async fn collect_articles<S: PageSource>(
    source: &S,
    config: &Config,
    news_site: &str,
    progress: &mut dyn Write,
) -> Result<ScrapeRun, ScrapeError> {
    let host = config.host(news_site)?;
    info!(%host, "Beginning scraper");

    let homepage = source
        .homepage(host)
        .await
        .map_err(|source| ScrapeError::Homepage {
            site: news_site.to_string(),
            source,
        })?;

    let mut run = ScrapeRun {
        links: homepage.article_links.len(),
        ..ScrapeRun::default()
    };

    for link in &homepage.article_links {
        match fetch_article(source, news_site, host, link).await {
            FetchOutcome::Fetched(article) => {
                info!(url = %article.url, "Article fetched");
                debug!(body = %truncate_for_log(&article.body, 120), "Article body");
                if let Err(e) = writeln!(progress, "{}", article.title) {
                    warn!(error = %e, "Failed to write progress line");
                }
                run.articles.push(article);
            }
            FetchOutcome::Skipped(reason) => {
                debug!(%link, %reason, "Skipped link");
                run.skipped += 1;
            }
        }
    }

    info!(
        links = run.links,
        fetched = run.articles.len(),
        skipped = run.skipped,
        "Finished fetching articles"
    );
    Ok(run)
}

/// Scrape `news_site` and export its valid articles to `output_dir`.
///
/// Export runs even when no article survived, producing a header-only file.
/// Returns the path of the written CSV.
pub async fn scrape<S: PageSource>(
    source: &S,
    config: &Config,
    news_site: &str,
    output_dir: &Path,
    progress: &mut dyn Write,
) -> Result<PathBuf, ScrapeError> {
    let run = collect_articles(source, config, news_site, progress).await?;
    let path = save_articles(news_site, &run.articles, output_dir).await?;
    Ok(path)
}
