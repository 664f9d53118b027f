//! CSV export of a run's articles.
//!
//! One file per run, named after the site and the local date:
//! ```text
//! output_dir/
//! └── eluniversal_2025_05_06_articles.csv
//! ```
//!
//! The header row is always [`Article::CSV_HEADERS`], so a run that kept no
//! articles still produces a header-only file with the same schema.

use crate::error::ExportError;
use crate::models::Article;
use crate::utils::ensure_writable_dir;
use chrono::{Local, NaiveDate};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, instrument};

/// `<news_site>_<YYYY_MM_DD>_articles.csv`
pub fn export_file_name(news_site: &str, date: NaiveDate) -> String {
    format!("{}_{}_articles.csv", news_site, date.format("%Y_%m_%d"))
}

/// Encode `articles` as a CSV document with a header row.
pub fn articles_to_csv(articles: &[Article]) -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(Article::CSV_HEADERS)?;
    for article in articles {
        writer.write_record(article.csv_record())?;
    }
    writer
        .into_inner()
        .map_err(|e| ExportError::Csv(e.into_error().into()))
}

/// Write `articles` to `output_dir`, dated with today's local date.
///
/// Returns the path written.
pub async fn save_articles(
    news_site: &str,
    articles: &[Article],
    output_dir: &Path,
) -> Result<PathBuf, ExportError> {
    write_articles(news_site, articles, output_dir, Local::now().date_naive()).await
}

/// Write `articles` to `output_dir` for an explicit `date`.
///
/// The directory is created if needed. The document is built in memory and
/// written in a single call.
#[instrument(level = "info", skip(articles, output_dir), fields(count = articles.len(), output_dir = %output_dir.display()))]
pub async fn write_articles(
    news_site: &str,
    articles: &[Article],
    output_dir: &Path,
    date: NaiveDate,
) -> Result<PathBuf, ExportError> {
    ensure_writable_dir(output_dir)
        .await
        .map_err(|source| ExportError::OutputDir {
            path: output_dir.to_path_buf(),
            source,
        })?;

    if articles.is_empty() {
        info!("No valid articles; writing header-only CSV");
    }

    let document = articles_to_csv(articles)?;
    let path = output_dir.join(export_file_name(news_site, date));

    fs::write(&path, document)
        .await
        .map_err(|source| ExportError::Write {
            path: path.clone(),
            source,
        })?;
    info!(path = %path.display(), rows = articles.len(), "Wrote articles CSV");

    Ok(path)
}
