//! Output generation for scraped articles.
//!
//! - [`articles_csv`]: writes a run's articles to a dated CSV file

pub mod articles_csv;
