//! Data models for fetched homepages and articles.
//!
//! - [`Homepage`]: the raw article links found on a site's landing page
//! - [`Article`]: one fetched story with the fields exported to CSV

/// A fetched homepage.
///
/// Links are raw `href` values and may be relative to the site's host. Their
/// order is the order the page yielded them in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Homepage {
    pub article_links: Vec<String>,
}

/// A fetched article page.
///
/// The exported columns are declared in [`Article::CSV_HEADERS`] rather than
/// inferred from the struct, so adding a field does not change the CSV until
/// the header list and [`Article::csv_record`] are updated together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Article {
    /// The resolved URL the article was fetched from.
    pub url: String,
    /// The headline, empty if the page had none.
    pub title: String,
    /// The article text, empty if the page had none.
    pub body: String,
}

impl Article {
    /// CSV header row, in column order.
    pub const CSV_HEADERS: [&'static str; 3] = ["body", "title", "url"];

    /// Field values in [`Article::CSV_HEADERS`] order.
    pub fn csv_record(&self) -> [&str; 3] {
        [&self.body, &self.title, &self.url]
    }

    /// Whether the article has a non-empty body. Articles without one are
    /// discarded before export.
    pub fn has_body(&self) -> bool {
        !self.body.is_empty()
    }
}
