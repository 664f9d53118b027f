//! Page objects: fetching a site's homepage and article pages over HTTP.
//!
//! [`PageSource`] is the seam between the scrape logic and the network.
//! [`HttpPageSource`] implements it with `reqwest` and pulls fields out of the
//! HTML with the CSS selectors configured for the site.

use crate::config::{NewsSite, Queries};
use crate::error::{ConfigError, TransportError};
use crate::models::{Article, Homepage};
use itertools::Itertools;
use reqwest::Client;
use scraper::{Html, Selector};
use tracing::{debug, info, instrument};

/// Something that can produce homepages and articles for one news site.
pub trait PageSource {
    /// Fetch the landing page at `host` and list its article links.
    async fn homepage(&self, host: &str) -> Result<Homepage, TransportError>;

    /// Fetch and parse the article at the absolute `url`.
    async fn article(&self, url: &str) -> Result<Article, TransportError>;
}

/// Compiled selectors for one site's [`Queries`].
#[derive(Debug, Clone)]
pub struct SiteSelectors {
    article_links: Selector,
    article_title: Selector,
    article_body: Selector,
}

impl SiteSelectors {
    pub fn compile(news_site: &str, queries: &Queries) -> Result<Self, ConfigError> {
        Ok(Self {
            article_links: parse_selector(
                news_site,
                "homepage_article_links",
                &queries.homepage_article_links,
            )?,
            article_title: parse_selector(news_site, "article_title", &queries.article_title)?,
            article_body: parse_selector(news_site, "article_body", &queries.article_body)?,
        })
    }
}

fn parse_selector(
    news_site: &str,
    query: &'static str,
    css: &str,
) -> Result<Selector, ConfigError> {
    Selector::parse(css).map_err(|e| ConfigError::InvalidSelector {
        site: news_site.to_string(),
        query,
        reason: e.to_string(),
    })
}

/// [`PageSource`] backed by plain HTTP GETs, one attempt per page.
#[derive(Debug, Clone)]
pub struct HttpPageSource {
    client: Client,
    selectors: SiteSelectors,
}

impl HttpPageSource {
    pub fn new(news_site: &str, site: &NewsSite) -> Result<Self, ConfigError> {
        let client = Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(ConfigError::HttpClient)?;

        Ok(Self {
            client,
            selectors: SiteSelectors::compile(news_site, &site.queries)?,
        })
    }

    async fn get_text(&self, url: &str) -> Result<String, TransportError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| TransportError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|source| TransportError::Request {
                url: url.to_string(),
                source,
            })
    }
}

impl PageSource for HttpPageSource {
    #[instrument(level = "info", skip(self))]
    async fn homepage(&self, host: &str) -> Result<Homepage, TransportError> {
        let html = self.get_text(host).await?;
        let article_links = extract_article_links(&html, &self.selectors.article_links);
        info!(count = article_links.len(), "Indexed homepage article links");
        debug!(links = ?article_links, "Homepage links");
        Ok(Homepage { article_links })
    }

    #[instrument(level = "debug", skip(self))]
    async fn article(&self, url: &str) -> Result<Article, TransportError> {
        let html = self.get_text(url).await?;
        let article = extract_article(url, &html, &self.selectors);
        debug!(bytes = article.body.len(), "Parsed article");
        Ok(article)
    }
}

/// Non-blank `href` values of every element matching `selector`, first
/// occurrence kept.
pub fn extract_article_links(html: &str, selector: &Selector) -> Vec<String> {
    let document = Html::parse_document(html);
    document
        .select(selector)
        .filter_map(|element| element.value().attr("href"))
        .map(str::trim)
        .filter(|href| !href.is_empty())
        .map(str::to_string)
        .unique()
        .collect()
}

/// Build an [`Article`] from an article page. Missing title or body matches
/// leave that field empty.
pub fn extract_article(url: &str, html: &str, selectors: &SiteSelectors) -> Article {
    let document = Html::parse_document(html);

    let title = document
        .select(&selectors.article_title)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .unwrap_or_default();

    let body = document
        .select(&selectors.article_body)
        .map(|element| element.text().collect::<String>())
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .join("\n");

    Article {
        url: url.to_string(),
        title,
        body,
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn queries() -> Queries {
        Queries {
            homepage_article_links: ".headlines a".to_string(),
            article_title: "h1.headline".to_string(),
            article_body: ".story p".to_string(),
        }
    }

    #[test]
    fn test_extract_article_links_keeps_order_and_dedupes() {
        let html = r#"
            <html><body>
              <div class="headlines">
                <a href="/b">B</a>
                <a href="story/a">A</a>
                <a>no href</a>
                <a href="  ">blank</a>
                <a href="/b">B again</a>
                <a href="https://other.com/x/y">Other</a>
              </div>
              <a href="/not-a-headline">skip</a>
            </body></html>
        "#;
        let selectors = SiteSelectors::compile("test", &queries()).unwrap();

        let links = extract_article_links(html, &selectors.article_links);
        assert_eq!(links, vec!["/b", "story/a", "https://other.com/x/y"]);
    }

    #[test]
    fn test_extract_article_fields() {
        let html = r#"
            <html><body>
              <h1 class="headline">  Big news  </h1>
              <h1 class="headline">Second headline</h1>
              <div class="story">
                <p>First paragraph.</p>
                <p>   </p>
                <p>Second paragraph.</p>
              </div>
            </body></html>
        "#;
        let selectors = SiteSelectors::compile("test", &queries()).unwrap();

        let article = extract_article("http://example.com/a", html, &selectors);
        assert_eq!(article.url, "http://example.com/a");
        assert_eq!(article.title, "Big news");
        assert_eq!(article.body, "First paragraph.\nSecond paragraph.");
        assert!(article.has_body());
    }

    #[test]
    fn test_extract_article_without_matches_is_empty() {
        let selectors = SiteSelectors::compile("test", &queries()).unwrap();
        let article = extract_article("http://example.com/a", "<p>unrelated</p>", &selectors);
        assert_eq!(article.title, "");
        assert_eq!(article.body, "");
        assert!(!article.has_body());
    }

    #[test]
    fn test_invalid_selector_is_config_error() {
        let mut bad = queries();
        bad.article_body = "p[".to_string();

        let err = SiteSelectors::compile("broken", &bad).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidSelector { ref site, query: "article_body", .. } if site == "broken"
        ));
    }

    #[test]
    fn test_http_page_source_builds() {
        let site = NewsSite {
            url: "https://example.com".to_string(),
            queries: queries(),
        };
        assert!(HttpPageSource::new("example", &site).is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        let site = NewsSite {
            url: "http://127.0.0.1:9".to_string(),
            queries: queries(),
        };
        let source = HttpPageSource::new("local", &site).unwrap();

        let err = source.article("http://127.0.0.1:9/story").await.unwrap_err();
        assert!(matches!(err, TransportError::Request { .. }));
    }

    async fn source_for(server: &MockServer) -> HttpPageSource {
        let site = NewsSite {
            url: server.uri(),
            queries: queries(),
        };
        HttpPageSource::new("mock", &site).unwrap()
    }

    #[tokio::test]
    async fn test_error_status_is_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/broken"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        let source = source_for(&server).await;

        let url = format!("{}/broken", server.uri());
        match source.article(&url).await.unwrap_err() {
            TransportError::Status { url: failed, status } => {
                assert_eq!(status, 500);
                assert_eq!(failed, url);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_missing_homepage_is_transport_error() {
        let server = MockServer::start().await;
        let source = source_for(&server).await;

        let err = source.homepage(&server.uri()).await.unwrap_err();
        assert!(matches!(err, TransportError::Status { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_homepage_and_article_over_http() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"<div class="headlines"><a href="/a">A</a><a href="b">B</a></div>"#,
            ))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/a"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"<h1 class="headline">Story A</h1><div class="story"><p>Body of A.</p></div>"#,
            ))
            .mount(&server)
            .await;
        let source = source_for(&server).await;

        let homepage = source.homepage(&server.uri()).await.unwrap();
        assert_eq!(homepage.article_links, vec!["/a", "b"]);

        let url = format!("{}/a", server.uri());
        let article = source.article(&url).await.unwrap();
        assert_eq!(article.url, url);
        assert_eq!(article.title, "Story A");
        assert_eq!(article.body, "Body of A.");
    }
}
