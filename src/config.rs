//! Site configuration loaded from `config.yaml`.
//!
//! Each news site maps to a host URL and the CSS selectors used to pull
//! article links, titles, and bodies out of its pages:
//!
//! ```yaml
//! news_sites:
//!   eluniversal:
//!     url: https://www.eluniversal.com.mx
//!     queries:
//!       homepage_article_links: ".field-content a"
//!       article_title: ".pane-content h1"
//!       article_body: ".field-name-body"
//! ```

use crate::error::ConfigError;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info, instrument};
use url::Url;

/// The full configuration file.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub news_sites: BTreeMap<String, NewsSite>,
}

/// One scrapeable publication.
#[derive(Debug, Clone, Deserialize)]
pub struct NewsSite {
    /// Host base URL that relative article links are resolved against.
    pub url: String,
    pub queries: Queries,
}

/// CSS selectors for a site's homepage and article pages.
#[derive(Debug, Clone, Deserialize)]
pub struct Queries {
    pub homepage_article_links: String,
    pub article_title: String,
    pub article_body: String,
}

impl Config {
    /// Read and validate a YAML config file.
    #[instrument(level = "info", skip_all, fields(path = %path.as_ref().display()))]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&raw).map_err(|e| match e {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;
        info!(sites = config.news_sites.len(), "Loaded configuration");
        Ok(config)
    }

    /// Parse and validate YAML text. Every site URL must be absolute.
    pub fn from_yaml(raw: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(raw).map_err(|source| ConfigError::Parse {
            path: "<inline>".into(),
            source,
        })?;

        for (name, site) in &config.news_sites {
            Url::parse(&site.url).map_err(|source| ConfigError::InvalidUrl {
                site: name.clone(),
                url: site.url.clone(),
                source,
            })?;
            debug!(site = %name, host = %site.url, "Validated news site");
        }

        Ok(config)
    }

    /// Configured site identifiers, sorted.
    pub fn site_names(&self) -> Vec<&str> {
        self.news_sites.keys().map(String::as_str).collect()
    }

    pub fn site(&self, news_site: &str) -> Result<&NewsSite, ConfigError> {
        self.news_sites
            .get(news_site)
            .ok_or_else(|| ConfigError::UnknownSite(news_site.to_string()))
    }

    /// Host base URL for `news_site`.
    pub fn host(&self, news_site: &str) -> Result<&str, ConfigError> {
        self.site(news_site).map(|site| site.url.as_str())
    }
}
