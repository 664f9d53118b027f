//! Command-line interface definitions for news_extract.
//!
//! The set of valid `news_site` values comes from the config file, so it is
//! checked after parsing with [`Cli::validate_news_site`] instead of by clap.

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

/// Command-line arguments.
///
/// # Examples
///
/// ```sh
/// # Scrape one site with the default config.yaml, writing into ./csv
/// news_extract eluniversal
///
/// # Custom config and output directory
/// news_extract elpais -c sites.yaml -o /tmp/csv
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// The news site to scrape, as named in the config file
    pub news_site: String,

    /// Path to the YAML site configuration
    #[arg(short, long, env = "NEWS_EXTRACT_CONFIG", default_value = "config.yaml")]
    pub config: String,

    /// Directory the CSV file is written to
    #[arg(short, long, env = "NEWS_EXTRACT_OUTPUT_DIR", default_value = "csv")]
    pub output_dir: String,
}

impl Cli {
    /// Check `news_site` against the configured choices, producing the same
    /// usage error clap gives for an invalid value.
    pub fn validate_news_site(&self, choices: &[&str]) -> Result<(), clap::Error> {
        if choices.contains(&self.news_site.as_str()) {
            return Ok(());
        }
        Err(Self::command().error(
            ErrorKind::InvalidValue,
            format!(
                "invalid value '{}' for '<NEWS_SITE>'\n  [possible values: {}]",
                self.news_site,
                choices.join(", ")
            ),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from([
            "news_extract",
            "eluniversal",
            "--config",
            "sites.yaml",
            "--output-dir",
            "./out",
        ]);

        assert_eq!(cli.news_site, "eluniversal");
        assert_eq!(cli.config, "sites.yaml");
        assert_eq!(cli.output_dir, "./out");
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from(["news_extract", "elpais", "-c", "/tmp/c.yaml", "-o", "/tmp/csv"]);

        assert_eq!(cli.config, "/tmp/c.yaml");
        assert_eq!(cli.output_dir, "/tmp/csv");
    }

    #[test]
    fn test_news_site_is_required() {
        let err = Cli::try_parse_from(["news_extract"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_validate_news_site() {
        let cli = Cli::parse_from(["news_extract", "elpais"]);
        assert!(cli.validate_news_site(&["elpais", "eluniversal"]).is_ok());

        let cli = Cli::parse_from(["news_extract", "nytimes"]);
        let err = cli.validate_news_site(&["elpais", "eluniversal"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("elpais, eluniversal"));
    }
}
