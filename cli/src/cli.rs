//! Argument parsing and dispatch

use anyhow::{Context, Result};
use clap::Parser;
use omnibar_core::{Config, Omnibar};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::output::DestinationResult;

#[derive(Debug, Parser)]
#[command(name = "omnibar")]
#[command(about = "Classify search bar input as a link, deep link or search", long_about = None)]
pub struct Cli {
    /// TOML config file.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Language hint for searches, e.g. `de`. Defaults to the process locale.
    #[arg(long, value_name = "CODE")]
    pub lang: Option<String>,

    /// Search engine URL template. `{lang}` is filled in, `%s` marks the query.
    #[arg(long, value_name = "TEMPLATE")]
    pub engine: Option<String>,

    /// Print results as JSON, one object per line.
    #[arg(long)]
    pub json: bool,

    /// Query to classify. Without one, queries are read from stdin, one per line.
    pub query: Vec<String>,
}

impl Cli {
    /// Config file (or defaults) with command line overrides applied.
    pub fn config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => Config::default(),
        };

        if let Some(lang) = &self.lang {
            config.language = lang.clone();
        }
        if let Some(engine) = &self.engine {
            config.search_engine = engine.clone();
        }

        tracing::debug!("effective config: {:?}", config);
        Ok(config)
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let omnibar = Omnibar::new(cli.config()?)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !cli.query.is_empty() {
        return write_result(&mut out, &omnibar, &cli.query.join(" "), cli.json);
    }

    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read query from stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        write_result(&mut out, &omnibar, &line, cli.json)?;
    }

    Ok(())
}

fn write_result<W: Write>(out: &mut W, omnibar: &Omnibar, query: &str, json: bool) -> Result<()> {
    let result = DestinationResult::from(omnibar.resolve_input(query));
    if json {
        writeln!(out, "{}", serde_json::to_string(&result)?)?;
    } else {
        writeln!(out, "{}", result.to_line())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    fn output(omnibar: &Omnibar, query: &str, json: bool) -> String {
        let mut out = Vec::new();
        write_result(&mut out, omnibar, query, json).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_query_words() {
        let cli = parse(&["omnibar", "--lang", "de", "new", "york", "pizza"]);
        assert_eq!(cli.query, vec!["new", "york", "pizza"]);
        assert_eq!(cli.lang.as_deref(), Some("de"));
        assert!(!cli.json);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_config_overrides() {
        let cli = parse(&[
            "omnibar",
            "--lang",
            "fr",
            "--engine",
            "https://search.example/?hl={lang}&q=%s",
            "github",
        ]);
        let config = cli.config().unwrap();
        assert_eq!(config.language, "fr");
        assert_eq!(
            config.search_template().template(),
            "https://search.example/?hl=fr&q=%s"
        );
    }

    #[test]
    fn test_missing_config_file() {
        let cli = parse(&["omnibar", "--config", "/nonexistent/omnibar.toml", "x"]);
        let err = cli.config().unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/omnibar.toml"));
    }

    #[test]
    fn test_write_result() {
        let omnibar = Omnibar::new(Config::new("en")).unwrap();

        assert_eq!(
            output(&omnibar, "github", false),
            "link\thttps://www.google.com/search?hl=en&q=github\n"
        );
        assert_eq!(
            output(&omnibar, "Http://example.com", true),
            "{\"type\":\"Link\",\"value\":\"http://example.com\"}\n"
        );
        assert_eq!(
            output(&omnibar, "geo:0,0", false),
            "deeplink\tgeo\tgeo:0,0\n"
        );
    }
}
