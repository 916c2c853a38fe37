// ABOUTME: CLI for artscrape: crawl the artwork shop, parse single pages, or extract a dimension CSV.
// ABOUTME: Prints records as JSON (default) or CSV to stdout or a file; logs to stderr via tracing.

mod output;

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use artscrape_extract::{DimensionRow, MediaFilter};
use artscrape_scrape::{
    parse_artwork_page, parse_lot_page, read_dimension_file, read_dimension_table, CrawlOptions,
    CrawlSession, PageOutcome,
};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::output::{render, OutputFormat};

/// Scrape artwork listings and auction lots into flat records.
#[derive(Parser, Debug)]
#[command(name = "artscrape")]
#[command(about = "Extract artwork and auction records from HTML and CSV", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json, global = true)]
    format: OutputFormat,

    /// Output compact JSON instead of pretty.
    #[arg(long, default_value_t = false, global = true)]
    compact: bool,

    /// Output file path (default: stdout).
    #[arg(short = 'o', long = "output", global = true)]
    output: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Crawl the shop's listing pages and collect in-stock artworks.
    Crawl {
        /// Listing page(s) to start from (default: the shop's purchase page).
        #[arg(long = "start-url")]
        start_urls: Vec<String>,

        /// Domains the crawl may visit (default: the shop's domain).
        #[arg(long = "allowed-domain")]
        allowed_domains: Vec<String>,

        /// Pause between requests, in milliseconds.
        #[arg(long = "delay-ms", default_value_t = 500)]
        delay_ms: u64,

        /// Stop after this many fetched pages.
        #[arg(long = "max-pages")]
        max_pages: Option<usize>,

        /// User-Agent header for requests.
        #[arg(long = "user-agent")]
        user_agent: Option<String>,
    },

    /// Parse one saved product page.
    Artwork {
        /// HTML file to parse ("-" for stdin).
        #[arg(long = "html")]
        html: String,

        /// URL the page was fetched from.
        #[arg(long = "url")]
        url: String,
    },

    /// Parse one saved auction lot page.
    Lot {
        /// HTML file to parse ("-" for stdin).
        #[arg(long = "html")]
        html: String,
    },

    /// Extract height/width/depth from a CSV of raw dimension strings.
    Dims {
        /// CSV file with a "rawDim" column ("-" for stdin).
        #[arg(long = "csv")]
        csv: String,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging();

    let rendered = match &args.command {
        Command::Crawl {
            start_urls,
            allowed_domains,
            delay_ms,
            max_pages,
            user_agent,
        } => {
            let mut builder = CrawlOptions::builder().download_delay(Duration::from_millis(*delay_ms));
            if !start_urls.is_empty() {
                builder = builder.start_urls(start_urls.iter().cloned());
            }
            if !allowed_domains.is_empty() {
                builder = builder.allowed_domains(allowed_domains.iter().cloned());
            }
            if let Some(max) = max_pages {
                builder = builder.max_pages(*max);
            }
            if let Some(ua) = user_agent {
                builder = builder.user_agent(ua.clone());
            }

            let outcome = CrawlSession::new(builder.build())?.run()?;
            tracing::info!(report = ?outcome.report, "crawl report");
            render(&outcome.artworks, args.format, args.compact)?
        }
        Command::Artwork { html, url } => {
            let page = load_text(html)?;
            let records = match parse_artwork_page(&page, url, MediaFilter::default_keywords())
                .with_context(|| format!("parsing product page {url}"))?
            {
                PageOutcome::Listed(record) => vec![record],
                PageOutcome::OutOfStock => Vec::new(),
            };
            render(&records, args.format, args.compact)?
        }
        Command::Lot { html } => {
            let page = load_text(html)?;
            let lot = parse_lot_page(&page).with_context(|| format!("parsing lot page {html}"))?;
            render(&[lot], args.format, args.compact)?
        }
        Command::Dims { csv } => {
            let rows =
                load_dimensions(csv).with_context(|| format!("reading dimension table {csv}"))?;
            render(&rows, args.format, args.compact)?
        }
    };

    match &args.output {
        Some(path) => fs::write(path, &rendered)
            .with_context(|| format!("writing {}", path.display()))?,
        None => print!("{rendered}"),
    }

    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_dimensions(target: &str) -> Result<Vec<DimensionRow>> {
    if target == "-" {
        return Ok(read_dimension_table(io::stdin().lock())?);
    }

    let path = PathBuf::from(target);
    if !path.exists() {
        return Err(anyhow!("file not found: {}", target));
    }
    Ok(read_dimension_file(path)?)
}

fn load_text(target: &str) -> Result<String> {
    if target == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }

    let path = PathBuf::from(target);
    if !path.exists() {
        return Err(anyhow!("file not found: {}", target));
    }
    Ok(fs::read_to_string(path)?)
}
