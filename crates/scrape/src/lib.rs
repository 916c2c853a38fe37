// ABOUTME: HTML and crawl layer for artscrape.
// ABOUTME: Parses shop product pages and auction lot pages, runs crawl sessions, and reads dimension CSVs.

//! Scraping layer.
//!
//! This crate turns fetched HTML (or CSV) into the raw text fields the
//! `artscrape-extract` pipeline consumes, and collects the typed records
//! it returns.
//!
//! - [`parse_artwork_page`]: one shop product page, gated on stock status.
//! - [`parse_lot_page`]: one auction lot page.
//! - [`CrawlSession`]: a synchronous crawl over the shop's listing pages.
//! - [`read_dimension_table`]: raw dimension strings from CSV.

pub mod artwork;
pub mod crawler;
pub mod error;
pub mod html;
pub mod links;
pub mod lot;
pub mod options;
pub mod selectors;
pub mod table;

pub use crate::artwork::{parse_artwork_page, PageOutcome};
pub use crate::crawler::{fetch_page, CrawlOutcome, CrawlReport, CrawlSession};
pub use crate::error::ScrapeError;
pub use crate::links::{listing_links, product_links};
pub use crate::lot::{artist_from_lot_name, parse_lot_page};
pub use crate::options::{
    CrawlOptions, CrawlOptionsBuilder, DEFAULT_ALLOWED_DOMAIN, DEFAULT_START_URL,
};
pub use crate::table::{read_dimension_file, read_dimension_table, RAW_DIM_COLUMN};
