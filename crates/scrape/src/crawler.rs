// ABOUTME: Synchronous crawl session for the artwork shop.
// ABOUTME: Walks listing pages breadth-first, parses product pages, and owns the collected ArtworkRecords.

use std::collections::{HashSet, VecDeque};
use std::thread;

use artscrape_extract::{ArtworkRecord, MediaFilter};
use scraper::Html;
use serde::Serialize;
use url::Url;

use crate::artwork::{parse_artwork_page, PageOutcome};
use crate::error::ScrapeError;
use crate::links::{listing_links, product_links};
use crate::options::CrawlOptions;

/// Counters describing what a crawl did.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CrawlReport {
    pub pages_fetched: usize,
    pub listing_pages: usize,
    pub products_parsed: usize,
    pub out_of_stock: usize,
    pub failures: usize,
}

/// Everything a finished crawl hands back to its caller.
#[derive(Debug, Clone, Default)]
pub struct CrawlOutcome {
    pub artworks: Vec<ArtworkRecord>,
    pub report: CrawlReport,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PageKind {
    Listing,
    Product,
}

/// One crawl run.
///
/// The session owns its queue, its visited set and the artwork list;
/// [`CrawlSession::run`] consumes it and returns the records, so nothing
/// outlives the run.
#[derive(Debug)]
pub struct CrawlSession {
    options: CrawlOptions,
    media: MediaFilter,
    queue: VecDeque<(Url, PageKind)>,
    seen: HashSet<Url>,
    artworks: Vec<ArtworkRecord>,
    report: CrawlReport,
}

impl CrawlSession {
    /// Creates a session seeded with the configured start URLs.
    pub fn new(options: CrawlOptions) -> Result<Self, ScrapeError> {
        let media = MediaFilter::new(&options.media_keywords);
        let mut session = Self {
            options,
            media,
            queue: VecDeque::new(),
            seen: HashSet::new(),
            artworks: Vec::new(),
            report: CrawlReport::default(),
        };

        for raw in session.options.start_urls.clone() {
            let url = Url::parse(&raw).map_err(|e| ScrapeError::invalid_url(raw.as_str(), e))?;
            session.enqueue(url, PageKind::Listing);
        }

        Ok(session)
    }

    /// Runs the crawl over HTTP with a blocking client.
    pub fn run(self) -> Result<CrawlOutcome, ScrapeError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(self.options.user_agent.clone())
            .timeout(self.options.timeout)
            .build()
            .map_err(ScrapeError::Client)?;

        Ok(self.run_with(|url| fetch_page(&client, url)))
    }

    /// Runs the crawl using `fetch` to load each page body.
    ///
    /// A page that fails to load or parse is logged and counted, and the
    /// crawl moves on to the next queued URL.
    pub fn run_with<F>(mut self, mut fetch: F) -> CrawlOutcome
    where
        F: FnMut(&Url) -> Result<String, ScrapeError>,
    {
        let mut first = true;

        while let Some((url, kind)) = self.queue.pop_front() {
            if self
                .options
                .max_pages
                .is_some_and(|max| self.report.pages_fetched >= max)
            {
                tracing::info!(max_pages = self.report.pages_fetched, "page limit reached");
                break;
            }

            if !first && !self.options.download_delay.is_zero() {
                thread::sleep(self.options.download_delay);
            }
            first = false;

            tracing::debug!(url = %url, ?kind, "fetching");
            let body = match fetch(&url) {
                Ok(body) => body,
                Err(err) => {
                    tracing::warn!(error = %err, "page fetch failed");
                    self.report.failures += 1;
                    continue;
                }
            };
            self.report.pages_fetched += 1;

            match kind {
                PageKind::Listing => self.handle_listing(&url, &body),
                PageKind::Product => self.handle_product(&url, &body),
            }
        }

        tracing::info!(
            artworks = self.artworks.len(),
            pages = self.report.pages_fetched,
            failures = self.report.failures,
            "crawl finished"
        );

        CrawlOutcome {
            artworks: self.artworks,
            report: self.report,
        }
    }

    fn handle_listing(&mut self, url: &Url, body: &str) {
        self.report.listing_pages += 1;

        let doc = Html::parse_document(body);
        for link in listing_links(&doc, url) {
            self.enqueue(link, PageKind::Listing);
        }
        for link in product_links(&doc, url) {
            self.enqueue(link, PageKind::Product);
        }
    }

    fn handle_product(&mut self, url: &Url, body: &str) {
        match parse_artwork_page(body, url.as_str(), &self.media) {
            Ok(PageOutcome::Listed(record)) => {
                self.report.products_parsed += 1;
                self.artworks.push(record);
            }
            Ok(PageOutcome::OutOfStock) => {
                self.report.out_of_stock += 1;
            }
            Err(source) => {
                let err = ScrapeError::extract(url.as_str(), source);
                tracing::warn!(error = %err, "product page skipped");
                self.report.failures += 1;
            }
        }
    }

    fn enqueue(&mut self, url: Url, kind: PageKind) {
        if !self.options.is_allowed(&url) {
            tracing::debug!(url = %url, "skipping off-domain link");
            return;
        }
        if self.seen.insert(url.clone()) {
            self.queue.push_back((url, kind));
        }
    }
}

/// Fetches one page body, treating HTTP error statuses as failures.
pub fn fetch_page(client: &reqwest::blocking::Client, url: &Url) -> Result<String, ScrapeError> {
    client
        .get(url.clone())
        .send()
        .and_then(|resp| resp.error_for_status())
        .and_then(|resp| resp.text())
        .map_err(|e| ScrapeError::fetch(url.as_str(), e))
}
