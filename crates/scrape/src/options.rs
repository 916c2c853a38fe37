// ABOUTME: Crawl configuration: start URLs, allowed domains, politeness delay, and HTTP settings.
// ABOUTME: CrawlOptionsBuilder provides a fluent API over CrawlOptions defaults.

use std::time::Duration;

use artscrape_extract::DEFAULT_MEDIA_KEYWORDS;
use url::Url;

/// Listing page the shop crawl starts from.
pub const DEFAULT_START_URL: &str = "https://www.bearspace.co.uk/purchase";

/// Domain the shop crawl stays on.
pub const DEFAULT_ALLOWED_DOMAIN: &str = "bearspace.co.uk";

/// Settings for one crawl session.
#[derive(Debug, Clone)]
pub struct CrawlOptions {
    pub start_urls: Vec<String>,
    /// Hosts (and their subdomains) the crawl may visit. Empty allows any host.
    pub allowed_domains: Vec<String>,
    /// Pause between consecutive requests.
    pub download_delay: Duration,
    pub user_agent: String,
    pub timeout: Duration,
    /// Stop after fetching this many pages.
    pub max_pages: Option<usize>,
    pub media_keywords: Vec<String>,
}

impl Default for CrawlOptions {
    fn default() -> Self {
        Self {
            start_urls: vec![DEFAULT_START_URL.to_string()],
            allowed_domains: vec![DEFAULT_ALLOWED_DOMAIN.to_string()],
            download_delay: Duration::from_millis(500),
            user_agent: concat!("artscrape/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
            max_pages: None,
            media_keywords: DEFAULT_MEDIA_KEYWORDS.iter().map(|k| k.to_string()).collect(),
        }
    }
}

impl CrawlOptions {
    pub fn builder() -> CrawlOptionsBuilder {
        CrawlOptionsBuilder::new()
    }

    /// Returns true if `url`'s host is an allowed domain or a subdomain of one.
    pub fn is_allowed(&self, url: &Url) -> bool {
        if self.allowed_domains.is_empty() {
            return true;
        }
        let Some(host) = url.host_str() else {
            return false;
        };
        self.allowed_domains.iter().any(|domain| {
            host == domain
                || host
                    .strip_suffix(domain.as_str())
                    .is_some_and(|prefix| prefix.ends_with('.'))
        })
    }
}

/// Builder for [`CrawlOptions`].
#[derive(Debug, Clone)]
pub struct CrawlOptionsBuilder {
    opts: CrawlOptions,
}

impl CrawlOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            opts: CrawlOptions::default(),
        }
    }

    /// Replace the start URLs.
    pub fn start_urls<I, S>(mut self, urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.opts.start_urls = urls.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the allowed domains.
    pub fn allowed_domains<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.opts.allowed_domains = domains.into_iter().map(Into::into).collect();
        self
    }

    /// Set the pause between requests.
    pub fn download_delay(mut self, delay: Duration) -> Self {
        self.opts.download_delay = delay;
        self
    }

    /// Set the User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.opts.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.opts.timeout = timeout;
        self
    }

    /// Stop after this many fetched pages.
    pub fn max_pages(mut self, max_pages: usize) -> Self {
        self.opts.max_pages = Some(max_pages);
        self
    }

    /// Replace the keywords used to pick the media description.
    pub fn media_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.opts.media_keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn build(self) -> CrawlOptions {
        self.opts
    }
}

impl Default for CrawlOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}
