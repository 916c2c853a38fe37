// ABOUTME: Link discovery on shop listing pages.
// ABOUTME: Resolves pagination and product-grid hrefs against the page URL, dropping fragments and duplicates.

use scraper::{Html, Selector};
use url::Url;

use crate::selectors::shop;

/// Further listing pages linked from a listing page.
pub fn listing_links(doc: &Html, base: &Url) -> Vec<Url> {
    collect_links(doc, &shop::PAGINATION_LINKS, base)
}

/// Product pages linked from a listing page's grid.
pub fn product_links(doc: &Html, base: &Url) -> Vec<Url> {
    collect_links(doc, &shop::GRID_ITEM_LINKS, base)
}

/// Resolves every `href` under `selector`, in document order, without
/// duplicates. Unresolvable and non-http(s) links are skipped.
fn collect_links(doc: &Html, selector: &Selector, base: &Url) -> Vec<Url> {
    let mut out: Vec<Url> = Vec::new();
    for el in doc.select(selector) {
        let Some(href) = el.value().attr("href") else {
            continue;
        };
        let Ok(mut url) = base.join(href.trim()) else {
            tracing::debug!(href, "skipping unresolvable link");
            continue;
        };
        if !matches!(url.scheme(), "http" | "https") {
            continue;
        }
        url.set_fragment(None);
        if !out.contains(&url) {
            out.push(url);
        }
    }
    out
}
