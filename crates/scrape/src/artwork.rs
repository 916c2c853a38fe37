// ABOUTME: Product-page extraction for the artwork shop.
// ABOUTME: Applies the stock gate, then builds an ArtworkRecord from title, description, and price nodes.

use artscrape_extract::{
    extract_dimensions, is_in_stock, ArtworkRecord, ExtractError, MediaFilter, Normalize,
    PriceValue, POUND_SIGN,
};
use scraper::Html;

use crate::html::{first_own_text, first_text, text_nodes};
use crate::selectors::shop;

/// Result of parsing one product page.
#[derive(Debug, Clone, PartialEq)]
pub enum PageOutcome {
    /// The item is purchasable and every field was extracted.
    Listed(ArtworkRecord),
    /// The cart control did not read "add to cart"; no record is produced.
    OutOfStock,
}

/// Parses a product page into an [`ArtworkRecord`].
///
/// The stock gate runs first, so sold-out pages never reach extraction.
/// Media is the keyword-filtered description; dimensions come from the
/// whole description joined with spaces.
pub fn parse_artwork_page(
    html: &str,
    url: &str,
    media: &MediaFilter,
) -> Result<PageOutcome, ExtractError> {
    let doc = Html::parse_document(html);

    let label = first_text(&doc, &shop::ADD_TO_CART)
        .ok_or(ExtractError::MissingField("add-to-cart label"))?;
    if !is_in_stock(&label) {
        tracing::info!(url, label = %label.trim(), "out of stock product dropped");
        return Ok(PageOutcome::OutOfStock);
    }

    let name = first_text(&doc, &shop::TITLE)
        .ok_or(ExtractError::MissingField("product title"))?
        .normalized();

    let fragments = text_nodes(&doc, &shop::DESCRIPTION);
    let media_text = media.select(&fragments);

    let raw_price =
        first_own_text(&doc, &shop::PRICE).ok_or(ExtractError::MissingField("price"))?;
    let price = PriceValue::from_raw(&raw_price, &[POUND_SIGN]);

    let dims = extract_dimensions(&fragments.join(" "))?;

    Ok(PageOutcome::Listed(ArtworkRecord::new(
        url, name, media_text, dims, price,
    )))
}
