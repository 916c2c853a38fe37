// ABOUTME: Auction lot page extraction.
// ABOUTME: Pulls artist, title, realised and estimated prices, image URL, and sale date into a LotRecord.

use artscrape_extract::{
    estimate_range, parse_long_date, strip_currency, ExtractError, LotRecord, Normalize,
};
use scraper::{Html, Selector};

use crate::html::{first_attr, first_own_text};
use crate::selectors::lot;

/// Parses an auction lot page into a [`LotRecord`].
///
/// Every field is required; a missing node is reported as
/// [`ExtractError::MissingField`].
pub fn parse_lot_page(html: &str) -> Result<LotRecord, ExtractError> {
    let doc = Html::parse_document(html);

    let artist_name = artist_from_lot_name(&required(&doc, &lot::LOT_NAME, "artist name")?);
    let painting_name = required(&doc, &lot::ITEM_NAME, "painting name")?.normalized();

    let gbp_price = without_code(&required(&doc, &lot::PRICE_REALIZED_PRIMARY, "gbp price")?, "GBP");
    let usd_price =
        without_code(&required(&doc, &lot::PRICE_REALIZED_SECONDARY, "usd price")?, "USD");

    let gbp_est_price =
        estimate_range(&required(&doc, &lot::PRICE_ESTIMATED_PRIMARY, "gbp estimate")?);
    let usd_est_price =
        estimate_range(&required(&doc, &lot::PRICE_ESTIMATED_SECONDARY, "usd estimate")?);

    let art_image_url =
        first_attr(&doc, &lot::IMAGE, "src").ok_or(ExtractError::MissingField("image url"))?;

    let saledate = parse_long_date(&required(&doc, &lot::SALE_DATE, "sale date")?)?;

    Ok(LotRecord {
        artist_name,
        painting_name,
        gbp_price,
        usd_price,
        gbp_est_price,
        usd_est_price,
        art_image_url,
        saledate,
    })
}

/// Keeps the text before the first "(" ("Peter Doig (B. 1959)" -> "Peter Doig").
/// Names without a parenthesis are kept whole.
pub fn artist_from_lot_name(raw: &str) -> String {
    raw.split_once('(')
        .map_or(raw, |(name, _)| name)
        .normalized()
}

fn required(doc: &Html, selector: &Selector, field: &'static str) -> Result<String, ExtractError> {
    first_own_text(doc, selector).ok_or(ExtractError::MissingField(field))
}

fn without_code(raw: &str, code: &str) -> String {
    strip_currency(raw, &[code]).normalized()
}
