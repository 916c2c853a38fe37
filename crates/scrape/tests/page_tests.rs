// ABOUTME: Integration tests for lot-page and product-page extraction.
// ABOUTME: Uses an HTML fixture for the auction lot and inline markup for shop pages.

use std::fs;

use artscrape_extract::MediaFilter;
use artscrape_scrape::{parse_artwork_page, parse_lot_page, PageOutcome};
use pretty_assertions::assert_eq;

fn load_fixture(name: &str) -> String {
    let path = format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("failed to read fixture {path}: {e}"))
}

#[test]
fn test_lot_page_fields() {
    let lot = parse_lot_page(&load_fixture("lot.html")).unwrap();

    assert_eq!(lot.artist_name, "Peter Doig");
    assert_eq!(lot.painting_name, "The Architect's Home in the Ravine");
    assert_eq!(lot.gbp_price, "11,282,500");
    assert_eq!(lot.usd_price, "16,370,908");
    assert_eq!(lot.gbp_est_price, "10,000,000 - 15,000,000");
    assert_eq!(lot.usd_est_price, "14,509,999 - 21,764,999");
    assert!(lot.art_image_url.starts_with("https://www.christies.com/img/LotImages/"));
    assert_eq!(lot.saledate.to_string(), "2016-02-11");
}

#[test]
fn test_lot_page_bad_date() {
    let html = load_fixture("lot.html").replace("11 February 2016, ", "Thursday evening");
    let err = parse_lot_page(&html).unwrap_err();
    assert!(err.to_string().contains("Thursday evening"));
}

#[test]
fn test_product_page_with_inch_dimensions() {
    let html = r#"
        <h1 data-hook="product-title">Harbour at Dusk</h1>
        <span data-hook="formatted-primary-price">£1,450</span>
        <button data-hook="add-to-cart">Add to Cart</button>
        <div data-hook="description">
            <p>Oil and enamel on board</p>
            <p>24 by 18 inches</p>
        </div>"#;

    let PageOutcome::Listed(record) =
        parse_artwork_page(html, "https://shop.example/p/harbour", MediaFilter::default_keywords())
            .unwrap()
    else {
        panic!("expected listed record");
    };

    assert_eq!(record.media, "Oil and enamel on board");
    assert!((record.width - 60.96).abs() < 1e-9);
    assert!((record.height - 45.72).abs() < 1e-9);
    assert_eq!(record.price.amount(), Some(1450.0));
}
