// ABOUTME: End-to-end crawl test against a mock HTTP server.
// ABOUTME: Verifies pagination following, stock filtering, and 404 handling over real blocking requests.

use std::time::Duration;

use artscrape_scrape::{CrawlOptions, CrawlSession};
use httpmock::prelude::*;

fn product_html(title: &str, cart: &str, size: &str) -> String {
    format!(
        r#"<html><body>
        <h1 data-hook="product-title">{title}</h1>
        <span data-hook="formatted-primary-price">£300</span>
        <button data-hook="add-to-cart">{cart}</button>
        <div data-hook="description"><p>Spray paint on canvas</p><p>{size}</p></div>
        </body></html>"#
    )
}

#[test]
fn crawl_follows_pagination_and_filters_stock() {
    let server = MockServer::start();

    let listing1 = server.mock(|when, then| {
        when.method(GET).path("/purchase");
        then.status(200)
            .header("content-type", "text/html; charset=utf-8")
            .body(
                r#"<html><body>
                <div data-hook="product-list-grid-item"><a href="/product-page/red">Red</a></div>
                <div data-hook="product-list-grid-item"><a href="/product-page/gone">Gone</a></div>
                <a data-hook="product-list-pagination-link-seo-link" href="/purchase/2">2</a>
                </body></html>"#,
            );
    });
    let listing2 = server.mock(|when, then| {
        when.method(GET).path("/purchase/2");
        then.status(200).body(
            r#"<html><body>
            <div data-hook="product-list-grid-item"><a href="/product-page/blue">Blue</a></div>
            <div data-hook="product-list-grid-item"><a href="/product-page/missing">Missing</a></div>
            </body></html>"#,
        );
    });
    let red = server.mock(|when, then| {
        when.method(GET).path("/product-page/red");
        then.status(200)
            .body(product_html("Red", "Add to Cart", "40 x 50cm"));
    });
    let gone = server.mock(|when, then| {
        when.method(GET).path("/product-page/gone");
        then.status(200)
            .body(product_html("Gone", "Sold Out", "40 x 50cm"));
    });
    let blue = server.mock(|when, then| {
        when.method(GET).path("/product-page/blue");
        then.status(200)
            .body(product_html("Blue", "Add to Cart", "Diameter 35cm"));
    });
    let missing = server.mock(|when, then| {
        when.method(GET).path("/product-page/missing");
        then.status(404);
    });

    let options = CrawlOptions::builder()
        .start_urls([server.url("/purchase")])
        .allowed_domains([server.host()])
        .download_delay(Duration::ZERO)
        .timeout(Duration::from_secs(5))
        .build();

    let outcome = CrawlSession::new(options).unwrap().run().unwrap();

    listing1.assert();
    listing2.assert();
    red.assert();
    gone.assert();
    blue.assert();
    missing.assert();

    let names: Vec<&str> = outcome.artworks.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Red", "Blue"]);

    let blue = &outcome.artworks[1];
    assert_eq!(blue.media, "Spray paint on canvas");
    assert_eq!((blue.width, blue.height), (35.0, 35.0));
    assert!(blue.url.ends_with("/product-page/blue"));

    assert_eq!(outcome.report.pages_fetched, 5);
    assert_eq!(outcome.report.out_of_stock, 1);
    assert_eq!(outcome.report.failures, 1);
}
