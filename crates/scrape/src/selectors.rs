// ABOUTME: CSS selectors for the artwork shop and auction lot pages, compiled once.
// ABOUTME: Shop selectors target Wix data-hook attributes; lot selectors target id fragments.

use once_cell::sync::Lazy;
use scraper::Selector;

pub mod shop {
    use super::*;

    pub static ADD_TO_CART: Lazy<Selector> =
        Lazy::new(|| Selector::parse(r#"[data-hook="add-to-cart"]"#).unwrap());
    pub static TITLE: Lazy<Selector> =
        Lazy::new(|| Selector::parse(r#"[data-hook="product-title"]"#).unwrap());
    pub static DESCRIPTION: Lazy<Selector> =
        Lazy::new(|| Selector::parse(r#"[data-hook="description"]"#).unwrap());
    pub static PRICE: Lazy<Selector> =
        Lazy::new(|| Selector::parse(r#"[data-hook="formatted-primary-price"]"#).unwrap());

    // Link regions: the hook may sit on the anchor itself or on a wrapper.
    pub static PAGINATION_LINKS: Lazy<Selector> = Lazy::new(|| {
        Selector::parse(
            r#"[data-hook="product-list-pagination-link-seo-link"][href],
               [data-hook="product-list-pagination-link-seo-link"] a[href]"#,
        )
        .unwrap()
    });
    pub static GRID_ITEM_LINKS: Lazy<Selector> = Lazy::new(|| {
        Selector::parse(
            r#"[data-hook="product-list-grid-item"][href],
               [data-hook="product-list-grid-item"] a[href]"#,
        )
        .unwrap()
    });
}

pub mod lot {
    use super::*;

    pub static LOT_NAME: Lazy<Selector> = Lazy::new(|| Selector::parse(".lotName").unwrap());
    pub static ITEM_NAME: Lazy<Selector> = Lazy::new(|| Selector::parse(".itemName i").unwrap());
    pub static PRICE_REALIZED_PRIMARY: Lazy<Selector> =
        Lazy::new(|| Selector::parse(r#"[id*="PriceRealizedPrimary"]"#).unwrap());
    pub static PRICE_REALIZED_SECONDARY: Lazy<Selector> =
        Lazy::new(|| Selector::parse(r#"[id*="PriceRealizedSecondary"]"#).unwrap());
    pub static PRICE_ESTIMATED_PRIMARY: Lazy<Selector> =
        Lazy::new(|| Selector::parse(r#"[id*="PriceEstimatedPrimary"]"#).unwrap());
    pub static PRICE_ESTIMATED_SECONDARY: Lazy<Selector> =
        Lazy::new(|| Selector::parse(r#"[id*="PriceEstimatedSecondary"]"#).unwrap());
    pub static SALE_DATE: Lazy<Selector> =
        Lazy::new(|| Selector::parse(r#"[id*="SaleDate"]"#).unwrap());
    pub static IMAGE: Lazy<Selector> = Lazy::new(|| Selector::parse("#imgLotImage").unwrap());
}
