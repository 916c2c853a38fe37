// ABOUTME: Stock gate for product pages.
// ABOUTME: An item is purchasable only when its cart control reads exactly "add to cart".

const IN_STOCK_LABEL: &str = "add to cart";

/// Returns true only if the trimmed, lowercased label is "add to cart".
///
/// Any other label ("Sold Out", "Out of stock", "Pre-order") means the
/// item should be skipped without producing a record.
pub fn is_in_stock(label: &str) -> bool {
    label.trim().to_lowercase() == IN_STOCK_LABEL
}
