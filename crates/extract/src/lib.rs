// ABOUTME: Text-to-structured-data extraction core for artscrape.
// ABOUTME: Pure functions for whitespace cleanup, currency stripping, media filtering, dimensions, dates, and stock status.

pub mod currency;
pub mod date_parse;
pub mod dimensions;
pub mod error;
pub mod media;
pub mod models;
pub mod normalize;
pub mod stock;

pub use currency::{estimate_range, strip_currency, PriceValue, POUND_SIGN};
pub use date_parse::{normalize_date, parse_long_date};
pub use dimensions::{extract_dimensions, Axis, DimensionSet, INCH_TO_CM};
pub use error::ExtractError;
pub use media::{select_media, MediaFilter, DEFAULT_MEDIA_KEYWORDS};
pub use models::{ArtworkRecord, DimensionRow, LotRecord};
pub use normalize::{normalize_text, Normalize};
pub use stock::is_in_stock;
