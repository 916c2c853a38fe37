// ABOUTME: Flat output records produced by the extraction pipeline.
// ABOUTME: ArtworkRecord for shop listings, LotRecord for auction lots, DimensionRow for CSV dimension rows.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::currency::PriceValue;
use crate::dimensions::DimensionSet;

/// One in-stock artwork listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtworkRecord {
    pub url: String,
    pub name: String,
    pub media: String,
    pub height: f64,
    pub width: f64,
    pub price: PriceValue,
}

impl ArtworkRecord {
    pub fn new(
        url: impl Into<String>,
        name: impl Into<String>,
        media: impl Into<String>,
        dims: DimensionSet,
        price: PriceValue,
    ) -> Self {
        Self {
            url: url.into(),
            name: name.into(),
            media: media.into(),
            height: dims.height,
            width: dims.width,
            price,
        }
    }
}

/// One auction lot: who, what, how much, and when.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LotRecord {
    pub artist_name: String,
    pub painting_name: String,
    pub gbp_price: String,
    pub usd_price: String,
    pub gbp_est_price: String,
    pub usd_est_price: String,
    pub art_image_url: String,
    pub saledate: NaiveDate,
}

/// A raw dimension string alongside the values extracted from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionRow {
    pub raw_dim: String,
    pub height: f64,
    pub width: f64,
    pub depth: Option<f64>,
}

impl DimensionRow {
    pub fn new(raw_dim: impl Into<String>, dims: DimensionSet) -> Self {
        Self {
            raw_dim: raw_dim.into(),
            height: dims.height,
            width: dims.width,
            depth: dims.depth,
        }
    }
}
