// ABOUTME: Keyword filter that picks the media description out of product text fragments.
// ABOUTME: Keeps fragments mentioning any material keyword and joins them with single spaces.

use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;

use crate::normalize::Normalize;

/// Material keywords the artwork shop uses in its descriptions.
pub const DEFAULT_MEDIA_KEYWORDS: &[&str] = &[
    "spray",
    "canvas",
    "board",
    "paint",
    "oil",
    "enamel",
    "pigements",
    "pigment",
    "resin",
    "acrylic",
    "print",
    "digital",
    "sculpture",
    "art",
];

static DEFAULT_FILTER: Lazy<MediaFilter> = Lazy::new(|| MediaFilter::new(DEFAULT_MEDIA_KEYWORDS));

/// Matches description fragments against a fixed set of lowercase keywords.
#[derive(Debug, Clone)]
pub struct MediaFilter {
    matcher: Option<AhoCorasick>,
}

impl MediaFilter {
    /// Builds a filter for `keywords`. Keywords are compared against the
    /// lowercased fragment, so they are lowercased here as well.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns: Vec<String> = keywords
            .into_iter()
            .map(|k| k.as_ref().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();

        // An empty pattern set matches nothing.
        let matcher = if patterns.is_empty() {
            None
        } else {
            AhoCorasick::new(&patterns).ok()
        };

        Self { matcher }
    }

    /// Returns the shared filter built from [`DEFAULT_MEDIA_KEYWORDS`].
    pub fn default_keywords() -> &'static MediaFilter {
        &DEFAULT_FILTER
    }

    /// Returns true if the lowercased fragment contains any keyword.
    pub fn is_media(&self, fragment: &str) -> bool {
        match &self.matcher {
            Some(ac) => ac.is_match(&fragment.to_lowercase()),
            None => false,
        }
    }

    /// Keeps matching fragments in input order, normalizes each and joins
    /// them with a single space. No match yields an empty string.
    pub fn select<S: AsRef<str>>(&self, fragments: &[S]) -> String {
        fragments
            .iter()
            .map(AsRef::as_ref)
            .filter(|f| self.is_media(f))
            .map(|f| f.normalized())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Filters `fragments` with an ad-hoc keyword set.
pub fn select_media<S: AsRef<str>>(fragments: &[S], keywords: &[&str]) -> String {
    MediaFilter::new(keywords).select(fragments)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selects_only_matching_fragment() {
        let fragments = ["Medium: Oil on Canvas", "Frame: wood"];
        assert_eq!(
            select_media(&fragments, &["oil", "canvas"]),
            "Medium: Oil on Canvas"
        );
    }

    #[test]
    fn test_preserves_order_and_normalizes() {
        let fragments = [
            " Acrylic on board\u{a0}",
            "Signed verso",
            "Giclee print, edition of 20 ",
        ];
        assert_eq!(
            MediaFilter::default_keywords().select(&fragments),
            "Acrylic on board Giclee print, edition of 20"
        );
    }

    #[test]
    fn test_no_match_is_empty() {
        let fragments = ["Signed verso", "Ships in 3 days"];
        assert_eq!(select_media(&fragments, &["oil"]), "");
    }

    #[test]
    fn test_empty_keyword_set_matches_nothing() {
        let filter = MediaFilter::new(Vec::<String>::new());
        assert!(!filter.is_media("oil on canvas"));
    }

    #[test]
    fn test_keywords_match_as_substrings() {
        // "art" is a keyword, so "Artist" counts.
        assert!(MediaFilter::default_keywords().is_media("Artist proof"));
        assert!(!MediaFilter::default_keywords().is_media("Unframed"));
    }
}
