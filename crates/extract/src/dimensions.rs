// ABOUTME: Dimension extraction from free-text artwork descriptions.
// ABOUTME: Finds measurement tokens near separators/units, assigns axes by position, and converts inches.

//! Dimension extraction.
//!
//! Descriptions mix measurements with prose: `"Oil on canvas, 30 x 40 cm"`,
//! `"Image 12.5cm"`, `"10 by 8 in"`, `"100w x 80h"`. The extractor scans for
//! numeric tokens and keeps the ones whose neighbourhood marks them as a
//! measurement:
//!
//! - preceded by a separator (`x`, `×`, `by`), with at most one whitespace
//!   character in between, or
//! - followed by a separator (same spacing rule), or
//! - immediately followed by a unit or axis label (`cm`, `in`, `w`, `h`, `d`).
//!
//! `x` and `by` only count as separators when they stand on their own
//! (`box 5` and `baby 5` are prose), and `by` must sit between two numbers
//! (`painted 2019 by the artist` is prose). A unit word may come between a
//! number and its separator: `10 cm x 20 cm`, `10in by 8in`.
//!
//! Only ASCII digits form numbers.
//!
//! Numbers touching a `/` are never measurements (fractions, dates), and
//! neither is the whole part of a mixed number such as `12 1/4`.
//!
//! Count policy:
//!
//! | found | result                                  |
//! |-------|-----------------------------------------|
//! | 0     | [`ExtractError::NoDimensions`]          |
//! | 1     | width = height = value                  |
//! | 2     | width, height                           |
//! | 3     | width, height, depth                    |
//! | > 3   | first measurement run, at most three    |
//!
//! Axes are assigned by position only; an explicit `h` or `w` label next to
//! a number helps find it but never relabels it. When any selected number
//! is joined by `by`, all values are taken as inches and multiplied by 2.54.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ExtractError;

/// Centimeters per inch.
pub const INCH_TO_CM: f64 = 2.54;

static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+(?:[.,][0-9]+)?").unwrap());
static FRACTION_AHEAD: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s+[0-9]+/[0-9]").unwrap());

/// Labels that may directly follow a measurement.
const UNIT_SUFFIXES: &[&str] = &["cm", "in", "w", "h", "d"];

/// Unit words that may sit between a number and its separator
/// (`10 cm x 20 cm`, `10in by 8in`). Longest first.
const SEPARATOR_UNITS: &[&str] = &["inches", "inch", "cm", "in", "w", "h", "d"];

/// Words allowed between two numbers of the same measurement run.
const RUN_LINKS: &[&str] = &["inches", "inch", "cm", "in", "by", "x", "×", "w", "h", "d"];

/// One of the three spatial measurement axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Width,
    Height,
    Depth,
}

/// Measurements extracted from a description, in centimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionSet {
    pub height: f64,
    pub width: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<f64>,
}

impl DimensionSet {
    /// Assigns axes to 1–3 values by position.
    ///
    /// A single value fills both width and height. Returns None for an
    /// empty slice or more than three values.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        match *values {
            [side] => Some(Self {
                height: side,
                width: side,
                depth: None,
            }),
            [width, height] => Some(Self {
                height,
                width,
                depth: None,
            }),
            [width, height, depth] => Some(Self {
                height,
                width,
                depth: Some(depth),
            }),
            _ => None,
        }
    }

    /// Returns the value for `axis`, if present.
    pub fn get(&self, axis: Axis) -> Option<f64> {
        match axis {
            Axis::Width => Some(self.width),
            Axis::Height => Some(self.height),
            Axis::Depth => self.depth,
        }
    }

    /// Labelled values in positional order: width, height, then depth.
    pub fn axes(&self) -> Vec<(Axis, f64)> {
        let mut out = vec![(Axis::Width, self.width), (Axis::Height, self.height)];
        if let Some(depth) = self.depth {
            out.push((Axis::Depth, depth));
        }
        out
    }

    fn scaled(self, factor: f64) -> Self {
        Self {
            height: self.height * factor,
            width: self.width * factor,
            depth: self.depth.map(|d| d * factor),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Separator {
    Times,
    By,
}

#[derive(Debug, Clone)]
struct Candidate<'a> {
    start: usize,
    end: usize,
    token: &'a str,
    inches: bool,
}

/// Extracts a [`DimensionSet`] from free text.
///
/// See the module docs for the matching rules and the count policy.
pub fn extract_dimensions(text: &str) -> Result<DimensionSet, ExtractError> {
    let lower = text.to_lowercase();
    let candidates = find_candidates(&lower);

    if candidates.is_empty() {
        return Err(ExtractError::no_dimensions(text));
    }

    let selected = if candidates.len() > 3 {
        let run = first_run(&lower, &candidates);
        tracing::debug!(
            found = candidates.len(),
            kept = run.len().min(3),
            "more than three dimension candidates, using first run"
        );
        run
    } else {
        &candidates[..]
    };
    let selected = &selected[..selected.len().min(3)];

    let values = selected
        .iter()
        .map(|c| parse_decimal(c.token))
        .collect::<Result<Vec<_>, _>>()?;

    let dims = DimensionSet::from_values(&values).ok_or_else(|| ExtractError::no_dimensions(text))?;

    if selected.iter().any(|c| c.inches) {
        Ok(dims.scaled(INCH_TO_CM))
    } else {
        Ok(dims)
    }
}

/// Parses a token that may use `,` as its decimal mark.
fn parse_decimal(token: &str) -> Result<f64, ExtractError> {
    token
        .replace(',', ".")
        .parse::<f64>()
        .map_err(|_| ExtractError::InvalidNumber(token.to_string()))
}

fn find_candidates(text: &str) -> Vec<Candidate<'_>> {
    NUMBER
        .find_iter(text)
        .filter_map(|m| {
            let (start, end) = (m.start(), m.end());

            if touches_slash(text, start, end) || FRACTION_AHEAD.is_match(&text[end..]) {
                return None;
            }

            let before = separator_before(text, start);
            let after = separator_after(text, end);
            let labelled = UNIT_SUFFIXES.iter().any(|u| text[end..].starts_with(u));

            if before.is_none() && after.is_none() && !labelled {
                return None;
            }

            Some(Candidate {
                start,
                end,
                token: m.as_str(),
                inches: before == Some(Separator::By) || after == Some(Separator::By),
            })
        })
        .collect()
}

fn touches_slash(text: &str, start: usize, end: usize) -> bool {
    text[..start].ends_with('/') || text[end..].starts_with('/')
}

/// Drops one leading whitespace character, if any.
fn skip_one_space_front(s: &str) -> &str {
    match s.chars().next() {
        Some(c) if c.is_whitespace() => &s[c.len_utf8()..],
        _ => s,
    }
}

/// Drops one trailing whitespace character, if any.
fn skip_one_space_back(s: &str) -> &str {
    match s.chars().next_back() {
        Some(c) if c.is_whitespace() => &s[..s.len() - c.len_utf8()],
        _ => s,
    }
}

fn ends_with_digit(s: &str) -> bool {
    s.chars().next_back().is_some_and(|c| c.is_ascii_digit())
}

/// True if `s` ends with a number, optionally followed by one space and a
/// unit word: `10`, `10in`, `10 cm`.
fn ends_with_measure(s: &str) -> bool {
    ends_with_digit(s)
        || SEPARATOR_UNITS.iter().any(|unit| {
            s.strip_suffix(unit)
                .is_some_and(|rest| ends_with_digit(skip_one_space_back(rest)))
        })
}

/// Drops a leading unit word (and one space after it) when the word
/// stands on its own.
fn skip_unit_front(s: &str) -> &str {
    for unit in SEPARATOR_UNITS {
        if let Some(rest) = s.strip_prefix(unit) {
            if !rest.chars().next().is_some_and(char::is_alphabetic) {
                return skip_one_space_front(rest);
            }
        }
    }
    s
}

fn separator_before(text: &str, start: usize) -> Option<Separator> {
    let head = skip_one_space_back(&text[..start]);

    for times in ['x', '×'] {
        if let Some(rest) = head.strip_suffix(times) {
            let standalone = !rest.chars().next_back().is_some_and(char::is_alphabetic);
            if standalone || ends_with_measure(rest) {
                return Some(Separator::Times);
            }
        }
    }

    if let Some(rest) = head.strip_suffix("by") {
        if ends_with_measure(skip_one_space_back(rest)) {
            return Some(Separator::By);
        }
    }

    None
}

fn separator_after(text: &str, end: usize) -> Option<Separator> {
    let tail = skip_unit_front(skip_one_space_front(&text[end..]));

    for times in ['x', '×'] {
        if let Some(rest) = tail.strip_prefix(times) {
            if !rest.chars().next().is_some_and(char::is_alphabetic) {
                return Some(Separator::Times);
            }
        }
    }

    if let Some(rest) = tail.strip_prefix("by") {
        let rest = skip_one_space_front(rest);
        if rest.chars().next().is_some_and(|c| c.is_ascii_digit()) {
            return Some(Separator::By);
        }
    }

    None
}

/// Returns the leading candidates that belong to one measurement: each
/// pair of neighbours is separated only by whitespace and [`RUN_LINKS`].
fn first_run<'c, 'a>(text: &str, candidates: &'c [Candidate<'a>]) -> &'c [Candidate<'a>] {
    let len = candidates
        .windows(2)
        .take_while(|pair| is_run_link(&text[pair[0].end..pair[1].start]))
        .count()
        + 1;
    &candidates[..len]
}

fn is_run_link(between: &str) -> bool {
    between.split_whitespace().all(|piece| {
        let mut rest = piece;
        while !rest.is_empty() {
            match RUN_LINKS.iter().find_map(|link| rest.strip_prefix(link)) {
                Some(next) => rest = next,
                None => return false,
            }
        }
        true
    })
}
