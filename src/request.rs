//! JSON requests and responses behind the wasm plugin functions.
//!
//! Kept separate from the exports so it can be tested on the host.

use serde::Deserialize;
use tracing::debug;

use crate::category::Category;
use crate::coalesce::CoalesceOptions;
use crate::error::{Error, Result};
use crate::groups::classify;
use crate::intersect::filter_runs_by_intervals;
use crate::token::Token;

/// Parameters of [`extract`].
///
/// ```json
/// {"categories": ["letter", "digit"], "min_len": 4, "max_len": 4,
///  "boundary_check": true, "intervals": [[0, 20]]}
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExtractRequest {
    /// Category names; unknown names select nothing
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(flatten)]
    pub options: CoalesceOptions,
    /// `[start, end]` pairs to clip the result to; other lengths are dropped
    #[serde(default)]
    pub intervals: Option<Vec<Vec<usize>>>,
}

/// Every run of `text` in source order, with its category.
pub fn annotate(text: &str) -> Vec<Token<'_>> {
    classify(text)
        .segments()
        .into_iter()
        .map(|(category, run)| Token::new(text, run, Some(category)))
        .collect()
}

/// Coalesced runs of the requested categories, optionally clipped to
/// `request.intervals`.
pub fn extract<'a>(text: &'a str, request: &ExtractRequest) -> Vec<Token<'a>> {
    let categories: Vec<Category> = request
        .categories
        .iter()
        .filter_map(|name| {
            let category = Category::from_name(name);
            if category.is_none() {
                debug!(name = name.as_str(), "unknown category, selecting nothing");
            }
            category
        })
        .collect();

    let groups = classify(text);
    let mut runs = groups.merge_with_options(text, &request.options, &categories);

    if let Some(intervals) = &request.intervals {
        let ranges: Vec<_> = intervals
            .iter()
            .filter_map(|pair| match pair.as_slice() {
                &[start, end] => Some(start..end),
                _ => None,
            })
            .collect();
        if ranges.len() < intervals.len() {
            debug!(
                dropped = intervals.len() - ranges.len(),
                "ignoring intervals that are not [start, end] pairs"
            );
        }
        runs = filter_runs_by_intervals(&ranges, &runs);
    }

    runs.into_iter()
        .map(|run| Token::new(text, run, None))
        .collect()
}

/// Bytes-in, JSON-out form of [`annotate`].
pub fn annotate_json(input: &[u8]) -> Result<Vec<u8>> {
    let text = std::str::from_utf8(input)?;
    debug!(len = text.len(), "annotate");
    serde_json::to_vec(&annotate(text)).map_err(Error::Encode)
}

/// Bytes-in, JSON-out form of [`extract`]. `request` is an
/// [`ExtractRequest`] as JSON.
pub fn extract_json(input: &[u8], request: &[u8]) -> Result<Vec<u8>> {
    let text = std::str::from_utf8(input)?;
    let request: ExtractRequest = serde_json::from_slice(request).map_err(Error::Request)?;
    debug!(len = text.len(), ?request, "extract");
    serde_json::to_vec(&extract(text, &request)).map_err(Error::Encode)
}
