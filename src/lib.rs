mod category;
mod coalesce;
mod error;
mod groups;
mod intersect;
mod merge;
mod run;
mod token;
mod utils;
pub mod request;

pub use category::Category;
pub use coalesce::{CoalesceOptions, coalesce};
pub use error::{Error, Result};
pub use groups::{Groups, classify};
pub use intersect::filter_runs_by_intervals;
pub use merge::merge_sorted;
pub use run::Run;
pub use token::Token;
pub use utils::{BOUNDARY_SYMBOLS, COMMON_CHARS, is_decimal_digit, is_han, is_letter};

/// Typst plugin exports. The JSON handling lives in [`request`].
#[cfg(target_arch = "wasm32")]
mod plugin {
    use wasm_minimal_protocol::*;

    initiate_protocol!();

    /// Input: UTF-8 text
    /// Output: JSON array of `{text, category, start, end}` in source order
    #[wasm_func]
    pub fn annotate(input: &[u8]) -> Result<Vec<u8>, crate::Error> {
        crate::request::annotate_json(input)
    }

    /// Input: UTF-8 text and a JSON [`ExtractRequest`](crate::request::ExtractRequest)
    /// Output: JSON array of `{text, start, end}`
    #[wasm_func]
    pub fn extract(input: &[u8], request: &[u8]) -> Result<Vec<u8>, crate::Error> {
        crate::request::extract_json(input, request)
    }
}
