use serde::Serialize;

use crate::category::Category;
use crate::run::Run;

/// A run together with its text, as handed to plugin callers.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    pub start: usize,
    pub end: usize,
}

impl<'a> Token<'a> {
    pub fn new(source: &'a str, run: Run, category: Option<Category>) -> Self {
        Token {
            text: run.text(source),
            category,
            start: run.start,
            end: run.end,
        }
    }
}
