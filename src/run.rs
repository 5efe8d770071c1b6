use std::ops::Range;

use serde::{Deserialize, Serialize};

/// A half-open `[start, end)` byte range into the string it was computed from.
///
/// A run never owns text; use [`Run::text`] with the original string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Run {
    pub start: usize,
    pub end: usize,
}

impl Run {
    pub fn new(start: usize, end: usize) -> Self {
        Run { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// True for zero-length and inverted runs. The library never returns one.
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// The slice of `source` this run covers, or `""` if the run is empty or
    /// its offsets are out of bounds or not on character boundaries.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        if self.is_empty() {
            return "";
        }
        source.get(self.start..self.end).unwrap_or("")
    }

    /// Overlap of two runs, `None` when they only touch or are disjoint.
    pub fn intersect(&self, other: &Run) -> Option<Run> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        (start < end).then_some(Run { start, end })
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<Range<usize>> for Run {
    fn from(range: Range<usize>) -> Self {
        Run::new(range.start, range.end)
    }
}
