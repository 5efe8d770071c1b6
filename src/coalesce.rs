use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::run::Run;
use crate::utils::is_boundary_illegal;

/// Filters applied to runs after adjacent ones have been fused.
///
/// A length of `0` disables that bound. The default keeps everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoalesceOptions {
    /// Reject runs whose outer neighbours are letters, digits or one of
    /// `. * - _ | %`.
    pub boundary_check: bool,
    /// Maximum run length in bytes
    pub max_len: usize,
    /// Minimum run length in bytes
    pub min_len: usize,
}

impl CoalesceOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_boundary_check(mut self, boundary_check: bool) -> Self {
        self.boundary_check = boundary_check;
        self
    }

    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = max_len;
        self
    }

    pub fn with_min_len(mut self, min_len: usize) -> Self {
        self.min_len = min_len;
        self
    }

    pub fn accepts_len(&self, len: usize) -> bool {
        len >= self.min_len && (self.max_len == 0 || len <= self.max_len)
    }
}

/// Fuse runs that touch end-to-start and keep the ones passing `options`.
///
/// `runs` should be sorted by `start` and non-overlapping, as
/// [`Groups::merge_categories`](crate::Groups::merge_categories) returns them.
/// Input that breaks this is not rejected: only runs where
/// `previous.end == next.start` are fused, everything else passes through
/// the filters in input order. Empty runs are skipped.
///
/// `source` is only read for the boundary check. If the check is requested
/// without a source it is skipped.
pub fn coalesce(runs: &[Run], source: Option<&str>, options: &CoalesceOptions) -> Vec<Run> {
    let boundary_source = match (options.boundary_check, source) {
        (true, None) => {
            debug!("boundary check requested without a source string, skipping it");
            None
        }
        (true, Some(source)) => Some(source),
        (false, _) => None,
    };
    let keep = |run: &Run| {
        options.accepts_len(run.len())
            && boundary_source.is_none_or(|source| is_on_token_boundary(source, run))
    };

    let mut valid = runs.iter().copied().filter(|run| !run.is_empty());
    let Some(mut current) = valid.next() else {
        return Vec::new();
    };

    let mut result = Vec::with_capacity(runs.len());
    for run in valid {
        if current.end == run.start {
            current.end = run.end;
        } else {
            if keep(&current) {
                result.push(current);
            }
            current = run;
        }
    }
    if keep(&current) {
        result.push(current);
    }

    result
}

/// False if the character right before or right after `run` in `source`
/// suggests the run was cut out of a longer token. Runs that do not fit
/// `source` on character boundaries fail the check.
fn is_on_token_boundary(source: &str, run: &Run) -> bool {
    let (Some(before), Some(after)) = (source.get(..run.start), source.get(run.end..)) else {
        trace!(start = run.start, end = run.end, "run does not fit the source string");
        return false;
    };
    let glued = before.chars().next_back().is_some_and(is_boundary_illegal)
        || after.chars().next().is_some_and(is_boundary_illegal);
    if glued {
        trace!(start = run.start, end = run.end, "run rejected at token boundary");
    }
    !glued
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runs(pairs: &[(usize, usize)]) -> Vec<Run> {
        pairs.iter().map(|&(s, e)| Run::new(s, e)).collect()
    }

    #[test]
    fn test_fuses_touching_runs() {
        let cases: Vec<(Vec<(usize, usize)>, Vec<(usize, usize)>)> = vec![
            // nothing touches
            (vec![(0, 2), (3, 5)], vec![(0, 2), (3, 5)]),
            // two touch
            (vec![(0, 2), (2, 5), (7, 8)], vec![(0, 5), (7, 8)]),
            // transitive
            (vec![(0, 1), (1, 2), (2, 3), (3, 4)], vec![(0, 4)]),
            // single run
            (vec![(4, 9)], vec![(4, 9)]),
            // empty input
            (vec![], vec![]),
        ];
        for (input, expected) in cases {
            let result = coalesce(&runs(&input), None, &CoalesceOptions::new());
            assert_eq!(result, runs(&expected), "coalescing {:?}", input);
        }
    }

    #[test]
    fn test_length_filter_after_fusion() {
        let input = runs(&[(0, 2), (2, 4), (6, 7), (9, 12)]);

        let exact = CoalesceOptions::new().with_min_len(3).with_max_len(3);
        assert_eq!(coalesce(&input, None, &exact), runs(&[(9, 12)]));

        // fused length counts, not the pieces
        let at_most_three = CoalesceOptions::new().with_max_len(3);
        assert_eq!(coalesce(&input, None, &at_most_three), runs(&[(6, 7), (9, 12)]));

        let at_least_two = CoalesceOptions::new().with_min_len(2);
        assert_eq!(coalesce(&input, None, &at_least_two), runs(&[(0, 4), (9, 12)]));

        // single run is still filtered
        assert!(coalesce(&runs(&[(0, 1)]), None, &at_least_two).is_empty());
    }

    #[test]
    fn test_boundary_check() {
        let options = CoalesceOptions::new().with_boundary_check(true);
        let cases = [
            // (source, run, kept)
            ("2023年", (0, 4), true),
            ("在2023年", (3, 7), true),
            ("A2023", (1, 5), false),
            ("2023B", (0, 4), false),
            ("12023", (1, 5), false),
            ("v.2023", (2, 6), false),
            ("x-2023", (2, 6), false),
            ("2023%", (0, 4), false),
            ("a|2023", (2, 6), false),
            ("(2023)", (1, 5), true),
            (" 2023 ", (1, 5), true),
            ("2023", (0, 4), true),
            // é is a letter
            ("é2023", (2, 6), false),
            // not on a character boundary
            ("年2023", (1, 7), false),
        ];
        for (source, (start, end), kept) in cases {
            let result = coalesce(&[Run::new(start, end)], Some(source), &options);
            assert_eq!(!result.is_empty(), kept, "boundary check of {:?} in {:?}", (start, end), source);
        }
    }

    #[test]
    fn test_boundary_check_without_source_is_skipped() {
        let options = CoalesceOptions::new().with_boundary_check(true);
        assert_eq!(coalesce(&runs(&[(1, 5)]), None, &options), runs(&[(1, 5)]));
    }

    #[test]
    fn test_unsorted_input_passes_through() {
        // out of order and overlapping: nothing touches exactly, nothing panics
        let input = runs(&[(5, 8), (0, 5), (3, 9)]);
        assert_eq!(coalesce(&input, None, &CoalesceOptions::new()), input);
        // an out-of-order pair that happens to touch is still fused
        let input = runs(&[(5, 8), (8, 9), (0, 2)]);
        assert_eq!(
            coalesce(&input, None, &CoalesceOptions::new()),
            runs(&[(5, 9), (0, 2)])
        );
    }

    #[test]
    fn test_empty_runs_skipped() {
        let input = runs(&[(0, 0), (3, 3), (7, 2)]);
        assert!(coalesce(&input, None, &CoalesceOptions::new()).is_empty());
    }

    #[test]
    fn test_options_deserialize_with_defaults() {
        let options: CoalesceOptions = serde_json::from_str(r#"{"max_len": 4}"#).unwrap();
        assert_eq!(options, CoalesceOptions::new().with_max_len(4));
        let options: CoalesceOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, CoalesceOptions::default());
    }
}
