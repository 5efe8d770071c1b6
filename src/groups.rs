use serde::Serialize;

use crate::category::Category;
use crate::coalesce::{CoalesceOptions, coalesce};
use crate::merge::merge_sorted;
use crate::run::Run;

/// The runs of one classified string, one ascending sequence per category.
///
/// Built once by [`classify`] and read-only afterwards. Together the five
/// sequences tile the whole source string with no gaps or overlaps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Groups {
    han: Vec<Run>,
    letter: Vec<Run>,
    digit: Vec<Run>,
    common: Vec<Run>,
    other: Vec<Run>,
}

impl Groups {
    pub fn runs_for(&self, category: Category) -> &[Run] {
        match category {
            Category::Han => &self.han,
            Category::Letter => &self.letter,
            Category::Digit => &self.digit,
            Category::Common => &self.common,
            Category::Other => &self.other,
        }
    }

    /// Like [`Groups::runs_for`], by name. Unknown names give an empty slice.
    pub fn runs_for_name(&self, name: &str) -> &[Run] {
        match Category::from_name(name) {
            Some(category) => self.runs_for(category),
            None => &[],
        }
    }

    /// Total number of runs across all categories.
    pub fn len(&self) -> usize {
        Category::ALL.iter().map(|&c| self.runs_for(c).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All runs of the requested categories, ascending by `start`.
    ///
    /// A category listed twice contributes its runs twice. When two runs
    /// share a `start` (only possible through such duplicates) the one from
    /// the category listed first comes first.
    pub fn merge_categories(&self, categories: &[Category]) -> Vec<Run> {
        match categories {
            [] => Vec::new(),
            [single] => self.runs_for(*single).to_vec(),
            _ => merge_sorted(&self.sequences(categories))
                .into_iter()
                .map(|(_, run)| run)
                .collect(),
        }
    }

    /// [`Groups::merge_categories`] followed by [`coalesce`]: touching runs
    /// are fused, then filtered by length (`0` means unbounded) and, with
    /// `boundary_check`, by their neighbouring characters in `source`.
    ///
    /// `source` must be the string these groups were classified from.
    pub fn merge_categories_coalesced(
        &self,
        source: &str,
        boundary_check: bool,
        max_len: usize,
        min_len: usize,
        categories: &[Category],
    ) -> Vec<Run> {
        let options = CoalesceOptions::new()
            .with_boundary_check(boundary_check)
            .with_max_len(max_len)
            .with_min_len(min_len);
        self.merge_with_options(source, &options, categories)
    }

    pub fn merge_with_options(
        &self,
        source: &str,
        options: &CoalesceOptions,
        categories: &[Category],
    ) -> Vec<Run> {
        let merged = self.merge_categories(categories);
        coalesce(&merged, Some(source), options)
    }

    /// Every run in source order, tagged with its category.
    pub fn segments(&self) -> Vec<(Category, Run)> {
        merge_sorted(&self.sequences(&Category::ALL))
    }

    fn sequences(&self, categories: &[Category]) -> Vec<(Category, &[Run])> {
        categories
            .iter()
            .map(|&category| (category, self.runs_for(category)))
            .collect()
    }

    fn push(&mut self, category: Category, run: Run) {
        let runs = match category {
            Category::Han => &mut self.han,
            Category::Letter => &mut self.letter,
            Category::Digit => &mut self.digit,
            Category::Common => &mut self.common,
            Category::Other => &mut self.other,
        };
        runs.push(run);
    }
}

/// Split `source` into maximal runs of same-category characters.
///
/// One pass over the characters; a run closes whenever the category changes
/// and the last one is closed at `source.len()`. Offsets are byte offsets and
/// always land on character boundaries. The empty string gives empty groups.
pub fn classify(source: &str) -> Groups {
    let mut groups = Groups::default();

    // category and start offset of the run being built
    let mut open: Option<(Category, usize)> = None;

    for (i, ch) in source.char_indices() {
        let category = Category::of(ch);
        match open {
            Some((current, _)) if current == category => {}
            Some((current, start)) => {
                groups.push(current, Run::new(start, i));
                open = Some((category, i));
            }
            None => open = Some((category, i)),
        }
    }

    if let Some((current, start)) = open {
        groups.push(current, Run::new(start, source.len()));
    }

    groups
}
