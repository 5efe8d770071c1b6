use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::run::Run;

/// K-way merge of run sequences that are each already sorted by `start`.
///
/// Every input run appears exactly once in the output, carrying the tag of the
/// sequence it came from. The heap holds one cursor per sequence, so this is
/// O(n log k) for n runs in k sequences instead of a full re-sort.
///
/// Ties on `start` go to the sequence listed first; runs of one sequence keep
/// their relative order.
pub fn merge_sorted<T: Copy>(sequences: &[(T, &[Run])]) -> Vec<(T, Run)> {
    let total = sequences.iter().map(|(_, runs)| runs.len()).sum();
    let mut merged = Vec::with_capacity(total);

    // (start, sequence index, position in sequence), smallest first
    let mut heap: BinaryHeap<Reverse<(usize, usize, usize)>> =
        BinaryHeap::with_capacity(sequences.len());
    for (seq, (_, runs)) in sequences.iter().enumerate() {
        if let Some(first) = runs.first() {
            heap.push(Reverse((first.start, seq, 0)));
        }
    }

    while let Some(Reverse((_, seq, pos))) = heap.pop() {
        let (tag, runs) = sequences[seq];
        merged.push((tag, runs[pos]));
        if let Some(next) = runs.get(pos + 1) {
            heap.push(Reverse((next.start, seq, pos + 1)));
        }
    }

    merged
}
