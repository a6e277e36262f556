//! Sentence-range chunking for the parallel path
//!
//! Chunks are contiguous sentence ranges, one per worker, sized as
//! evenly as possible. A static partition is enough here: chunk cost is
//! roughly proportional to token count, so work stealing would buy
//! nothing and would cost determinism bookkeeping.

use std::ops::Range;

/// Partition `total` sentences into at most `workers` contiguous
/// near-equal ranges.
///
/// Never returns an empty range; with more workers than sentences the
/// extra workers simply get no chunk. The ranges are ascending and
/// cover `0..total` exactly.
pub fn partition(total: usize, workers: usize) -> Vec<Range<usize>> {
    if total == 0 || workers == 0 {
        return Vec::new();
    }
    let workers = workers.min(total);
    let base = total / workers;
    let extra = total % workers;

    let mut ranges = Vec::with_capacity(workers);
    let mut start = 0;
    for index in 0..workers {
        let len = base + usize::from(index < extra);
        ranges.push(start..start + len);
        start += len;
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_covers(total: usize, workers: usize) {
        let ranges = partition(total, workers);
        let mut expected_start = 0;
        for range in &ranges {
            assert_eq!(range.start, expected_start);
            assert!(!range.is_empty());
            expected_start = range.end;
        }
        assert_eq!(expected_start, total);
    }

    #[test]
    fn ranges_cover_the_sequence_exactly() {
        assert_covers(10, 3);
        assert_covers(100, 8);
        assert_covers(7, 7);
        assert_covers(1, 4);
    }

    #[test]
    fn chunk_sizes_differ_by_at_most_one() {
        let ranges = partition(10, 3);
        let sizes: Vec<usize> = ranges.iter().map(|r| r.len()).collect();
        assert_eq!(sizes, vec![4, 3, 3]);
    }

    #[test]
    fn more_workers_than_sentences_caps_the_chunk_count() {
        assert_eq!(partition(2, 8).len(), 2);
    }

    #[test]
    fn degenerate_inputs_yield_no_chunks() {
        assert!(partition(0, 4).is_empty());
        assert!(partition(5, 0).is_empty());
    }
}
