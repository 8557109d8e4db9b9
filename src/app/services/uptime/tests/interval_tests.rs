//! Tests for interval merging and coverage arithmetic

use super::super::interval::{Interval, merge_intervals, total_covered};

fn intervals(pairs: &[(u64, u64)]) -> Vec<Interval> {
    pairs.iter().map(|&(s, e)| Interval::new(s, e)).collect()
}

#[test]
fn test_merge_empty() {
    assert!(merge_intervals(Vec::new()).is_empty());
}

#[test]
fn test_merge_single_interval() {
    let merged = merge_intervals(intervals(&[(5, 10)]));
    assert_eq!(merged, intervals(&[(5, 10)]));
}

#[test]
fn test_merge_non_overlapping_stay_separate() {
    let merged = merge_intervals(intervals(&[(0, 10), (20, 30), (40, 50)]));
    assert_eq!(merged, intervals(&[(0, 10), (20, 30), (40, 50)]));
}

#[test]
fn test_merge_overlapping() {
    let merged = merge_intervals(intervals(&[(0, 15), (10, 30)]));
    assert_eq!(merged, intervals(&[(0, 30)]));
}

#[test]
fn test_merge_exactly_adjacent() {
    // Touching intervals collapse; no gap at a shared boundary
    let merged = merge_intervals(intervals(&[(0, 10), (10, 20)]));
    assert_eq!(merged, intervals(&[(0, 20)]));
}

#[test]
fn test_merge_contained_interval() {
    let merged = merge_intervals(intervals(&[(0, 100), (20, 30)]));
    assert_eq!(merged, intervals(&[(0, 100)]));
}

#[test]
fn test_merge_same_start_different_end() {
    let merged = merge_intervals(intervals(&[(5, 10), (5, 50)]));
    assert_eq!(merged, intervals(&[(5, 50)]));
}

#[test]
fn test_merge_unsorted_input() {
    let merged = merge_intervals(intervals(&[(40, 50), (0, 10), (20, 30), (8, 22)]));
    assert_eq!(merged, intervals(&[(0, 30), (40, 50)]));
}

#[test]
fn test_merge_chain_of_overlaps() {
    let merged = merge_intervals(intervals(&[(0, 5), (4, 9), (8, 13), (12, 17)]));
    assert_eq!(merged, intervals(&[(0, 17)]));
}

#[test]
fn test_merged_output_is_sorted_and_strictly_separated() {
    let merged = merge_intervals(intervals(&[(30, 35), (0, 10), (9, 12), (50, 60)]));
    for pair in merged.windows(2) {
        assert!(pair[0].end < pair[1].start);
    }
}

#[test]
fn test_merge_is_idempotent() {
    let once = merge_intervals(intervals(&[(0, 10), (5, 20), (20, 25), (40, 45)]));
    let twice = merge_intervals(once.clone());
    assert_eq!(once, twice);
}

#[test]
fn test_merge_preserves_union_length() {
    // [0,10) u [5,20) u [30,40) has length 30
    let merged = merge_intervals(intervals(&[(0, 10), (5, 20), (30, 40)]));
    assert_eq!(total_covered(&merged), 30);
}

#[test]
fn test_total_covered_empty() {
    assert_eq!(total_covered(&[]), 0);
}

#[test]
fn test_total_covered_sums_disjoint_lengths() {
    assert_eq!(total_covered(&intervals(&[(0, 10), (20, 25)])), 15);
}

#[test]
fn test_large_u64_values() {
    let near_max = u64::MAX - 1000;
    let merged = merge_intervals(intervals(&[(near_max, u64::MAX), (near_max - 50, near_max)]));
    assert_eq!(merged, intervals(&[(near_max - 50, u64::MAX)]));
    assert_eq!(total_covered(&merged), 1050);
}
