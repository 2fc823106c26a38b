//! # Collection Showcase
//!
//! Fixed inputs run through the [`sequences`](crate::sequences) functions.
//! Each function builds or transforms one small collection so it can be
//! printed by the demo runner and asserted in tests.

use std::fmt::Display;
use std::iter::StepBy;
use std::ops::{Range, RangeInclusive};

use indexmap::{IndexMap, IndexSet};

use crate::error::CollectionError;
use crate::sequences::{self, WindowSpec};

// =============================================================================
// Construction
// =============================================================================

pub fn immutable_list() -> &'static [i32] {
    &[1, 2, 3]
}

/// An owned list the caller is free to grow.
pub fn mutable_list() -> Vec<i32> {
    vec![1, 2, 3]
}

/// Built from `["a", "b", "a"]`; the repeat is dropped.
pub fn immutable_set() -> IndexSet<&'static str> {
    ["a", "b", "a"].into_iter().collect()
}

pub fn mutable_set() -> IndexSet<String> {
    ["a", "b"].into_iter().map(String::from).collect()
}

pub fn immutable_map() -> IndexMap<&'static str, i32> {
    IndexMap::from([("one", 1), ("two", 2)])
}

pub fn mutable_map() -> IndexMap<String, i32> {
    immutable_map()
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

pub fn int_array() -> [i32; 3] {
    [1, 2, 3]
}

pub fn string_array() -> [&'static str; 2] {
    ["x", "y"]
}

// =============================================================================
// Ranges
// =============================================================================

pub fn int_range_inclusive() -> RangeInclusive<i32> {
    1..=5
}

pub fn int_range_exclusive() -> Range<i32> {
    1..5
}

pub fn int_range_step() -> StepBy<RangeInclusive<i32>> {
    (0..=10).step_by(2)
}

pub fn char_range() -> RangeInclusive<char> {
    'a'..='e'
}

// =============================================================================
// Sequences, pairs and triples
// =============================================================================

pub fn squares_sequence(n: u32) -> Vec<u64> {
    sequences::squares(n).collect()
}

pub fn pair_and_triple() -> ((i32, &'static str), (i32, i32, i32)) {
    ((1, "one"), (1, 2, 3))
}

// =============================================================================
// Core operations on fixed inputs
// =============================================================================

// The scenario arithmetic below is total over `i32`: results wrap on overflow.

/// Keep the even numbers and scale them by ten.
pub fn map_filter(numbers: &[i32]) -> Vec<i32> {
    sequences::filter_then_map(numbers, |n| n % 2 == 0, |n| n.wrapping_mul(10))
}

pub fn reduce_sum(numbers: &[i32]) -> Result<i32, CollectionError> {
    sequences::reduce(numbers.iter().copied(), i32::wrapping_add)
}

pub fn fold_product(numbers: &[i32]) -> i32 {
    sequences::fold(numbers.iter().copied(), 1, i32::wrapping_mul)
}

pub fn group_by_parity(numbers: &[i32]) -> IndexMap<&'static str, Vec<i32>> {
    sequences::group_by(numbers.iter().copied(), |n| {
        if n % 2 == 0 {
            "even"
        } else {
            "odd"
        }
    })
}

pub fn associate_by_length<S: AsRef<str>>(words: &[S]) -> IndexMap<usize, Vec<String>> {
    sequences::group_by(words.iter().map(|w| w.as_ref().to_string()), |w| {
        w.chars().count()
    })
}

/// `"{a}-{b}"` for each positional pair.
pub fn zip_lists<A: Display, B: Display>(a: &[A], b: &[B]) -> Vec<String> {
    sequences::zip_with(a, b, |x, y| format!("{x}-{y}"))
}

pub fn flatten_lists(matrix: &[Vec<i32>]) -> Vec<i32> {
    sequences::flatten(matrix.iter().map(|row| row.iter().copied()))
}

pub fn flat_map_tokens<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    sequences::tokenize(lines)
}

pub fn distinct_sorted(numbers: &[i32]) -> Vec<i32> {
    sequences::distinct_sorted(numbers)
}

pub const TAKE_COUNT: usize = 3;

pub fn take_drop(numbers: &[i32]) -> (Vec<i32>, Vec<i32>) {
    sequences::take_drop(numbers, TAKE_COUNT)
}

pub const CHUNK_SIZE: usize = 3;
pub const WINDOW: WindowSpec = WindowSpec {
    size: 3,
    step: 2,
    partial: false,
};

/// Chunks of three alongside windows of three advancing by two.
pub fn chunked_windowed(
    numbers: &[i32],
) -> Result<(Vec<Vec<i32>>, Vec<Vec<i32>>), CollectionError> {
    Ok((
        sequences::chunk(numbers, CHUNK_SIZE)?,
        sequences::window(numbers, WINDOW)?,
    ))
}

pub fn add_to_list(list: &[i32], value: i32) -> Vec<i32> {
    sequences::with_appended(list, value)
}

pub fn put_in_map(map: &IndexMap<String, i32>, key: &str, value: i32) -> IndexMap<String, i32> {
    sequences::with_entry(map, key.to_string(), value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_immutable_and_mutable_basics() {
        assert_eq!(immutable_list(), &[1, 2, 3]);
        assert_eq!(immutable_set().into_iter().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(immutable_map(), IndexMap::from([("one", 1), ("two", 2)]));

        let mut list = mutable_list();
        list.push(4);
        assert_eq!(list, vec![1, 2, 3, 4]);

        let mut set = mutable_set();
        set.insert("c".to_string());
        assert_eq!(set.len(), 3);
        assert!(set.contains("c"));

        let mut map = mutable_map();
        map.insert("three".to_string(), 3);
        let keys: Vec<_> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_arrays_and_ranges() {
        assert_eq!(int_array(), [1, 2, 3]);
        assert_eq!(string_array(), ["x", "y"]);
        assert_eq!(int_range_inclusive().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
        assert_eq!(int_range_exclusive().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        assert_eq!(int_range_step().collect::<Vec<_>>(), vec![0, 2, 4, 6, 8, 10]);
        assert_eq!(char_range().collect::<String>(), "abcde");
    }

    #[test]
    fn test_sequences_and_pairs() {
        assert_eq!(squares_sequence(5), vec![1, 4, 9, 16, 25]);
        let (pair, triple) = pair_and_triple();
        assert_eq!(pair, (1, "one"));
        assert_eq!(triple, (1, 2, 3));
    }

    #[test]
    fn test_core_operations() {
        assert_eq!(map_filter(&[1, 2, 3, 4]), vec![20, 40]);
        assert_eq!(reduce_sum(&[1, 2, 3, 4, 5]), Ok(15));
        assert!(reduce_sum(&[]).is_err());
        assert_eq!(fold_product(&[1, 2, 3, 4, 5]), 120);
        assert_eq!(fold_product(&[]), 1);
    }

    #[test]
    fn test_scenario_arithmetic_wraps_at_extremes() {
        assert_eq!(map_filter(&[i32::MAX - 1]), vec![(i32::MAX - 1).wrapping_mul(10)]);
        assert_eq!(map_filter(&[i32::MIN, i32::MAX]), vec![i32::MIN.wrapping_mul(10)]);
        assert_eq!(reduce_sum(&[i32::MAX, 1]), Ok(i32::MIN));
        assert_eq!(reduce_sum(&[i32::MIN, -1]), Ok(i32::MAX));
        assert_eq!(fold_product(&[65_536, 65_536]), 0);
        assert_eq!(fold_product(&[i32::MIN, -1]), i32::MIN);
    }

    #[test]
    fn test_group_by_parity() {
        let grouped = group_by_parity(&[1, 2, 3, 4, 5]);
        assert_eq!(grouped["even"], vec![2, 4]);
        assert_eq!(grouped["odd"], vec![1, 3, 5]);
        assert_eq!(grouped.len(), 2);
    }

    #[test]
    fn test_associate_by_length() {
        let by_len = associate_by_length(&["a", "bb", "cc", "ddd"]);
        assert_eq!(by_len[&1], vec!["a"]);
        assert_eq!(by_len[&2], vec!["bb", "cc"]);
        assert_eq!(by_len[&3], vec!["ddd"]);
    }

    #[test]
    fn test_zip_flatten_tokens() {
        assert_eq!(zip_lists(&[1, 2, 3], &["a", "b", "c"]), vec!["1-a", "2-b", "3-c"]);
        assert_eq!(zip_lists(&[1, 2, 3], &["a"]), vec!["1-a"]);
        assert_eq!(
            flatten_lists(&[vec![1, 2, 3], vec![4, 5, 6]]),
            vec![1, 2, 3, 4, 5, 6]
        );
        assert_eq!(
            flat_map_tokens(&["hello world", "kotlin  collections"]),
            vec!["hello", "world", "kotlin", "collections"]
        );
    }

    #[test]
    fn test_distinct_sorted_and_slicing() {
        assert_eq!(distinct_sorted(&[3, 1, 2, 3, 4, 2]), vec![1, 2, 3, 4]);

        let (take3, drop3) = take_drop(&[1, 2, 3, 4, 5]);
        assert_eq!(take3, vec![1, 2, 3]);
        assert_eq!(drop3, vec![4, 5]);

        let (chunked, windowed) = chunked_windowed(&[1, 2, 3, 4, 5, 6, 7]).unwrap();
        assert_eq!(chunked, vec![vec![1, 2, 3], vec![4, 5, 6], vec![7]]);
        assert_eq!(windowed, vec![vec![1, 2, 3], vec![3, 4, 5], vec![5, 6, 7]]);
    }

    #[test]
    fn test_pure_mutable_helpers() {
        let list = [1, 2, 3];
        assert_eq!(add_to_list(&list, 9), vec![1, 2, 3, 9]);
        assert_eq!(list, [1, 2, 3]);

        let map = mutable_map();
        let updated = put_in_map(&map, "x", 99);
        assert_eq!(
            updated,
            IndexMap::from([
                ("one".to_string(), 1),
                ("two".to_string(), 2),
                ("x".to_string(), 99),
            ])
        );
        assert_eq!(map.len(), 2);
    }
}
