//! # Sequence Transformations
//!
//! Pure functions over ordered sequences, sets and insertion-ordered maps.
//! Nothing in here keeps state between calls or mutates its input: helpers
//! that "add" to a container hand back a fresh copy.
//!
//! Most functions borrow a slice and clone what they emit. Those that take
//! `impl IntoIterator` consume their input, so callers pick whether to pass
//! `vec` or `vec.iter().copied()`.

use std::hash::Hash;

use indexmap::{IndexMap, IndexSet};
use itertools::Itertools;

use crate::error::CollectionError;

// =============================================================================
// Map / filter composition
// =============================================================================

/// Transform every element, then keep the results matching `predicate`.
pub fn map_then_filter<T, U, M, P>(items: &[T], transform: M, predicate: P) -> Vec<U>
where
    M: Fn(&T) -> U,
    P: Fn(&U) -> bool,
{
    items.iter().map(transform).filter(|value| predicate(value)).collect()
}

/// Keep the elements matching `predicate`, then transform the survivors.
pub fn filter_then_map<T, U, P, M>(items: &[T], predicate: P, transform: M) -> Vec<U>
where
    P: Fn(&T) -> bool,
    M: Fn(&T) -> U,
{
    items.iter().filter(|item| predicate(*item)).map(transform).collect()
}

/// Split into (matching, rest), keeping the original order on both sides.
pub fn partition<T, P>(items: &[T], predicate: P) -> (Vec<T>, Vec<T>)
where
    T: Clone,
    P: Fn(&T) -> bool,
{
    items.iter().cloned().partition(|item| predicate(item))
}

// =============================================================================
// Reductions
// =============================================================================

/// Combine left to right with no seed. An empty sequence has no identity to
/// fall back on, so it is an error.
pub fn reduce<T, F>(items: impl IntoIterator<Item = T>, op: F) -> Result<T, CollectionError>
where
    F: FnMut(T, T) -> T,
{
    items
        .into_iter()
        .reduce(op)
        .ok_or_else(|| CollectionError::empty_input("reduce"))
}

/// Combine left to right starting from `seed`. Empty input returns the seed.
pub fn fold<T, A, F>(items: impl IntoIterator<Item = T>, seed: A, op: F) -> A
where
    F: FnMut(A, T) -> A,
{
    items.into_iter().fold(seed, op)
}

// =============================================================================
// Grouping
// =============================================================================

/// Group elements by a computed key in a single pass.
///
/// Groups appear in the order their key was first seen and each group keeps
/// the relative order of its members.
pub fn group_by<T, K, F>(items: impl IntoIterator<Item = T>, key_fn: F) -> IndexMap<K, Vec<T>>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    items.into_iter().fold(IndexMap::new(), |mut groups, item| {
        groups.entry(key_fn(&item)).or_insert_with(Vec::new).push(item);
        groups
    })
}

// =============================================================================
// Zipping and flattening
// =============================================================================

/// Pair elements positionally. The longer side's tail is dropped.
pub fn zip_with<A, B, R, F>(
    left: impl IntoIterator<Item = A>,
    right: impl IntoIterator<Item = B>,
    mut combine: F,
) -> Vec<R>
where
    F: FnMut(A, B) -> R,
{
    left.into_iter()
        .zip(right)
        .map(|(a, b)| combine(a, b))
        .collect()
}

pub fn flatten<T, I>(nested: impl IntoIterator<Item = I>) -> Vec<T>
where
    I: IntoIterator<Item = T>,
{
    nested.into_iter().flatten().collect()
}

/// Expand each element into zero or more values and keep those accepted by
/// `keep`. Output order is outer element first, then emission order.
pub fn flat_map_filter<T, U, I, E, K>(items: impl IntoIterator<Item = T>, expand: E, mut keep: K) -> Vec<U>
where
    E: FnMut(T) -> I,
    I: IntoIterator<Item = U>,
    K: FnMut(&U) -> bool,
{
    items
        .into_iter()
        .flat_map(expand)
        .filter(|value| keep(value))
        .collect()
}

/// Split every line on whitespace. Runs of whitespace collapse, so no empty
/// token is ever produced.
pub fn tokenize<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    flat_map_filter(
        lines,
        |line| line.as_ref().split(char::is_whitespace),
        |token| !token.is_empty(),
    )
    .into_iter()
    .map(str::to_owned)
    .collect()
}

// =============================================================================
// Distinct / slicing
// =============================================================================

/// Remove duplicates and sort ascending.
pub fn distinct_sorted<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    items.iter().cloned().sorted().dedup().collect()
}

/// First `n` elements, or the whole sequence when `n` exceeds its length.
pub fn take<T: Clone>(items: &[T], n: usize) -> Vec<T> {
    items.iter().take(n).cloned().collect()
}

/// Everything after the first `n` elements.
pub fn drop<T: Clone>(items: &[T], n: usize) -> Vec<T> {
    items.iter().skip(n).cloned().collect()
}

pub fn take_drop<T: Clone>(items: &[T], n: usize) -> (Vec<T>, Vec<T>) {
    let (head, tail) = items.split_at(n.min(items.len()));
    (head.to_vec(), tail.to_vec())
}

// =============================================================================
// Chunking and windowing
// =============================================================================

/// Consecutive, non-overlapping groups of `size`; the last one may be short.
pub fn chunk<T: Clone>(items: &[T], size: usize) -> Result<Vec<Vec<T>>, CollectionError> {
    if size == 0 {
        return Err(CollectionError::invalid_argument(
            "size",
            size,
            "chunk size must be at least 1",
        ));
    }
    Ok(items.chunks(size).map(<[T]>::to_vec).collect())
}

/// Shape of a sliding window: its length, how far each window's start
/// advances, and whether clipped trailing windows are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSpec {
    pub size: usize,
    pub step: usize,
    pub partial: bool,
}

impl WindowSpec {
    pub fn new(size: usize, step: usize) -> Self {
        Self {
            size,
            step,
            partial: false,
        }
    }

    pub fn partial(mut self, partial: bool) -> Self {
        self.partial = partial;
        self
    }

    pub fn validate(&self) -> Result<(), CollectionError> {
        if self.size == 0 {
            return Err(CollectionError::invalid_argument(
                "size",
                self.size,
                "window size must be at least 1",
            ));
        }
        if self.step == 0 {
            return Err(CollectionError::invalid_argument(
                "step",
                self.step,
                "window step must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Lazily yield windows as borrowed views into `items`.
///
/// Window starts are `0, step, 2 * step, ...`. Without `partial`, iteration
/// ends at the first window whose end would run past the slice; with it,
/// trailing windows are clipped to the slice end.
pub fn window_slices<T>(
    items: &[T],
    spec: WindowSpec,
) -> Result<impl Iterator<Item = &[T]> + '_, CollectionError> {
    spec.validate()?;
    let mut start = 0usize;
    Ok(std::iter::from_fn(move || {
        if start >= items.len() {
            return None;
        }
        let end = start.saturating_add(spec.size);
        if end > items.len() && !spec.partial {
            return None;
        }
        let window = &items[start..end.min(items.len())];
        start = start.saturating_add(spec.step);
        Some(window)
    }))
}

/// Owned variant of [`window_slices`].
pub fn window<T: Clone>(items: &[T], spec: WindowSpec) -> Result<Vec<Vec<T>>, CollectionError> {
    Ok(window_slices(items, spec)?.map(<[T]>::to_vec).collect())
}

// =============================================================================
// Copy-on-insert helpers
// =============================================================================

/// A new sequence equal to `items` plus `value` at the end.
pub fn with_appended<T: Clone>(items: &[T], value: T) -> Vec<T> {
    let mut copy = Vec::with_capacity(items.len() + 1);
    copy.extend_from_slice(items);
    copy.push(value);
    copy
}

/// A new map equal to `map` with `key` set to `value`. An existing key keeps
/// its position and takes the new value.
pub fn with_entry<K, V>(map: &IndexMap<K, V>, key: K, value: V) -> IndexMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    let mut copy = map.clone();
    copy.insert(key, value);
    copy
}

pub fn with_member<T>(set: &IndexSet<T>, value: T) -> IndexSet<T>
where
    T: Eq + Hash + Clone,
{
    let mut copy = set.clone();
    copy.insert(value);
    copy
}

// =============================================================================
// Lazy pipelines
// =============================================================================

/// `1², 2², ..., n²`, computed on demand.
pub fn squares(n: u32) -> impl Iterator<Item = u64> {
    (1..=u64::from(n)).map(|x| x * x)
}

/// Even numbers, squared, above `threshold`, at most `limit` of them.
/// Numbers whose square does not fit in an `i64` are skipped.
///
/// Nothing is computed until the caller pulls, and pulling stops as soon as
/// `limit` values were produced, so a huge `source` costs only what is read.
pub fn lazy_even_squares(
    source: impl IntoIterator<Item = i64>,
    threshold: i64,
    limit: usize,
) -> impl Iterator<Item = i64> {
    source
        .into_iter()
        .filter(|n| n % 2 == 0)
        .filter_map(|n| n.checked_mul(n))
        .filter(move |square| *square > threshold)
        .take(limit)
}

/// Same result as [`lazy_even_squares`], materialising a vector per stage.
pub fn eager_even_squares(source: &[i64], threshold: i64, limit: usize) -> Vec<i64> {
    let evens: Vec<i64> = source.iter().copied().filter(|n| n % 2 == 0).collect();
    let squared: Vec<i64> = evens.iter().filter_map(|n| n.checked_mul(*n)).collect();
    let large: Vec<i64> = squared
        .into_iter()
        .filter(|square| *square > threshold)
        .collect();
    large.into_iter().take(limit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_filter_order() {
        let numbers = [1, 2, 3, 4, 5, 6];
        assert_eq!(map_then_filter(&numbers, |n| n * 3, |n| n % 2 == 0), vec![6, 12, 18]);
        assert_eq!(filter_then_map(&numbers, |n| *n > 3, |n| n * 10), vec![40, 50, 60]);
    }

    #[test]
    fn test_partition_keeps_order() {
        let (even, odd) = partition(&[5, 2, 8, 1, 4], |n| n % 2 == 0);
        assert_eq!(even, vec![2, 8, 4]);
        assert_eq!(odd, vec![5, 1]);
    }

    #[test]
    fn test_reduce_and_fold() {
        assert_eq!(reduce(vec![1, 2, 3, 4, 5], |a, b| a + b), Ok(15));
        assert_eq!(
            reduce(Vec::<i32>::new(), |a, b| a + b),
            Err(CollectionError::EmptyInput { operation: "reduce" })
        );
        assert_eq!(fold(vec![1, 2, 3, 4, 5], 1, |acc, n| acc * n), 120);
        assert_eq!(fold(Vec::<i32>::new(), 42, |acc, n| acc * n), 42);
    }

    #[test]
    fn test_reduce_is_left_to_right() {
        let joined = reduce(vec!["a", "b", "c"].into_iter().map(String::from), |acc, s| acc + &s);
        assert_eq!(joined.as_deref(), Ok("abc"));
    }

    #[test]
    fn test_group_by_first_seen_order() {
        let groups = group_by(vec!["bb", "a", "cc", "d", "eee"], |s| s.len());
        let keys: Vec<_> = groups.keys().copied().collect();
        assert_eq!(keys, vec![2, 1, 3]);
        assert_eq!(groups[&2], vec!["bb", "cc"]);
        assert_eq!(groups[&1], vec!["a", "d"]);
        assert_eq!(groups[&3], vec!["eee"]);
    }

    #[test]
    fn test_zip_with_truncates() {
        let zipped = zip_with([1, 2, 3, 4], ["a", "b"], |n, s| format!("{n}{s}"));
        assert_eq!(zipped, vec!["1a", "2b"]);
        assert!(zip_with(Vec::<i32>::new(), [1], |a, b| a + b).is_empty());
    }

    #[test]
    fn test_flatten() {
        assert_eq!(flatten(vec![vec![1, 2], vec![], vec![3]]), vec![1, 2, 3]);
    }

    #[test]
    fn test_tokenize_collapses_whitespace() {
        let tokens = tokenize(&["  leading", "a\t\tb  ", "", "   "]);
        assert_eq!(tokens, vec!["leading", "a", "b"]);
    }

    #[test]
    fn test_flat_map_filter_generic() {
        let expanded = flat_map_filter(vec![1usize, 2, 3], |n| vec![n; n], |n| *n != 2);
        assert_eq!(expanded, vec![1, 3, 3, 3]);
    }

    #[test]
    fn test_distinct_sorted() {
        assert_eq!(distinct_sorted(&[3, 1, 2, 3, 4, 2]), vec![1, 2, 3, 4]);
        assert!(distinct_sorted::<i32>(&[]).is_empty());
    }

    #[test]
    fn test_take_drop_boundaries() {
        let items = [1, 2, 3];
        assert_eq!(take(&items, 0), Vec::<i32>::new());
        assert_eq!(drop(&items, 0), vec![1, 2, 3]);
        assert_eq!(take(&items, 10), vec![1, 2, 3]);
        assert_eq!(drop(&items, 10), Vec::<i32>::new());
        assert_eq!(take_drop(&items, 2), (vec![1, 2], vec![3]));
        assert_eq!(take_drop(&items, 7), (vec![1, 2, 3], vec![]));
    }

    #[test]
    fn test_chunk() {
        assert_eq!(
            chunk(&[1, 2, 3, 4, 5], 2).unwrap(),
            vec![vec![1, 2], vec![3, 4], vec![5]]
        );
        assert!(chunk::<i32>(&[], 3).unwrap().is_empty());
        assert!(matches!(
            chunk(&[1], 0),
            Err(CollectionError::InvalidArgument { name: "size", .. })
        ));
    }

    #[test]
    fn test_window_drops_partial() {
        let items = [1, 2, 3, 4, 5, 6, 7];
        assert_eq!(
            window(&items, WindowSpec::new(3, 2)).unwrap(),
            vec![vec![1, 2, 3], vec![3, 4, 5], vec![5, 6, 7]]
        );
        assert_eq!(
            window(&items, WindowSpec::new(3, 3)).unwrap(),
            vec![vec![1, 2, 3], vec![4, 5, 6]]
        );
        assert!(window(&items, WindowSpec::new(8, 1)).unwrap().is_empty());
    }

    #[test]
    fn test_window_keeps_partial() {
        let items = [1, 2, 3, 4, 5, 6, 7];
        assert_eq!(
            window(&items, WindowSpec::new(3, 2).partial(true)).unwrap(),
            vec![vec![1, 2, 3], vec![3, 4, 5], vec![5, 6, 7], vec![7]]
        );
        assert_eq!(
            window(&[1, 2], WindowSpec::new(5, 1).partial(true)).unwrap(),
            vec![vec![1, 2], vec![2]]
        );
    }

    #[test]
    fn test_window_rejects_zero() {
        assert!(window(&[1, 2], WindowSpec::new(0, 1)).is_err());
        assert!(matches!(
            window(&[1, 2], WindowSpec::new(1, 0)),
            Err(CollectionError::InvalidArgument { name: "step", .. })
        ));
    }

    #[test]
    fn test_window_slices_borrow() {
        let items = vec![10, 20, 30, 40];
        let sums: Vec<i32> = window_slices(&items, WindowSpec::new(2, 1))
            .unwrap()
            .map(|w| w.iter().sum())
            .collect();
        assert_eq!(sums, vec![30, 50, 70]);
    }

    #[test]
    fn test_copy_insert_leaves_input() {
        let original = vec![1, 2, 3];
        let extended = with_appended(&original, 9);
        assert_eq!(extended, vec![1, 2, 3, 9]);
        assert_eq!(original, vec![1, 2, 3]);

        let map: IndexMap<String, i32> =
            [("one".to_string(), 1), ("two".to_string(), 2)].into_iter().collect();
        let updated = with_entry(&map, "one".to_string(), 10);
        assert_eq!(map["one"], 1);
        assert_eq!(updated["one"], 10);
        assert_eq!(updated.get_index(0), Some((&"one".to_string(), &10)));

        let set: IndexSet<&str> = ["a", "b"].into_iter().collect();
        let grown = with_member(&set, "c");
        assert_eq!(set.len(), 2);
        assert_eq!(grown.into_iter().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_lazy_matches_eager() {
        let source: Vec<i64> = (1..=1_000).collect();
        let lazy: Vec<i64> = lazy_even_squares(source.iter().copied(), 1000, 10).collect();
        assert_eq!(lazy, eager_even_squares(&source, 1000, 10));
        assert_eq!(lazy[0], 1024);
        assert_eq!(lazy.len(), 10);
    }

    #[test]
    fn test_pipelines_skip_overflowing_squares() {
        let source = [4_000_000_000, i64::MIN, 6, i64::MAX - 1, -8];
        let lazy: Vec<i64> = lazy_even_squares(source, 0, 5).collect();
        assert_eq!(lazy, vec![36, 64]);
        assert_eq!(eager_even_squares(&source, 0, 5), lazy);
        assert_eq!(eager_even_squares(&[3_037_000_498], 0, 1), vec![3_037_000_498 * 3_037_000_498]);
    }

    #[test]
    fn test_lazy_reads_only_what_it_needs() {
        let mut pulled = 0;
        let source = (1..).inspect(|_| pulled += 1);
        let first: Vec<i64> = lazy_even_squares(source, 0, 2).collect();
        assert_eq!(first, vec![4, 16]);
        assert_eq!(pulled, 4);
    }

    #[test]
    fn test_squares() {
        assert_eq!(squares(5).collect::<Vec<_>>(), vec![1, 4, 9, 16, 25]);
        assert_eq!(squares(0).count(), 0);
    }
}
