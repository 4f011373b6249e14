use bisection::{bisect_left_by, bisect_right_by};
use log::debug;
use std::cmp::Ordering;
use std::ops::Range;

/// Which endpoints of a bounded interval belong to it.
///
///  |Kind       |Interval|Description
///  |-----------|--------|---------------------------------
///  |`Closed`   | `[A,B]`|both endpoints included
///  |`Open`     | `(A,B)`|both endpoints excluded
///  |`RightOpen`| `[A,B)`|left-closed, upper bound excluded
///  |`LeftOpen` | `(A,B]`|right-closed, lower bound excluded
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum IntervalKind {
    /// `[A, B]`
    Closed,
    /// `(A, B)`
    Open,
    /// `[A, B)`, also called left-closed
    RightOpen,
    /// `(A, B]`, also called right-closed
    LeftOpen,
}

/// Returns the elements of `values` that lie within the interval from
/// `lower` to `upper`, in ascending order.
///
/// `values` must be strictly ascending by `cmp`, with no two elements
/// comparing equal; use [`intersect_unsorted`] when that cannot be
/// guaranteed.  `lower` and `upper` may be given in either order.  The
/// comparator must be a total order; an inconsistent comparator yields
/// an unspecified (but memory-safe) result.
///
/// The search is O(log n + k) where k is the size of the result.
///
/// ```
///    use prope::intersect::{intersect, IntervalKind};
///    use prope::fuzzy::FuzzyCmp;
///
///    let seq = [1.0, 2.0, 3.0, 4.0];
///    let cmp = |a: &f64, b: &f64| a.fuzzy_cmp(*b);
///    assert_eq!(
///        intersect(&seq, &0.0, &4.0, IntervalKind::Open, cmp),
///        vec![1.0, 2.0, 3.0],
///    );
/// ```
pub fn intersect<T, F>(
    values: &[T],
    lower: &T,
    upper: &T,
    kind: IntervalKind,
    mut cmp: F,
) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    debug_assert!(
        values
            .windows(2)
            .all(|w| cmp(&w[0], &w[1]) == Ordering::Less),
        "values must be strictly ascending and duplicate-free"
    );

    //  The caller may pass the bounds in either order
    let (lo, hi) = match cmp(lower, upper) {
        Ordering::Greater => (upper, lower),
        Ordering::Less | Ordering::Equal => (lower, upper),
    };

    let range = closed_range(values, lo, hi, &mut cmp);
    let range = resize_for_kind(values, range, lo, hi, kind, &mut cmp);
    values[range].to_vec()
}

/// Same as [`intersect`], for a sequence in no particular order and
/// possibly containing duplicates.  Sorts a working copy and collapses
/// `cmp`-equal duplicates first, so the result is still ascending and
/// duplicate-free.
pub fn intersect_unsorted<T, F>(
    values: &[T],
    lower: &T,
    upper: &T,
    kind: IntervalKind,
    mut cmp: F,
) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| cmp(a, b));
    sorted.dedup_by(|a, b| cmp(a, b) == Ordering::Equal);
    if sorted.len() != values.len() {
        debug!(
            "collapsed {} duplicate values before intersecting",
            values.len() - sorted.len()
        );
    }
    intersect(&sorted, lower, upper, kind, cmp)
}

/// The closed-interval reduction: indices of the elements of `values`
/// inside `[lo, hi]`, both bounds included.
///
/// The limit cases (interval entirely outside the data, touching the
/// data at a single point, or of zero width) each have their own exit.
/// This is not just an optimization: it guarantees that when the binary
/// searches run, both land strictly inside the slice, so the general
/// case never has to reason about ill-formed index pairs.
fn closed_range<T, F>(
    values: &[T],
    lo: &T,
    hi: &T,
    cmp: &mut F,
) -> Range<usize>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let n = values.len();
    if n == 0 {
        return 0..0;
    }
    let min_el = &values[0];
    let max_el = &values[n - 1];

    match cmp(max_el, lo) {
        //  The interval lies entirely above the data
        Ordering::Less => return 0..0,
        //  The interval touches the data only at its top element
        Ordering::Equal => return n - 1..n,
        Ordering::Greater => {}
    }
    match cmp(hi, min_el) {
        //  The interval lies entirely below the data
        Ordering::Less => return 0..0,
        Ordering::Equal => return 0..1,
        Ordering::Greater => {}
    }

    if cmp(lo, hi) == Ordering::Equal {
        //  Zero-width interval: a membership test.  The general slice
        //  logic below must not be reused here, its index pair can be
        //  ill-formed when lo == hi
        let idx = bisect_left_by(values, |e| cmp(e, lo));
        return if idx < n && cmp(&values[idx], lo) == Ordering::Equal {
            idx..idx + 1
        } else {
            0..0
        };
    }

    //  Past the limit cases we know max > lo and hi > min, so the first
    //  element >= lo exists, and so does the last element <= hi
    let lower_idx = bisect_left_by(values, |e| cmp(e, lo));
    let upper_idx = bisect_right_by(values, |e| cmp(e, hi));
    if cmp(&values[lower_idx], hi) == Ordering::Greater {
        //  The interval falls in the gap between two adjacent elements
        return 0..0;
    }
    lower_idx..upper_idx
}

/// Trim the closed-interval result according to the endpoint inclusion
/// the caller asked for.  No-op when the closed result is already empty.
fn resize_for_kind<T, F>(
    values: &[T],
    mut range: Range<usize>,
    lo: &T,
    hi: &T,
    kind: IntervalKind,
    cmp: &mut F,
) -> Range<usize>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if range.is_empty() {
        return range;
    }
    if matches!(kind, IntervalKind::Open | IntervalKind::RightOpen)
        && cmp(&values[range.end - 1], hi) == Ordering::Equal
    {
        range.end -= 1;
    }
    if !range.is_empty()
        && matches!(kind, IntervalKind::Open | IntervalKind::LeftOpen)
        && cmp(&values[range.start], lo) == Ordering::Equal
    {
        range.start += 1;
    }
    range
}
