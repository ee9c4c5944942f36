//! Element-moving primitives shared by the algorithms.
//!
//! Bounds are the caller's responsibility; both functions panic on an
//! out-of-range index like ordinary slice indexing.

/// Exchange the elements at `i` and `j`.
#[inline]
pub fn swap<T>(data: &mut [T], i: usize, j: usize) {
    data.swap(i, j);
}

/// Move the element at `to` into `at`, shifting `data[at..to]` one slot right.
///
/// This is a single contiguous block move of `to - at` elements. Returns the
/// number of elements shifted (zero when `at == to`).
#[inline]
pub fn shift_into<T>(data: &mut [T], at: usize, to: usize) -> usize {
    debug_assert!(at <= to);
    if at < to {
        data[at..=to].rotate_right(1);
    }
    to - at
}
