//! Sortedness checks.

use crate::record::KeyComparator;

/// Check if a slice is in non-descending order under `cmp`.
#[inline]
pub fn is_sorted<T, C: KeyComparator<T>>(data: &[T], cmp: &C) -> bool {
    first_unsorted(data, cmp).is_none()
}

/// Index `i` of the first adjacent pair `(i - 1, i)` that is out of order.
pub fn first_unsorted<T, C: KeyComparator<T>>(data: &[T], cmp: &C) -> Option<usize> {
    data.windows(2)
        .position(|w| cmp.greater(&w[0], &w[1]))
        .map(|i| i + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Ascending, Record, SortKey};

    #[test]
    fn test_is_sorted() {
        assert!(is_sorted(&[1, 2, 3, 4, 5], &Ascending));
        assert!(is_sorted(&[1, 1, 1, 1], &Ascending));
        assert!(is_sorted(&[1], &Ascending));
        assert!(is_sorted::<i32, _>(&[], &Ascending));
        assert!(!is_sorted(&[5, 4, 3, 2, 1], &Ascending));
        assert!(!is_sorted(&[1, 3, 2], &Ascending));
    }

    #[test]
    fn test_first_unsorted() {
        assert_eq!(first_unsorted(&[1, 2, 3], &Ascending), None);
        assert_eq!(first_unsorted(&[1, 3, 2, 0], &Ascending), Some(2));
        assert_eq!(first_unsorted(&[2, 1], &Ascending), Some(1));
    }

    #[test]
    fn test_records_by_key() {
        let data = vec![
            Record::new(0, "b", 1.0),
            Record::new(1, "a", 2.0),
            Record::new(2, "c", 2.0),
        ];
        assert!(is_sorted(&data, &SortKey::ByWeight));
        assert!(!is_sorted(&data, &SortKey::ByName));
        assert_eq!(first_unsorted(&data, &SortKey::ByName), Some(1));
    }
}
