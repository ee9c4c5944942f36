//! Records and the keys they can be ordered by.
//!
//! Every algorithm in this crate orders elements through a [`KeyComparator`],
//! a strict "must come after" predicate. Returning `false` on equal keys is what
//! keeps the stable algorithms stable: an element is only moved past another
//! when it is strictly greater.

use std::fmt;

/// The sortable entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Unique, assigned at generation
    pub id: u32,
    pub name: String,
    pub category: String,
    pub population: u32,
    pub weight: f64,
}

impl Record {
    /// Build a record with the given id, name and weight and empty remaining fields.
    pub fn new(id: u32, name: impl Into<String>, weight: f64) -> Self {
        Record {
            id,
            name: name.into(),
            category: String::new(),
            population: 0,
            weight,
        }
    }
}

/// Strict-order predicate used by every sort and by the verifier.
pub trait KeyComparator<T> {
    /// True iff `a` must come after `b` in ascending order. False on equality.
    fn greater(&self, a: &T, b: &T) -> bool;
}

/// The field a sort invocation orders records by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Ordinal (byte-wise) ascending over `name`
    ByName,
    /// Numeric ascending over `weight`
    ByWeight,
}

impl SortKey {
    /// Both keys, in the order the driver runs them.
    pub const ALL: [SortKey; 2] = [SortKey::ByWeight, SortKey::ByName];

    /// Short lowercase label used in reports.
    pub fn label(self) -> &'static str {
        match self {
            SortKey::ByName => "name",
            SortKey::ByWeight => "weight",
        }
    }

    /// Inverse of [`SortKey::label`].
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "name" => Some(SortKey::ByName),
            "weight" => Some(SortKey::ByWeight),
            _ => None,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl KeyComparator<Record> for SortKey {
    #[inline]
    fn greater(&self, a: &Record, b: &Record) -> bool {
        match self {
            SortKey::ByName => a.name.as_bytes() > b.name.as_bytes(),
            SortKey::ByWeight => a.weight > b.weight,
        }
    }
}

/// Free-function form of [`KeyComparator::greater`] for records.
#[inline]
pub fn greater(a: &Record, b: &Record, key: SortKey) -> bool {
    key.greater(a, b)
}

/// Orders any `PartialOrd` value by its natural ascending order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ascending;

impl<T: PartialOrd> KeyComparator<T> for Ascending {
    #[inline]
    fn greater(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

impl<T, F> KeyComparator<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn greater(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greater_by_weight() {
        let light = Record::new(0, "b", 1.0);
        let heavy = Record::new(1, "a", 2.0);
        assert!(greater(&heavy, &light, SortKey::ByWeight));
        assert!(!greater(&light, &heavy, SortKey::ByWeight));
    }

    #[test]
    fn test_greater_by_name() {
        let a = Record::new(0, "Monster #10", 0.0);
        let b = Record::new(1, "Monster #9", 0.0);
        // Ordinal comparison: '1' < '9'
        assert!(greater(&b, &a, SortKey::ByName));
        assert!(!greater(&a, &b, SortKey::ByName));
    }

    #[test]
    fn test_greater_false_on_equality() {
        let a = Record::new(0, "same", 3.0);
        let b = Record::new(1, "same", 3.0);
        for key in SortKey::ALL {
            assert!(!greater(&a, &b, key));
            assert!(!greater(&b, &a, key));
        }
    }

    #[test]
    fn test_ordinal_name_comparison() {
        let upper = Record::new(0, "Zebra", 0.0);
        let lower = Record::new(1, "apple", 0.0);
        // 'Z' (0x5A) sorts before 'a' (0x61)
        assert!(greater(&lower, &upper, SortKey::ByName));
    }

    #[test]
    fn test_key_labels() {
        for key in SortKey::ALL {
            assert_eq!(SortKey::from_label(key.label()), Some(key));
        }
        assert_eq!(SortKey::from_label("population"), None);
        assert_eq!(SortKey::ByWeight.to_string(), "weight");
    }

    #[test]
    fn test_ascending_and_closure_comparators() {
        assert!(Ascending.greater(&3, &2));
        assert!(!Ascending.greater(&2, &2));
        let descending = |a: &i32, b: &i32| a < b;
        assert!(descending.greater(&1, &2));
    }
}
