//! Synthetic record generation.
//!
//! All randomness comes from a [`GenerationContext`], so a dataset can be
//! regenerated exactly from its seed.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::{try_reserve, SortError};
use crate::record::Record;

/// Upper bound (exclusive) of generated weights
pub const DEFAULT_MAX_WEIGHT: f64 = 500.0;

/// Everything that determines a generated dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationContext {
    pub size: usize,
    pub seed: u64,
    /// Weights are drawn uniformly from `[0, max_weight)`
    pub max_weight: f64,
}

impl GenerationContext {
    pub fn new(size: usize, seed: u64) -> Self {
        GenerationContext {
            size,
            seed,
            max_weight: DEFAULT_MAX_WEIGHT,
        }
    }

    /// Generate `size` records with ids `0..size`.
    pub fn generate(&self) -> Result<Vec<Record>, SortError> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let mut records = Vec::new();
        try_reserve(&mut records, self.size)?;

        for id in 0..self.size {
            records.push(Record {
                id: id as u32,
                name: format!("Monster #{}", random_non_negative(&mut rng)),
                category: format!("Element #{}", random_non_negative(&mut rng)),
                population: random_non_negative(&mut rng),
                weight: self.random_weight(&mut rng),
            });
        }

        Ok(records)
    }

    fn random_weight(&self, rng: &mut impl Rng) -> f64 {
        if self.max_weight > 0.0 {
            rng.gen_range(0.0..self.max_weight)
        } else {
            0.0
        }
    }
}

/// Random integer in `[0, 2^31)`.
fn random_non_negative(rng: &mut impl Rng) -> u32 {
    rng.gen::<u32>() >> 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_ids_in_order() {
        let records = GenerationContext::new(100, 1).generate().unwrap();
        assert_eq!(records.len(), 100);
        for (i, record) in records.iter().enumerate() {
            assert_eq!(record.id, i as u32);
        }
    }

    #[test]
    fn test_generate_empty() {
        let records = GenerationContext::new(0, 1).generate().unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_same_seed_same_records() {
        let a = GenerationContext::new(50, 99).generate().unwrap();
        let b = GenerationContext::new(50, 99).generate().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seed_different_records() {
        let a = GenerationContext::new(50, 1).generate().unwrap();
        let b = GenerationContext::new(50, 2).generate().unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_field_ranges() {
        let records = GenerationContext::new(1000, 5).generate().unwrap();
        for record in &records {
            assert!(record.weight >= 0.0 && record.weight < DEFAULT_MAX_WEIGHT);
            assert!(record.name.starts_with("Monster #"));
            assert!(record.category.starts_with("Element #"));
            assert!(record.population <= i32::MAX as u32);
        }
    }

    #[test]
    fn test_custom_weight_bound() {
        let context = GenerationContext {
            max_weight: 1.0,
            ..GenerationContext::new(200, 8)
        };
        let records = context.generate().unwrap();
        assert!(records.iter().all(|r| r.weight < 1.0));
    }

    #[test]
    fn test_impossible_size_is_allocation_failure() {
        let err = GenerationContext::new(usize::MAX, 0).generate().unwrap_err();
        assert!(matches!(err, SortError::AllocationFailure { .. }));
    }
}
