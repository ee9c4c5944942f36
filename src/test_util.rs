//! Shared helpers for the unit tests.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::dataset::GenerationContext;
use crate::record::Record;

pub fn random_u32s(n: usize, seed: u64) -> Vec<u32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen()).collect()
}

pub fn random_records(n: usize, seed: u64) -> Vec<Record> {
    GenerationContext::new(n, seed).generate().unwrap()
}

pub fn ids(records: &[Record]) -> Vec<u32> {
    records.iter().map(|r| r.id).collect()
}

/// True if both slices hold the same multiset of ids.
pub fn same_ids(a: &[Record], b: &[Record]) -> bool {
    let mut a = ids(a);
    let mut b = ids(b);
    a.sort_unstable();
    b.sort_unstable();
    a == b
}
