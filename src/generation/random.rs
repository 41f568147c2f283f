//! Random draw primitives shared by the question generators.
//!
//! All helpers take `&mut dyn RngCore` so they can be used both from the
//! strategy table (function pointers) and from seeded test RNGs.

use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

/// Uniform integer in `[min, max]` inclusive. Requires `min <= max`.
pub fn random_int(rng: &mut dyn RngCore, min: i64, max: i64) -> i64 {
    debug_assert!(min <= max);
    rng.gen_range(min..=max)
}

/// Uniform pick from a slice. Callers guarantee the slice is non-empty;
/// every curated catalog in this crate is.
pub fn random_item<'a, T>(rng: &mut dyn RngCore, items: &'a [T]) -> &'a T {
    debug_assert!(!items.is_empty());
    &items[rng.gen_range(0..items.len())]
}

/// Returns a new vector with the same elements in random order.
///
/// Fisher-Yates via `SliceRandom`; the input is never mutated.
pub fn shuffled<T: Clone>(rng: &mut dyn RngCore, items: &[T]) -> Vec<T> {
    let mut out = items.to_vec();
    out.shuffle(&mut *rng);
    out
}
