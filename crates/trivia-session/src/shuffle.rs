//! Unbiased index permutations.

use rand::seq::SliceRandom;
use rand::Rng;

/// Return a uniformly random permutation of `0..len`.
pub fn permutation<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..len).collect();
    indices.shuffle(rng);
    indices
}
