//! The home page's "curated selection": a random handful of images drawn
//! from every destination.
//!
//! Without a seed the pick changes on every build, so it can't be asserted
//! as an exact output. Set `[discovery] seed` for a reproducible site (and
//! reproducible tests).

use crate::types::Image;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Shuffle in place. `Some(seed)` gives the same order for the same input
/// every time; `None` draws from the thread-local RNG.
pub fn shuffle<T>(items: &mut [T], seed: Option<u64>) {
    match seed {
        Some(seed) => items.shuffle(&mut StdRng::seed_from_u64(seed)),
        None => items.shuffle(&mut rand::rng()),
    }
}

/// Up to `count` distinct images from `images`, in shuffled order.
pub fn pick(images: &[Image], count: usize, seed: Option<u64>) -> Vec<Image> {
    let mut pool = images.to_vec();
    shuffle(&mut pool, seed);
    pool.truncate(count);
    pool
}
