//! Uniform random permutation (Fisher-Yates).
//!
//! [`shuffle`] draws from the thread-local generator. [`shuffle_with`] takes
//! any [`Rng`], so a seeded generator gives reproducible permutations:
//!
//! ```rust
//! use fusion::sequence::shuffled_with;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let values: Vec<i32> = (0..10).collect();
//! let first = shuffled_with(&values, &mut StdRng::seed_from_u64(42));
//! let second = shuffled_with(&values, &mut StdRng::seed_from_u64(42));
//! assert_eq!(first, second);
//! ```

use rand::Rng;

/// Shuffles `collection` in place using the thread-local random generator.
///
/// Every permutation is equally likely.
///
/// # Examples
///
/// ```rust
/// use fusion::sequence::shuffle;
///
/// let mut values = vec![1, 2, 3, 4, 5];
/// shuffle(&mut values);
/// values.sort_unstable();
/// assert_eq!(values, vec![1, 2, 3, 4, 5]);
/// ```
pub fn shuffle<T>(collection: &mut [T]) {
    shuffle_with(collection, &mut rand::thread_rng());
}

/// Shuffles `collection` in place using `rng`.
pub fn shuffle_with<T, R>(collection: &mut [T], rng: &mut R)
where
    R: Rng + ?Sized,
{
    for index in (1..collection.len()).rev() {
        let other = rng.gen_range(0..=index);
        collection.swap(index, other);
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(length = collection.len(), "shuffle");
}

/// Returns a shuffled copy of `collection`, drawn from the thread-local generator.
pub fn shuffled<T>(collection: &[T]) -> Vec<T>
where
    T: Clone,
{
    shuffled_with(collection, &mut rand::thread_rng())
}

/// Returns a copy of `collection` shuffled with `rng`.
pub fn shuffled_with<T, R>(collection: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let mut copy = collection.to_vec();
    shuffle_with(&mut copy, rng);
    copy
}
