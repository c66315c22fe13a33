//! Uniform random selection.
//!
//! The randomness source is always passed in by the caller, so a seeded
//! `StdRng` makes every draw reproducible.

use rand::Rng;

use crate::error::{QuizError, QuizResult};

/// Candidate player names used when a quiz does not supply its own.
pub const DEFAULT_NAMES: &[&str] = &[
    "Fernanda",
    "Juliana",
    "Maria Eduarda",
    "Marcelo",
    "Amanda",
    "Gustavo",
    "Gabriel",
    "Izaac",
    "Rafael",
    "Caio",
    "William",
];

/// Pick one item uniformly at random.
///
/// Fails with [`QuizError::InvalidArgument`] when `items` is empty.
pub fn pick_random<'a, T, R>(rng: &mut R, items: &'a [T]) -> QuizResult<&'a T>
where
    R: Rng,
{
    if items.is_empty() {
        return Err(QuizError::InvalidArgument(
            "cannot pick from an empty sequence".to_string(),
        ));
    }
    Ok(&items[rng.random_range(0..items.len())])
}

/// Pick a player name from `names`.
pub fn pick_name<'a, R>(rng: &mut R, names: &'a [String]) -> QuizResult<&'a str>
where
    R: Rng,
{
    pick_random(rng, names).map(String::as_str)
}
