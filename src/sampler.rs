//! Uniform character sampling.
//!
//! [`sample`] is the core routine: it derives the character pool from a
//! [`Configuration`] and draws each position independently and uniformly, with
//! replacement, from that pool. The random source is a parameter so tests can
//! pass a seeded `StdRng`; production callers use [`generate`], which samples
//! from `thread_rng()`.

use rand::distributions::Uniform;
use rand::{Rng, thread_rng};

use crate::config::Configuration;
use crate::error::{Error, Result};

/// Draw a password of `config.length()` characters from `config`'s pool.
///
/// Each character is an independent uniform draw over the pool indices. The
/// pool always contains the letter alphabet, so an empty pool cannot occur
/// through [`Configuration`]; if it ever does, this fails with
/// [`Error::EmptyCharset`] rather than return an empty or short string.
pub fn sample<R: Rng>(config: &Configuration, rng: &mut R) -> Result<String> {
    let pool: Vec<char> = config.charset().chars().collect();
    if pool.is_empty() {
        return Err(Error::EmptyCharset);
    }
    let dist = Uniform::from(0..pool.len());
    Ok((0..config.length()).map(|_| pool[rng.sample(dist)]).collect())
}

/// Generate a password using the thread-local RNG.
pub fn generate(config: &Configuration) -> Result<String> {
    sample(config, &mut thread_rng())
}
