//! Reactive generator state.
//!
//! [`Generator`] owns the current [`Configuration`], the last generated
//! password, and the random source. Every accepted mutation regenerates the
//! password exactly once, synchronously, and construction performs one initial
//! generation with the default configuration. The password is replaced
//! wholesale on each regeneration; no history is kept.

use rand::Rng;
use rand::rngs::ThreadRng;
use rand::thread_rng;

use crate::config::Configuration;
use crate::error::Result;
use crate::sampler;

/// Holds the current configuration and password, regenerating on each change.
#[derive(Debug)]
pub struct Generator<R: Rng> {
    config: Configuration,
    password: String,
    rng: R,
}

impl Generator<ThreadRng> {
    /// Generator backed by the thread-local RNG, with the default
    /// configuration already sampled once.
    pub fn new() -> Result<Self> {
        Self::with_rng(thread_rng())
    }
}

impl<R: Rng> Generator<R> {
    /// Generator backed by a caller-supplied random source.
    ///
    /// Used by tests to drive the generator with a seeded `StdRng`.
    pub fn with_rng(rng: R) -> Result<Self> {
        let mut generator = Generator {
            config: Configuration::default(),
            password: String::new(),
            rng,
        };
        generator.regenerate()?;
        Ok(generator)
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// The current password.
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Set the target length (clamped to the accepted range) and regenerate.
    ///
    /// Returns the freshly generated password.
    pub fn set_length(&mut self, length: usize) -> Result<&str> {
        self.config.set_length(length);
        self.regenerate()?;
        Ok(self.password.as_str())
    }

    /// Flip digit inclusion and regenerate. Returns the new password.
    pub fn toggle_digits(&mut self) -> Result<&str> {
        self.config.toggle_digits();
        self.regenerate()?;
        Ok(self.password.as_str())
    }

    /// Flip symbol inclusion and regenerate. Returns the new password.
    pub fn toggle_symbols(&mut self) -> Result<&str> {
        self.config.toggle_symbols();
        self.regenerate()?;
        Ok(self.password.as_str())
    }

    fn regenerate(&mut self) -> Result<()> {
        self.password = sampler::sample(&self.config, &mut self.rng)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn construction_generates_with_defaults() {
        let generator = Generator::with_rng(StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(generator.config().length(), 8);
        assert!(!generator.config().include_digits());
        assert!(!generator.config().include_symbols());
        assert_eq!(generator.password().len(), 8);
        assert!(generator.password().chars().all(|c| c.is_ascii_alphabetic()));
    }

    #[test]
    fn set_length_clamps_and_regenerates() {
        let mut generator = Generator::with_rng(StdRng::seed_from_u64(2)).unwrap();
        generator.set_length(3).unwrap();
        assert_eq!(generator.config().length(), 8);
        generator.set_length(1000).unwrap();
        assert_eq!(generator.config().length(), 100);
        assert_eq!(generator.password().chars().count(), 100);
    }

    #[test]
    fn toggles_flip_flags_and_replace_password() {
        let mut generator = Generator::with_rng(StdRng::seed_from_u64(3)).unwrap();
        let before = generator.password().to_owned();

        generator.toggle_digits().unwrap();
        assert!(generator.config().include_digits());
        assert_ne!(generator.password(), before);

        generator.toggle_digits().unwrap();
        assert!(!generator.config().include_digits());

        generator.toggle_symbols().unwrap();
        assert!(generator.config().include_symbols());
    }

    #[test]
    fn regenerates_exactly_once_per_mutation() {
        // Replay the same seeded draw stream by hand: the streams only stay
        // aligned if each mutation samples exactly once, no more, no less.
        let mut expected_rng = StdRng::seed_from_u64(7);
        let mut generator = Generator::with_rng(StdRng::seed_from_u64(7)).unwrap();

        let mut config = Configuration::default();
        let init = sampler::sample(&config, &mut expected_rng).unwrap();
        assert_eq!(generator.password(), init);

        config.set_length(20);
        let after_length = sampler::sample(&config, &mut expected_rng).unwrap();
        assert_eq!(generator.set_length(20).unwrap(), after_length);

        config.toggle_digits();
        let after_digits = sampler::sample(&config, &mut expected_rng).unwrap();
        assert_eq!(generator.toggle_digits().unwrap(), after_digits);

        config.toggle_symbols();
        let after_symbols = sampler::sample(&config, &mut expected_rng).unwrap();
        assert_eq!(generator.toggle_symbols().unwrap(), after_symbols);
    }
}
