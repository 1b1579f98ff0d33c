//! Random and sequential value producers for generator overrides.
//!
//! Every producer returned by a [`RandomSource`] owns an RNG forked from the
//! source, so two sources created from the same seed hand out producers that
//! yield the same values in the same order.
//!
//! ```rust
//! use std::sync::LazyLock;
//!
//! use fixture_forge::{Builder, Field, FixtureResult, LookUp, Overrides, Settings};
//!
//! static CODE: LazyLock<Field<String>> =
//!     LazyLock::new(|| Field::new("code", String::new()));
//!
//! fn code(lookup: &mut LookUp<'_>) -> FixtureResult<String> {
//!     lookup.get(&CODE)
//! }
//!
//! let builder = Builder::with_settings(Settings::default().with_seed(3))?;
//! let mut random = builder.random();
//! let codes = builder
//!     .list(code)
//!     .size(4)
//!     .override_generator(&CODE, random.string(8))
//!     .get()?;
//! assert!(codes.iter().all(|c| c.len() == 8));
//! # Ok::<_, fixture_forge::FixtureError>(())
//! ```

use rand::distr::uniform::{SampleUniform, Uniform};
use rand::distr::{Alphanumeric, SampleString};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use crate::{FixtureError, FixtureResult};

/// Factory of value producers sharing one seed.
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    /// Creates a source seeded with `seed`, or from OS entropy when `None`.
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Self { rng }
    }

    /// Creates a reproducible source.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(Some(seed))
    }

    fn fork(&mut self) -> StdRng {
        StdRng::seed_from_u64(self.rng.random::<u64>())
    }

    /// Produces alphanumeric strings of exactly `len` characters.
    pub fn string(&mut self, len: usize) -> impl FnMut() -> String + use<> {
        let mut rng = self.fork();
        move || Alphanumeric.sample_string(&mut rng, len)
    }

    /// Produces values drawn uniformly from `low..=high`.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::Validation`] when `low` exceeds `high` or a
    /// floating-point bound is not finite.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fixture_forge::RandomSource;
    ///
    /// let mut dice = RandomSource::seeded(1).int_in(1, 6)?;
    /// assert!((1..=6).contains(&dice()));
    /// # Ok::<_, fixture_forge::FixtureError>(())
    /// ```
    pub fn int_in<T>(&mut self, low: T, high: T) -> FixtureResult<impl FnMut() -> T + use<T>>
    where
        T: SampleUniform + 'static,
    {
        let range = Uniform::new_inclusive(low, high)
            .map_err(|err| FixtureError::validation("range", err.to_string()))?;
        let mut rng = self.fork();
        Ok(move || rng.sample(&range))
    }

    /// Produces values picked uniformly from `values`.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::Validation`] when `values` is empty.
    pub fn one_of<T>(&mut self, values: Vec<T>) -> FixtureResult<impl FnMut() -> T + use<T>>
    where
        T: Clone + 'static,
    {
        let Some(first) = values.first().cloned() else {
            return Err(FixtureError::validation("values", "cannot choose from an empty set"));
        };
        let mut rng = self.fork();
        Ok(move || values.choose(&mut rng).cloned().unwrap_or_else(|| first.clone()))
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Produces `prefix-1`, `prefix-2`, and so on.
///
/// # Examples
///
/// ```rust
/// let mut next = fixture_forge::generators::sequence("user");
/// assert_eq!(next(), "user-1");
/// assert_eq!(next(), "user-2");
/// ```
#[must_use]
pub fn sequence(prefix: &str) -> impl FnMut() -> String + use<> {
    let stem = prefix.to_owned();
    let mut counter = 0_u64;
    move || {
        counter += 1;
        format!("{stem}-{counter}")
    }
}
