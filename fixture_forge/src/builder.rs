//! Entry point for building entities and lists.

use std::any::type_name;
use std::fmt;
use std::rc::Rc;

use crate::{
    Creator, ElementListBuilder, EntityBuilder, FixedSizeListBuilder, Fixture, FixtureResult,
    RandomSource, Settings,
};

/// Starts entity and list construction.
///
/// A builder carries [`Settings`] that supply the list size used when none
/// is given and the seed of [`Builder::random`].
///
/// # Examples
///
/// ```rust
/// use fixture_forge::{Builder, Fixture, Overrides};
///
/// #[derive(Debug, Fixture)]
/// struct Ticket {
///     #[fixture(default = String::from("open"))]
///     status: String,
///     #[fixture(default)]
///     votes: u32,
/// }
///
/// let ticket = Builder::new()
///     .fixture::<Ticket>()
///     .override_value(Ticket::votes_field(), 4_u32)
///     .get()?;
/// assert_eq!(ticket.status, "open");
/// assert_eq!(ticket.votes, 4);
/// # Ok::<_, fixture_forge::FixtureError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Builder {
    settings: Settings,
}

impl Builder {
    /// Creates a builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder with explicit settings.
    ///
    /// # Errors
    ///
    /// Returns [`crate::FixtureError::Validation`] when the settings break an
    /// invariant checked by [`Settings::validate`], such as a zero
    /// `default_list_size`.
    pub fn with_settings(settings: Settings) -> FixtureResult<Self> {
        settings.validate()?;
        Ok(Self { settings })
    }

    /// Creates a builder from settings loaded through [`Settings::load`].
    ///
    /// # Errors
    ///
    /// Returns the [`crate::FixtureError`] raised while loading or
    /// validating the settings.
    pub fn load() -> FixtureResult<Self> {
        Settings::load().and_then(Self::with_settings)
    }

    /// Returns the settings in effect.
    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns a random source seeded from the settings.
    ///
    /// Every call starts over from the configured seed, so a seeded builder
    /// hands out the same producers each time.
    #[must_use]
    pub fn random(&self) -> RandomSource {
        RandomSource::new(self.settings.seed)
    }

    /// Starts building a single entity with `creator`.
    #[must_use]
    pub fn entity<T, C>(&self, creator: C) -> EntityBuilder<'static, T>
    where
        C: Creator<T> + 'static,
    {
        EntityBuilder::new(Rc::new(creator))
    }

    /// Starts building a list of entities with `creator`.
    #[must_use]
    pub fn list<T, C>(&self, creator: C) -> ListBuilder<T>
    where
        C: Creator<T> + 'static,
    {
        ListBuilder {
            creator: Rc::new(creator),
            default_size: self.settings.default_list_size,
        }
    }

    /// Starts building a single `T` with its canonical creator.
    #[must_use]
    pub fn fixture<T: Fixture>(&self) -> EntityBuilder<'static, T> {
        self.entity(<T as Fixture>::create)
    }

    /// Starts building a list of `T` with its canonical creator.
    #[must_use]
    pub fn fixtures<T: Fixture>(&self) -> ListBuilder<T> {
        self.list(<T as Fixture>::create)
    }
}

/// Chooses between fixed-size and per-element list construction.
///
/// The choice consumes the selector, so a list is either sized or built
/// from declared elements, never both.
pub struct ListBuilder<T> {
    creator: Rc<dyn Creator<T>>,
    default_size: usize,
}

impl<T> ListBuilder<T> {
    /// Builds exactly `size` entities sharing one override scope.
    #[must_use]
    pub fn size(self, size: usize) -> FixedSizeListBuilder<T> {
        FixedSizeListBuilder::new(size, self.creator)
    }

    /// Builds one entity per declared element.
    #[must_use]
    pub fn elements(self) -> ElementListBuilder<T> {
        ElementListBuilder::new(self.creator)
    }

    /// Builds the configured default number of entities without overrides.
    ///
    /// # Errors
    ///
    /// Returns [`crate::FixtureError::Element`] wrapping the first failure.
    pub fn get(self) -> FixtureResult<Vec<T>> {
        let size = self.default_size;
        self.size(size).get()
    }
}

impl<T> fmt::Debug for ListBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListBuilder")
            .field("entity", &type_name::<T>())
            .field("default_size", &self.default_size)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Field, FixtureError, LookUp, Overrides};
    use anyhow::{Result, ensure};
    use rstest::{fixture, rstest};
    use std::sync::LazyLock;

    static SCORE: LazyLock<Field<u32>> = LazyLock::new(|| Field::new("score", 10));

    fn score(lookup: &mut LookUp<'_>) -> FixtureResult<u32> {
        lookup.get(&SCORE)
    }

    #[fixture]
    fn builder() -> Builder {
        Builder::new()
    }

    #[rstest]
    fn entity_uses_defaults(builder: Builder) -> Result<()> {
        let built = builder.entity(score).get()?;
        ensure!(built == 10, "expected default score, got {built}");
        Ok(())
    }

    #[rstest]
    fn entity_applies_overrides(builder: Builder) -> Result<()> {
        let built = builder.entity(score).override_value(&SCORE, 3_u32).get()?;
        ensure!(built == 3, "override ignored, got {built}");
        Ok(())
    }

    #[rstest]
    #[case(1)]
    #[case(3)]
    fn unsized_list_follows_settings(#[case] size: usize) -> Result<()> {
        let builder = Builder::with_settings(Settings::default().with_default_list_size(size))?;
        let scores = builder.list(score).get()?;
        ensure!(scores == vec![10; size], "unexpected scores {scores:?}");
        Ok(())
    }

    #[rstest]
    fn sized_list_ignores_default_size() -> Result<()> {
        let builder = Builder::with_settings(Settings::default().with_default_list_size(5))?;
        let scores = builder.list(score).size(2).get()?;
        ensure!(scores.len() == 2, "expected two scores, got {scores:?}");
        Ok(())
    }

    #[rstest]
    fn element_list_is_reachable(builder: Builder) -> Result<()> {
        let scores = builder
            .list(score)
            .elements()
            .element()
            .override_value(&SCORE, 1_u32)
            .end()
            .get()?;
        ensure!(scores == [1], "unexpected scores {scores:?}");
        Ok(())
    }

    #[rstest]
    fn zero_default_list_size_is_rejected() {
        let result = Builder::with_settings(Settings::default().with_default_list_size(0));
        assert!(matches!(
            result,
            Err(FixtureError::Validation { ref key, .. }) if key == "default_list_size"
        ));
    }

    #[rstest]
    fn seeded_builders_share_random_sequences() -> Result<()> {
        let builder = Builder::with_settings(Settings::default().with_seed(21))?;
        let mut first = builder.random().string(6);
        let mut second = builder.random().string(6);
        let (left, right) = (first(), second());
        ensure!(left == right, "seeded sources diverged: {left} vs {right}");
        Ok(())
    }
}
