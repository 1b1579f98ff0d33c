//! Single-entity construction.

use std::any::type_name;
use std::fmt;
use std::rc::Rc;

use crate::{Creator, FixtureResult, LookUp, OverrideScope, Overrides};

/// Builds one entity from a [`Creator`] and its own override scope.
///
/// List builders drive one `EntityBuilder` per element, layering the
/// element's scope over the scopes shared by the whole list.
///
/// # Examples
///
/// ```rust
/// use std::sync::LazyLock;
///
/// use fixture_forge::{Builder, Field, FixtureResult, LookUp, Overrides};
///
/// static NICKNAME: LazyLock<Field<Option<String>>> =
///     LazyLock::new(|| Field::new("nickname", Some(String::from("ace"))));
///
/// fn nickname(lookup: &mut LookUp<'_>) -> FixtureResult<Option<String>> {
///     lookup.get(&NICKNAME)
/// }
///
/// let anonymous = Builder::new().entity(nickname).nullify(&NICKNAME).get()?;
/// assert_eq!(anonymous, None);
/// # Ok::<_, fixture_forge::FixtureError>(())
/// ```
pub struct EntityBuilder<'s, T> {
    creator: Rc<dyn Creator<T>>,
    scope: OverrideScope,
    inherited: Vec<&'s OverrideScope>,
}

impl<'s, T> EntityBuilder<'s, T> {
    /// Creates a builder whose only scope is its own.
    #[must_use]
    pub fn new(creator: Rc<dyn Creator<T>>) -> Self {
        Self::layered(creator, OverrideScope::new(), Vec::new())
    }

    /// Creates a builder whose own `scope` shadows the `inherited` scopes,
    /// which are ordered from highest to lowest precedence.
    pub(crate) const fn layered(
        creator: Rc<dyn Creator<T>>,
        scope: OverrideScope,
        inherited: Vec<&'s OverrideScope>,
    ) -> Self {
        Self {
            creator,
            scope,
            inherited,
        }
    }

    /// Runs the creator against this builder's scopes.
    ///
    /// # Errors
    ///
    /// Propagates any [`crate::FixtureError`] raised by the creator or by a
    /// nested creator override. No partial entity is returned.
    pub fn get(self) -> FixtureResult<T> {
        let mut scopes = Vec::with_capacity(self.inherited.len() + 1);
        scopes.push(&self.scope);
        scopes.extend(self.inherited.iter().copied());
        tracing::debug!(
            entity = type_name::<T>(),
            overrides = self.scope.len(),
            inherited = self.inherited.len(),
            "building entity"
        );
        let mut lookup = LookUp::new(scopes);
        self.creator.create(&mut lookup)
    }
}

impl<T> Overrides for EntityBuilder<'_, T> {
    fn scope_mut(&mut self) -> &mut OverrideScope {
        &mut self.scope
    }
}

impl<T> fmt::Debug for EntityBuilder<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityBuilder")
            .field("entity", &type_name::<T>())
            .field("scope", &self.scope)
            .field("inherited", &self.inherited.len())
            .finish()
    }
}
