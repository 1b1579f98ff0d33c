//! Resolution of fields against layered override scopes.

use std::any::Any;
use std::collections::HashMap;

use crate::overrides::{Entry, ErasedValue, OverrideScope};
use crate::{Field, FieldId, FixtureError, FixtureResult};

/// Which entries a look-up may consult.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum View {
    /// Every entry kind.
    Full,
    /// Only absent and literal entries; used for nested creators.
    Literals,
}

/// Resolves fields to values for a single entity construction.
///
/// A look-up scans its scopes from the most specific to the least specific;
/// the first scope holding an entry for a field decides how it resolves.
/// Fields without any entry fall back to a default.
///
/// Values produced by suppliers, generators, and nested creators are
/// remembered, so reading the same field twice during one construction
/// yields the same value. Every entity gets a fresh look-up, so the next
/// entity draws new values.
pub struct LookUp<'s> {
    scopes: Vec<&'s OverrideScope>,
    view: View,
    resolved: HashMap<FieldId, ErasedValue>,
}

impl<'s> LookUp<'s> {
    /// Creates a look-up over `scopes`, ordered from highest to lowest
    /// precedence.
    #[must_use]
    pub fn new(scopes: Vec<&'s OverrideScope>) -> Self {
        Self {
            scopes,
            view: View::Full,
            resolved: HashMap::new(),
        }
    }

    /// A look-up for nested creators: it sees the same scopes but only their
    /// literal and absent entries, and keeps its own memory of values.
    fn nested(&self) -> Self {
        Self {
            scopes: self.scopes.clone(),
            view: View::Literals,
            resolved: HashMap::new(),
        }
    }

    /// Resolves `field`, falling back to its declared default.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] when a nested creator fails or a stored
    /// value does not match the field's type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fixture_forge::{Field, LookUp, OverrideScope, Overrides};
    ///
    /// let name = Field::new("name", String::from("defaultName"));
    /// let value = Field::new("value", String::from("defaultValue"));
    /// let scope = OverrideScope::new().override_value(&name, "custom");
    ///
    /// let mut lookup = LookUp::new(vec![&scope]);
    /// assert_eq!(lookup.get(&name)?, "custom");
    /// assert_eq!(lookup.get(&value)?, "defaultValue");
    /// # Ok::<_, fixture_forge::FixtureError>(())
    /// ```
    pub fn get<V>(&mut self, field: &Field<V>) -> FixtureResult<V>
    where
        V: Clone + 'static,
    {
        match self.resolve(field)? {
            Some(value) => Ok(value),
            None => Ok(field.default_value().clone()),
        }
    }

    /// Resolves `field`, falling back to `default` instead of the declared
    /// default.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] when a nested creator fails or a stored
    /// value does not match the field's type.
    pub fn get_or<V>(&mut self, field: &Field<V>, default: V) -> FixtureResult<V>
    where
        V: Clone + 'static,
    {
        Ok(self.resolve(field)?.unwrap_or(default))
    }

    /// Indicates whether any visible scope overrides `field`.
    #[must_use]
    pub fn contains<V>(&self, field: &Field<V>) -> bool {
        self.find(field.id()).is_some()
    }

    /// Remembers `value` as the resolution of `field` for this construction.
    pub(crate) fn put<V: 'static>(&mut self, field: &Field<V>, value: V) {
        self.resolved.insert(field.id(), Box::new(value));
    }

    /// Finds the entry of the most specific scope configuring `id`.
    ///
    /// That scope alone decides. In the literal-only view a non-literal entry
    /// hides the field entirely, so it falls back to its default.
    fn find(&self, id: FieldId) -> Option<&'s Entry> {
        let entry = self
            .scopes
            .iter()
            .copied()
            .find_map(|scope| scope.entry(id))?;
        (self.view == View::Full || entry.is_literal()).then_some(entry)
    }

    fn resolve<V>(&mut self, field: &Field<V>) -> FixtureResult<Option<V>>
    where
        V: Clone + 'static,
    {
        if let Some(remembered) = self.resolved.get(&field.id()) {
            return cloned(field, &**remembered).map(Some);
        }
        let Some(entry) = self.find(field.id()) else {
            tracing::trace!(field = field.name(), source = "default", "resolved field");
            return Ok(None);
        };
        tracing::trace!(field = field.name(), source = entry.kind(), "resolved field");
        match entry {
            Entry::Absent(value) | Entry::Literal(value) => cloned(field, &**value).map(Some),
            Entry::Creator(creator) => {
                let mut nested = self.nested();
                let value = creator.create_erased(&mut nested)?;
                self.remember(field, value).map(Some)
            }
            Entry::Supplier(supplier) => self.remember(field, (**supplier)()).map(Some),
            Entry::Generator(generator) => {
                let value = {
                    let mut draw = generator.borrow_mut();
                    (*draw)()
                };
                self.remember(field, value).map(Some)
            }
        }
    }

    fn remember<V>(&mut self, field: &Field<V>, value: ErasedValue) -> FixtureResult<V>
    where
        V: Clone + 'static,
    {
        let typed = value
            .downcast::<V>()
            .map_err(|_| FixtureError::type_mismatch::<V>(field.name()))?;
        let resolved = V::clone(&typed);
        self.put(field, *typed);
        Ok(resolved)
    }
}

impl Default for LookUp<'_> {
    /// A look-up without scopes: every field resolves to its default.
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

fn cloned<V>(field: &Field<V>, value: &dyn Any) -> FixtureResult<V>
where
    V: Clone + 'static,
{
    value
        .downcast_ref::<V>()
        .cloned()
        .ok_or_else(|| FixtureError::type_mismatch::<V>(field.name()))
}
