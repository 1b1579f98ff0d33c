//! Heterogeneous lists built from per-element override scopes.

use std::any::type_name;
use std::fmt;
use std::rc::Rc;

use super::build_elements;
use crate::{Creator, FixtureResult, OverrideScope, Overrides};

/// Accumulates one override scope per prospective element.
///
/// Overrides applied to the list builder itself are list-wide: they apply to
/// every element that does not configure the same field. Elements are built
/// in declaration order. A list without declared elements builds a single
/// entity from the list-wide overrides and defaults.
///
/// # Examples
///
/// ```rust
/// use std::sync::LazyLock;
///
/// use fixture_forge::{Builder, Field, FixtureResult, LookUp, Overrides};
///
/// static NAME: LazyLock<Field<String>> =
///     LazyLock::new(|| Field::new("name", String::from("defaultName")));
///
/// fn name(lookup: &mut LookUp<'_>) -> FixtureResult<String> {
///     lookup.get(&NAME)
/// }
///
/// let names = Builder::new()
///     .list(name)
///     .elements()
///     .element()
///     .override_value(&NAME, "first")
///     .end()
///     .element()
///     .end()
///     .get()?;
/// assert_eq!(names, vec!["first", "defaultName"]);
/// # Ok::<_, fixture_forge::FixtureError>(())
/// ```
pub struct ElementListBuilder<T> {
    creator: Rc<dyn Creator<T>>,
    shared: OverrideScope,
    elements: Vec<OverrideScope>,
}

impl<T> ElementListBuilder<T> {
    /// Creates an empty list builder for `creator`.
    #[must_use]
    pub fn new(creator: Rc<dyn Creator<T>>) -> Self {
        Self {
            creator,
            shared: OverrideScope::new(),
            elements: Vec::new(),
        }
    }

    /// Opens the scope of the next element.
    #[must_use]
    pub fn element(self) -> ElementBuilder<T> {
        ElementBuilder {
            list: self,
            scope: OverrideScope::new(),
        }
    }

    /// Returns the number of declared elements.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.elements.len()
    }

    /// Indicates whether no element has been declared yet.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Builds one entity per declared element, or a single entity when none
    /// were declared.
    ///
    /// # Errors
    ///
    /// Returns [`crate::FixtureError::Element`] wrapping the first failure;
    /// the remaining elements are not built.
    pub fn get(self) -> FixtureResult<Vec<T>> {
        let Self {
            creator,
            shared,
            mut elements,
        } = self;
        if elements.is_empty() {
            elements.push(OverrideScope::new());
        }
        build_elements(&creator, elements.into_iter(), &shared)
    }

    fn push(&mut self, scope: OverrideScope) {
        self.elements.push(scope);
    }
}

impl<T> Overrides for ElementListBuilder<T> {
    fn scope_mut(&mut self) -> &mut OverrideScope {
        &mut self.shared
    }
}

impl<T> fmt::Debug for ElementListBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementListBuilder")
            .field("entity", &type_name::<T>())
            .field("shared", &self.shared)
            .field("elements", &self.elements)
            .finish()
    }
}

/// Collects the overrides of a single list element.
///
/// [`ElementBuilder::end`] closes the element and returns control to the
/// list builder; nothing is resolved until the list's `get()`.
pub struct ElementBuilder<T> {
    list: ElementListBuilder<T>,
    scope: OverrideScope,
}

impl<T> ElementBuilder<T> {
    /// Closes this element and returns the owning list builder.
    #[must_use]
    pub fn end(self) -> ElementListBuilder<T> {
        let Self { mut list, scope } = self;
        list.push(scope);
        list
    }
}

impl<T> Overrides for ElementBuilder<T> {
    fn scope_mut(&mut self) -> &mut OverrideScope {
        &mut self.scope
    }
}

impl<T> fmt::Debug for ElementBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementBuilder")
            .field("index", &self.list.len())
            .field("scope", &self.scope)
            .finish()
    }
}
