//! Override scopes and the fluent override surface shared by builders.
//!
//! A scope maps field identities to a tagged entry. Values are stored
//! type-erased; the static type is recovered through the [`Field`] handle
//! passed to the look-up, so a mismatch can only arise from a bug in this
//! crate and is reported as [`crate::FixtureError::TypeMismatch`].

use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

use crate::{Creator, Field, FieldId, FixtureResult, LookUp};

pub(crate) type ErasedValue = Box<dyn Any>;
pub(crate) type ErasedSupplier = dyn Fn() -> ErasedValue;
pub(crate) type ErasedGenerator = RefCell<dyn FnMut() -> ErasedValue>;

/// How a single field is resolved within one scope.
pub(crate) enum Entry {
    /// Explicit absence; holds the `None` of the field's option type.
    Absent(Rc<dyn Any>),
    Literal(Rc<dyn Any>),
    Creator(Rc<dyn ErasedCreator>),
    Supplier(Rc<ErasedSupplier>),
    Generator(Rc<ErasedGenerator>),
}

/// A creator whose output type is hidden behind [`Any`].
pub(crate) trait ErasedCreator {
    fn create_erased(&self, lookup: &mut LookUp<'_>) -> FixtureResult<ErasedValue>;
}

struct TypedCreator<C, U> {
    creator: C,
    output: PhantomData<fn() -> U>,
}

impl<C, U> ErasedCreator for TypedCreator<C, U>
where
    C: Creator<U>,
    U: 'static,
{
    fn create_erased(&self, lookup: &mut LookUp<'_>) -> FixtureResult<ErasedValue> {
        self.creator
            .create(lookup)
            .map(|value| Box::new(value) as ErasedValue)
    }
}

impl Entry {
    pub(crate) const fn kind(&self) -> &'static str {
        match self {
            Self::Absent(_) => "absent",
            Self::Literal(_) => "literal",
            Self::Creator(_) => "creator",
            Self::Supplier(_) => "supplier",
            Self::Generator(_) => "generator",
        }
    }

    /// Entries that resolve to a fixed value without running any code.
    pub(crate) const fn is_literal(&self) -> bool {
        matches!(self, Self::Absent(_) | Self::Literal(_))
    }
}

/// The override entries belonging to one builder, list, or list element.
///
/// At most one entry exists per field; a later override for the same field
/// replaces the earlier one.
#[derive(Default)]
pub struct OverrideScope {
    entries: HashMap<FieldId, Entry>,
}

impl OverrideScope {
    /// Creates an empty scope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of overridden fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Indicates whether the scope overrides no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Indicates whether the scope holds an entry for `field`.
    #[must_use]
    pub fn overrides<V>(&self, field: &Field<V>) -> bool {
        self.entries.contains_key(&field.id())
    }

    pub(crate) fn entry(&self, id: FieldId) -> Option<&Entry> {
        self.entries.get(&id)
    }

    fn insert<V>(&mut self, field: &Field<V>, entry: Entry) {
        let kind = entry.kind();
        if let Some(previous) = self.entries.insert(field.id(), entry) {
            tracing::trace!(
                field = field.name(),
                previous = previous.kind(),
                replacement = kind,
                "replaced field override"
            );
        } else {
            tracing::trace!(field = field.name(), kind, "registered field override");
        }
    }
}

impl fmt::Debug for OverrideScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<_> = self
            .entries
            .iter()
            .map(|(id, entry)| (*id, entry.kind()))
            .collect();
        kinds.sort_unstable();
        f.debug_struct("OverrideScope")
            .field("entries", &kinds)
            .finish()
    }
}

/// Fluent override operations shared by every builder.
///
/// Each call consumes the builder and hands it back, so chains read top to
/// bottom and the terminal `get()` is the only way to leave the chain with an
/// entity.
pub trait Overrides: Sized {
    /// Returns the scope that receives overrides from this builder.
    fn scope_mut(&mut self) -> &mut OverrideScope;

    /// Resolves `field` to `value`.
    #[must_use]
    fn override_value<U>(mut self, field: &Field<U>, value: impl Into<U>) -> Self
    where
        U: Clone + 'static,
    {
        let value: Rc<dyn Any> = Rc::new(value.into());
        self.scope_mut().insert(field, Entry::Literal(value));
        self
    }

    /// Resolves `field` by running `creator` against the literal overrides
    /// visible to the entity being built.
    #[must_use]
    fn override_creator<U, C>(mut self, field: &Field<U>, creator: C) -> Self
    where
        U: Clone + 'static,
        C: Creator<U> + 'static,
    {
        let erased: Rc<dyn ErasedCreator> = Rc::new(TypedCreator {
            creator,
            output: PhantomData,
        });
        self.scope_mut().insert(field, Entry::Creator(erased));
        self
    }

    /// Resolves `field` by calling `supplier` once for every entity built.
    #[must_use]
    fn override_supplier<U, F>(mut self, field: &Field<U>, supplier: F) -> Self
    where
        U: Clone + 'static,
        F: Fn() -> U + 'static,
    {
        let erased: Rc<ErasedSupplier> = Rc::new(move || Box::new(supplier()) as ErasedValue);
        self.scope_mut().insert(field, Entry::Supplier(erased));
        self
    }

    /// Resolves `field` by drawing from `generator` once for every entity
    /// built. Generators may keep state, such as a random number generator.
    #[must_use]
    fn override_generator<U, F>(mut self, field: &Field<U>, mut generator: F) -> Self
    where
        U: Clone + 'static,
        F: FnMut() -> U + 'static,
    {
        let erased: Rc<ErasedGenerator> =
            Rc::new(RefCell::new(move || Box::new(generator()) as ErasedValue));
        self.scope_mut().insert(field, Entry::Generator(erased));
        self
    }

    /// Resolves `field` to `None`, regardless of its default.
    #[must_use]
    fn nullify<U>(mut self, field: &Field<Option<U>>) -> Self
    where
        U: Clone + 'static,
    {
        let absent: Rc<dyn Any> = Rc::new(None::<U>);
        self.scope_mut().insert(field, Entry::Absent(absent));
        self
    }
}

impl Overrides for OverrideScope {
    fn scope_mut(&mut self) -> &mut OverrideScope {
        self
    }
}
