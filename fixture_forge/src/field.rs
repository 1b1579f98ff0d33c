//! Typed attribute declarations used as resolution keys.

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_FIELD_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a [`Field`].
///
/// Identities are allocated when a field is declared, so two fields never
/// collide even when they share a value type and a name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldId(u64);

impl FieldId {
    fn next() -> Self {
        Self(NEXT_FIELD_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw identity value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A named attribute of a fixture together with its declared default.
///
/// Fields are declared once, usually in a `static` behind a
/// [`std::sync::LazyLock`], and shared by every creator and builder that
/// refers to the attribute. The default is fixed at declaration time.
///
/// # Examples
///
/// ```rust
/// use fixture_forge::Field;
///
/// let name = Field::new("name", String::from("defaultName"));
/// let value = Field::new("value", String::from("defaultName"));
///
/// assert_eq!(name.default_value(), "defaultName");
/// assert_ne!(name.id(), value.id());
/// ```
pub struct Field<T> {
    id: FieldId,
    name: Cow<'static, str>,
    default: T,
}

impl<T> Field<T> {
    /// Declares a field called `name` whose default value is `default`.
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>, default: T) -> Self {
        Self {
            id: FieldId::next(),
            name: name.into(),
            default,
        }
    }

    /// Returns the identity used to key overrides for this field.
    #[must_use]
    pub const fn id(&self) -> FieldId {
        self.id
    }

    /// Returns the declared name of the field.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the default value declared for the field.
    #[must_use]
    pub const fn default_value(&self) -> &T {
        &self.default
    }
}

impl<T: Default> Field<T> {
    /// Declares a field whose default is `T::default()`.
    #[must_use]
    pub fn defaulted(name: impl Into<Cow<'static, str>>) -> Self {
        Self::new(name, T::default())
    }
}

impl<T> PartialEq for Field<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> Eq for Field<T> {}

impl<T> Hash for Field<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("default", &self.default)
            .finish()
    }
}
