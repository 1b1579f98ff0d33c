//! Sample domain shared by the integration and behavioural suites.
//!
//! `Pojo` carries two optional strings so every override kind, including
//! nullification, can be exercised against it. Three families of fields
//! exist:
//!
//! - [`NAME`] and [`VALUE`] declare no default; [`creator`] supplies one at
//!   the call site.
//! - [`NAME2`] and [`VALUE2`] declare `defaultName` and `defaultValue`.
//! - [`TEST_VALUE`] feeds [`value_test_creator`].

use std::sync::LazyLock;

use fixture_forge::{Field, FixtureResult, LookUp};

/// Optional text, the type of every `Pojo` attribute.
pub type Text = Option<String>;

/// Entity built by the sample creators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pojo {
    /// Display name.
    pub name: Text,
    /// Arbitrary payload.
    pub value: Text,
}

/// Name field without a declared default.
pub static NAME: LazyLock<Field<Text>> = LazyLock::new(|| Field::new("name", None));

/// Value field without a declared default.
pub static VALUE: LazyLock<Field<Text>> = LazyLock::new(|| Field::new("value", None));

/// Name field declaring `defaultName`.
pub static NAME2: LazyLock<Field<Text>> =
    LazyLock::new(|| Field::new("name2", text("defaultName")));

/// Value field declaring `defaultValue`.
pub static VALUE2: LazyLock<Field<Text>> =
    LazyLock::new(|| Field::new("value2", text("defaultValue")));

/// Field read by [`value_test_creator`], declaring `test1`.
pub static TEST_VALUE: LazyLock<Field<Text>> =
    LazyLock::new(|| Field::new("testValue", text("test1")));

/// Wraps a string slice as present [`Text`].
#[must_use]
pub fn text(value: &str) -> Text {
    Some(value.to_owned())
}

/// Builds a `Pojo` from [`NAME`] and [`VALUE`], defaulting at the call site.
///
/// # Errors
///
/// Propagates look-up failures.
pub fn creator(lookup: &mut LookUp<'_>) -> FixtureResult<Pojo> {
    Ok(Pojo {
        name: lookup.get_or(&NAME, text("defaultName"))?,
        value: lookup.get_or(&VALUE, text("defaultValue"))?,
    })
}

/// Builds a `Pojo` from [`NAME2`] and [`VALUE2`] and their declared defaults.
///
/// # Errors
///
/// Propagates look-up failures.
pub fn creator_with_predefined_defaults(lookup: &mut LookUp<'_>) -> FixtureResult<Pojo> {
    Ok(Pojo {
        name: lookup.get(&NAME2)?,
        value: lookup.get(&VALUE2)?,
    })
}

/// Builds a `Pojo` whose name falls back to [`value_test_creator`] when
/// [`NAME2`] is not overridden.
///
/// # Errors
///
/// Propagates look-up failures.
pub fn creator_with_predefined_creator_defaults(
    lookup: &mut LookUp<'_>,
) -> FixtureResult<Pojo> {
    let fallback = value_test_creator(lookup)?;
    Ok(Pojo {
        name: lookup.get_or(&NAME2, fallback)?,
        value: lookup.get(&VALUE2)?,
    })
}

/// Always produces `test1`.
///
/// # Errors
///
/// Never fails; the signature matches the creator seam.
pub fn value_creator(_lookup: &mut LookUp<'_>) -> FixtureResult<Text> {
    Ok(text("test1"))
}

/// Produces whatever [`TEST_VALUE`] resolves to.
///
/// # Errors
///
/// Propagates look-up failures.
pub fn value_test_creator(lookup: &mut LookUp<'_>) -> FixtureResult<Text> {
    lookup.get(&TEST_VALUE)
}
