//! Creator seam between the resolution engine and collaborator types.

use crate::{FixtureResult, LookUp};

/// Assembles an entity from values resolved through a [`LookUp`].
///
/// A creator must read every input through the look-up rather than holding
/// its own defaults, so override precedence applies uniformly. Any function
/// or closure of the shape `Fn(&mut LookUp<'_>) -> FixtureResult<T>` is a
/// creator, and creators can be used as field overrides to derive one value
/// from others.
///
/// # Examples
///
/// ```rust
/// use fixture_forge::{Creator, Field, FixtureResult, LookUp};
///
/// struct Greeting {
///     text: String,
/// }
///
/// struct Shout<'f>(&'f Field<String>);
///
/// impl Creator<Greeting> for Shout<'_> {
///     fn create(&self, lookup: &mut LookUp<'_>) -> FixtureResult<Greeting> {
///         let text = lookup.get(self.0)?.to_uppercase();
///         Ok(Greeting { text })
///     }
/// }
///
/// let word = Field::new("word", String::from("hello"));
/// let greeting = Shout(&word).create(&mut LookUp::default())?;
/// assert_eq!(greeting.text, "HELLO");
/// # Ok::<_, fixture_forge::FixtureError>(())
/// ```
pub trait Creator<T> {
    /// Builds the entity, reading fields through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::FixtureError`] when a field cannot be resolved or
    /// the creator rejects the resolved values.
    fn create(&self, lookup: &mut LookUp<'_>) -> FixtureResult<T>;
}

impl<T, F> Creator<T> for F
where
    F: Fn(&mut LookUp<'_>) -> FixtureResult<T>,
{
    fn create(&self, lookup: &mut LookUp<'_>) -> FixtureResult<T> {
        self(lookup)
    }
}

/// Types that carry their own canonical creator.
///
/// Implemented by hand or with `#[derive(Fixture)]`, which declares one
/// [`crate::Field`] per struct member.
///
/// ```rust
/// use fixture_forge::{Builder, Fixture, Overrides};
///
/// #[derive(Debug, Fixture)]
/// struct Server {
///     #[fixture(default = String::from("localhost"))]
///     host: String,
///     #[fixture(default = 8080)]
///     port: u16,
/// }
///
/// let server = Builder::new()
///     .fixture::<Server>()
///     .override_value(Server::port_field(), 9000_u16)
///     .get()?;
/// assert_eq!(server.host, "localhost");
/// assert_eq!(server.port, 9000);
/// # Ok::<_, fixture_forge::FixtureError>(())
/// ```
pub trait Fixture: Sized + 'static {
    /// Builds `Self` from values resolved through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::FixtureError`] when a field cannot be resolved.
    fn create(lookup: &mut LookUp<'_>) -> FixtureResult<Self>;
}
