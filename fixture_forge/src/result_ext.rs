//! Extension for mapping collaborator errors to `FixtureResult` concisely.
//!
//! Creators often call fallible constructors of the entity under test. These
//! helpers replace `.map_err(|e| FixtureError::creator::<E>(e))` with a
//! single call.
//!
//! # Examples
//!
//! ```
//! use fixture_forge::{FixtureResult, FixtureResultExt};
//!
//! struct Port(u16);
//!
//! fn port(raw: &str) -> FixtureResult<Port> {
//!     raw.parse::<u16>().map(Port).into_fixture::<Port>()
//! }
//!
//! assert!(port("8080").is_ok());
//! assert!(port("eighty").is_err());
//! ```

use std::fmt::Display;

use crate::{FixtureError, FixtureResult};

/// Maps any `Result<T, E>` with a displayable error into a creator failure.
pub trait FixtureResultExt<T> {
    /// Convert into `FixtureResult<T>`, attributing failures to entity `E`.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::Creator`] carrying the original message when
    /// the input is `Err`.
    fn into_fixture<E: ?Sized>(self) -> FixtureResult<T>;
}

impl<T, Err> FixtureResultExt<T> for Result<T, Err>
where
    Err: Display,
{
    fn into_fixture<E: ?Sized>(self) -> FixtureResult<T> {
        self.map_err(FixtureError::creator::<E>)
    }
}
