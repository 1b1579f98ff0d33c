//! Constructors for `FixtureError`.

use std::any::type_name;
use std::fmt::Display;

use figment::Error as FigmentError;

use super::FixtureError;

impl FixtureError {
    /// Construct a creator failure for entities of type `E`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixture_forge::FixtureError;
    ///
    /// struct Order;
    /// let err = FixtureError::creator::<Order>("missing customer");
    /// assert!(matches!(err, FixtureError::Creator { .. }));
    /// assert!(err.to_string().ends_with("Order: missing customer"));
    /// ```
    #[must_use]
    pub fn creator<E: ?Sized>(message: impl Display) -> Self {
        Self::Creator {
            entity: type_name::<E>(),
            message: message.to_string(),
        }
    }

    /// Construct a type mismatch for `field`, which was declared as `V`.
    #[must_use]
    pub fn type_mismatch<V: ?Sized>(field: &str) -> Self {
        Self::TypeMismatch {
            field: field.to_owned(),
            expected: type_name::<V>(),
        }
    }

    /// Wrap the failure of the list element at `index`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixture_forge::FixtureError;
    ///
    /// let inner = FixtureError::validation("size", "must be positive");
    /// let err = FixtureError::element(2, inner);
    /// assert!(matches!(err, FixtureError::Element { index: 2, .. }));
    /// ```
    #[must_use]
    pub fn element(index: usize, source: Self) -> Self {
        Self::Element {
            index,
            source: Box::new(source),
        }
    }

    /// Construct a settings error from a [`figment::Error`].
    #[must_use]
    pub fn settings(source: FigmentError) -> Self {
        Self::Settings(Box::new(source))
    }

    /// Construct a validation error for `key`.
    #[must_use]
    pub fn validation(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Returns the innermost error, unwrapping list element wrappers.
    #[must_use]
    pub fn root_cause(&self) -> &Self {
        match self {
            Self::Element { source, .. } => source.root_cause(),
            other => other,
        }
    }
}
