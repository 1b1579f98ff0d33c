//! Primary error enum for fixture construction and settings loading.

use figment::Error as FigmentError;
use thiserror::Error;

/// Errors that can occur while resolving fields or building fixtures.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FixtureError {
    /// A creator reported that it could not assemble its entity.
    #[error("failed to create {entity}: {message}")]
    Creator {
        /// Type name of the entity being created.
        entity: &'static str,
        /// Human-readable explanation supplied by the creator.
        message: String,
    },

    /// A stored override did not hold a value of the field's type.
    #[error("field '{field}' does not hold a value of type {expected}")]
    TypeMismatch {
        /// Name of the field being resolved.
        field: String,
        /// Type the field was declared with.
        expected: &'static str,
    },

    /// Building one element of a list failed; the whole list is abandoned.
    #[error("failed to build list element {index}: {source}")]
    Element {
        /// Zero-based position of the failing element.
        index: usize,
        /// Failure raised while building the element.
        #[source]
        source: Box<FixtureError>,
    },

    /// Settings could not be gathered from their providers.
    #[error("failed to load fixture settings: {0}")]
    Settings(#[from] Box<FigmentError>),

    /// A setting or generator argument was rejected.
    #[error("invalid value for '{key}': {message}")]
    Validation {
        /// Setting or argument that failed validation.
        key: String,
        /// Human-readable explanation of the failure.
        message: String,
    },
}
