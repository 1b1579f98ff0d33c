//! Error types produced while building fixtures.

mod constructors;
mod types;

pub use types::FixtureError;
