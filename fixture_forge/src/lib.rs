//! Typed test-fixture builders with layered field overrides.
//!
//! A [`Creator`] assembles an entity by reading every attribute through a
//! [`LookUp`]. The look-up resolves each [`Field`] through the override
//! scopes configured on a builder, falling back to the field's declared
//! default, so tests only spell out the values they care about.
//!
//! ```rust
//! use std::sync::LazyLock;
//!
//! use fixture_forge::{Builder, Field, FixtureResult, LookUp, Overrides};
//!
//! #[derive(Debug, PartialEq)]
//! struct Account {
//!     owner: String,
//!     balance: i64,
//! }
//!
//! static OWNER: LazyLock<Field<String>> =
//!     LazyLock::new(|| Field::new("owner", String::from("alice")));
//! static BALANCE: LazyLock<Field<i64>> = LazyLock::new(|| Field::new("balance", 0));
//!
//! fn account(lookup: &mut LookUp<'_>) -> FixtureResult<Account> {
//!     Ok(Account {
//!         owner: lookup.get(&OWNER)?,
//!         balance: lookup.get(&BALANCE)?,
//!     })
//! }
//!
//! let rich = Builder::new()
//!     .entity(account)
//!     .override_value(&BALANCE, 1_000_i64)
//!     .get()?;
//! assert_eq!(rich.owner, "alice");
//! assert_eq!(rich.balance, 1_000);
//!
//! let accounts = Builder::new().list(account).size(3).get()?;
//! assert_eq!(accounts.len(), 3);
//! # Ok::<_, fixture_forge::FixtureError>(())
//! ```

pub use fixture_forge_macros::Fixture;

mod builder;
mod creator;
mod entity;
mod error;
mod field;
pub mod generators;
mod list;
mod lookup;
mod overrides;
mod result_ext;
mod settings;

pub use builder::{Builder, ListBuilder};
pub use creator::{Creator, Fixture};
pub use entity::EntityBuilder;
pub use error::FixtureError;
pub use field::{Field, FieldId};
pub use generators::RandomSource;
pub use list::{ElementBuilder, ElementListBuilder, FixedSizeListBuilder};
pub use lookup::LookUp;
pub use overrides::{OverrideScope, Overrides};
pub use result_ext::FixtureResultExt;
pub use settings::{CONFIG_PATH_VAR, DEFAULT_CONFIG_FILE, ENV_PREFIX, Settings};

/// Result type returned by fixture construction.
pub type FixtureResult<T> = Result<T, FixtureError>;
