//! Layered settings for builders.
//!
//! Values are merged in increasing precedence: built-in defaults, an
//! optional TOML file, then `FIXTURE_FORGE_*` environment variables. The
//! file is read from the path in [`CONFIG_PATH_VAR`] when set, otherwise
//! from [`DEFAULT_CONFIG_FILE`] in the working directory if it exists.

use camino::Utf8PathBuf;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::{FixtureError, FixtureResult};

/// Prefix shared by every environment variable read into [`Settings`].
pub const ENV_PREFIX: &str = "FIXTURE_FORGE_";

/// Environment variable naming an explicit settings file.
pub const CONFIG_PATH_VAR: &str = "FIXTURE_FORGE_CONFIG";

/// File consulted in the working directory when no explicit path is set.
pub const DEFAULT_CONFIG_FILE: &str = "fixture_forge.toml";

/// Defaults applied by [`crate::Builder`].
///
/// # Examples
///
/// ```rust
/// use fixture_forge::Settings;
///
/// let settings = Settings::default().with_default_list_size(4).with_seed(7);
/// assert_eq!(settings.default_list_size, 4);
/// assert_eq!(settings.seed, Some(7));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Number of entities built by a list without an explicit size.
    pub default_list_size: usize,
    /// Seed for [`crate::RandomSource`]; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_list_size: 1,
            seed: None,
        }
    }
}

impl Settings {
    /// Replaces the default list size.
    #[must_use]
    pub const fn with_default_list_size(mut self, size: usize) -> Self {
        self.default_list_size = size;
        self
    }

    /// Fixes the random seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns the provider stack used by [`Settings::load`].
    ///
    /// Callers may merge further providers before handing the result to
    /// [`Settings::load_from`].
    #[must_use]
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(config_path()))
            .merge(Env::prefixed(ENV_PREFIX).ignore(&["config"]))
    }

    /// Loads settings from the default provider stack.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::Validation`] when [`CONFIG_PATH_VAR`] names a
    /// missing file or a value is rejected, and [`FixtureError::Settings`]
    /// when a provider cannot be read or a value has the wrong type.
    pub fn load() -> FixtureResult<Self> {
        if let Some(path) = explicit_config_path()
            && !path.is_file()
        {
            return Err(FixtureError::validation(
                CONFIG_PATH_VAR,
                format!("settings file '{path}' does not exist"),
            ));
        }
        Self::load_from(&Self::figment())
    }

    /// Extracts and validates settings from `figment`.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::Settings`] when extraction fails and
    /// [`FixtureError::Validation`] when a value is rejected.
    pub fn load_from(figment: &Figment) -> FixtureResult<Self> {
        let settings: Self = figment.extract().map_err(FixtureError::settings)?;
        settings.validate()?;
        tracing::debug!(
            default_list_size = settings.default_list_size,
            seeded = settings.seed.is_some(),
            "loaded fixture settings"
        );
        Ok(settings)
    }

    /// Checks the invariants the builders rely on.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::Validation`] when `default_list_size` is zero.
    pub fn validate(&self) -> FixtureResult<()> {
        if self.default_list_size == 0 {
            return Err(FixtureError::validation(
                "default_list_size",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

fn explicit_config_path() -> Option<Utf8PathBuf> {
    std::env::var(CONFIG_PATH_VAR)
        .ok()
        .filter(|path| !path.is_empty())
        .map(Utf8PathBuf::from)
}

fn config_path() -> Utf8PathBuf {
    explicit_config_path().unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_CONFIG_FILE))
}
