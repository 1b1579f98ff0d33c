//! Shared helpers for working with `figment::Jail` in tests.
//!
//! Settings tests mutate the working directory and environment, so they run
//! inside a jail. These helpers return the closure's output as an
//! `anyhow::Result` and bridge fixture errors into figment's error type.

use anyhow::{Result, anyhow};

/// Executes `f` inside a [`figment::Jail`], returning the closure's output.
///
/// The jail is torn down once the closure completes, even when it fails.
///
/// # Errors
///
/// Returns an error if the jail initialisation fails or the closure returns a
/// [`figment::error::Error`].
///
/// # Examples
///
/// ```
/// use fixture_forge::Settings;
/// use fixture_forge_test_helpers::figment::{figment_error, with_jail};
///
/// let settings = with_jail(|jail| {
///     jail.set_env("FIXTURE_FORGE_SEED", "5");
///     Settings::load().map_err(figment_error)
/// })?;
/// assert_eq!(settings.seed, Some(5));
/// # Ok::<_, anyhow::Error>(())
/// ```
pub fn with_jail<F, T>(f: F) -> Result<T>
where
    F: FnOnce(&mut figment::Jail) -> figment::error::Result<T>,
{
    let mut output = None;
    figment::Jail::try_with(|j| {
        output = Some(f(j)?);
        Ok(())
    })
    .map_err(|err| anyhow!(err.to_string()))?;
    output.ok_or_else(|| anyhow!("jail closure did not return a value"))
}

/// Converts any displayable error, such as a `FixtureError`, into a
/// [`figment::Error`] so it can cross a jail boundary with `?`.
#[expect(
    clippy::needless_pass_by_value,
    reason = "callers map owned errors straight out of `map_err`"
)]
pub fn figment_error<E: ToString>(err: E) -> figment::Error {
    figment::Error::from(err.to_string())
}
