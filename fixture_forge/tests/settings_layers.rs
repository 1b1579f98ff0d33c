//! Layered settings as seen through `Builder::load`.

use anyhow::{Result, ensure};
use fixture_forge::{Builder, CONFIG_PATH_VAR, DEFAULT_CONFIG_FILE, FixtureError, Settings};
use rstest::rstest;
use test_helpers::figment::{figment_error, with_jail};
use test_helpers::pojo::creator;

#[rstest]
fn loaded_builder_sizes_lists_from_the_file() -> Result<()> {
    let pojos = with_jail(|jail| {
        jail.create_file(DEFAULT_CONFIG_FILE, "default_list_size = 4")?;
        let builder = Builder::load().map_err(figment_error)?;
        builder.list(creator).get().map_err(figment_error)
    })?;
    ensure!(pojos.len() == 4, "expected four pojos, got {}", pojos.len());
    Ok(())
}

#[rstest]
#[case::defaults_only(None, None, 1)]
#[case::file_only(Some("default_list_size = 2"), None, 2)]
#[case::environment_wins(Some("default_list_size = 2"), Some("6"), 6)]
fn list_size_layers_in_precedence_order(
    #[case] file: Option<&str>,
    #[case] env: Option<&str>,
    #[case] expected: usize,
) -> Result<()> {
    let settings = with_jail(|jail| {
        if let Some(contents) = file {
            jail.create_file(DEFAULT_CONFIG_FILE, contents)?;
        }
        if let Some(value) = env {
            jail.set_env("FIXTURE_FORGE_DEFAULT_LIST_SIZE", value);
        }
        Settings::load().map_err(figment_error)
    })?;
    ensure!(
        settings.default_list_size == expected,
        "expected {expected}, got {}",
        settings.default_list_size
    );
    Ok(())
}

#[rstest]
fn explicit_file_location_is_used() -> Result<()> {
    let settings = with_jail(|jail| {
        jail.create_file("forge.toml", "seed = 1234")?;
        jail.set_env(CONFIG_PATH_VAR, "forge.toml");
        Settings::load().map_err(figment_error)
    })?;
    ensure!(settings.seed == Some(1234), "seed not read: {settings:?}");
    Ok(())
}

#[rstest]
fn seeded_settings_reproduce_generated_values() -> Result<()> {
    let (first, second) = with_jail(|jail| {
        jail.set_env("FIXTURE_FORGE_SEED", "77");
        let builder = Builder::load().map_err(figment_error)?;
        let mut left = builder.random().string(10);
        let mut right = builder.random().string(10);
        Ok((left(), right()))
    })?;
    ensure!(first == second, "seeded sources diverged: {first} vs {second}");
    Ok(())
}

#[rstest]
fn invalid_settings_surface_as_errors() -> Result<()> {
    let outcome = with_jail(|jail| {
        jail.set_env("FIXTURE_FORGE_DEFAULT_LIST_SIZE", "0");
        Ok(Builder::load().err())
    })?;
    ensure!(
        matches!(outcome, Some(FixtureError::Validation { .. })),
        "expected a validation error, got {outcome:?}"
    );
    Ok(())
}
