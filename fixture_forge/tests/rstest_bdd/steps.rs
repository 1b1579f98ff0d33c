//! Step definitions for building `Pojo` lists.

use anyhow::{Result, anyhow, ensure};
use fixture_forge::{Builder, Overrides, Settings};
use rstest_bdd_macros::{given, then, when};
use test_helpers::pojo::{NAME, Pojo, VALUE, creator};
use test_helpers::text::optional_text;

use crate::fixtures::ForgeContext;

fn builder(forge_context: &ForgeContext) -> Builder {
    forge_context.builder.take().unwrap_or_default()
}

fn built(forge_context: &ForgeContext) -> Result<Vec<Pojo>> {
    let result = forge_context
        .result
        .take()
        .ok_or_else(|| anyhow!("no list has been built"))?;
    result.map_err(anyhow::Error::from)
}

#[given("a builder whose lists default to {size:usize} entities")]
fn sized_builder(forge_context: &ForgeContext, size: usize) -> Result<()> {
    let settings = Settings::default().with_default_list_size(size);
    forge_context.builder.set(Builder::with_settings(settings)?);
    Ok(())
}

#[given("an element named {name}")]
fn add_element(forge_context: &ForgeContext, name: String) {
    let mut names = forge_context.element_names.take().unwrap_or_default();
    names.push(optional_text(&name));
    forge_context.element_names.set(names);
}

#[given("every element shares the value {value}")]
fn share_value(forge_context: &ForgeContext, value: String) -> Result<()> {
    ensure!(
        forge_context.shared_value.is_empty(),
        "shared value already initialised"
    );
    forge_context.shared_value.set(optional_text(&value));
    Ok(())
}

#[when("the list is built from its elements")]
fn build_from_elements(forge_context: &ForgeContext) {
    let names = forge_context.element_names.take().unwrap_or_default();
    let mut list = builder(forge_context).list(creator).elements();
    if let Some(value) = forge_context.shared_value.take() {
        list = list.override_value(&VALUE, value);
    }
    for name in names {
        list = list.element().override_value(&NAME, name).end();
    }
    forge_context.result.set(list.get());
}

#[when("a list of {count:usize} pojos is built")]
fn build_sized(forge_context: &ForgeContext, count: usize) {
    let result = builder(forge_context).list(creator).size(count).get();
    forge_context.result.set(result);
}

#[when("a list is built without a size")]
fn build_unsized(forge_context: &ForgeContext) {
    let result = builder(forge_context).list(creator).get();
    forge_context.result.set(result);
}

#[then("the list holds {count:usize} pojos")]
fn check_count(forge_context: &ForgeContext, count: usize) -> Result<()> {
    let pojos = built(forge_context)?;
    ensure!(
        pojos.len() == count,
        "expected {count} pojos, got {}",
        pojos.len()
    );
    forge_context.result.set(Ok(pojos));
    Ok(())
}

#[then("pojo {index:usize} is named {name}")]
fn check_name(forge_context: &ForgeContext, index: usize, name: String) -> Result<()> {
    let pojos = built(forge_context)?;
    let pojo = pojos
        .get(index)
        .ok_or_else(|| anyhow!("missing pojo {index} in {pojos:?}"))?;
    let want = optional_text(&name);
    ensure!(pojo.name == want, "pojo {index} is {pojo:?}; expected name {want:?}");
    forge_context.result.set(Ok(pojos));
    Ok(())
}

#[then("every pojo has the value {value}")]
fn check_values(forge_context: &ForgeContext, value: String) -> Result<()> {
    let pojos = built(forge_context)?;
    let want = optional_text(&value);
    ensure!(
        pojos.iter().all(|p| p.value == want),
        "expected every value to be {want:?} in {pojos:?}"
    );
    forge_context.result.set(Ok(pojos));
    Ok(())
}
