//! List construction in homogeneous and heterogeneous modes.
//!
//! [`FixedSizeListBuilder`] produces `n` entities that share one override
//! scope, while [`ElementListBuilder`] produces one entity per declared
//! element scope.

mod element;
mod fixed;

pub use element::{ElementBuilder, ElementListBuilder};
pub use fixed::FixedSizeListBuilder;

use std::any::type_name;
use std::rc::Rc;

use crate::{Creator, EntityBuilder, FixtureError, FixtureResult, OverrideScope};

/// Builds one entity per element scope, each layered over `shared`.
///
/// Elements are built in order; the first failure abandons the list and is
/// reported with its index.
fn build_elements<T, I>(
    creator: &Rc<dyn Creator<T>>,
    elements: I,
    shared: &OverrideScope,
) -> FixtureResult<Vec<T>>
where
    I: ExactSizeIterator<Item = OverrideScope>,
{
    tracing::debug!(
        entity = type_name::<T>(),
        elements = elements.len(),
        shared_overrides = shared.len(),
        "building entity list"
    );
    elements
        .enumerate()
        .map(|(index, scope)| {
            EntityBuilder::layered(Rc::clone(creator), scope, vec![shared])
                .get()
                .map_err(|err| FixtureError::element(index, err))
        })
        .collect()
}
