//! Homogeneous lists of a fixed size.

use std::any::type_name;
use std::fmt;
use std::rc::Rc;

use super::build_elements;
use crate::{Creator, FixtureResult, OverrideScope, Overrides};

/// Builds `size` entities that share one list-wide override scope.
///
/// Literal and creator overrides resolve identically for every element.
/// Suppliers and generators run once per element, so their values may
/// differ across the list.
///
/// # Examples
///
/// ```rust
/// use std::sync::LazyLock;
///
/// use fixture_forge::{Builder, Field, FixtureResult, LookUp, Overrides};
///
/// static ID: LazyLock<Field<u32>> = LazyLock::new(|| Field::new("id", 0));
///
/// fn id(lookup: &mut LookUp<'_>) -> FixtureResult<u32> {
///     lookup.get(&ID)
/// }
///
/// let mut next = 0;
/// let ids = Builder::new()
///     .list(id)
///     .size(3)
///     .override_generator(&ID, move || {
///         next += 1;
///         next
///     })
///     .get()?;
/// assert_eq!(ids, vec![1, 2, 3]);
/// # Ok::<_, fixture_forge::FixtureError>(())
/// ```
pub struct FixedSizeListBuilder<T> {
    size: usize,
    creator: Rc<dyn Creator<T>>,
    scope: OverrideScope,
}

impl<T> FixedSizeListBuilder<T> {
    /// Creates a builder producing `size` entities with `creator`.
    #[must_use]
    pub fn new(size: usize, creator: Rc<dyn Creator<T>>) -> Self {
        Self {
            size,
            creator,
            scope: OverrideScope::new(),
        }
    }

    /// Returns the number of entities the builder produces.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.size
    }

    /// Indicates whether the builder produces no entities.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Builds exactly `size` entities, in order.
    ///
    /// # Errors
    ///
    /// Returns [`crate::FixtureError::Element`] wrapping the first failure;
    /// the remaining elements are not built.
    pub fn get(self) -> FixtureResult<Vec<T>> {
        let elements = (0..self.size).map(|_| OverrideScope::new());
        build_elements(&self.creator, elements, &self.scope)
    }
}

impl<T> Overrides for FixedSizeListBuilder<T> {
    fn scope_mut(&mut self) -> &mut OverrideScope {
        &mut self.scope
    }
}

impl<T> fmt::Debug for FixedSizeListBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedSizeListBuilder")
            .field("entity", &type_name::<T>())
            .field("size", &self.size)
            .field("scope", &self.scope)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Field, FixtureError, LookUp};
    use anyhow::{Result, ensure};
    use rstest::rstest;
    use std::cell::Cell;
    use std::sync::LazyLock;

    static LABEL: LazyLock<Field<String>> =
        LazyLock::new(|| Field::new("label", String::from("default")));

    fn label(lookup: &mut LookUp<'_>) -> FixtureResult<String> {
        lookup.get(&LABEL)
    }

    fn builder(size: usize) -> FixedSizeListBuilder<String> {
        FixedSizeListBuilder::new(size, Rc::new(label))
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(4)]
    fn produces_exactly_size_defaults(#[case] size: usize) -> Result<()> {
        let labels = builder(size).get()?;
        ensure!(labels.len() == size, "expected {size} labels, got {}", labels.len());
        ensure!(labels.iter().all(|l| l == "default"), "unexpected labels {labels:?}");
        Ok(())
    }

    #[rstest]
    fn literal_override_is_shared() -> Result<()> {
        let labels = builder(2).override_value(&LABEL, "same").get()?;
        ensure!(labels == ["same", "same"], "unexpected labels {labels:?}");
        Ok(())
    }

    #[rstest]
    fn supplier_runs_per_element() -> Result<()> {
        let counter = Rc::new(Cell::new(0_u32));
        let calls = Rc::clone(&counter);
        let labels = builder(3)
            .override_supplier(&LABEL, move || {
                calls.set(calls.get() + 1);
                format!("label-{}", calls.get())
            })
            .get()?;
        ensure!(
            labels == ["label-1", "label-2", "label-3"],
            "unexpected labels {labels:?}"
        );
        ensure!(counter.get() == 3, "supplier ran {} times", counter.get());
        Ok(())
    }

    #[rstest]
    fn failing_element_aborts_the_list() {
        let mut drawn = 0_u32;
        let result = FixedSizeListBuilder::new(
            3,
            Rc::new(|lookup: &mut LookUp<'_>| -> FixtureResult<String> {
                let value = lookup.get(&LABEL)?;
                if value == "2" {
                    return Err(FixtureError::creator::<String>("two is not allowed"));
                }
                Ok(value)
            }),
        )
        .override_generator(&LABEL, move || {
            drawn += 1;
            drawn.to_string()
        })
        .get();
        match result {
            Err(FixtureError::Element { index, source }) => {
                assert_eq!(index, 1);
                assert!(matches!(*source, FixtureError::Creator { .. }));
            }
            other => panic!("expected element failure, got {other:?}"),
        }
    }

    #[rstest]
    fn reports_its_size() {
        assert_eq!(builder(5).len(), 5);
        assert!(builder(0).is_empty());
    }
}
