// Copyright 2025 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Item acceptance and display formatting.

use alloc::string::{String, ToString};

/// How a list's items are judged and shown.
///
/// The engine consults [`ItemModel::validate`] before an item may enter the
/// list and [`ItemModel::format`] whenever it needs a display label.
/// Formatting is total: once an item is in the list it can always be
/// labelled, so hosts never have to handle a formatting failure mid-render.
pub trait ItemModel<T> {
    /// Whether `item` may enter the list.
    ///
    /// The default accepts everything; use [`ItemModel::with_validator`] or
    /// override this to restrict.
    fn validate(&self, item: &T) -> bool {
        let _ = item;
        true
    }

    /// The display label for `item`.
    fn format(&self, item: &T) -> String;

    /// Restricts this model with an additional acceptance predicate.
    ///
    /// The resulting model accepts an item only when both `predicate` and
    /// the underlying model do. Formatting is unchanged.
    fn with_validator<F>(self, predicate: F) -> Validated<Self, F>
    where
        Self: Sized,
        F: Fn(&T) -> bool,
    {
        Validated {
            inner: self,
            predicate,
        }
    }
}

/// A model layered with an extra acceptance predicate.
///
/// Built by [`ItemModel::with_validator`]; layers can be stacked.
#[derive(Clone, Debug)]
pub struct Validated<M, F> {
    inner: M,
    predicate: F,
}

impl<T, M, F> ItemModel<T> for Validated<M, F>
where
    M: ItemModel<T>,
    F: Fn(&T) -> bool,
{
    fn validate(&self, item: &T) -> bool {
        (self.predicate)(item) && self.inner.validate(item)
    }

    fn format(&self, item: &T) -> String {
        self.inner.format(item)
    }
}

/// Model that labels items through their [`Display`](core::fmt::Display)
/// impl and accepts everything.
#[derive(Copy, Clone, Debug, Default)]
pub struct DisplayModel;

impl<T: core::fmt::Display> ItemModel<T> for DisplayModel {
    fn format(&self, item: &T) -> String {
        item.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_model_accepts_everything() {
        assert!(DisplayModel.validate(&17_u32));
        assert_eq!(DisplayModel.format(&17_u32), "17");
    }

    #[test]
    fn with_validator_restricts_acceptance_but_not_formatting() {
        let model = DisplayModel.with_validator(|n: &u32| *n % 2 == 0);
        assert!(model.validate(&4));
        assert!(!model.validate(&5));
        assert_eq!(model.format(&5), "5");
    }

    #[test]
    fn stacked_validators_must_all_accept() {
        let model = DisplayModel
            .with_validator(|n: &u32| *n % 2 == 0)
            .with_validator(|n: &u32| *n < 10);
        assert!(model.validate(&4));
        assert!(!model.validate(&12));
        assert!(!model.validate(&7));
    }
}
