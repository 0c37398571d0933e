// Copyright 2025 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hedgerow Action: labelled callbacks for menus and buttons.
//!
//! An [`Action`] pairs a user-visible label with the callback it triggers.
//! Both are fixed at construction; consumers (context menus, widget option
//! sets) only ever read the label and invoke the callback.
//!
//! Actions are generic over the argument their callback receives. List-level
//! actions conventionally take `()`, item-level actions take the concerned
//! item's current index as `usize`.
//!
//! ```rust
//! use hedgerow_action::Action;
//!
//! let mut remove = Action::new("Archive", |index: usize| {
//!     // A real handler would act on the item at `index`.
//!     let _ = index;
//! });
//! assert_eq!(remove.label(), "Archive");
//! remove.invoke(2);
//! ```
//!
//! Consumers accept actions in whole sets, and a set is rejected outright if
//! any member is ill-formed:
//!
//! ```rust
//! use hedgerow_action::{Action, ActionSetError, validate_actions};
//!
//! let actions = [Action::new("Rename", |_: usize| {}), Action::new("  ", |_: usize| {})];
//! assert_eq!(
//!     validate_actions(&actions),
//!     Err(ActionSetError::BlankLabel { index: 1 })
//! );
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::boxed::Box;
use alloc::string::String;

/// A labelled callback.
///
/// The label names the action in menus and buttons; the callback runs when
/// the action is chosen. Neither can be changed after construction.
pub struct Action<A = ()> {
    label: String,
    run: Box<dyn FnMut(A)>,
}

impl<A> Action<A> {
    /// Creates an action from a label and the callback it triggers.
    pub fn new(label: impl Into<String>, run: impl FnMut(A) + 'static) -> Self {
        Self {
            label: label.into(),
            run: Box::new(run),
        }
    }

    /// Returns the user-visible label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Runs the callback with the caller-supplied argument.
    pub fn invoke(&mut self, arg: A) {
        (self.run)(arg);
    }
}

impl<A> core::fmt::Debug for Action<A> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Action")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// Error raised when a supplied action set is ill-formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ActionSetError {
    /// An action in the set has an empty or whitespace-only label.
    ///
    /// Unlabelled actions would render as blank menu entries, so the whole
    /// set is rejected before any of it is stored.
    #[error("action at position {index} has a blank label")]
    BlankLabel {
        /// Position of the offending action within the supplied set.
        index: usize,
    },
}

/// Checks that every action in a set is well-formed.
///
/// Returns the position of the first offending action. Consumers call this
/// before storing a set, so a bad set is rejected whole and the previously
/// stored set stays in effect.
pub fn validate_actions<A>(actions: &[Action<A>]) -> Result<(), ActionSetError> {
    for (index, action) in actions.iter().enumerate() {
        if action.label().trim().is_empty() {
            return Err(ActionSetError::BlankLabel { index });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec;
    use core::cell::Cell;

    #[test]
    fn label_is_fixed_at_construction() {
        let action: Action<()> = Action::new("Rename", |()| {});
        assert_eq!(action.label(), "Rename");
    }

    #[test]
    fn invoke_runs_the_callback_with_the_argument() {
        let seen = Rc::new(Cell::new(None));
        let sink = Rc::clone(&seen);
        let mut action = Action::new("Archive", move |index: usize| sink.set(Some(index)));

        action.invoke(3);
        assert_eq!(seen.get(), Some(3));

        action.invoke(7);
        assert_eq!(seen.get(), Some(7));
    }

    #[test]
    fn empty_set_is_well_formed() {
        let actions: [Action<()>; 0] = [];
        assert_eq!(validate_actions(&actions), Ok(()));
    }

    #[test]
    fn labelled_set_is_well_formed() {
        let actions = vec![
            Action::new("Rename", |_: usize| {}),
            Action::new("Archive", |_: usize| {}),
        ];
        assert_eq!(validate_actions(&actions), Ok(()));
    }

    #[test]
    fn blank_label_is_reported_with_its_position() {
        let actions = vec![
            Action::new("Rename", |_: usize| {}),
            Action::new("", |_: usize| {}),
            Action::new("Archive", |_: usize| {}),
        ];
        assert_eq!(
            validate_actions(&actions),
            Err(ActionSetError::BlankLabel { index: 1 })
        );
    }

    #[test]
    fn whitespace_only_label_counts_as_blank() {
        let actions = [Action::new(" \t ", |_: ()| {})];
        assert_eq!(
            validate_actions(&actions),
            Err(ActionSetError::BlankLabel { index: 0 })
        );
    }

    #[test]
    fn debug_shows_the_label_only() {
        let action: Action<()> = Action::new("Rename", |()| {});
        let rendered = alloc::format!("{action:?}");
        assert!(rendered.contains("Rename"), "debug output: {rendered}");
    }
}
