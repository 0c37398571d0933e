// Copyright 2025 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Identity, presentation flags, and user-facing strings.

use alloc::format;
use alloc::string::String;

use bitflags::bitflags;

bitflags! {
    /// Which optional affordances a widget currently presents.
    ///
    /// The chrome mirrors these as `data-` attributes on the widget root so
    /// that styling can hide affordances the widget will refuse anyway.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct Presentation: u8 {
        /// The widget as a whole may be disposed of.
        const LIST_DISPOSABLE = 1 << 0;
        /// Individual items may be removed and the list may be cleared.
        const ITEMS_DISPOSABLE = 1 << 1;
        /// The title bar offers a list-level menu.
        const LIST_OPTIONS = 1 << 2;
        /// Each row offers a per-item menu.
        const ITEM_OPTIONS = 1 << 3;
    }
}

/// Identity of one widget instance.
///
/// The numeric value feeds the element id of the widget root, so two mounted
/// widgets must not share one. [`SequentialIds`] issues unique values; any
/// other scheme works as long as it upholds that.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ListId(pub u64);

impl ListId {
    /// The element id carried by this widget's root node.
    #[must_use]
    pub fn element_id(self) -> String {
        format!("sl-{}", self.0)
    }
}

/// Issues [`ListId`]s in construction order, starting from zero.
#[derive(Clone, Debug, Default)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    /// Creates a generator whose first id is `ListId(0)`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next unused id.
    pub fn issue(&mut self) -> ListId {
        let id = ListId(self.next);
        self.next += 1;
        id
    }
}

/// Every user-facing string a widget emits.
///
/// Defaults are English. Frontends that need another language replace the
/// whole struct at construction time; nothing here is baked into the chrome
/// or the dialog effects.
#[derive(Clone, Debug)]
pub struct WidgetText {
    /// Label of the footer button that starts the add flow.
    pub add: String,
    /// Label of the footer button that starts the clear flow.
    pub clear: String,
    /// Title attribute of the options buttons, list-level and per-row.
    pub options: String,
    /// Title attribute of the remove buttons, list-level and per-row.
    pub remove: String,
    /// Title attribute of a row's drag handle.
    pub drag_handle: String,
    /// Title of the notice shown when a destructive action is not allowed.
    pub denied_title: String,
    /// Message of that notice.
    pub denied_message: String,
    /// Title of the prompt that names a new item.
    pub add_title: String,
    /// Message of that prompt.
    pub add_message: String,
    /// Placeholder hint of that prompt's input.
    pub add_hint: String,
}

impl Default for WidgetText {
    fn default() -> Self {
        Self {
            add: "Add".into(),
            clear: "Clear".into(),
            options: "Options".into(),
            remove: "Remove".into(),
            drag_handle: "Drag to reorder".into(),
            denied_title: "Not allowed".into(),
            denied_message: "This list does not allow that.".into(),
            add_title: "Add item".into(),
            add_message: "Name the new item.".into(),
            add_hint: "new item".into(),
        }
    }
}

impl WidgetText {
    /// The question asked before removing one item.
    #[must_use]
    pub fn remove_question(&self, label: &str) -> String {
        format!("Remove \"{label}\"?")
    }

    /// The question asked before clearing the whole list.
    #[must_use]
    pub fn clear_question(&self, title: &str) -> String {
        format!("Remove every item in \"{title}\"?")
    }

    /// The question asked before disposing of the widget.
    #[must_use]
    pub fn dispose_question(&self, title: &str) -> String {
        format!("Remove the list \"{title}\"?")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_issue_sequentially_and_derive_element_ids() {
        let mut ids = SequentialIds::new();
        assert_eq!(ids.issue(), ListId(0));
        assert_eq!(ids.issue(), ListId(1));
        assert_eq!(ListId(7).element_id(), "sl-7");
    }

    #[test]
    fn questions_quote_their_subject() {
        let text = WidgetText::default();
        assert_eq!(text.remove_question("plum"), "Remove \"plum\"?");
        assert_eq!(
            text.clear_question("Groceries"),
            "Remove every item in \"Groceries\"?"
        );
        assert_eq!(
            text.dispose_question("Groceries"),
            "Remove the list \"Groceries\"?"
        );
    }
}
