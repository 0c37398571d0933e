// Copyright 2025 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The widget's chrome contract.
//!
//! [`chrome`] describes the frame around the rows: a header with the title
//! and list-level buttons, an empty body the host fills with rows, and a
//! footer with the add and clear buttons. [`row`] describes one row. Hosts
//! build these declarations however they render, and pick the interactive
//! nodes out of the slot table under the keys in this module.
//!
//! Every affordance is always present in the declaration. [`Presentation`]
//! flags are mirrored as `data-` attributes on the widget root so styling
//! can hide what the widget will refuse; the widget enforces the flags
//! regardless of what is visible.

use hedgerow_construct::{Decl, SlotKey};

use crate::types::{ListId, Presentation, WidgetText};

/// The `h3` carrying the widget title.
pub const TITLE: SlotKey = SlotKey(1);
/// The container the host fills with row nodes.
pub const BODY: SlotKey = SlotKey(2);
/// The button opening the list-level menu.
pub const LIST_OPTIONS: SlotKey = SlotKey(3);
/// The button requesting disposal of the widget.
pub const DISPOSE: SlotKey = SlotKey(4);
/// The footer button starting the add flow.
pub const ADD: SlotKey = SlotKey(5);
/// The footer button starting the clear flow.
pub const CLEAR: SlotKey = SlotKey(6);
/// A row's drag handle.
pub const ROW_HANDLE: SlotKey = SlotKey(7);
/// The node carrying a row's formatted label.
pub const ROW_LABEL: SlotKey = SlotKey(8);
/// The button opening a row's menu.
pub const ROW_OPTIONS: SlotKey = SlotKey(9);
/// The button requesting removal of a row's item.
pub const ROW_REMOVE: SlotKey = SlotKey(10);

/// Builds the frame of the widget identified by `id`.
#[must_use]
pub fn chrome(id: ListId, title: &str, flags: Presentation, text: &WidgetText) -> Decl {
    Decl::new("div")
        .id(id.element_id())
        .class("sortable-list")
        .attr(
            "data-disposable",
            flag_attr(flags, Presentation::LIST_DISPOSABLE),
        )
        .attr(
            "data-items-disposable",
            flag_attr(flags, Presentation::ITEMS_DISPOSABLE),
        )
        .attr(
            "data-options-list",
            flag_attr(flags, Presentation::LIST_OPTIONS),
        )
        .attr(
            "data-options-item",
            flag_attr(flags, Presentation::ITEM_OPTIONS),
        )
        .child(header(title, text))
        .child(Decl::new("div").class("sortable-body").slot(BODY))
        .child(footer(text))
}

/// Builds one row showing `label`.
#[must_use]
pub fn row(label: &str, text: &WidgetText) -> Decl {
    Decl::new("div")
        .class("sortable-item")
        .attr("draggable", "false")
        .child(
            Decl::new("div")
                .class("sortable-item-dragzone")
                .attr("title", &text.drag_handle)
                .text("≡")
                .slot(ROW_HANDLE),
        )
        .child(
            Decl::new("div")
                .class("sortable-item-label")
                .text(label)
                .slot(ROW_LABEL),
        )
        .child(button("sortable-item-options", "⋯", &text.options, ROW_OPTIONS))
        .child(button("sortable-item-remove", "×", &text.remove, ROW_REMOVE))
}

fn header(title: &str, text: &WidgetText) -> Decl {
    Decl::new("div")
        .class("sortable-header")
        .child(
            Decl::new("div")
                .class("sortable-list-title")
                .child(Decl::new("h3").text(title).slot(TITLE)),
        )
        .child(
            Decl::new("div")
                .class("sortable-list-actions")
                .child(button("sortable-list-options", "⋯", &text.options, LIST_OPTIONS))
                .child(button("sortable-list-remove", "×", &text.remove, DISPOSE)),
        )
}

fn footer(text: &WidgetText) -> Decl {
    Decl::new("div")
        .class("sortable-footer")
        .child(
            Decl::new("button")
                .class("sortable-add")
                .text(&text.add)
                .slot(ADD),
        )
        .child(
            Decl::new("button")
                .class("sortable-clear")
                .text(&text.clear)
                .slot(CLEAR),
        )
}

fn button(class: &str, glyph: &str, title: &str, slot: SlotKey) -> Decl {
    Decl::new("button")
        .class(class)
        .attr("title", title)
        .text(glyph)
        .slot(slot)
}

fn flag_attr(flags: Presentation, flag: Presentation) -> &'static str {
    if flags.contains(flag) { "true" } else { "false" }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use hedgerow_construct::{ArenaTree, Child, Construct, SlotTable};

    use super::*;

    fn find<'d>(decl: &'d Decl, class: &str) -> Option<&'d Decl> {
        if decl.classes.iter().any(|c| c == class) {
            return Some(decl);
        }
        decl.children.iter().find_map(|child| match child {
            Child::Node(node) => find(node, class),
            Child::Text(_) => None,
        })
    }

    #[test]
    fn chrome_mirrors_flags_as_data_attributes() {
        let text = WidgetText::default();
        let flags = Presentation::ITEMS_DISPOSABLE | Presentation::LIST_OPTIONS;
        let decl = chrome(ListId(3), "Groceries", flags, &text);

        assert_eq!(decl.id.as_deref(), Some("sl-3"));
        let attr = |name: &str| {
            decl.attrs
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, v)| v.as_str())
        };
        assert_eq!(attr("data-disposable"), Some("false"));
        assert_eq!(attr("data-items-disposable"), Some("true"));
        assert_eq!(attr("data-options-list"), Some("true"));
        assert_eq!(attr("data-options-item"), Some("false"));
    }

    #[test]
    fn chrome_slots_every_interactive_node() {
        let text = WidgetText::default();
        let decl = chrome(ListId(0), "Inbox", Presentation::empty(), &text);

        let mut tree = ArenaTree::new();
        let mut slots = SlotTable::new();
        let root = tree.build(&decl, &mut slots);

        for key in [TITLE, BODY, LIST_OPTIONS, DISPOSE, ADD, CLEAR] {
            assert!(slots.get(key).is_some(), "missing slot {key:?}");
        }
        let title = *slots.get(TITLE).unwrap();
        assert_eq!(tree.tag(title), Some("h3"));
        assert_eq!(tree.text_content(title), "Inbox");
        assert_eq!(tree.element_id(root), Some("sl-0"));
    }

    #[test]
    fn rows_carry_handle_label_and_buttons() {
        let text = WidgetText::default();
        let decl = row("sloe gin", &text);

        let label = find(&decl, "sortable-item-label").unwrap();
        assert_eq!(label.children, vec![Child::Text("sloe gin".into())]);
        assert_eq!(label.slot, Some(ROW_LABEL));

        let handle = find(&decl, "sortable-item-dragzone").unwrap();
        assert_eq!(handle.slot, Some(ROW_HANDLE));

        let remove = find(&decl, "sortable-item-remove").unwrap();
        assert_eq!(remove.tag, "button");
        assert!(
            remove
                .attrs
                .iter()
                .any(|(n, v)| n == "title" && v == "Remove")
        );
    }
}
