// Copyright 2025 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Structural declarations and the keyed slot table filled during a build.

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;

/// Key under which a built node is published in a [`SlotTable`].
///
/// This is a small, copyable handle; callers define constants for the slots
/// they need and keep the meaning of individual keys to themselves. Keys are
/// scoped per build call, so two widgets (or two rows of one widget) may use
/// the same constants against separate tables without collision.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SlotKey(pub u64);

/// One child of a declaration: either a text run or a nested node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Child {
    /// A run of text content.
    Text(String),
    /// A nested node declaration.
    Node(Decl),
}

/// A structural declaration of one node.
///
/// A `Decl` carries everything a [`Construct`](crate::Construct) host needs
/// to produce a node: tag name, optional element id, classes, plain
/// `(name, value)` attributes, and children. It is inert data — building it
/// is entirely the host's business.
///
/// Declarations are assembled with chaining constructors:
///
/// ```rust
/// use hedgerow_construct::{Decl, SlotKey};
///
/// const CLOSE: SlotKey = SlotKey(7);
///
/// let decl = Decl::new("div")
///     .id("context-menu")
///     .class("popup")
///     .attr("title", "Hide")
///     .child(Decl::new("button").class("close").slot(CLOSE))
///     .text("…");
/// assert_eq!(decl.tag, "div");
/// assert_eq!(decl.children.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decl {
    /// Tag name of the node.
    pub tag: String,
    /// Optional element id.
    pub id: Option<String>,
    /// Class names, in declaration order.
    pub classes: Vec<String>,
    /// Plain attributes as `(name, value)` pairs, in declaration order.
    pub attrs: Vec<(String, String)>,
    /// Children, in declaration order.
    pub children: Vec<Child>,
    /// Slot under which the built node is published, if any.
    pub slot: Option<SlotKey>,
}

impl Decl {
    /// Creates a declaration for a node with the given tag.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            id: None,
            classes: Vec::new(),
            attrs: Vec::new(),
            children: Vec::new(),
            slot: None,
        }
    }

    /// Sets the element id.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Appends a class name.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Appends a plain attribute.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Appends a text child.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Child::Text(text.into()));
        self
    }

    /// Appends a nested node child.
    #[must_use]
    pub fn child(mut self, child: Decl) -> Self {
        self.children.push(Child::Node(child));
        self
    }

    /// Appends a sequence of nested node children.
    #[must_use]
    pub fn children(mut self, children: impl IntoIterator<Item = Decl>) -> Self {
        self.children
            .extend(children.into_iter().map(Child::Node));
        self
    }

    /// Publishes the built node under `key` in the build's slot table.
    #[must_use]
    pub fn slot(mut self, key: SlotKey) -> Self {
        self.slot = Some(key);
        self
    }
}

/// Side table mapping [`SlotKey`]s to the nodes built for them.
///
/// A table is filled by [`Construct::build`](crate::Construct::build) and
/// read by the caller afterwards. Building the same key twice (two slotted
/// declarations sharing a key within one build) keeps the last node.
#[derive(Clone, Debug)]
pub struct SlotTable<N> {
    slots: HashMap<SlotKey, N>,
}

impl<N> SlotTable<N> {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: HashMap::new(),
        }
    }

    /// Records the node built for `key`.
    pub fn insert(&mut self, key: SlotKey, node: N) {
        self.slots.insert(key, node);
    }

    /// Returns the node built for `key`, if any.
    #[must_use]
    pub fn get(&self, key: SlotKey) -> Option<&N> {
        self.slots.get(&key)
    }

    /// Removes and returns the node built for `key`, if any.
    pub fn take(&mut self, key: SlotKey) -> Option<N> {
        self.slots.remove(&key)
    }

    /// Returns the number of filled slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if no slot has been filled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Removes all filled slots, readying the table for another build.
    pub fn clear(&mut self) {
        self.slots.clear();
    }
}

impl<N> Default for SlotTable<N> {
    fn default() -> Self {
        Self::new()
    }
}
