// Copyright 2025 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=hedgerow_construct --heading-base-level=0

//! Hedgerow Construct: structural node declarations with keyed lookup.
//!
//! Widgets in this workspace describe their chrome as data — a [`Decl`] tree
//! of tags, classes, attributes, and children — and hand it to whatever node
//! system the host runs on through the [`Construct`] trait. Because a widget
//! usually needs to reach specific built nodes afterwards (a title heading, a
//! body container, a button), a declaration can publish the node it produces
//! under a [`SlotKey`]; the build fills a [`SlotTable`] the caller keeps.
//!
//! ## Minimal example
//!
//! Building a small header into the reference [`ArenaTree`] and retrieving
//! the title node through its slot:
//!
//! ```rust
//! use hedgerow_construct::{ArenaTree, Construct, Decl, SlotKey, SlotTable};
//!
//! const TITLE: SlotKey = SlotKey(1);
//!
//! let decl = Decl::new("header").class("toolbar").child(
//!     Decl::new("h3").text("Inbox").slot(TITLE),
//! );
//!
//! let mut tree = ArenaTree::new();
//! let mut slots = SlotTable::new();
//! let root = tree.build(&decl, &mut slots);
//!
//! let title = *slots.get(TITLE).unwrap();
//! assert_eq!(tree.tag(title), Some("h3"));
//! assert_eq!(tree.text_content(title), "Inbox");
//! assert_eq!(tree.children(root).len(), 1);
//! ```
//!
//! ## Hosts
//!
//! [`ArenaTree`] is a self-contained in-memory implementation used by tests
//! and demos. Real hosts implement [`Construct`] against their own node type
//! (a retained DOM, a scene graph, a terminal buffer) and decide themselves
//! how tags, classes, and attributes map onto it. The contract is small:
//! build depth-first, and record every built node whose declaration carries a
//! slot into the supplied table.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod arena;
mod decl;

pub use arena::{ArenaId, ArenaTree};
pub use decl::{Child, Decl, SlotKey, SlotTable};

/// Capability to turn a [`Decl`] into a host node tree.
///
/// Implementations build the declaration depth-first: the node itself, then
/// each child in order. Every declaration in the subtree that carries a
/// [`SlotKey`] must be recorded in `slots` as it is built, so the caller can
/// address specific nodes afterwards. The returned node is the subtree root.
///
/// A fresh [`SlotTable`] is normally passed per build; slot keys are scoped
/// by the caller, not by the host.
pub trait Construct {
    /// Handle to a built node in the host's system.
    type Node;

    /// Builds `decl` and registers slotted nodes into `slots`.
    fn build(&mut self, decl: &Decl, slots: &mut SlotTable<Self::Node>) -> Self::Node;
}
