// Copyright 2025 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=hedgerow_list --heading-base-level=0

//! Hedgerow List: a host-agnostic reorderable list engine.
//!
//! The engine owns an ordered `Vec` of items and keeps three things in lock
//! step around it:
//!
//! - a [`RowHost`] that mirrors the items row for row, wherever rows happen
//!   to live (a node tree, a terminal, a test recorder),
//! - an [`ItemModel`] that validates items before they enter the list and
//!   formats them into display labels,
//! - a [`DragState`] machine tracking one drag-to-reorder gesture.
//!
//! Every edit — replace-all, insert, update, remove, move, clear — is
//! index-checked and validated before anything changes, mirrored to the
//! host, and announced through a change hook that runs exactly once per
//! completed mutation, after the contents are consistent. A rejected edit
//! changes nothing at all.
//!
//! Reordering is modelled as a gesture: grab a row, hover others (the
//! engine maintains the lifted look and the drop indicator through the
//! host), then release to move or cancel. Terminal events always leave the
//! machine idle, and any completed mutation discards a gesture in flight
//! rather than let it target rows that may have shifted.
//!
//! ## Example
//!
//! ```rust
//! use hedgerow_list::{DisplayModel, DropEdge, LabelHost, ListEngine};
//!
//! let mut list =
//!     ListEngine::with_items(DisplayModel, LabelHost::new(), vec!["sloe", "haw", "rosehip"])
//!         .unwrap();
//!
//! // Moves land the item on the named position.
//! list.move_item(0, 2).unwrap();
//! assert_eq!(list.items(), ["haw", "rosehip", "sloe"]);
//!
//! // Drag the last row up and drop it on the first.
//! assert!(list.drag_begin(2));
//! assert_eq!(list.drag_hover(0), Some(DropEdge::Above));
//! assert!(list.drag_release(0));
//! assert_eq!(list.items(), ["sloe", "haw", "rosehip"]);
//! ```
//!
//! ## API overview
//!
//! - [`ListEngine`]: the engine; all edits and gesture events go through it.
//! - [`ItemModel`] / [`DisplayModel`] / [`Validated`]: acceptance and
//!   formatting, with [`ItemModel::with_validator`] to layer predicates.
//! - [`RowHost`] / [`LabelHost`]: the rendering seam and a headless
//!   reference host.
//! - [`DragState`] / [`DropEdge`]: the gesture machine, usable on its own.
//! - [`ListError`]: index and validation failures.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod drag;
mod engine;
mod host;
mod model;

pub use drag::{DragState, DropEdge};
pub use engine::{ListEngine, ListError};
pub use host::{LabelHost, RowHost};
pub use model::{DisplayModel, ItemModel, Validated};
