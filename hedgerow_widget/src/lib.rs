// Copyright 2025 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=hedgerow_widget --heading-base-level=0

//! The Hedgerow sortable list widget.
//!
//! [`SortableWidget`] wraps a [`hedgerow_list::ListEngine`] in interaction
//! policy: destructive presses are parked behind a confirm question, menus
//! open against validated action sets, and new items arrive through a
//! prompt. The widget holds no dialog or menu machinery itself. Frontends
//! feed it [`WidgetEvent`]s and carry out the [`Effect`]s it returns, using
//! whatever modal and menu implementations they like.
//!
//! The [`chrome`] module describes the frame around the rows as plain
//! declarations, and [`WidgetHost`] is the rendering contract a frontend
//! implements. [`HeadlessHost`] implements it without rendering anything,
//! which keeps widget logic testable away from any node tree.
//!
//! ```
//! use hedgerow_list::DisplayModel;
//! use hedgerow_widget::{
//!     Effect, HeadlessHost, ListId, SortableWidget, WidgetEvent, WidgetOptions,
//! };
//!
//! let options = WidgetOptions {
//!     items_disposable: true,
//!     ..WidgetOptions::default()
//! };
//! let mut widget = SortableWidget::new(
//!     ListId(0),
//!     "Groceries",
//!     DisplayModel,
//!     HeadlessHost::new(),
//!     options,
//! )
//! .unwrap();
//! widget.set_items(vec!["apples".to_string(), "plums".to_string()]).unwrap();
//!
//! // Destructive presses answer to a confirm question first.
//! let effects = widget.handle(WidgetEvent::RowRemove { row: 0 }).unwrap();
//! assert!(matches!(effects.as_slice(), [Effect::OpenConfirm { .. }]));
//! widget.handle(WidgetEvent::ConfirmAnswered { accepted: true }).unwrap();
//! assert_eq!(widget.items(), ["plums"]);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as
//!   `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for
//!   floating-point math; typically used when integrating into embedded or
//!   `no_std` environments.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod events;
mod types;
mod widget;

pub mod chrome;

pub use events::{Effect, GateIntent, MenuScope, WidgetEvent};
pub use types::{ListId, Presentation, SequentialIds, WidgetText};
pub use widget::{HeadlessHost, SortableWidget, WidgetHost, WidgetOptions};
