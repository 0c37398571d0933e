// Copyright 2025 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=hedgerow_menu --heading-base-level=0

//! Hedgerow Menu: context menu sessions and viewport-aware placement.
//!
//! A [`ContextMenu`] pairs a validated set of
//! [`Action`](hedgerow_action::Action)s with at most one open session. The
//! session remembers what the menu is about — a title for its header, the
//! anchor it opened at, and an argument handed to whichever action the user
//! picks. Choosing always closes the menu, even for an index that names no
//! action, and [`ContextMenu::dismiss`] covers the outside-click path.
//!
//! Placement is a separate, purely geometric concern: [`place`] walks a
//! short ladder (flank the anchor, preferring its left side → clamp into
//! the margins → fill the viewport) and returns a [`Placement`] the host
//! applies to whatever surface actually draws the menu.
//!
//! ## Example
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use hedgerow_action::Action;
//! use hedgerow_menu::{ContextMenu, DEFAULT_MARGIN, Placement, place};
//! use kurbo::{Point, Rect, Size};
//!
//! let renamed = Rc::new(Cell::new(None));
//! let seen = Rc::clone(&renamed);
//! let mut menu =
//!     ContextMenu::with_actions(vec![Action::new("Rename", move |row| seen.set(Some(row)))])
//!         .unwrap();
//!
//! // A right-click on row 1 opens the menu there.
//! menu.open("plum", Point::new(640.0, 320.0), 1_usize);
//! let spot = place(
//!     menu.anchor().unwrap(),
//!     Size::new(180.0, 48.0),
//!     Rect::new(0.0, 0.0, 1280.0, 800.0),
//!     DEFAULT_MARGIN,
//! );
//! assert!(matches!(spot, Placement::At(_)));
//!
//! // Picking the first entry runs it against row 1 and closes the menu.
//! assert!(menu.choose(0));
//! assert_eq!(renamed.get(), Some(1));
//! assert!(!menu.is_open());
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for floating-point math;
//!   typically used when integrating into embedded or `no_std` environments.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod menu;
mod place;

pub use menu::ContextMenu;
pub use place::{DEFAULT_MARGIN, Placement, place};
