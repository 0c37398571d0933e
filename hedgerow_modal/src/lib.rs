// Copyright 2025 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hedgerow Modal: dialog state for notices, questions, and text entry.
//!
//! Three dialog variants share one [`Shell`] (title, message, theme
//! scheme) and one discipline: a dialog answers **at most once**, and only
//! through an explicit button. Dismissal — clicking past the dialog —
//! always closes silently.
//!
//! - [`Alert`] informs. Its single button acknowledges; nothing reports
//!   back.
//! - [`Confirm`] asks yes/no. Both buttons answer (`true`/`false`);
//!   declining is an answer, not a dismissal.
//! - [`Prompt`] collects text. The draft is re-validated on every edit and
//!   once more on submit, which goes through only with zero complaints.
//!
//! Variants are told apart at a glance by scheme: notices are yellow,
//! questions blue, prompts green (see each type's `SCHEME`).
//!
//! ## Example
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use hedgerow_modal::Confirm;
//!
//! let answer = Rc::new(Cell::new(None));
//! let sink = Rc::clone(&answer);
//! let mut confirm = Confirm::new("Remove", "Remove plum?", move |accepted| {
//!     sink.set(Some(accepted));
//! });
//!
//! // Declining is still an answer.
//! assert!(confirm.choose(false));
//! assert_eq!(answer.get(), Some(false));
//! assert!(!confirm.is_open());
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `palette`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for floating-point math;
//!   typically used when integrating into embedded or `no_std` environments.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod alert;
mod confirm;
mod prompt;
mod shell;

pub use alert::Alert;
pub use confirm::Confirm;
pub use prompt::Prompt;
pub use shell::Shell;
