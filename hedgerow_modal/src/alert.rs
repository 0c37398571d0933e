// Copyright 2025 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The notice dialog: one message, one button, no answer.

use alloc::string::String;

use hedgerow_construct::Decl;
use hedgerow_theme::Scheme;

use crate::shell::Shell;

/// A blocking notice.
///
/// Alerts only inform: the single button acknowledges the message and
/// nothing is reported back. They open on construction and close through
/// [`Alert::acknowledge`] (or [`Alert::dismiss`], which is the same thing
/// here — there is no answer to lose).
#[derive(Clone, Debug)]
pub struct Alert {
    shell: Shell,
    open: bool,
}

impl Alert {
    /// Scheme alerts are themed with.
    pub const SCHEME: Scheme = Scheme::new(60.0, 100.0, 75.0);

    /// Label on the single button.
    pub const BUTTON: &'static str = "OK";

    /// Opens a notice.
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            shell: Shell::new(title, message, Self::SCHEME),
            open: true,
        }
    }

    /// The shared chrome parts.
    #[must_use]
    pub fn shell(&self) -> &Shell {
        &self.shell
    }

    /// Whether the notice is still showing.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Acknowledges and closes the notice. Returns whether it was open.
    pub fn acknowledge(&mut self) -> bool {
        core::mem::replace(&mut self.open, false)
    }

    /// Closes without the button; equivalent to acknowledging.
    pub fn dismiss(&mut self) -> bool {
        self.acknowledge()
    }

    /// The chrome while the notice is showing.
    #[must_use]
    pub fn decl(&self) -> Option<Decl> {
        self.open.then(|| self.shell.decl(None, &[Self::BUTTON]))
    }
}
