// Copyright 2025 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The yes/no dialog: both buttons answer, dismissal answers nothing.

use alloc::boxed::Box;
use alloc::string::String;

use hedgerow_construct::Decl;
use hedgerow_theme::Scheme;

use crate::shell::Shell;

/// A yes/no question with a single-shot answer.
///
/// Both buttons report through the response: the affirmative one with
/// `true`, the negative one with `false`. Only dismissal — clicking past
/// the dialog — ends the question without any answer at all. Whichever way
/// the dialog closes, the response can never run twice.
pub struct Confirm {
    shell: Shell,
    positive: String,
    negative: String,
    respond: Option<Box<dyn FnOnce(bool)>>,
}

impl core::fmt::Debug for Confirm {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Confirm")
            .field("title", &self.shell.title())
            .field("open", &self.respond.is_some())
            .finish_non_exhaustive()
    }
}

impl Confirm {
    /// Scheme confirmations are themed with.
    pub const SCHEME: Scheme = Scheme::new(205.0, 90.0, 65.0);

    /// Opens a question; `respond` receives the eventual answer.
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        respond: impl FnOnce(bool) + 'static,
    ) -> Self {
        Self {
            shell: Shell::new(title, message, Self::SCHEME),
            positive: String::from("Confirm"),
            negative: String::from("Cancel"),
            respond: Some(Box::new(respond)),
        }
    }

    /// Replaces the default button labels.
    #[must_use]
    pub fn with_labels(mut self, positive: impl Into<String>, negative: impl Into<String>) -> Self {
        self.positive = positive.into();
        self.negative = negative.into();
        self
    }

    /// The shared chrome parts.
    #[must_use]
    pub fn shell(&self) -> &Shell {
        &self.shell
    }

    /// Whether the question is still open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.respond.is_some()
    }

    /// Answers the question and closes the dialog.
    ///
    /// The response runs with `accepted` — declining is as much an answer
    /// as accepting. Returns whether the dialog was still open to answer.
    pub fn choose(&mut self, accepted: bool) -> bool {
        let Some(respond) = self.respond.take() else {
            return false;
        };
        respond(accepted);
        true
    }

    /// Closes the dialog without answering; the response never runs.
    ///
    /// Returns whether the dialog was open.
    pub fn dismiss(&mut self) -> bool {
        self.respond.take().is_some()
    }

    /// The chrome while the question is open, affirmative button first.
    #[must_use]
    pub fn decl(&self) -> Option<Decl> {
        self.is_open()
            .then(|| {
                self.shell
                    .decl(None, &[self.positive.as_str(), self.negative.as_str()])
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use core::cell::Cell;

    fn question() -> (Confirm, Rc<Cell<Option<bool>>>) {
        let answer = Rc::new(Cell::new(None));
        let sink = Rc::clone(&answer);
        let confirm = Confirm::new("Remove", "Remove plum?", move |accepted| {
            sink.set(Some(accepted));
        });
        (confirm, answer)
    }

    #[test]
    fn accepting_answers_true() {
        let (mut confirm, answer) = question();
        assert!(confirm.choose(true));
        assert_eq!(answer.get(), Some(true));
        assert!(!confirm.is_open());
    }

    #[test]
    fn declining_still_answers_with_false() {
        let (mut confirm, answer) = question();
        assert!(confirm.choose(false));
        assert_eq!(answer.get(), Some(false));
        assert!(!confirm.is_open());
    }

    #[test]
    fn dismissal_answers_nothing() {
        let (mut confirm, answer) = question();
        assert!(confirm.dismiss());
        assert_eq!(answer.get(), None);

        // Closed means closed: no late answers.
        assert!(!confirm.choose(true));
        assert_eq!(answer.get(), None);
    }

    #[test]
    fn buttons_read_confirm_then_cancel_by_default() {
        let (confirm, _) = question();
        let dump = alloc::format!("{:?}", confirm.decl().unwrap());
        let positive = dump.find("Confirm").unwrap();
        let negative = dump.find("Cancel").unwrap();
        assert!(positive < negative);
    }

    #[test]
    fn labels_can_be_replaced() {
        let (confirm, _) = question();
        let confirm = confirm.with_labels("Delete", "Keep");
        let dump = alloc::format!("{:?}", confirm.decl().unwrap());
        assert!(dump.contains("Delete"));
        assert!(dump.contains("Keep"));
    }

    #[test]
    fn questions_are_themed_blue() {
        assert_eq!(Confirm::SCHEME.hue, 205.0);
        let (confirm, _) = question();
        assert_eq!(confirm.shell().scheme(), Confirm::SCHEME);
    }
}
