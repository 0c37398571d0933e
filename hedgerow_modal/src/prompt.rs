// Copyright 2025 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The text-entry dialog: validated input, submit gated on zero errors.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use hedgerow_construct::Decl;
use hedgerow_theme::Scheme;

use crate::shell::Shell;

/// A question answered with text.
///
/// The prompt holds the draft input and an error list kept current by the
/// validator: every edit re-validates, and submitting re-validates once
/// more before anything else, so a stale draft can never slip through. The
/// list starts empty — an untouched prompt shows no complaints — and
/// submission goes through only when it is empty too.
///
/// The response runs at most once, with the submitted text. The negative
/// button and outside clicks both close the dialog silently.
pub struct Prompt {
    shell: Shell,
    positive: String,
    negative: String,
    hint: String,
    input: String,
    errors: Vec<String>,
    validate: Option<Box<dyn Fn(&str) -> Vec<String>>>,
    respond: Option<Box<dyn FnOnce(String)>>,
}

impl core::fmt::Debug for Prompt {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Prompt")
            .field("title", &self.shell.title())
            .field("input", &self.input)
            .field("errors", &self.errors.len())
            .field("open", &self.respond.is_some())
            .finish_non_exhaustive()
    }
}

impl Prompt {
    /// Scheme prompts are themed with.
    pub const SCHEME: Scheme = Scheme::new(135.0, 100.0, 75.0);

    /// Opens a prompt; `respond` receives the submitted text.
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        respond: impl FnOnce(String) + 'static,
    ) -> Self {
        Self {
            shell: Shell::new(title, message, Self::SCHEME),
            positive: String::from("Confirm"),
            negative: String::from("Cancel"),
            hint: String::new(),
            input: String::new(),
            errors: Vec::new(),
            validate: None,
            respond: Some(Box::new(respond)),
        }
    }

    /// Sets the placeholder hint shown in the empty input.
    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = hint.into();
        self
    }

    /// Installs the validator; it returns every complaint about a draft.
    ///
    /// The current draft is not judged until it changes or is submitted.
    #[must_use]
    pub fn with_validator(mut self, validate: impl Fn(&str) -> Vec<String> + 'static) -> Self {
        self.validate = Some(Box::new(validate));
        self
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

    /// Whether the prompt is still open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.respond.is_some()
    }

    /// The current draft.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replaces the draft and re-validates it immediately.
    pub fn set_input(&mut self, text: impl Into<String>) {
        if !self.is_open() {
            return;
        }
        self.input = text.into();
        self.refresh_errors();
    }

    /// The complaints about the current draft, in validator order.
    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Whether the draft would pass submission as judged so far.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.errors.is_empty()
    }

    /// Submits the draft.
    ///
    /// The draft is re-validated first; any complaint keeps the dialog open
    /// and the response unrun. On a clean draft the response receives the
    /// text and the dialog closes. Returns whether submission went through.
    pub fn submit(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        self.refresh_errors();
        if !self.errors.is_empty() {
            return false;
        }
        if let Some(respond) = self.respond.take() {
            respond(core::mem::take(&mut self.input));
        }
        true
    }

    /// Closes the dialog without submitting; the response never runs.
    ///
    /// Returns whether the dialog was open.
    pub fn dismiss(&mut self) -> bool {
        self.respond.take().is_some()
    }

    /// The chrome while the prompt is open.
    ///
    /// Between message and buttons sit the input row (draft value and
    /// placeholder hint as attributes) and one error entry per complaint.
    #[must_use]
    pub fn decl(&self) -> Option<Decl> {
        if !self.is_open() {
            return None;
        }
        let input = Decl::new("input")
            .class("modal-input")
            .attr("value", self.input.as_str())
            .attr("placeholder", self.hint.as_str());
        let mut errors = Decl::new("ul").class("modal-errors");
        for error in &self.errors {
            errors = errors.child(
                Decl::new("li")
                    .class("modal-error")
                    .text(error.as_str()),
            );
        }
        Some(self.shell.decl(
            [input, errors],
            &[self.positive.as_str(), self.negative.as_str()],
        ))
    }

    fn refresh_errors(&mut self) {
        self.errors = match &self.validate {
            Some(validate) => validate(&self.input),
            None => Vec::new(),
        };
    }
}
