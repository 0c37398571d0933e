// Copyright 2025 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chrome shared by every dialog variant.

use alloc::string::{String, ToString};

use hedgerow_construct::Decl;
use hedgerow_theme::Scheme;

/// The parts every dialog shares: a title, a message, and a color scheme.
///
/// Each dialog variant wraps a `Shell` and feeds it variant-specific body
/// content and button labels when building chrome.
#[derive(Clone, Debug)]
pub struct Shell {
    title: String,
    message: String,
    scheme: Scheme,
}

impl Shell {
    /// Creates a shell.
    pub fn new(title: impl Into<String>, message: impl Into<String>, scheme: Scheme) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            scheme,
        }
    }

    /// The dialog title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The dialog message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The color scheme the dialog is themed with.
    #[must_use]
    pub const fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// Builds the dialog chrome.
    ///
    /// A full-viewport backdrop carries the scheme as inline custom
    /// properties; inside it sit the title, the message, any `body` nodes
    /// the variant adds (input row, error list), and one button per label.
    /// Buttons follow the order given — affirmative first by convention —
    /// and carry their position in a `data-index` attribute.
    #[must_use]
    pub fn decl<I>(&self, body: I, buttons: &[&str]) -> Decl
    where
        I: IntoIterator<Item = Decl>,
    {
        let mut content = Decl::new("div")
            .class("modal-content")
            .child(
                Decl::new("h3")
                    .class("modal-title")
                    .text(self.title.as_str()),
            )
            .child(
                Decl::new("p")
                    .class("modal-message")
                    .text(self.message.as_str()),
            );
        for node in body {
            content = content.child(node);
        }
        let mut actions = Decl::new("div").class("modal-actions");
        for (index, label) in buttons.iter().enumerate() {
            actions = actions.child(
                Decl::new("button")
                    .class("modal-button")
                    .attr("data-index", index.to_string())
                    .text(*label),
            );
        }
        Decl::new("div")
            .class("modal-bg")
            .attr("style", self.scheme.css_custom_properties())
            .child(
                Decl::new("div")
                    .class("modal-container")
                    .child(content.child(actions)),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hedgerow_construct::Child;

    #[test]
    fn chrome_nests_backdrop_container_content() {
        let shell = Shell::new("Remove", "Remove plum?", Scheme::new(205.0, 90.0, 65.0));
        let decl = shell.decl(None, &["Confirm", "Cancel"]);

        assert_eq!(decl.tag, "div");
        assert_eq!(decl.classes, ["modal-bg"]);
        let style = &decl.attrs[0].1;
        assert_eq!(style, "--hue: 205; --sat: 90; --lum: 65;");

        let Child::Node(container) = &decl.children[0] else {
            panic!("backdrop should hold the container");
        };
        assert_eq!(container.classes, ["modal-container"]);
    }

    #[test]
    fn buttons_keep_their_given_order_and_index() {
        let shell = Shell::new("t", "m", Scheme::new(60.0, 100.0, 75.0));
        let dump = alloc::format!("{:?}", shell.decl(None, &["OK"]));
        assert!(dump.contains("OK"));
        assert!(dump.contains("data-index"));

        let two = alloc::format!("{:?}", shell.decl(None, &["Confirm", "Cancel"]));
        let confirm = two.find("Confirm").unwrap();
        let cancel = two.find("Cancel").unwrap();
        assert!(confirm < cancel);
    }
}
