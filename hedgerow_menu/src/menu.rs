// Copyright 2025 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Context menu state: one action set, at most one open session.

use alloc::string::String;
use alloc::vec::Vec;

use hedgerow_action::{Action, ActionSetError, validate_actions};
use hedgerow_construct::Decl;
use kurbo::Point;

/// One open menu: what it is titled, where it opened, and the argument the
/// chosen action will receive.
struct Session<A> {
    title: String,
    anchor: Point,
    args: A,
}

/// A context menu: a validated action set plus at most one open session.
///
/// The action set is fixed between [`set_actions`](ContextMenu::set_actions)
/// calls and validated as a whole; a single blank label rejects the entire
/// set. Opening ties the menu to a subject: a title shown in its header, an
/// anchor for placement (see [`place`](crate::place)), and an argument of
/// type `A` handed to whichever action the user chooses.
///
/// Choosing always closes the menu, even when the chosen index does not
/// name an action; a menu never survives its own click.
pub struct ContextMenu<A = ()> {
    actions: Vec<Action<A>>,
    session: Option<Session<A>>,
}

impl<A> core::fmt::Debug for ContextMenu<A> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ContextMenu")
            .field("actions", &self.actions.len())
            .field("open", &self.session.as_ref().map(|s| s.title.as_str()))
            .finish_non_exhaustive()
    }
}

impl<A> Default for ContextMenu<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> ContextMenu<A> {
    /// Creates a closed menu with no actions.
    #[must_use]
    pub fn new() -> Self {
        Self {
            actions: Vec::new(),
            session: None,
        }
    }

    /// Creates a closed menu over `actions`, validating the whole set.
    pub fn with_actions(actions: Vec<Action<A>>) -> Result<Self, ActionSetError> {
        let mut menu = Self::new();
        menu.set_actions(actions)?;
        Ok(menu)
    }

    /// Replaces the action set, validating it as a whole first.
    ///
    /// On rejection the previous set stays in place. On success any open
    /// session is dismissed, since its entries no longer exist.
    pub fn set_actions(&mut self, actions: Vec<Action<A>>) -> Result<(), ActionSetError> {
        validate_actions(&actions)?;
        self.actions = actions;
        self.session = None;
        Ok(())
    }

    /// The current action set, in display order.
    #[must_use]
    pub fn actions(&self) -> &[Action<A>] {
        &self.actions
    }

    /// Opens a session titled `title` at `anchor`, replacing any open one.
    ///
    /// `args` is stored until the user chooses an action and is then passed
    /// to it.
    pub fn open(&mut self, title: impl Into<String>, anchor: Point, args: A) {
        self.session = Some(Session {
            title: title.into(),
            anchor,
            args,
        });
    }

    /// Whether a session is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// The open session's title.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.title.as_str())
    }

    /// Where the open session was anchored.
    #[must_use]
    pub fn anchor(&self) -> Option<Point> {
        self.session.as_ref().map(|s| s.anchor)
    }

    /// Chooses the action at `index`, closing the menu.
    ///
    /// The session's argument is handed to the action. Returns whether an
    /// action actually ran: a closed menu or an index past the action set
    /// does nothing, but the menu still ends up closed.
    pub fn choose(&mut self, index: usize) -> bool {
        let Some(session) = self.session.take() else {
            return false;
        };
        match self.actions.get_mut(index) {
            Some(action) => {
                action.invoke(session.args);
                true
            }
            None => false,
        }
    }

    /// Closes the menu without running anything.
    ///
    /// Returns whether a session was open. This is the outside-click and
    /// escape path.
    pub fn dismiss(&mut self) -> bool {
        self.session.take().is_some()
    }

    /// The chrome for the open session, if any.
    ///
    /// A header carries the session title (and a `title` attribute marking
    /// it as the dismiss affordance), followed by one entry per action whose
    /// position matches the index [`choose`](ContextMenu::choose) expects.
    #[must_use]
    pub fn decl(&self) -> Option<Decl> {
        let session = self.session.as_ref()?;
        let mut entries = Decl::new("ul").class("context-menu-actions");
        for action in &self.actions {
            entries = entries.child(
                Decl::new("li")
                    .class("context-menu-action")
                    .attr("title", action.label())
                    .text(action.label()),
            );
        }
        Some(
            Decl::new("div")
                .class("context-menu")
                .child(
                    Decl::new("header")
                        .class("context-menu-title")
                        .attr("title", "Dismiss")
                        .text(session.title.as_str()),
                )
                .child(entries),
        )
    }
}
