// Copyright 2025 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Events flowing into a widget and effects flowing back out.

use alloc::string::String;

use kurbo::Point;

/// Which menu an event or effect concerns.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MenuScope {
    /// The list-level menu behind the title bar's options button.
    List,
    /// The menu of the row at this index.
    Item(usize),
}

/// Everything a frontend can tell a widget.
///
/// Indices name rows at the moment the event is delivered. Drag events
/// tolerate being stale or out of order; the reorder machine ignores what
/// no longer applies. All other events with a row index fail loudly when
/// the index no longer names an item.
#[derive(Debug, PartialEq)]
pub enum WidgetEvent<T> {
    /// The title bar's options button was pressed at `at`.
    TitleOptions {
        /// Pointer position, used to anchor the menu.
        at: Point,
    },
    /// The title bar's remove button was pressed.
    Dispose,
    /// The footer's add button was pressed.
    Add,
    /// The footer's clear button was pressed.
    Clear,
    /// A drag gesture started on a row's handle.
    RowGrabbed {
        /// The row being lifted.
        row: usize,
    },
    /// The gesture moved over a row.
    RowHovered {
        /// The row under the pointer.
        row: usize,
    },
    /// The gesture left the row it was hovering.
    RowLeft,
    /// The gesture was released over a row.
    RowDropped {
        /// The row under the pointer at release.
        row: usize,
    },
    /// The gesture ended anywhere else.
    DragEnded,
    /// A row's options button was pressed at `at`.
    RowOptions {
        /// The row whose menu was requested.
        row: usize,
        /// Pointer position, used to anchor the menu.
        at: Point,
    },
    /// A row's remove button was pressed.
    RowRemove {
        /// The row whose item should go.
        row: usize,
    },
    /// An entry of an open menu was chosen.
    MenuChosen {
        /// Which menu was open.
        scope: MenuScope,
        /// The position of the chosen entry.
        index: usize,
    },
    /// The open confirm dialog was answered.
    ConfirmAnswered {
        /// `true` for the affirmative button.
        accepted: bool,
    },
    /// The add prompt was submitted with a finished item.
    InsertSubmitted {
        /// The item to insert.
        item: T,
    },
}

/// What a widget asks its frontend to do in response to an event.
///
/// Effects are pure data; the widget never opens a dialog or menu itself.
/// A frontend maps these onto whatever dialog and menu machinery it uses
/// and feeds the outcome back in as a [`WidgetEvent`].
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Open the menu for `scope`, titled `title` and anchored at `at`.
    OpenMenu {
        /// Which action set to show.
        scope: MenuScope,
        /// The menu heading.
        title: String,
        /// Anchor position for placement.
        at: Point,
    },
    /// Ask a yes/no question; answer via [`WidgetEvent::ConfirmAnswered`].
    OpenConfirm {
        /// The dialog heading.
        title: String,
        /// The question.
        message: String,
    },
    /// Show a blocking notice. No answer is expected.
    OpenNotice {
        /// The dialog heading.
        title: String,
        /// The explanation.
        message: String,
    },
    /// Collect a new item; submit via [`WidgetEvent::InsertSubmitted`].
    OpenPrompt {
        /// The dialog heading.
        title: String,
        /// The instruction.
        message: String,
        /// Placeholder hint for the input.
        hint: String,
    },
    /// The widget tore itself down; drop it and its frontend state.
    Disposed,
}

/// A destructive intent parked while its confirm question is open.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateIntent {
    /// Remove one item, remembered by where it sat and what it read when
    /// the question opened.
    ///
    /// The label is what the answer resolves against: rows may shift while
    /// the question is open, and the parked index alone would then name a
    /// different item.
    RemoveItem {
        /// The row the item sat at when the question opened.
        row: usize,
        /// The item's display label at that moment.
        label: String,
    },
    /// Remove every item.
    ClearList,
    /// Dispose of the whole widget.
    DisposeList,
}
