// Copyright 2025 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reorder gesture state machine.
//!
//! Tracks one drag-to-reorder gesture over an indexed list, from the moment
//! a row is grabbed to the terminal event that ends the gesture. The machine
//! holds indices only; the engine translates its answers into row moves and
//! visual affordances.
//!
//! ## Gesture Rules
//!
//! 1. **Grab**: [`DragState::begin`] starts a gesture when the grabbed index
//!    addresses a row. Grabbing mid-gesture replaces the old gesture.
//! 2. **Hover**: [`DragState::target_edge`] names the edge of the hovered
//!    row the grabbed row would land on — [`Above`](DropEdge::Above) when
//!    the grab came from below the hovered row, [`Below`](DropEdge::Below)
//!    otherwise. Hovering the grabbed row itself, or outside the list,
//!    yields no edge.
//! 3. **Terminal events**: [`DragState::release`] and [`DragState::cancel`]
//!    both leave the machine idle, whatever else they decide. A release on
//!    the grabbed row or outside the list cancels rather than moves.

/// Which edge of a hovered row the grabbed row would land on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DropEdge {
    /// The grabbed row would land before the hovered row.
    Above,
    /// The grabbed row would land after the hovered row.
    Below,
}

/// State machine for one drag-to-reorder gesture.
///
/// At most one gesture is in flight at a time. All answers are derived from
/// the grabbed index and the list length supplied per call, so the machine
/// never goes stale on its own; callers reset it when the list changes under
/// an active gesture.
#[derive(Clone, Debug, Default)]
pub struct DragState {
    source: Option<usize>,
}

impl DragState {
    /// Creates an idle machine.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The index of the grabbed row, if a gesture is in flight.
    #[must_use]
    pub const fn source(&self) -> Option<usize> {
        self.source
    }

    /// Whether a gesture is in flight.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.source.is_some()
    }

    /// Starts a gesture on the row at `source` in a list of `len` rows.
    ///
    /// Returns whether a gesture started. A grab outside the list leaves
    /// the machine idle, discarding any gesture that was in flight.
    pub fn begin(&mut self, source: usize, len: usize) -> bool {
        if source >= len {
            self.source = None;
            return false;
        }
        self.source = Some(source);
        true
    }

    /// The edge of the row at `target` the grabbed row would land on.
    ///
    /// `None` when the machine is idle, when `target` is the grabbed row,
    /// or when `target` lies outside a list of `len` rows.
    #[must_use]
    pub fn target_edge(&self, target: usize, len: usize) -> Option<DropEdge> {
        let source = self.source?;
        if target >= len || target == source {
            return None;
        }
        if source > target {
            Some(DropEdge::Above)
        } else {
            Some(DropEdge::Below)
        }
    }

    /// Ends the gesture by dropping on the row at `target`.
    ///
    /// Returns the `(source, target)` move to perform, or `None` when the
    /// drop cancels instead: machine idle, drop on the grabbed row, or
    /// either index outside a list of `len` rows. The machine is idle
    /// afterwards in every case.
    pub fn release(&mut self, target: usize, len: usize) -> Option<(usize, usize)> {
        let source = self.source.take()?;
        if source >= len || target >= len || target == source {
            return None;
        }
        Some((source, target))
    }

    /// Abandons the gesture. Returns whether one was in flight.
    pub fn cancel(&mut self) -> bool {
        self.source.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grab_inside_the_list_starts_a_gesture() {
        let mut drag = DragState::new();
        assert!(drag.begin(2, 4));
        assert!(drag.is_dragging());
        assert_eq!(drag.source(), Some(2));
    }

    #[test]
    fn grab_outside_the_list_leaves_the_machine_idle() {
        let mut drag = DragState::new();
        assert!(!drag.begin(4, 4));
        assert!(!drag.is_dragging());
    }

    #[test]
    fn grab_replaces_a_gesture_in_flight() {
        let mut drag = DragState::new();
        drag.begin(0, 4);
        assert!(drag.begin(3, 4));
        assert_eq!(drag.source(), Some(3));

        // A bad grab discards the old gesture rather than keeping it.
        assert!(!drag.begin(9, 4));
        assert!(!drag.is_dragging());
    }

    #[test]
    fn idle_machine_offers_no_edge() {
        let drag = DragState::new();
        assert_eq!(drag.target_edge(1, 4), None);
    }

    #[test]
    fn hovering_the_grabbed_row_offers_no_edge() {
        let mut drag = DragState::new();
        drag.begin(1, 4);
        assert_eq!(drag.target_edge(1, 4), None);
    }

    #[test]
    fn edge_is_above_when_the_grab_came_from_below() {
        let mut drag = DragState::new();
        drag.begin(3, 4);
        assert_eq!(drag.target_edge(0, 4), Some(DropEdge::Above));
    }

    #[test]
    fn edge_is_below_when_the_grab_came_from_above() {
        let mut drag = DragState::new();
        drag.begin(0, 4);
        assert_eq!(drag.target_edge(3, 4), Some(DropEdge::Below));
    }

    #[test]
    fn hover_outside_the_list_offers_no_edge() {
        let mut drag = DragState::new();
        drag.begin(0, 4);
        assert_eq!(drag.target_edge(4, 4), None);
    }

    #[test]
    fn release_on_another_row_yields_the_move() {
        let mut drag = DragState::new();
        drag.begin(1, 4);
        assert_eq!(drag.release(3, 4), Some((1, 3)));
        assert!(!drag.is_dragging());
    }

    #[test]
    fn release_on_the_grabbed_row_cancels() {
        let mut drag = DragState::new();
        drag.begin(2, 4);
        assert_eq!(drag.release(2, 4), None);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn release_outside_the_list_cancels() {
        let mut drag = DragState::new();
        drag.begin(2, 4);
        assert_eq!(drag.release(7, 4), None);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn release_when_idle_stays_idle() {
        let mut drag = DragState::new();
        assert_eq!(drag.release(1, 4), None);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn release_after_the_list_shrank_under_the_grab_cancels() {
        let mut drag = DragState::new();
        drag.begin(3, 4);
        assert_eq!(drag.release(0, 2), None);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn cancel_reports_whether_a_gesture_was_in_flight() {
        let mut drag = DragState::new();
        drag.begin(0, 4);
        assert!(drag.cancel());
        assert!(!drag.cancel());
    }
}
