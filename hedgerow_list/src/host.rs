// Copyright 2025 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The seam between list state and whatever renders it.

use alloc::string::String;
use alloc::vec::Vec;

use crate::drag::DropEdge;

/// Receives row-level effects as the engine mutates its contents.
///
/// The engine owns the items; a host owns their presentation. Every call
/// describes one structural change, issued after the engine's own
/// bookkeeping, with indices that are valid for the host's mirrored state at
/// that moment:
///
/// - [`create_row`](RowHost::create_row) introduces a row at `index`,
///   shifting later rows down,
/// - [`remove_row`](RowHost::remove_row) hands back the row that sat at
///   `index`,
/// - [`move_row`](RowHost::move_row) uses splice positions: the row leaves
///   `from` first, then lands at `to` in the shortened list.
///
/// The two affordance hooks ([`set_lifted`](RowHost::set_lifted) and
/// [`set_drop_hint`](RowHost::set_drop_hint)) default to no-ops so that
/// hosts without drag visuals can skip them.
pub trait RowHost<T> {
    /// Per-row handle retained by the engine and handed back on updates.
    type Row;

    /// Build the row for `item`, entering the list at `index`.
    fn create_row(&mut self, index: usize, item: &T, label: &str) -> Self::Row;

    /// Refresh the row at `index` after its item was replaced.
    fn update_row(&mut self, index: usize, row: &mut Self::Row, item: &T, label: &str);

    /// Tear down the row that sat at `index`.
    fn remove_row(&mut self, index: usize, row: Self::Row);

    /// Reorder: the row at `from` was taken out and re-inserted at `to`.
    fn move_row(&mut self, from: usize, to: usize);

    /// Tear down every row at once.
    fn clear_rows(&mut self);

    /// Show or clear the lifted look on the row a gesture grabbed.
    fn set_lifted(&mut self, index: usize, row: &mut Self::Row, lifted: bool) {
        let _ = (index, row, lifted);
    }

    /// Show a drop indicator on the row at `index`, or clear it with `None`.
    fn set_drop_hint(&mut self, index: usize, row: &mut Self::Row, hint: Option<DropEdge>) {
        let _ = (index, row, hint);
    }
}

/// A host that mirrors rows as plain labels.
///
/// Useful headless: tests and terminal frontends can inspect
/// [`labels`](LabelHost::labels) instead of walking a node tree. Drag
/// affordances are recorded rather than drawn.
#[derive(Clone, Debug, Default)]
pub struct LabelHost {
    labels: Vec<String>,
    lifted: Option<usize>,
    hint: Option<(usize, DropEdge)>,
}

impl LabelHost {
    /// Creates an empty host.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The mirrored row labels, in list order.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Which row is currently shown lifted, if any.
    #[must_use]
    pub fn lifted(&self) -> Option<usize> {
        self.lifted
    }

    /// The row currently carrying a drop indicator, and on which edge.
    #[must_use]
    pub fn drop_hint(&self) -> Option<(usize, DropEdge)> {
        self.hint
    }
}

impl<T> RowHost<T> for LabelHost {
    type Row = ();

    fn create_row(&mut self, index: usize, _item: &T, label: &str) -> Self::Row {
        self.labels.insert(index, String::from(label));
    }

    fn update_row(&mut self, index: usize, _row: &mut Self::Row, _item: &T, label: &str) {
        self.labels[index] = String::from(label);
    }

    fn remove_row(&mut self, index: usize, _row: Self::Row) {
        self.labels.remove(index);
    }

    fn move_row(&mut self, from: usize, to: usize) {
        let label = self.labels.remove(from);
        self.labels.insert(to, label);
    }

    fn clear_rows(&mut self) {
        self.labels.clear();
        self.lifted = None;
        self.hint = None;
    }

    fn set_lifted(&mut self, index: usize, _row: &mut Self::Row, lifted: bool) {
        self.lifted = lifted.then_some(index);
    }

    fn set_drop_hint(&mut self, index: usize, _row: &mut Self::Row, hint: Option<DropEdge>) {
        self.hint = hint.map(|edge| (index, edge));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_host_mirrors_structural_calls() {
        let mut host = LabelHost::new();
        let h = &mut host;
        RowHost::<u32>::create_row(h, 0, &1, "one");
        RowHost::<u32>::create_row(h, 1, &3, "three");
        RowHost::<u32>::create_row(h, 1, &2, "two");
        assert_eq!(host.labels(), ["one", "two", "three"]);

        RowHost::<u32>::move_row(&mut host, 0, 2);
        assert_eq!(host.labels(), ["two", "three", "one"]);

        RowHost::<u32>::remove_row(&mut host, 1, ());
        assert_eq!(host.labels(), ["two", "one"]);

        RowHost::<u32>::update_row(&mut host, 1, &mut (), &9, "nine");
        assert_eq!(host.labels(), ["two", "nine"]);
    }

    #[test]
    fn affordances_are_recorded_and_cleared() {
        let mut host = LabelHost::new();
        RowHost::<u32>::create_row(&mut host, 0, &1, "one");
        RowHost::<u32>::set_lifted(&mut host, 0, &mut (), true);
        RowHost::<u32>::set_drop_hint(&mut host, 0, &mut (), Some(DropEdge::Below));
        assert_eq!(host.lifted(), Some(0));
        assert_eq!(host.drop_hint(), Some((0, DropEdge::Below)));

        RowHost::<u32>::clear_rows(&mut host);
        assert_eq!(host.lifted(), None);
        assert_eq!(host.drop_hint(), None);
        assert!(host.labels().is_empty());
    }
}
