// Copyright 2025 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The reorderable list engine.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use crate::drag::{DragState, DropEdge};
use crate::host::RowHost;
use crate::model::ItemModel;

/// Errors reported by [`ListEngine`] operations.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    /// An index addressed a position the current contents do not have.
    #[error("index {index} is out of range for a list of {len} items")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The list length the index was checked against.
        len: usize,
    },
    /// An item was rejected by the model's validator.
    #[error("item at position {index} failed validation")]
    InvalidItem {
        /// Position the item was headed for.
        index: usize,
    },
}

/// Reorderable list state: items, their rendered rows, and one gesture.
///
/// The engine owns a `Vec<T>` of items, keeps a [`RowHost`] mirroring them
/// row for row, and runs a [`DragState`] for drag-to-reorder. Edits go
/// through the engine so that three things always hold:
///
/// - items and rows stay aligned index for index,
/// - nothing enters the list without passing the model's validator, and
///   a rejected item leaves the contents untouched,
/// - after every completed mutation the change hook runs exactly once,
///   with the contents already consistent.
///
/// Starting any mutation discards a gesture in flight; its affordances are
/// cleared through the host before the contents change.
///
/// Failed operations report [`ListError`] and have no effect: no mutation,
/// no hook, and any gesture in flight stays live.
pub struct ListEngine<T, M, H: RowHost<T>> {
    items: Vec<T>,
    rows: Vec<H::Row>,
    model: M,
    host: H,
    drag: DragState,
    /// Row currently carrying a drop indicator.
    hovered: Option<usize>,
    on_change: Option<Box<dyn FnMut(&[T])>>,
}

impl<T, M, H: RowHost<T>> core::fmt::Debug for ListEngine<T, M, H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ListEngine")
            .field("len", &self.items.len())
            .field("drag", &self.drag)
            .field("hovered", &self.hovered)
            .finish_non_exhaustive()
    }
}

impl<T, M, H> ListEngine<T, M, H>
where
    M: ItemModel<T>,
    H: RowHost<T>,
{
    /// Creates an empty engine.
    pub fn new(model: M, host: H) -> Self {
        Self {
            items: Vec::new(),
            rows: Vec::new(),
            model,
            host,
            drag: DragState::new(),
            hovered: None,
            on_change: None,
        }
    }

    /// Creates an engine holding `items`, validating each of them first.
    pub fn with_items(model: M, host: H, items: Vec<T>) -> Result<Self, ListError> {
        let mut engine = Self::new(model, host);
        engine.set_items(items)?;
        Ok(engine)
    }

    /// Installs the hook called once after every completed mutation.
    ///
    /// The hook observes the contents after the engine and host have been
    /// brought consistent. Replaces any previously installed hook.
    pub fn set_on_change(&mut self, hook: impl FnMut(&[T]) + 'static) {
        self.on_change = Some(Box::new(hook));
    }

    /// Removes the change hook, returning it if one was installed.
    pub fn take_on_change(&mut self) -> Option<Box<dyn FnMut(&[T])>> {
        self.on_change.take()
    }

    /// Replaces the whole contents.
    ///
    /// Every incoming item is validated up front; one rejected item fails
    /// the entire call and the current contents stay as they were. On
    /// success the rows are rebuilt from scratch and the hook runs once.
    pub fn set_items(&mut self, items: Vec<T>) -> Result<(), ListError> {
        if let Some(index) = items.iter().position(|item| !self.model.validate(item)) {
            return Err(ListError::InvalidItem { index });
        }
        self.abort_gesture();
        self.host.clear_rows();
        self.rows.clear();
        self.items = items;
        for (index, item) in self.items.iter().enumerate() {
            let label = self.model.format(item);
            self.rows.push(self.host.create_row(index, item, &label));
        }
        self.notify();
        Ok(())
    }

    /// Inserts `item` at `index`, shifting later items down.
    ///
    /// `index` may equal the current length to append.
    pub fn insert(&mut self, index: usize, item: T) -> Result<(), ListError> {
        if index > self.items.len() {
            return Err(self.out_of_range(index));
        }
        if !self.model.validate(&item) {
            return Err(ListError::InvalidItem { index });
        }
        self.abort_gesture();
        let label = self.model.format(&item);
        let row = self.host.create_row(index, &item, &label);
        self.items.insert(index, item);
        self.rows.insert(index, row);
        self.notify();
        Ok(())
    }

    /// Replaces the item at `index` in place.
    pub fn update(&mut self, index: usize, item: T) -> Result<(), ListError> {
        if index >= self.items.len() {
            return Err(self.out_of_range(index));
        }
        if !self.model.validate(&item) {
            return Err(ListError::InvalidItem { index });
        }
        self.abort_gesture();
        let label = self.model.format(&item);
        self.items[index] = item;
        self.host
            .update_row(index, &mut self.rows[index], &self.items[index], &label);
        self.notify();
        Ok(())
    }

    /// Removes and returns the item at `index`.
    pub fn remove(&mut self, index: usize) -> Result<T, ListError> {
        if index >= self.items.len() {
            return Err(self.out_of_range(index));
        }
        self.abort_gesture();
        let item = self.items.remove(index);
        let row = self.rows.remove(index);
        self.host.remove_row(index, row);
        self.notify();
        Ok(item)
    }

    /// Moves the item at `from` so that it ends up at position `to`.
    ///
    /// Both positions address the contents as they are before the move; the
    /// item is taken out and re-inserted so that it rests at `to` in the
    /// result. Moving an item onto its own position is accepted and still
    /// counts as a completed mutation.
    pub fn move_item(&mut self, from: usize, to: usize) -> Result<(), ListError> {
        if from >= self.items.len() {
            return Err(self.out_of_range(from));
        }
        if to >= self.items.len() {
            return Err(self.out_of_range(to));
        }
        self.abort_gesture();
        self.apply_move(from, to);
        self.notify();
        Ok(())
    }

    /// Removes every item.
    ///
    /// The hook runs once, with the now-empty contents, even when the list
    /// was already empty.
    pub fn clear(&mut self) {
        self.abort_gesture();
        self.items.clear();
        self.rows.clear();
        self.host.clear_rows();
        self.notify();
    }

    /// Begins a reorder gesture on the row at `source`.
    ///
    /// Returns whether a gesture started; the grabbed row is shown lifted.
    /// A gesture already in flight is discarded first.
    pub fn drag_begin(&mut self, source: usize) -> bool {
        self.abort_gesture();
        if !self.drag.begin(source, self.items.len()) {
            return false;
        }
        if let Some(row) = self.rows.get_mut(source) {
            self.host.set_lifted(source, row, true);
        }
        true
    }

    /// Updates the drop indicator for a gesture hovering over `target`.
    ///
    /// Returns the edge of `target` the grabbed row would land on, or
    /// `None` when no indicator applies: idle machine, the grabbed row
    /// itself, or a target outside the list. Any indicator shown on another
    /// row is cleared first.
    pub fn drag_hover(&mut self, target: usize) -> Option<DropEdge> {
        let edge = self.drag.target_edge(target, self.items.len());
        if self.hovered != Some(target) || edge.is_none() {
            self.clear_hint();
        }
        if let Some(edge) = edge {
            self.hovered = Some(target);
            if let Some(row) = self.rows.get_mut(target) {
                self.host.set_drop_hint(target, row, Some(edge));
            }
        }
        edge
    }

    /// Clears the drop indicator when the gesture leaves the hovered row.
    pub fn drag_leave(&mut self) {
        self.clear_hint();
    }

    /// Finishes the gesture by dropping onto `target`.
    ///
    /// Returns whether a move was performed; on a move the hook runs once.
    /// Whatever the outcome the gesture is over afterwards: affordances are
    /// cleared and the machine resets. Releasing on the grabbed row or
    /// outside the list cancels instead of moving.
    pub fn drag_release(&mut self, target: usize) -> bool {
        self.clear_hint();
        self.clear_lift();
        let Some((from, to)) = self.drag.release(target, self.items.len()) else {
            return false;
        };
        self.apply_move(from, to);
        self.notify();
        true
    }

    /// Abandons a gesture in flight, clearing its affordances.
    ///
    /// Returns whether there was one.
    pub fn drag_cancel(&mut self) -> bool {
        let active = self.drag.is_dragging();
        self.abort_gesture();
        active
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The items, in order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// The item at `index`, if there is one.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// The display label of the item at `index`.
    pub fn label_of(&self, index: usize) -> Result<String, ListError> {
        let item = self.items.get(index).ok_or(self.out_of_range(index))?;
        Ok(self.model.format(item))
    }

    /// The display label of `item`, which need not be in the list.
    ///
    /// Unlike [`label_of`](Self::label_of), which trusts items already
    /// admitted, this validates first: a rejected item fails with
    /// [`ListError::InvalidItem`] carrying the append position, where the
    /// candidate would have entered.
    pub fn format(&self, item: &T) -> Result<String, ListError> {
        if !self.model.validate(item) {
            return Err(ListError::InvalidItem {
                index: self.items.len(),
            });
        }
        Ok(self.model.format(item))
    }

    /// The row handles, aligned with [`ListEngine::items`].
    #[must_use]
    pub fn rows(&self) -> &[H::Row] {
        &self.rows
    }

    /// The model judging and labelling items.
    #[must_use]
    pub fn model(&self) -> &M {
        &self.model
    }

    /// The host rendering the rows.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Whether a reorder gesture is in flight.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// The grabbed row of the gesture in flight, if any.
    #[must_use]
    pub fn drag_source(&self) -> Option<usize> {
        self.drag.source()
    }

    fn out_of_range(&self, index: usize) -> ListError {
        ListError::IndexOutOfRange {
            index,
            len: self.items.len(),
        }
    }

    /// Splices item and row from `from` to `to` and mirrors it to the host.
    fn apply_move(&mut self, from: usize, to: usize) {
        let item = self.items.remove(from);
        self.items.insert(to, item);
        let row = self.rows.remove(from);
        self.rows.insert(to, row);
        self.host.move_row(from, to);
    }

    /// Discards any gesture in flight, clearing its affordances first.
    fn abort_gesture(&mut self) {
        self.clear_hint();
        self.clear_lift();
        self.drag.cancel();
    }

    fn clear_hint(&mut self) {
        if let Some(old) = self.hovered.take()
            && let Some(row) = self.rows.get_mut(old)
        {
            self.host.set_drop_hint(old, row, None);
        }
    }

    fn clear_lift(&mut self) {
        if let Some(source) = self.drag.source()
            && let Some(row) = self.rows.get_mut(source)
        {
            self.host.set_lifted(source, row, false);
        }
    }

    fn notify(&mut self) {
        if let Some(hook) = &mut self.on_change {
            hook(&self.items);
        }
    }
}
