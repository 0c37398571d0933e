// Copyright 2025 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The sortable list widget.

use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use hedgerow_action::{Action, ActionSetError, validate_actions};
use hedgerow_construct::Decl;
use hedgerow_list::{DropEdge, ItemModel, ListEngine, ListError, RowHost};
use kurbo::Point;

use crate::chrome;
use crate::events::{Effect, GateIntent, MenuScope, WidgetEvent};
use crate::types::{ListId, Presentation, WidgetText};

/// What a widget needs from its frontend beyond per-row updates.
///
/// The row half of the contract is [`RowHost`]; this adds the chrome around
/// the rows. A host that renders nothing real can still implement this, as
/// [`HeadlessHost`] does.
pub trait WidgetHost<T>: RowHost<T> {
    /// Builds the widget frame described by `chrome`.
    ///
    /// Called once during construction, before any rows exist. Row nodes
    /// belong in the slot registered under [`chrome::BODY`].
    fn mount(&mut self, chrome: &Decl);

    /// Pushes a title change into the mounted frame.
    fn set_title(&mut self, title: &str);

    /// Pushes recomputed presentation flags into the mounted frame.
    fn set_presentation(&mut self, presentation: Presentation);

    /// Tears the widget down entirely, rows included.
    fn unmount(&mut self);
}

/// A frontend-less [`WidgetHost`] that records what is pushed at it.
#[derive(Clone, Debug, Default)]
pub struct HeadlessHost {
    labels: Vec<String>,
    lifted: Option<usize>,
    hint: Option<(usize, DropEdge)>,
    element_id: Option<String>,
    title: Option<String>,
    presentation: Option<Presentation>,
    mounted: bool,
}

impl HeadlessHost {
    /// Creates an empty, unmounted host.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The formatted labels currently shown, in row order.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// The row currently lifted by a drag, if any.
    #[must_use]
    pub fn lifted(&self) -> Option<usize> {
        self.lifted
    }

    /// The row currently marked as the drop target, and on which edge.
    #[must_use]
    pub fn drop_hint(&self) -> Option<(usize, DropEdge)> {
        self.hint
    }

    /// The element id of the mounted frame, if one was mounted.
    #[must_use]
    pub fn element_id(&self) -> Option<&str> {
        self.element_id.as_deref()
    }

    /// The last title pushed via [`WidgetHost::set_title`].
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// The last flags pushed via [`WidgetHost::set_presentation`].
    #[must_use]
    pub fn presentation(&self) -> Option<Presentation> {
        self.presentation
    }

    /// Whether the frame is currently mounted.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }
}

impl<T> RowHost<T> for HeadlessHost {
    type Row = ();

    fn create_row(&mut self, index: usize, _item: &T, label: &str) {
        self.labels.insert(index, label.to_string());
    }

    fn update_row(&mut self, index: usize, _row: &mut (), _item: &T, label: &str) {
        if let Some(slot) = self.labels.get_mut(index) {
            *slot = label.to_string();
        }
    }

    fn remove_row(&mut self, index: usize, _row: ()) {
        if index < self.labels.len() {
            self.labels.remove(index);
        }
    }

    fn move_row(&mut self, from: usize, to: usize) {
        if from < self.labels.len() && to < self.labels.len() {
            let label = self.labels.remove(from);
            self.labels.insert(to, label);
        }
    }

    fn clear_rows(&mut self) {
        self.labels.clear();
        self.lifted = None;
        self.hint = None;
    }

    fn set_lifted(&mut self, index: usize, _row: &mut (), lifted: bool) {
        if lifted {
            self.lifted = Some(index);
        } else if self.lifted == Some(index) {
            self.lifted = None;
        }
    }

    fn set_drop_hint(&mut self, index: usize, _row: &mut (), edge: Option<DropEdge>) {
        match edge {
            Some(edge) => self.hint = Some((index, edge)),
            None => {
                if self.hint.is_some_and(|(hinted, _)| hinted == index) {
                    self.hint = None;
                }
            }
        }
    }
}

impl<T> WidgetHost<T> for HeadlessHost {
    fn mount(&mut self, chrome: &Decl) {
        self.mounted = true;
        self.element_id = chrome.id.clone();
    }

    fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    fn set_presentation(&mut self, presentation: Presentation) {
        self.presentation = Some(presentation);
    }

    fn unmount(&mut self) {
        self.mounted = false;
        self.labels.clear();
        self.lifted = None;
        self.hint = None;
    }
}

/// Construction-time configuration for a [`SortableWidget`].
#[derive(Debug, Default)]
pub struct WidgetOptions {
    /// Whether the widget as a whole may be disposed of.
    pub disposable: bool,
    /// Whether individual items may be removed and the list cleared.
    pub items_disposable: bool,
    /// The list-level menu entries. Empty means no list menu.
    pub list_actions: Vec<Action<()>>,
    /// The per-row menu entries, invoked with the row index. Empty means no
    /// row menus.
    pub item_actions: Vec<Action<usize>>,
    /// The strings the widget emits.
    pub text: WidgetText,
}

/// A reorderable list widget with gated destructive actions.
///
/// The widget owns a [`ListEngine`] and layers interaction policy over it:
/// every destructive press first answers to a confirm question, menus open
/// against validated action sets, and the add flow runs through a prompt.
/// Interaction arrives as [`WidgetEvent`]s; anything the frontend must do
/// in response comes back as [`Effect`] values.
///
/// Programmatic edits through [`engine_mut`](Self::engine_mut) are not
/// gated. The gate exists for presses forwarded from the chrome, not for
/// code that already decided.
pub struct SortableWidget<T, M, H: RowHost<T>> {
    id: ListId,
    title: String,
    engine: ListEngine<T, M, H>,
    list_actions: Vec<Action<()>>,
    item_actions: Vec<Action<usize>>,
    disposable: bool,
    items_disposable: bool,
    text: WidgetText,
    pending: Option<GateIntent>,
    insert_index: Option<usize>,
}

impl<T, M, H> SortableWidget<T, M, H>
where
    M: ItemModel<T>,
    H: WidgetHost<T>,
{
    /// Creates a widget and mounts its chrome on `host`.
    ///
    /// Fails without mounting anything if either action set in `options`
    /// contains a blank label.
    pub fn new(
        id: ListId,
        title: impl Into<String>,
        model: M,
        host: H,
        options: WidgetOptions,
    ) -> Result<Self, ActionSetError> {
        validate_actions(&options.list_actions)?;
        validate_actions(&options.item_actions)?;
        let mut widget = Self {
            id,
            title: title.into(),
            engine: ListEngine::new(model, host),
            list_actions: options.list_actions,
            item_actions: options.item_actions,
            disposable: options.disposable,
            items_disposable: options.items_disposable,
            text: options.text,
            pending: None,
            insert_index: None,
        };
        let decl = chrome::chrome(
            widget.id,
            &widget.title,
            widget.presentation(),
            &widget.text,
        );
        widget.engine.host_mut().mount(&decl);
        Ok(widget)
    }

    /// Applies one frontend event and returns what the frontend should do.
    ///
    /// Drag events never fail; the reorder machine quietly ignores whatever
    /// no longer applies. Other events carrying a row index return
    /// [`ListError::IndexOutOfRange`] when the row has meanwhile vanished,
    /// and [`ListError::InvalidItem`] when a submitted item fails the model.
    pub fn handle(&mut self, event: WidgetEvent<T>) -> Result<Vec<Effect>, ListError> {
        match event {
            WidgetEvent::TitleOptions { at } => Ok(self.open_list_menu(at)),
            WidgetEvent::Dispose => Ok(self.request_dispose()),
            WidgetEvent::Add => Ok(vec![Effect::OpenPrompt {
                title: self.text.add_title.clone(),
                message: self.text.add_message.clone(),
                hint: self.text.add_hint.clone(),
            }]),
            WidgetEvent::Clear => Ok(self.request_clear()),
            WidgetEvent::RowGrabbed { row } => {
                self.engine.drag_begin(row);
                Ok(Vec::new())
            }
            WidgetEvent::RowHovered { row } => {
                self.engine.drag_hover(row);
                Ok(Vec::new())
            }
            WidgetEvent::RowLeft => {
                self.engine.drag_leave();
                Ok(Vec::new())
            }
            WidgetEvent::RowDropped { row } => {
                self.engine.drag_release(row);
                Ok(Vec::new())
            }
            WidgetEvent::DragEnded => {
                self.engine.drag_cancel();
                Ok(Vec::new())
            }
            WidgetEvent::RowOptions { row, at } => self.open_item_menu(row, at),
            WidgetEvent::RowRemove { row } => self.request_remove(row),
            WidgetEvent::MenuChosen { scope, index } => self.menu_chosen(scope, index),
            WidgetEvent::ConfirmAnswered { accepted } => self.confirm_answered(accepted),
            WidgetEvent::InsertSubmitted { item } => self.insert_submitted(item),
        }
    }

    /// Replaces the items wholesale. See [`ListEngine::set_items`].
    pub fn set_items(&mut self, items: Vec<T>) -> Result<(), ListError> {
        self.engine.set_items(items)
    }

    /// Retitles the widget. Chrome updates; the change hook does not fire.
    pub fn rename(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.engine.host_mut().set_title(&self.title);
    }

    /// Allows or forbids disposing of the whole widget.
    pub fn set_disposable(&mut self, disposable: bool) {
        self.disposable = disposable;
        self.push_presentation();
    }

    /// Allows or forbids removing items and clearing the list.
    pub fn set_items_disposable(&mut self, disposable: bool) {
        self.items_disposable = disposable;
        self.push_presentation();
    }

    /// Replaces the list-level menu entries.
    ///
    /// The whole set is validated first; on error the previous entries stay.
    pub fn set_list_actions(&mut self, actions: Vec<Action<()>>) -> Result<(), ActionSetError> {
        validate_actions(&actions)?;
        self.list_actions = actions;
        self.push_presentation();
        Ok(())
    }

    /// Replaces the per-row menu entries.
    ///
    /// The whole set is validated first; on error the previous entries stay.
    pub fn set_item_actions(&mut self, actions: Vec<Action<usize>>) -> Result<(), ActionSetError> {
        validate_actions(&actions)?;
        self.item_actions = actions;
        self.push_presentation();
        Ok(())
    }

    /// Pins where submitted items land, or `None` to append at the end.
    pub fn set_insert_position(&mut self, index: Option<usize>) {
        self.insert_index = index;
    }

    /// Where the next submitted item lands.
    #[must_use]
    pub fn insert_position(&self) -> usize {
        self.insert_index
            .unwrap_or(self.engine.len())
            .min(self.engine.len())
    }

    /// This widget's identity.
    #[must_use]
    pub fn id(&self) -> ListId {
        self.id
    }

    /// The current title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The strings the widget emits.
    #[must_use]
    pub fn text(&self) -> &WidgetText {
        &self.text
    }

    /// Whether the widget as a whole may be disposed of.
    #[must_use]
    pub fn is_disposable(&self) -> bool {
        self.disposable
    }

    /// Whether items may be removed and the list cleared.
    #[must_use]
    pub fn items_disposable(&self) -> bool {
        self.items_disposable
    }

    /// The list-level menu entries.
    #[must_use]
    pub fn list_actions(&self) -> &[Action<()>] {
        &self.list_actions
    }

    /// The per-row menu entries.
    #[must_use]
    pub fn item_actions(&self) -> &[Action<usize>] {
        &self.item_actions
    }

    /// The destructive intent whose confirm question is currently open.
    #[must_use]
    pub fn pending_intent(&self) -> Option<&GateIntent> {
        self.pending.as_ref()
    }

    /// The items in order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        self.engine.items()
    }

    /// The number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.engine.len()
    }

    /// Whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.engine.is_empty()
    }

    /// The underlying engine.
    #[must_use]
    pub fn engine(&self) -> &ListEngine<T, M, H> {
        &self.engine
    }

    /// The underlying engine, mutably. Edits made here bypass the gate.
    pub fn engine_mut(&mut self) -> &mut ListEngine<T, M, H> {
        &mut self.engine
    }

    fn presentation(&self) -> Presentation {
        let mut flags = Presentation::empty();
        flags.set(Presentation::LIST_DISPOSABLE, self.disposable);
        flags.set(Presentation::ITEMS_DISPOSABLE, self.items_disposable);
        flags.set(Presentation::LIST_OPTIONS, !self.list_actions.is_empty());
        flags.set(Presentation::ITEM_OPTIONS, !self.item_actions.is_empty());
        flags
    }

    fn push_presentation(&mut self) {
        let presentation = self.presentation();
        self.engine.host_mut().set_presentation(presentation);
    }

    fn open_list_menu(&self, at: Point) -> Vec<Effect> {
        if self.list_actions.is_empty() {
            return Vec::new();
        }
        vec![Effect::OpenMenu {
            scope: MenuScope::List,
            title: self.title.clone(),
            at,
        }]
    }

    fn open_item_menu(&self, row: usize, at: Point) -> Result<Vec<Effect>, ListError> {
        if self.item_actions.is_empty() {
            return Ok(Vec::new());
        }
        let title = self.engine.label_of(row)?;
        Ok(vec![Effect::OpenMenu {
            scope: MenuScope::Item(row),
            title,
            at,
        }])
    }

    fn request_remove(&mut self, row: usize) -> Result<Vec<Effect>, ListError> {
        let label = self.engine.label_of(row)?;
        if !self.items_disposable {
            return Ok(vec![self.denied()]);
        }
        self.pending = Some(GateIntent::RemoveItem {
            row,
            label: label.clone(),
        });
        Ok(vec![Effect::OpenConfirm {
            message: self.text.remove_question(&label),
            title: label,
        }])
    }

    fn request_clear(&mut self) -> Vec<Effect> {
        if !self.items_disposable {
            return vec![self.denied()];
        }
        self.pending = Some(GateIntent::ClearList);
        vec![Effect::OpenConfirm {
            title: self.title.clone(),
            message: self.text.clear_question(&self.title),
        }]
    }

    fn request_dispose(&mut self) -> Vec<Effect> {
        if !self.disposable {
            return vec![self.denied()];
        }
        self.pending = Some(GateIntent::DisposeList);
        vec![Effect::OpenConfirm {
            title: self.title.clone(),
            message: self.text.dispose_question(&self.title),
        }]
    }

    fn denied(&self) -> Effect {
        Effect::OpenNotice {
            title: self.text.denied_title.clone(),
            message: self.text.denied_message.clone(),
        }
    }

    fn confirm_answered(&mut self, accepted: bool) -> Result<Vec<Effect>, ListError> {
        let Some(intent) = self.pending.take() else {
            return Ok(Vec::new());
        };
        if !accepted {
            return Ok(Vec::new());
        }
        match intent {
            GateIntent::RemoveItem { row, label } => {
                // The rows may have shifted while the question was open;
                // find the item again before removing anything.
                let row = self.locate(row, &label)?;
                self.engine.remove(row)?;
                Ok(Vec::new())
            }
            GateIntent::ClearList => {
                self.engine.clear();
                Ok(Vec::new())
            }
            GateIntent::DisposeList => {
                self.engine.host_mut().unmount();
                Ok(vec![Effect::Disposed])
            }
        }
    }

    fn menu_chosen(&mut self, scope: MenuScope, index: usize) -> Result<Vec<Effect>, ListError> {
        match scope {
            MenuScope::List => {
                if let Some(action) = self.list_actions.get_mut(index) {
                    action.invoke(());
                }
            }
            MenuScope::Item(row) => {
                if row >= self.engine.len() {
                    return Err(ListError::IndexOutOfRange {
                        index: row,
                        len: self.engine.len(),
                    });
                }
                if let Some(action) = self.item_actions.get_mut(index) {
                    action.invoke(row);
                }
            }
        }
        Ok(Vec::new())
    }

    /// Finds the row holding the item labelled `label`, preferring `row`.
    fn locate(&self, row: usize, label: &str) -> Result<usize, ListError> {
        if self.engine.label_of(row).is_ok_and(|current| current == label) {
            return Ok(row);
        }
        (0..self.engine.len())
            .find(|&index| {
                self.engine
                    .label_of(index)
                    .is_ok_and(|current| current == label)
            })
            .ok_or(ListError::IndexOutOfRange {
                index: row,
                len: self.engine.len(),
            })
    }

    fn insert_submitted(&mut self, item: T) -> Result<Vec<Effect>, ListError> {
        let index = self.insert_position();
        self.engine.insert(index, item)?;
        Ok(Vec::new())
    }
}

impl<T, M, H> fmt::Debug for SortableWidget<T, M, H>
where
    M: ItemModel<T>,
    H: RowHost<T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortableWidget")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("len", &self.engine.len())
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use alloc::string::String;
    use core::cell::Cell;

    use hedgerow_list::DisplayModel;

    use super::*;

    fn fruits() -> Vec<String> {
        ["apple", "plum", "sloe"].map(String::from).into()
    }

    fn widget(options: WidgetOptions) -> SortableWidget<String, DisplayModel, HeadlessHost> {
        let mut widget = SortableWidget::new(
            ListId(9),
            "Groceries",
            DisplayModel,
            HeadlessHost::new(),
            options,
        )
        .unwrap();
        widget.set_items(fruits()).unwrap();
        widget
    }

    fn disposing() -> WidgetOptions {
        WidgetOptions {
            items_disposable: true,
            ..WidgetOptions::default()
        }
    }

    fn at() -> Point {
        Point::new(40.0, 60.0)
    }

    #[test]
    fn construction_mounts_chrome_under_the_derived_element_id() {
        let widget = widget(WidgetOptions::default());
        assert!(widget.engine().host().is_mounted());
        assert_eq!(widget.engine().host().element_id(), Some("sl-9"));
        assert_eq!(widget.engine().host().labels(), fruits().as_slice());
    }

    #[test]
    fn construction_rejects_blank_action_labels() {
        let options = WidgetOptions {
            list_actions: vec![
                Action::new("Rename", |()| {}),
                Action::new("  ", |()| {}),
            ],
            ..WidgetOptions::default()
        };
        let result = SortableWidget::<String, _, _>::new(
            ListId(0),
            "Groceries",
            DisplayModel,
            HeadlessHost::new(),
            options,
        );
        assert_eq!(result.err(), Some(ActionSetError::BlankLabel { index: 1 }));
    }

    #[test]
    fn removal_is_gated_behind_a_confirm_question() {
        let mut widget = widget(disposing());

        let effects = widget.handle(WidgetEvent::RowRemove { row: 1 }).unwrap();
        assert_eq!(
            effects,
            vec![Effect::OpenConfirm {
                title: "plum".to_string(),
                message: "Remove \"plum\"?".to_string(),
            }]
        );
        assert_eq!(
            widget.pending_intent(),
            Some(&GateIntent::RemoveItem {
                row: 1,
                label: "plum".to_string(),
            })
        );
        assert_eq!(widget.len(), 3);

        let effects = widget
            .handle(WidgetEvent::ConfirmAnswered { accepted: true })
            .unwrap();
        assert!(effects.is_empty());
        assert_eq!(widget.items(), ["apple", "sloe"]);
        assert_eq!(widget.pending_intent(), None);
    }

    #[test]
    fn declining_the_question_keeps_the_item() {
        let mut widget = widget(disposing());
        widget.handle(WidgetEvent::RowRemove { row: 1 }).unwrap();

        let effects = widget
            .handle(WidgetEvent::ConfirmAnswered { accepted: false })
            .unwrap();
        assert!(effects.is_empty());
        assert_eq!(widget.items(), fruits().as_slice());
        assert_eq!(widget.pending_intent(), None);

        // A stray second answer has nothing left to act on.
        let effects = widget
            .handle(WidgetEvent::ConfirmAnswered { accepted: true })
            .unwrap();
        assert!(effects.is_empty());
        assert_eq!(widget.len(), 3);
    }

    #[test]
    fn removal_without_permission_shows_a_notice() {
        let mut widget = widget(WidgetOptions::default());
        let effects = widget.handle(WidgetEvent::RowRemove { row: 0 }).unwrap();
        assert_eq!(
            effects,
            vec![Effect::OpenNotice {
                title: "Not allowed".to_string(),
                message: "This list does not allow that.".to_string(),
            }]
        );
        assert_eq!(widget.pending_intent(), None);
        assert_eq!(widget.len(), 3);
    }

    #[test]
    fn parked_removal_follows_the_item_when_rows_shift() {
        let mut widget = widget(disposing());
        widget.handle(WidgetEvent::RowRemove { row: 1 }).unwrap();

        // An earlier row disappears while the question is open, shifting
        // "plum" from row 1 to row 0.
        widget.engine_mut().remove(0).unwrap();

        widget
            .handle(WidgetEvent::ConfirmAnswered { accepted: true })
            .unwrap();
        assert_eq!(widget.items(), ["sloe"]);
    }

    #[test]
    fn parked_removal_is_rechecked_when_answered() {
        let mut widget = widget(disposing());
        widget.handle(WidgetEvent::RowRemove { row: 2 }).unwrap();

        // The list shrinks while the question is open.
        widget.engine_mut().remove(2).unwrap();

        let result = widget.handle(WidgetEvent::ConfirmAnswered { accepted: true });
        assert_eq!(result, Err(ListError::IndexOutOfRange { index: 2, len: 2 }));
        assert_eq!(widget.items(), ["apple", "plum"]);
    }

    #[test]
    fn clearing_asks_about_the_whole_list() {
        let mut widget = widget(disposing());

        let effects = widget.handle(WidgetEvent::Clear).unwrap();
        assert_eq!(
            effects,
            vec![Effect::OpenConfirm {
                title: "Groceries".to_string(),
                message: "Remove every item in \"Groceries\"?".to_string(),
            }]
        );

        widget
            .handle(WidgetEvent::ConfirmAnswered { accepted: true })
            .unwrap();
        assert!(widget.is_empty());
        assert!(widget.engine().host().labels().is_empty());
    }

    #[test]
    fn disposal_unmounts_and_reports() {
        let options = WidgetOptions {
            disposable: true,
            ..WidgetOptions::default()
        };
        let mut widget = widget(options);

        let effects = widget.handle(WidgetEvent::Dispose).unwrap();
        assert_eq!(widget.pending_intent(), Some(&GateIntent::DisposeList));
        assert_eq!(effects.len(), 1);

        let effects = widget
            .handle(WidgetEvent::ConfirmAnswered { accepted: true })
            .unwrap();
        assert_eq!(effects, vec![Effect::Disposed]);
        assert!(!widget.engine().host().is_mounted());
    }

    #[test]
    fn disposal_without_permission_shows_a_notice() {
        let mut widget = widget(WidgetOptions::default());
        let effects = widget.handle(WidgetEvent::Dispose).unwrap();
        assert!(matches!(effects.as_slice(), [Effect::OpenNotice { .. }]));
        assert_eq!(widget.pending_intent(), None);
        assert!(widget.engine().host().is_mounted());
    }

    #[test]
    fn title_menu_opens_only_when_actions_exist() {
        let mut widget = widget(WidgetOptions::default());
        let effects = widget.handle(WidgetEvent::TitleOptions { at: at() }).unwrap();
        assert!(effects.is_empty());

        let chosen = Rc::new(Cell::new(false));
        let spy = chosen.clone();
        widget
            .set_list_actions(vec![Action::new("Rename", move |()| spy.set(true))])
            .unwrap();

        let effects = widget.handle(WidgetEvent::TitleOptions { at: at() }).unwrap();
        assert_eq!(
            effects,
            vec![Effect::OpenMenu {
                scope: MenuScope::List,
                title: "Groceries".to_string(),
                at: at(),
            }]
        );

        widget
            .handle(WidgetEvent::MenuChosen {
                scope: MenuScope::List,
                index: 0,
            })
            .unwrap();
        assert!(chosen.get());
    }

    #[test]
    fn item_menu_is_titled_by_the_row_label() {
        let mut widget = widget(WidgetOptions::default());
        let chosen = Rc::new(Cell::new(None));
        let spy = chosen.clone();
        widget
            .set_item_actions(vec![Action::new("Edit", move |row| spy.set(Some(row)))])
            .unwrap();

        let effects = widget
            .handle(WidgetEvent::RowOptions { row: 2, at: at() })
            .unwrap();
        assert_eq!(
            effects,
            vec![Effect::OpenMenu {
                scope: MenuScope::Item(2),
                title: "sloe".to_string(),
                at: at(),
            }]
        );

        widget
            .handle(WidgetEvent::MenuChosen {
                scope: MenuScope::Item(2),
                index: 0,
            })
            .unwrap();
        assert_eq!(chosen.get(), Some(2));
    }

    #[test]
    fn choosing_from_a_menu_over_a_vanished_row_fails() {
        let mut widget = widget(WidgetOptions::default());
        widget
            .set_item_actions(vec![Action::new("Edit", |_| {})])
            .unwrap();

        let result = widget.handle(WidgetEvent::MenuChosen {
            scope: MenuScope::Item(5),
            index: 0,
        });
        assert_eq!(result, Err(ListError::IndexOutOfRange { index: 5, len: 3 }));
    }

    #[test]
    fn menu_choice_with_an_unknown_entry_does_nothing() {
        let mut widget = widget(WidgetOptions::default());
        let chosen = Rc::new(Cell::new(false));
        let spy = chosen.clone();
        widget
            .set_list_actions(vec![Action::new("Rename", move |()| spy.set(true))])
            .unwrap();

        let effects = widget
            .handle(WidgetEvent::MenuChosen {
                scope: MenuScope::List,
                index: 9,
            })
            .unwrap();
        assert!(effects.is_empty());
        assert!(!chosen.get());
    }

    #[test]
    fn add_flow_prompts_then_inserts_at_the_default_position() {
        let mut widget = widget(WidgetOptions::default());

        let effects = widget.handle(WidgetEvent::Add).unwrap();
        assert_eq!(
            effects,
            vec![Effect::OpenPrompt {
                title: "Add item".to_string(),
                message: "Name the new item.".to_string(),
                hint: "new item".to_string(),
            }]
        );

        widget
            .handle(WidgetEvent::InsertSubmitted {
                item: "haw".to_string(),
            })
            .unwrap();
        assert_eq!(widget.items(), ["apple", "plum", "sloe", "haw"]);

        widget.set_insert_position(Some(0));
        widget
            .handle(WidgetEvent::InsertSubmitted {
                item: "rowan".to_string(),
            })
            .unwrap();
        assert_eq!(widget.items()[0], "rowan");
    }

    #[test]
    fn submitted_items_still_face_the_model() {
        let model = DisplayModel.with_validator(|item: &String| item != "thorn");
        let mut widget = SortableWidget::new(
            ListId(0),
            "Hedge",
            model,
            HeadlessHost::new(),
            WidgetOptions::default(),
        )
        .unwrap();

        let result = widget.handle(WidgetEvent::InsertSubmitted {
            item: "thorn".to_string(),
        });
        assert_eq!(result, Err(ListError::InvalidItem { index: 0 }));
        assert!(widget.is_empty());
    }

    #[test]
    fn drag_events_reorder_without_effects() {
        let mut widget = widget(WidgetOptions::default());

        assert!(widget.handle(WidgetEvent::RowGrabbed { row: 0 }).unwrap().is_empty());
        assert_eq!(widget.engine().host().lifted(), Some(0));

        widget.handle(WidgetEvent::RowHovered { row: 2 }).unwrap();
        assert_eq!(widget.engine().host().drop_hint(), Some((2, DropEdge::Below)));

        widget.handle(WidgetEvent::RowDropped { row: 2 }).unwrap();
        assert_eq!(widget.items(), ["plum", "sloe", "apple"]);
        assert_eq!(widget.engine().host().labels(), ["plum", "sloe", "apple"]);
        assert_eq!(widget.engine().host().lifted(), None);
    }

    #[test]
    fn stray_drag_events_are_ignored() {
        let mut widget = widget(WidgetOptions::default());
        assert!(widget.handle(WidgetEvent::RowDropped { row: 1 }).unwrap().is_empty());
        assert!(widget.handle(WidgetEvent::DragEnded).unwrap().is_empty());
        assert_eq!(widget.items(), fruits().as_slice());
    }

    #[test]
    fn mutating_mid_gesture_discards_the_gesture() {
        let mut widget = widget(WidgetOptions::default());
        widget.handle(WidgetEvent::RowGrabbed { row: 1 }).unwrap();

        widget.engine_mut().remove(0).unwrap();
        assert!(!widget.engine().is_dragging());

        widget.handle(WidgetEvent::RowDropped { row: 1 }).unwrap();
        assert_eq!(widget.items(), ["plum", "sloe"]);
    }

    #[test]
    fn presentation_recomputes_as_configuration_changes() {
        let mut widget = widget(WidgetOptions::default());
        assert_eq!(widget.engine().host().presentation(), None);

        widget.set_disposable(true);
        assert_eq!(
            widget.engine().host().presentation(),
            Some(Presentation::LIST_DISPOSABLE)
        );

        widget
            .set_list_actions(vec![Action::new("Rename", |()| {})])
            .unwrap();
        assert_eq!(
            widget.engine().host().presentation(),
            Some(Presentation::LIST_DISPOSABLE | Presentation::LIST_OPTIONS)
        );

        // A bad replacement set leaves both the entries and the flags alone.
        let result = widget.set_list_actions(vec![Action::new("", |()| {})]);
        assert_eq!(result, Err(ActionSetError::BlankLabel { index: 0 }));
        assert_eq!(widget.list_actions().len(), 1);
        assert_eq!(
            widget.engine().host().presentation(),
            Some(Presentation::LIST_DISPOSABLE | Presentation::LIST_OPTIONS)
        );
    }

    #[test]
    fn renaming_updates_chrome_without_firing_the_hook() {
        let mut widget = widget(WidgetOptions::default());
        widget
            .set_list_actions(vec![Action::new("Rename", |()| {})])
            .unwrap();

        let changes = Rc::new(Cell::new(0usize));
        let spy = changes.clone();
        widget
            .engine_mut()
            .set_on_change(move |_| spy.set(spy.get() + 1));

        widget.rename("Pantry");
        assert_eq!(widget.title(), "Pantry");
        assert_eq!(widget.engine().host().title(), Some("Pantry"));
        assert_eq!(changes.get(), 0);

        let effects = widget.handle(WidgetEvent::TitleOptions { at: at() }).unwrap();
        assert_eq!(
            effects,
            vec![Effect::OpenMenu {
                scope: MenuScope::List,
                title: "Pantry".to_string(),
                at: at(),
            }]
        );
    }
}
