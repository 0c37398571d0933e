// Copyright 2025 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A full sortable list frontend wired over a node tree.
//!
//! This example shows how to combine:
//! - `hedgerow_widget` for the list widget and its event/effect loop,
//! - `hedgerow_construct` for an arena-backed node tree playing the DOM,
//! - `hedgerow_menu` for context menus with viewport-aware placement,
//! - `hedgerow_modal` for the confirm, notice, and prompt dialogs,
//! - `hedgerow_theme` for the accent scheme pushed into the chrome.
//!
//! Run:
//! - `cargo run -p hedgerow_demos --example sortable_list`

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use hedgerow_action::Action;
use hedgerow_construct::{ArenaId, ArenaTree, Construct, Decl, SlotTable};
use hedgerow_list::{DisplayModel, DropEdge, RowHost};
use hedgerow_menu::{ContextMenu, DEFAULT_MARGIN, Placement, place};
use hedgerow_modal::{Alert, Confirm, Prompt};
use hedgerow_theme::Scheme;
use hedgerow_widget::{
    Effect, MenuScope, Presentation, SequentialIds, SortableWidget, WidgetEvent, WidgetHost,
    WidgetOptions, WidgetText, chrome,
};
use kurbo::{Point, Rect, Size};

type Widget = SortableWidget<String, DisplayModel, TreeHost>;

/// The tree nodes backing one row.
#[derive(Clone, Copy)]
struct RowNodes {
    root: ArenaId,
    label: ArenaId,
}

/// A [`WidgetHost`] rendering into an [`ArenaTree`] instead of a real DOM.
struct TreeHost {
    tree: ArenaTree,
    text: WidgetText,
    root: Option<ArenaId>,
    title: Option<ArenaId>,
    body: Option<ArenaId>,
}

impl TreeHost {
    fn new() -> Self {
        Self {
            tree: ArenaTree::new(),
            text: WidgetText::default(),
            root: None,
            title: None,
            body: None,
        }
    }

    fn set_accent(&mut self, scheme: Scheme) {
        if let Some(root) = self.root {
            self.tree.set_attr(root, "style", scheme.css_custom_properties());
        }
    }

    fn print(&self) {
        if let Some(root) = self.root {
            self.print_node(root, 1);
        }
    }

    fn print_body(&self) {
        if let Some(body) = self.body {
            self.print_node(body, 1);
        }
    }

    fn print_node(&self, id: ArenaId, depth: usize) {
        let pad = "  ".repeat(depth);
        if self.tree.tag(id) == Some(ArenaTree::TEXT_TAG) {
            println!("{pad}\"{}\"", self.tree.text_content(id));
            return;
        }
        let mut line = String::from(self.tree.tag(id).unwrap_or("?"));
        if let Some(element_id) = self.tree.element_id(id) {
            line.push('#');
            line.push_str(element_id);
        }
        for class in self.tree.classes(id) {
            line.push('.');
            line.push_str(class);
        }
        println!("{pad}{line}");
        for &child in self.tree.children(id) {
            self.print_node(child, depth + 1);
        }
    }
}

impl RowHost<String> for TreeHost {
    type Row = RowNodes;

    fn create_row(&mut self, index: usize, _item: &String, label: &str) -> RowNodes {
        let decl = chrome::row(label, &self.text);
        let mut slots = SlotTable::new();
        let root = self.tree.build(&decl, &mut slots);
        let label_node = *slots
            .get(chrome::ROW_LABEL)
            .expect("row chrome always slots a label");
        if let Some(body) = self.body {
            self.tree.insert_child(body, index, root);
        }
        RowNodes {
            root,
            label: label_node,
        }
    }

    fn update_row(&mut self, _index: usize, row: &mut RowNodes, _item: &String, label: &str) {
        self.tree.set_text(row.label, label);
    }

    fn remove_row(&mut self, _index: usize, row: RowNodes) {
        self.tree.remove(row.root);
    }

    fn move_row(&mut self, from: usize, to: usize) {
        if let Some(body) = self.body {
            self.tree.move_child(body, from, to);
        }
    }

    fn clear_rows(&mut self) {
        if let Some(body) = self.body {
            for child in self.tree.children(body).to_vec() {
                self.tree.remove(child);
            }
        }
    }

    fn set_lifted(&mut self, _index: usize, row: &mut RowNodes, lifted: bool) {
        if lifted {
            self.tree.add_class(row.root, "dragging");
        } else {
            self.tree.remove_class(row.root, "dragging");
        }
    }

    fn set_drop_hint(&mut self, _index: usize, row: &mut RowNodes, edge: Option<DropEdge>) {
        self.tree.remove_class(row.root, "drop-above");
        self.tree.remove_class(row.root, "drop-below");
        match edge {
            Some(DropEdge::Above) => self.tree.add_class(row.root, "drop-above"),
            Some(DropEdge::Below) => self.tree.add_class(row.root, "drop-below"),
            None => {}
        }
    }
}

impl WidgetHost<String> for TreeHost {
    fn mount(&mut self, chrome: &Decl) {
        let mut slots = SlotTable::new();
        let root = self.tree.build(chrome, &mut slots);
        self.root = Some(root);
        self.title = slots.get(chrome::TITLE).copied();
        self.body = slots.get(chrome::BODY).copied();
    }

    fn set_title(&mut self, title: &str) {
        if let Some(node) = self.title {
            self.tree.set_text(node, title);
        }
    }

    fn set_presentation(&mut self, presentation: Presentation) {
        let Some(root) = self.root else { return };
        let flag = |on: bool| if on { "true" } else { "false" };
        self.tree.set_attr(
            root,
            "data-disposable",
            flag(presentation.contains(Presentation::LIST_DISPOSABLE)),
        );
        self.tree.set_attr(
            root,
            "data-items-disposable",
            flag(presentation.contains(Presentation::ITEMS_DISPOSABLE)),
        );
        self.tree.set_attr(
            root,
            "data-options-list",
            flag(presentation.contains(Presentation::LIST_OPTIONS)),
        );
        self.tree.set_attr(
            root,
            "data-options-item",
            flag(presentation.contains(Presentation::ITEM_OPTIONS)),
        );
    }

    fn unmount(&mut self) {
        if let Some(root) = self.root.take() {
            self.tree.remove(root);
        }
        self.title = None;
        self.body = None;
    }
}

/// Carry out the effects a widget returned, feeding dialog and menu
/// outcomes back in as events.
fn respond(widget: &mut Widget, effects: Vec<Effect>, viewport: Rect) {
    for effect in effects {
        match effect {
            Effect::OpenNotice { title, message } => {
                let mut alert = Alert::new(title, message);
                println!(
                    "  [notice] {}: {}",
                    alert.shell().title(),
                    alert.shell().message()
                );
                alert.acknowledge();
                println!("  (user clicks \"{}\")", Alert::BUTTON);
            }
            Effect::OpenConfirm { title, message } => {
                let answer = Rc::new(Cell::new(None));
                let cell = answer.clone();
                let mut confirm =
                    Confirm::new(title, message, move |accepted| cell.set(Some(accepted)));
                println!(
                    "  [confirm] {}: {}",
                    confirm.shell().title(),
                    confirm.shell().message()
                );
                confirm.choose(true);
                if let Some(accepted) = answer.get() {
                    println!("  (user accepts)");
                    let more = widget
                        .handle(WidgetEvent::ConfirmAnswered { accepted })
                        .unwrap();
                    respond(widget, more, viewport);
                }
            }
            Effect::OpenPrompt { title, message, hint } => {
                let submitted = Rc::new(RefCell::new(None));
                let cell = submitted.clone();
                let mut prompt =
                    Prompt::new(title, message, move |value| *cell.borrow_mut() = Some(value))
                        .with_hint(hint)
                        .with_validator(|draft: &str| {
                            if draft.trim().is_empty() {
                                vec!["Name the item first.".to_string()]
                            } else {
                                Vec::new()
                            }
                        });
                println!(
                    "  [prompt] {}: {}",
                    prompt.shell().title(),
                    prompt.shell().message()
                );
                if !prompt.submit() {
                    println!("  empty submit is held back: {:?}", prompt.errors());
                }
                prompt.set_input("elderflower cordial");
                prompt.submit();
                if let Some(item) = submitted.borrow_mut().take() {
                    let more = widget.handle(WidgetEvent::InsertSubmitted { item }).unwrap();
                    respond(widget, more, viewport);
                }
            }
            Effect::OpenMenu { scope, title, at } => {
                let labels: Vec<String> = match scope {
                    MenuScope::List => widget
                        .list_actions()
                        .iter()
                        .map(|action| action.label().to_string())
                        .collect(),
                    MenuScope::Item(_) => widget
                        .item_actions()
                        .iter()
                        .map(|action| action.label().to_string())
                        .collect(),
                };
                let chosen = Rc::new(Cell::new(None));
                let mut entries = Vec::new();
                for (index, label) in labels.iter().enumerate() {
                    let cell = chosen.clone();
                    entries.push(Action::new(label.clone(), move |()| cell.set(Some(index))));
                }
                let mut menu = ContextMenu::with_actions(entries).unwrap();
                menu.open(title, at, ());

                let size = Size::new(220.0, 40.0 + 32.0 * labels.len() as f64);
                match place(at, size, viewport, DEFAULT_MARGIN) {
                    Placement::At(origin) => println!(
                        "  [menu] \"{}\" anchored ({}, {}) -> placed ({}, {})",
                        menu.title().unwrap_or(""),
                        at.x,
                        at.y,
                        origin.x,
                        origin.y
                    ),
                    Placement::Fill => println!("  [menu] fills the viewport"),
                }

                menu.choose(0);
                if let Some(index) = chosen.get() {
                    println!("  (user picks \"{}\")", labels[index]);
                    let more = widget
                        .handle(WidgetEvent::MenuChosen { scope, index })
                        .unwrap();
                    respond(widget, more, viewport);
                }
            }
            Effect::Disposed => {
                println!(
                    "  widget disposed; {} nodes left in the tree",
                    widget.engine().host().tree.node_count()
                );
            }
        }
    }
}

fn main() {
    let viewport = Rect::new(0.0, 0.0, 1280.0, 720.0);
    let mut ids = SequentialIds::new();

    let options = WidgetOptions {
        items_disposable: false,
        list_actions: vec![Action::new("Print shopping note", |()| {
            println!("  action: shopping note printed");
        })],
        item_actions: vec![Action::new("Star item", |row| {
            println!("  action: starred the item at row {row}");
        })],
        ..WidgetOptions::default()
    };
    let mut widget = SortableWidget::new(
        ids.issue(),
        "Hedge harvest",
        DisplayModel,
        TreeHost::new(),
        options,
    )
    .unwrap();
    widget
        .engine_mut()
        .set_on_change(|items| println!("  change hook: {items:?}"));

    println!("== Fill the list ==");
    widget
        .set_items(vec![
            "sloe gin".to_string(),
            "haw jelly".to_string(),
            "rosehip syrup".to_string(),
        ])
        .unwrap();

    let accent = Scheme::new(96.0, 38.0, 62.0);
    widget.engine_mut().host_mut().set_accent(accent);
    println!(
        "accent {} on a {} background, text {}",
        accent.hex(),
        if accent.is_dark() { "dark" } else { "light" },
        accent.contrast().hex()
    );

    println!("\n== Mounted chrome ==");
    widget.engine().host().print();

    println!("\n== Drag \"sloe gin\" below \"rosehip syrup\" ==");
    widget.handle(WidgetEvent::RowGrabbed { row: 0 }).unwrap();
    widget.handle(WidgetEvent::RowHovered { row: 2 }).unwrap();
    println!("mid-gesture rows:");
    widget.engine().host().print_body();
    widget.handle(WidgetEvent::RowDropped { row: 2 }).unwrap();
    println!("items now: {:?}", widget.items());

    println!("\n== Removing is denied until the list allows it ==");
    let effects = widget.handle(WidgetEvent::RowRemove { row: 0 }).unwrap();
    respond(&mut widget, effects, viewport);

    println!("\n== Remove \"haw jelly\" behind the confirm gate ==");
    widget.set_items_disposable(true);
    let effects = widget.handle(WidgetEvent::RowRemove { row: 0 }).unwrap();
    respond(&mut widget, effects, viewport);
    println!("items now: {:?}", widget.items());

    println!("\n== List menu near the right edge flips left ==");
    let effects = widget
        .handle(WidgetEvent::TitleOptions {
            at: Point::new(1250.0, 40.0),
        })
        .unwrap();
    respond(&mut widget, effects, viewport);

    println!("\n== Row menu near the bottom is pulled up ==");
    let effects = widget
        .handle(WidgetEvent::RowOptions {
            row: 1,
            at: Point::new(300.0, 680.0),
        })
        .unwrap();
    respond(&mut widget, effects, viewport);

    println!("\n== Add an item through the prompt ==");
    let effects = widget.handle(WidgetEvent::Add).unwrap();
    respond(&mut widget, effects, viewport);
    println!("items now: {:?}", widget.items());

    println!("\n== Rename, then dispose of the whole list ==");
    widget.rename("Hedge pantry");
    widget.set_disposable(true);
    let effects = widget.handle(WidgetEvent::Dispose).unwrap();
    respond(&mut widget, effects, viewport);
}
