// Copyright 2025 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A generational node arena serving as the reference [`Construct`] host.

use alloc::string::String;
use alloc::vec::Vec;

use smallvec::SmallVec;

use crate::{Child, Construct, Decl, SlotTable};

/// Identifier for a node in an [`ArenaTree`] (generational).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ArenaId(pub(crate) u32, pub(crate) u32);

impl ArenaId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug)]
struct Node {
    generation: u32,
    parent: Option<ArenaId>,
    children: SmallVec<[ArenaId; 4]>,
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<(String, String)>,
    text: Option<String>,
}

impl Node {
    fn element(generation: u32, tag: String) -> Self {
        Self {
            generation,
            parent: None,
            children: SmallVec::new(),
            tag,
            id: None,
            classes: Vec::new(),
            attrs: Vec::new(),
            text: None,
        }
    }

    fn text(generation: u32, text: String) -> Self {
        Self {
            text: Some(text),
            ..Self::element(generation, String::from(ArenaTree::TEXT_TAG))
        }
    }
}

/// A minimal retained node tree backed by a generational arena.
///
/// `ArenaTree` is the reference [`Construct`] host: it turns [`Decl`]s into
/// element and text nodes addressed by stale-safe [`ArenaId`]s, and offers
/// the small set of structural edits widget hosts need (reparenting, child
/// reordering, attribute and class updates, text replacement, subtree
/// removal). Freed slots are recycled with a bumped generation, so an
/// identifier held across a removal goes stale instead of aliasing the
/// replacement node.
///
/// ## Example
///
/// ```rust
/// use hedgerow_construct::{ArenaTree, Construct, Decl, SlotTable};
///
/// let mut tree = ArenaTree::new();
/// let mut slots = SlotTable::new();
/// let root = tree.build(&Decl::new("p").text("old"), &mut slots);
///
/// tree.set_text(root, "new");
/// assert_eq!(tree.text_content(root), "new");
/// ```
pub struct ArenaTree {
    /// Slot storage; `None` marks a freed slot.
    nodes: Vec<Option<Node>>,
    /// Last generation handed out per slot; survives frees.
    generations: Vec<u32>,
    free_list: Vec<usize>,
}

impl core::fmt::Debug for ArenaTree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.nodes.len();
        let alive = self.nodes.iter().filter(|n| n.is_some()).count();
        f.debug_struct("ArenaTree")
            .field("nodes_total", &total)
            .field("nodes_alive", &alive)
            .field("free_list", &self.free_list.len())
            .finish_non_exhaustive()
    }
}

impl Default for ArenaTree {
    fn default() -> Self {
        Self::new()
    }
}

impl ArenaTree {
    /// Tag reported for text nodes.
    pub const TEXT_TAG: &'static str = "#text";

    /// Create a new empty arena.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
        }
    }

    /// Insert an element node, appended to `parent`'s children if given.
    ///
    /// With `parent: None` the node starts as a root; it can be attached
    /// later with [`ArenaTree::append_child`] or [`ArenaTree::insert_child`].
    /// A stale `parent` is ignored and the node starts as a root too.
    pub fn insert_element(&mut self, parent: Option<ArenaId>, tag: impl Into<String>) -> ArenaId {
        let tag = tag.into();
        let parent = parent.filter(|&p| self.is_alive(p));
        let id = self.alloc(|generation| Node::element(generation, tag));
        if let Some(p) = parent {
            self.link_parent(id, p);
        }
        id
    }

    /// Insert a text node, appended to `parent`'s children if given.
    ///
    /// A stale `parent` is ignored and the node starts as a root.
    pub fn insert_text(&mut self, parent: Option<ArenaId>, text: impl Into<String>) -> ArenaId {
        let text = text.into();
        let parent = parent.filter(|&p| self.is_alive(p));
        let id = self.alloc(|generation| Node::text(generation, text));
        if let Some(p) = parent {
            self.link_parent(id, p);
        }
        id
    }

    fn alloc(&mut self, make: impl FnOnce(u32) -> Node) -> ArenaId {
        if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.nodes[idx] = Some(make(generation));
            #[allow(
                clippy::cast_possible_truncation,
                reason = "ArenaId uses 32-bit indices by design."
            )]
            ArenaId::new(idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.nodes.push(Some(make(generation)));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "ArenaId uses 32-bit indices by design."
            )]
            ArenaId::new((self.nodes.len() - 1) as u32, generation)
        }
    }

    /// Remove a node and its whole subtree, recycling their slots.
    ///
    /// Identifiers into the removed subtree become stale immediately.
    /// Removing a stale identifier is a no-op.
    pub fn remove(&mut self, id: ArenaId) {
        if !self.is_alive(id) {
            return;
        }
        if let Some(parent) = self.node(id).parent {
            self.unlink_parent(id, parent);
        }
        let children = self.node(id).children.clone();
        for child in children {
            self.remove(child);
        }
        self.nodes[id.idx()] = None;
        self.free_list.push(id.idx());
    }

    /// Append `child` as the last child of `parent`, detaching it from its
    /// current parent first.
    ///
    /// Attaching a node to itself or to one of its own descendants is
    /// ignored, as is any call involving a stale identifier.
    pub fn append_child(&mut self, parent: ArenaId, child: ArenaId) {
        let index = self.children(parent).len();
        self.insert_child(parent, index, child);
    }

    /// Insert `child` at `index` among `parent`'s children, detaching it from
    /// its current parent first. An out-of-range `index` appends.
    ///
    /// Attaching a node to itself or to one of its own descendants is
    /// ignored, as is any call involving a stale identifier.
    pub fn insert_child(&mut self, parent: ArenaId, index: usize, child: ArenaId) {
        if !self.is_alive(parent) || !self.is_alive(child) {
            return;
        }
        if parent == child || self.has_ancestor(parent, child) {
            return;
        }
        if let Some(old) = self.node(child).parent {
            self.unlink_parent(child, old);
        }
        let siblings = &mut self.node_mut(parent).children;
        let index = index.min(siblings.len());
        siblings.insert(index, child);
        self.node_mut(child).parent = Some(parent);
    }

    /// Move the child at position `from` to position `to` within `parent`.
    ///
    /// Positions use splice semantics: the child is taken out first and `to`
    /// addresses the remaining list, clamped to its end. Out-of-range `from`
    /// and stale identifiers are no-ops.
    pub fn move_child(&mut self, parent: ArenaId, from: usize, to: usize) {
        if !self.is_alive(parent) {
            return;
        }
        let siblings = &mut self.node_mut(parent).children;
        if from >= siblings.len() {
            return;
        }
        let child = siblings.remove(from);
        let to = to.min(siblings.len());
        siblings.insert(to, child);
    }

    /// Replace a node's content with a single text run.
    ///
    /// On an element this removes all existing children and appends one text
    /// node, so identifiers into the old subtree go stale. On a text node
    /// the run is replaced in place.
    pub fn set_text(&mut self, id: ArenaId, text: impl Into<String>) {
        if !self.is_alive(id) {
            return;
        }
        if self.node(id).tag == Self::TEXT_TAG {
            self.node_mut(id).text = Some(text.into());
            return;
        }
        let children = self.node(id).children.clone();
        for child in children {
            self.remove(child);
        }
        self.insert_text(Some(id), text);
    }

    /// Set the element id of a node.
    pub fn set_element_id(&mut self, id: ArenaId, value: impl Into<String>) {
        if let Some(node) = self.node_opt_mut(id) {
            node.id = Some(value.into());
        }
    }

    /// Set an attribute, replacing any existing value under the same name.
    pub fn set_attr(&mut self, id: ArenaId, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(node) = self.node_opt_mut(id) {
            if let Some(slot) = node.attrs.iter_mut().find(|(n, _)| *n == name) {
                slot.1 = value;
            } else {
                node.attrs.push((name, value));
            }
        }
    }

    /// Add a class to a node; already-present classes are not duplicated.
    pub fn add_class(&mut self, id: ArenaId, class: impl Into<String>) {
        let class = class.into();
        if let Some(node) = self.node_opt_mut(id)
            && !node.classes.contains(&class)
        {
            node.classes.push(class);
        }
    }

    /// Remove a class from a node.
    pub fn remove_class(&mut self, id: ArenaId, class: &str) {
        if let Some(node) = self.node_opt_mut(id) {
            node.classes.retain(|c| c != class);
        }
    }

    /// Whether `id` refers to a live node of the current generation.
    pub fn is_alive(&self, id: ArenaId) -> bool {
        self.nodes
            .get(id.idx())
            .and_then(|slot| slot.as_ref())
            .map(|node| node.generation == id.1)
            .unwrap_or(false)
    }

    /// The tag of a live node ([`ArenaTree::TEXT_TAG`] for text nodes).
    pub fn tag(&self, id: ArenaId) -> Option<&str> {
        self.node_opt(id).map(|node| node.tag.as_str())
    }

    /// The element id of a live node, if one was set.
    pub fn element_id(&self, id: ArenaId) -> Option<&str> {
        self.node_opt(id).and_then(|node| node.id.as_deref())
    }

    /// The value of attribute `name` on a live node, if set.
    pub fn attr(&self, id: ArenaId, name: &str) -> Option<&str> {
        self.node_opt(id)?
            .attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Whether a live node carries the class `class`.
    pub fn has_class(&self, id: ArenaId, class: &str) -> bool {
        self.node_opt(id)
            .is_some_and(|node| node.classes.iter().any(|c| c == class))
    }

    /// The classes of a node, in the order they were added. Empty for stale
    /// identifiers.
    pub fn classes(&self, id: ArenaId) -> &[String] {
        self.node_opt(id)
            .map(|node| node.classes.as_slice())
            .unwrap_or(&[])
    }

    /// The children of a node, in order. Empty for stale identifiers.
    pub fn children(&self, id: ArenaId) -> &[ArenaId] {
        self.node_opt(id)
            .map(|node| node.children.as_slice())
            .unwrap_or(&[])
    }

    /// The parent of a live node, if it has one.
    pub fn parent(&self, id: ArenaId) -> Option<ArenaId> {
        self.node_opt(id).and_then(|node| node.parent)
    }

    /// The concatenated text of a node's subtree, in document order.
    ///
    /// Stale identifiers yield an empty string.
    pub fn text_content(&self, id: ArenaId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    /// Number of live nodes in the arena.
    pub fn node_count(&self) -> usize {
        self.nodes.iter().filter(|slot| slot.is_some()).count()
    }

    fn collect_text(&self, id: ArenaId, out: &mut String) {
        let Some(node) = self.node_opt(id) else {
            return;
        };
        if let Some(text) = &node.text {
            out.push_str(text);
        }
        for &child in &node.children {
            self.collect_text(child, out);
        }
    }

    /// Whether `candidate` appears on the parent chain above `node`.
    fn has_ancestor(&self, mut node: ArenaId, candidate: ArenaId) -> bool {
        while let Some(parent) = self.parent(node) {
            if parent == candidate {
                return true;
            }
            node = parent;
        }
        false
    }

    fn node_opt(&self, id: ArenaId) -> Option<&Node> {
        self.nodes
            .get(id.idx())
            .and_then(|slot| slot.as_ref())
            .filter(|node| node.generation == id.1)
    }

    fn node_opt_mut(&mut self, id: ArenaId) -> Option<&mut Node> {
        self.nodes
            .get_mut(id.idx())
            .and_then(|slot| slot.as_mut())
            .filter(|node| node.generation == id.1)
    }

    /// Access a live node; panics if `id` is stale.
    fn node(&self, id: ArenaId) -> &Node {
        self.nodes[id.idx()].as_ref().expect("dangling ArenaId")
    }

    /// Access a live node mutably; panics if `id` is stale.
    fn node_mut(&mut self, id: ArenaId) -> &mut Node {
        self.nodes[id.idx()].as_mut().expect("dangling ArenaId")
    }

    fn link_parent(&mut self, id: ArenaId, parent: ArenaId) {
        self.node_mut(parent).children.push(id);
        self.node_mut(id).parent = Some(parent);
    }

    fn unlink_parent(&mut self, id: ArenaId, parent: ArenaId) {
        self.node_mut(parent).children.retain(|c| *c != id);
        self.node_mut(id).parent = None;
    }

    fn build_under(
        &mut self,
        parent: Option<ArenaId>,
        decl: &Decl,
        slots: &mut SlotTable<ArenaId>,
    ) -> ArenaId {
        let id = self.insert_element(parent, decl.tag.as_str());
        if let Some(element_id) = &decl.id {
            self.set_element_id(id, element_id.as_str());
        }
        for class in &decl.classes {
            self.add_class(id, class.as_str());
        }
        for (name, value) in &decl.attrs {
            self.set_attr(id, name.as_str(), value.as_str());
        }
        if let Some(key) = decl.slot {
            slots.insert(key, id);
        }
        for child in &decl.children {
            match child {
                Child::Text(text) => {
                    self.insert_text(Some(id), text.as_str());
                }
                Child::Node(child_decl) => {
                    self.build_under(Some(id), child_decl, slots);
                }
            }
        }
        id
    }
}

impl Construct for ArenaTree {
    type Node = ArenaId;

    fn build(&mut self, decl: &Decl, slots: &mut SlotTable<ArenaId>) -> ArenaId {
        self.build_under(None, decl, slots)
    }
}
