//! In-memory DOM backend for native builds and tests.
//!
//! Models just enough of a document for the render pass: a forest of
//! elements with tag, id, class list, text, attributes, and children.
//! Mirrors the browser backend's observable behavior (`textContent`
//! semantics, snapshot class queries) so assertions made against it
//! transfer to the real document.

use std::cell::RefCell;

use crate::error::RenderError;
use crate::render::Region;

use super::Dom;

/// Handle to an element in a [`MemoryDom`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeId(usize);

#[derive(Debug, Default)]
struct NodeData {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    text: String,
    attributes: Vec<(String, String)>,
    children: Vec<usize>,
}

/// A self-contained fake document.
///
/// Detached nodes (after `clear_children`) stay in the arena but are
/// invisible to `anchor` and `elements_with_class`, matching how a browser
/// only queries attached elements.
#[derive(Default)]
pub struct MemoryDom {
    nodes: RefCell<Vec<NodeData>>,
    roots: RefCell<Vec<usize>>,
}

impl MemoryDom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a top-level element, returning its handle.
    pub fn insert_root(&self, tag: &str, id: Option<&str>, classes: &[&str]) -> NodeId {
        let index = {
            let mut nodes = self.nodes.borrow_mut();
            nodes.push(NodeData {
                tag: tag.to_owned(),
                id: id.map(str::to_owned),
                classes: classes.iter().map(|c| (*c).to_owned()).collect(),
                ..NodeData::default()
            });
            nodes.len() - 1
        };
        self.roots.borrow_mut().push(index);
        NodeId(index)
    }

    // =========================================================================
    // Inspection helpers for tests
    // =========================================================================

    pub fn tag_of(&self, node: NodeId) -> String {
        self.nodes.borrow()[node.0].tag.clone()
    }

    pub fn text_of(&self, node: NodeId) -> String {
        self.nodes.borrow()[node.0].text.clone()
    }

    pub fn classes_of(&self, node: NodeId) -> Vec<String> {
        self.nodes.borrow()[node.0].classes.clone()
    }

    pub fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        self.nodes.borrow()[node.0]
            .attributes
            .iter()
            .find(|(attr, _)| attr == name)
            .map(|(_, value)| value.clone())
    }

    pub fn children_of(&self, node: NodeId) -> Vec<NodeId> {
        self.nodes.borrow()[node.0]
            .children
            .iter()
            .map(|&index| NodeId(index))
            .collect()
    }

    pub fn child_count(&self, node: NodeId) -> usize {
        self.nodes.borrow()[node.0].children.len()
    }

    /// Every attached element, in document order.
    pub fn attached_nodes(&self) -> Vec<NodeId> {
        self.attached().into_iter().map(NodeId).collect()
    }

    /// Depth-first walk of the attached forest.
    fn attached(&self) -> Vec<usize> {
        let nodes = self.nodes.borrow();
        let mut order = Vec::new();
        let mut stack: Vec<usize> = self.roots.borrow().iter().rev().copied().collect();
        while let Some(index) = stack.pop() {
            order.push(index);
            for &child in nodes[index].children.iter().rev() {
                stack.push(child);
            }
        }
        order
    }
}

impl Dom for MemoryDom {
    type Node = NodeId;

    fn anchor(&self, region: Region) -> Result<NodeId, RenderError> {
        let wanted = region.anchor_id();
        let attached = self.attached();
        let nodes = self.nodes.borrow();
        attached
            .into_iter()
            .find(|&index| nodes[index].id.as_deref() == Some(wanted))
            .map(NodeId)
            .ok_or(RenderError::MissingAnchor { region })
    }

    fn set_text(&self, node: &NodeId, text: &str) {
        let mut nodes = self.nodes.borrow_mut();
        let data = &mut nodes[node.0];
        data.text = text.to_owned();
        data.children.clear();
    }

    fn set_attribute(&self, node: &NodeId, name: &str, value: &str) {
        let mut nodes = self.nodes.borrow_mut();
        let attributes = &mut nodes[node.0].attributes;
        if let Some(existing) = attributes.iter_mut().find(|(attr, _)| attr == name) {
            existing.1 = value.to_owned();
        } else {
            attributes.push((name.to_owned(), value.to_owned()));
        }
    }

    fn add_class(&self, node: &NodeId, class: &str) {
        let mut nodes = self.nodes.borrow_mut();
        let classes = &mut nodes[node.0].classes;
        if !classes.iter().any(|existing| existing == class) {
            classes.push(class.to_owned());
        }
    }

    fn remove_class(&self, node: &NodeId, class: &str) {
        let mut nodes = self.nodes.borrow_mut();
        nodes[node.0].classes.retain(|existing| existing != class);
    }

    fn clear_children(&self, node: &NodeId) {
        self.nodes.borrow_mut()[node.0].children.clear();
    }

    fn append_element(&self, parent: &NodeId, tag: &str, classes: &[&str], text: &str) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(NodeData {
            tag: tag.to_owned(),
            classes: classes.iter().map(|c| (*c).to_owned()).collect(),
            text: text.to_owned(),
            ..NodeData::default()
        });
        let index = nodes.len() - 1;
        nodes[parent.0].children.push(index);
        NodeId(index)
    }

    fn elements_with_class(&self, class: &str) -> Vec<NodeId> {
        let attached = self.attached();
        let nodes = self.nodes.borrow();
        attached
            .into_iter()
            .filter(|&index| nodes[index].classes.iter().any(|existing| existing == class))
            .map(NodeId)
            .collect()
    }
}
