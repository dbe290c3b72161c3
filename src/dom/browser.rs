//! web-sys implementation of the DOM seam.
//!
//! Class-list and child mutations on elements we already hold cannot
//! meaningfully fail, so their `Result`s are discarded the same way the
//! browser itself ignores them.

use web_sys::{Document, Element};

use crate::error::RenderError;
use crate::render::Region;

use super::Dom;

/// The live browser document.
pub struct BrowserDom {
    document: Document,
}

impl BrowserDom {
    /// Attach to the page's document. `None` outside a browser context.
    pub fn attach() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self { document })
    }
}

impl Dom for BrowserDom {
    type Node = Element;

    fn anchor(&self, region: Region) -> Result<Element, RenderError> {
        self.document
            .get_element_by_id(region.anchor_id())
            .ok_or(RenderError::MissingAnchor { region })
    }

    fn set_text(&self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn set_attribute(&self, node: &Element, name: &str, value: &str) {
        // Attribute names are fixed at the call sites and always valid.
        let _ = node.set_attribute(name, value);
    }

    fn add_class(&self, node: &Element, class: &str) {
        let _ = node.class_list().add_1(class);
    }

    fn remove_class(&self, node: &Element, class: &str) {
        let _ = node.class_list().remove_1(class);
    }

    fn clear_children(&self, node: &Element) {
        while let Some(child) = node.first_child() {
            let _ = node.remove_child(&child);
        }
    }

    fn append_element(&self, parent: &Element, tag: &str, classes: &[&str], text: &str) -> Element {
        let element = self
            .document
            .create_element(tag)
            .expect("create_element with a fixed tag name");
        for class in classes {
            let _ = element.class_list().add_1(class);
        }
        if !text.is_empty() {
            element.set_text_content(Some(text));
        }
        let _ = parent.append_child(&element);
        element
    }

    fn elements_with_class(&self, class: &str) -> Vec<Element> {
        let found = self.document.get_elements_by_class_name(class);
        // get_elements_by_class_name returns a live collection; snapshot it
        // before the caller starts swapping classes.
        (0..found.length()).filter_map(|i| found.item(i)).collect()
    }
}
