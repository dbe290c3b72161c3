//! DOM access seam.
//!
//! Renderers talk to the host document through the [`Dom`] trait so the same
//! render pass drives the real browser document on wasm32 and the in-memory
//! backend under test.

#[cfg(target_arch = "wasm32")]
pub mod browser;
#[cfg(not(target_arch = "wasm32"))]
pub mod memory;

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserDom;
#[cfg(not(target_arch = "wasm32"))]
pub use memory::MemoryDom;

use crate::error::RenderError;
use crate::render::Region;

/// Host-document operations the renderers need.
///
/// `set_text` follows browser `textContent` semantics: it replaces any
/// existing children of the element with the given text.
pub trait Dom {
    /// Handle to an element in the host document.
    type Node: Clone;

    /// Resolve a region's anchor element by its fixed id.
    fn anchor(&self, region: Region) -> Result<Self::Node, RenderError>;

    fn set_text(&self, node: &Self::Node, text: &str);

    fn set_attribute(&self, node: &Self::Node, name: &str, value: &str);

    fn add_class(&self, node: &Self::Node, class: &str);

    fn remove_class(&self, node: &Self::Node, class: &str);

    /// Replace `remove` with `add` on the node's class list. Swap, not
    /// additive: the inactive class is gone once the active one is applied.
    fn swap_class(&self, node: &Self::Node, remove: &str, add: &str) {
        self.remove_class(node, remove);
        self.add_class(node, add);
    }

    /// Remove every child of the node.
    fn clear_children(&self, node: &Self::Node);

    /// Create a `tag` element with the given classes and text and append it
    /// under `parent`.
    fn append_element(
        &self,
        parent: &Self::Node,
        tag: &str,
        classes: &[&str],
        text: &str,
    ) -> Self::Node;

    /// Snapshot of the elements currently carrying `class`, in document
    /// order. A snapshot, not a live collection, so callers may mutate
    /// class lists while iterating.
    fn elements_with_class(&self, class: &str) -> Vec<Self::Node>;
}
