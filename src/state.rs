//! Page-lifetime view state.
//!
//! One owned record holding the fetched document and the active theme mode,
//! passed by reference to the render functions. Created at startup with the
//! document absent; populated once by the fetch continuation; mutated
//! otherwise only by the theme toggle.

use crate::profile::ProfileDocument;
use crate::theme::ThemeMode;

/// The single view-state record.
#[derive(Clone, Debug, Default)]
pub struct ViewState {
    document: Option<ProfileDocument>,
    mode: ThemeMode,
}

impl ViewState {
    /// Fresh state: no document, light mode.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn document(&self) -> Option<&ProfileDocument> {
        self.document.as_ref()
    }

    /// Store the fetched document. Called once, by the fetch continuation.
    pub fn set_document(&mut self, document: ProfileDocument) {
        self.document = Some(document);
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Flip the theme mode, returning the mode just entered.
    pub fn toggle_theme(&mut self) -> ThemeMode {
        self.mode = self.mode.toggled();
        self.mode
    }
}
