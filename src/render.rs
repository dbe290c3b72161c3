//! Anchor-based field renderers and the full-page render pass.
//!
//! Each renderer owns one display region: it resolves the region's anchor
//! element, clears whatever the previous pass left there, and rebuilds the
//! content from the profile document and the active theme. A pass either
//! completes every region in the fixed order or stops at the first failure;
//! there is no partial recovery and no incremental diffing.

use std::fmt;

use crate::dom::Dom;
use crate::error::RenderError;
use crate::profile::{detail_label, Profile, ProfileDocument};
use crate::state::ViewState;
use crate::theme::{ThemeMode, STRUCTURAL_PAIRS};

/// Display regions of the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Region {
    ThemeToggle,
    FullName,
    Picture,
    Details,
    Quote,
    Bio,
    Personality,
    Frustrations,
    Needs,
}

impl Region {
    /// Fixed element id of the region's anchor in the host document.
    pub fn anchor_id(self) -> &'static str {
        match self {
            Region::ThemeToggle => "theme-toggle",
            Region::FullName => "profile-name",
            Region::Picture => "profile-picture",
            Region::Details => "user-details",
            Region::Quote => "profile-quote",
            Region::Bio => "profile-bio",
            Region::Personality => "personality-tags",
            Region::Frustrations => "frustrations-list",
            Region::Needs => "needs-list",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Region::ThemeToggle => "theme toggle",
            Region::FullName => "full name",
            Region::Picture => "picture",
            Region::Details => "user details",
            Region::Quote => "quote",
            Region::Bio => "bio",
            Region::Personality => "personality",
            Region::Frustrations => "frustrations",
            Region::Needs => "needs",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Presentational classes shared by every mode; their visuals live in the
// host stylesheet.
const DETAIL_ROW_CLASS: &str = "detail-row";
const PILL_CLASS: &str = "pill";
const LIST_ITEM_CLASS: &str = "list-item";

/// Synchronize the structural theme classes and the toggle button with
/// `mode`.
///
/// Every element currently carrying the inactive half of a structural pair
/// has it replaced by the active half, and the toggle button's label is set
/// to name the mode a click would enter.
pub fn sync_theme<D: Dom>(dom: &D, mode: ThemeMode) -> Result<(), RenderError> {
    for (light, dark) in STRUCTURAL_PAIRS {
        let (inactive, active) = match mode {
            ThemeMode::Light => (dark, light),
            ThemeMode::Dark => (light, dark),
        };
        for element in dom.elements_with_class(inactive) {
            dom.swap_class(&element, inactive, active);
        }
    }

    let button = dom.anchor(Region::ThemeToggle)?;
    dom.set_text(&button, mode.tokens().toggle_label);
    Ok(())
}

/// One full render pass over every region, in fixed order.
///
/// Requires the document to be present (renderers read `profile` fields and
/// must not run before the fetch resolves). The first failure aborts the
/// pass; regions later in the order are left untouched.
pub fn render_all<D: Dom>(state: &ViewState, dom: &D) -> Result<(), RenderError> {
    let document = state.document().ok_or(RenderError::DocumentAbsent)?;
    let mode = state.mode();

    sync_theme(dom, mode)?;
    render_full_name(dom, &document.profile, mode)?;
    render_picture(dom, &document.profile)?;
    render_details(dom, &document.profile, mode)?;
    render_quote(dom, document)?;
    render_bio(dom, document, mode)?;
    render_personality(dom, &document.personality, mode)?;
    render_string_list(dom, Region::Frustrations, &document.frustrations)?;
    render_string_list(dom, Region::Needs, &document.needs)?;

    log::debug!("render pass complete ({} mode)", mode.as_str());
    Ok(())
}

fn render_full_name<D: Dom>(
    dom: &D,
    profile: &Profile,
    mode: ThemeMode,
) -> Result<(), RenderError> {
    let anchor = dom.anchor(Region::FullName)?;
    dom.set_text(&anchor, &profile.full_name());
    dom.swap_class(&anchor, mode.toggled().tokens().heading, mode.tokens().heading);
    Ok(())
}

fn render_picture<D: Dom>(dom: &D, profile: &Profile) -> Result<(), RenderError> {
    let anchor = dom.anchor(Region::Picture)?;
    // The URL is applied verbatim; shape validation is not this layer's job.
    dom.set_attribute(&anchor, "src", &profile.picture_url);
    Ok(())
}

fn render_details<D: Dom>(dom: &D, profile: &Profile, mode: ThemeMode) -> Result<(), RenderError> {
    let anchor = dom.anchor(Region::Details)?;
    let tokens = mode.tokens();

    dom.clear_children(&anchor);
    for (key, value) in profile.detail_entries() {
        let Some(value) = value else { continue };
        let row = dom.append_element(&anchor, "div", &[DETAIL_ROW_CLASS], "");
        dom.append_element(&row, "span", &[tokens.detail_label], &detail_label(key));
        dom.append_element(&row, "span", &[tokens.detail_value], value);
    }
    Ok(())
}

fn render_quote<D: Dom>(dom: &D, document: &ProfileDocument) -> Result<(), RenderError> {
    let anchor = dom.anchor(Region::Quote)?;
    dom.set_text(&anchor, &document.quote);
    Ok(())
}

fn render_bio<D: Dom>(dom: &D, document: &ProfileDocument, mode: ThemeMode) -> Result<(), RenderError> {
    let anchor = dom.anchor(Region::Bio)?;
    dom.set_text(&anchor, &document.bio);
    dom.swap_class(&anchor, mode.toggled().tokens().bio, mode.tokens().bio);
    Ok(())
}

fn render_personality<D: Dom>(
    dom: &D,
    tags: &[String],
    mode: ThemeMode,
) -> Result<(), RenderError> {
    let anchor = dom.anchor(Region::Personality)?;
    let tokens = mode.tokens();

    dom.clear_children(&anchor);
    for tag in tags {
        dom.append_element(&anchor, "span", &[PILL_CLASS, tokens.pill], tag);
    }
    Ok(())
}

fn render_string_list<D: Dom>(
    dom: &D,
    region: Region,
    entries: &[String],
) -> Result<(), RenderError> {
    let anchor = dom.anchor(region)?;

    dom.clear_children(&anchor);
    for entry in entries {
        dom.append_element(&anchor, "li", &[LIST_ITEM_CLASS], entry);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::MemoryDom;

    #[test]
    fn test_anchor_ids_are_unique() {
        let regions = [
            Region::ThemeToggle,
            Region::FullName,
            Region::Picture,
            Region::Details,
            Region::Quote,
            Region::Bio,
            Region::Personality,
            Region::Frustrations,
            Region::Needs,
        ];
        for (i, a) in regions.iter().enumerate() {
            for b in &regions[i + 1..] {
                assert_ne!(a.anchor_id(), b.anchor_id());
            }
        }
    }

    #[test]
    fn test_sync_theme_swaps_structural_pairs() {
        let dom = MemoryDom::new();
        let card = dom.insert_root("div", None, &["box", "box-header"]);
        dom.insert_root("button", Some("theme-toggle"), &["primary"]);

        sync_theme(&dom, ThemeMode::Dark).unwrap();
        assert_eq!(dom.classes_of(card), vec!["box-dark", "box-header-dark"]);

        sync_theme(&dom, ThemeMode::Light).unwrap();
        assert_eq!(dom.classes_of(card), vec!["box", "box-header"]);
    }

    #[test]
    fn test_sync_theme_is_stable_under_repeated_calls() {
        let dom = MemoryDom::new();
        let card = dom.insert_root("div", None, &["box"]);
        dom.insert_root("button", Some("theme-toggle"), &["primary"]);

        sync_theme(&dom, ThemeMode::Dark).unwrap();
        sync_theme(&dom, ThemeMode::Dark).unwrap();
        assert_eq!(dom.classes_of(card), vec!["box-dark"]);
    }

    #[test]
    fn test_sync_theme_sets_button_label() {
        let dom = MemoryDom::new();
        let button = dom.insert_root("button", Some("theme-toggle"), &["primary"]);

        sync_theme(&dom, ThemeMode::Light).unwrap();
        assert_eq!(dom.text_of(button), "Enter Dark Mode");
        sync_theme(&dom, ThemeMode::Dark).unwrap();
        assert_eq!(dom.text_of(button), "Enter Light Mode");
        assert_eq!(dom.classes_of(button), vec!["primary-dark"]);
    }

    #[test]
    fn test_sync_theme_requires_the_toggle_button() {
        let dom = MemoryDom::new();
        assert_eq!(
            sync_theme(&dom, ThemeMode::Light),
            Err(RenderError::MissingAnchor {
                region: Region::ThemeToggle
            })
        );
    }

    #[test]
    fn test_render_all_requires_a_document() {
        let dom = MemoryDom::new();
        let state = ViewState::new();
        assert_eq!(render_all(&state, &dom), Err(RenderError::DocumentAbsent));
    }
}
