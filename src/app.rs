//! Browser entry point.
//!
//! Boots the page: initializes console logging, enters the initial light
//! theme state, wires the theme-toggle button, then fetches the profile
//! document and renders. Everything here is wasm32-only; the render core it
//! drives is target-neutral.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::dom::{BrowserDom, Dom};
use crate::loader;
use crate::render::{self, Region};
use crate::state::ViewState;

type SharedState = Rc<RefCell<ViewState>>;
type ToggleHandler = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Page entry point, invoked by the WASM loader.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    match BrowserDom::attach() {
        Some(dom) => boot(dom),
        None => log::error!("no browser document available, cannot boot"),
    }
}

fn boot(dom: BrowserDom) {
    log::info!("persona-view v{} starting", env!("CARGO_PKG_VERSION"));

    let dom = Rc::new(dom);
    let state: SharedState = Rc::new(RefCell::new(ViewState::new()));

    // Enter the initial (light) state: structural classes and button label
    // sync immediately; data regions wait for the fetch.
    let handler: ToggleHandler = Rc::new(RefCell::new(None));
    install_toggle_handler(&dom, &state, &handler);
    if let Err(e) = render::sync_theme(dom.as_ref(), state.borrow().mode()) {
        log::error!("initial theme sync failed: {e}");
    }
    bind_toggle(&dom, &handler);

    // Single fetch, no retry: the page stays in its pre-render state if
    // this fails.
    wasm_bindgen_futures::spawn_local(async move {
        match loader::fetch_document(loader::DOCUMENT_PATH).await {
            Ok(document) => {
                log::info!(
                    "profile document loaded for {}",
                    document.profile.full_name()
                );
                state.borrow_mut().set_document(document);
                if let Err(e) = render::render_all(&state.borrow(), dom.as_ref()) {
                    log::error!("render pass failed: {e}");
                }
                bind_toggle(&dom, &handler);
            }
            Err(e) => log::error!("failed to load profile document: {e}"),
        }
    });
}

/// Build the toggle click closure once and stash it in `handler`.
fn install_toggle_handler(dom: &Rc<BrowserDom>, state: &SharedState, handler: &ToggleHandler) {
    let dom = Rc::clone(dom);
    let state = Rc::clone(state);
    let slot = Rc::clone(handler);
    let closure = Closure::<dyn FnMut()>::new(move || {
        let mode = state.borrow_mut().toggle_theme();
        log::debug!("theme toggled to {}", mode.as_str());
        if let Err(e) = render::render_all(&state.borrow(), dom.as_ref()) {
            log::error!("render pass failed: {e}");
        }
        // Re-bind after every sync so the handler follows the button even
        // if the host page replaces the element between passes.
        bind_toggle(&dom, &slot);
    });
    *handler.borrow_mut() = Some(closure);
}

/// Assign the stored closure to the toggle button's `onclick` slot.
/// Assignment replaces any previous handler, so repeated binds never stack.
fn bind_toggle(dom: &Rc<BrowserDom>, handler: &ToggleHandler) {
    let button = match dom.anchor(Region::ThemeToggle) {
        Ok(button) => button,
        Err(e) => {
            log::warn!("{e}, toggle disabled");
            return;
        }
    };
    if let (Some(button), Some(closure)) = (
        button.dyn_ref::<HtmlElement>(),
        handler.borrow().as_ref(),
    ) {
        button.set_onclick(Some(closure.as_ref().unchecked_ref()));
    }
}
