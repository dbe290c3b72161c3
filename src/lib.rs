//! Persona View - browser profile page client
//!
//! Renders a single-page user persona profile from a static JSON document
//! into a fixed set of DOM anchor elements, with a light/dark theme toggle.
//!
//! This library provides:
//! - Profile document model and JSON decoding
//! - Light/dark theme state machine and style-token tables
//! - Anchor-based field renderers and the full-page render pass
//! - A DOM seam with browser (web-sys) and in-memory backends
//! - WASM entry point that fetches `db.json` and wires the toggle button

#[cfg(target_arch = "wasm32")]
pub mod app;
pub mod dom;
pub mod error;
pub mod loader;
pub mod profile;
pub mod render;
pub mod state;
pub mod theme;
