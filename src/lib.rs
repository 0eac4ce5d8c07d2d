//! Skill Tree WASM Module
//!
//! Renders Graphviz DOT skill trees as pannable, zoomable SVG inside a web
//! page. Layout and drawing are done by Viz.js and interaction by panzoom;
//! this crate wires the two into the page.

pub mod api;
pub mod errors;
pub mod models;
pub mod renderers;
pub mod web;

// Re-export commonly used types
pub use errors::{Result, SkillTreeError};
pub use models::*;
pub use renderers::{Page, PanZoom, RenderEngine, RenderTask, SkillTreeRenderer, SourceFetcher};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    #[cfg(feature = "console_log")]
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("Skill tree WASM module initialized");
}
