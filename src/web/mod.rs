//! Browser implementations of the rendering seams
//!
//! `BrowserPage` wraps the web-sys `Document`, `VizEngine` and
//! `PanzoomHelper` bind the Viz.js and panzoom globals, and `WindowFetcher`
//! uses `window.fetch`. The two libraries must be loaded on the page before
//! any render runs.

pub mod fetch;
pub mod page;
pub mod panzoom;
pub mod viz;

pub use fetch::WindowFetcher;
pub use page::BrowserPage;
pub use panzoom::PanzoomHelper;
pub use viz::VizEngine;

use crate::errors::Result;
use crate::renderers::SkillTreeRenderer;

/// Renderer wired to the live page
pub type BrowserRenderer = SkillTreeRenderer<BrowserPage, VizEngine, PanzoomHelper>;

/// Build a renderer for the current window's document
pub fn browser_renderer() -> Result<BrowserRenderer> {
    let page = BrowserPage::from_window()?;
    Ok(SkillTreeRenderer::new(page, VizEngine, PanzoomHelper))
}
