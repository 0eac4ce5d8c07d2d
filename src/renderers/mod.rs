//! Renderers module for skill trees
//!
//! The rendering logic is written against four small seams so it does not
//! care whether it runs in a browser or against an in-memory page:
//!
//! - [`Page`]: element lookup and mutation
//! - [`RenderEngine`]: DOT text to SVG element
//! - [`PanZoom`]: attach pan/zoom interaction to an element
//! - [`SourceFetcher`]: retrieve DOT text from a path or URL
//!
//! Browser implementations live in [`crate::web`].

pub mod batch;
pub mod skill_tree;

pub use batch::RenderTask;
pub use skill_tree::SkillTreeRenderer;

use futures::future::LocalBoxFuture;

use crate::errors::Result;
use crate::models::PanZoomOptions;

/// The page a skill tree is rendered into
pub trait Page {
    /// Handle to an element of the page
    type Element: Clone;

    /// The document body
    fn body(&self) -> Result<Self::Element>;

    /// First element carrying `id`, if any
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// Append `child` as the last child of `parent`
    fn append_child(&self, parent: &Self::Element, child: &Self::Element) -> Result<()>;

    /// First element child of `element`, if any
    fn first_element_child(&self, element: &Self::Element) -> Option<Self::Element>;
}

/// Converts DOT text into a detached SVG element
pub trait RenderEngine<E> {
    /// Start rendering `dot_text`.
    ///
    /// The returned future owns everything it needs, so rendering is already
    /// under way when this returns and the future may outlive `self`.
    fn render_svg_element(&self, dot_text: &str) -> LocalBoxFuture<'static, Result<E>>;
}

/// Adds pan/zoom interaction to an element
pub trait PanZoom<E> {
    fn attach(&self, element: &E, options: &PanZoomOptions) -> Result<()>;
}

/// Retrieves the text behind a path or URL
pub trait SourceFetcher {
    fn fetch_text(&self, path: &str) -> LocalBoxFuture<'static, Result<String>>;
}
