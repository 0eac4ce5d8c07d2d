//! Skill tree rendering: file loader and inline renderer

use std::rc::Rc;

use futures::future::LocalBoxFuture;
use futures::FutureExt;

use crate::errors::{Result, SkillTreeError};
use crate::models::PanZoomOptions;

use super::{Page, PanZoom, RenderEngine, SourceFetcher};

/// Renders skill trees into a page.
///
/// Holds the page, the rendering engine and the pan/zoom helper behind `Rc`
/// so issued renders can finish after the call that started them returns.
pub struct SkillTreeRenderer<P, R, Z> {
    page: Rc<P>,
    engine: Rc<R>,
    panzoom: Rc<Z>,
}

impl<P, R, Z> Clone for SkillTreeRenderer<P, R, Z> {
    fn clone(&self) -> Self {
        Self {
            page: Rc::clone(&self.page),
            engine: Rc::clone(&self.engine),
            panzoom: Rc::clone(&self.panzoom),
        }
    }
}

impl<P, R, Z> SkillTreeRenderer<P, R, Z>
where
    P: Page + 'static,
    P::Element: 'static,
    R: RenderEngine<P::Element>,
    Z: PanZoom<P::Element> + 'static,
{
    pub fn new(page: P, engine: R, panzoom: Z) -> Self {
        Self::from_shared(Rc::new(page), Rc::new(engine), Rc::new(panzoom))
    }

    pub fn from_shared(page: Rc<P>, engine: Rc<R>, panzoom: Rc<Z>) -> Self {
        Self {
            page,
            engine,
            panzoom,
        }
    }

    /// Fetch the DOT file at `path` and append its rendering to the body.
    ///
    /// No pan/zoom is attached; the loaded graph is displayed as rendered.
    /// Calling this twice with the same path appends two renderings.
    pub async fn load_skill_tree<F: SourceFetcher>(&self, fetcher: &F, path: &str) -> Result<()> {
        log::debug!("Fetching skill tree source '{}'", path);
        let text = fetcher.fetch_text(path).await?;

        let svg = self.engine.render_svg_element(&text).await?;
        let body = self.page.body()?;
        self.page.append_child(&body, &svg)?;

        log::debug!("Appended skill tree rendering to document body");
        Ok(())
    }

    /// Render `dot_text` into the element with id `container_id` and make it
    /// pannable/zoomable.
    pub async fn convert_div_to_skill_tree(&self, container_id: &str, dot_text: &str) -> Result<()> {
        self.issue_inline_render(container_id, dot_text).await
    }

    /// Start rendering `dot_text` now and return the rest of the inline
    /// render (lookup, append, attach) as a future.
    ///
    /// Order is render, lookup, append, attach. A missing container fails
    /// before anything is appended, so the rendered SVG is simply dropped.
    /// Pan/zoom goes on the first child of the SVG, never the SVG root.
    pub fn issue_inline_render(&self, container_id: &str, dot_text: &str) -> LocalBoxFuture<'static, Result<()>> {
        let rendering = self.engine.render_svg_element(dot_text);
        let page = Rc::clone(&self.page);
        let panzoom = Rc::clone(&self.panzoom);
        let container_id = container_id.to_string();

        async move {
            let svg = rendering.await?;

            let parent = page
                .element_by_id(&container_id)
                .ok_or_else(|| SkillTreeError::MissingContainer(container_id.clone()))?;
            page.append_child(&parent, &svg)?;

            let graph = page
                .first_element_child(&svg)
                .ok_or(SkillTreeError::EmptyRendering)?;
            panzoom.attach(&graph, &PanZoomOptions::SKILL_TREE)?;

            log::debug!("Rendered skill tree into '{}'", container_id);
            Ok(())
        }
        .boxed_local()
    }
}
