//! Viz.js binding
//!
//! Expects the Viz.js 2.x API: `new Viz().renderSVGElement(text)` returning a
//! promise of an `SVGSVGElement`.

use futures::future::LocalBoxFuture;
use futures::FutureExt;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Element;

use crate::errors::{Result, SkillTreeError};
use crate::renderers::RenderEngine;

#[wasm_bindgen]
extern "C" {
    type Viz;

    #[wasm_bindgen(constructor, catch)]
    fn new() -> std::result::Result<Viz, JsValue>;

    #[wasm_bindgen(method, js_name = renderSVGElement, catch)]
    fn render_svg_element(this: &Viz, src: &str) -> std::result::Result<js_sys::Promise, JsValue>;
}

/// Renders DOT text with a fresh `Viz` instance per call
#[derive(Clone, Copy, Debug, Default)]
pub struct VizEngine;

impl RenderEngine<Element> for VizEngine {
    fn render_svg_element(&self, dot_text: &str) -> LocalBoxFuture<'static, Result<Element>> {
        let promise = Viz::new().and_then(|viz| viz.render_svg_element(dot_text));

        async move {
            let promise = promise.map_err(render_error)?;
            let rendered = JsFuture::from(promise).await.map_err(render_error)?;
            rendered.dyn_into::<Element>().map_err(|value| {
                SkillTreeError::Render(format!("engine returned a non-element: {:?}", value))
            })
        }
        .boxed_local()
    }
}

fn render_error(value: JsValue) -> SkillTreeError {
    SkillTreeError::Render(SkillTreeError::describe_js(&value))
}
