//! panzoom binding

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::errors::{Result, SkillTreeError};
use crate::models::PanZoomOptions;
use crate::renderers::PanZoom;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = panzoom, catch)]
    fn panzoom(element: &Element, options: &JsValue) -> std::result::Result<JsValue, JsValue>;
}

/// Attaches the global `panzoom` helper
#[derive(Clone, Copy, Debug, Default)]
pub struct PanzoomHelper;

impl PanZoom<Element> for PanzoomHelper {
    fn attach(&self, element: &Element, options: &PanZoomOptions) -> Result<()> {
        let options = serde_wasm_bindgen::to_value(options)
            .map_err(|e| SkillTreeError::PanZoom(e.to_string()))?;

        panzoom(element, &options)
            .map(|_| ())
            .map_err(|e| SkillTreeError::PanZoom(SkillTreeError::describe_js(&e)))
    }
}
