//! Skill tree entry points exported to JavaScript
//!
//! Each function returns promises instead of swallowing failures. A page
//! that ignores them gets the browser's usual unhandled-rejection report.

use js_sys::{Array, Promise};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::future_to_promise;

use crate::errors::SkillTreeError;
use crate::models::{DotText, SkillTreeDescriptor};
use crate::web::{browser_renderer, WindowFetcher};
use crate::{wasm_error, wasm_info, wasm_log, wasm_warn};

use super::helpers::{deserialize, rejection};

/// Fetch the DOT file at `path` and append its rendering to `document.body`.
///
/// # Returns
/// A promise that resolves once the SVG is appended, or rejects with the
/// fetch or render error.
#[wasm_bindgen(js_name = loadSkillTree)]
pub fn load_skill_tree(path: String) -> Promise {
    wasm_info!("loadSkillTree called: path='{}'", path);

    future_to_promise(async move {
        let renderer = browser_renderer().map_err(rejection)?;
        let fetcher = WindowFetcher::from_window().map_err(rejection)?;
        renderer
            .load_skill_tree(&fetcher, &path)
            .await
            .map_err(rejection)?;
        Ok(JsValue::UNDEFINED)
    })
}

/// Render a skill tree into the element with id `div_id`.
///
/// # Parameters
/// - `div_id`: id of the container element
/// - `value`: object of the form `{ dot_text: string }`
///
/// # Returns
/// A promise that resolves once the SVG is appended and pan/zoom attached.
/// Rendering has started when this returns.
#[wasm_bindgen(js_name = convertDivToSkillTree)]
pub fn convert_div_to_skill_tree(div_id: String, value: JsValue) -> Promise {
    wasm_info!("convertDivToSkillTree called: id='{}'", div_id);

    let issued = deserialize::<DotText>(value, "skill tree value").and_then(|dot| {
        let renderer = browser_renderer()?;
        Ok(renderer.issue_inline_render(&div_id, dot.as_str()))
    });

    match issued {
        Ok(render) => future_to_promise(async move {
            render.await.map_err(rejection)?;
            Ok(JsValue::UNDEFINED)
        }),
        Err(err) => Promise::reject(&rejection(err)),
    }
}

/// Render every skill tree in `descriptors`.
///
/// # Parameters
/// - `descriptors`: array of `{ id: string, value: { dot_text: string } }`
///
/// # Returns
/// An array with one promise per entry, in input order. Every render has been
/// handed to the engine before this returns; the promises may settle in any
/// order. An entry without the expected shape only rejects its own promise.
#[wasm_bindgen(js_name = renderSkillTrees)]
pub fn render_skill_trees(descriptors: JsValue) -> Result<Array, JsValue> {
    let entries: Array = descriptors.dyn_into().map_err(|value| {
        wasm_error!("renderSkillTrees expects an array, got {:?}", value);
        rejection(SkillTreeError::InvalidDescriptor(
            "skill tree list is not an array".to_string(),
        ))
    })?;
    wasm_info!("renderSkillTrees called: {} tree(s)", entries.length());
    if entries.length() == 0 {
        wasm_warn!("renderSkillTrees called with no skill trees");
    }

    let renderer = browser_renderer().map_err(rejection)?;
    let tasks = renderer.issue_entries(
        entries
            .iter()
            .map(|entry| deserialize::<SkillTreeDescriptor>(entry, "skill tree descriptor")),
    );

    let promises = Array::new();
    for task in tasks {
        wasm_log!("Render issued for {:?}", task.container_id());
        promises.push(&future_to_promise(async move {
            task.await.map_err(rejection)?;
            Ok(JsValue::UNDEFINED)
        }));
    }

    Ok(promises)
}
