//! Source retrieval with `window.fetch`

use futures::future::LocalBoxFuture;
use futures::FutureExt;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Response, Window};

use crate::errors::{Result, SkillTreeError};
use crate::renderers::SourceFetcher;

/// Fetches DOT text relative to the page's URL.
///
/// The HTTP status is not inspected: whatever body comes back is handed to
/// the rendering engine, which rejects it if it is not DOT.
#[derive(Clone, Debug)]
pub struct WindowFetcher {
    window: Window,
}

impl WindowFetcher {
    pub fn new(window: Window) -> Self {
        Self { window }
    }

    pub fn from_window() -> Result<Self> {
        web_sys::window()
            .map(Self::new)
            .ok_or(SkillTreeError::NoDocument)
    }
}

impl SourceFetcher for WindowFetcher {
    fn fetch_text(&self, path: &str) -> LocalBoxFuture<'static, Result<String>> {
        let request = self.window.fetch_with_str(path);

        async move {
            let response: Response = JsFuture::from(request)
                .await
                .map_err(fetch_error)?
                .dyn_into()
                .map_err(fetch_error)?;
            let text = JsFuture::from(response.text().map_err(fetch_error)?)
                .await
                .map_err(fetch_error)?;

            text.as_string()
                .ok_or_else(|| SkillTreeError::Fetch("response body is not text".to_string()))
        }
        .boxed_local()
    }
}

fn fetch_error(value: JsValue) -> SkillTreeError {
    SkillTreeError::Fetch(SkillTreeError::describe_js(&value))
}
