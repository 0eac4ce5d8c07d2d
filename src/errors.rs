//! Error types for skill tree rendering
//!
//! Each variant corresponds to a place where a render can fail: fetching the
//! source, the rendering engine, locating the container, or attaching
//! pan/zoom. None of them are recovered from inside the crate; they are handed
//! back to the caller (and, from the JS API, become promise rejections).

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Top-level error for skill tree operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkillTreeError {
    /// The DOT source could not be retrieved
    #[error("failed to fetch skill tree source: {0}")]
    Fetch(String),

    /// The rendering engine rejected the DOT text
    #[error("failed to render DOT text: {0}")]
    Render(String),

    /// No element with the given id exists in the page
    #[error("no container element with id '{0}'")]
    MissingContainer(String),

    /// The rendered SVG has no child element to attach pan/zoom to
    #[error("rendered SVG has no child element")]
    EmptyRendering,

    /// No window/document is available (not running in a page)
    #[error("no document available")]
    NoDocument,

    /// A DOM mutation was refused by the page
    #[error("DOM operation failed: {0}")]
    Dom(String),

    /// The pan/zoom helper threw while attaching
    #[error("failed to attach pan/zoom: {0}")]
    PanZoom(String),

    /// A skill tree descriptor did not have the expected `{id, value}` shape
    #[error("invalid skill tree descriptor: {0}")]
    InvalidDescriptor(String),
}

pub type Result<T> = std::result::Result<T, SkillTreeError>;

impl SkillTreeError {
    /// Build an error message from a thrown JS value.
    ///
    /// Prefers the `message` of a JS `Error`, then a plain string, then the
    /// debug representation.
    pub fn describe_js(value: &JsValue) -> String {
        if let Some(message) = js_error_message(value) {
            return message;
        }
        value.as_string().unwrap_or_else(|| format!("{:?}", value))
    }
}

fn js_error_message(value: &JsValue) -> Option<String> {
    use wasm_bindgen::JsCast;

    value
        .dyn_ref::<js_sys::Error>()
        .map(|error| String::from(error.message()))
}

impl From<SkillTreeError> for JsValue {
    fn from(error: SkillTreeError) -> Self {
        js_sys::Error::new(&error.to_string()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_container_message_names_id() {
        let err = SkillTreeError::MissingContainer("tree1".to_string());
        assert_eq!(err.to_string(), "no container element with id 'tree1'");
    }

    #[test]
    fn test_render_message_keeps_engine_text() {
        let err = SkillTreeError::Render("syntax error in line 1".to_string());
        assert!(err.to_string().ends_with("syntax error in line 1"));
    }
}
