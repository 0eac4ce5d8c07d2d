//! DOM access through web-sys

use web_sys::{Document, Element};

use crate::errors::{Result, SkillTreeError};
use crate::renderers::Page;

/// The live document
#[derive(Clone, Debug)]
pub struct BrowserPage {
    document: Document,
}

impl BrowserPage {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    pub fn from_window() -> Result<Self> {
        web_sys::window()
            .and_then(|window| window.document())
            .map(Self::new)
            .ok_or(SkillTreeError::NoDocument)
    }
}

impl Page for BrowserPage {
    type Element = Element;

    fn body(&self) -> Result<Element> {
        self.document
            .body()
            .map(Element::from)
            .ok_or(SkillTreeError::NoDocument)
    }

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn append_child(&self, parent: &Element, child: &Element) -> Result<()> {
        parent
            .append_child(child)
            .map(|_| ())
            .map_err(|e| SkillTreeError::Dom(SkillTreeError::describe_js(&e)))
    }

    fn first_element_child(&self, element: &Element) -> Option<Element> {
        element.first_element_child()
    }
}
