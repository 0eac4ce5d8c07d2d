//! In-memory doubles for the rendering seams
//!
//! `MemoryPage` is a minimal element tree; `StubEngine` "renders" DOT text
//! into an `<svg><g data-dot=...>` pair without laying anything out.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use futures::future::{self, LocalBoxFuture};
use futures::FutureExt;

use skill_tree_wasm::{Page, PanZoom, PanZoomOptions, RenderEngine, Result, SkillTreeError, SourceFetcher};

pub type NodeId = usize;

#[derive(Debug, Clone)]
pub struct Node {
    pub tag: String,
    pub id: Option<String>,
    pub attrs: HashMap<String, String>,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

/// Node 0 is always `<body>`
#[derive(Debug)]
pub struct MemoryPage {
    nodes: RefCell<Vec<Node>>,
}

pub const BODY: NodeId = 0;

impl MemoryPage {
    pub fn new() -> Rc<Self> {
        let body = Node {
            tag: "body".to_string(),
            id: None,
            attrs: HashMap::new(),
            parent: None,
            children: Vec::new(),
        };
        Rc::new(Self {
            nodes: RefCell::new(vec![body]),
        })
    }

    /// Create a detached element
    pub fn create(&self, tag: &str) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(Node {
            tag: tag.to_string(),
            id: None,
            attrs: HashMap::new(),
            parent: None,
            children: Vec::new(),
        });
        nodes.len() - 1
    }

    /// Create a `<div id=...>` attached to the body
    pub fn add_container(&self, id: &str) -> NodeId {
        let div = self.create("div");
        self.nodes.borrow_mut()[div].id = Some(id.to_string());
        self.attach(BODY, div);
        div
    }

    pub fn set_attr(&self, node: NodeId, name: &str, value: &str) {
        self.nodes.borrow_mut()[node]
            .attrs
            .insert(name.to_string(), value.to_string());
    }

    pub fn node(&self, node: NodeId) -> Node {
        self.nodes.borrow()[node].clone()
    }

    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.nodes.borrow()[node].children.clone()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.borrow().len()
    }

    /// True if `node` hangs off the body, directly or not
    pub fn is_attached(&self, node: NodeId) -> bool {
        let nodes = self.nodes.borrow();
        let mut current = node;
        loop {
            if current == BODY {
                return true;
            }
            match nodes[current].parent {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    /// Every attached element with the given tag
    pub fn attached_with_tag(&self, tag: &str) -> Vec<NodeId> {
        (0..self.node_count())
            .filter(|&n| self.node(n).tag == tag && self.is_attached(n))
            .collect()
    }

    fn attach(&self, parent: NodeId, child: NodeId) {
        let mut nodes = self.nodes.borrow_mut();
        if let Some(old_parent) = nodes[child].parent {
            nodes[old_parent].children.retain(|&c| c != child);
        }
        nodes[parent].children.push(child);
        nodes[child].parent = Some(parent);
    }
}

/// Newtype so the page can be shared with the engine
#[derive(Clone)]
pub struct SharedPage(pub Rc<MemoryPage>);

impl Page for SharedPage {
    type Element = NodeId;

    fn body(&self) -> Result<NodeId> {
        Ok(BODY)
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        let nodes = self.0.nodes.borrow();
        nodes.iter().position(|n| n.id.as_deref() == Some(id))
    }

    fn append_child(&self, parent: &NodeId, child: &NodeId) -> Result<()> {
        self.0.attach(*parent, *child);
        Ok(())
    }

    fn first_element_child(&self, element: &NodeId) -> Option<NodeId> {
        self.0.nodes.borrow()[*element].children.first().copied()
    }
}

/// Renders `<svg><g data-dot="..."/></svg>`; text without a closing brace is
/// treated as malformed.
pub struct StubEngine {
    page: Rc<MemoryPage>,
    pub calls: RefCell<Vec<String>>,
    pub empty_output: bool,
}

impl StubEngine {
    pub fn new(page: Rc<MemoryPage>) -> Self {
        Self {
            page,
            calls: RefCell::new(Vec::new()),
            empty_output: false,
        }
    }

    pub fn producing_empty_svg(page: Rc<MemoryPage>) -> Self {
        Self {
            empty_output: true,
            ..Self::new(page)
        }
    }
}

impl RenderEngine<NodeId> for StubEngine {
    fn render_svg_element(&self, dot_text: &str) -> LocalBoxFuture<'static, Result<NodeId>> {
        self.calls.borrow_mut().push(dot_text.to_string());

        if !dot_text.trim_end().ends_with('}') {
            return future::ready(Err(SkillTreeError::Render(format!(
                "syntax error near end of '{}'",
                dot_text
            ))))
            .boxed_local();
        }

        let svg = self.page.create("svg");
        if !self.empty_output {
            let graph = self.page.create("g");
            self.page.set_attr(graph, "data-dot", dot_text);
            self.page.attach(svg, graph);
        }
        future::ready(Ok(svg)).boxed_local()
    }
}

/// Records every element pan/zoom was attached to
#[derive(Default)]
pub struct RecordingPanZoom {
    pub attached: RefCell<Vec<(NodeId, PanZoomOptions)>>,
}

impl PanZoom<NodeId> for RecordingPanZoom {
    fn attach(&self, element: &NodeId, options: &PanZoomOptions) -> Result<()> {
        self.attached.borrow_mut().push((*element, *options));
        Ok(())
    }
}

/// Serves files from a map; unknown paths fail like a network error
#[derive(Default)]
pub struct MapFetcher {
    pub files: HashMap<String, String>,
}

impl MapFetcher {
    pub fn with_file(path: &str, text: &str) -> Self {
        let mut files = HashMap::new();
        files.insert(path.to_string(), text.to_string());
        Self { files }
    }
}

impl SourceFetcher for MapFetcher {
    fn fetch_text(&self, path: &str) -> LocalBoxFuture<'static, Result<String>> {
        let result = self
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| SkillTreeError::Fetch(format!("NetworkError when attempting to fetch '{}'", path)));
        future::ready(result).boxed_local()
    }
}
