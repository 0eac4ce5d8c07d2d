//! Skill tree descriptors

use serde::{Deserialize, Serialize};

/// DOT text for one graph, passed through to the rendering engine untouched.
///
/// On the JS side this is the `value` object of a descriptor, shaped
/// `{ dot_text: "digraph { ... }" }`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DotText {
    pub dot_text: String,
}

impl DotText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            dot_text: text.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.dot_text
    }
}

impl From<&str> for DotText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for DotText {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

/// One skill tree to render inline: the container id plus its DOT text.
///
/// Ids are not required to be unique. Two descriptors with the same id both
/// render into the first element carrying that id.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SkillTreeDescriptor {
    pub id: String,
    pub value: DotText,
}

impl SkillTreeDescriptor {
    pub fn new(id: impl Into<String>, dot_text: impl Into<DotText>) -> Self {
        Self {
            id: id.into(),
            value: dot_text.into(),
        }
    }

    pub fn dot_text(&self) -> &str {
        self.value.as_str()
    }
}
