//! Pan/zoom configuration handed to the panzoom helper

use serde::{Deserialize, Serialize};

/// Options object for `panzoom(element, options)`.
///
/// Serialized in camelCase so it can be passed to the helper as-is.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PanZoomOptions {
    /// Keep the element within its container while panning
    pub bounds: bool,
    /// Fraction of the element allowed past the container edge
    pub bounds_padding: f64,
}

impl PanZoomOptions {
    /// Configuration used for every skill tree: clamped, 10% padding
    pub const SKILL_TREE: PanZoomOptions = PanZoomOptions {
        bounds: true,
        bounds_padding: 0.1,
    };
}

impl Default for PanZoomOptions {
    fn default() -> Self {
        Self::SKILL_TREE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_tree_options_serialize_camel_case() {
        let json = serde_json::to_value(PanZoomOptions::SKILL_TREE).unwrap();
        assert_eq!(json, serde_json::json!({ "bounds": true, "boundsPadding": 0.1 }));
    }

    #[test]
    fn test_default_is_skill_tree_configuration() {
        assert_eq!(PanZoomOptions::default(), PanZoomOptions::SKILL_TREE);
    }
}
