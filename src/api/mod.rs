//! Skill Tree WASM API
//!
//! The JavaScript-facing surface of the crate.
//!
//! - `helpers`: console logging macros and JS value conversions
//! - `skill_tree`: `loadSkillTree`, `convertDivToSkillTree`, `renderSkillTrees`

pub mod helpers;
pub mod skill_tree;

pub use skill_tree::{convert_div_to_skill_tree, load_skill_tree, render_skill_trees};
