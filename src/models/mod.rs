//! Data model for skill trees
//!
//! Graph sources, descriptors, and the fixed pan/zoom configuration.

pub mod descriptor;
pub mod panzoom;

pub use descriptor::*;
pub use panzoom::*;
