//! Shared helpers for the JS API
//!
//! Console logging macros and the conversions between JS values and crate
//! types used by the exported functions.

use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;

use crate::errors::SkillTreeError;

// ============================================================================
// Console Logging Functions
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn info(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn warn(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn error(s: &str);
}

// ============================================================================
// Logging Macros
// ============================================================================

/// Log a debug message with [skill-tree] prefix
#[macro_export]
macro_rules! wasm_log {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_debug(&format!($($arg)*))
    };
}

/// Log an info message with [skill-tree] prefix
#[macro_export]
macro_rules! wasm_info {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_info(&format!($($arg)*))
    };
}

/// Log a warning message with [skill-tree] ⚠️ prefix
#[macro_export]
macro_rules! wasm_warn {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_warn(&format!($($arg)*))
    };
}

/// Log an error message with [skill-tree] ❌ prefix
#[macro_export]
macro_rules! wasm_error {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_error(&format!($($arg)*))
    };
}

// ============================================================================
// Logging Helper Functions (called by macros)
// ============================================================================

pub fn log_debug(msg: &str) {
    log(&format!("[skill-tree] {}", msg));
}

pub fn log_info(msg: &str) {
    info(&format!("[skill-tree] {}", msg));
}

pub fn log_warn(msg: &str) {
    warn(&format!("[skill-tree] ⚠️ {}", msg));
}

pub fn log_error(msg: &str) {
    error(&format!("[skill-tree] ❌ {}", msg));
}

// ============================================================================
// Conversion Helpers
// ============================================================================

/// Deserialize a descriptor-shaped value coming from JavaScript
pub fn deserialize<T: DeserializeOwned>(value: JsValue, error_context: &str) -> Result<T, SkillTreeError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log_error(&msg);
        SkillTreeError::InvalidDescriptor(msg)
    })
}

/// Turn a failed render into a promise rejection.
///
/// The failure is not handled here; it is only traced before being handed
/// back to the page.
pub fn rejection(err: SkillTreeError) -> JsValue {
    log_debug(&format!("Skill tree render rejected: {}", err));
    err.into()
}
