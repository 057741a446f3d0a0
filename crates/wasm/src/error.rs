//! Error handling for WASM bindings.
//!
//! Converts veneer's setup failures into JavaScript-friendly errors.

use wasm_bindgen::prelude::*;

/// Error codes for TypeScript consumption.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// A required host object (window, document, body) is missing
    Dom,
    /// An element was found but has an unexpected type
    Cast,
    /// The options object could not be deserialized
    Options,
}

/// A JavaScript-friendly error type.
///
/// Note: This is NOT a wasm_bindgen struct because we need custom
/// conversion to JavaScript Error objects.
#[derive(Debug)]
pub struct EnhanceError {
    code: ErrorCode,
    message: String,
}

impl EnhanceError {
    /// Get the error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Get the error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl EnhanceError {
    /// Create a new error with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Create an error for a missing host object.
    pub fn dom(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Dom, message)
    }

    /// Create an error for an element of the wrong type.
    pub fn cast(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Cast, message)
    }

    /// Create an error for an invalid options object.
    pub fn options(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Options, message)
    }
}

impl From<EnhanceError> for JsValue {
    fn from(err: EnhanceError) -> Self {
        let js_error = js_sys::Error::new(&err.message);

        // Add the error code as a property
        let code_str = match err.code {
            ErrorCode::Dom => "DOM_ERROR",
            ErrorCode::Cast => "CAST_ERROR",
            ErrorCode::Options => "OPTIONS_ERROR",
        };

        js_sys::Reflect::set(&js_error, &"code".into(), &JsValue::from_str(code_str)).ok();

        js_error.into()
    }
}
