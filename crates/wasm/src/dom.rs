//! Thin lookups over the live document.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::error::EnhanceError;

/// Get the global window object.
pub fn window() -> Result<Window, EnhanceError> {
    web_sys::window().ok_or_else(|| EnhanceError::dom("no window object available"))
}

/// Get the document attached to a window.
pub fn document(window: &Window) -> Result<Document, EnhanceError> {
    window
        .document()
        .ok_or_else(|| EnhanceError::dom("no document on window"))
}

/// Get the document body.
pub fn body(document: &Document) -> Result<HtmlElement, EnhanceError> {
    document
        .body()
        .ok_or_else(|| EnhanceError::dom("document has no body"))
}

/// Collect every element matching a selector.
///
/// Non-element nodes are skipped. An invalid selector is a programming
/// error on our side and surfaces as `ErrorCode::Dom`.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, EnhanceError> {
    let list = document
        .query_selector_all(selector)
        .map_err(|err| EnhanceError::dom(format!("query {selector:?} failed: {err:?}")))?;

    let mut elements = Vec::with_capacity(list.length() as usize);
    for index in 0..list.length() {
        if let Some(node) = list.get(index) {
            if let Ok(element) = node.dyn_into::<Element>() {
                elements.push(element);
            }
        }
    }
    Ok(elements)
}
