//! Smooth scrolling for in-page anchor links.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

/// Resolve the scroll destination for an anchor href.
///
/// Returns `None` for a bare `"#"` and for fragments with no matching
/// element, in which case the click should fall through untouched aside
/// from its default action already being cancelled.
pub fn anchor_target_top(document: &Document, href: &str, offset: f64) -> Option<f64> {
    if href == "#" {
        return None;
    }
    let target = document.query_selector(href).ok().flatten()?;
    let target: HtmlElement = target.dyn_into().ok()?;
    Some(target.offset_top() as f64 - offset)
}

/// Intercept clicks on `anchors` and glide to their targets, stopping
/// `offset` pixels short so fixed headers never cover the headline.
pub fn bind_smooth_scroll(
    window: &Window,
    document: &Document,
    anchors: &[Element],
    offset: f64,
) -> usize {
    let mut bound = 0;
    for anchor in anchors {
        let window = window.clone();
        let document = document.clone();
        let handler = Closure::wrap(Box::new(move |event: web_sys::Event| {
            event.prevent_default();
            let Some(target) = event.current_target() else {
                return;
            };
            let Ok(anchor) = target.dyn_into::<Element>() else {
                return;
            };
            let Some(href) = anchor.get_attribute("href") else {
                return;
            };
            if let Some(top) = anchor_target_top(&document, &href, offset) {
                let options = ScrollToOptions::new();
                options.set_top(top);
                options.set_behavior(ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            }
        }) as Box<dyn FnMut(_)>);
        match anchor.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref()) {
            Ok(()) => {
                handler.forget();
                bound += 1;
            }
            Err(err) => log::warn!("anchor listener rejected: {err:?}"),
        }
    }
    bound
}
