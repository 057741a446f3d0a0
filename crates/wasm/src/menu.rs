//! Mobile menu auto-close.
//!
//! On narrow layouts the navigation lives in a collapsible overlay.
//! Following a link should put the overlay away, which is the host
//! toolkit's job, so the actual collapsing sits behind a trait.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

/// Collapses an expanded overlay element.
pub trait OverlayCollapse {
    fn collapse(&self, overlay: &Element);
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    type Collapse;

    #[wasm_bindgen(constructor, js_namespace = bootstrap, catch)]
    fn new(element: &Element, config: &JsValue) -> Result<Collapse, JsValue>;
}

/// Production collapser backed by the page's global `bootstrap.Collapse`.
pub struct BootstrapCollapse;

impl OverlayCollapse for BootstrapCollapse {
    fn collapse(&self, overlay: &Element) {
        if !bootstrap_available() {
            log::warn!("bootstrap global not found; leaving menu open");
            return;
        }
        let config = js_sys::Object::new();
        let _ = js_sys::Reflect::set(&config, &JsValue::from_str("toggle"), &JsValue::TRUE);
        if let Err(err) = Collapse::new(overlay, &config.into()) {
            log::warn!("collapsing the menu failed: {err:?}");
        }
    }
}

fn bootstrap_available() -> bool {
    js_sys::Reflect::has(&js_sys::global(), &JsValue::from_str("bootstrap")).unwrap_or(false)
}

/// Close the overlay identified by `overlay_id` whenever one of `links`
/// is clicked while the overlay is expanded.
///
/// The overlay is looked up at click time: pages that render the menu
/// lazily still work, and a removed overlay degrades to a no-op.
pub fn bind_autoclose(
    document: &Document,
    links: &[Element],
    collapser: Rc<dyn OverlayCollapse>,
    overlay_id: &str,
) -> usize {
    let mut bound = 0;
    for link in links {
        let document = document.clone();
        let collapser = collapser.clone();
        let overlay_id = overlay_id.to_string();
        let handler = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            let Some(overlay) = document.get_element_by_id(&overlay_id) else {
                return;
            };
            if overlay.class_list().contains("show") {
                collapser.collapse(&overlay);
            }
        }) as Box<dyn FnMut(_)>);
        match link.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref()) {
            Ok(()) => {
                handler.forget();
                bound += 1;
            }
            Err(err) => log::warn!("menu link listener rejected: {err:?}"),
        }
    }
    bound
}
