//! Deferred image loading.
//!
//! Images marked `img.lazy` carry their real source in `data-src` and
//! only fetch it when they approach the viewport. Browsers without
//! `IntersectionObserver` load everything up front instead.

use veneer_core::lazy::{PLACEHOLDER_IMAGE, root_margin};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, HtmlImageElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::dom;
use crate::error::EnhanceError;

const LAZY_SELECTOR: &str = "img.lazy";
const DEFERRED_ATTR: &str = "data-src";

/// Start watching the page's deferred images. Returns how many were found.
pub fn bind_lazy_images(document: &Document, margin_px: u32) -> Result<usize, EnhanceError> {
    bind_lazy_images_with_support(document, margin_px, observer_supported())
}

/// As [`bind_lazy_images`], with observer availability supplied by the
/// caller.
pub fn bind_lazy_images_with_support(
    document: &Document,
    margin_px: u32,
    observer_available: bool,
) -> Result<usize, EnhanceError> {
    let images = dom::query_all(document, LAZY_SELECTOR)?;
    if images.is_empty() {
        return Ok(0);
    }

    if observer_available {
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    if let Some(image) = target.dyn_ref::<HtmlImageElement>() {
                        promote(image);
                    }
                    observer.unobserve(&target);
                }
            },
        ) as Box<dyn FnMut(_, _)>);

        let init = IntersectionObserverInit::new();
        init.set_root_margin(&root_margin(margin_px));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(|err| EnhanceError::dom(format!("observer construction failed: {err:?}")))?;
        for image in &images {
            observer.observe(image);
        }
        callback.forget();
    } else {
        log::info!(
            "viewport observation unavailable; loading {} deferred images now",
            images.len()
        );
        for image in &images {
            let (Some(image), Some(src)) = (
                image.dyn_ref::<HtmlImageElement>(),
                image.get_attribute(DEFERRED_ATTR),
            ) else {
                continue;
            };
            image.set_src(&src);
        }
    }
    Ok(images.len())
}

/// Swap in the deferred source. First call only: the marker attribute is
/// consumed, so a second promotion of the same image is a no-op.
pub fn promote(image: &HtmlImageElement) {
    let Some(src) = image.get_attribute(DEFERRED_ATTR) else {
        return;
    };
    let _ = image.remove_attribute(DEFERRED_ATTR);

    let loaded = image.clone();
    let onload = Closure::wrap(Box::new(move || {
        let _ = loaded.style().set_property("opacity", "1");
        let _ = loaded.class_list().remove_1("lazy");
    }) as Box<dyn FnMut()>);
    image.set_onload(Some(onload.as_ref().unchecked_ref()));
    onload.forget();

    // A failed fetch falls back to the inline placeholder; its own load
    // then runs the reveal above.
    let failed = image.clone();
    let onerror = Closure::wrap(Box::new(move || {
        failed.set_src(PLACEHOLDER_IMAGE);
    }) as Box<dyn FnMut()>);
    image.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    onerror.forget();

    image.set_src(&src);
}

fn observer_supported() -> bool {
    js_sys::Reflect::has(&js_sys::global(), &JsValue::from_str("IntersectionObserver"))
        .unwrap_or(false)
}
