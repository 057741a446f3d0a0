//! WebAssembly bindings for the veneer page enhancement layer.
//!
//! This crate wires veneer's behaviors into a live document: scroll-based
//! navigation highlighting, mobile menu auto-close, smooth anchor
//! scrolling, contact form validation, transient notifications, and
//! deferred image loading. The page stays a plain static site; markup and
//! styling are untouched except for the classes and elements the
//! behaviors toggle.
//!
//! # Architecture
//!
//! A single [`enhance`] call resolves the page's elements once, binds the
//! listeners, and returns an [`Enhancer`] handle. Validation and
//! scroll-position logic live in `veneer-core` and run without a browser;
//! this crate contributes only the DOM plumbing around them.
//!
//! ## Module Structure
//!
//! - [`enhancer`] - The [`Enhancer`] controller assembled by [`enhance`]
//! - [`scrollspy`] - Active-section tracking for the navigation bar
//! - [`debounce`] - Animation-frame coalescing for scroll events
//! - [`menu`] - Mobile menu auto-close behind the [`menu::OverlayCollapse`] seam
//! - [`anchors`] - Smooth scrolling for in-page anchor links
//! - [`form`] - Contact form validation and reporting
//! - [`notice`] - The [`Notifier`] notification widget
//! - [`lazy`] - Deferred image loading via `IntersectionObserver`
//! - [`dom`] - Lookups over the live document
//! - [`error`] - Error types with JavaScript interop
//!
//! # Example
//!
//! ```javascript
//! import init, { enhance, showNotification } from '@veneer/wasm';
//!
//! await init();
//!
//! const page = enhance({ noticeTimeoutMs: 3000 });
//! console.log(`tracking ${page.sectionsTracked} sections`);
//!
//! showNotification('Welcome back!', 'success');
//! ```
//!
//! # Browser Support
//!
//! Requires:
//! - WebAssembly support (all modern browsers)
//! - JavaScript ES6+ (for wasm-bindgen glue code)
//!
//! `IntersectionObserver` is optional; without it, deferred images load
//! immediately. Tested on Chrome 90+, Firefox 88+, Safari 14+, Edge 90+.

pub mod anchors;
pub mod debounce;
pub mod dom;
pub mod enhancer;
pub mod error;
pub mod form;
pub mod lazy;
pub mod menu;
pub mod notice;
pub mod scrollspy;

pub use enhancer::Enhancer;
pub use error::{EnhanceError, ErrorCode};
pub use notice::Notifier;
pub use veneer_core::{EnhanceOptions, NoticeKind};

use wasm_bindgen::prelude::*;

/// Initialize the WASM module.
///
/// This function sets up panic hooks for better error messages in the
/// browser console. It is called automatically when using wasm-pack's
/// generated JavaScript.
#[wasm_bindgen(start)]
pub fn init() {
    // Set up better panic messages
    console_error_panic_hook::set_once();

    #[cfg(feature = "console-logging")]
    {
        // Initialize console logging if the feature is enabled
        console_log::init_with_level(log::Level::Debug).ok();
    }
}

/// Mount every page behavior.
///
/// `options` may be omitted, `null`, or a partial object; missing fields
/// keep their defaults. Throws if the host environment lacks a window or
/// document, or if the options object does not deserialize.
#[wasm_bindgen]
pub fn enhance(options: JsValue) -> Result<Enhancer, JsValue> {
    let options: EnhanceOptions = if options.is_undefined() || options.is_null() {
        EnhanceOptions::default()
    } else {
        serde_wasm_bindgen::from_value(options)
            .map_err(|err| EnhanceError::options(format!("invalid options object: {err}")))?
    };
    Enhancer::mount(options).map_err(Into::into)
}

/// Show a one-off notification with default timings.
///
/// Pages that keep their [`Enhancer`] around should prefer
/// [`Enhancer::notify`], which uses the configured timings.
#[wasm_bindgen(js_name = showNotification)]
pub fn show_notification(message: &str, kind: Option<String>) {
    let notifier = match dom::window()
        .and_then(|window| dom::document(&window).map(|document| (window, document)))
    {
        Ok((window, document)) => Notifier::new(&window, &document, &EnhanceOptions::default()),
        Err(err) => {
            log::warn!("notification dropped: {}", err.message());
            return;
        }
    };
    notifier.show(message, kind);
}

/// Get the version of the veneer-wasm library.
#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
