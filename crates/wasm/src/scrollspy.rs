//! Scroll-position tracking for the navigation bar.

use std::rc::Rc;

use veneer_core::{SectionSpan, active_section};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, HtmlElement, Window};

use crate::debounce::FrameDebounce;
use crate::error::EnhanceError;

const ACTIVE_CLASS: &str = "active";

/// Keeps the navigation link of the section under the reader highlighted.
///
/// Elements are resolved once at mount. Section geometry is re-measured on
/// every refresh, so layout shifts (late images, font swaps) never leave
/// the highlight stale.
pub struct ScrollSpy {
    window: Window,
    sections: Vec<(String, HtmlElement)>,
    links: Vec<Element>,
    probe_offset: f64,
}

impl ScrollSpy {
    /// Track `sections` (anything without an id is ignored) and toggle the
    /// active class across `links`.
    pub fn new(
        window: Window,
        sections: Vec<HtmlElement>,
        links: Vec<Element>,
        probe_offset: f64,
    ) -> Self {
        let sections = sections
            .into_iter()
            .filter_map(|element| {
                let id = element.id();
                if id.is_empty() {
                    None
                } else {
                    Some((id, element))
                }
            })
            .collect();
        Self {
            window,
            sections,
            links,
            probe_offset,
        }
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Recompute the highlight from the window's current scroll position.
    pub fn refresh(&self) {
        let scroll_y = self.window.scroll_y().unwrap_or(0.0);
        self.refresh_at(scroll_y);
    }

    /// Recompute the highlight as if the page were scrolled to `scroll_y`.
    pub fn refresh_at(&self, scroll_y: f64) {
        let spans: Vec<SectionSpan> = self
            .sections
            .iter()
            .map(|(id, element)| {
                SectionSpan::new(
                    id.clone(),
                    element.offset_top() as f64,
                    element.offset_height() as f64,
                )
            })
            .collect();
        self.apply(active_section(&spans, scroll_y, self.probe_offset));
    }

    /// Clear the active class everywhere, then set it on the link whose
    /// href points at `active`.
    fn apply(&self, active: Option<&str>) {
        for link in &self.links {
            let classes = link.class_list();
            let _ = classes.remove_1(ACTIVE_CLASS);
            if let (Some(id), Some(href)) = (active, link.get_attribute("href")) {
                if href == format!("#{id}") {
                    let _ = classes.add_1(ACTIVE_CLASS);
                }
            }
        }
    }
}

/// Attach a debounced scroll listener that keeps `spy` current for the
/// lifetime of the page.
pub fn bind(spy: Rc<ScrollSpy>) -> Result<(), EnhanceError> {
    let window = spy.window.clone();
    let debounce = FrameDebounce::new(window.clone(), move || spy.refresh());
    let listener = Closure::wrap(Box::new(move || debounce.schedule()) as Box<dyn FnMut()>);
    window
        .add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())
        .map_err(|err| EnhanceError::dom(format!("scroll listener rejected: {err:?}")))?;
    listener.forget();
    Ok(())
}
