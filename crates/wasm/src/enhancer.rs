//! Startup wiring: one controller owns every page behavior.

use std::rc::Rc;

use veneer_core::EnhanceOptions;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::error::EnhanceError;
use crate::notice::Notifier;
use crate::scrollspy::ScrollSpy;
use crate::{anchors, dom, form, lazy, menu, scrollspy};

/// Sections eligible for scroll tracking.
const SECTION_SELECTOR: &str = "section[id]";
/// Links that receive the active-section highlight and close the menu.
const NAV_LINK_SELECTOR: &str = ".nav-link";
/// In-page anchors upgraded to smooth scrolling.
const ANCHOR_SELECTOR: &str = r##"a[href^="#"]"##;
/// The collapsible mobile menu overlay.
const MENU_OVERLAY_ID: &str = "navbarNav";

/// Handle to a mounted page: owns the notifier and reports what the
/// mount found. Dropping it does not unbind anything; listeners live as
/// long as the page does.
#[wasm_bindgen]
pub struct Enhancer {
    notifier: Notifier,
    sections_tracked: usize,
    nav_links: usize,
    anchors_bound: usize,
    lazy_images: usize,
    contact_form_bound: bool,
}

impl Enhancer {
    pub(crate) fn mount(options: EnhanceOptions) -> Result<Enhancer, EnhanceError> {
        let window = dom::window()?;
        let document = dom::document(&window)?;
        let notifier = Notifier::new(&window, &document, &options);

        let sections: Vec<HtmlElement> = dom::query_all(&document, SECTION_SELECTOR)?
            .into_iter()
            .filter_map(|element| element.dyn_into().ok())
            .collect();
        let links = dom::query_all(&document, NAV_LINK_SELECTOR)?;
        let nav_links = links.len();

        let spy = Rc::new(ScrollSpy::new(
            window.clone(),
            sections,
            links.clone(),
            options.header_offset_px,
        ));
        let sections_tracked = spy.section_count();
        spy.refresh();
        scrollspy::bind(spy)?;

        menu::bind_autoclose(
            &document,
            &links,
            Rc::new(menu::BootstrapCollapse),
            MENU_OVERLAY_ID,
        );

        let anchors_list = dom::query_all(&document, ANCHOR_SELECTOR)?;
        let anchors_bound =
            anchors::bind_smooth_scroll(&window, &document, &anchors_list, options.anchor_offset_px);

        let contact_form_bound = form::bind_contact_form(&document, &notifier)?;
        if !contact_form_bound {
            log::debug!("no contact form on this page");
        }

        let lazy_images = lazy::bind_lazy_images(&document, options.lazy_margin_px)?;

        log::info!(
            "veneer mounted: {sections_tracked} sections, {nav_links} nav links, \
             {anchors_bound} anchors, {lazy_images} deferred images, contact form {}",
            if contact_form_bound { "bound" } else { "absent" }
        );

        Ok(Enhancer {
            notifier,
            sections_tracked,
            nav_links,
            anchors_bound,
            lazy_images,
            contact_form_bound,
        })
    }
}

#[wasm_bindgen]
impl Enhancer {
    /// Show a notification with this page's configured timings.
    pub fn notify(&self, message: &str, kind: Option<String>) {
        self.notifier.show(message, kind);
    }

    /// The notifier driving this page's notifications.
    #[wasm_bindgen(getter)]
    pub fn notifier(&self) -> Notifier {
        self.notifier.clone()
    }

    #[wasm_bindgen(getter, js_name = sectionsTracked)]
    pub fn sections_tracked(&self) -> usize {
        self.sections_tracked
    }

    #[wasm_bindgen(getter, js_name = navLinks)]
    pub fn nav_links(&self) -> usize {
        self.nav_links
    }

    #[wasm_bindgen(getter, js_name = anchorsBound)]
    pub fn anchors_bound(&self) -> usize {
        self.anchors_bound
    }

    #[wasm_bindgen(getter, js_name = lazyImages)]
    pub fn lazy_images(&self) -> usize {
        self.lazy_images
    }

    #[wasm_bindgen(getter, js_name = contactFormBound)]
    pub fn contact_form_bound(&self) -> bool {
        self.contact_form_bound
    }
}
