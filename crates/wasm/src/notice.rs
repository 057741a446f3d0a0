//! Transient page-level notifications.
//!
//! One notification is visible at a time. Showing a new one replaces the
//! current one on the spot; removal otherwise happens in two phases, a
//! CSS slide-out followed by detachment once the animation has had time
//! to finish. A removed notice is disposed of on the next timer tick,
//! never from inside one of its own callbacks.

use std::cell::RefCell;
use std::rc::Rc;

use veneer_core::{EnhanceOptions, NoticeKind};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::dom;
use crate::error::EnhanceError;

const NOTIFICATION_SELECTOR: &str = ".notification";
const STYLE_ID: &str = "veneer-notice-style";

const EXIT_KEYFRAMES: &str = "\
@keyframes slideOutUp {
  from {
    transform: translateX(-50%);
    opacity: 1;
  }
  to {
    transform: translate(-50%, -100%);
    opacity: 0;
  }
}";

struct ActiveNotice {
    window: Window,
    element: HtmlElement,
    exiting: bool,
    auto_handle: Option<i32>,
    exit_handle: Option<i32>,
    _close: Closure<dyn FnMut(web_sys::Event)>,
    _auto: Closure<dyn FnMut()>,
    _exit: Option<Closure<dyn FnMut()>>,
}

impl ActiveNotice {
    fn cancel_timers(&mut self) {
        if let Some(handle) = self.auto_handle.take() {
            self.window.clear_timeout_with_handle(handle);
        }
        if let Some(handle) = self.exit_handle.take() {
            self.window.clear_timeout_with_handle(handle);
        }
    }
}

impl Drop for ActiveNotice {
    // A pending timer must not outlive the closure it targets.
    fn drop(&mut self) {
        self.cancel_timers();
    }
}

struct NotifierState {
    window: Window,
    document: Document,
    timeout_ms: u32,
    exit_ms: u32,
    current: Option<ActiveNotice>,
    /// A notice must not be freed from inside its own callback, so
    /// removal parks it here; a zero-delay timer sweeps the slot once
    /// the stack has unwound.
    retired: Option<ActiveNotice>,
}

/// Shows transient notifications, one at a time.
///
/// Cloning hands out another handle to the same on-page notification
/// slot. A visible notification keeps the shared state alive through its
/// pending callbacks, so handles may be dropped freely without cutting a
/// notification's lifecycle short.
#[wasm_bindgen]
#[derive(Clone)]
pub struct Notifier {
    state: Rc<RefCell<NotifierState>>,
}

impl Notifier {
    pub fn new(window: &Window, document: &Document, options: &EnhanceOptions) -> Self {
        Self {
            state: Rc::new(RefCell::new(NotifierState {
                window: window.clone(),
                document: document.clone(),
                timeout_ms: options.notice_timeout_ms,
                exit_ms: options.notice_exit_ms,
                current: None,
                retired: None,
            })),
        }
    }

    /// Typed entry point for callers inside the crate.
    pub fn show_kind(&self, message: &str, kind: NoticeKind) {
        if let Err(err) = self.try_show(message, kind) {
            log::warn!("notification dropped: {}", err.message());
        }
    }

    fn try_show(&self, message: &str, kind: NoticeKind) -> Result<(), EnhanceError> {
        let mut state = self.state.borrow_mut();
        state.retired = None;
        if let Some(previous) = state.current.take() {
            retire(&self.state, &mut state, previous);
        }
        // Notifications from other handles or earlier page scripts count
        // too: at most one may be on the page.
        remove_existing(&state.document);
        ensure_exit_styles(&state.document)?;

        let window = state.window.clone();
        let document = state.document.clone();
        let timeout_ms = state.timeout_ms;

        let (element, button) = build_element(&document, message, kind)?;
        dom::body(&document)?
            .append_child(&element)
            .map_err(|err| js_dom("attaching the notification failed", err))?;

        let close = {
            let state = self.state.clone();
            Closure::wrap(
                Box::new(move |_event: web_sys::Event| begin_exit(&state)) as Box<dyn FnMut(_)>
            )
        };
        button
            .add_event_listener_with_callback("click", close.as_ref().unchecked_ref())
            .map_err(|err| js_dom("close button listener rejected", err))?;

        let auto = {
            let state = self.state.clone();
            Closure::wrap(Box::new(move || begin_exit(&state)) as Box<dyn FnMut()>)
        };
        let auto_handle = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                auto.as_ref().unchecked_ref(),
                timeout_ms as i32,
            )
            .map_err(|err| js_dom("auto-dismiss timer rejected", err))?;

        state.current = Some(ActiveNotice {
            window,
            element,
            exiting: false,
            auto_handle: Some(auto_handle),
            exit_handle: None,
            _close: close,
            _auto: auto,
            _exit: None,
        });
        Ok(())
    }
}

#[wasm_bindgen]
impl Notifier {
    /// Show a notification. `kind` is `"success"` or `"error"`; anything
    /// else (or nothing) reads as success.
    pub fn show(&self, message: &str, kind: Option<String>) {
        self.show_kind(message, NoticeKind::parse(kind.as_deref()));
    }

    /// Start the exit animation for the visible notification, if any.
    pub fn dismiss(&self) {
        begin_exit(&self.state);
    }

    /// Whether a notification is on the page, exit animation included.
    #[wasm_bindgen(getter)]
    pub fn visible(&self) -> bool {
        self.state.borrow().current.is_some()
    }
}

/// Phase one of removal: stop the auto-dismiss clock, play the slide-out,
/// and arrange for detachment when the animation is over. Idempotent
/// while an exit is already underway.
fn begin_exit(state_rc: &Rc<RefCell<NotifierState>>) {
    let mut state = state_rc.borrow_mut();
    let window = state.window.clone();
    let exit_ms = state.exit_ms;
    let Some(notice) = state.current.as_mut() else {
        return;
    };
    if notice.exiting {
        return;
    }
    notice.exiting = true;
    if let Some(handle) = notice.auto_handle.take() {
        window.clear_timeout_with_handle(handle);
    }
    let _ = notice
        .element
        .style()
        .set_property("animation", &format!("slideOutUp {exit_ms}ms ease"));

    let exit = {
        let state = state_rc.clone();
        Closure::wrap(Box::new(move || finish_exit(&state)) as Box<dyn FnMut()>)
    };
    match window.set_timeout_with_callback_and_timeout_and_arguments_0(
        exit.as_ref().unchecked_ref(),
        exit_ms as i32,
    ) {
        Ok(handle) => {
            notice.exit_handle = Some(handle);
            notice._exit = Some(exit);
            return;
        }
        Err(err) => log::warn!("exit timer rejected, removing the notification now: {err:?}"),
    }
    // No timer, no animation: detach immediately.
    if let Some(notice) = state.current.take() {
        retire(state_rc, &mut state, notice);
    }
}

/// Phase two: take the notice off the page.
fn finish_exit(state_rc: &Rc<RefCell<NotifierState>>) {
    let mut state = state_rc.borrow_mut();
    if let Some(notice) = state.current.take() {
        retire(state_rc, &mut state, notice);
    }
}

/// Detach a notice and park it for disposal on the next timer tick.
/// This can run under one of the notice's own callbacks, which must
/// return before its closure is freed; the sweep also drops the parked
/// closures' state handles, so a handle-less notifier does not outlive
/// its last notification.
fn retire(
    state_rc: &Rc<RefCell<NotifierState>>,
    state: &mut NotifierState,
    mut notice: ActiveNotice,
) {
    notice.cancel_timers();
    notice.element.remove();
    state.retired = Some(notice);

    let sweep = {
        let state = state_rc.clone();
        Closure::once_into_js(move || state.borrow_mut().retired = None)
    };
    if let Err(err) = state
        .window
        .set_timeout_with_callback_and_timeout_and_arguments_0(sweep.unchecked_ref(), 0)
    {
        // Parked until the next show or the state itself drops.
        log::warn!("sweep timer rejected: {err:?}");
    }
}

fn remove_existing(document: &Document) {
    if let Ok(stale) = dom::query_all(document, NOTIFICATION_SELECTOR) {
        for element in stale {
            element.remove();
        }
    }
}

/// Inject the slide-out keyframes once per document.
fn ensure_exit_styles(document: &Document) -> Result<(), EnhanceError> {
    if document.get_element_by_id(STYLE_ID).is_some() {
        return Ok(());
    }
    let style = document
        .create_element("style")
        .map_err(|err| js_dom("creating the style block failed", err))?;
    style.set_id(STYLE_ID);
    style.set_text_content(Some(EXIT_KEYFRAMES));
    document
        .head()
        .ok_or_else(|| EnhanceError::dom("document has no head"))?
        .append_child(&style)
        .map_err(|err| js_dom("attaching the style block failed", err))?;
    Ok(())
}

fn build_element(
    document: &Document,
    message: &str,
    kind: NoticeKind,
) -> Result<(HtmlElement, Element), EnhanceError> {
    let container = document
        .create_element("div")
        .map_err(|err| js_dom("creating the notification failed", err))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| EnhanceError::cast("notification container is not an HtmlElement"))?;
    container.set_class_name(&format!("notification {}", kind.as_class()));

    let text = document
        .create_element("span")
        .map_err(|err| js_dom("creating the message span failed", err))?;
    // textContent keeps markup in user input inert
    text.set_text_content(Some(message));

    let button = document
        .create_element("button")
        .map_err(|err| js_dom("creating the close button failed", err))?;
    button
        .set_attribute("aria-label", "Close notification")
        .map_err(|err| js_dom("labelling the close button failed", err))?;
    button.set_text_content(Some("✖"));

    container
        .append_child(&text)
        .map_err(|err| js_dom("assembling the notification failed", err))?;
    container
        .append_child(&button)
        .map_err(|err| js_dom("assembling the notification failed", err))?;
    Ok((container, button))
}

fn js_dom(context: &str, err: JsValue) -> EnhanceError {
    EnhanceError::dom(format!("{context}: {err:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn notifier(timeout_ms: u32, exit_ms: u32) -> Notifier {
        let window = web_sys::window().expect("Should have a window");
        let document = window.document().expect("Should have a document");
        let options = EnhanceOptions::new()
            .with_notice_timeout_ms(timeout_ms)
            .with_notice_exit_ms(exit_ms);
        Notifier::new(&window, &document, &options)
    }

    async fn sleep(ms: i32) {
        let promise = js_sys::Promise::new(&mut |resolve, _reject| {
            web_sys::window()
                .expect("Should have a window")
                .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
                .expect("Should schedule timeout");
        });
        wasm_bindgen_futures::JsFuture::from(promise)
            .await
            .expect("Sleep should resolve");
    }

    async fn wait_until(mut condition: impl FnMut() -> bool, budget_ms: i32) -> bool {
        let mut waited = 0;
        while waited < budget_ms {
            if condition() {
                return true;
            }
            sleep(25).await;
            waited += 25;
        }
        condition()
    }

    /// Test that a finished exit leaves no parked notice behind.
    #[wasm_bindgen_test]
    async fn test_retired_notice_is_swept_after_exit() {
        let notifier = notifier(5_000, 30);
        notifier.show_kind("leaving", NoticeKind::Success);
        notifier.dismiss();

        let gone = wait_until(|| !notifier.visible(), 2_000).await;
        assert!(gone, "Notification should finish its exit");
        // One more tick for the disposal timer.
        sleep(25).await;

        assert!(
            notifier.state.borrow().retired.is_none(),
            "Should sweep the retired notice"
        );
        assert_eq!(
            Rc::strong_count(&notifier.state),
            1,
            "Should leave the handle as the only owner of the state"
        );
    }

    /// Test that state from a dropped handle is freed once its
    /// notification is gone, rather than held by its own callbacks.
    #[wasm_bindgen_test]
    async fn test_dropped_handle_state_is_freed_after_dismissal() {
        let notifier = notifier(40, 30);
        let state = Rc::downgrade(&notifier.state);
        notifier.show_kind("short-lived", NoticeKind::Success);
        drop(notifier);

        let freed = wait_until(|| state.upgrade().is_none(), 2_000).await;
        assert!(freed, "Should free the state once the notice is dismissed");
    }
}
