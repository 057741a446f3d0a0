//! Animation-frame coalescing for bursty events.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

/// Runs a piece of work at most once per animation frame.
///
/// Each call to [`schedule`](Self::schedule) cancels any frame request
/// still pending and files a new one, so a burst of calls between two
/// paints collapses into a single run of the wrapped work.
pub struct FrameDebounce {
    window: Window,
    pending: Rc<Cell<Option<i32>>>,
    callback: Closure<dyn FnMut()>,
}

impl FrameDebounce {
    pub fn new(window: Window, mut work: impl FnMut() + 'static) -> Self {
        let pending = Rc::new(Cell::new(None));
        let callback = {
            let pending = pending.clone();
            Closure::wrap(Box::new(move || {
                pending.set(None);
                work();
            }) as Box<dyn FnMut()>)
        };
        Self {
            window,
            pending,
            callback,
        }
    }

    /// Cancel any pending frame request and schedule a fresh one.
    pub fn schedule(&self) {
        if let Some(handle) = self.pending.take() {
            let _ = self.window.cancel_animation_frame(handle);
        }
        match self
            .window
            .request_animation_frame(self.callback.as_ref().unchecked_ref())
        {
            Ok(handle) => self.pending.set(Some(handle)),
            Err(err) => log::warn!("animation frame request failed: {err:?}"),
        }
    }
}
