// requestAnimationFrame driver for the simulation tick
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

use crate::model::Tick;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Calls `on_frame` once per display refresh for as long as it returns
/// [`Tick::Continue`]. At most one frame is pending at a time.
pub struct FrameLoop {
    window: Window,
    callback: FrameCallback,
    pending: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    pub fn new<F>(window: Window, mut on_frame: F) -> Self
    where
        F: FnMut() -> Tick + 'static,
    {
        let callback: FrameCallback = Rc::new(RefCell::new(None));
        let pending = Rc::new(Cell::new(None));
        {
            let callback_loop = callback.clone();
            let pending_loop = pending.clone();
            let window_loop = window.clone();
            *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                pending_loop.set(None);
                // Scheduling is decided after the tick so a pause that landed
                // during this frame stops the loop here.
                if on_frame() == Tick::Continue {
                    request_frame(&window_loop, &callback_loop, &pending_loop);
                }
            }) as Box<dyn FnMut()>));
        }
        Self {
            window,
            callback,
            pending,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get().is_some()
    }

    /// Schedules a frame unless one is already queued.
    pub fn start(&self) {
        if !self.is_pending() {
            request_frame(&self.window, &self.callback, &self.pending);
        }
    }

    pub fn cancel(&self) {
        if let Some(id) = self.pending.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
        // the closure holds a handle to its own cell
        self.callback.borrow_mut().take();
    }
}

fn request_frame(window: &Window, callback: &FrameCallback, pending: &Cell<Option<i32>>) {
    let cb = callback.borrow();
    let Some(closure) = cb.as_ref() else { return };
    match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
        Ok(id) => pending.set(Some(id)),
        Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
    }
}
