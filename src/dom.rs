use crate::error::{FieldError, Result};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, EventTarget, Window};

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(FieldError::NoWindow)
}

pub fn document(window: &Window) -> Result<Document> {
    window.document().ok_or(FieldError::NoWindow)
}

// Current viewport size in CSS pixels.
pub fn viewport_size(window: &Window) -> Result<(u32, u32)> {
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok((width.max(0.0) as u32, height.max(0.0) as u32))
}

pub fn request_animation_frame(window: &Window, f: &Closure<dyn FnMut()>) -> Result<i32> {
    let callback: &js_sys::Function = f.as_ref().unchecked_ref();
    Ok(window.request_animation_frame(callback)?)
}

pub fn set_timeout(window: &Window, f: &Closure<dyn FnMut()>, delay_ms: i32) -> Result<i32> {
    let callback: &js_sys::Function = f.as_ref().unchecked_ref();
    Ok(window.set_timeout_with_callback_and_timeout_and_arguments_0(callback, delay_ms)?)
}

// An event listener that stays attached until dropped.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl Listener {
    pub fn attach(target: &EventTarget, event: &'static str, callback: Closure<dyn FnMut()>) -> Result<Listener> {
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Listener {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}
