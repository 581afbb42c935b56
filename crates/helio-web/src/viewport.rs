use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Current window size in logical pixels, if there is a window.
pub fn window_size() -> Option<(f32, f32)> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some((width as f32, height as f32))
}

/// A window `resize` listener that lives as long as this guard.
///
/// Dropping the guard removes the listener from the window, so a torn-down
/// game never receives another callback.
pub struct ResizeListener {
    window: web_sys::Window,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl ResizeListener {
    /// Register `on_resize`, called with the new window size on every resize.
    pub fn attach(mut on_resize: impl FnMut(f32, f32) + 'static) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let callback = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            if let Some((width, height)) = window_size() {
                on_resize(width, height);
            }
        }) as Box<dyn FnMut(web_sys::Event)>);
        window.add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref())?;
        Ok(Self { window, callback })
    }
}

impl Drop for ResizeListener {
    fn drop(&mut self) {
        if let Err(e) = self
            .window
            .remove_event_listener_with_callback("resize", self.callback.as_ref().unchecked_ref())
        {
            log::warn!("failed to remove resize listener: {e:?}");
        }
    }
}
