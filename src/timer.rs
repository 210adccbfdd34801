use crate::core::schedule::Timer;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `Timer` over `window.setTimeout`.
#[derive(Clone)]
pub struct BrowserTimer {
    window: web::Window,
}

impl BrowserTimer {
    pub fn new(window: web::Window) -> Self {
        Self { window }
    }
}

impl Timer for BrowserTimer {
    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        let cb = Closure::once_into_js(move || task());
        if let Err(e) = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                cb.unchecked_ref(),
                delay_ms as i32,
            )
        {
            log::error!("setTimeout failed: {:?}", e);
        }
    }
}
