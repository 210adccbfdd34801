use crate::dom;
use crate::frame::FrameContext;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pointer tracking and viewport resize for the particle canvas.
pub fn wire_particle_input(window: &web::Window, frame_ctx: Rc<RefCell<FrameContext>>) {
    let ctx = frame_ctx.clone();
    dom::listen(window, "mousemove", move |ev| {
        if let Some(ev) = ev.dyn_ref::<web::MouseEvent>() {
            let pos = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
            ctx.borrow_mut().set_mouse(Some(pos));
        }
    });

    // leaving the window disables repulsion until the pointer comes back
    let ctx = frame_ctx.clone();
    dom::listen(window, "mouseout", move |_| {
        ctx.borrow_mut().set_mouse(None);
    });

    let ctx = frame_ctx;
    let wnd = window.clone();
    dom::listen(window, "resize", move |_| {
        let (w, h) = dom::viewport_size(&wnd);
        ctx.borrow_mut().resize(w, h);
    });
}
