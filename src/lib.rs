#![cfg(target_arch = "wasm32")]
use crate::core::particles::ParticleParams;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod drawer;
mod events;
mod frame;
mod overlay;
mod page;
mod render;
mod timer;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Log a feature that could not be wired; the rest of the page keeps working.
fn report<T>(feature: &str, result: Result<T, dom::DomError>) -> Option<T> {
    match result {
        Ok(v) => Some(v),
        Err(e) => {
            log::info!("[{}] unavailable: {}", feature, e);
            None
        }
    }
}

fn wire_particles(window: &web::Window, document: &web::Document) -> Result<(), dom::DomError> {
    let canvas: web::HtmlCanvasElement =
        dom::require(document, constants::PARTICLE_CANVAS_ID, "canvas")?;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        window,
        canvas,
        ParticleParams::default(),
    )?));
    events::wire_particle_input(window, frame_ctx.clone());
    frame::start_loop(frame_ctx);
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    report("typing", page::wire_typing(&window, &document));
    let menu = report("menu", drawer::wire_mobile_menu(&document));
    report("nav", page::wire_active_link(&window, &document));
    report("fade", page::wire_fade_in(&document));
    report("particles", wire_particles(&window, &document));
    let modal = report("modal", overlay::wire_application_modal(&window, &document));

    // keydown order matters: the drawer checks the modal before it closes
    if let Some(menu) = menu {
        events::wire_menu_escape(&document, menu);
    }
    if let Some(modal) = modal {
        events::wire_modal_escape(&document, modal);
    }
    Ok(())
}
