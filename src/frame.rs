use crate::core::particles::{ParticleField, ParticleParams};
use crate::dom::{self, DomError};
use crate::render::CanvasSurface;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the animation loop touches between frames.
pub struct FrameContext {
    pub canvas: web::HtmlCanvasElement,
    pub surface: CanvasSurface,
    pub field: ParticleField,
}

impl FrameContext {
    pub fn new(
        window: &web::Window,
        canvas: web::HtmlCanvasElement,
        params: ParticleParams,
    ) -> Result<Self, DomError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| DomError::js("getContext", e))?
            .ok_or(DomError::WrongType {
                id: crate::constants::PARTICLE_CANVAS_ID,
                expected: "2d canvas",
            })?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|_| DomError::WrongType {
                id: crate::constants::PARTICLE_CANVAS_ID,
                expected: "2d canvas",
            })?;
        let (w, h) = dom::viewport_size(window);
        canvas.set_width(w as u32);
        canvas.set_height(h as u32);
        let field = ParticleField::new(w, h, params, &mut rand::thread_rng());
        log::info!(
            "[particles] {}x{} -> {} particles",
            w,
            h,
            field.particles.len()
        );
        Ok(Self {
            canvas,
            surface: CanvasSurface::new(ctx),
            field,
        })
    }

    pub fn frame(&mut self) {
        self.field.frame(&mut self.surface);
    }

    /// Match the viewport again and regenerate every particle.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
        self.field.resize(width, height, &mut rand::thread_rng());
        log::info!(
            "[particles] resized {}x{} -> {} particles",
            width,
            height,
            self.field.particles.len()
        );
    }

    pub fn set_mouse(&mut self, mouse: Option<Vec2>) {
        self.field.set_mouse(mouse);
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if let Some(w) = web::window() {
            if let Some(cb) = tick_clone.borrow().as_ref() {
                _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        }
        frame_ctx_tick.borrow_mut().frame();
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        if let Some(cb) = tick.borrow().as_ref() {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }
}
