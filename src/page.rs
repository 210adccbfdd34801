use crate::constants::*;
use crate::core::fade::FadeWatch;
use crate::core::nav;
use crate::core::typing::{start_typing, TYPING_INTERVAL_MS, TYPING_TEXT};
use crate::dom::{self, DomError};
use crate::timer::BrowserTimer;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Type the hero headline, appending to whatever the heading already holds.
pub fn wire_typing(window: &web::Window, document: &web::Document) -> Result<(), DomError> {
    let title = dom::require_element(document, HERO_TITLE_ID)?;
    let timer = Rc::new(BrowserTimer::new(window.clone()));
    start_typing(timer, TYPING_TEXT, TYPING_INTERVAL_MS, move |c| {
        let mut text = title.text_content().unwrap_or_default();
        text.push(c);
        title.set_text_content(Some(text.as_str()));
    });
    log::info!("[typing] started");
    Ok(())
}

/// Mark the desktop nav link pointing at the current page.
pub fn wire_active_link(window: &web::Window, document: &web::Document) -> Result<(), DomError> {
    let pathname = window
        .location()
        .pathname()
        .map_err(|e| DomError::js("location.pathname", e))?;
    let current = nav::current_page(&pathname);
    let links = dom::select_all(document, DESKTOP_NAV_LINK_SELECTOR);
    let hrefs: Vec<Option<String>> = links.iter().map(|l| l.get_attribute("href")).collect();
    let matched = nav::matching_links(current, &hrefs);
    for &i in &matched {
        dom::set_class(&links[i], CLASS_ACTIVE, true);
    }
    log::info!("[nav] page={} active={}", current, matched.len());
    Ok(())
}

/// Reveal each `.fade-in-section` the first time it scrolls into view.
pub fn wire_fade_in(document: &web::Document) -> Result<(), DomError> {
    let sections = dom::select_all(document, FADE_IN_SELECTOR);
    let watch = Rc::new(RefCell::new(FadeWatch::<web::Element>::new()));

    let watch_cb = watch.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            let batch = entries.iter().filter_map(|e| {
                let entry = e.dyn_into::<web::IntersectionObserverEntry>().ok()?;
                Some((entry.target(), entry.is_intersecting()))
            });
            let revealed = watch_cb.borrow_mut().on_entries(batch);
            for el in &revealed {
                dom::set_class(el, CLASS_VISIBLE, true);
                observer.unobserve(el);
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let opts = web::IntersectionObserverInit::new();
    opts.set_threshold(&wasm_bindgen::JsValue::from_f64(FADE_THRESHOLD));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &opts)
            .map_err(|e| DomError::js("IntersectionObserver", e))?;
    callback.forget();

    for el in sections {
        observer.observe(&el);
        watch.borrow_mut().watch(el);
    }
    log::info!("[fade] watching {} sections", watch.borrow().pending());
    Ok(())
}
