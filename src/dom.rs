use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Why a page feature could not be wired.
#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("missing #{id}")]
    MissingElement { id: &'static str },
    #[error("#{id} is not a {expected}")]
    WrongType {
        id: &'static str,
        expected: &'static str,
    },
    #[error("no <body>")]
    MissingBody,
    #[error("{what}: {detail}")]
    Js { what: &'static str, detail: String },
}

impl DomError {
    pub fn js(what: &'static str, err: wasm_bindgen::JsValue) -> Self {
        DomError::Js {
            what,
            detail: format!("{:?}", err),
        }
    }
}

/// Look up `#id` and cast it to `T`.
pub fn require<T: JsCast>(
    document: &web::Document,
    id: &'static str,
    expected: &'static str,
) -> Result<T, DomError> {
    document
        .get_element_by_id(id)
        .ok_or(DomError::MissingElement { id })?
        .dyn_into::<T>()
        .map_err(|_| DomError::WrongType { id, expected })
}

#[inline]
pub fn require_element(document: &web::Document, id: &'static str) -> Result<web::Element, DomError> {
    document
        .get_element_by_id(id)
        .ok_or(DomError::MissingElement { id })
}

pub fn body(document: &web::Document) -> Result<web::HtmlElement, DomError> {
    document.body().ok_or(DomError::MissingBody)
}

/// Collect every element matching `selector` under `root`.
pub fn select_all(root: &web::Document, selector: &str) -> Vec<web::Element> {
    root.query_selector_all(selector)
        .map(|list| collect_elements(&list))
        .unwrap_or_default()
}

pub fn select_all_in(root: &web::Element, selector: &str) -> Vec<web::Element> {
    root.query_selector_all(selector)
        .map(|list| collect_elements(&list))
        .unwrap_or_default()
}

fn collect_elements(list: &web::NodeList) -> Vec<web::Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let cl = el.class_list();
    _ = if on { cl.add_1(class) } else { cl.remove_1(class) };
}

#[inline]
pub fn has_class(el: &web::Element, class: &str) -> bool {
    el.class_list().contains(class)
}

/// Attach `handler` for `event` on `target` for the lifetime of the page.
pub fn listen(target: &web::EventTarget, event: &str, handler: impl FnMut(web::Event) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn add_click_listener(el: &web::Element, handler: impl FnMut(web::Event) + 'static) {
    listen(el, "click", handler);
}

/// Viewport size in CSS pixels.
pub fn viewport_size(window: &web::Window) -> (f32, f32) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (w as f32, h as f32)
}
