use crate::constants::{CLASS_MODAL_SHOWN, ESCAPE_KEY, MODAL_ID};
use crate::core::menu::{Menu, MenuEvent};
use crate::core::modal::{Modal, ModalEvent};
use crate::dom;
use crate::drawer::DomDrawer;
use crate::overlay::DomModal;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn is_escape(ev: &web::Event) -> bool {
    ev.dyn_ref::<web::KeyboardEvent>()
        .map(|k| k.key() == ESCAPE_KEY)
        .unwrap_or(false)
}

/// Escape closes the drawer, but only while the application modal is up.
/// Must be wired before the modal's own handler so it sees the modal open.
pub fn wire_menu_escape(document: &web::Document, menu: Rc<Menu<DomDrawer>>) {
    let doc = document.clone();
    dom::listen(document, "keydown", move |ev| {
        if !is_escape(&ev) {
            return;
        }
        let modal_open = doc
            .get_element_by_id(MODAL_ID)
            .map(|m| dom::has_class(&m, CLASS_MODAL_SHOWN))
            .unwrap_or(false);
        menu.handle(MenuEvent::Escape { modal_open });
    });
}

pub fn wire_modal_escape(document: &web::Document, modal: Rc<Modal<DomModal>>) {
    dom::listen(document, "keydown", move |ev| {
        if is_escape(&ev) {
            modal.handle(ModalEvent::Escape);
        }
    });
}
