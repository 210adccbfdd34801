use crate::constants::*;
use crate::core::modal::{FileDisplay, Modal, ModalEvent, ModalView, SubmitState};
use crate::dom::{self, DomError};
use crate::timer::BrowserTimer;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The application modal and the form controls it owns.
pub struct DomModal {
    window: web::Window,
    modal: web::Element,
    body: web::HtmlElement,
    form: web::HtmlFormElement,
    file_wrapper: Option<web::Element>,
    file_input: Option<web::HtmlInputElement>,
    file_label: Option<web::Element>,
    submit_btn: Option<web::HtmlButtonElement>,
}

impl ModalView for DomModal {
    fn is_shown(&self) -> bool {
        dom::has_class(&self.modal, CLASS_MODAL_SHOWN)
    }

    fn set_shown(&self, shown: bool) {
        dom::set_class(&self.modal, CLASS_MODAL_SHOWN, shown);
        dom::set_class(&self.body, CLASS_BODY_MODAL_OPEN, shown);
    }

    fn show_file(&self, display: &FileDisplay) {
        if let Some(label) = &self.file_label {
            label.set_text_content(Some(display.label.as_str()));
        }
        if let Some(wrapper) = &self.file_wrapper {
            dom::set_class(wrapper, CLASS_HAS_FILE, display.has_file);
        }
    }

    fn clear_file_input(&self) {
        if let Some(input) = &self.file_input {
            input.set_value("");
        }
    }

    fn set_submit(&self, state: &SubmitState) {
        if let Some(btn) = &self.submit_btn {
            btn.set_disabled(state.disabled);
            btn.set_text_content(Some(state.label));
        }
    }

    fn reset_form(&self) {
        self.form.reset();
    }

    fn notify(&self, message: &str) {
        _ = self.window.alert_with_message(message);
    }
}

fn selected_file_name(input: &web::HtmlInputElement) -> Option<String> {
    input.files().and_then(|files| files.get(0)).map(|f| f.name())
}

/// Wire the application modal. Needs the open button, the modal, its close
/// button and the form; the upload and submit controls are optional extras.
pub fn wire_application_modal(
    window: &web::Window,
    document: &web::Document,
) -> Result<Rc<Modal<DomModal>>, DomError> {
    let open_btn = dom::require_element(document, OPEN_MODAL_BUTTON_ID)?;
    let modal_el = dom::require_element(document, MODAL_ID)?;
    let close_btn = dom::require_element(document, CLOSE_MODAL_BUTTON_ID)?;
    let form: web::HtmlFormElement = dom::require(document, APPLICATION_FORM_ID, "form")?;
    let body = dom::body(document)?;

    let file_input: Option<web::HtmlInputElement> =
        dom::require(document, FILE_INPUT_ID, "input").ok();
    let submit_btn: Option<web::HtmlButtonElement> =
        dom::require(document, SUBMIT_BUTTON_ID, "button").ok();

    let modal = Rc::new(Modal::new(DomModal {
        window: window.clone(),
        modal: modal_el.clone(),
        body,
        form: form.clone(),
        file_wrapper: document.get_element_by_id(FILE_UPLOAD_WRAPPER_ID),
        file_input: file_input.clone(),
        file_label: document.get_element_by_id(FILE_NAME_DISPLAY_ID),
        submit_btn,
    }));

    let m = modal.clone();
    dom::add_click_listener(&open_btn, move |ev| {
        ev.prevent_default();
        m.handle(ModalEvent::Open);
    });

    let m = modal.clone();
    dom::add_click_listener(&close_btn, move |_| {
        m.handle(ModalEvent::CloseButton);
    });

    let m = modal.clone();
    let backdrop = modal_el.clone();
    dom::add_click_listener(&modal_el, move |ev| {
        let on_backdrop = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .map(|t| t == backdrop)
            .unwrap_or(false);
        m.handle(ModalEvent::BackdropClick { on_backdrop });
    });

    if let Some(input) = file_input {
        let m = modal.clone();
        let picker = input.clone();
        dom::listen(&input, "change", move |_| {
            m.select_file(selected_file_name(&picker).as_deref());
        });
    }

    if let Some(remove_btn) = document.get_element_by_id(REMOVE_FILE_BUTTON_ID) {
        let m = modal.clone();
        dom::add_click_listener(&remove_btn, move |_| m.remove_file());
    }

    let m = modal.clone();
    let timer = BrowserTimer::new(window.clone());
    dom::listen(&form, "submit", move |ev| {
        ev.prevent_default();
        log::info!("[modal] submitting application");
        m.submit(&timer);
    });

    log::info!("[modal] wired");
    Ok(modal)
}
