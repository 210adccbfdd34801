// Host-side tests for the application modal and its mocked submission.

#![allow(dead_code)]
mod core {
    pub mod schedule {
        include!("../src/core/schedule.rs");
    }
    pub mod modal {
        include!("../src/core/modal.rs");
    }
}

use crate::core::modal::*;
use crate::core::schedule::VirtualTimer;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Default)]
struct FakeModal {
    shown: Cell<bool>,
    file: RefCell<Option<FileDisplay>>,
    input_cleared: Cell<bool>,
    submit: RefCell<Option<SubmitState>>,
    resets: Cell<usize>,
    alerts: RefCell<Vec<String>>,
}

impl ModalView for FakeModal {
    fn is_shown(&self) -> bool {
        self.shown.get()
    }
    fn set_shown(&self, shown: bool) {
        self.shown.set(shown);
    }
    fn show_file(&self, display: &FileDisplay) {
        *self.file.borrow_mut() = Some(display.clone());
    }
    fn clear_file_input(&self) {
        self.input_cleared.set(true);
    }
    fn set_submit(&self, state: &SubmitState) {
        *self.submit.borrow_mut() = Some(state.clone());
    }
    fn reset_form(&self) {
        self.resets.set(self.resets.get() + 1);
    }
    fn notify(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}

fn open_modal() -> Rc<Modal<FakeModal>> {
    let modal = Rc::new(Modal::new(FakeModal::default()));
    modal.handle(ModalEvent::Open);
    modal
}

#[test]
fn open_and_close_button() {
    let modal = open_modal();
    assert!(modal.view().shown.get());
    assert!(!modal.handle(ModalEvent::CloseButton));
    assert!(!modal.view().shown.get());
    // already closed is harmless
    assert!(!modal.handle(ModalEvent::CloseButton));
}

#[test]
fn backdrop_click_closes_but_content_click_does_not() {
    let modal = open_modal();
    assert!(modal.handle(ModalEvent::BackdropClick { on_backdrop: false }));
    assert!(modal.view().shown.get());
    assert!(!modal.handle(ModalEvent::BackdropClick { on_backdrop: true }));
    assert!(!modal.view().shown.get());
}

#[test]
fn escape_only_acts_when_shown() {
    let modal = Rc::new(Modal::new(FakeModal::default()));
    assert!(!modal.handle(ModalEvent::Escape));
    modal.handle(ModalEvent::Open);
    assert!(!modal.handle(ModalEvent::Escape));
    assert!(!modal.view().shown.get());
}

#[test]
fn file_selection_updates_label_and_flag() {
    let modal = open_modal();
    modal.select_file(Some("resume.pdf"));
    assert_eq!(
        modal.view().file.borrow().clone(),
        Some(FileDisplay {
            label: "resume.pdf".to_string(),
            has_file: true
        })
    );
    modal.select_file(None);
    assert_eq!(modal.view().file.borrow().clone(), Some(FileDisplay::empty()));
    assert_eq!(FileDisplay::empty().label, NO_FILE_LABEL);
}

#[test]
fn remove_file_clears_input_and_display() {
    let modal = open_modal();
    modal.select_file(Some("cv.docx"));
    modal.remove_file();
    assert!(modal.view().input_cleared.get());
    let file = modal.view().file.borrow().clone();
    assert_eq!(file, Some(FileDisplay::empty()));
}

#[test]
fn submit_locks_button_until_delay_elapses() {
    let timer = VirtualTimer::new();
    let modal = open_modal();
    modal.select_file(Some("cv.pdf"));
    modal.submit(&timer);

    assert_eq!(
        modal.view().submit.borrow().clone(),
        Some(SubmitState::submitting())
    );
    timer.advance(SUBMIT_DELAY_MS as u64 - 1);
    assert!(modal.view().alerts.borrow().is_empty());
    assert!(modal.view().shown.get());

    timer.advance(1);
    assert_eq!(*modal.view().alerts.borrow(), vec![THANK_YOU_MESSAGE.to_string()]);
    assert_eq!(modal.view().resets.get(), 1);
    assert_eq!(modal.view().file.borrow().clone(), Some(FileDisplay::empty()));
    assert!(!modal.view().shown.get());
    let restored = modal.view().submit.borrow().clone().unwrap();
    assert!(!restored.disabled);
    assert_eq!(restored.label, SUBMIT_LABEL);
}

#[test]
fn submit_state_labels() {
    assert_eq!(SubmitState::submitting().label, "Submitting...");
    assert!(SubmitState::submitting().disabled);
    assert_eq!(SubmitState::idle().label, "Submit Application");
}
